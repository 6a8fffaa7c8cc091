//! Tri-state persisted flag.
//!
//! The local store keeps these as the literal strings `"true"` / `"false"`,
//! or not at all. That encoding is a store-boundary detail; everywhere else
//! the flag is this three-variant enum.

use serde::{Deserialize, Serialize};

/// A persisted yes/no answer that may not have been given yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    True,
    False,
    /// Key absent, or recovered from a corrupt value.
    Unset,
}

impl Flag {
    /// Decode a raw stored value.
    ///
    /// Returns `None` for anything outside the `"true"` / `"false"` domain;
    /// the caller treats that as corruption and removes the key.
    pub fn from_stored(raw: &str) -> Option<Flag> {
        match raw {
            "true" => Some(Flag::True),
            "false" => Some(Flag::False),
            _ => None,
        }
    }

    /// Encode for the store. `Unset` has no encoding: it is the absence of
    /// the key.
    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Flag::True => Some("true"),
            Flag::False => Some("false"),
            Flag::Unset => None,
        }
    }

    pub fn is_true(self) -> bool {
        self == Flag::True
    }
}

impl Default for Flag {
    fn default() -> Self {
        Flag::Unset
    }
}
