//! # StayFinder
//!
//! Workspace facade: re-exports the domain core, the use cases, and the
//! adapters, and owns the `App` assembly that wires them together.

pub mod app;
pub mod logging;

pub use app::{App, AppDeps};
pub use sf_core::config::AppConfig;
pub use sf_core::session::ScreenState;
