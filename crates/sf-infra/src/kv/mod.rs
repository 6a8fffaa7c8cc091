//! Local key-value store adapters.

mod file_store;
mod memory;

pub use file_store::{FileKeyValueStore, DEFAULT_STORE_FILE};
pub use memory::MemoryKeyValueStore;
