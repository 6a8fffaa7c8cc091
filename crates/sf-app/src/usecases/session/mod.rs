//! Session bootstrap use cases
//!
//! Everything that runs between process start and the first committed
//! screen: local-store migration, tri-state flag reads with corruption
//! recovery, and the identity-driven screen resolution loop.

mod bootstrap;
mod flags;
mod migrate_storage;

pub use bootstrap::SessionBootstrap;
pub use flags::read_flag;
pub use migrate_storage::{MigrateLocalStore, MigrationOutcome};
