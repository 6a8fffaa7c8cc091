//! StayFinder Application Orchestration Layer
//!
//! This crate contains business logic use cases and the session bootstrap
//! that decides the initial screen.

pub mod usecases;

pub use usecases::session::{MigrateLocalStore, MigrationOutcome, SessionBootstrap};
