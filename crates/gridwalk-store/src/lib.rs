//! gridwalk store - SQLite persistence for execution records
//!
//! Provides:
//! - Connection helpers
//! - Embedded, checksummed schema migrations
//! - The execution repository

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

pub use errors::Result;
pub use repo::{Execution, ExecutionRepo, NewExecution};
