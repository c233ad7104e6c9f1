//! Repository layer for execution records

pub mod execution_repo;

pub use execution_repo::{Execution, ExecutionRepo, NewExecution};
