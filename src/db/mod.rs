//! Database module for sqlrun
//!
//! This module handles database connections and statement execution.

pub mod connection;
pub mod runner;

// Re-export key types
pub use connection::DatabaseConnection;
pub use runner::{StatementExecutor, StatementRunner};
