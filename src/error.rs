//! Error types for sqlrun

use std::path::PathBuf;
use thiserror::Error;

/// Result type for sqlrun operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sqlrun
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load script {}: {source}", path.display())]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Execution error: {0}")]
    Execution(#[source] sqlx::Error),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert TOML deserialization errors to sqlrun errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Config(error.to_string())
    }
}
