//! Error types for hookbell.

use std::io;
use thiserror::Error;

/// Result type alias for hookbell operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a hook event.
///
/// Any of these reaching `main` is a blocking error for the host.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading stdin, writing stdout, or touching the filesystem failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A handler panicked.
    #[error("Handler panicked: {0}")]
    Panicked(String),
}
