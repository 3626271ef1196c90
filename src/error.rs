//! Error types for library loading
//!
//! A module name that belongs to someone else is not an error; resolvers
//! report it as `Ok(None)`. Everything here is a real failure.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running the loader
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The native library could not be loaded from the computed path
    #[error("Failed to load native library from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// No registered handler resolved the module
    #[error("Could not resolve module: {0}")]
    NotResolved(String),

    /// The process-wide loader was configured after it had been created
    #[error("Global loader is already initialized")]
    AlreadyInitialized,

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parsing error from serde_json
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

impl From<String> for LoaderError {
    fn from(s: String) -> Self {
        LoaderError::Other(s)
    }
}

impl From<&str> for LoaderError {
    fn from(s: &str) -> Self {
        LoaderError::Other(s.to_string())
    }
}
