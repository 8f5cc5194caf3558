//! Error types for the Fuzzfix library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`FuzzfixError`] enum.
//!
//! # Examples
//!
//! ```
//! use fuzzfix::error::{FuzzfixError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FuzzfixError::invalid_argument("word is absent"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Fuzzfix operations.
#[derive(Error, Debug)]
pub enum FuzzfixError {
    /// I/O errors (reading corpus or dictionary files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required input was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration values that cannot be used together
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An operation that needs at least one element got none
    #[error("Operation on empty collection: {0}")]
    EmptyCollection(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FuzzfixError.
pub type Result<T> = std::result::Result<T, FuzzfixError>;

impl FuzzfixError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FuzzfixError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FuzzfixError::InvalidConfig(msg.into())
    }

    /// Create a new empty collection error.
    pub fn empty_collection<S: Into<String>>(msg: S) -> Self {
        FuzzfixError::EmptyCollection(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FuzzfixError::Other(msg.into())
    }
}
