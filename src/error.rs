//! Error types for the Ruya library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RuyaError`] enum. The matching core itself never fails: errors only
//! arise while loading datasets, building configurable analysis components
//! or validating configuration.
//!
//! # Examples
//!
//! ```
//! use ruya::error::{RuyaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RuyaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Ruya operations.
#[derive(Error, Debug)]
pub enum RuyaError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The dataset file does not exist.
    #[error("Dataset file not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    /// The dataset exists but could not be read or parsed.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Analysis-related errors (tokenizer patterns, char filter tables, synonyms)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RuyaError.
pub type Result<T> = std::result::Result<T, RuyaError>;

impl RuyaError {
    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        RuyaError::Dataset(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RuyaError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RuyaError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RuyaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RuyaError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Process exit code used by the command line front end.
    ///
    /// A missing dataset exits with 2, an unreadable one with 3 and
    /// everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            RuyaError::DatasetNotFound(_) => 2,
            RuyaError::Dataset(_) => 3,
            _ => 1,
        }
    }
}
