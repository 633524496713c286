//! Error types for the Portevoix library.
//!
//! This module provides error handling for all Portevoix operations.
//! All errors are represented by the [`PortevoixError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use portevoix::error::{PortevoixError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(PortevoixError::catalog("empty keyword list"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Portevoix operations.
///
/// This enum represents all possible errors that can occur in the Portevoix
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum PortevoixError {
    /// I/O errors (reading a catalog file, writing output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Catalog-related errors (loading, validation)
    #[error("Catalog error: {0}")]
    Catalog(String),

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

/// Result type alias for operations that may fail with PortevoixError.
pub type Result<T> = std::result::Result<T, PortevoixError>;

impl PortevoixError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PortevoixError::Analysis(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        PortevoixError::Catalog(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PortevoixError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PortevoixError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PortevoixError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = PortevoixError::catalog("Test catalog error");
        assert_eq!(error.to_string(), "Catalog error: Test catalog error");

        let error = PortevoixError::invalid_argument("bad input");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let portevoix_error = PortevoixError::from(io_error);

        match portevoix_error {
            PortevoixError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
