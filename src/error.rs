//! Error types and handling infrastructure for pagetour.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary layers `anyhow` on top for context at the CLI boundary.
//!
//! Note that the paging core itself never surfaces errors to its drivers: out-of-range page
//! requests are swallowed. The variants here cover catalog construction, configuration,
//! and terminal I/O.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pagetour operations.
#[derive(Error, Debug)]
pub enum TourError {
    /// File system related errors (config file unreadable, log file not creatable, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A catalog must contain at least one page
    #[error("Page catalog is empty")]
    EmptyCatalog,

    /// The catalog exceeds the number of pages the indicator can address
    #[error("Page catalog has {count} pages, at most {max} are supported")]
    TooManyPages { count: usize, max: usize },

    /// Lookup of a catalog index outside `[0, len)`
    #[error("Page index {index} is out of range for a catalog of {len} pages")]
    IndexOutOfRange { index: usize, len: usize },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration file could not be parsed or failed validation
    #[error("Configuration error in {path}: {message}")]
    ConfigError { path: PathBuf, message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for pagetour operations.
pub type Result<T> = std::result::Result<T, TourError>;

impl TourError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError tied to the file it came from
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Terminal setup and drawing report io::Error; fold them into FileError with a coarse message.
impl From<std::io::Error> for TourError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(TourError::EmptyCatalog.to_string(), "Page catalog is empty");

        let too_many = TourError::TooManyPages { count: 12, max: 9 };
        assert_eq!(
            too_many.to_string(),
            "Page catalog has 12 pages, at most 9 are supported"
        );

        let out_of_range = TourError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            out_of_range.to_string(),
            "Page index 4 is out of range for a catalog of 2 pages"
        );

        let config = TourError::config("/tmp/config.toml", "tick_ms must be positive");
        assert_eq!(
            config.to_string(),
            "Configuration error in /tmp/config.toml: tick_ms must be positive"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            TourError::ui("Terminal resize failed"),
            TourError::UIError { .. }
        ));
        assert!(matches!(
            TourError::invalid_argument("--tick-ms 0"),
            TourError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: TourError = io_err.into();

        match err {
            TourError::FileError { message, .. } => assert_eq!(message, "Permission denied"),
            _ => panic!("Expected FileError variant"),
        }
    }
}
