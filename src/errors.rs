//! Shared error types for array-utils.
//!
//! The sequence operations themselves have a single failure mode,
//! [`Error::InvalidArgument`], raised when `chunk` is handed a size that
//! cannot partition anything. Absent results (`find_max` on an empty slice)
//! and the zero average of an empty slice are NOT errors and never show up
//! here.
//!
//! # Example
//!
//! ```rust
//! use array_utils::{chunk, Error};
//!
//! let err = chunk(&[1, 2, 3], 0).unwrap_err();
//! assert!(matches!(err, Error::InvalidArgument { .. }));
//! assert_eq!(err.category(), "invalid-argument");
//! ```

use thiserror::Error;

/// Main error type for array-utils operations
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was outside the range the operation accepts
    #[error("Invalid argument `{argument}`: {message}")]
    InvalidArgument { argument: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML decoding errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an invalid-argument error for the named argument
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Short machine-friendly category, used in JSON output.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid-argument",
            Self::Config(_) | Self::Toml(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
