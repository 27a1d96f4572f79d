//! # Error Types
//!
//! This module defines the error type shared by the mutation operators and the
//! progress observers. Errors fall into two families: configuration errors,
//! raised when an operator, solution or observer is constructed with invalid
//! parameters, and contract violations, raised when an observer and the loop
//! publishing to it disagree about the fields of a progress event.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use moealg::error::{MoeaError, Result};
//!
//! fn check_probability(value: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&value) {
//!         return Err(MoeaError::Configuration(format!(
//!             "probability must be between 0.0 and 1.0, got: {}",
//!             value
//!         )));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(check_probability(0.5).is_ok());
//! assert!(check_probability(1.5).unwrap_err().is_configuration());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use moealg::error::{Result, ResultExt};
//! use std::fs;
//!
//! fn list_front_files(path: &str) -> Result<usize> {
//!     let entries = fs::read_dir(path).context("Failed to read output directory")?;
//!     Ok(entries.count())
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur in the operators and observers of this library.
#[derive(Error, Debug)]
pub enum MoeaError {
    /// An operator, solution or observer was constructed with an invalid parameter.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A variable's lower bound is greater than its upper bound.
    #[error("Configuration error: invalid bounds for variable {index}: lower bound {lower} is greater than upper bound {upper}")]
    InvalidBounds {
        index: usize,
        lower: String,
        upper: String,
    },

    /// An observer required an event field the publisher did not provide.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

impl MoeaError {
    /// Returns `true` for errors raised while validating configuration,
    /// including invalid bounds.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MoeaError::Configuration(_) | MoeaError::InvalidBounds { .. }
        )
    }

    /// Returns `true` when an observer's event contract was broken.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, MoeaError::ContractViolation(_))
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, MoeaError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use moealg::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> moealg::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `MoeaError` carrying the provided context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| MoeaError::Other(format!("{}: {}", context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_configuration_classification() {
        assert!(MoeaError::Configuration("bad".to_string()).is_configuration());
        assert!(MoeaError::InvalidBounds {
            index: 0,
            lower: "2".to_string(),
            upper: "1".to_string(),
        }
        .is_configuration());
        assert!(!MoeaError::ContractViolation("missing".to_string()).is_configuration());
        assert!(MoeaError::ContractViolation("missing".to_string()).is_contract_violation());
    }

    #[test]
    fn test_invalid_bounds_message() {
        let error = MoeaError::InvalidBounds {
            index: 3,
            lower: "5".to_string(),
            upper: "1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("variable 3"));
        assert!(message.contains("lower bound 5"));
    }

    #[test]
    fn test_context_wraps_io_error() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let error = result.context("Failed to open front file").unwrap_err();
        assert_eq!(error.to_string(), "Failed to open front file: missing");
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(MoeaError::Io(_))));
    }
}
