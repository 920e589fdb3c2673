//! Error types for the employee directory.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can cross a module boundary. Derivation and
//! validation never produce these: missing data degrades to sentinel values
//! and form problems are reported as [`ValidationErrors`].

use thiserror::Error;

use crate::validation::ValidationErrors;

/// The main error type for the employee directory.
///
/// # Example
///
/// ```
/// use employee_directory::error::DirectoryError;
///
/// let error = DirectoryError::EmployeeNotFound {
///     id: "emp_42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_42");
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The data source has no employee with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was requested.
        id: String,
    },

    /// The data source could not be reached or the connection failed mid-request.
    #[error("Transport error: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },

    /// The data source answered with a non-success HTTP status.
    #[error("Data source returned {status}: {message}")]
    Remote {
        /// The HTTP status code.
        status: u16,
        /// The message reported by the data source.
        message: String,
    },

    /// The data source answered successfully at the HTTP level but reported
    /// the operation as failed in its envelope.
    #[error("Data source rejected the request: {message}")]
    Rejected {
        /// The envelope message.
        message: String,
        /// Additional error strings from the envelope.
        errors: Vec<String>,
    },

    /// The data source response could not be decoded.
    #[error("Invalid response from data source: {message}")]
    InvalidResponse {
        /// A description of the decoding failure.
        message: String,
    },

    /// Submitted form values failed validation.
    #[error("Validation failed for {} field(s)", .errors.len())]
    Validation {
        /// Per-field error messages.
        errors: ValidationErrors,
    },
}

impl DirectoryError {
    /// Returns true for failures caused by talking to the data source.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DirectoryError::Transport { .. }
                | DirectoryError::Remote { .. }
                | DirectoryError::Rejected { .. }
                | DirectoryError::InvalidResponse { .. }
        )
    }
}

/// A type alias for Results that return DirectoryError.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
