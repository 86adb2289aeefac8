//! Error handling for InvoiceKit
//!
//! Provides the error taxonomy shared by every layer of the application:
//! - Authentication errors (no signed-in session)
//! - Lookup errors (missing or foreign records)
//! - Format errors (malformed template payloads)
//! - Storage errors (the data-access collaborator failed)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Template payload format error
///
/// Raised when a portable template cannot be imported. The editor surfaces
/// these inline at the import control and leaves the document untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Payload was not valid JSON
    #[error("Template is not valid JSON: {reason}")]
    InvalidJson {
        /// The parser's description of the problem.
        reason: String,
    },

    /// Payload root was not a JSON object
    #[error("Template must be a JSON object")]
    NotAnObject,

    /// The `name` field is absent
    #[error("Template is missing a name")]
    MissingName,

    /// The `elements` field is absent or not an array
    #[error("Template elements must be an array")]
    ElementsNotArray,

    /// One of the elements does not match the element shape
    #[error("Template element {index} is invalid: {reason}")]
    InvalidElement {
        /// Position of the offending element in the array.
        index: usize,
        /// The reason the element was rejected.
        reason: String,
    },
}

/// Main error type for InvoiceKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// No authenticated session
    #[error("Authentication required")]
    AuthRequired,

    /// Record does not exist or is not owned by the current user
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up.
        entity: &'static str,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// Malformed template payload
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Data-access collaborator failed
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable message from the backend.
        message: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a storage error from a backend message
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage {
            message: msg.into(),
        }
    }

    /// Create a not-found error for the given record kind
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Check if the session must be sent back to sign-in
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Error::AuthRequired)
    }

    /// Check if this is a lookup failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is an import format error
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// Check if this is a backend failure
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Format(FormatError::InvalidJson {
            reason: err.to_string(),
        })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
