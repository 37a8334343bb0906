//! Error types for the plugdesc library.
//!
//! Decoding itself never fails: problems in a document become
//! [`DecodeDiagnostic`](crate::DecodeDiagnostic)s. The errors here cover
//! everything else: schema construction, reading and parsing files, and the
//! tool's own settings.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a plugdesc error.
///
/// # Examples
///
/// ```
/// use plugdesc::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the plugdesc library.
#[derive(Debug, Error)]
pub enum Error {
    /// A schema rule does not fit the record it was built against.
    #[error("schema rule '{key}' does not match record field '{field}': {reason}")]
    SchemaFieldMismatch {
        /// Key of the offending rule.
        key: String,
        /// Target field named by the rule.
        field: String,
        /// Why the binding failed.
        reason: String,
    },

    /// Two schema rules share the same key.
    #[error("duplicate schema rule for key '{key}'")]
    DuplicateRule {
        /// The repeated key.
        key: String,
    },

    /// The document is not valid YAML.
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        /// Description from the YAML scanner.
        message: String,
        /// Line of the error (1-indexed).
        line: usize,
        /// Column of the error (1-indexed).
        column: usize,
    },

    /// The document's top-level value is not a mapping.
    #[error("expected a mapping at the top level, found {found}")]
    NotAMapping {
        /// Kind of node found instead.
        found: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON serialization error occurred.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },
}

impl Error {
    /// Check if the error comes from a schema that does not fit its record.
    ///
    /// These are programming errors and should stop the program at startup.
    ///
    /// # Examples
    ///
    /// ```
    /// use plugdesc::Error;
    ///
    /// let err = Error::DuplicateRule { key: "name".into() };
    /// assert!(err.is_schema_error());
    /// ```
    #[must_use]
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::SchemaFieldMismatch { .. } | Self::DuplicateRule { .. }
        )
    }

    /// Check if the error is a problem with the document's syntax or shape.
    #[must_use]
    pub fn is_document_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::NotAMapping { .. })
    }
}
