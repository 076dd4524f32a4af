//! Error types for outcome-core
//!
//! These cover the crate's own fallible operations (parsing kind identifiers,
//! loading status mappings). They are not part of the [`Outcome`](crate::Outcome)
//! error model, which carries [`StructuredError`](crate::StructuredError)s instead.

use thiserror::Error;

/// Result type alias for outcome-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in outcome-core
#[derive(Error, Debug)]
pub enum Error {
    /// Identifier does not name an error kind
    #[error("unknown error kind: {name}")]
    UnknownKind {
        /// Identifier that was looked up
        name: String,
    },

    /// Numeric code has no associated error kind
    #[error("no error kind for status code {code}")]
    UnknownStatusCode {
        /// Code that was looked up
        code: u16,
    },

    /// Failed to parse a status mapping document
    #[error("failed to parse status mapping: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Status mapping is well-formed but not usable
    #[error("invalid status mapping: {message}")]
    ConfigInvalid {
        /// Description of what's invalid
        message: String,
    },
}
