//! Structured errors and the non-empty error sequence
//!
//! A failed [`Outcome`](crate::Outcome) holds an [`Errors`] value: one or more
//! [`StructuredError`]s in the order they were reported. The sequence is
//! reference-counted, so propagating it through a chain never copies it.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;

use crate::kind::ErrorKind;

/// Message used when a failure is built from an empty error list
pub const DEFAULT_UNKNOWN_ERROR_MESSAGE: &str = "Unknown error message!";

/// One failure cause: a human-readable message and its kind
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct StructuredError {
    message: String,
    #[serde(default)]
    kind: ErrorKind,
}

impl StructuredError {
    /// Create an error of kind [`ErrorKind::BadRequest`]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(message, ErrorKind::default())
    }

    /// Create an error of the given kind
    pub fn with_kind(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// The error substituted for an empty error list
    pub fn unknown() -> Self {
        Self::with_kind(DEFAULT_UNKNOWN_ERROR_MESSAGE, ErrorKind::Unspecified)
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Categorical kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Ordered, never-empty sequence of [`StructuredError`]s
///
/// Dereferences to a slice, so `errors[0]`, `errors.len()` and
/// `errors.iter()` work as usual.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("{}", render(.0))]
#[serde(from = "Vec<StructuredError>", into = "Vec<StructuredError>")]
pub struct Errors(Arc<[StructuredError]>);

fn render(errors: &[StructuredError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Errors {
    /// Build a sequence, keeping the given order
    ///
    /// An empty input is replaced by the single [`StructuredError::unknown`].
    pub fn new<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = StructuredError>,
    {
        let errors: Vec<StructuredError> = errors.into_iter().collect();
        if errors.is_empty() {
            tracing::debug!("empty error list normalized to unknown error");
            return Self::unknown();
        }
        Self(errors.into())
    }

    /// A sequence holding exactly one error
    pub fn single(error: StructuredError) -> Self {
        Self(Arc::from([error]))
    }

    /// A sequence holding only [`StructuredError::unknown`]
    pub fn unknown() -> Self {
        Self::single(StructuredError::unknown())
    }

    /// First reported error; always present
    pub fn first(&self) -> &StructuredError {
        &self.0[0]
    }

    /// Kinds of all errors, in order
    pub fn kinds(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.0.iter().map(StructuredError::kind)
    }

    /// Whether two sequences are the same shared allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Errors {
    type Target = [StructuredError];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a StructuredError;
    type IntoIter = std::slice::Iter<'a, StructuredError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<StructuredError> for Errors {
    fn from(error: StructuredError) -> Self {
        Self::single(error)
    }
}

impl From<Vec<StructuredError>> for Errors {
    fn from(errors: Vec<StructuredError>) -> Self {
        Self::new(errors)
    }
}

impl From<Errors> for Vec<StructuredError> {
    fn from(errors: Errors) -> Self {
        errors.0.to_vec()
    }
}
