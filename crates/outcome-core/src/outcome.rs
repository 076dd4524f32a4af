//! The [`Outcome`] container
//!
//! An outcome is either a success holding a value or a failure holding an
//! [`Errors`] sequence. It is never both and never neither. Outcomes are not
//! mutated after construction: [`Outcome::map`] and [`Outcome::bind`] consume
//! the receiver and return a new outcome, and [`Outcome::as_ref`] lets callers
//! chain from a borrowed outcome while keeping the original.
//!
//! # Chaining
//!
//! ```rust
//! use outcome_core::{ErrorKind, Outcome};
//!
//! let length = Outcome::successful("Bruno")
//!     .map(|name| name.len())
//!     .bind(|len| {
//!         if len > 2 {
//!             Outcome::successful(len - 2)
//!         } else {
//!             Outcome::failure("name too short")
//!         }
//!     });
//! assert_eq!(length.value(), Some(&3));
//!
//! let missing: Outcome<usize> = Outcome::maybe(None);
//! let chained = missing.map(|len| len * 2);
//! assert_eq!(chained.errors().unwrap().first().kind(), ErrorKind::NotFound);
//! ```
//!
//! # Panics inside transforms
//!
//! `map` runs its transform behind a panic boundary: a panic becomes a
//! [`ErrorKind::BadRequest`] failure carrying the panic message. `bind` does
//! not: its function already reports failure through the `Outcome` it returns,
//! so a panic there is a bug and keeps unwinding to the caller. The panic
//! boundary relies on unwinding and has no effect under `panic = "abort"`.

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use crate::failure::{Errors, StructuredError};
use crate::kind::ErrorKind;

/// Message used by [`Outcome::maybe`] when the value is absent
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Value not found!";

/// Message used when a transform panics with a payload that is not a string
pub const NON_STRING_PANIC_MESSAGE: &str = "transform panicked with a non-string payload";

/// Either a successful value or one or more structured errors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<T> {
    /// The operation succeeded with a value
    Success(T),
    /// The operation failed; the sequence is never empty
    Failure(Errors),
}

impl Outcome<bool> {
    /// A success with no meaningful value
    ///
    /// Holds `true`: "nothing to return" counts as having trivially
    /// succeeded. Use [`Outcome::maybe`] when absence should be a failure.
    pub fn success() -> Self {
        Self::Success(true)
    }
}

impl<T> Outcome<T> {
    /// A success holding `value`
    pub fn successful(value: T) -> Self {
        Self::Success(value)
    }

    /// A failure with one [`ErrorKind::BadRequest`] error
    pub fn failure(message: impl Into<String>) -> Self {
        Self::failure_with_kind(message, ErrorKind::default())
    }

    /// A failure with one error of the given kind
    pub fn failure_with_kind(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self::Failure(Errors::single(StructuredError::with_kind(message, kind)))
    }

    /// A failure with the given errors, in order
    ///
    /// No errors at all (an empty list, or `None`) yields the single
    /// unknown error, see [`StructuredError::unknown`].
    pub fn failures<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = StructuredError>,
    {
        Self::Failure(Errors::new(errors))
    }

    /// A failure holding only the unknown error
    pub fn unknown() -> Self {
        Self::Failure(Errors::unknown())
    }

    /// A success if `value` is present, otherwise a [`ErrorKind::NotFound`]
    /// failure with [`DEFAULT_NOT_FOUND_MESSAGE`]
    pub fn maybe(value: Option<T>) -> Self {
        Self::maybe_or(value, DEFAULT_NOT_FOUND_MESSAGE)
    }

    /// Like [`Outcome::maybe`] with a custom not-found message
    pub fn maybe_or(value: Option<T>, not_found_message: impl Into<String>) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::failure_with_kind(not_found_message, ErrorKind::NotFound),
        }
    }

    /// Whether this is a success
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this is a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, `None` for a failure
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The errors, `None` for a success
    pub fn errors(&self) -> Option<&Errors> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Consume into the success value
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consume into the errors
    pub fn into_errors(self) -> Option<Errors> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// The success value, or `default` for a failure
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Borrow as an `Outcome<&T>`; a failure shares the same error sequence
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(errors) => Outcome::Failure(errors.clone()),
        }
    }

    /// Transform the success value
    ///
    /// A failure is passed through unchanged and `f` is not called. If `f`
    /// panics, the panic is caught and the result is a
    /// [`ErrorKind::BadRequest`] failure whose message is the panic message.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        let value = match self {
            Self::Success(value) => value,
            Self::Failure(errors) => return short_circuit("map", errors),
        };

        // Only `value` crosses the boundary and it is consumed either way.
        match panic::catch_unwind(AssertUnwindSafe(move || f(value))) {
            Ok(mapped) => Outcome::Success(mapped),
            Err(payload) => {
                let message = panic_message(payload);
                tracing::debug!(error = %message, "map transform panicked");
                Outcome::failure(message)
            }
        }
    }

    /// Transform the success value with a fallible function
    ///
    /// An `Err(e)` from `f` becomes a [`ErrorKind::BadRequest`] failure with
    /// `e.to_string()` as its message.
    pub fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        E: Display,
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Success(value) => match f(value) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(err) => {
                    tracing::debug!(error = %err, "try_map transform failed");
                    Outcome::failure(err.to_string())
                }
            },
            Self::Failure(errors) => short_circuit("try_map", errors),
        }
    }

    /// Chain an operation that itself returns an outcome
    ///
    /// A failure is passed through unchanged and `f` is not called.
    /// Otherwise the outcome returned by `f` is returned as is. Panics in
    /// `f` are not caught.
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => short_circuit("bind", errors),
        }
    }

    /// Convert into a standard `Result`, for use with `?`
    pub fn into_result(self) -> Result<T, Errors> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }
}

fn short_circuit<U>(operation: &'static str, errors: Errors) -> Outcome<U> {
    tracing::trace!(operation, errors = errors.len(), "skipped on failed outcome");
    Outcome::Failure(errors)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => (*message).to_string(),
            Err(_) => NON_STRING_PANIC_MESSAGE.to_string(),
        },
    }
}

impl<T> From<Outcome<T>> for Result<T, Errors> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Errors>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err.into()),
        }
    }
}

impl<T> From<StructuredError> for Outcome<T> {
    fn from(error: StructuredError) -> Self {
        Self::Failure(Errors::single(error))
    }
}

impl<T> From<Errors> for Outcome<T> {
    fn from(errors: Errors) -> Self {
        Self::Failure(errors)
    }
}

/// Collect independent outcomes
///
/// Succeeds with every value in order when all items succeed. Otherwise
/// fails with the errors of every failed item, in order.
impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors: Vec<StructuredError> = Vec::new();
        for outcome in iter {
            match outcome {
                Outcome::Success(value) if errors.is_empty() => values.push(value),
                Outcome::Success(_) => {}
                Outcome::Failure(failed) => errors.extend(failed.iter().cloned()),
            }
        }
        if errors.is_empty() {
            Outcome::Success(values)
        } else {
            Outcome::Failure(Errors::new(errors))
        }
    }
}
