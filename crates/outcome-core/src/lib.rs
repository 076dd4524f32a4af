//! Outcome Core Library
//!
//! This crate provides an explicit success/failure value for operations that
//! report structured errors instead of panicking or returning sentinels:
//! - [`Outcome`] - success with a value, or failure with one or more errors
//! - [`StructuredError`] - a message paired with an [`ErrorKind`]
//! - [`Errors`] - the ordered, never-empty error sequence of a failure
//! - [`StatusMapping`] - configurable translation of kinds to status codes
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Constructor │────▶│  map / bind │────▶│  Inspect /  │
//! │ (successful,│     │   (chain,   │     │  StatusMap  │
//! │  failure..) │     │  short-cut) │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use outcome_core::{ErrorKind, Outcome, StatusMapping};
//!
//! fn find_user(id: u32) -> Outcome<String> {
//!     let name = (id == 1).then(|| "Joao".to_string());
//!     Outcome::maybe_or(name, "User not found")
//! }
//!
//! let greeting = find_user(1).map(|name| format!("Hello, {name}"));
//! assert_eq!(greeting.value().map(String::as_str), Some("Hello, Joao"));
//!
//! let missing = find_user(2).map(|name| name.len());
//! assert_eq!(missing.errors().unwrap().first().kind(), ErrorKind::NotFound);
//! assert_eq!(StatusMapping::default().status_of_outcome(&missing), Some(404));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod failure;
pub mod kind;
pub mod outcome;

pub use config::{StatusMapping, StatusMappingConfig};
pub use error::{Error, Result};
pub use failure::{DEFAULT_UNKNOWN_ERROR_MESSAGE, Errors, StructuredError};
pub use kind::ErrorKind;
pub use outcome::{DEFAULT_NOT_FOUND_MESSAGE, NON_STRING_PANIC_MESSAGE, Outcome};
