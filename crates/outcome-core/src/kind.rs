//! Error kind classification
//!
//! Every [`StructuredError`](crate::StructuredError) carries one [`ErrorKind`].
//! Kinds are identified by a stable `SCREAMING_SNAKE_CASE` name in every
//! serialized or logged form, and map onto conventional status codes for
//! transport layers that need them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Categorical classification of a failure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// No classification available
    Unspecified,
    /// The input or request was invalid
    #[default]
    BadRequest,
    /// The caller is not authenticated
    Unauthorized,
    /// The caller is authenticated but not allowed
    Forbidden,
    /// The requested value does not exist
    NotFound,
    /// An unrecoverable internal failure
    CriticalError,
}

impl ErrorKind {
    /// All kinds, in declaration order
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::Unspecified,
        ErrorKind::BadRequest,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::NotFound,
        ErrorKind::CriticalError,
    ];

    /// Stable identifier, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::CriticalError => "CRITICAL_ERROR",
        }
    }

    /// Conventional status code for this kind
    ///
    /// `Unspecified` has no transport meaning and maps to `0`.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unspecified => 0,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::CriticalError => 500,
        }
    }

    /// Reverse of [`ErrorKind::status_code`]
    pub fn from_status_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.status_code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind {
                name: s.to_string(),
            })
    }
}

impl TryFrom<u16> for ErrorKind {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self> {
        Self::from_status_code(code).ok_or(Error::UnknownStatusCode { code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_kind_is_bad_request() {
        assert_eq!(ErrorKind::default(), ErrorKind::BadRequest);
    }

    #[rstest]
    #[case(ErrorKind::Unspecified, "UNSPECIFIED", 0)]
    #[case(ErrorKind::BadRequest, "BAD_REQUEST", 400)]
    #[case(ErrorKind::Unauthorized, "UNAUTHORIZED", 401)]
    #[case(ErrorKind::Forbidden, "FORBIDDEN", 403)]
    #[case(ErrorKind::NotFound, "NOT_FOUND", 404)]
    #[case(ErrorKind::CriticalError, "CRITICAL_ERROR", 500)]
    fn test_identifier_and_status(
        #[case] kind: ErrorKind,
        #[case] name: &str,
        #[case] code: u16,
    ) {
        assert_eq!(kind.as_str(), name);
        assert_eq!(kind.to_string(), name);
        assert_eq!(kind.status_code(), code);
        assert_eq!(name.parse::<ErrorKind>().unwrap(), kind);
        assert_eq!(ErrorKind::try_from(code).unwrap(), kind);
    }

    #[test]
    fn test_parse_unknown_identifier() {
        let err = "not_found".parse::<ErrorKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownKind { name } if name == "not_found"));
    }

    #[test]
    fn test_unknown_status_code() {
        assert_eq!(ErrorKind::from_status_code(418), None);
        let err = ErrorKind::try_from(418).unwrap_err();
        assert!(matches!(err, Error::UnknownStatusCode { code: 418 }));
    }

    #[test]
    fn test_status_codes_are_unique() {
        for kind in ErrorKind::ALL {
            let same_code = ErrorKind::ALL
                .iter()
                .filter(|other| other.status_code() == kind.status_code())
                .count();
            assert_eq!(same_code, 1, "{kind} shares its status code");
        }
    }
}
