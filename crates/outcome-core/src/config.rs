//! Status mapping configuration
//!
//! Transport layers translate an [`ErrorKind`] into a numeric status. The
//! default mapping uses the conventional codes from
//! [`ErrorKind::status_code`]; a YAML document can override individual kinds.
//!
//! # Example
//!
//! ```yaml
//! overrides:
//!   CRITICAL_ERROR: 503
//!   UNSPECIFIED: 520
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::kind::ErrorKind;
use crate::outcome::Outcome;

/// Status mapping document as written in YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusMappingConfig {
    /// Per-kind status codes replacing the defaults
    #[serde(default)]
    pub overrides: HashMap<ErrorKind, u16>,
}

/// Resolved mapping from every [`ErrorKind`] to a status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMapping {
    codes: HashMap<ErrorKind, u16>,
}

impl Default for StatusMapping {
    fn default() -> Self {
        Self {
            codes: ErrorKind::ALL
                .into_iter()
                .map(|kind| (kind, kind.status_code()))
                .collect(),
        }
    }
}

impl StatusMapping {
    /// Parse a mapping from a YAML document
    ///
    /// Kinds not listed under `overrides` keep their default code.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: StatusMappingConfig = serde_yaml::from_str(yaml)?;
        Self::from_config(&config)
    }

    /// Resolve a parsed configuration against the defaults
    pub fn from_config(config: &StatusMappingConfig) -> Result<Self> {
        let mut mapping = Self::default();
        mapping.codes.extend(config.overrides.iter().map(|(k, v)| (*k, *v)));
        mapping.validate()?;

        tracing::debug!(overrides = config.overrides.len(), "resolved status mapping");
        Ok(mapping)
    }

    /// Replace the code for one kind
    pub fn with_override(mut self, kind: ErrorKind, code: u16) -> Result<Self> {
        self.codes.insert(kind, code);
        self.validate()?;
        Ok(self)
    }

    /// Status code for `kind`
    pub fn status_of(&self, kind: ErrorKind) -> u16 {
        self.codes
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.status_code())
    }

    /// Kind mapped to `code`, if any
    pub fn kind_of(&self, code: u16) -> Option<ErrorKind> {
        ErrorKind::ALL
            .into_iter()
            .find(|kind| self.status_of(*kind) == code)
    }

    /// Status code for a failed outcome, taken from its first error
    ///
    /// Returns `None` for a success.
    pub fn status_of_outcome<T>(&self, outcome: &Outcome<T>) -> Option<u16> {
        outcome
            .errors()
            .map(|errors| self.status_of(errors.first().kind()))
    }

    fn validate(&self) -> Result<()> {
        let mut seen: HashMap<u16, ErrorKind> = HashMap::new();
        for kind in ErrorKind::ALL {
            let code = self.status_of(kind);
            if let Some(other) = seen.insert(code, kind) {
                return Err(Error::ConfigInvalid {
                    message: format!("{other} and {kind} both map to status code {code}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping() {
        let mapping = StatusMapping::default();
        assert_eq!(mapping.status_of(ErrorKind::Unauthorized), 401);
        assert_eq!(mapping.status_of(ErrorKind::NotFound), 404);
        assert_eq!(mapping.kind_of(500), Some(ErrorKind::CriticalError));
        assert_eq!(mapping.kind_of(418), None);
    }

    #[test]
    fn test_parse_overrides() {
        let yaml = r#"
overrides:
  CRITICAL_ERROR: 503
  UNSPECIFIED: 520
"#;
        let mapping = StatusMapping::from_yaml(yaml).unwrap();
        assert_eq!(mapping.status_of(ErrorKind::CriticalError), 503);
        assert_eq!(mapping.status_of(ErrorKind::Unspecified), 520);
        assert_eq!(mapping.status_of(ErrorKind::BadRequest), 400);
        assert_eq!(mapping.kind_of(503), Some(ErrorKind::CriticalError));
        assert_eq!(mapping.kind_of(500), None);
    }

    #[test]
    fn test_parse_empty_document() {
        let mapping = StatusMapping::from_yaml("{}").unwrap();
        assert_eq!(mapping, StatusMapping::default());
    }

    #[test]
    fn test_parse_unknown_kind() {
        let yaml = "overrides:\n  TEAPOT: 418\n";
        let err = StatusMapping::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let yaml = "overrides:\n  FORBIDDEN: 401\n";
        let err = StatusMapping::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.to_string().contains("status code 401"));
    }

    #[test]
    fn test_with_override() {
        let mapping = StatusMapping::default()
            .with_override(ErrorKind::NotFound, 410)
            .unwrap();
        assert_eq!(mapping.status_of(ErrorKind::NotFound), 410);

        let err = mapping
            .with_override(ErrorKind::Forbidden, 410)
            .unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_status_of_outcome() {
        let mapping = StatusMapping::default();
        let missing: Outcome<i32> = Outcome::maybe(None);
        assert_eq!(mapping.status_of_outcome(&missing), Some(404));
        assert_eq!(mapping.status_of_outcome(&Outcome::successful(1)), None);
    }
}
