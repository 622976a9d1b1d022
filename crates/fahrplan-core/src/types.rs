//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// An absolute instant was negative.
    #[error("instant must not be negative, got {millis} ms")]
    NegativeInstant { millis: i64 },

    /// An absolute instant is outside the representable range.
    #[error("instant out of range: {millis} ms")]
    InstantOutOfRange { millis: i64 },
}

/// A validated session identifier.
///
/// Assigned by the schedule feed and never regenerated locally. Must be
/// non-empty; uniqueness within a schedule is the feed's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty {
                field: "session ID",
            });
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_rejects_empty() {
        assert_eq!(
            SessionId::new(""),
            Err(ValidationError::Empty {
                field: "session ID"
            })
        );
        assert!(SessionId::new("7771").is_ok());
    }

    #[test]
    fn test_session_id_serde_roundtrip() {
        let id = SessionId::new("V8LUNA").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"V8LUNA\"");
        let parsed: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_session_id_serde_rejects_empty() {
        let result: Result<SessionId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NegativeInstant { millis: -5 };
        assert_eq!(err.to_string(), "instant must not be negative, got -5 ms");
    }
}
