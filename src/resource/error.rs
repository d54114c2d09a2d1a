use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code attached to lookups that found nothing.
pub const NOT_FOUND: &str = "not_found";

/// Opaque description of a failed fetch, kept as data in
/// [`ResourceStatus::Failure`](super::ResourceStatus::Failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ErrorInfo {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_code(message, NOT_FOUND)
    }

    pub fn is_not_found(&self) -> bool {
        self.code.as_deref() == Some(NOT_FOUND)
    }
}

/// Errors returned when a load cannot start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Another load is still outstanding and the policy rejects overlap.
    #[error("request #{in_flight} is still loading")]
    Busy { in_flight: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_code() {
        let err = ErrorInfo::not_found("User not found");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found");
        assert!(!ErrorInfo::new("boom").is_not_found());
    }

    #[test]
    fn deserializes_without_code() {
        let err: ErrorInfo = serde_json::from_str(r#"{"message":"Server error"}"#).unwrap();
        assert_eq!(err, ErrorInfo::new("Server error"));
    }
}
