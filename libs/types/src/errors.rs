//! Synthetic service error taxonomy
//!
//! Injected errors are plain structured values distinguished by shape,
//! not by language exception type. UI demos match on `code` and
//! `retryable` to drive the corresponding error state.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Wire-level error code carried by every synthetic failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NetworkError,
    RateLimit,
    ServiceError,
    ValidationError,
    NotFound,
    Unauthorized,
}

impl ErrorCode {
    /// Wire string for this code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::RateLimit => "RATE_LIMIT",
            ErrorCode::ServiceError => "SERVICE_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
        }
    }

    /// Canned user-facing message for this code
    pub fn canned_message(&self) -> &'static str {
        match self {
            ErrorCode::NetworkError => {
                "Network connection failed. Check your connection and try again."
            }
            ErrorCode::RateLimit => "Too many requests. Please wait a moment before retrying.",
            ErrorCode::ServiceError => "Something went wrong on our end. Please try again.",
            ErrorCode::ValidationError => "The submitted data failed validation.",
            ErrorCode::NotFound => "The requested item could not be found.",
            ErrorCode::Unauthorized => "You are not authorized to perform this action.",
        }
    }

    /// Retryability comes from a fixed allow-list of transient codes
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCode::NetworkError | ErrorCode::RateLimit | ErrorCode::ServiceError
        )
    }

    /// Parse a wire string back into a code
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NETWORK_ERROR" => Some(ErrorCode::NetworkError),
            "RATE_LIMIT" => Some(ErrorCode::RateLimit),
            "SERVICE_ERROR" => Some(ErrorCode::ServiceError),
            "VALIDATION_ERROR" => Some(ErrorCode::ValidationError),
            "NOT_FOUND" => Some(ErrorCode::NotFound),
            "UNAUTHORIZED" => Some(ErrorCode::Unauthorized),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured synthetic service failure
///
/// `retryable` is derived from the code's allow-list at construction,
/// but remains an independent field so forced errors can carry any
/// combination a test wants to exercise.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ServiceError {
    pub code: ErrorCode,
    pub message: String,
    pub retryable: bool,
}

impl ServiceError {
    /// Build an error from a code using the canned message table
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.canned_message().to_string(),
            retryable: code.is_retryable(),
        }
    }

    /// Build an error with a custom message, keeping table retryability
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            retryable: code.is_retryable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_strings() {
        assert_eq!(ErrorCode::NetworkError.as_str(), "NETWORK_ERROR");
        assert_eq!(ErrorCode::RateLimit.as_str(), "RATE_LIMIT");
        assert_eq!(ErrorCode::ServiceError.as_str(), "SERVICE_ERROR");
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::Unauthorized.as_str(), "UNAUTHORIZED");
    }

    #[test]
    fn test_error_code_parse_roundtrip() {
        for code in [
            ErrorCode::NetworkError,
            ErrorCode::RateLimit,
            ErrorCode::ServiceError,
            ErrorCode::ValidationError,
            ErrorCode::NotFound,
            ErrorCode::Unauthorized,
        ] {
            assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
        }
        assert_eq!(ErrorCode::parse("TEAPOT"), None);
    }

    #[test]
    fn test_retryable_allow_list() {
        assert!(ErrorCode::NetworkError.is_retryable());
        assert!(ErrorCode::RateLimit.is_retryable());
        assert!(ErrorCode::ServiceError.is_retryable());
        assert!(!ErrorCode::ValidationError.is_retryable());
        assert!(!ErrorCode::NotFound.is_retryable());
        assert!(!ErrorCode::Unauthorized.is_retryable());
    }

    #[test]
    fn test_from_code_uses_canned_message() {
        let err = ServiceError::from_code(ErrorCode::RateLimit);
        assert_eq!(err.code, ErrorCode::RateLimit);
        assert_eq!(err.message, ErrorCode::RateLimit.canned_message());
        assert!(err.retryable);
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = ServiceError::from_code(ErrorCode::NotFound);
        let rendered = err.to_string();
        assert!(rendered.contains("NOT_FOUND"));
        assert!(rendered.contains("could not be found"));
    }

    #[test]
    fn test_serialization_shape() {
        let err = ServiceError::from_code(ErrorCode::NetworkError);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"NETWORK_ERROR\""));
        assert!(json.contains("\"retryable\":true"));

        let back: ServiceError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
