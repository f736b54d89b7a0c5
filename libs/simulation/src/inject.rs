//! Error injection modes
//!
//! A mode is a fixed probability of replacing an operation with a
//! synthetic [`ServiceError`](types::errors::ServiceError). `Force` is
//! special: it fires only while a forced error is armed in the harness,
//! and that error is consumed by exactly one injection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named probability level governing synthetic failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Never inject
    Off,
    /// Occasional background failures
    Low,
    /// Noticeably flaky
    Medium,
    /// Deliver the armed forced error on the next call
    Force,
}

impl ErrorMode {
    /// Fixed injection probability for this mode
    pub const fn probability(&self) -> f64 {
        match self {
            ErrorMode::Off => 0.0,
            ErrorMode::Low => 0.02,
            ErrorMode::Medium => 0.06,
            ErrorMode::Force => 1.0,
        }
    }

    /// Configuration tag for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorMode::Off => "off",
            ErrorMode::Low => "low",
            ErrorMode::Medium => "medium",
            ErrorMode::Force => "force",
        }
    }

    /// Parse a configuration tag; unknown tags are None, not errors
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "off" => Some(ErrorMode::Off),
            "low" => Some(ErrorMode::Low),
            "medium" => Some(ErrorMode::Medium),
            "force" => Some(ErrorMode::Force),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
