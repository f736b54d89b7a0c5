//! Verification statuses, records, and the code mapping table
//!
//! The demo verification flow resolves a physical tag code against a
//! static mapping table seeded by fixtures. Resolution never fails: a
//! code missing from the table yields `Unrecognized`.

use crate::ids::{RecordId, VerifyCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Authentication verdict a mapped tag code can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerifyStatus {
    Authentic,
    Counterfeit,
    Inconclusive,
    Pending,
}

/// Outcome of resolving a tag code against the mapping table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerifyOutcome {
    Authentic,
    Counterfeit,
    Inconclusive,
    Pending,
    /// Code not present in the mapping table
    Unrecognized,
}

impl From<VerifyStatus> for VerifyOutcome {
    fn from(status: VerifyStatus) -> Self {
        match status {
            VerifyStatus::Authentic => VerifyOutcome::Authentic,
            VerifyStatus::Counterfeit => VerifyOutcome::Counterfeit,
            VerifyStatus::Inconclusive => VerifyOutcome::Inconclusive,
            VerifyStatus::Pending => VerifyOutcome::Pending,
        }
    }
}

/// Static code → status lookup table
///
/// Serialized as a plain JSON object. BTreeMap keeps serialization
/// order deterministic across exports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerifyMapping(BTreeMap<String, VerifyStatus>);

impl VerifyMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Register a code with its status, replacing any previous entry
    pub fn insert(&mut self, code: VerifyCode, status: VerifyStatus) {
        self.0.insert(code.as_str().to_string(), status);
    }

    /// Resolve a code; unknown codes are `Unrecognized`, never an error
    pub fn resolve(&self, code: &VerifyCode) -> VerifyOutcome {
        self.0
            .get(code.as_str())
            .copied()
            .map(VerifyOutcome::from)
            .unwrap_or(VerifyOutcome::Unrecognized)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(VerifyCode, VerifyStatus)> for VerifyMapping {
    fn from_iter<I: IntoIterator<Item = (VerifyCode, VerifyStatus)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (code, status) in iter {
            mapping.insert(code, status);
        }
        mapping
    }
}

/// One recorded verification attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRecord {
    pub id: RecordId,
    /// Normalized tag code that was checked
    pub code: VerifyCode,
    pub outcome: VerifyOutcome,
    pub checked_at: DateTime<Utc>,
}

impl VerifyRecord {
    /// Create a record for a resolved code
    pub fn new(code: VerifyCode, outcome: VerifyOutcome, checked_at: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            code,
            outcome,
            checked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mapping() -> VerifyMapping {
        [
            (VerifyCode::new("RLQ-0001"), VerifyStatus::Authentic),
            (VerifyCode::new("RLQ-0002"), VerifyStatus::Counterfeit),
            (VerifyCode::new("RLQ-0003"), VerifyStatus::Inconclusive),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_known_codes() {
        let mapping = sample_mapping();
        assert_eq!(
            mapping.resolve(&VerifyCode::new("RLQ-0001")),
            VerifyOutcome::Authentic
        );
        assert_eq!(
            mapping.resolve(&VerifyCode::new("RLQ-0002")),
            VerifyOutcome::Counterfeit
        );
    }

    #[test]
    fn test_resolve_is_normalization_insensitive() {
        let mapping = sample_mapping();
        // VerifyCode::new uppercases, so lowercase input resolves too
        assert_eq!(
            mapping.resolve(&VerifyCode::new("rlq-0001")),
            VerifyOutcome::Authentic
        );
    }

    #[test]
    fn test_resolve_unknown_code() {
        let mapping = sample_mapping();
        assert_eq!(
            mapping.resolve(&VerifyCode::new("RLQ-9999")),
            VerifyOutcome::Unrecognized
        );
    }

    #[test]
    fn test_mapping_serializes_as_object() {
        let mapping = sample_mapping();
        let json = serde_json::to_string(&mapping).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("\"RLQ-0001\":\"AUTHENTIC\""));

        let back: VerifyMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(mapping, back);
    }

    #[test]
    fn test_record_roundtrip() {
        let record = VerifyRecord::new(
            VerifyCode::new("RLQ-0001"),
            VerifyOutcome::Authentic,
            Utc::now(),
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: VerifyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
