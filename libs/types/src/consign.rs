//! Consignment draft and submission lifecycle
//!
//! A draft is a work-in-progress intake form. Submitting converts it
//! into an immutable submission that moves through review states.

use crate::ids::{DraftId, SubmissionId};
use crate::listing::Category;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Review state of a consignment submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    /// Received, awaiting a specialist
    Submitted,
    /// A specialist is evaluating the item
    InReview,
    /// Accepted for consignment (terminal)
    Accepted,
    /// Declined (terminal)
    Declined,
}

impl SubmissionStatus {
    /// Check if status is terminal (no further transitions possible)
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Accepted | SubmissionStatus::Declined)
    }
}

/// A work-in-progress consignment intake form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsignDraft {
    pub id: DraftId,
    pub item_title: String,
    /// Athlete or personality the item is attributed to
    pub subject: String,
    pub category: Category,
    pub description: String,
    /// Owner's estimate in USD, if they gave one
    pub estimated_value: Option<Decimal>,
    pub updated_at: DateTime<Utc>,
}

/// An immutable consignment submission under review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsignSubmission {
    pub id: SubmissionId,
    /// Draft contents frozen at submission time
    pub draft: ConsignDraft,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
}

impl ConsignSubmission {
    /// Freeze a draft into a new submission awaiting review
    pub fn from_draft(draft: ConsignDraft, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: SubmissionId::new(),
            draft,
            status: SubmissionStatus::Submitted,
            submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> ConsignDraft {
        ConsignDraft {
            id: DraftId::new(),
            item_title: "Signed rookie card".to_string(),
            subject: "Ken Griffey Jr.".to_string(),
            category: Category::TradingCard,
            description: "1989 Upper Deck #1, signed at spring training".to_string(),
            estimated_value: Some(Decimal::from(1_200)),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!SubmissionStatus::Submitted.is_terminal());
        assert!(!SubmissionStatus::InReview.is_terminal());
        assert!(SubmissionStatus::Accepted.is_terminal());
        assert!(SubmissionStatus::Declined.is_terminal());
    }

    #[test]
    fn test_from_draft_starts_submitted() {
        let draft = sample_draft();
        let submitted_at = Utc::now();
        let submission = ConsignSubmission::from_draft(draft.clone(), submitted_at);

        assert_eq!(submission.status, SubmissionStatus::Submitted);
        assert_eq!(submission.draft, draft);
        assert_eq!(submission.submitted_at, submitted_at);
    }

    #[test]
    fn test_submission_roundtrip() {
        let submission = ConsignSubmission::from_draft(sample_draft(), Utc::now());
        let json = serde_json::to_string(&submission).unwrap();
        let back: ConsignSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(submission, back);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&SubmissionStatus::InReview).unwrap();
        assert_eq!(json, "\"IN_REVIEW\"");
    }
}
