//! "consignor" preset
//!
//! A seller mid-intake: one draft still being edited, one submission
//! already under review. Ships a degraded-network simulation config
//! (slow latency, low error rate) so the consign flow demos its
//! loading and retry states.

use super::{at, demo_uuid, PresetBundle, UserStateFixture};
use crate::config::SimulationConfig;
use crate::inject::ErrorMode;
use crate::latency::LatencyProfile;
use rust_decimal::Decimal;
use types::consign::{ConsignDraft, ConsignSubmission, SubmissionStatus};
use types::ids::{DraftId, SubmissionId, VerifyCode};
use types::listing::Category;
use types::verify::{VerifyMapping, VerifyStatus};

pub fn bundle() -> PresetBundle {
    PresetBundle {
        dataset: None,
        user_state: Some(UserStateFixture {
            favorites: None,
            verify_history: None,
            consign_drafts: Some(vec![draft()]),
            consign_submissions: Some(vec![submission()]),
            notifications: None,
        }),
        verify_mapping: Some(verify_mapping()),
        simulation: Some(SimulationConfig::full(LatencyProfile::Slow, ErrorMode::Low)),
    }
}

fn draft() -> ConsignDraft {
    ConsignDraft {
        id: DraftId::from_uuid(demo_uuid(0xD0_0001)),
        item_title: "1989 Upper Deck #1, signed".to_string(),
        subject: "Ken Griffey Jr.".to_string(),
        category: Category::TradingCard,
        description: "Signed at spring training 1998, witnessed by two collectors".to_string(),
        estimated_value: Some(Decimal::new(1_200_00, 2)),
        updated_at: at(2025, 11, 6, 21, 10),
    }
}

fn submission() -> ConsignSubmission {
    ConsignSubmission {
        id: SubmissionId::from_uuid(demo_uuid(0xD1_0001)),
        draft: ConsignDraft {
            id: DraftId::from_uuid(demo_uuid(0xD0_0002)),
            item_title: "Match-Used Goalkeeper Gloves".to_string(),
            subject: "Alisson Becker".to_string(),
            category: Category::Equipment,
            description: "Worn during the 2024 cup final, club letter included".to_string(),
            estimated_value: Some(Decimal::new(4_800_00, 2)),
            updated_at: at(2025, 10, 28, 12, 0),
        },
        status: SubmissionStatus::InReview,
        submitted_at: at(2025, 10, 28, 12, 5),
    }
}

fn verify_mapping() -> VerifyMapping {
    [
        (VerifyCode::new("RLQ-2M8X-11AH"), VerifyStatus::Authentic),
        (VerifyCode::new("RLQ-5D7C-30PT"), VerifyStatus::Pending),
    ]
    .into_iter()
    .collect()
}
