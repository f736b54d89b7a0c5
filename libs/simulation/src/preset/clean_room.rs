//! "clean-room" preset
//!
//! Mapping table only. Applying it over an existing session leaves all
//! user and dataset buckets exactly as they were, which makes it the
//! go-to preset for demonstrating the verify flow in isolation.

use super::PresetBundle;
use types::ids::VerifyCode;
use types::verify::{VerifyMapping, VerifyStatus};

pub fn bundle() -> PresetBundle {
    PresetBundle {
        dataset: None,
        user_state: None,
        verify_mapping: Some(verify_mapping()),
        simulation: None,
    }
}

fn verify_mapping() -> VerifyMapping {
    [
        (VerifyCode::new("RLQ-7F3K-92QD"), VerifyStatus::Authentic),
        (VerifyCode::new("RLQ-9Q4T-55RF"), VerifyStatus::Counterfeit),
        (VerifyCode::new("RLQ-6B2W-78KN"), VerifyStatus::Inconclusive),
        (VerifyCode::new("RLQ-5D7C-30PT"), VerifyStatus::Pending),
    ]
    .into_iter()
    .collect()
}
