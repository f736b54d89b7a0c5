//! Preset fixture bundles
//!
//! A preset is a named, compile-time-registered bundle of demo state.
//! Each bundle module builds a coherent dataset; the loader applies
//! whichever sub-trees the bundle carries.
//!
//! The registry is a closed match over known names. There is no
//! dynamic lookup: adding a preset means adding a module and a
//! registry arm.

pub mod collector;
pub mod consignor;
pub mod showcase;
pub mod clean_room;

mod loader;

pub use loader::{PresetError, PresetLoader};

use crate::config::SimulationConfig;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use types::consign::{ConsignDraft, ConsignSubmission};
use types::content::{EventItem, Notification, Post};
use types::ids::ListingId;
use types::listing::Listing;
use types::verify::{VerifyMapping, VerifyRecord};
use uuid::Uuid;

/// Names of every registered preset, in display order
pub const PRESET_NAMES: [&str; 4] = ["collector", "consignor", "showcase", "clean-room"];

/// Build a registered preset's bundle; unknown names are None
pub fn build(name: &str) -> Option<PresetBundle> {
    match name {
        "collector" => Some(collector::bundle()),
        "consignor" => Some(consignor::bundle()),
        "showcase" => Some(showcase::bundle()),
        "clean-room" => Some(clean_room::bundle()),
        _ => None,
    }
}

/// A named fixture bundle
///
/// Every sub-tree is independent and optional: the loader touches only
/// the buckets whose field is present, and never deletes on absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetFixture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_state: Option<UserStateFixture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_mapping: Option<VerifyMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationConfig>,
}

/// Site-wide demo content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetFixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<Vec<Listing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<Post>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<EventItem>>,
}

/// Per-user demo state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStateFixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites: Option<Vec<ListingId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_history: Option<Vec<VerifyRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consign_drafts: Option<Vec<ConsignDraft>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consign_submissions: Option<Vec<ConsignSubmission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<Notification>>,
}

// Fixture ids are fixed so repeated builds of the same preset are
// identical, byte for byte.
pub(crate) fn demo_uuid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub(crate) fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}
