//! Logical bucket identifiers
//!
//! Every piece of demo state lives under one of these buckets. Keys are
//! stable wire strings: exported snapshots and the file store persist
//! them verbatim, so renaming a key is a breaking change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named logical slot in the key-value store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Marketplace listings (`Vec<Listing>`)
    Listings,
    /// Favorited listing ids (`Vec<ListingId>`)
    Favorites,
    /// Verification attempts, newest last (`Vec<VerifyRecord>`)
    VerifyHistory,
    /// Tag code → status table (`VerifyMapping`)
    VerifyMapping,
    /// Consignment drafts (`Vec<ConsignDraft>`)
    ConsignDrafts,
    /// Consignment submissions, newest last (`Vec<ConsignSubmission>`)
    ConsignSubmissions,
    /// Editorial posts (`Vec<Post>`)
    Posts,
    /// Live events (`Vec<EventItem>`)
    Events,
    /// In-app notifications (`Vec<Notification>`)
    Notifications,
    /// Persisted latency profile tag (plain string)
    SimLatency,
    /// Persisted error mode tag (plain string)
    SimErrors,
    /// Name of the most recently applied preset (plain string)
    ActivePreset,
}

impl Bucket {
    /// All buckets, in canonical order
    pub const ALL: [Bucket; 12] = [
        Bucket::Listings,
        Bucket::Favorites,
        Bucket::VerifyHistory,
        Bucket::VerifyMapping,
        Bucket::ConsignDrafts,
        Bucket::ConsignSubmissions,
        Bucket::Posts,
        Bucket::Events,
        Bucket::Notifications,
        Bucket::SimLatency,
        Bucket::SimErrors,
        Bucket::ActivePreset,
    ];

    /// Stable storage key for this bucket
    pub fn key(&self) -> &'static str {
        match self {
            Bucket::Listings => "relique.listings",
            Bucket::Favorites => "relique.favorites",
            Bucket::VerifyHistory => "relique.verify_history",
            Bucket::VerifyMapping => "relique.verify_mapping",
            Bucket::ConsignDrafts => "relique.consign_drafts",
            Bucket::ConsignSubmissions => "relique.consign_submissions",
            Bucket::Posts => "relique.posts",
            Bucket::Events => "relique.events",
            Bucket::Notifications => "relique.notifications",
            Bucket::SimLatency => "relique.sim_latency",
            Bucket::SimErrors => "relique.sim_errors",
            Bucket::ActivePreset => "relique.active_preset",
        }
    }

    /// Parse a storage key back into a bucket
    pub fn from_key(key: &str) -> Option<Self> {
        Bucket::ALL.into_iter().find(|b| b.key() == key)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
