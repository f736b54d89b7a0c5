//! "collector" preset
//!
//! An active buyer mid-session: a stocked marketplace, a couple of
//! favorites, and a verification history with mixed outcomes. Leaves
//! the simulation config untouched.

use super::{at, demo_uuid, DatasetFixture, PresetBundle, UserStateFixture};
use rust_decimal::Decimal;
use types::content::Notification;
use types::ids::{ListingId, RecordId, VerifyCode};
use types::listing::{Category, Listing};
use types::verify::{VerifyMapping, VerifyOutcome, VerifyRecord, VerifyStatus};

pub fn bundle() -> PresetBundle {
    PresetBundle {
        dataset: Some(DatasetFixture {
            marketplace: Some(marketplace()),
            posts: None,
            events: None,
        }),
        user_state: Some(UserStateFixture {
            favorites: Some(vec![
                ListingId::from_uuid(demo_uuid(0xC0_0001)),
                ListingId::from_uuid(demo_uuid(0xC0_0003)),
            ]),
            verify_history: Some(verify_history()),
            consign_drafts: None,
            consign_submissions: None,
            notifications: Some(notifications()),
        }),
        verify_mapping: Some(verify_mapping()),
        simulation: None,
    }
}

fn marketplace() -> Vec<Listing> {
    vec![
        Listing {
            id: ListingId::from_uuid(demo_uuid(0xC0_0001)),
            title: "1986 Fleer #57 Rookie Card".to_string(),
            subject: "Michael Jordan".to_string(),
            category: Category::TradingCard,
            grade: Some("PSA 8".to_string()),
            price: Decimal::new(28_500_00, 2),
            seller: "Windy City Cards".to_string(),
            image_slug: "fleer-57-rookie".to_string(),
            listed_at: at(2025, 10, 14, 16, 30),
            provenance: Some("Slabbed and certified, cert #44120895".to_string()),
        },
        Listing {
            id: ListingId::from_uuid(demo_uuid(0xC0_0002)),
            title: "2001 Game-Worn Home Jersey".to_string(),
            subject: "Derek Jeter".to_string(),
            category: Category::GameWornJersey,
            grade: None,
            price: Decimal::new(18_750_00, 2),
            seller: "Bronx Archive".to_string(),
            image_slug: "jeter-home-jersey".to_string(),
            listed_at: at(2025, 10, 21, 11, 0),
            provenance: Some("Steiner hologram, photo-matched to 2001-05-08".to_string()),
        },
        Listing {
            id: ListingId::from_uuid(demo_uuid(0xC0_0003)),
            title: "Signed 8x10 Olympic Photograph".to_string(),
            subject: "Simone Biles".to_string(),
            category: Category::Photograph,
            grade: None,
            price: Decimal::new(640_00, 2),
            seller: "Podium Collectibles".to_string(),
            image_slug: "biles-olympic-photo".to_string(),
            listed_at: at(2025, 11, 2, 9, 15),
            provenance: None,
        },
        Listing {
            id: ListingId::from_uuid(demo_uuid(0xC0_0004)),
            title: "1998 Finals Ticket Stub".to_string(),
            subject: "Chicago Bulls".to_string(),
            category: Category::Ticket,
            grade: Some("PSA 5".to_string()),
            price: Decimal::new(2_150_00, 2),
            seller: "Windy City Cards".to_string(),
            image_slug: "bulls-98-finals-stub".to_string(),
            listed_at: at(2025, 11, 5, 19, 45),
            provenance: None,
        },
    ]
}

fn verify_history() -> Vec<VerifyRecord> {
    vec![
        VerifyRecord {
            id: RecordId::from_uuid(demo_uuid(0xC1_0001)),
            code: VerifyCode::new("RLQ-7F3K-92QD"),
            outcome: VerifyOutcome::Authentic,
            checked_at: at(2025, 11, 1, 14, 5),
        },
        VerifyRecord {
            id: RecordId::from_uuid(demo_uuid(0xC1_0002)),
            code: VerifyCode::new("RLQ-0000-0000"),
            outcome: VerifyOutcome::Unrecognized,
            checked_at: at(2025, 11, 3, 20, 40),
        },
    ]
}

fn verify_mapping() -> VerifyMapping {
    [
        (VerifyCode::new("RLQ-7F3K-92QD"), VerifyStatus::Authentic),
        (VerifyCode::new("RLQ-2M8X-11AH"), VerifyStatus::Authentic),
        (VerifyCode::new("RLQ-9Q4T-55RF"), VerifyStatus::Counterfeit),
        (VerifyCode::new("RLQ-6B2W-78KN"), VerifyStatus::Inconclusive),
    ]
    .into_iter()
    .collect()
}

fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: RecordId::from_uuid(demo_uuid(0xC2_0001)),
            body: "A listing you favorited dropped in price".to_string(),
            read: false,
            created_at: at(2025, 11, 4, 8, 0),
        },
        Notification {
            id: RecordId::from_uuid(demo_uuid(0xC2_0002)),
            body: "Your verification of RLQ-7F3K-92QD is complete".to_string(),
            read: true,
            created_at: at(2025, 11, 1, 14, 5),
        },
    ]
}
