//! "showcase" preset
//!
//! The kitchen-sink sales demo: marketplace, editorial posts, and live
//! events, with snappy latency so a walkthrough never drags.

use super::{at, demo_uuid, DatasetFixture, PresetBundle};
use crate::config::SimulationConfig;
use crate::latency::LatencyProfile;
use rust_decimal::Decimal;
use types::content::{EventItem, Post};
use types::ids::{ListingId, VerifyCode};
use types::listing::{Category, Listing};
use types::verify::{VerifyMapping, VerifyStatus};

pub fn bundle() -> PresetBundle {
    PresetBundle {
        dataset: Some(DatasetFixture {
            marketplace: Some(marketplace()),
            posts: Some(posts()),
            events: Some(events()),
        }),
        user_state: None,
        verify_mapping: Some(verify_mapping()),
        simulation: Some(SimulationConfig::latency(LatencyProfile::Fast)),
    }
}

fn marketplace() -> Vec<Listing> {
    vec![
        Listing {
            id: ListingId::from_uuid(demo_uuid(0x5C_0001)),
            title: "1952 Topps #311".to_string(),
            subject: "Mickey Mantle".to_string(),
            category: Category::TradingCard,
            grade: Some("SGC 4".to_string()),
            price: Decimal::new(385_000_00, 2),
            seller: "Cooperstown Vault".to_string(),
            image_slug: "topps-311-mantle".to_string(),
            listed_at: at(2025, 9, 30, 10, 0),
            provenance: Some("Fresh to market from a private New England collection".to_string()),
        },
        Listing {
            id: ListingId::from_uuid(demo_uuid(0x5C_0002)),
            title: "Signed World Cup Match Ball".to_string(),
            subject: "Megan Rapinoe".to_string(),
            category: Category::Equipment,
            grade: None,
            price: Decimal::new(5_900_00, 2),
            seller: "Podium Collectibles".to_string(),
            image_slug: "rapinoe-match-ball".to_string(),
            listed_at: at(2025, 10, 18, 15, 30),
            provenance: None,
        },
        Listing {
            id: ListingId::from_uuid(demo_uuid(0x5C_0003)),
            title: "Farewell Tour Signed Setlist".to_string(),
            subject: "Elton John".to_string(),
            category: Category::Autograph,
            grade: None,
            price: Decimal::new(3_250_00, 2),
            seller: "Encore Memorabilia".to_string(),
            image_slug: "elton-setlist".to_string(),
            listed_at: at(2025, 11, 1, 18, 20),
            provenance: Some("Obtained stage-side, Dodger Stadium 2022-11-20".to_string()),
        },
    ]
}

fn posts() -> Vec<Post> {
    vec![
        Post {
            slug: "fall-auction-recap".to_string(),
            title: "Fall Auction Recap: Vintage Baseball Leads the Board".to_string(),
            excerpt: "Three lots cleared a quarter million as prewar cards keep climbing."
                .to_string(),
            published_at: at(2025, 10, 26, 9, 0),
        },
        Post {
            slug: "how-we-authenticate".to_string(),
            title: "How Relique Authenticates Game-Worn Gear".to_string(),
            excerpt: "Photo-matching, fabric analysis, and the paper trail behind every tag."
                .to_string(),
            published_at: at(2025, 10, 12, 9, 0),
        },
    ]
}

fn events() -> Vec<EventItem> {
    vec![
        EventItem {
            slug: "winter-card-show".to_string(),
            title: "Winter Card Show & Live Grading".to_string(),
            venue: "Navy Pier, Chicago".to_string(),
            starts_at: at(2025, 12, 13, 10, 0),
        },
        EventItem {
            slug: "signing-night-january".to_string(),
            title: "Signing Night: Hall of Fame Class of 2020".to_string(),
            venue: "Relique Gallery, New York".to_string(),
            starts_at: at(2026, 1, 22, 18, 0),
        },
    ]
}

fn verify_mapping() -> VerifyMapping {
    [
        (VerifyCode::new("RLQ-7F3K-92QD"), VerifyStatus::Authentic),
        (VerifyCode::new("RLQ-2M8X-11AH"), VerifyStatus::Authentic),
        (VerifyCode::new("RLQ-9Q4T-55RF"), VerifyStatus::Counterfeit),
    ]
    .into_iter()
    .collect()
}
