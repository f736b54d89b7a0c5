//! Marketplace listing types
//!
//! Listings are demo fixture data: fully denormalized, serialized as
//! one JSON array per storage bucket.

use crate::ids::ListingId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Memorabilia category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    TradingCard,
    GameWornJersey,
    Autograph,
    Equipment,
    Ticket,
    Photograph,
}

impl Category {
    /// Human-readable label used by the demo UI
    pub fn label(&self) -> &'static str {
        match self {
            Category::TradingCard => "Trading Card",
            Category::GameWornJersey => "Game-Worn Jersey",
            Category::Autograph => "Autograph",
            Category::Equipment => "Equipment",
            Category::Ticket => "Ticket",
            Category::Photograph => "Photograph",
        }
    }
}

/// A marketplace listing for a collectible item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    /// Display title, e.g. "1997 Finals Game 5 Jersey"
    pub title: String,
    /// Athlete or personality the item is attributed to
    pub subject: String,
    pub category: Category,
    /// Third-party grade, when the item has been slabbed (e.g. "PSA 9")
    pub grade: Option<String>,
    /// Asking price in USD
    pub price: Decimal,
    /// Seller display name
    pub seller: String,
    /// Image asset slug resolved by the frontend
    pub image_slug: String,
    pub listed_at: DateTime<Utc>,
    /// Free-form provenance note shown on the detail page
    pub provenance: Option<String>,
}

impl Listing {
    /// Case-insensitive match against title and subject
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.subject.to_lowercase().contains(&q)
    }
}
