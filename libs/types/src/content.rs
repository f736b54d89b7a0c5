//! Editorial content types
//!
//! Posts, events, and notifications are display-only fixture data.

use crate::ids::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An editorial post (news, feature, auction recap)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// URL slug, unique within the posts bucket
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub published_at: DateTime<Utc>,
}

/// A live event (signing, auction preview, card show)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub slug: String,
    pub title: String,
    pub venue: String,
    pub starts_at: DateTime<Utc>,
}

/// An in-app notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RecordId,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create an unread notification
    pub fn new(body: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            body: body.into(),
            read: false,
            created_at,
        }
    }
}
