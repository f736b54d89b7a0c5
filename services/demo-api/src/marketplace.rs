//! Mock marketplace service
//!
//! Browse, filter, and favorite listings. All queries are plain
//! in-memory passes over the listings bucket; the dataset is demo
//! scale, so there is no index to maintain.

use crate::storage_failure;
use rust_decimal::Decimal;
use simulation::{SimHarness, SimulationConfig};
use std::sync::Arc;
use storage::{Bucket, Store, StoreExt};
use tracing::debug;
use types::errors::{ErrorCode, ServiceError};
use types::ids::ListingId;
use types::listing::{Category, Listing};

/// Result ordering for [`MarketplaceService::browse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    PriceAscending,
    PriceDescending,
}

/// Browse filter; absent fields don't constrain
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub category: Option<Category>,
    /// Case-insensitive match against title and subject
    pub query: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: SortOrder,
}

pub struct MarketplaceService {
    harness: Arc<SimHarness>,
    store: Arc<dyn Store>,
    config: SimulationConfig,
}

impl MarketplaceService {
    pub fn new(harness: Arc<SimHarness>) -> Self {
        Self::with_config(harness, SimulationConfig::default())
    }

    pub fn with_config(harness: Arc<SimHarness>, config: SimulationConfig) -> Self {
        let store = harness.store();
        Self {
            harness,
            store,
            config,
        }
    }

    /// Filtered, sorted view of the listings bucket
    pub async fn browse(&self, filter: &ListingFilter) -> Result<Vec<Listing>, ServiceError> {
        self.harness
            .with_simulation(self.config, async {
                let mut listings = self.all_listings()?;

                listings.retain(|listing| {
                    filter.category.is_none_or(|c| listing.category == c)
                        && filter
                            .query
                            .as_deref()
                            .is_none_or(|q| listing.matches_query(q))
                        && filter.min_price.is_none_or(|min| listing.price >= min)
                        && filter.max_price.is_none_or(|max| listing.price <= max)
                });

                match filter.sort {
                    SortOrder::Newest => {
                        listings.sort_by(|a, b| b.listed_at.cmp(&a.listed_at));
                    }
                    SortOrder::PriceAscending => listings.sort_by(|a, b| a.price.cmp(&b.price)),
                    SortOrder::PriceDescending => listings.sort_by(|a, b| b.price.cmp(&a.price)),
                }

                debug!(results = listings.len(), "marketplace browse");
                Ok(listings)
            })
            .await
    }

    /// Fetch one listing by id
    pub async fn listing(&self, id: ListingId) -> Result<Listing, ServiceError> {
        self.harness
            .with_simulation(self.config, async {
                self.all_listings()?
                    .into_iter()
                    .find(|listing| listing.id == id)
                    .ok_or_else(|| {
                        ServiceError::with_message(
                            ErrorCode::NotFound,
                            format!("No listing with id {id}"),
                        )
                    })
            })
            .await
    }

    /// Flip a listing's favorite state; returns the new state
    pub async fn toggle_favorite(&self, id: ListingId) -> Result<bool, ServiceError> {
        self.harness
            .with_simulation(self.config, async {
                let mut favorites: Vec<ListingId> = self
                    .store
                    .get_json(Bucket::Favorites)
                    .map_err(storage_failure)?
                    .unwrap_or_default();

                let favorited = if let Some(pos) = favorites.iter().position(|f| *f == id) {
                    favorites.remove(pos);
                    false
                } else {
                    favorites.push(id);
                    true
                };

                self.store
                    .set_json(Bucket::Favorites, &favorites)
                    .map_err(storage_failure)?;
                Ok(favorited)
            })
            .await
    }

    /// Favorited listings, in listings-bucket order
    pub async fn favorites(&self) -> Result<Vec<Listing>, ServiceError> {
        self.harness
            .with_simulation(self.config, async {
                let favorites: Vec<ListingId> = self
                    .store
                    .get_json(Bucket::Favorites)
                    .map_err(storage_failure)?
                    .unwrap_or_default();

                let mut listings = self.all_listings()?;
                listings.retain(|listing| favorites.contains(&listing.id));
                Ok(listings)
            })
            .await
    }

    fn all_listings(&self) -> Result<Vec<Listing>, ServiceError> {
        Ok(self
            .store
            .get_json(Bucket::Listings)
            .map_err(storage_failure)?
            .unwrap_or_default())
    }
}
