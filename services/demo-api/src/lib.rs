//! Mock Domain Services
//!
//! The demo-facing service layer of the Relique platform. Every
//! operation wraps its work in `SimHarness::with_simulation`, so the
//! configured latency profile and error mode apply uniformly without
//! any per-service wiring.
//!
//! # Modules
//! - `verify` — Tag code verification against the mapping table
//! - `marketplace` — Browse, filter, and favorite listings
//! - `consign` — Consignment drafts and submissions

pub mod verify;
pub mod marketplace;
pub mod consign;

pub use consign::ConsignService;
pub use marketplace::{ListingFilter, MarketplaceService, SortOrder};
pub use verify::VerifyService;

use storage::StorageError;
use types::errors::{ErrorCode, ServiceError};

/// Crate version constant
pub const VERSION: &str = "0.1.0";

// Storage failures surface to callers with the same shape as injected
// errors; demos only ever handle one error type.
pub(crate) fn storage_failure(err: StorageError) -> ServiceError {
    ServiceError::with_message(ErrorCode::ServiceError, err.to_string())
}
