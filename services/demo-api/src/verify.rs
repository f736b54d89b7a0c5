//! Mock verification service
//!
//! Resolves physical tag codes against the static mapping table and
//! records every attempt in the history bucket. Defaults to the
//! `verify` latency profile: the deliberate 5-second suspense delay
//! the authentication UX is built around.

use crate::storage_failure;
use chrono::Utc;
use simulation::{LatencyProfile, SimHarness, SimulationConfig};
use std::sync::Arc;
use storage::{Bucket, Store, StoreExt};
use tracing::info;
use types::errors::ServiceError;
use types::ids::VerifyCode;
use types::verify::{VerifyMapping, VerifyRecord};

pub struct VerifyService {
    harness: Arc<SimHarness>,
    store: Arc<dyn Store>,
    config: SimulationConfig,
}

impl VerifyService {
    /// Service with the standard fixed verification delay
    pub fn new(harness: Arc<SimHarness>) -> Self {
        Self::with_config(harness, SimulationConfig::latency(LatencyProfile::Verify))
    }

    /// Service with an explicit simulation override (tests mostly pass
    /// `fast` here)
    pub fn with_config(harness: Arc<SimHarness>, config: SimulationConfig) -> Self {
        let store = harness.store();
        Self {
            harness,
            store,
            config,
        }
    }

    /// Resolve a tag code and append the attempt to the history
    ///
    /// Unknown codes are a successful check with an `Unrecognized`
    /// outcome, not an error.
    pub async fn check_code(&self, code: VerifyCode) -> Result<VerifyRecord, ServiceError> {
        self.harness
            .with_simulation(self.config, async {
                let mapping: VerifyMapping = self
                    .store
                    .get_json(Bucket::VerifyMapping)
                    .map_err(storage_failure)?
                    .unwrap_or_default();

                let outcome = mapping.resolve(&code);
                let record = VerifyRecord::new(code, outcome, Utc::now());

                let mut history: Vec<VerifyRecord> = self
                    .store
                    .get_json(Bucket::VerifyHistory)
                    .map_err(storage_failure)?
                    .unwrap_or_default();
                history.push(record.clone());
                self.store
                    .set_json(Bucket::VerifyHistory, &history)
                    .map_err(storage_failure)?;

                info!(code = %record.code, outcome = ?record.outcome, "verification resolved");
                Ok(record)
            })
            .await
    }

    /// Recorded verification attempts, newest first
    pub fn history(&self) -> Result<Vec<VerifyRecord>, ServiceError> {
        let mut history: Vec<VerifyRecord> = self
            .store
            .get_json(Bucket::VerifyHistory)
            .map_err(storage_failure)?
            .unwrap_or_default();
        history.reverse();
        Ok(history)
    }
}
