//! Simulation harness
//!
//! `SimHarness` owns the seeded RNG, the forced-error slot, the
//! environment capture, and a handle to the bucket store. Everything a
//! call site needs is threaded through this one value; there is no
//! process-global state to leak between tests or tenants.

use crate::config::{self, EnvOverrides, ResolvedConfig, SimulationConfig};
use crate::inject::ErrorMode;
use crate::latency::{self, LatencyProfile};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storage::{StorageError, Store};
use tracing::debug;
use types::errors::{ErrorCode, ServiceError};

/// Composition point for latency and error injection
///
/// The orchestration order is fixed: error injection is evaluated
/// first and short-circuits before any delay, so error-path tests run
/// fast; only a clean call pays the latency cost.
pub struct SimHarness {
    store: Arc<dyn Store>,
    rng: Mutex<ChaCha8Rng>,
    forced: Mutex<Option<ServiceError>>,
    env: EnvOverrides,
}

impl SimHarness {
    /// Harness with entropy seeding and captured environment
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_env(store, EnvOverrides::capture())
    }

    /// Harness with an explicit environment capture (entropy-seeded RNG)
    pub fn with_env(store: Arc<dyn Store>, env: EnvOverrides) -> Self {
        Self {
            store,
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
            forced: Mutex::new(None),
            env,
        }
    }

    /// Deterministic harness for tests: fixed seed, empty environment
    pub fn with_seed(store: Arc<dyn Store>, seed: u64) -> Self {
        Self {
            store,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            forced: Mutex::new(None),
            env: EnvOverrides::default(),
        }
    }

    /// Shared handle to the bucket store this harness reads config from
    pub fn store(&self) -> Arc<dyn Store> {
        Arc::clone(&self.store)
    }

    // ── Configuration ───────────────────────────────────────────────

    /// Resolve a per-call override through store, environment, defaults
    pub fn resolve_config(&self, explicit: SimulationConfig) -> ResolvedConfig {
        config::resolve(explicit, self.store.as_ref(), &self.env)
    }

    /// Read the persisted override fields
    pub fn persisted_config(&self) -> SimulationConfig {
        config::persisted(self.store.as_ref())
    }

    /// Persist override fields (present fields only)
    pub fn set_persisted_config(&self, config: SimulationConfig) -> Result<(), StorageError> {
        config::set_persisted(self.store.as_ref(), config)
    }

    // ── Latency ─────────────────────────────────────────────────────

    /// Draw one delay from a profile's range
    pub fn latency_delay(&self, profile: LatencyProfile) -> Duration {
        let mut rng = self.rng.lock().expect("rng lock poisoned");
        latency::draw_delay(profile, &mut *rng)
    }

    /// Delay for the profile, then run the operation
    ///
    /// The delay always runs to completion before the operation is
    /// polled; there is no timeout and no cancellation token.
    pub async fn with_latency<T, F>(&self, profile: LatencyProfile, op: F) -> T
    where
        F: Future<Output = T>,
    {
        let delay = self.latency_delay(profile);
        tokio::time::sleep(delay).await;
        op.await
    }

    // ── Error injection ─────────────────────────────────────────────

    /// Arm (or clear, with `None`) the forced error delivered by the
    /// next injection under `Force` mode
    pub fn set_forced_error(&self, error: Option<ServiceError>) {
        *self.forced.lock().expect("forced-error lock poisoned") = error;
    }

    /// Whether a forced error is armed and unconsumed
    pub fn forced_error_pending(&self) -> bool {
        self.forced
            .lock()
            .expect("forced-error lock poisoned")
            .is_some()
    }

    /// Decide whether this call gets a synthetic failure
    ///
    /// `Force` fires only while a forced error is armed; the other
    /// modes draw one uniform sample against their fixed probability.
    pub fn should_inject(&self, mode: ErrorMode) -> bool {
        match mode {
            ErrorMode::Off => false,
            ErrorMode::Force => self.forced_error_pending(),
            ErrorMode::Low | ErrorMode::Medium => {
                let mut rng = self.rng.lock().expect("rng lock poisoned");
                rng.gen::<f64>() < mode.probability()
            }
        }
    }

    /// Produce the error for an injection
    ///
    /// A pending forced error wins and is consumed (the `code` argument
    /// is ignored on that branch). Otherwise the error comes from the
    /// canned table, defaulting to `SERVICE_ERROR`.
    pub fn generate_error(&self, code: Option<ErrorCode>) -> ServiceError {
        if let Some(forced) = self
            .forced
            .lock()
            .expect("forced-error lock poisoned")
            .take()
        {
            return forced;
        }
        ServiceError::from_code(code.unwrap_or(ErrorCode::ServiceError))
    }

    /// Run the operation unless injection replaces it with a failure
    ///
    /// When injection fires the operation is never polled.
    pub async fn with_error_injection<T, F>(&self, mode: ErrorMode, op: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        if self.should_inject(mode) {
            let err = self.generate_error(None);
            debug!(code = %err.code, retryable = err.retryable, "injected synthetic failure");
            return Err(err);
        }
        op.await
    }

    // ── Orchestration ───────────────────────────────────────────────

    /// Wrap an operation with error injection and latency
    ///
    /// Sole integration point for the mock services: injection is
    /// evaluated first (no delay on the error path), then the latency
    /// delay, then the operation itself.
    pub async fn with_simulation<T, F>(
        &self,
        config: SimulationConfig,
        op: F,
    ) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        let resolved = self.resolve_config(config);

        if self.should_inject(resolved.errors) {
            let err = self.generate_error(None);
            debug!(code = %err.code, retryable = err.retryable, "injected synthetic failure");
            return Err(err);
        }

        let delay = self.latency_delay(resolved.latency);
        debug!(profile = %resolved.latency, delay_ms = delay.as_millis() as u64, "simulated latency");
        tokio::time::sleep(delay).await;
        op.await
    }
}
