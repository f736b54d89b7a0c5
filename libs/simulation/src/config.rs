//! Layered simulation configuration
//!
//! Resolution order per field, first hit wins:
//! explicit per-call override → persisted store value → environment
//! capture → hardcoded default. The two persisted fields live under
//! independent keys with no atomicity between them.

use crate::inject::ErrorMode;
use crate::latency::LatencyProfile;
use serde::{Deserialize, Serialize};
use storage::{Bucket, StorageError, Store};
use tracing::debug;

/// Hardcoded fallback latency profile
pub const DEFAULT_LATENCY: LatencyProfile = LatencyProfile::Normal;

/// Hardcoded fallback error mode
pub const DEFAULT_ERRORS: ErrorMode = ErrorMode::Off;

/// Environment variable naming the default latency profile
pub const ENV_LATENCY: &str = "RELIQUE_DEMO_LATENCY";

/// Environment variable naming the default error mode
pub const ENV_ERRORS: &str = "RELIQUE_DEMO_ERRORS";

/// Per-call configuration override; absent fields fall through the
/// resolution chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<LatencyProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorMode>,
}

impl SimulationConfig {
    /// Override only the latency profile
    pub fn latency(profile: LatencyProfile) -> Self {
        Self {
            latency: Some(profile),
            errors: None,
        }
    }

    /// Override only the error mode
    pub fn errors(mode: ErrorMode) -> Self {
        Self {
            latency: None,
            errors: Some(mode),
        }
    }

    /// Override both fields
    pub fn full(profile: LatencyProfile, mode: ErrorMode) -> Self {
        Self {
            latency: Some(profile),
            errors: Some(mode),
        }
    }
}

/// A fully-resolved configuration, every field populated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub latency: LatencyProfile,
    pub errors: ErrorMode,
}

/// Environment values captured once at harness construction
///
/// Call sites never read ambient process state; tests construct this
/// directly.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub latency: Option<String>,
    pub errors: Option<String>,
}

impl EnvOverrides {
    /// Capture the demo environment variables as they are right now
    pub fn capture() -> Self {
        Self {
            latency: std::env::var(ENV_LATENCY).ok(),
            errors: std::env::var(ENV_ERRORS).ok(),
        }
    }
}

/// Resolve one call's configuration through the full chain
pub fn resolve(
    explicit: SimulationConfig,
    store: &dyn Store,
    env: &EnvOverrides,
) -> ResolvedConfig {
    let latency = explicit
        .latency
        .or_else(|| persisted_tag(store, Bucket::SimLatency).and_then(|t| LatencyProfile::parse(&t)))
        .or_else(|| env.latency.as_deref().and_then(LatencyProfile::parse))
        .unwrap_or(DEFAULT_LATENCY);

    let errors = explicit
        .errors
        .or_else(|| persisted_tag(store, Bucket::SimErrors).and_then(|t| ErrorMode::parse(&t)))
        .or_else(|| env.errors.as_deref().and_then(ErrorMode::parse))
        .unwrap_or(DEFAULT_ERRORS);

    ResolvedConfig { latency, errors }
}

/// Read the persisted override fields (absent fields were never set)
pub fn persisted(store: &dyn Store) -> SimulationConfig {
    SimulationConfig {
        latency: persisted_tag(store, Bucket::SimLatency).and_then(|t| LatencyProfile::parse(&t)),
        errors: persisted_tag(store, Bucket::SimErrors).and_then(|t| ErrorMode::parse(&t)),
    }
}

/// Persist the fields present in `config`; absent fields keep their
/// stored value. The two keys are written independently.
pub fn set_persisted(store: &dyn Store, config: SimulationConfig) -> Result<(), StorageError> {
    if let Some(profile) = config.latency {
        store.set(Bucket::SimLatency, profile.as_str().to_string())?;
    }
    if let Some(mode) = config.errors {
        store.set(Bucket::SimErrors, mode.as_str().to_string())?;
    }
    Ok(())
}

/// Remove both persisted override keys
pub fn clear_persisted(store: &dyn Store) -> Result<(), StorageError> {
    store.remove(Bucket::SimLatency)?;
    store.remove(Bucket::SimErrors)?;
    Ok(())
}

// A failed storage read is a skipped layer, not an error
fn persisted_tag(store: &dyn Store, bucket: Bucket) -> Option<String> {
    match store.get(bucket) {
        Ok(value) => value,
        Err(err) => {
            debug!(%bucket, %err, "skipping unreadable persisted override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::MemoryStore;

    fn env(latency: Option<&str>, errors: Option<&str>) -> EnvOverrides {
        EnvOverrides {
            latency: latency.map(String::from),
            errors: errors.map(String::from),
        }
    }

    #[test]
    fn test_defaults_with_empty_layers() {
        let store = MemoryStore::new();
        let resolved = resolve(SimulationConfig::default(), &store, &EnvOverrides::default());
        assert_eq!(resolved.latency, DEFAULT_LATENCY);
        assert_eq!(resolved.errors, DEFAULT_ERRORS);
    }

    #[test]
    fn test_env_beats_default() {
        let store = MemoryStore::new();
        let resolved = resolve(
            SimulationConfig::default(),
            &store,
            &env(Some("slow"), Some("medium")),
        );
        assert_eq!(resolved.latency, LatencyProfile::Slow);
        assert_eq!(resolved.errors, ErrorMode::Medium);
    }

    #[test]
    fn test_store_beats_env() {
        let store = MemoryStore::new();
        set_persisted(&store, SimulationConfig::latency(LatencyProfile::Fast)).unwrap();

        let resolved = resolve(
            SimulationConfig::default(),
            &store,
            &env(Some("slow"), None),
        );
        assert_eq!(resolved.latency, LatencyProfile::Fast);
    }

    #[test]
    fn test_explicit_beats_store() {
        let store = MemoryStore::new();
        set_persisted(&store, SimulationConfig::latency(LatencyProfile::Fast)).unwrap();

        let resolved = resolve(
            SimulationConfig::latency(LatencyProfile::Verify),
            &store,
            &EnvOverrides::default(),
        );
        assert_eq!(resolved.latency, LatencyProfile::Verify);
    }

    #[test]
    fn test_fields_resolve_independently() {
        let store = MemoryStore::new();
        set_persisted(&store, SimulationConfig::errors(ErrorMode::Low)).unwrap();

        let resolved = resolve(
            SimulationConfig::latency(LatencyProfile::Fast),
            &store,
            &EnvOverrides::default(),
        );
        assert_eq!(resolved.latency, LatencyProfile::Fast);
        assert_eq!(resolved.errors, ErrorMode::Low);
    }

    #[test]
    fn test_unknown_tags_are_skipped() {
        let store = MemoryStore::new();
        store
            .set(Bucket::SimLatency, "hyperspeed".to_string())
            .unwrap();

        let resolved = resolve(
            SimulationConfig::default(),
            &store,
            &env(Some("not-a-profile"), None),
        );
        assert_eq!(resolved.latency, DEFAULT_LATENCY);
    }

    #[test]
    fn test_persisted_readback() {
        let store = MemoryStore::new();
        set_persisted(
            &store,
            SimulationConfig::full(LatencyProfile::Slow, ErrorMode::Force),
        )
        .unwrap();

        let persisted = persisted(&store);
        assert_eq!(persisted.latency, Some(LatencyProfile::Slow));
        assert_eq!(persisted.errors, Some(ErrorMode::Force));
    }

    #[test]
    fn test_set_persisted_leaves_absent_field() {
        let store = MemoryStore::new();
        set_persisted(&store, SimulationConfig::errors(ErrorMode::Medium)).unwrap();
        set_persisted(&store, SimulationConfig::latency(LatencyProfile::Fast)).unwrap();

        let persisted = persisted(&store);
        assert_eq!(persisted.latency, Some(LatencyProfile::Fast));
        assert_eq!(persisted.errors, Some(ErrorMode::Medium));
    }

    #[test]
    fn test_clear_persisted() {
        let store = MemoryStore::new();
        set_persisted(
            &store,
            SimulationConfig::full(LatencyProfile::Slow, ErrorMode::Low),
        )
        .unwrap();
        clear_persisted(&store).unwrap();

        let persisted = persisted(&store);
        assert_eq!(persisted.latency, None);
        assert_eq!(persisted.errors, None);
    }
}
