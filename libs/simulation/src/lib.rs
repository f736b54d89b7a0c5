//! Simulation & Mock-Service Layer
//!
//! Demo-grade latency and failure injection for the Relique platform.
//! Mock services wrap their operations in [`SimHarness::with_simulation`]
//! to pick up configurable delays and synthetic errors, and presets seed
//! the bucket store with coherent demo datasets.
//!
//! # Modules
//! - `latency` — Named delay profiles and uniform delay draws
//! - `inject` — Error modes, probabilities, and the forced-error slot
//! - `config` — Layered configuration (override → store → env → default)
//! - `harness` — `SimHarness`: composition of injection and delay
//! - `preset` — Named fixture bundles and the loader that applies them
//! - `snapshot` — Export/import of the full bucket store as JSON

pub mod latency;
pub mod inject;
pub mod config;
pub mod harness;
pub mod preset;
pub mod snapshot;

pub use config::{EnvOverrides, ResolvedConfig, SimulationConfig};
pub use harness::SimHarness;
pub use inject::ErrorMode;
pub use latency::LatencyProfile;
pub use preset::{PresetBundle, PresetError, PresetLoader};
pub use snapshot::StorageSnapshot;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
