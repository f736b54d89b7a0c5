//! Preset loader
//!
//! Applies fixture bundles and snapshots to the bucket store. All
//! application paths are staged: every document is serialized before
//! the first write, and prior bucket contents are restored if a
//! backend write fails mid-sequence, so callers never observe a
//! half-applied preset.

use super::{build, PresetBundle};
use crate::snapshot::StorageSnapshot;
use serde::Serialize;
use std::sync::Arc;
use storage::{Bucket, StorageError, Store};
use thiserror::Error;
use tracing::{info, warn};

/// Preset and snapshot application failures
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("unknown preset: {0}")]
    Unknown(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Applies presets and snapshots against a bucket store
pub struct PresetLoader {
    store: Arc<dyn Store>,
}

impl PresetLoader {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Apply a registered preset by name
    ///
    /// Only buckets named by the bundle are written; everything else is
    /// left untouched. The applied name is recorded under
    /// [`Bucket::ActivePreset`].
    pub fn apply_preset(&self, name: &str) -> Result<(), PresetError> {
        let bundle = build(name).ok_or_else(|| PresetError::Unknown(name.to_string()))?;

        let mut writes = stage_bundle(&bundle)?;
        writes.push((Bucket::ActivePreset, name.to_string()));
        self.commit(writes)?;

        info!(preset = name, "applied preset");
        Ok(())
    }

    /// Name of the most recently applied preset, if any
    pub fn current_preset(&self) -> Result<Option<String>, PresetError> {
        Ok(self.store.get(Bucket::ActivePreset)?)
    }

    /// Wipe every bucket, including the preset-tracking key
    ///
    /// This is a full wipe, not a restore-to-defaults.
    pub fn reset_all_storage(&self) -> Result<(), PresetError> {
        self.store.clear_all()?;
        info!("storage reset");
        Ok(())
    }

    /// Serialize every populated bucket to one JSON document
    pub fn export_storage(&self) -> Result<String, PresetError> {
        Ok(StorageSnapshot::capture(self.store.as_ref())?.to_json())
    }

    /// Apply a snapshot produced by [`export_storage`](Self::export_storage)
    ///
    /// Same set-if-present policy as `apply_preset`: buckets absent
    /// from the snapshot keep their contents. Unknown keys are ignored.
    pub fn import_storage(&self, json: &str) -> Result<(), PresetError> {
        let snapshot = StorageSnapshot::from_json(json)
            .map_err(|e| PresetError::InvalidData(e.to_string()))?;

        let writes: Vec<(Bucket, String)> = snapshot
            .buckets
            .into_iter()
            .filter_map(|(key, value)| Bucket::from_key(&key).map(|bucket| (bucket, value)))
            .collect();

        let count = writes.len();
        self.commit(writes)?;
        info!(buckets = count, "imported storage snapshot");
        Ok(())
    }

    // Stage-then-commit: capture prior contents first, restore them if
    // any write fails, so a mid-sequence failure is not observable.
    fn commit(&self, writes: Vec<(Bucket, String)>) -> Result<(), PresetError> {
        let mut previous: Vec<(Bucket, Option<String>)> = Vec::with_capacity(writes.len());
        for (bucket, _) in &writes {
            previous.push((*bucket, self.store.get(*bucket)?));
        }

        for (applied, (bucket, value)) in writes.iter().enumerate() {
            if let Err(err) = self.store.set(*bucket, value.clone()) {
                self.rollback(&previous[..applied]);
                return Err(err.into());
            }
        }
        Ok(())
    }

    fn rollback(&self, previous: &[(Bucket, Option<String>)]) {
        for (bucket, prior) in previous {
            let result = match prior {
                Some(value) => self.store.set(*bucket, value.clone()),
                None => self.store.remove(*bucket),
            };
            if let Err(err) = result {
                warn!(%bucket, %err, "rollback write failed");
            }
        }
    }
}

fn stage_bundle(bundle: &PresetBundle) -> Result<Vec<(Bucket, String)>, PresetError> {
    let mut writes = Vec::new();

    if let Some(dataset) = &bundle.dataset {
        stage_json(&mut writes, Bucket::Listings, dataset.marketplace.as_ref())?;
        stage_json(&mut writes, Bucket::Posts, dataset.posts.as_ref())?;
        stage_json(&mut writes, Bucket::Events, dataset.events.as_ref())?;
    }

    if let Some(user_state) = &bundle.user_state {
        stage_json(&mut writes, Bucket::Favorites, user_state.favorites.as_ref())?;
        stage_json(
            &mut writes,
            Bucket::VerifyHistory,
            user_state.verify_history.as_ref(),
        )?;
        stage_json(
            &mut writes,
            Bucket::ConsignDrafts,
            user_state.consign_drafts.as_ref(),
        )?;
        stage_json(
            &mut writes,
            Bucket::ConsignSubmissions,
            user_state.consign_submissions.as_ref(),
        )?;
        stage_json(
            &mut writes,
            Bucket::Notifications,
            user_state.notifications.as_ref(),
        )?;
    }

    stage_json(&mut writes, Bucket::VerifyMapping, bundle.verify_mapping.as_ref())?;

    // Simulation fields persist as plain tags, not JSON documents
    if let Some(simulation) = &bundle.simulation {
        if let Some(profile) = simulation.latency {
            writes.push((Bucket::SimLatency, profile.as_str().to_string()));
        }
        if let Some(mode) = simulation.errors {
            writes.push((Bucket::SimErrors, mode.as_str().to_string()));
        }
    }

    Ok(writes)
}

fn stage_json<T: Serialize>(
    writes: &mut Vec<(Bucket, String)>,
    bucket: Bucket,
    value: Option<&T>,
) -> Result<(), PresetError> {
    if let Some(value) = value {
        let raw =
            serde_json::to_string(value).map_err(|e| PresetError::InvalidData(e.to_string()))?;
        writes.push((bucket, raw));
    }
    Ok(())
}
