//! Mock consignment service
//!
//! Drafts are editable intake forms; submitting freezes a draft into a
//! submission awaiting review. The two buckets are written
//! independently, like every other pair in the store.

use crate::storage_failure;
use chrono::Utc;
use simulation::{SimHarness, SimulationConfig};
use std::sync::Arc;
use storage::{Bucket, Store, StoreExt};
use tracing::info;
use types::consign::{ConsignDraft, ConsignSubmission};
use types::errors::{ErrorCode, ServiceError};
use types::ids::DraftId;

pub struct ConsignService {
    harness: Arc<SimHarness>,
    store: Arc<dyn Store>,
    config: SimulationConfig,
}

impl ConsignService {
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

    /// Create or update a draft (keyed by its id); stamps `updated_at`
    pub async fn save_draft(&self, draft: ConsignDraft) -> Result<ConsignDraft, ServiceError> {
        self.harness
            .with_simulation(self.config, async {
                let mut draft = draft;
                draft.updated_at = Utc::now();

                let mut drafts = self.all_drafts()?;
                match drafts.iter_mut().find(|d| d.id == draft.id) {
                    Some(existing) => *existing = draft.clone(),
                    None => drafts.push(draft.clone()),
                }
                self.store
                    .set_json(Bucket::ConsignDrafts, &drafts)
                    .map_err(storage_failure)?;
                Ok(draft)
            })
            .await
    }

    /// All drafts, in save order
    pub async fn drafts(&self) -> Result<Vec<ConsignDraft>, ServiceError> {
        self.harness
            .with_simulation(self.config, async { self.all_drafts() })
            .await
    }

    /// Freeze a draft into a submission
    ///
    /// Removes the draft and appends a `Submitted` submission. The two
    /// bucket writes are not atomic; a storage failure in between can
    /// drop the draft without recording the submission.
    pub async fn submit(&self, id: DraftId) -> Result<ConsignSubmission, ServiceError> {
        self.harness
            .with_simulation(self.config, async {
                let mut drafts = self.all_drafts()?;
                let position = drafts.iter().position(|d| d.id == id).ok_or_else(|| {
                    ServiceError::with_message(
                        ErrorCode::NotFound,
                        format!("No draft with id {id}"),
                    )
                })?;
                let draft = drafts.remove(position);

                let submission = ConsignSubmission::from_draft(draft, Utc::now());

                self.store
                    .set_json(Bucket::ConsignDrafts, &drafts)
                    .map_err(storage_failure)?;

                let mut submissions: Vec<ConsignSubmission> = self
                    .store
                    .get_json(Bucket::ConsignSubmissions)
                    .map_err(storage_failure)?
                    .unwrap_or_default();
                submissions.push(submission.clone());
                self.store
                    .set_json(Bucket::ConsignSubmissions, &submissions)
                    .map_err(storage_failure)?;

                info!(submission = %submission.id, "consignment submitted");
                Ok(submission)
            })
            .await
    }

    /// All submissions, newest first
    pub async fn submissions(&self) -> Result<Vec<ConsignSubmission>, ServiceError> {
        self.harness
            .with_simulation(self.config, async {
                let mut submissions: Vec<ConsignSubmission> = self
                    .store
                    .get_json(Bucket::ConsignSubmissions)
                    .map_err(storage_failure)?
                    .unwrap_or_default();
                submissions.reverse();
                Ok(submissions)
            })
            .await
    }

    fn all_drafts(&self) -> Result<Vec<ConsignDraft>, ServiceError> {
        Ok(self
            .store
            .get_json(Bucket::ConsignDrafts)
            .map_err(storage_failure)?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use simulation::{LatencyProfile, PresetLoader};
    use storage::MemoryStore;
    use types::consign::SubmissionStatus;
    use types::listing::Category;

    fn service() -> ConsignService {
        let store = Arc::new(MemoryStore::new());
        let harness = Arc::new(SimHarness::with_seed(store, 7));
        ConsignService::with_config(harness, SimulationConfig::latency(LatencyProfile::Fast))
    }

    fn new_draft() -> ConsignDraft {
        ConsignDraft {
            id: DraftId::new(),
            item_title: "Warm-up jacket, 1992 tour".to_string(),
            subject: "Dream Team".to_string(),
            category: Category::Equipment,
            description: "Team-issued, tagged size 46".to_string(),
            estimated_value: Some(Decimal::new(900_00, 2)),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_inserts_then_updates() {
        let service = service();
        let draft = service.save_draft(new_draft()).await.unwrap();
        assert_eq!(service.drafts().await.unwrap().len(), 1);

        let mut edited = draft.clone();
        edited.item_title = "Warm-up jacket, 1992 Olympics".to_string();
        service.save_draft(edited.clone()).await.unwrap();

        let drafts = service.drafts().await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].item_title, "Warm-up jacket, 1992 Olympics");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_moves_draft_to_submissions() {
        let service = service();
        let draft = service.save_draft(new_draft()).await.unwrap();

        let submission = service.submit(draft.id).await.unwrap();
        assert_eq!(submission.status, SubmissionStatus::Submitted);
        assert_eq!(submission.draft.id, draft.id);

        assert!(service.drafts().await.unwrap().is_empty());
        let submissions = service.submissions().await.unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].id, submission.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_missing_draft_is_not_found() {
        let service = service();
        let err = service.submit(DraftId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submissions_newest_first() {
        let service = service();
        let first = service.save_draft(new_draft()).await.unwrap();
        let second = service.save_draft(new_draft()).await.unwrap();

        service.submit(first.id).await.unwrap();
        service.submit(second.id).await.unwrap();

        let submissions = service.submissions().await.unwrap();
        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[0].draft.id, second.id);
        assert_eq!(submissions[1].draft.id, first.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_preset_consignor_state_is_visible() {
        let store = Arc::new(MemoryStore::new());
        PresetLoader::new(store.clone())
            .apply_preset("consignor")
            .unwrap();
        let harness = Arc::new(SimHarness::with_seed(store, 7));
        // Full override: the preset persists slow/low, which would make
        // this test probabilistic
        let service = ConsignService::with_config(
            harness,
            SimulationConfig::full(LatencyProfile::Fast, simulation::ErrorMode::Off),
        );

        assert_eq!(service.drafts().await.unwrap().len(), 1);
        let submissions = service.submissions().await.unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].status, SubmissionStatus::InReview);
    }
}
