use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::task::JoinSet;
use tracing::{info, warn};

use super::repository::{AssessmentSnapshot, AssessmentStore, RepositoryError, VenueDataSource};
use super::{AssessmentResult, ScoringConfig, UnderwritingEngine, VenueId};

const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// Orchestrates one assessment run: fetch history, run the engine, persist
/// the current result and a history snapshot.
pub struct AssessmentService<D, S> {
    source: Arc<D>,
    store: Arc<S>,
    engine: Arc<UnderwritingEngine>,
    lookback: Duration,
}

impl<D, S> AssessmentService<D, S>
where
    D: VenueDataSource + 'static,
    S: AssessmentStore + 'static,
{
    pub fn new(source: Arc<D>, store: Arc<S>, config: ScoringConfig) -> Self {
        Self::with_lookback(source, store, config, DEFAULT_LOOKBACK_DAYS)
    }

    pub fn with_lookback(
        source: Arc<D>,
        store: Arc<S>,
        config: ScoringConfig,
        lookback_days: i64,
    ) -> Self {
        Self {
            source,
            store,
            engine: Arc::new(UnderwritingEngine::new(config)),
            lookback: Duration::days(lookback_days.max(1)),
        }
    }

    /// Assesses a single venue as of `now` and persists the outcome.
    pub fn assess(
        &self,
        venue_id: &VenueId,
        now: DateTime<Utc>,
    ) -> Result<AssessmentResult, AssessmentServiceError> {
        let venue = self
            .source
            .venue(venue_id)?
            .ok_or_else(|| AssessmentServiceError::VenueNotFound(venue_id.clone()))?;

        let since = now - self.lookback;
        let transactions = self.source.transactions(venue_id, since, now)?;

        let result = self.engine.assess(venue, &transactions, now);

        self.store.upsert_current(&result)?;
        self.store.append_history(AssessmentSnapshot::from_result(&result))?;

        Ok(result)
    }

    /// Re-assesses a batch of venues concurrently. Venues are independent,
    /// so each runs as its own blocking task; a failure is logged and
    /// counted without aborting the rest of the batch.
    pub async fn assess_all(
        self: &Arc<Self>,
        venue_ids: Vec<VenueId>,
        now: DateTime<Utc>,
    ) -> BatchOutcome {
        let mut tasks = JoinSet::new();
        for venue_id in venue_ids {
            let service = Arc::clone(self);
            tasks.spawn_blocking(move || {
                let outcome = service.assess(&venue_id, now);
                (venue_id, outcome)
            });
        }

        let mut outcome = BatchOutcome::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((venue_id, Ok(result))) => {
                    outcome.succeeded += 1;
                    info!(
                        venue = %venue_id,
                        score = result.breakdown.total_score,
                        grade = result.grade.label(),
                        eligibility = result.eligibility.label(),
                        "venue assessed"
                    );
                }
                Ok((venue_id, Err(err))) => {
                    outcome.failed += 1;
                    warn!(venue = %venue_id, error = %err, "venue assessment failed");
                }
                Err(join_err) => {
                    outcome.failed += 1;
                    warn!(error = %join_err, "assessment task aborted");
                }
            }
        }

        info!(
            succeeded = outcome.succeeded,
            failed = outcome.failed,
            "batch assessment complete"
        );
        outcome
    }
}

/// Success/failure tally for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: u32,
    pub failed: u32,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("venue {0} not found")]
    VenueNotFound(VenueId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
