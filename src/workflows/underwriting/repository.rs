use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    AssessmentResult, CreditGrade, TransactionRecord, VenueId, VenueIdentity,
};

/// Read side of the assessment workflow: identity plus the ordered trailing
/// transaction history. Abstracted so the engine can be exercised against
/// in-memory fixtures.
pub trait VenueDataSource: Send + Sync {
    fn venue(&self, id: &VenueId) -> Result<Option<VenueIdentity>, RepositoryError>;

    /// Completed sale/refund records with `since < occurred_at <= until`,
    /// ordered by `occurred_at`.
    fn transactions(
        &self,
        id: &VenueId,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<TransactionRecord>, RepositoryError>;
}

/// Write side: one mutable current assessment per venue plus an append-only
/// history series.
pub trait AssessmentStore: Send + Sync {
    fn upsert_current(&self, result: &AssessmentResult) -> Result<(), RepositoryError>;
    fn append_history(&self, snapshot: AssessmentSnapshot) -> Result<(), RepositoryError>;
}

/// Immutable point-in-time history entry written after every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    pub venue_id: VenueId,
    pub total_score: u8,
    pub grade: CreditGrade,
    pub annualized_volume: f64,
    pub month_over_month_growth: f64,
    pub recorded_at: DateTime<Utc>,
}

impl AssessmentSnapshot {
    pub fn from_result(result: &AssessmentResult) -> Self {
        Self {
            venue_id: result.venue.id.clone(),
            total_score: result.breakdown.total_score,
            grade: result.grade,
            annualized_volume: result.metrics.annualized_volume,
            month_over_month_growth: result.metrics.month_over_month_growth,
            recorded_at: result.calculated_at,
        }
    }
}

/// Error enumeration for collaborator store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
