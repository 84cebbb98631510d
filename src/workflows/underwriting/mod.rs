//! Merchant venue underwriting: metrics derivation, eligibility gates, the
//! five-pillar scoring model, and credit offer sizing.
//!
//! The engine is a pure function of a venue's transaction history as of a
//! point in time; the service module wires it to the collaborator traits
//! that fetch history and persist results.

pub(crate) mod alerts;
pub mod domain;
pub mod metrics;
pub(crate) mod recommendation;
pub mod repository;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};

pub use domain::{
    AssessmentResult, CreditGrade, CreditRecommendation, EligibilityGates, EligibilityStatus,
    PaymentMethod, ScoreBreakdown, TransactionKind, TransactionRecord, TrendDirection, VenueId,
    VenueIdentity, VenueMetrics,
};
pub use metrics::derive_metrics;
pub use repository::{
    AssessmentSnapshot, AssessmentStore, RepositoryError, VenueDataSource,
};
pub use scoring::{
    GateThresholds, GradeCutoffs, OfferTable, OfferTerms, PillarWeights, ScoreTier, ScoringConfig,
    ScoringEngine,
};
pub use service::{AssessmentService, AssessmentServiceError, BatchOutcome};

/// Stateless assessment engine composing the metrics deriver, gate checker,
/// pillar scorers, classifier, alert generator, and offer sizing.
pub struct UnderwritingEngine {
    scoring: ScoringEngine,
}

impl UnderwritingEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            scoring: ScoringEngine::new(config),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        self.scoring.config()
    }

    /// Runs the full decision cascade for one venue against its trailing
    /// transaction history as of `as_of`.
    pub fn assess(
        &self,
        venue: VenueIdentity,
        transactions: &[TransactionRecord],
        as_of: DateTime<Utc>,
    ) -> AssessmentResult {
        let metrics = metrics::derive_metrics(transactions, as_of);
        let gates = self.scoring.check_gates(&metrics);
        let breakdown = self.scoring.score(&metrics, &gates);
        let grade = self.scoring.grade(breakdown.total_score);
        let eligibility = self.scoring.eligibility(grade, &gates);
        let alerts = alerts::generate_alerts(&metrics, &gates);
        let recommendation =
            recommendation::recommend(grade, eligibility, &metrics, self.scoring.config());

        AssessmentResult {
            venue,
            gates,
            breakdown,
            grade,
            eligibility,
            metrics,
            recommendation,
            alerts,
            calculated_at: as_of,
            data_as_of: as_of,
        }
    }
}
