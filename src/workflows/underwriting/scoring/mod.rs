mod config;
mod gates;
mod pillars;
mod policy;

pub use config::{
    GateThresholds, GradeCutoffs, OfferTable, OfferTerms, PillarWeights, ScoreTier, ScoringConfig,
};

use crate::workflows::underwriting::domain::{
    CreditGrade, EligibilityGates, EligibilityStatus, ScoreBreakdown, VenueMetrics,
};

/// Stateless scorer applying the configured thresholds to a metrics snapshot.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn check_gates(&self, metrics: &VenueMetrics) -> EligibilityGates {
        gates::check_gates(metrics, &self.config.gates)
    }

    /// Computes all five pillar scores and the weighted composite. Gate
    /// failure subtracts the configured penalty from the composite but never
    /// suppresses the pillar scores themselves.
    pub fn score(&self, metrics: &VenueMetrics, gates: &EligibilityGates) -> ScoreBreakdown {
        let volume_score = pillars::volume_score(metrics, &self.config);
        let growth_score = pillars::growth_score(metrics);
        let stability_score = pillars::stability_score(metrics);
        let risk_score = pillars::risk_score(metrics);
        let maturity_score = pillars::maturity_score(metrics, &self.config);

        let weights = &self.config.weights;
        let weighted = weights.volume * volume_score as f64
            + weights.growth * growth_score as f64
            + weights.stability * stability_score as f64
            + weights.risk * risk_score as f64
            + weights.maturity * maturity_score as f64;
        let penalty = if gates.passed {
            0.0
        } else {
            self.config.gate_penalty
        };
        let total_score = (weighted.round() - penalty).clamp(0.0, 100.0) as u8;

        ScoreBreakdown {
            volume_score,
            growth_score,
            stability_score,
            risk_score,
            maturity_score,
            total_score,
        }
    }

    pub fn grade(&self, total_score: u8) -> CreditGrade {
        policy::grade_for_score(total_score, &self.config.grade_cutoffs)
    }

    pub fn eligibility(&self, grade: CreditGrade, gates: &EligibilityGates) -> EligibilityStatus {
        policy::resolve_eligibility(grade, gates)
    }
}
