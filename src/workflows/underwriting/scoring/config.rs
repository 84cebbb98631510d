use serde::{Deserialize, Serialize};

use crate::workflows::underwriting::domain::CreditGrade;

/// Every tunable threshold of the scoring model in one structure, so a
/// market can be recalibrated by constructing a different config without
/// touching the scoring functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub gates: GateThresholds,
    pub weights: PillarWeights,
    /// Points subtracted from the composite when any gate fails.
    pub gate_penalty: f64,
    pub volume_tiers: Vec<ScoreTier>,
    pub maturity_tiers: Vec<ScoreTier>,
    pub grade_cutoffs: GradeCutoffs,
    pub offers: OfferTable,
    pub limit_rounding: f64,
    pub limit_floor: f64,
    pub limit_ceiling: f64,
}

/// Hard eligibility gate thresholds, all inclusive bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateThresholds {
    pub min_days_in_operation: i64,
    pub min_annualized_volume: f64,
    pub min_transaction_count: u32,
    pub max_chargeback_rate: f64,
    pub max_days_since_last_transaction: i64,
    pub min_operating_days_ratio: f64,
}

/// Relative weight of each pillar in the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarWeights {
    pub volume: f64,
    pub growth: f64,
    pub stability: f64,
    pub risk: f64,
    pub maturity: f64,
}

impl PillarWeights {
    pub fn sum(&self) -> f64 {
        self.volume + self.growth + self.stability + self.risk + self.maturity
    }
}

/// One anchor of a piecewise-linear score curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTier {
    pub threshold: f64,
    pub score: f64,
}

/// Minimum composite score per letter grade; scores below `c` grade D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCutoffs {
    pub a: u8,
    pub b: u8,
    pub c: u8,
}

/// Offer sizing constants for one grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferTerms {
    /// Fraction of annualized volume extended as the credit limit.
    pub credit_percent: f64,
    /// Fixed repayment multiplier, not an interest rate.
    pub factor_rate: f64,
    /// Share of daily sales captured for repayment.
    pub repayment_percent: f64,
}

/// Per-grade offer terms; grade D venues never receive an offer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferTable {
    pub grade_a: OfferTerms,
    pub grade_b: OfferTerms,
    pub grade_c: OfferTerms,
}

impl OfferTable {
    pub fn for_grade(&self, grade: CreditGrade) -> Option<&OfferTerms> {
        match grade {
            CreditGrade::A => Some(&self.grade_a),
            CreditGrade::B => Some(&self.grade_b),
            CreditGrade::C => Some(&self.grade_c),
            CreditGrade::D => None,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let gates = GateThresholds {
            min_days_in_operation: 90,
            min_annualized_volume: 300_000.0,
            min_transaction_count: 200,
            max_chargeback_rate: 0.015,
            max_days_since_last_transaction: 14,
            min_operating_days_ratio: 0.5,
        };
        let volume_tiers = vec![
            ScoreTier {
                threshold: gates.min_annualized_volume,
                score: 30.0,
            },
            ScoreTier {
                threshold: 500_000.0,
                score: 50.0,
            },
            ScoreTier {
                threshold: 1_000_000.0,
                score: 65.0,
            },
            ScoreTier {
                threshold: 2_500_000.0,
                score: 80.0,
            },
            ScoreTier {
                threshold: 5_000_000.0,
                score: 90.0,
            },
            ScoreTier {
                threshold: 10_000_000.0,
                score: 100.0,
            },
        ];
        let maturity_tiers = vec![
            ScoreTier {
                threshold: 90.0,
                score: 50.0,
            },
            ScoreTier {
                threshold: 180.0,
                score: 65.0,
            },
            ScoreTier {
                threshold: 365.0,
                score: 80.0,
            },
            ScoreTier {
                threshold: 730.0,
                score: 95.0,
            },
        ];

        Self {
            gates,
            weights: PillarWeights {
                volume: 0.25,
                growth: 0.20,
                stability: 0.25,
                risk: 0.20,
                maturity: 0.10,
            },
            gate_penalty: 30.0,
            volume_tiers,
            maturity_tiers,
            grade_cutoffs: GradeCutoffs { a: 80, b: 65, c: 50 },
            offers: OfferTable {
                grade_a: OfferTerms {
                    credit_percent: 0.25,
                    factor_rate: 1.08,
                    repayment_percent: 0.12,
                },
                grade_b: OfferTerms {
                    credit_percent: 0.18,
                    factor_rate: 1.12,
                    repayment_percent: 0.15,
                },
                grade_c: OfferTerms {
                    credit_percent: 0.12,
                    factor_rate: 1.18,
                    repayment_percent: 0.18,
                },
            },
            limit_rounding: 10_000.0,
            limit_floor: 50_000.0,
            limit_ceiling: 3_000_000.0,
        }
    }
}
