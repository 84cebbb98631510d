//! The five pillar scoring functions. Each is a pure mapping from the
//! metrics snapshot to an integer in [0, 100] and can be tested in
//! isolation; the weighting happens in the composite scorer.

use super::config::{ScoreTier, ScoringConfig};
use crate::workflows::underwriting::domain::{TrendDirection, VenueMetrics};

/// Volume pillar: piecewise-linear over annualized volume, with a small
/// additive bonus for high transaction velocity.
pub(crate) fn volume_score(metrics: &VenueMetrics, config: &ScoringConfig) -> u8 {
    let base = interpolate(metrics.annualized_volume, &config.volume_tiers);
    let bonus = if metrics.velocity_score > 20.0 {
        5.0
    } else if metrics.velocity_score > 10.0 {
        3.0
    } else {
        0.0
    };
    clamp_score(base + bonus)
}

/// Growth pillar. New businesses have too little monthly history for the
/// month-over-month trend to mean anything, so they are scored on
/// transaction velocity instead.
pub(crate) fn growth_score(metrics: &VenueMetrics) -> u8 {
    let mut score: f64 = 50.0;

    if metrics.is_new_business {
        score += match metrics.velocity_score {
            v if v > 20.0 => 25.0,
            v if v > 10.0 => 15.0,
            v if v > 5.0 => 5.0,
            _ => -10.0,
        };
        score += match metrics.trend_direction {
            TrendDirection::Growing => 15.0,
            TrendDirection::Flat => 0.0,
            TrendDirection::Declining => -15.0,
        };
    } else {
        let trend = metrics.three_month_trend;
        score += if trend >= 15.0 {
            40.0
        } else if trend >= 5.0 {
            25.0
        } else if trend >= 0.0 {
            10.0
        } else if trend >= -5.0 {
            -10.0
        } else {
            -25.0
        };
        score += match metrics.trend_direction {
            TrendDirection::Growing => 10.0,
            TrendDirection::Flat => 0.0,
            TrendDirection::Declining => -10.0,
        };
    }

    clamp_score(score)
}

/// Stability pillar: three weighted sub-components summing to 100 points.
pub(crate) fn stability_score(metrics: &VenueMetrics) -> u8 {
    let cv = metrics.revenue_cv;
    let cv_points = if cv <= 0.15 {
        40.0
    } else if cv <= 0.3 {
        30.0
    } else if cv <= 0.5 {
        20.0
    } else if cv <= 0.75 {
        10.0
    } else {
        0.0
    };

    let ratio = metrics.operating_days_ratio;
    let operating_points = if ratio >= 0.9 {
        35.0
    } else if ratio >= 0.7 {
        25.0
    } else if ratio >= 0.5 {
        15.0
    } else {
        5.0
    };

    let consistency_points = (metrics.consistency_score / 100.0).clamp(0.0, 1.0) * 25.0;

    clamp_score(cv_points + operating_points + consistency_points)
}

/// Risk pillar: starts at 100 and deducts per risk signal, with a small
/// bonus for card-heavy payment mixes.
pub(crate) fn risk_score(metrics: &VenueMetrics) -> u8 {
    let mut score: f64 = 100.0;

    let chargebacks = metrics.chargeback_rate;
    score -= if chargebacks > 0.03 {
        50.0
    } else if chargebacks > 0.02 {
        35.0
    } else if chargebacks > 0.015 {
        20.0
    } else if chargebacks > 0.0075 {
        10.0
    } else {
        0.0
    };

    let refunds = metrics.refund_rate;
    score -= if refunds > 0.15 {
        30.0
    } else if refunds > 0.10 {
        20.0
    } else if refunds > 0.05 {
        10.0
    } else {
        0.0
    };

    let outliers = metrics.large_transaction_ratio;
    score -= if outliers > 0.2 {
        10.0
    } else if outliers > 0.1 {
        5.0
    } else {
        0.0
    };

    if metrics.card_ratio > 0.8 {
        score += 10.0;
    } else if metrics.card_ratio > 0.6 {
        score += 5.0;
    }

    clamp_score(score)
}

/// Maturity pillar: piecewise-linear over operating age plus a density bonus.
pub(crate) fn maturity_score(metrics: &VenueMetrics, config: &ScoringConfig) -> u8 {
    let base = interpolate(metrics.days_in_operation as f64, &config.maturity_tiers);
    let density = if metrics.days_in_operation > 0 {
        metrics.transaction_count as f64 / metrics.days_in_operation as f64
    } else {
        0.0
    };
    let bonus = if density >= 5.0 { 5.0 } else { 0.0 };
    clamp_score(base + bonus)
}

/// Linear interpolation over ascending score tiers, anchored at the origin
/// below the first tier and flat above the last.
pub(crate) fn interpolate(value: f64, tiers: &[ScoreTier]) -> f64 {
    let Some(first) = tiers.first() else {
        return 0.0;
    };
    if value <= 0.0 {
        return 0.0;
    }
    if value < first.threshold {
        if first.threshold <= 0.0 {
            return first.score;
        }
        return first.score * value / first.threshold;
    }
    for pair in tiers.windows(2) {
        let (low, high) = (pair[0], pair[1]);
        if value < high.threshold {
            let span = high.threshold - low.threshold;
            if span <= 0.0 {
                return high.score;
            }
            return low.score + (high.score - low.score) * (value - low.threshold) / span;
        }
    }
    tiers[tiers.len() - 1].score
}

pub(crate) fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
