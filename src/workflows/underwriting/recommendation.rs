use super::domain::{CreditGrade, CreditRecommendation, EligibilityStatus, VenueMetrics};
use super::scoring::ScoringConfig;

/// Sizes and prices a revenue-based credit offer from the grade and the
/// venue's annualized volume. Ineligible venues and grade D receive the
/// all-zero declined recommendation.
pub(crate) fn recommend(
    grade: CreditGrade,
    eligibility: EligibilityStatus,
    metrics: &VenueMetrics,
    config: &ScoringConfig,
) -> CreditRecommendation {
    if eligibility == EligibilityStatus::Ineligible {
        return CreditRecommendation::declined();
    }
    let Some(terms) = config.offers.for_grade(grade) else {
        return CreditRecommendation::declined();
    };

    let raw_limit = metrics.annualized_volume * terms.credit_percent;
    let rounded = (raw_limit / config.limit_rounding).round() * config.limit_rounding;
    let recommended_limit = rounded.clamp(config.limit_floor, config.limit_ceiling);

    let total_repayment = recommended_limit * terms.factor_rate;

    // Daily repayment capacity drives the term; fall back to a one-year term
    // when the venue has no measurable daily sales.
    let daily_capacity = metrics.annualized_volume / 365.0 * terms.repayment_percent;
    let estimated_term_days = if daily_capacity > 0.0 {
        (total_repayment / daily_capacity).round().max(1.0)
    } else {
        365.0
    };
    let monthly_payment_estimate = total_repayment / (estimated_term_days / 30.0);

    CreditRecommendation {
        recommended_limit,
        factor_rate: terms.factor_rate,
        total_repayment,
        max_repayment_percent: terms.repayment_percent,
        estimated_term_days: estimated_term_days as u32,
        monthly_payment_estimate,
    }
}
