use super::domain::{EligibilityGates, VenueMetrics};

const DECLINING_MOM_PERCENT: f64 = -10.0;
const STALE_ACTIVITY_DAYS: std::ops::RangeInclusive<i64> = 7..=14;
const HIGH_VOLATILITY_CV: f64 = 0.5;
const LOW_CARD_RATIO: f64 = 0.3;

/// Builds the advisory alert list for an assessment: every gate failure
/// verbatim, followed by secondary risk signals. Alerts never influence the
/// score or the eligibility decision.
pub(crate) fn generate_alerts(metrics: &VenueMetrics, gates: &EligibilityGates) -> Vec<String> {
    let mut alerts = gates.failures.clone();

    if metrics.month_over_month_growth < DECLINING_MOM_PERCENT {
        alerts.push(format!(
            "revenue declining: month-over-month change {:.1}%",
            metrics.month_over_month_growth
        ));
    }

    if STALE_ACTIVITY_DAYS.contains(&metrics.days_since_last_transaction) {
        alerts.push(format!(
            "low recent activity: last transaction {} day(s) ago",
            metrics.days_since_last_transaction
        ));
    }

    if metrics.revenue_cv > HIGH_VOLATILITY_CV {
        alerts.push(format!(
            "high revenue volatility: coefficient of variation {:.2}",
            metrics.revenue_cv
        ));
    }

    if metrics.card_ratio < LOW_CARD_RATIO {
        alerts.push(format!(
            "low card usage: card ratio {:.2}",
            metrics.card_ratio
        ));
    }

    if metrics.is_new_business {
        alerts.push("new business: fewer than 180 days of operating history".to_string());
    }

    alerts
}
