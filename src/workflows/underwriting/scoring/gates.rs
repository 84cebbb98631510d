use super::config::GateThresholds;
use crate::workflows::underwriting::domain::{EligibilityGates, VenueMetrics};

/// Applies the six hard eligibility rules. Failure never short-circuits
/// scoring; the composite scorer only learns the aggregate outcome.
pub(crate) fn check_gates(metrics: &VenueMetrics, thresholds: &GateThresholds) -> EligibilityGates {
    let mut failures = Vec::new();

    let minimum_days_in_operation =
        metrics.days_in_operation >= thresholds.min_days_in_operation;
    if !minimum_days_in_operation {
        failures.push(format!(
            "days in operation {} below required minimum {}",
            metrics.days_in_operation, thresholds.min_days_in_operation
        ));
    }

    let minimum_annualized_volume =
        metrics.annualized_volume >= thresholds.min_annualized_volume;
    if !minimum_annualized_volume {
        failures.push(format!(
            "annualized volume {:.0} below required minimum {:.0}",
            metrics.annualized_volume, thresholds.min_annualized_volume
        ));
    }

    let minimum_transaction_count =
        metrics.transaction_count >= thresholds.min_transaction_count;
    if !minimum_transaction_count {
        failures.push(format!(
            "transaction count {} below required minimum {}",
            metrics.transaction_count, thresholds.min_transaction_count
        ));
    }

    let maximum_chargeback_rate = metrics.chargeback_rate <= thresholds.max_chargeback_rate;
    if !maximum_chargeback_rate {
        failures.push(format!(
            "chargeback rate {:.4} exceeds maximum {:.4}",
            metrics.chargeback_rate, thresholds.max_chargeback_rate
        ));
    }

    let recent_activity =
        metrics.days_since_last_transaction <= thresholds.max_days_since_last_transaction;
    if !recent_activity {
        failures.push(format!(
            "last transaction {} day(s) ago, maximum allowed {}",
            metrics.days_since_last_transaction, thresholds.max_days_since_last_transaction
        ));
    }

    let operating_consistency =
        metrics.operating_days_ratio >= thresholds.min_operating_days_ratio;
    if !operating_consistency {
        failures.push(format!(
            "operating days ratio {:.2} below required minimum {:.2}",
            metrics.operating_days_ratio, thresholds.min_operating_days_ratio
        ));
    }

    let passed = minimum_days_in_operation
        && minimum_annualized_volume
        && minimum_transaction_count
        && maximum_chargeback_rate
        && recent_activity
        && operating_consistency;

    EligibilityGates {
        minimum_days_in_operation,
        minimum_annualized_volume,
        minimum_transaction_count,
        maximum_chargeback_rate,
        recent_activity,
        operating_consistency,
        passed,
        failures,
    }
}
