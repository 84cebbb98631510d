use super::common::*;

#[test]
fn healthy_venue_passes_every_gate() {
    let gates = scoring_engine().check_gates(&healthy_metrics());

    assert!(gates.passed);
    assert!(gates.failures.is_empty());
}

#[test]
fn gate_boundaries_are_inclusive() {
    let mut metrics = healthy_metrics();
    metrics.days_in_operation = 90;
    metrics.annualized_volume = 300_000.0;
    metrics.transaction_count = 200;
    metrics.chargeback_rate = 0.015;
    metrics.days_since_last_transaction = 14;
    metrics.operating_days_ratio = 0.5;

    let gates = scoring_engine().check_gates(&metrics);

    assert!(gates.minimum_days_in_operation);
    assert!(gates.minimum_annualized_volume);
    assert!(gates.minimum_transaction_count);
    assert!(gates.maximum_chargeback_rate);
    assert!(gates.recent_activity);
    assert!(gates.operating_consistency);
    assert!(gates.passed);
}

#[test]
fn short_operating_history_fails_with_concrete_values() {
    let mut metrics = healthy_metrics();
    metrics.days_in_operation = 45;

    let gates = scoring_engine().check_gates(&metrics);

    assert!(!gates.minimum_days_in_operation);
    assert!(!gates.passed);
    assert_eq!(gates.failures.len(), 1);
    assert!(gates.failures[0].contains("days in operation 45"));
    assert!(gates.failures[0].contains("90"));
}

#[test]
fn stale_activity_fails_recency_gate() {
    let mut metrics = healthy_metrics();
    metrics.days_since_last_transaction = 30;

    let gates = scoring_engine().check_gates(&metrics);

    assert!(!gates.recent_activity);
    assert!(gates
        .failures
        .iter()
        .any(|failure| failure.contains("last transaction 30 day(s) ago")));
}

#[test]
fn multiple_failures_are_reported_in_gate_order() {
    let mut metrics = healthy_metrics();
    metrics.days_in_operation = 10;
    metrics.annualized_volume = 1_000.0;
    metrics.transaction_count = 3;
    metrics.operating_days_ratio = 0.1;

    let gates = scoring_engine().check_gates(&metrics);

    assert!(!gates.passed);
    assert_eq!(gates.failures.len(), 4);
    assert!(gates.failures[0].contains("days in operation"));
    assert!(gates.failures[1].contains("annualized volume"));
    assert!(gates.failures[2].contains("transaction count"));
    assert!(gates.failures[3].contains("operating days ratio"));
}

#[test]
fn excessive_chargebacks_fail_the_gate() {
    let mut metrics = healthy_metrics();
    metrics.chargeback_rate = 0.02;

    let gates = scoring_engine().check_gates(&metrics);

    assert!(!gates.maximum_chargeback_rate);
    assert!(gates
        .failures
        .iter()
        .any(|failure| failure.contains("chargeback rate")));
}
