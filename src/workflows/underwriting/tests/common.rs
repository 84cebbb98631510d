use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::workflows::underwriting::domain::{
    AssessmentResult, PaymentMethod, TransactionKind, TransactionRecord, TrendDirection, VenueId,
    VenueIdentity, VenueMetrics,
};
use crate::workflows::underwriting::repository::{
    AssessmentSnapshot, AssessmentStore, RepositoryError, VenueDataSource,
};
use crate::workflows::underwriting::{ScoringConfig, ScoringEngine, UnderwritingEngine};

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(scoring_config())
}

pub(super) fn underwriting_engine() -> UnderwritingEngine {
    UnderwritingEngine::new(scoring_config())
}

pub(super) fn venue() -> VenueIdentity {
    VenueIdentity {
        id: VenueId("ven-001".to_string()),
        name: "Harbor Coffee".to_string(),
        slug: "harbor-coffee".to_string(),
        organization: "Harbor Hospitality Group".to_string(),
    }
}

pub(super) fn sale(amount: f64, days_ago: i64, now: DateTime<Utc>) -> TransactionRecord {
    TransactionRecord {
        amount,
        kind: TransactionKind::Sale,
        method: PaymentMethod::Card,
        occurred_at: now - Duration::days(days_ago),
    }
}

pub(super) fn refund(amount: f64, days_ago: i64, now: DateTime<Utc>) -> TransactionRecord {
    TransactionRecord {
        amount,
        kind: TransactionKind::Refund,
        method: PaymentMethod::Card,
        occurred_at: now - Duration::days(days_ago),
    }
}

/// `per_day` card sales of `amount` every day for the trailing `days` days,
/// including today.
pub(super) fn steady_history(
    days: i64,
    per_day: u32,
    amount: f64,
    now: DateTime<Utc>,
) -> Vec<TransactionRecord> {
    let mut transactions = Vec::new();
    for day in 0..days {
        for slot in 0..per_day {
            transactions.push(TransactionRecord {
                amount,
                kind: TransactionKind::Sale,
                method: PaymentMethod::Card,
                occurred_at: now - Duration::days(day) - Duration::hours(1 + slot as i64),
            });
        }
    }
    transactions
}

/// Metrics for a mature, high-volume, low-risk venue: every pillar lands at
/// or near its maximum.
pub(super) fn healthy_metrics() -> VenueMetrics {
    VenueMetrics {
        days_in_operation: 400,
        is_new_business: false,
        raw_volume: 10_000_000.0,
        annualized_volume: 10_000_000.0,
        monthly_average: 830_000.0,
        current_month_volume: 900_000.0,
        previous_month_volume: 750_000.0,
        two_months_ago_volume: 700_000.0,
        transaction_count: 20_000,
        average_ticket: 500.0,
        median_ticket: 450.0,
        month_over_month_growth: 20.0,
        three_month_trend: 20.0,
        velocity_score: 55.0,
        trend_direction: TrendDirection::Growing,
        revenue_cv: 0.05,
        consistency_score: 100.0,
        operating_days_ratio: 0.95,
        days_since_last_transaction: 1,
        peak_to_trough_ratio: 1.3,
        chargeback_rate: 0.0,
        chargeback_count: 0,
        refund_rate: 0.01,
        refund_count: 20,
        large_transaction_ratio: 0.05,
        card_ratio: 0.9,
        payment_method_mix: Default::default(),
    }
}

#[derive(Default)]
pub(super) struct MemoryDataSource {
    pub(super) venues: HashMap<VenueId, VenueIdentity>,
    pub(super) transactions: HashMap<VenueId, Vec<TransactionRecord>>,
}

impl MemoryDataSource {
    pub(super) fn with_venue(
        venue: VenueIdentity,
        transactions: Vec<TransactionRecord>,
    ) -> Self {
        let mut source = Self::default();
        source.transactions.insert(venue.id.clone(), transactions);
        source.venues.insert(venue.id.clone(), venue);
        source
    }
}

impl VenueDataSource for MemoryDataSource {
    fn venue(&self, id: &VenueId) -> Result<Option<VenueIdentity>, RepositoryError> {
        Ok(self.venues.get(id).cloned())
    }

    fn transactions(
        &self,
        id: &VenueId,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<TransactionRecord>, RepositoryError> {
        Ok(self
            .transactions
            .get(id)
            .map(|records| {
                records
                    .iter()
                    .filter(|tx| tx.occurred_at > since && tx.occurred_at <= until)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    pub(super) current: Mutex<HashMap<VenueId, AssessmentResult>>,
    pub(super) history: Mutex<Vec<AssessmentSnapshot>>,
}

impl MemoryStore {
    pub(super) fn history(&self) -> Vec<AssessmentSnapshot> {
        self.history.lock().expect("store mutex poisoned").clone()
    }

    pub(super) fn current_for(&self, id: &VenueId) -> Option<AssessmentResult> {
        self.current
            .lock()
            .expect("store mutex poisoned")
            .get(id)
            .cloned()
    }
}

impl AssessmentStore for MemoryStore {
    fn upsert_current(&self, result: &AssessmentResult) -> Result<(), RepositoryError> {
        self.current
            .lock()
            .expect("store mutex poisoned")
            .insert(result.venue.id.clone(), result.clone());
        Ok(())
    }

    fn append_history(&self, snapshot: AssessmentSnapshot) -> Result<(), RepositoryError> {
        self.history
            .lock()
            .expect("store mutex poisoned")
            .push(snapshot);
        Ok(())
    }
}

pub(super) struct UnavailableDataSource;

impl VenueDataSource for UnavailableDataSource {
    fn venue(&self, _id: &VenueId) -> Result<Option<VenueIdentity>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn transactions(
        &self,
        _id: &VenueId,
        _since: DateTime<Utc>,
        _until: DateTime<Utc>,
    ) -> Result<Vec<TransactionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
