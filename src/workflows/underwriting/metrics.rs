//! Derivation of [`VenueMetrics`] from raw transaction history.
//!
//! All statistics are computed over the trailing window the caller fetched
//! (twelve calendar months in production). Refunds never contribute to the
//! operating period or volume figures; they only feed the risk ratios.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Utc};

use super::domain::{
    PaymentMethod, TransactionKind, TransactionRecord, TrendDirection, VenueMetrics,
};

const NEW_BUSINESS_MAX_DAYS: i64 = 180;
const ANNUALIZATION_MIN_DAYS: i64 = 30;
const ANNUALIZATION_MAX_DAYS: i64 = 330;
const TREND_BAND_PERCENT: f64 = 5.0;
const LARGE_TICKET_MULTIPLE: f64 = 3.0;
/// Recency value reported when a venue has no sales at all, far enough out
/// that the recent-activity gate always fails.
const DORMANT_DAYS: i64 = 365;

/// Derives the full normalized metrics snapshot for one venue.
///
/// Deterministic for a given `(transactions, now)` pair: identical inputs
/// produce an identical snapshot.
pub fn derive_metrics(transactions: &[TransactionRecord], now: DateTime<Utc>) -> VenueMetrics {
    let sales: Vec<&TransactionRecord> = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Sale)
        .collect();

    if sales.is_empty() {
        return VenueMetrics {
            is_new_business: true,
            days_since_last_transaction: DORMANT_DAYS,
            ..VenueMetrics::default()
        };
    }

    let first_sale = sales
        .iter()
        .map(|tx| tx.occurred_at)
        .min()
        .unwrap_or(now);
    let last_sale = sales
        .iter()
        .map(|tx| tx.occurred_at)
        .max()
        .unwrap_or(now);

    let days_in_operation = (now - first_sale).num_days().max(1);
    let is_new_business = days_in_operation < NEW_BUSINESS_MAX_DAYS;
    let days_since_last_transaction = (now - last_sale).num_days().max(0);

    let raw_volume: f64 = sales.iter().map(|tx| tx.amount).sum();
    let annualized_volume =
        if (ANNUALIZATION_MIN_DAYS..ANNUALIZATION_MAX_DAYS).contains(&days_in_operation) {
            raw_volume * 365.0 / days_in_operation as f64
        } else {
            raw_volume
        };

    let transaction_count = sales.len() as u32;
    let average_ticket = safe_div(raw_volume, transaction_count as f64);
    let median_ticket = median(sales.iter().map(|tx| tx.amount).collect());

    // Calendar-month revenue buckets; BTreeMap keeps iteration deterministic.
    let mut monthly: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for tx in &sales {
        *monthly.entry(month_key(tx.occurred_at)).or_insert(0.0) += tx.amount;
    }
    let monthly_totals: Vec<f64> = monthly.values().copied().collect();
    let monthly_average = safe_div(monthly_totals.iter().sum::<f64>(), monthly_totals.len() as f64);

    let current_key = month_key(now);
    let previous_key = months_back(current_key, 1);
    let two_ago_key = months_back(current_key, 2);
    let current_month_volume = monthly.get(&current_key).copied().unwrap_or(0.0);
    let previous_month_volume = monthly.get(&previous_key).copied().unwrap_or(0.0);
    let two_months_ago_volume = monthly.get(&two_ago_key).copied().unwrap_or(0.0);

    let month_over_month_growth = percent_change(current_month_volume, previous_month_volume);
    let prior_growth = percent_change(previous_month_volume, two_months_ago_volume);
    // Average of the two most recent month-over-month readings smooths out
    // single-month noise.
    let three_month_trend = (month_over_month_growth + prior_growth) / 2.0;
    let trend_direction = if three_month_trend >= TREND_BAND_PERCENT {
        TrendDirection::Growing
    } else if three_month_trend <= -TREND_BAND_PERCENT {
        TrendDirection::Declining
    } else {
        TrendDirection::Flat
    };

    let active_days: BTreeSet<_> = sales.iter().map(|tx| tx.occurred_at.date_naive()).collect();
    let velocity_score = safe_div(transaction_count as f64, active_days.len() as f64);
    let operating_days_ratio = safe_div(
        active_days.len() as f64,
        days_in_operation.min(365) as f64,
    );

    let revenue_cv = if monthly_totals.len() < 2 || monthly_average <= 0.0 {
        0.0
    } else {
        let variance = monthly_totals
            .iter()
            .map(|total| (total - monthly_average).powi(2))
            .sum::<f64>()
            / monthly_totals.len() as f64;
        variance.sqrt() / monthly_average
    };

    let steady_months = monthly_totals
        .iter()
        .filter(|total| **total >= 0.5 * monthly_average)
        .count();
    let consistency_score = safe_div(steady_months as f64, monthly_totals.len() as f64) * 100.0;

    let peak = monthly_totals.iter().cloned().fold(f64::MIN, f64::max);
    let trough = monthly_totals.iter().cloned().fold(f64::MAX, f64::min);
    let peak_to_trough_ratio = if trough > 0.0 { peak / trough } else { 0.0 };

    let refunds: Vec<&TransactionRecord> = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Refund)
        .collect();
    let refunded: f64 = refunds.iter().map(|tx| tx.amount.abs()).sum();
    let refund_rate = safe_div(refunded, raw_volume);

    let large_sales = sales
        .iter()
        .filter(|tx| tx.amount > LARGE_TICKET_MULTIPLE * average_ticket)
        .count();
    let large_transaction_ratio = safe_div(large_sales as f64, sales.len() as f64);

    let mut payment_method_mix: BTreeMap<PaymentMethod, f64> = BTreeMap::new();
    for tx in &sales {
        *payment_method_mix.entry(tx.method).or_insert(0.0) += 1.0;
    }
    for share in payment_method_mix.values_mut() {
        *share = safe_div(*share, sales.len() as f64);
    }
    let cash_share = payment_method_mix
        .get(&PaymentMethod::Cash)
        .copied()
        .unwrap_or(0.0);
    let card_ratio = (1.0 - cash_share).max(0.0);

    VenueMetrics {
        days_in_operation,
        is_new_business,
        raw_volume,
        annualized_volume,
        monthly_average,
        current_month_volume,
        previous_month_volume,
        two_months_ago_volume,
        transaction_count,
        average_ticket,
        median_ticket,
        month_over_month_growth,
        three_month_trend,
        velocity_score,
        trend_direction,
        revenue_cv,
        consistency_score,
        operating_days_ratio,
        days_since_last_transaction,
        peak_to_trough_ratio,
        // Chargeback data comes from an external dispute feed that is not
        // wired up yet; the rate stays at zero until it lands.
        chargeback_rate: 0.0,
        chargeback_count: 0,
        refund_rate,
        refund_count: refunds.len() as u32,
        large_transaction_ratio,
        card_ratio,
        payment_method_mix,
    }
}

fn month_key(ts: DateTime<Utc>) -> (i32, u32) {
    (ts.year(), ts.month())
}

fn months_back((year, month): (i32, u32), back: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 - back;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

fn percent_change(current: f64, previous: f64) -> f64 {
    if previous <= 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    numerator / denominator
}

fn median(mut amounts: Vec<f64>) -> f64 {
    if amounts.is_empty() {
        return 0.0;
    }
    amounts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = amounts.len() / 2;
    if amounts.len() % 2 == 0 {
        (amounts[mid - 1] + amounts[mid]) / 2.0
    } else {
        amounts[mid]
    }
}
