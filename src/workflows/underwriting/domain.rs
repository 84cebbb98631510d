use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for merchant venues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VenueId(pub String);

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Venue descriptor supplied by the platform's venue store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueIdentity {
    pub id: VenueId,
    pub name: String,
    pub slug: String,
    pub organization: String,
}

/// Whether a transaction adds to or subtracts from venue revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Sale,
    Refund,
}

/// Payment instrument recorded at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaymentMethod {
    Card,
    Cash,
    BankTransfer,
    Wallet,
    Other,
}

impl PaymentMethod {
    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::Other => "other",
        }
    }
}

/// Immutable completed-transaction snapshot fetched from the platform store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub amount: f64,
    pub kind: TransactionKind,
    pub method: PaymentMethod,
    pub occurred_at: DateTime<Utc>,
}

/// Coarse classification of smoothed month-over-month growth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Growing,
    #[default]
    Flat,
    Declining,
}

impl TrendDirection {
    pub const fn label(self) -> &'static str {
        match self {
            TrendDirection::Growing => "growing",
            TrendDirection::Flat => "flat",
            TrendDirection::Declining => "declining",
        }
    }
}

/// Normalized view of a venue's trailing transaction history, recomputed
/// fresh on every assessment run.
///
/// Every ratio is guarded against zero denominators and stays finite and
/// non-negative; growth percentages are the only signed fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueMetrics {
    pub days_in_operation: i64,
    pub is_new_business: bool,
    pub raw_volume: f64,
    pub annualized_volume: f64,
    pub monthly_average: f64,
    pub current_month_volume: f64,
    pub previous_month_volume: f64,
    pub two_months_ago_volume: f64,
    pub transaction_count: u32,
    pub average_ticket: f64,
    pub median_ticket: f64,
    pub month_over_month_growth: f64,
    pub three_month_trend: f64,
    pub velocity_score: f64,
    pub trend_direction: TrendDirection,
    pub revenue_cv: f64,
    pub consistency_score: f64,
    pub operating_days_ratio: f64,
    pub days_since_last_transaction: i64,
    pub peak_to_trough_ratio: f64,
    pub chargeback_rate: f64,
    pub chargeback_count: u32,
    pub refund_rate: f64,
    pub refund_count: u32,
    pub large_transaction_ratio: f64,
    pub card_ratio: f64,
    pub payment_method_mix: BTreeMap<PaymentMethod, f64>,
}

/// Hard pass/fail preconditions evaluated alongside scoring. Immutable once
/// computed for a given metrics snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityGates {
    pub minimum_days_in_operation: bool,
    pub minimum_annualized_volume: bool,
    pub minimum_transaction_count: bool,
    pub maximum_chargeback_rate: bool,
    pub recent_activity: bool,
    pub operating_consistency: bool,
    pub passed: bool,
    pub failures: Vec<String>,
}

/// Per-pillar sub-scores and the weighted composite, all in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub volume_score: u8,
    pub growth_score: u8,
    pub stability_score: u8,
    pub risk_score: u8,
    pub maturity_score: u8,
    pub total_score: u8,
}

/// Letter grade derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditGrade {
    A,
    B,
    C,
    D,
}

impl CreditGrade {
    pub const fn label(self) -> &'static str {
        match self {
            CreditGrade::A => "A",
            CreditGrade::B => "B",
            CreditGrade::C => "C",
            CreditGrade::D => "D",
        }
    }
}

/// Venue standing across the offer lifecycle. The engine only ever assigns
/// the first three states; `OfferPending` and `ActiveLoan` are set by the
/// offer-management collaborator once an offer is created or accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityStatus {
    Ineligible,
    ReviewRequired,
    Eligible,
    OfferPending,
    ActiveLoan,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::Ineligible => "ineligible",
            EligibilityStatus::ReviewRequired => "review_required",
            EligibilityStatus::Eligible => "eligible",
            EligibilityStatus::OfferPending => "offer_pending",
            EligibilityStatus::ActiveLoan => "active_loan",
        }
    }
}

/// Sized and priced revenue-based credit offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRecommendation {
    pub recommended_limit: f64,
    pub factor_rate: f64,
    pub total_repayment: f64,
    pub max_repayment_percent: f64,
    pub estimated_term_days: u32,
    pub monthly_payment_estimate: f64,
}

impl CreditRecommendation {
    /// All-zero recommendation for ineligible venues and grade D.
    pub fn declined() -> Self {
        Self {
            recommended_limit: 0.0,
            factor_rate: 0.0,
            total_repayment: 0.0,
            max_repayment_percent: 0.0,
            estimated_term_days: 0,
            monthly_payment_estimate: 0.0,
        }
    }

    pub fn is_declined(&self) -> bool {
        self.recommended_limit == 0.0
    }
}

/// Full output of one assessment run for one venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub venue: VenueIdentity,
    pub gates: EligibilityGates,
    pub breakdown: ScoreBreakdown,
    pub grade: CreditGrade,
    pub eligibility: EligibilityStatus,
    pub metrics: VenueMetrics,
    pub recommendation: CreditRecommendation,
    pub alerts: Vec<String>,
    pub calculated_at: DateTime<Utc>,
    pub data_as_of: DateTime<Utc>,
}
