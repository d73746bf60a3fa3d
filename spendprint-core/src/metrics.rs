//! Metrics engine: derives TEI, TDS, DO, LR and PSR from one snapshot of a
//! user's income, spending totals and transactions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InputError;
use crate::transaction::Transaction;

/// Last day of the month that still counts as "payday" spending
pub const PAYDAY_WINDOW_LAST_DAY: u32 = 10;

/// A snapshot of one classification run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsInput {
    pub total_income: f64,
    pub total_essentials: f64,
    pub total_secondary: f64,
    pub total_luxury: f64,
    pub goal_amount: f64,
    /// Must be nonzero; `calculate_metrics` divides by it unguarded
    pub months_remaining: f64,
    /// Every transaction in the period (PSR scans this list)
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub secondary_transactions: Vec<Transaction>,
    #[serde(default)]
    pub luxury_transactions: Vec<Transaction>,
}

impl MetricsInput {
    /// Number of secondary-category transactions, the classifier's count signal
    pub fn secondary_transaction_count(&self) -> usize {
        self.secondary_transactions.len()
    }

    /// Check the numeric fields before calling `calculate_metrics`.
    ///
    /// The engine itself never rejects input; this is for callers that want
    /// a typed error instead of an infinite or NaN metric.
    pub fn validate(&self) -> Result<(), InputError> {
        let fields = [
            ("total_income", self.total_income),
            ("total_essentials", self.total_essentials),
            ("total_secondary", self.total_secondary),
            ("total_luxury", self.total_luxury),
            ("goal_amount", self.goal_amount),
            ("months_remaining", self.months_remaining),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field, value });
            }
        }
        if self.months_remaining == 0.0 {
            return Err(InputError::ZeroMonthsRemaining);
        }
        Ok(())
    }
}

/// Derived metrics for one snapshot
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedMetrics {
    /// True Expendable Income: income - essentials - required monthly savings
    #[serde(rename = "TEI")]
    pub tei: f64,
    /// Total Discretionary Spending: secondary + luxury
    #[serde(rename = "TDS")]
    pub tds: f64,
    /// Discretionary Overspend: TDS - TEI; positive means over budget
    #[serde(rename = "DO")]
    pub overspend: f64,
    /// Luxury Ratio: luxury / TDS, 0 when TDS is 0
    #[serde(rename = "LR")]
    pub luxury_ratio: f64,
    /// Payday Splurge Ratio: days 1-10 discretionary spend / TDS, 0 when TDS is 0
    #[serde(rename = "PSR")]
    pub payday_splurge_ratio: f64,
    pub actual_savings: f64,
    pub goal_savings_required: f64,
    pub total_spending: f64,
}

impl CalculatedMetrics {
    /// True when discretionary spend exceeded what income allows
    pub fn is_overspending(&self) -> bool {
        self.overspend > 0.0
    }
}

/// Calculate all derived metrics for a snapshot.
///
/// `months_remaining == 0` is not trapped and yields non-finite TEI/DO.
pub fn calculate_metrics(input: &MetricsInput) -> CalculatedMetrics {
    let goal_savings_required = input.goal_amount / input.months_remaining;

    let tei = input.total_income - input.total_essentials - goal_savings_required;

    let tds = input.total_secondary + input.total_luxury;

    let overspend = tds - tei;

    let luxury_ratio = if tds > 0.0 { input.total_luxury / tds } else { 0.0 };

    // Literal "Secondary"/"Luxury" categories over the full list, not the
    // tiered secondary/luxury lists.
    let payday_spend: f64 = input
        .transactions
        .iter()
        .filter(|t| (1..=PAYDAY_WINDOW_LAST_DAY).contains(&t.day_of_month()))
        .filter(|t| t.is_literal_discretionary())
        .map(Transaction::abs_amount)
        .sum();

    let payday_splurge_ratio = if tds > 0.0 { payday_spend / tds } else { 0.0 };

    let total_spending = input.total_essentials + input.total_secondary + input.total_luxury;
    let actual_savings = input.total_income - total_spending;

    debug!(
        tei,
        tds,
        overspend,
        luxury_ratio,
        payday_spend,
        payday_splurge_ratio,
        "calculated metrics"
    );

    CalculatedMetrics {
        tei,
        tds,
        overspend,
        luxury_ratio,
        payday_splurge_ratio,
        actual_savings,
        goal_savings_required,
        total_spending,
    }
}
