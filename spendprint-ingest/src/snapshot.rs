//! Builds a `MetricsInput` from parsed transactions plus user-entered
//! aggregates (income, savings goal, horizon).

use spendprint_core::{MetricsInput, Transaction};
use tracing::debug;

use crate::tiers::{Tier, TierRules};

/// User-entered figures; `None` totals are summed from the transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub income: f64,
    pub goal_amount: f64,
    pub months_remaining: f64,
    pub essentials: Option<f64>,
    pub secondary: Option<f64>,
    pub luxury: Option<f64>,
}

/// Sums and splits transactions by tier
pub struct SnapshotBuilder<'a> {
    rules: &'a TierRules,
}

impl<'a> SnapshotBuilder<'a> {
    pub fn new(rules: &'a TierRules) -> Self {
        Self { rules }
    }

    /// Build the metrics snapshot.
    ///
    /// Secondary/luxury lists follow the tier rules; the full list is kept
    /// untouched for payday-splurge scanning.
    pub fn build(&self, transactions: Vec<Transaction>, aggregates: &Aggregates) -> MetricsInput {
        let mut essentials = 0.0;
        let mut secondary = 0.0;
        let mut luxury = 0.0;
        let mut untracked = 0usize;
        let mut secondary_transactions = Vec::new();
        let mut luxury_transactions = Vec::new();

        for txn in &transactions {
            match self.rules.tier_of(&txn.category) {
                Tier::Essential => essentials += txn.amount,
                Tier::Secondary => {
                    secondary += txn.amount;
                    secondary_transactions.push(txn.clone());
                }
                Tier::Luxury => {
                    luxury += txn.amount;
                    luxury_transactions.push(txn.clone());
                }
                Tier::Untracked => untracked += 1,
            }
        }

        debug!(
            essentials,
            secondary,
            luxury,
            secondary_count = secondary_transactions.len(),
            luxury_count = luxury_transactions.len(),
            untracked,
            "tiered transactions"
        );

        MetricsInput {
            total_income: aggregates.income,
            total_essentials: aggregates.essentials.unwrap_or(essentials),
            total_secondary: aggregates.secondary.unwrap_or(secondary),
            total_luxury: aggregates.luxury.unwrap_or(luxury),
            goal_amount: aggregates.goal_amount,
            months_remaining: aggregates.months_remaining,
            transactions,
            secondary_transactions,
            luxury_transactions,
        }
    }
}
