//! Chart-ready projections of spending data.
//!
//! Each `prepare_*` function is independent of the others and of the
//! metrics engine.

use chrono::Duration;
use serde::Serialize;
use std::collections::HashMap;

use crate::transaction::Transaction;

pub const ESSENTIAL_COLOR: &str = "#3b82f6";
pub const DISCRETIONARY_COLOR: &str = "#10b981";
pub const TOP_CATEGORIES_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalVsActualData {
    pub goal_amount: f64,
    pub saved_amount: f64,
    /// Progress toward the goal, capped at 100 but not floored
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingBreakdownData {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscretionaryComparisonData {
    pub category: &'static str,
    pub planned: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCategoriesData {
    pub category: String,
    pub amount: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingVelocityData {
    /// 1-indexed day within the span
    pub day: usize,
    pub cumulative_amount: f64,
    pub transaction_count: usize,
}

/// Goal vs actual savings
pub fn prepare_goal_vs_actual_data(goal_savings: f64, actual_savings: f64) -> GoalVsActualData {
    let percentage = if goal_savings > 0.0 {
        actual_savings / goal_savings * 100.0
    } else {
        0.0
    };

    GoalVsActualData {
        goal_amount: goal_savings,
        saved_amount: actual_savings,
        percentage: percentage.min(100.0),
    }
}

/// Essential vs discretionary split, essential first
pub fn prepare_spending_breakdown_data(
    essential_spending: f64,
    discretionary_spending: f64,
) -> Vec<SpendingBreakdownData> {
    vec![
        SpendingBreakdownData {
            name: "Essential Spending",
            value: essential_spending,
            color: ESSENTIAL_COLOR,
        },
        SpendingBreakdownData {
            name: "Discretionary Spending",
            value: discretionary_spending,
            color: DISCRETIONARY_COLOR,
        },
    ]
}

/// Planned vs actual discretionary budget
pub fn prepare_discretionary_comparison_data(
    planned: f64,
    actual: f64,
) -> Vec<DiscretionaryComparisonData> {
    vec![DiscretionaryComparisonData {
        category: "Discretionary Budget",
        planned,
        actual,
    }]
}

/// Top categories by total amount, at most ten.
///
/// Categories with equal totals keep the order in which they first appear.
pub fn prepare_top_categories_data(transactions: &[Transaction]) -> Vec<TopCategoriesData> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<TopCategoriesData> = Vec::new();

    for txn in transactions {
        let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
            groups.push(TopCategoriesData {
                category: txn.category.clone(),
                amount: 0.0,
                count: 0,
            });
            groups.len() - 1
        });
        groups[slot].amount += txn.amount;
        groups[slot].count += 1;
    }

    // sort_by is stable
    groups.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    groups.truncate(TOP_CATEGORIES_LIMIT);
    groups
}

/// Daily cumulative spending from the first to the last transaction date
pub fn prepare_spending_velocity_data(transactions: &[Transaction]) -> Vec<SpendingVelocityData> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };
    let first_date = first.date;
    let span = (last.date - first_date).num_days() as usize + 1;

    let mut out = Vec::with_capacity(span);
    let mut cumulative_amount = 0.0;
    let mut pending = sorted.iter().peekable();

    for offset in 0..span {
        let current = first_date + Duration::days(offset as i64);
        let mut transaction_count = 0;

        while let Some(txn) = pending.next_if(|t| t.date <= current) {
            cumulative_amount += txn.amount;
            transaction_count += 1;
        }

        out.push(SpendingVelocityData {
            day: offset + 1,
            cumulative_amount,
            transaction_count,
        });
    }

    out
}
