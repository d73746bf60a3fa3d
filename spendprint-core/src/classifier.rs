//! Ordered rule chain mapping derived metrics to a spending personality.
//!
//! First matching rule wins:
//! 1. overspending and luxury ratio above 0.4            -> Leisurely Spender
//! 2. overspending, luxury ratio at most 0.15, 50+ small  -> Ignorant Spender
//! 3. overspending and payday splurge ratio at least 0.75 -> Impulsive Spender
//! 4. within budget and TDS under half of TEI            -> Goal-Oriented Saver
//! 5. anything else                                       -> Balanced Spender

use tracing::debug;

use crate::metrics::CalculatedMetrics;
use crate::personality::PersonalityType;

pub const LEISURELY_LUXURY_RATIO: f64 = 0.4;
pub const IGNORANT_LUXURY_RATIO: f64 = 0.15;
pub const IGNORANT_MIN_SECONDARY_TRANSACTIONS: usize = 50;
pub const IMPULSIVE_PAYDAY_RATIO: f64 = 0.75;
pub const SAVER_TEI_FRACTION: f64 = 0.5;

/// Classify a user from their metrics and secondary transaction count
pub fn classify_user(
    metrics: &CalculatedMetrics,
    secondary_transaction_count: usize,
) -> PersonalityType {
    let personality = classify(metrics, secondary_transaction_count);
    debug!(
        overspend = metrics.overspend,
        luxury_ratio = metrics.luxury_ratio,
        payday_splurge_ratio = metrics.payday_splurge_ratio,
        secondary_transaction_count,
        %personality,
        "classified user"
    );
    personality
}

fn classify(m: &CalculatedMetrics, secondary_transaction_count: usize) -> PersonalityType {
    let overspending = m.overspend > 0.0;

    if overspending && m.luxury_ratio > LEISURELY_LUXURY_RATIO {
        return PersonalityType::LeisurelySpender;
    }

    if overspending
        && m.luxury_ratio <= IGNORANT_LUXURY_RATIO
        && secondary_transaction_count > IGNORANT_MIN_SECONDARY_TRANSACTIONS
    {
        return PersonalityType::IgnorantSpender;
    }

    if overspending && m.payday_splurge_ratio >= IMPULSIVE_PAYDAY_RATIO {
        return PersonalityType::ImpulsiveSpender;
    }

    if m.overspend <= 0.0 && m.tds < m.tei * SAVER_TEI_FRACTION {
        return PersonalityType::GoalOrientedSaver;
    }

    PersonalityType::BalancedSpender
}
