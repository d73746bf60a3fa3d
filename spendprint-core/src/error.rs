//! Error types for spendprint-core

use thiserror::Error;

/// Problems with a `MetricsInput` that would make the derived metrics meaningless
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("months remaining must be nonzero")]
    ZeroMonthsRemaining,

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}
