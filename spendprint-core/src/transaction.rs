//! Transaction record shared by the metrics engine and the chart views

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Category label that counts toward payday splurge as secondary spend
pub const SECONDARY_CATEGORY: &str = "Secondary";
/// Category label that counts toward payday splurge as luxury spend
pub const LUXURY_CATEGORY: &str = "Luxury";

/// One discrete spending event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Optional identifier (statement reference, row number, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Calendar date of the transaction (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Amount spent; non-negative in normal use
    pub amount: f64,
    /// Free-form category label
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Create a transaction with the required fields only
    pub fn new(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self {
            id: None,
            date,
            amount,
            category: category.into(),
            sub_category: None,
            description: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Day of the month (1-31), independent of month and year
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }

    /// True when the category is literally "Secondary" or "Luxury".
    ///
    /// Case and wording matter: "secondary" or "Shopping" do not match.
    pub fn is_literal_discretionary(&self) -> bool {
        self.category == SECONDARY_CATEGORY || self.category == LUXURY_CATEGORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_transaction_builders() {
        let txn = Transaction::new(date(2025, 11, 5), 42.5, "Luxury")
            .with_id("tx-1")
            .with_sub_category("Watches")
            .with_description("Birthday gift");

        assert_eq!(txn.id.as_deref(), Some("tx-1"));
        assert_eq!(txn.sub_category.as_deref(), Some("Watches"));
        assert_eq!(txn.description.as_deref(), Some("Birthday gift"));
        assert_eq!(txn.day_of_month(), 5);
    }

    #[test]
    fn test_literal_discretionary_is_case_sensitive() {
        let d = date(2025, 11, 1);
        assert!(Transaction::new(d, 1.0, "Secondary").is_literal_discretionary());
        assert!(Transaction::new(d, 1.0, "Luxury").is_literal_discretionary());
        assert!(!Transaction::new(d, 1.0, "secondary").is_literal_discretionary());
        assert!(!Transaction::new(d, 1.0, "Shopping").is_literal_discretionary());
        assert!(!Transaction::new(d, 1.0, "Luxury ").is_literal_discretionary());
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let txn: Transaction =
            serde_json::from_str(r#"{"date":"2025-11-20","amount":800.0,"category":"Dining"}"#)
                .unwrap();
        assert_eq!(txn.date, date(2025, 11, 20));
        assert_eq!(txn.abs_amount(), 800.0);
        assert!(txn.id.is_none());
    }

    #[test]
    fn test_serialize_skips_empty_optionals() {
        let txn = Transaction::new(date(2025, 11, 20), 10.0, "Dining");
        let json = serde_json::to_string(&txn).unwrap();
        assert!(!json.contains("sub_category"));
        assert!(!json.contains("description"));
    }
}
