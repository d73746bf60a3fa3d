//! Category → spending tier rules.
//!
//! The literal labels "Essential", "Secondary" and "Luxury" always map to
//! their own tier. Anything else is looked up in the configured lists
//! (case-insensitive, essential > secondary > luxury when a name is listed
//! twice) and falls back to `Untracked`.

use serde::{Deserialize, Serialize};
use spendprint_core::transaction::{LUXURY_CATEGORY, SECONDARY_CATEGORY};

pub const ESSENTIAL_CATEGORY: &str = "Essential";

/// Spending bucket a category counts toward
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tier {
    #[serde(rename = "essential")]
    Essential,
    #[serde(rename = "secondary")]
    Secondary,
    #[serde(rename = "luxury")]
    Luxury,
    #[serde(rename = "untracked")]
    Untracked,
}

/// Extra category names per tier, usually loaded from config
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierRules {
    #[serde(default)]
    pub essential: Vec<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
    #[serde(default)]
    pub luxury: Vec<String>,
}

impl TierRules {
    /// A starter mapping for common statement categories
    pub fn starter() -> Self {
        let names = |xs: &[&str]| -> Vec<String> { xs.iter().map(|s| s.to_string()).collect() };
        Self {
            essential: names(&["Rent", "Groceries", "Utilities", "Insurance", "Transit", "Phone"]),
            secondary: names(&["Dining", "Coffee", "Entertainment", "Gifts", "Subscriptions"]),
            luxury: names(&["Shopping", "Electronics", "Travel", "Spa", "Jewelry"]),
        }
    }

    /// Determine the tier for a category label
    pub fn tier_of(&self, category: &str) -> Tier {
        match category {
            ESSENTIAL_CATEGORY => return Tier::Essential,
            SECONDARY_CATEGORY => return Tier::Secondary,
            LUXURY_CATEGORY => return Tier::Luxury,
            _ => {}
        }

        let category = category.trim();
        let listed = |names: &[String]| {
            names
                .iter()
                .any(|n| n.trim().eq_ignore_ascii_case(category))
        };

        if listed(&self.essential) {
            Tier::Essential
        } else if listed(&self.secondary) {
            Tier::Secondary
        } else if listed(&self.luxury) {
            Tier::Luxury
        } else {
            Tier::Untracked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_names_always_win() {
        let rules = TierRules {
            luxury: vec!["Secondary".into()],
            ..Default::default()
        };
        assert_eq!(rules.tier_of("Secondary"), Tier::Secondary);
        assert_eq!(rules.tier_of("Luxury"), Tier::Luxury);
        assert_eq!(rules.tier_of("Essential"), Tier::Essential);
    }

    #[test]
    fn test_default_rules_only_know_literals() {
        let rules = TierRules::default();
        assert_eq!(rules.tier_of("Dining"), Tier::Untracked);
        // lowercase literal goes through the (empty) lists
        assert_eq!(rules.tier_of("luxury"), Tier::Untracked);
    }

    #[test]
    fn test_configured_lists_are_case_insensitive() {
        let rules = TierRules::starter();
        assert_eq!(rules.tier_of("dining"), Tier::Secondary);
        assert_eq!(rules.tier_of(" Groceries "), Tier::Essential);
        assert_eq!(rules.tier_of("SHOPPING"), Tier::Luxury);
        assert_eq!(rules.tier_of("Pets"), Tier::Untracked);
    }

    #[test]
    fn test_duplicate_listing_prefers_essential() {
        let rules = TierRules {
            essential: vec!["Phone".into()],
            luxury: vec!["phone".into()],
            ..Default::default()
        };
        assert_eq!(rules.tier_of("Phone"), Tier::Essential);
    }
}
