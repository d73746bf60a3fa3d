//! Spending personality archetypes and their static descriptions/tips

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The five spending archetypes a user can be classified into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PersonalityType {
    #[serde(rename = "The Leisurely Spender")]
    LeisurelySpender,
    #[serde(rename = "The Ignorant Spender")]
    IgnorantSpender,
    #[serde(rename = "The Impulsive Spender")]
    ImpulsiveSpender,
    #[serde(rename = "The Goal-Oriented Saver")]
    GoalOrientedSaver,
    #[serde(rename = "The Balanced Spender")]
    BalancedSpender,
}

impl PersonalityType {
    /// Every archetype, in classifier priority order
    pub const ALL: [PersonalityType; 5] = [
        PersonalityType::LeisurelySpender,
        PersonalityType::IgnorantSpender,
        PersonalityType::ImpulsiveSpender,
        PersonalityType::GoalOrientedSaver,
        PersonalityType::BalancedSpender,
    ];

    /// Display name without the emoji
    pub fn label(&self) -> &'static str {
        match self {
            PersonalityType::LeisurelySpender => "The Leisurely Spender",
            PersonalityType::IgnorantSpender => "The Ignorant Spender",
            PersonalityType::ImpulsiveSpender => "The Impulsive Spender",
            PersonalityType::GoalOrientedSaver => "The Goal-Oriented Saver",
            PersonalityType::BalancedSpender => "The Balanced Spender",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PersonalityType::LeisurelySpender => "🥂",
            PersonalityType::IgnorantSpender => "☕",
            PersonalityType::ImpulsiveSpender => "🛍️",
            PersonalityType::GoalOrientedSaver => "🏆",
            PersonalityType::BalancedSpender => "✅",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.emoji())
    }
}

/// Description and ordered tips for one archetype
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityInfo {
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

static PERSONALITY_INFO: Lazy<HashMap<PersonalityType, PersonalityInfo>> = Lazy::new(|| {
    HashMap::from([
        (
            PersonalityType::LeisurelySpender,
            PersonalityInfo {
                description: "You love the finer things in life and spend heavily on luxury items. \
                              Over 40% of your discretionary budget goes to premium purchases.",
                tips: &[
                    "Set a luxury spending cap each month",
                    "Reward yourself with luxury items only after meeting savings goals",
                    "Consider one luxury item per month instead of several",
                ],
            },
        ),
        (
            PersonalityType::IgnorantSpender,
            PersonalityInfo {
                description: "You make many small purchases that add up quickly. With over 50 \
                              secondary transactions, these 'little expenses' are eating your \
                              budget.",
                tips: &[
                    "Track every small purchase for a week to see patterns",
                    "Use cash for daily expenses to limit spending",
                    "Set a daily spending limit and stick to it",
                ],
            },
        ),
        (
            PersonalityType::ImpulsiveSpender,
            PersonalityInfo {
                description: "You spend 75% or more of your monthly discretionary budget in the \
                              first 10 days. This leaves you struggling for the rest of the month.",
                tips: &[
                    "Implement a weekly budget instead of monthly",
                    "Use the 24-hour rule before making non-essential purchases",
                    "Move money to savings immediately after payday",
                ],
            },
        ),
        (
            PersonalityType::GoalOrientedSaver,
            PersonalityInfo {
                description: "Excellent! You're under budget and your discretionary spending is \
                              less than 50% of your available income. You're on track to meet \
                              your financial goals.",
                tips: &[
                    "Keep up the great work!",
                    "Consider increasing your savings goal",
                    "Invest your surplus wisely",
                ],
            },
        ),
        (
            PersonalityType::BalancedSpender,
            PersonalityInfo {
                description: "You're managing your finances well! You stay within budget and \
                              maintain a healthy balance between spending and saving.",
                tips: &[
                    "Maintain your current habits",
                    "Look for opportunities to optimize further",
                    "Consider setting more ambitious financial goals",
                ],
            },
        ),
    ])
});

/// Look up the description and tips for an archetype.
///
/// The table holds one record per `PersonalityType` variant, so indexing
/// cannot miss.
pub fn get_personality_info(personality: PersonalityType) -> &'static PersonalityInfo {
    &PERSONALITY_INFO[&personality]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_info() {
        for p in PersonalityType::ALL {
            let info = get_personality_info(p);
            assert!(!info.description.is_empty());
            assert_eq!(info.tips.len(), 3, "{p} should carry three tips");
        }
        assert_eq!(PERSONALITY_INFO.len(), PersonalityType::ALL.len());
    }

    #[test]
    fn test_lookup_is_stable() {
        let a = get_personality_info(PersonalityType::ImpulsiveSpender);
        let b = get_personality_info(PersonalityType::ImpulsiveSpender);
        assert_eq!(a, b);
        assert_eq!(a.tips[0], "Implement a weekly budget instead of monthly");
    }

    #[test]
    fn test_descriptions_line_continuation() {
        let info = get_personality_info(PersonalityType::LeisurelySpender);
        assert!(info
            .description
            .contains("luxury items. Over 40% of your discretionary budget"));
    }

    #[test]
    fn test_display_includes_emoji() {
        assert_eq!(
            PersonalityType::GoalOrientedSaver.to_string(),
            "The Goal-Oriented Saver 🏆"
        );
        assert_eq!(PersonalityType::BalancedSpender.label(), "The Balanced Spender");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&PersonalityType::IgnorantSpender).unwrap();
        assert_eq!(json, "\"The Ignorant Spender\"");
        let back: PersonalityType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PersonalityType::IgnorantSpender);
    }
}
