//! One full analytics run: metrics, personality and every chart view

use serde::Serialize;

use crate::charts::{
    prepare_discretionary_comparison_data, prepare_goal_vs_actual_data,
    prepare_spending_breakdown_data, prepare_spending_velocity_data, prepare_top_categories_data,
    DiscretionaryComparisonData, GoalVsActualData, SpendingBreakdownData, SpendingVelocityData,
    TopCategoriesData,
};
use crate::classifier::classify_user;
use crate::metrics::{calculate_metrics, CalculatedMetrics, MetricsInput};
use crate::personality::{get_personality_info, PersonalityInfo, PersonalityType};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub metrics: CalculatedMetrics,
    pub personality: PersonalityType,
    pub personality_info: &'static PersonalityInfo,
    pub goal_vs_actual: GoalVsActualData,
    pub spending_breakdown: Vec<SpendingBreakdownData>,
    pub discretionary_comparison: Vec<DiscretionaryComparisonData>,
    pub top_categories: Vec<TopCategoriesData>,
    pub spending_velocity: Vec<SpendingVelocityData>,
}

impl Dashboard {
    /// Build every view for one snapshot.
    ///
    /// `planned_discretionary` is the user's own discretionary budget and only
    /// feeds the planned-vs-actual comparison.
    pub fn build(input: &MetricsInput, planned_discretionary: f64) -> Self {
        let metrics = calculate_metrics(input);
        let personality = classify_user(&metrics, input.secondary_transaction_count());

        Self {
            metrics,
            personality,
            personality_info: get_personality_info(personality),
            goal_vs_actual: prepare_goal_vs_actual_data(input.goal_amount, metrics.actual_savings),
            spending_breakdown: prepare_spending_breakdown_data(
                input.total_essentials,
                metrics.tds,
            ),
            discretionary_comparison: prepare_discretionary_comparison_data(
                planned_discretionary,
                metrics.tds,
            ),
            top_categories: prepare_top_categories_data(&input.transactions),
            spending_velocity: prepare_spending_velocity_data(&input.transactions),
        }
    }
}
