//! spendprint-core: spending metrics, personality classification and chart views

pub mod charts;
pub mod classifier;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod personality;
pub mod transaction;

pub use charts::{
    prepare_discretionary_comparison_data, prepare_goal_vs_actual_data,
    prepare_spending_breakdown_data, prepare_spending_velocity_data, prepare_top_categories_data,
    DiscretionaryComparisonData, GoalVsActualData, SpendingBreakdownData, SpendingVelocityData,
    TopCategoriesData,
};
pub use classifier::classify_user;
pub use dashboard::Dashboard;
pub use error::InputError;
pub use metrics::{calculate_metrics, CalculatedMetrics, MetricsInput};
pub use personality::{get_personality_info, PersonalityInfo, PersonalityType};
pub use transaction::Transaction;
