use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use tensi_guide_domain::entities::BloodPressureCategory;
use tensi_guide_domain::services::DailyGoals;

/// Query parameters for classifying a single reading
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ClassifyQuery {
    /// Systolic pressure in mmHg
    pub systolic: u16,
    /// Diastolic pressure in mmHg
    pub diastolic: u16,
}

/// Category of a single reading
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResponse {
    pub systolic: u16,
    pub diastolic: u16,
    pub category: BloodPressureCategory,
    /// Human-readable category name
    pub label: String,
}

/// Query parameters for daily activity progress
#[derive(Debug, Default, Deserialize, Validate, IntoParams, ToSchema)]
pub struct ProgressQuery {
    /// Daily step goal (default: 10000)
    #[validate(range(min = 1, max = 100000, message = "Step goal must be between 1 and 100000"))]
    pub step_goal: Option<u32>,

    /// Daily activity minutes goal (default: 30)
    #[validate(range(min = 1, max = 1440, message = "Duration goal must be between 1 and 1440 minutes"))]
    pub duration_goal: Option<u32>,
}

impl ProgressQuery {
    pub fn goals(&self) -> DailyGoals {
        let defaults = DailyGoals::default();
        DailyGoals {
            step_goal: self.step_goal.unwrap_or(defaults.step_goal),
            duration_goal_minutes: self.duration_goal.unwrap_or(defaults.duration_goal_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_query_defaults() {
        let goals = ProgressQuery::default().goals();
        assert_eq!(goals, DailyGoals::default());

        let custom = ProgressQuery { step_goal: Some(6000), duration_goal: None }.goals();
        assert_eq!(custom.step_goal, 6000);
        assert_eq!(custom.duration_goal_minutes, 30);
    }

    #[test]
    fn test_zero_goal_is_rejected() {
        let query = ProgressQuery { step_goal: Some(0), duration_goal: None };
        assert!(query.validate().is_err());
    }
}
