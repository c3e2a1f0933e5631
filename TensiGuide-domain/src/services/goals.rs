use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::ActivityLog;

pub const DEFAULT_STEP_GOAL: u32 = 10_000;
pub const DEFAULT_DURATION_GOAL_MINUTES: u32 = 30;

/// Daily activity targets for a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DailyGoals {
    pub step_goal: u32,
    pub duration_goal_minutes: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            step_goal: DEFAULT_STEP_GOAL,
            duration_goal_minutes: DEFAULT_DURATION_GOAL_MINUTES,
        }
    }
}

/// Today's totals against the daily goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub steps: u64,
    pub duration_minutes: u64,
    pub goals: DailyGoals,
    /// Percent of the step goal, capped at 100
    pub step_percent: f64,
    /// Percent of the duration goal, capped at 100
    pub duration_percent: f64,
}

fn percent_of(value: u64, goal: u32) -> f64 {
    if goal == 0 {
        return 100.0;
    }
    (100.0 * value as f64 / f64::from(goal)).min(100.0)
}

/// Sum the activity logged on the UTC date of `now`
pub fn daily_progress(logs: &[ActivityLog], goals: DailyGoals, now: DateTime<Utc>) -> DailyProgress {
    let today = now.date_naive();
    let (steps, duration_minutes) = logs
        .iter()
        .filter(|log| log.timestamp.date_naive() == today)
        .fold((0u64, 0u64), |(steps, minutes), log| {
            (steps + u64::from(log.steps), minutes + u64::from(log.duration_minutes))
        });

    DailyProgress {
        date: today,
        steps,
        duration_minutes,
        goals,
        step_percent: percent_of(steps, goals.step_goal),
        duration_percent: percent_of(duration_minutes, goals.duration_goal_minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ActivityType;
    use crate::testing::{activity, test_now};

    #[test]
    fn test_only_today_counts() {
        // test_now is 09:30, so 12 hours ago is yesterday
        let mut logs = vec![
            activity(ActivityType::Walking, 1),
            activity(ActivityType::Walking, 3),
            activity(ActivityType::Walking, 12),
        ];
        logs[0].steps = 3000;
        logs[1].steps = 2000;
        logs[2].steps = 9000;

        let progress = daily_progress(&logs, DailyGoals::default(), test_now());
        assert_eq!(progress.steps, 5000);
        assert_eq!(progress.duration_minutes, 40);
        assert_eq!(progress.step_percent, 50.0);
        assert_eq!(progress.duration_percent, 100.0);
    }

    #[test]
    fn test_percent_is_capped() {
        let mut log = activity(ActivityType::Exercise, 0);
        log.steps = 25_000;
        log.duration_minutes = 90;

        let progress = daily_progress(&[log], DailyGoals::default(), test_now());
        assert_eq!(progress.step_percent, 100.0);
        assert_eq!(progress.duration_percent, 100.0);
    }

    #[test]
    fn test_no_activity_today() {
        let progress = daily_progress(&[], DailyGoals { step_goal: 8000, duration_goal_minutes: 45 }, test_now());
        assert_eq!(progress.steps, 0);
        assert_eq!(progress.step_percent, 0.0);
        assert_eq!(progress.goals.step_goal, 8000);
    }
}
