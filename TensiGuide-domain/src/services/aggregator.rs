use chrono::{DateTime, Utc};

use crate::config::AggregatorConfig;
use crate::entities::{BloodPressureCategory, HealthSnapshot, PatientProfile};
use crate::services::behavior_plan::{build_behavior_plan, BehaviorChangePlan};
use crate::services::goals::{daily_progress, DailyGoals, DailyProgress};
use crate::services::insights::categorize_blood_pressure;
use crate::services::report::generate_report;
use crate::services::score::{compute_health_score, HealthScore};

/// Turns one patient's log collections into a score, a category and a
/// report.
///
/// The aggregator holds no state besides its configuration and does no
/// I/O. Callers pass a consistent [`HealthSnapshot`] and the evaluation
/// instant; new data means a new call.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthAggregator {
    config: AggregatorConfig,
}

impl HealthAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub fn compute_health_score(&self, snapshot: &HealthSnapshot, now: DateTime<Utc>) -> HealthScore {
        compute_health_score(snapshot, now, self.config.trend_policy)
    }

    pub fn classify_blood_pressure(&self, systolic: u16, diastolic: u16) -> BloodPressureCategory {
        categorize_blood_pressure(systolic, diastolic, self.config.crisis_precedence)
    }

    pub fn generate_report(
        &self,
        profile: Option<&PatientProfile>,
        snapshot: &HealthSnapshot,
        now: DateTime<Utc>,
    ) -> String {
        generate_report(profile, snapshot, now, &self.config)
    }

    pub fn behavior_plan(
        &self,
        profile: Option<&PatientProfile>,
        snapshot: &HealthSnapshot,
        now: DateTime<Utc>,
    ) -> BehaviorChangePlan {
        let score = self.compute_health_score(snapshot, now);
        build_behavior_plan(profile, snapshot, &score, now)
    }

    pub fn daily_progress(&self, snapshot: &HealthSnapshot, goals: DailyGoals, now: DateTime<Utc>) -> DailyProgress {
        daily_progress(&snapshot.activity_logs, goals, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CrisisPrecedence, TrendPolicy};
    use crate::entities::ActivityType;
    use crate::services::score::HealthTrend;
    use crate::testing::{activity, reading, sample_profile, sample_snapshot, test_now};

    #[test]
    fn test_configuration_flows_through() {
        let severity = HealthAggregator::default();
        let source = HealthAggregator::new(AggregatorConfig {
            crisis_precedence: CrisisPrecedence::SourceOrder,
            trend_policy: TrendPolicy::FullWindowsOnly,
        });

        assert_eq!(severity.classify_blood_pressure(185, 100), BloodPressureCategory::HypertensiveCrisis);
        assert_eq!(source.classify_blood_pressure(185, 100), BloodPressureCategory::HighStage2);

        let snapshot = HealthSnapshot {
            readings: vec![reading(120, 80, 0), reading(140, 90, 24)],
            ..Default::default()
        };
        assert_eq!(severity.compute_health_score(&snapshot, test_now()).trend, HealthTrend::Improving);
        assert_eq!(source.compute_health_score(&snapshot, test_now()).trend, HealthTrend::Stable);
    }

    #[test]
    fn test_single_reading_and_positive_activity() {
        let snapshot = HealthSnapshot {
            readings: vec![reading(115, 75, 0)],
            activity_logs: vec![activity(ActivityType::Meditation, 1)],
            ..Default::default()
        };
        let score = HealthAggregator::default().compute_health_score(&snapshot, test_now());
        assert_eq!(score.score, 100);
        assert_eq!(score.trend, HealthTrend::Stable);
    }

    #[test]
    fn test_report_and_plan_share_the_score() {
        let aggregator = HealthAggregator::default();
        let snapshot = sample_snapshot();
        let profile = sample_profile();

        let score = aggregator.compute_health_score(&snapshot, test_now());
        let plan = aggregator.behavior_plan(Some(&profile), &snapshot, test_now());
        let report = aggregator.generate_report(Some(&profile), &snapshot, test_now());

        assert_eq!(plan.health_score, score.score);
        assert!(report.contains(&format!("Health score: {}/100", score.score)));
    }

    #[test]
    fn test_snapshot_is_not_modified() {
        let aggregator = HealthAggregator::default();
        let snapshot = sample_snapshot();
        let before = snapshot.clone();

        aggregator.compute_health_score(&snapshot, test_now());
        aggregator.generate_report(None, &snapshot, test_now());
        assert_eq!(snapshot, before);
    }
}
