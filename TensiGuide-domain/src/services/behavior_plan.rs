//! Rule-based behavior change plan.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::{newest_first, HealthImpact, HealthSnapshot, PatientProfile};
use crate::services::score::{
    average_pressure, mean_exercise_minutes, mean_sleep_hours, HealthScore, HealthTrend,
    BP_AVERAGE_WINDOW,
};

/// Area the plan singles out from the recorded data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    LowerSystolic,
    ReduceUnhealthyActivity,
    ImproveSleep,
    IncreasePhysicalActivity,
}

impl FocusArea {
    pub fn description(&self) -> &'static str {
        match self {
            FocusArea::LowerSystolic => "Main focus: lower systolic blood pressure",
            FocusArea::ReduceUnhealthyActivity => "Reduce unhealthy activities",
            FocusArea::ImproveSleep => "Improve sleep patterns",
            FocusArea::IncreasePhysicalActivity => "Increase physical activity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Obstacle {
    pub obstacle: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BehaviorChangePlan {
    pub date: NaiveDate,
    pub patient_name: Option<String>,
    pub health_score: u8,
    pub trend: HealthTrend,
    pub focus_areas: Vec<FocusArea>,
    pub goals: Vec<String>,
    /// One entry per week
    pub timeline: Vec<String>,
    pub targets: Vec<String>,
    pub strategies: Vec<String>,
    pub obstacles: Vec<Obstacle>,
    pub monitoring: Vec<String>,
    pub motivation: String,
}

const GOALS: [&str; 4] = [
    "Bring blood pressure to the normal target (below 140/90 mmHg)",
    "Increase healthy physical activity",
    "Improve sleep patterns",
    "Reduce unhealthy activities",
];

const TIMELINE: [&str; 4] = [
    "Week 1: monitor blood pressure and identify patterns",
    "Week 2: introduce light physical activity",
    "Week 3: improve sleep and diet",
    "Week 4: consolidate habits and evaluate progress",
];

const TARGETS: [&str; 4] = [
    "Blood pressure: 10 to 15 mmHg lower within 30 days",
    "Activity: 30 minutes of physical activity 5 times per week",
    "Sleep: 7 to 8 hours per night",
    "Exercise: 20 to 30 minute sessions 3 times per week",
];

const STRATEGIES: [&str; 7] = [
    "Measure blood pressure twice a day",
    "Walk for 30 minutes every morning",
    "Avoid high-salt food",
    "Go to bed at a regular time, around 22:00",
    "Do light exercise 3 times a week",
    "Cut down on unhealthy activities",
    "Check in regularly with your nurse counselor",
];

const OBSTACLES: [(&str, &str); 3] = [
    ("Lack of motivation to exercise", "Start with light activity and involve family members"),
    ("Difficulty sleeping", "Keep a bedtime routine and avoid screens before bed"),
    ("Unhealthy food choices", "Prepare healthy meals ahead and read nutrition labels"),
];

const MONITORING: [&str; 4] = [
    "Record blood pressure daily",
    "Track activities in the app",
    "Review progress weekly with your nurse counselor",
    "Measure overall progress every 2 weeks",
];

const MOTIVATION: &str = "Health is the best investment. Every small step toward a healthy lifestyle is a win. Stay motivated and consistent!";

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Pick the focus areas the recorded data calls for
pub fn focus_areas(snapshot: &HealthSnapshot) -> Vec<FocusArea> {
    let mut areas = Vec::new();

    let readings = newest_first(&snapshot.readings);
    if let Some((systolic, _)) = average_pressure(&readings, BP_AVERAGE_WINDOW) {
        if systolic > 140.0 {
            areas.push(FocusArea::LowerSystolic);
        }
    }

    let impact_count = |impact: HealthImpact| {
        snapshot
            .activity_logs
            .iter()
            .filter(|log| log.health_impact == impact)
            .count()
    };
    if impact_count(HealthImpact::Negative) > impact_count(HealthImpact::Positive) {
        areas.push(FocusArea::ReduceUnhealthyActivity);
    }

    // Missing sleep or exercise logs count as too little
    if mean_sleep_hours(&snapshot.sleep_logs).map_or(true, |hours| hours < 6.0) {
        areas.push(FocusArea::ImproveSleep);
    }

    if mean_exercise_minutes(&snapshot.exercise_logs).map_or(true, |minutes| minutes < 20.0) {
        areas.push(FocusArea::IncreasePhysicalActivity);
    }

    areas
}

/// Build the plan for a patient from their data and current score
pub fn build_behavior_plan(
    profile: Option<&PatientProfile>,
    snapshot: &HealthSnapshot,
    score: &HealthScore,
    now: DateTime<Utc>,
) -> BehaviorChangePlan {
    BehaviorChangePlan {
        date: now.date_naive(),
        patient_name: profile.map(|p| p.name.clone()),
        health_score: score.score,
        trend: score.trend,
        focus_areas: focus_areas(snapshot),
        goals: owned(&GOALS),
        timeline: owned(&TIMELINE),
        targets: owned(&TARGETS),
        strategies: owned(&STRATEGIES),
        obstacles: OBSTACLES
            .iter()
            .map(|(obstacle, solution)| Obstacle {
                obstacle: obstacle.to_string(),
                solution: solution.to_string(),
            })
            .collect(),
        monitoring: owned(&MONITORING),
        motivation: MOTIVATION.to_string(),
    }
}

impl fmt::Display for BehaviorChangePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BEHAVIOR CHANGE PLAN")?;
        writeln!(f, "[Date: {}]", self.date.format("%d/%m/%Y"))?;
        if let Some(name) = &self.patient_name {
            writeln!(f, "Patient: {}", name)?;
        }
        writeln!(f, "Health score: {}/100 (trend: {})", self.health_score, self.trend)?;

        if !self.focus_areas.is_empty() {
            writeln!(f)?;
            writeln!(f, "PERSONAL FOCUS:")?;
            for area in &self.focus_areas {
                writeln!(f, "- {}", area.description())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "MAIN GOALS:")?;
        for (i, goal) in self.goals.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, goal)?;
        }

        writeln!(f)?;
        writeln!(f, "30-DAY TIMELINE:")?;
        for week in &self.timeline {
            writeln!(f, "{}", week)?;
        }

        writeln!(f)?;
        writeln!(f, "SPECIFIC TARGETS:")?;
        for target in &self.targets {
            writeln!(f, "- {}", target)?;
        }

        writeln!(f)?;
        writeln!(f, "IMPLEMENTATION STRATEGIES:")?;
        for (i, strategy) in self.strategies.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, strategy)?;
        }

        writeln!(f)?;
        writeln!(f, "OBSTACLES AND SOLUTIONS:")?;
        for item in &self.obstacles {
            writeln!(f, "- Obstacle: {}", item.obstacle)?;
            writeln!(f, "  Solution: {}", item.solution)?;
        }

        writeln!(f)?;
        writeln!(f, "MONITORING AND EVALUATION:")?;
        for item in &self.monitoring {
            writeln!(f, "- {}", item)?;
        }

        writeln!(f)?;
        writeln!(f, "REMINDER AND MOTIVATION:")?;
        write!(f, "\"{}\"", self.motivation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrendPolicy;
    use crate::entities::ActivityType;
    use crate::services::score::compute_health_score;
    use crate::testing::{activity, exercise, reading, sample_profile, sample_snapshot, sleep, test_now};

    fn plan_for(snapshot: &HealthSnapshot) -> BehaviorChangePlan {
        let score = compute_health_score(snapshot, test_now(), TrendPolicy::default());
        build_behavior_plan(None, snapshot, &score, test_now())
    }

    #[test]
    fn test_balanced_data_has_no_focus_areas() {
        let plan = plan_for(&sample_snapshot());
        assert!(plan.focus_areas.is_empty());
        assert_eq!(plan.timeline.len(), 4);
        assert_eq!(plan.goals.len(), 4);
    }

    #[test]
    fn test_every_focus_rule() {
        let snapshot = HealthSnapshot {
            readings: vec![reading(150, 95, 0), reading(145, 90, 24)],
            activity_logs: vec![
                activity(ActivityType::Smoking, 1),
                activity(ActivityType::Sedentary, 2),
                activity(ActivityType::Walking, 3),
            ],
            sleep_logs: vec![sleep(5.0, 1)],
            exercise_logs: vec![exercise(10, 1)],
            ..Default::default()
        };
        assert_eq!(
            focus_areas(&snapshot),
            vec![
                FocusArea::LowerSystolic,
                FocusArea::ReduceUnhealthyActivity,
                FocusArea::ImproveSleep,
                FocusArea::IncreasePhysicalActivity,
            ]
        );
    }

    #[test]
    fn test_systolic_of_exactly_140_is_not_a_focus() {
        let snapshot = HealthSnapshot {
            readings: vec![reading(140, 85, 0)],
            sleep_logs: vec![sleep(7.0, 1)],
            exercise_logs: vec![exercise(30, 1)],
            ..Default::default()
        };
        assert!(focus_areas(&snapshot).is_empty());
    }

    #[test]
    fn test_missing_exercise_asks_for_more_activity() {
        let snapshot = HealthSnapshot {
            sleep_logs: vec![sleep(7.5, 1)],
            ..Default::default()
        };
        assert_eq!(focus_areas(&snapshot), vec![FocusArea::IncreasePhysicalActivity]);
    }

    #[test]
    fn test_missing_sleep_asks_for_better_sleep() {
        let snapshot = HealthSnapshot {
            readings: vec![reading(125, 80, 0)],
            ..Default::default()
        };
        assert_eq!(
            focus_areas(&snapshot),
            vec![FocusArea::ImproveSleep, FocusArea::IncreasePhysicalActivity]
        );

        let text = plan_for(&snapshot).to_string();
        assert!(text.contains("PERSONAL FOCUS:"));
        assert!(text.contains(FocusArea::ImproveSleep.description()));
    }

    #[test]
    fn test_plan_renders_all_parts() {
        let snapshot = sample_snapshot();
        let profile = sample_profile();
        let score = compute_health_score(&snapshot, test_now(), TrendPolicy::default());
        let text = build_behavior_plan(Some(&profile), &snapshot, &score, test_now()).to_string();

        assert!(text.starts_with("BEHAVIOR CHANGE PLAN\n[Date: 15/03/2024]"));
        assert!(text.contains("Patient: Siti Rahma"));
        assert!(text.contains("trend: improving"));
        for header in [
            "MAIN GOALS:",
            "30-DAY TIMELINE:",
            "SPECIFIC TARGETS:",
            "IMPLEMENTATION STRATEGIES:",
            "OBSTACLES AND SOLUTIONS:",
            "MONITORING AND EVALUATION:",
            "REMINDER AND MOTIVATION:",
        ] {
            assert!(text.contains(header), "missing {}", header);
        }
        assert!(!text.contains("PERSONAL FOCUS:"));
    }
}
