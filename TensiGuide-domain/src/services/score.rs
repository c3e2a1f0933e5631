//! Composite health score and systolic trend.
//!
//! Each factor contributes only when its collection is non-empty, and the
//! final score is rescaled over the maximum points of the factors present.
//! Intermediate values stay `f64`; rounding (half up) happens once, on the
//! final percentage.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::config::TrendPolicy;
use crate::entities::{
    newest_first, ActivityLog, BloodPressureReading, ExerciseLog, FoodLog, HealthImpact,
    HealthSnapshot, SleepLog, Timestamped,
};

/// Number of newest readings averaged for the blood pressure factor
pub const BP_AVERAGE_WINDOW: usize = 5;
/// Size of each systolic window compared for the trend
pub const TREND_WINDOW: usize = 3;
/// Calendar days (today included) in the trailing window
pub const TRAILING_WINDOW_DAYS: i64 = 7;

/// One of the weighted inputs of the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    BloodPressure,
    Activity,
    Sleep,
    Exercise,
    Diet,
}

impl ScoreFactor {
    /// Points awarded when the factor is at its best
    pub fn max_points(&self) -> f64 {
        match self {
            ScoreFactor::BloodPressure => 30.0,
            ScoreFactor::Activity => 25.0,
            ScoreFactor::Sleep => 20.0,
            ScoreFactor::Exercise => 15.0,
            ScoreFactor::Diet => 10.0,
        }
    }
}

/// Points earned by a single present factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct FactorScore {
    pub factor: ScoreFactor,
    pub earned: f64,
    pub max: f64,
}

impl FactorScore {
    fn new(factor: ScoreFactor, earned: f64) -> Self {
        Self { factor, earned, max: factor.max_points() }
    }
}

/// Direction of the recent systolic readings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HealthTrend {
    Improving,
    Declining,
    #[default]
    Stable,
}

impl fmt::Display for HealthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthTrend::Improving => "improving",
            HealthTrend::Declining => "declining",
            HealthTrend::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Composite score with the factors it was built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct HealthScore {
    /// Overall score between 0 and 100
    pub score: u8,
    pub trend: HealthTrend,
    /// Present factors only, in weight order
    pub factors: Vec<FactorScore>,
}

impl HealthScore {
    pub fn factor(&self, factor: ScoreFactor) -> Option<&FactorScore> {
        self.factors.iter().find(|f| f.factor == factor)
    }
}

/// Compute the composite score and trend for a snapshot evaluated at `now`
pub fn compute_health_score(
    snapshot: &HealthSnapshot,
    now: DateTime<Utc>,
    trend_policy: TrendPolicy,
) -> HealthScore {
    let readings = newest_first(&snapshot.readings);

    let factors: Vec<FactorScore> = [
        blood_pressure_points(&readings).map(|p| FactorScore::new(ScoreFactor::BloodPressure, p)),
        activity_points(&snapshot.activity_logs).map(|p| FactorScore::new(ScoreFactor::Activity, p)),
        sleep_points(&snapshot.sleep_logs).map(|p| FactorScore::new(ScoreFactor::Sleep, p)),
        exercise_points(&snapshot.exercise_logs).map(|p| FactorScore::new(ScoreFactor::Exercise, p)),
        diet_points(&snapshot.food_logs, now).map(|p| FactorScore::new(ScoreFactor::Diet, p)),
    ]
    .into_iter()
    .flatten()
    .collect();

    HealthScore {
        score: normalize(&factors),
        trend: systolic_trend(&readings, trend_policy),
        factors,
    }
}

/// Rescale earned points over the maximum of the present factors
fn normalize(factors: &[FactorScore]) -> u8 {
    let max: f64 = factors.iter().map(|f| f.max).sum();
    if max <= 0.0 {
        return 0;
    }
    let earned: f64 = factors.iter().map(|f| f.earned).sum();
    let percent = (100.0 * earned / max).round();
    percent.clamp(0.0, 100.0) as u8
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Mean systolic and diastolic of the newest readings, if any exist
pub fn average_pressure(readings: &[&BloodPressureReading], window: usize) -> Option<(f64, f64)> {
    let recent = &readings[..readings.len().min(window)];
    let systolic = mean(recent.iter().map(|r| f64::from(r.systolic)))?;
    let diastolic = mean(recent.iter().map(|r| f64::from(r.diastolic)))?;
    Some((systolic, diastolic))
}

fn blood_pressure_points(readings: &[&BloodPressureReading]) -> Option<f64> {
    let (systolic, diastolic) = average_pressure(readings, BP_AVERAGE_WINDOW)?;
    let points = if systolic < 120.0 && diastolic < 80.0 {
        30.0
    } else if systolic < 130.0 && diastolic < 85.0 {
        25.0
    } else if systolic < 140.0 && diastolic < 90.0 {
        20.0
    } else if systolic < 160.0 && diastolic < 100.0 {
        10.0
    } else {
        5.0
    };
    Some(points)
}

fn activity_points(logs: &[ActivityLog]) -> Option<f64> {
    if logs.is_empty() {
        return None;
    }
    let positive = logs
        .iter()
        .filter(|log| log.health_impact == HealthImpact::Positive)
        .count();
    Some(ScoreFactor::Activity.max_points() * positive as f64 / logs.len() as f64)
}

/// Mean sleep duration in hours
pub fn mean_sleep_hours(logs: &[SleepLog]) -> Option<f64> {
    mean(logs.iter().map(|log| log.duration_hours))
}

fn sleep_points(logs: &[SleepLog]) -> Option<f64> {
    let hours = mean_sleep_hours(logs)?;
    let points = if (7.0..=9.0).contains(&hours) {
        20.0
    } else if (6.0..=10.0).contains(&hours) {
        15.0
    } else if (5.0..=11.0).contains(&hours) {
        10.0
    } else {
        5.0
    };
    Some(points)
}

/// Mean exercise session length in minutes
pub fn mean_exercise_minutes(logs: &[ExerciseLog]) -> Option<f64> {
    mean(logs.iter().map(|log| f64::from(log.duration_minutes)))
}

fn exercise_points(logs: &[ExerciseLog]) -> Option<f64> {
    let minutes = mean_exercise_minutes(logs)?;
    let points = if minutes >= 30.0 {
        15.0
    } else if minutes >= 20.0 {
        12.0
    } else if minutes >= 10.0 {
        8.0
    } else {
        4.0
    };
    Some(points)
}

/// Entries dated today or in the six calendar days before (UTC)
pub fn entries_in_trailing_week<T: Timestamped>(entries: &[T], now: DateTime<Utc>) -> usize {
    let today = now.date_naive();
    let first_day = today - Duration::days(TRAILING_WINDOW_DAYS - 1);
    entries
        .iter()
        .map(|entry| entry.timestamp().date_naive())
        .filter(|day| *day >= first_day && *day <= today)
        .count()
}

fn diet_points(logs: &[FoodLog], now: DateTime<Utc>) -> Option<f64> {
    if logs.is_empty() {
        return None;
    }
    let points = match entries_in_trailing_week(logs, now) {
        count if count >= 7 => 10.0,
        count if count >= 5 => 8.0,
        count if count >= 3 => 5.0,
        _ => 2.0,
    };
    Some(points)
}

/// Compare the mean systolic of the newest window against the window
/// before it. Readings must already be sorted newest first.
pub fn systolic_trend(readings: &[&BloodPressureReading], policy: TrendPolicy) -> HealthTrend {
    let total = readings.len();
    if total < 2 {
        return HealthTrend::Stable;
    }

    let window = match policy {
        TrendPolicy::FullWindowsOnly if total < 2 * TREND_WINDOW => return HealthTrend::Stable,
        TrendPolicy::FullWindowsOnly => TREND_WINDOW,
        TrendPolicy::PartialWindows => TREND_WINDOW.min(total / 2),
    };

    let recent = mean(readings[..window].iter().map(|r| f64::from(r.systolic)));
    let older = mean(readings[window..total.min(2 * window)].iter().map(|r| f64::from(r.systolic)));

    match (recent, older) {
        (Some(recent), Some(older)) if recent < older => HealthTrend::Improving,
        (Some(recent), Some(older)) if recent > older => HealthTrend::Declining,
        _ => HealthTrend::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ActivityType;
    use crate::testing::{activity, exercise, food, reading, sleep, test_now};

    fn readings_with_systolic(values: &[u16]) -> Vec<BloodPressureReading> {
        values
            .iter()
            .enumerate()
            .map(|(i, systolic)| reading(*systolic, 80, i as i64 * 24))
            .collect()
    }

    fn score(snapshot: &HealthSnapshot) -> HealthScore {
        compute_health_score(snapshot, test_now(), TrendPolicy::PartialWindows)
    }

    #[test]
    fn test_no_data_scores_zero() {
        let result = score(&HealthSnapshot::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.trend, HealthTrend::Stable);
        assert!(result.factors.is_empty());
    }

    #[test]
    fn test_perfect_pressure_alone_scores_hundred() {
        let snapshot = HealthSnapshot {
            readings: vec![reading(115, 75, 0), reading(110, 70, 24)],
            ..Default::default()
        };
        let result = score(&snapshot);
        assert_eq!(result.score, 100);
        assert_eq!(result.factors.len(), 1);
    }

    #[test]
    fn test_reference_scenario() {
        // Newest first: 130/85, 125/82, 140/90, 138/88, 122/79, 145/92
        let snapshot = HealthSnapshot {
            readings: vec![
                reading(130, 85, 0),
                reading(125, 82, 24),
                reading(140, 90, 48),
                reading(138, 88, 72),
                reading(122, 79, 96),
                reading(145, 92, 120),
            ],
            ..Default::default()
        };
        let result = score(&snapshot);

        let bp = result.factor(ScoreFactor::BloodPressure).unwrap();
        assert_eq!(bp.earned, 20.0);
        assert_eq!(result.score, 67);
        assert_eq!(result.trend, HealthTrend::Improving);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let mut readings = vec![
            reading(130, 85, 0),
            reading(125, 82, 24),
            reading(140, 90, 48),
            reading(138, 88, 72),
            reading(122, 79, 96),
            reading(145, 92, 120),
        ];
        readings.reverse();
        let snapshot = HealthSnapshot { readings, ..Default::default() };

        let result = score(&snapshot);
        assert_eq!(result.trend, HealthTrend::Improving);
        assert_eq!(result.factor(ScoreFactor::BloodPressure).unwrap().earned, 20.0);
    }

    #[test]
    fn test_activity_ratio_keeps_fraction_until_final_rounding() {
        let snapshot = HealthSnapshot {
            activity_logs: vec![
                activity(ActivityType::Walking, 0),
                activity(ActivityType::Yoga, 1),
                activity(ActivityType::Exercise, 2),
                activity(ActivityType::Smoking, 3),
            ],
            ..Default::default()
        };
        let result = score(&snapshot);

        assert_eq!(result.factor(ScoreFactor::Activity).unwrap().earned, 18.75);
        assert_eq!(result.score, 75);
    }

    #[test]
    fn test_pressure_and_activity_renormalize() {
        let snapshot = HealthSnapshot {
            readings: vec![reading(115, 75, 0)],
            activity_logs: vec![activity(ActivityType::Walking, 0)],
            ..Default::default()
        };
        assert_eq!(score(&snapshot).score, 100);
    }

    #[test]
    fn test_only_newest_five_readings_are_averaged() {
        // Five normal readings followed by an old very high one
        let snapshot = HealthSnapshot {
            readings: vec![
                reading(110, 70, 0),
                reading(112, 72, 1),
                reading(111, 71, 2),
                reading(113, 73, 3),
                reading(114, 74, 4),
                reading(200, 130, 5),
            ],
            ..Default::default()
        };
        assert_eq!(score(&snapshot).factor(ScoreFactor::BloodPressure).unwrap().earned, 30.0);
    }

    #[test]
    fn test_pressure_tiers() {
        let tier = |s: u16, d: u16| {
            let snapshot = HealthSnapshot { readings: vec![reading(s, d, 0)], ..Default::default() };
            score(&snapshot).factor(ScoreFactor::BloodPressure).unwrap().earned
        };
        assert_eq!(tier(119, 79), 30.0);
        assert_eq!(tier(125, 84), 25.0);
        assert_eq!(tier(135, 89), 20.0);
        assert_eq!(tier(150, 95), 10.0);
        assert_eq!(tier(165, 85), 5.0);
        // Diastolic alone pushes the tier down
        assert_eq!(tier(110, 100), 5.0);
    }

    #[test]
    fn test_sleep_bands() {
        let points = |hours: &[f64]| {
            let snapshot = HealthSnapshot {
                sleep_logs: hours.iter().enumerate().map(|(i, h)| sleep(*h, i as i64)).collect(),
                ..Default::default()
            };
            score(&snapshot).factor(ScoreFactor::Sleep).unwrap().earned
        };
        assert_eq!(points(&[7.0, 9.0]), 20.0);
        assert_eq!(points(&[6.0]), 15.0);
        assert_eq!(points(&[10.0]), 15.0);
        assert_eq!(points(&[5.0, 5.5]), 10.0);
        assert_eq!(points(&[11.0]), 10.0);
        assert_eq!(points(&[4.0]), 5.0);
        assert_eq!(points(&[12.5]), 5.0);
    }

    #[test]
    fn test_exercise_tiers() {
        let points = |minutes: u32| {
            let snapshot = HealthSnapshot {
                exercise_logs: vec![exercise(minutes, 0)],
                ..Default::default()
            };
            score(&snapshot).factor(ScoreFactor::Exercise).unwrap().earned
        };
        assert_eq!(points(30), 15.0);
        assert_eq!(points(20), 12.0);
        assert_eq!(points(10), 8.0);
        assert_eq!(points(5), 4.0);
    }

    #[test]
    fn test_diet_counts_trailing_calendar_week() {
        let points = |days_ago: &[i64]| {
            let snapshot = HealthSnapshot {
                food_logs: days_ago.iter().map(|d| food(*d * 24)).collect(),
                ..Default::default()
            };
            score(&snapshot).factor(ScoreFactor::Diet).unwrap().earned
        };
        assert_eq!(points(&[0, 1, 2, 3, 4, 5, 6]), 10.0);
        assert_eq!(points(&[0, 0, 1, 2, 6]), 8.0);
        assert_eq!(points(&[0, 1, 2]), 5.0);
        // Entries older than the window still make the factor present
        assert_eq!(points(&[7, 8, 9, 10]), 2.0);
    }

    #[test]
    fn test_score_is_bounded() {
        let snapshot = HealthSnapshot {
            readings: vec![reading(250, 150, 0)],
            activity_logs: vec![activity(ActivityType::Alcohol, 0)],
            sleep_logs: vec![sleep(-3.0, 0)],
            exercise_logs: vec![exercise(0, 0)],
            food_logs: vec![food(24 * 30)],
        };
        let result = score(&snapshot);
        // 5 + 0 + 5 + 4 + 2 out of 100
        assert_eq!(result.score, 16);
        assert!(result.score <= 100);
    }

    #[test]
    fn test_trend_improving_declining_stable() {
        let trend = |values: &[u16]| {
            let readings = readings_with_systolic(values);
            systolic_trend(&newest_first(&readings), TrendPolicy::PartialWindows)
        };
        // Newest first, so decreasing pressure over time reads as ascending here
        assert_eq!(trend(&[120, 124, 128, 132, 136, 140]), HealthTrend::Improving);
        assert_eq!(trend(&[140, 136, 132, 128, 124, 120]), HealthTrend::Declining);
        assert_eq!(trend(&[130, 130, 130, 130, 130, 130]), HealthTrend::Stable);
    }

    #[test]
    fn test_trend_with_sparse_history() {
        let partial = |values: &[u16]| {
            let readings = readings_with_systolic(values);
            systolic_trend(&newest_first(&readings), TrendPolicy::PartialWindows)
        };
        let full = |values: &[u16]| {
            let readings = readings_with_systolic(values);
            systolic_trend(&newest_first(&readings), TrendPolicy::FullWindowsOnly)
        };

        assert_eq!(partial(&[]), HealthTrend::Stable);
        assert_eq!(partial(&[150]), HealthTrend::Stable);
        assert_eq!(partial(&[120, 140]), HealthTrend::Improving);
        // Three readings: newest one against the next one only
        assert_eq!(partial(&[120, 140, 100]), HealthTrend::Improving);
        // Five readings: newest two against the next two
        assert_eq!(partial(&[150, 150, 120, 120, 200]), HealthTrend::Declining);

        assert_eq!(full(&[120, 140]), HealthTrend::Stable);
        assert_eq!(full(&[120, 125, 130, 135, 140]), HealthTrend::Stable);
        assert_eq!(full(&[120, 125, 130, 135, 140, 145]), HealthTrend::Improving);
    }
}
