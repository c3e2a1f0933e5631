//! Plain-text health report for sharing with a clinician.
//!
//! The report always contains every section header. Empty collections
//! render a "No ... data recorded." sentence in their section.
//!
//! The full instant only appears on the single `Generated at:` line. The
//! UTC date of `now` also drives the patient's age, the health score (its
//! diet factor counts the trailing week) and the exercise sessions counted
//! in the behavior change section, so those lines move when the date does.

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};

use crate::config::AggregatorConfig;
use crate::entities::{
    newest_first, ActivityLog, BloodPressureCategory, BloodPressureReading, BmiCategory,
    Breathing, ExerciseLog, FoodLog, HealthImpact, HealthSnapshot, PatientProfile, SleepLog,
};
use crate::services::insights::{categorize_blood_pressure, is_high_reading};
use crate::services::score::{
    compute_health_score, entries_in_trailing_week, mean_exercise_minutes, mean_sleep_hours,
};

pub const REPORT_TITLE: &str = "Comprehensive Health Report";
pub const GENERATED_AT_PREFIX: &str = "Generated at:";
pub const PROFILE_INCOMPLETE_NOTICE: &str =
    "Patient profile incomplete: no profile has been recorded for this patient.";

pub const SECTION_HEADERS: [&str; 10] = [
    "1. Patient Identity",
    "2. Health Summary",
    "3. Blood Pressure History",
    "4. Activity History",
    "5. Sleep History",
    "6. Exercise History",
    "7. Diet History",
    "8. Pattern Analysis",
    "9. Behavior Change",
    "10. General Recommendations",
];

pub const BP_HISTORY_LIMIT: usize = 10;
pub const ACTIVITY_HISTORY_LIMIT: usize = 10;
pub const SLEEP_HISTORY_LIMIT: usize = 7;
pub const EXERCISE_HISTORY_LIMIT: usize = 10;
pub const DIET_HISTORY_LIMIT: usize = 10;

pub const GENERAL_RECOMMENDATIONS: [&str; 6] = [
    "Measure your blood pressure at the same time every day and record each reading.",
    "Limit sodium to less than 2,300 mg per day and favour vegetables, fruit and whole grains.",
    "Take prescribed medication as directed and do not stop it without consulting your doctor.",
    "Aim for at least 150 minutes of moderate physical activity per week.",
    "Avoid smoking and limit alcohol consumption.",
    "Seek emergency care if a reading exceeds 180/120 mmHg or you have chest pain, shortness of breath or a severe headache.",
];

const NO_BP_DATA: &str = "No blood pressure data recorded.";
const NO_ACTIVITY_DATA: &str = "No activity data recorded.";
const NO_SLEEP_DATA: &str = "No sleep data recorded.";
const NO_EXERCISE_DATA: &str = "No exercise data recorded.";
const NO_DIET_DATA: &str = "No diet data recorded.";

const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Collections sorted newest first, shared by every section
struct SortedLogs<'a> {
    readings: Vec<&'a BloodPressureReading>,
    activity: Vec<&'a ActivityLog>,
    sleep: Vec<&'a SleepLog>,
    exercise: Vec<&'a ExerciseLog>,
    food: Vec<&'a FoodLog>,
}

impl<'a> SortedLogs<'a> {
    fn new(snapshot: &'a HealthSnapshot) -> Self {
        Self {
            readings: newest_first(&snapshot.readings),
            activity: newest_first(&snapshot.activity_logs),
            sleep: newest_first(&snapshot.sleep_logs),
            exercise: newest_first(&snapshot.exercise_logs),
            food: newest_first(&snapshot.food_logs),
        }
    }
}

fn newest<'a, T>(entries: &'a [&'a T], limit: usize) -> &'a [&'a T] {
    &entries[..entries.len().min(limit)]
}

/// Render the full report for one patient evaluated at `now`
pub fn generate_report(
    profile: Option<&PatientProfile>,
    snapshot: &HealthSnapshot,
    now: DateTime<Utc>,
    config: &AggregatorConfig,
) -> String {
    let mut report = String::new();
    write_report(&mut report, profile, snapshot, now, config)
        .expect("writing to a String cannot fail");
    report
}

fn write_report(
    out: &mut String,
    profile: Option<&PatientProfile>,
    snapshot: &HealthSnapshot,
    now: DateTime<Utc>,
    config: &AggregatorConfig,
) -> fmt::Result {
    let logs = SortedLogs::new(snapshot);

    writeln!(out, "{}", REPORT_TITLE)?;
    writeln!(out, "{}", "=".repeat(REPORT_TITLE.len()))?;
    writeln!(out, "{} {} UTC", GENERATED_AT_PREFIX, now.format(DATE_TIME_FORMAT))?;

    section(out, 0)?;
    write_identity(out, profile, now)?;

    section(out, 1)?;
    write_summary(out, snapshot, &logs, now, config)?;

    section(out, 2)?;
    write_bp_history(out, &logs, config)?;

    section(out, 3)?;
    write_activity_history(out, &logs)?;

    section(out, 4)?;
    write_sleep_history(out, &logs)?;

    section(out, 5)?;
    write_exercise_history(out, &logs)?;

    section(out, 6)?;
    write_diet_history(out, &logs)?;

    section(out, 7)?;
    write_pattern_analysis(out, &logs)?;

    section(out, 8)?;
    write_behavior_change(out, snapshot, &logs, now, config)?;

    section(out, 9)?;
    for recommendation in GENERAL_RECOMMENDATIONS {
        writeln!(out, "- {}", recommendation)?;
    }

    writeln!(out)?;
    write!(out, "--- End of Report ---")
}

fn section(out: &mut String, index: usize) -> fmt::Result {
    let header = SECTION_HEADERS[index];
    writeln!(out)?;
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", "-".repeat(header.len()))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn write_identity(out: &mut String, profile: Option<&PatientProfile>, now: DateTime<Utc>) -> fmt::Result {
    let Some(profile) = profile else {
        return writeln!(out, "{}", PROFILE_INCOMPLETE_NOTICE);
    };

    writeln!(out, "Name: {}", profile.name)?;
    writeln!(out, "Age: {} years", profile.age_on(now.date_naive()))?;
    writeln!(out, "Gender: {}", profile.gender.label())?;
    writeln!(out, "Height: {:.1} cm", profile.height_cm)?;
    writeln!(out, "Weight: {:.1} kg", profile.weight_kg)?;
    match profile.bmi() {
        Some(bmi) => writeln!(out, "BMI: {:.1} ({})", bmi, BmiCategory::from_bmi(bmi))?,
        None => writeln!(out, "BMI: not available (height or weight missing)")?,
    }
    writeln!(out, "Phone: {}", profile.phone_number)?;
    writeln!(out, "Address: {}", profile.address)?;

    let contact = &profile.emergency_contact;
    writeln!(
        out,
        "Emergency contact: {} ({}), {}",
        contact.name, contact.relationship, contact.phone_number
    )?;

    let history = &profile.medical_history;
    writeln!(out, "Medical history:")?;
    writeln!(out, "- Hypertension: {}", yes_no(history.has_hypertension))?;
    writeln!(out, "- Diabetes: {}", yes_no(history.has_diabetes))?;
    writeln!(out, "- Heart disease: {}", yes_no(history.has_heart_disease))?;
    writeln!(out, "- Kidney disease: {}", yes_no(history.has_kidney_disease))?;
    if history.other_conditions.is_empty() {
        writeln!(out, "Other conditions: None")
    } else {
        writeln!(out, "Other conditions: {}", history.other_conditions.join(", "))
    }
}

fn write_summary(
    out: &mut String,
    snapshot: &HealthSnapshot,
    logs: &SortedLogs<'_>,
    now: DateTime<Utc>,
    config: &AggregatorConfig,
) -> fmt::Result {
    let score = compute_health_score(snapshot, now, config.trend_policy);
    writeln!(out, "Health score: {}/100 (trend: {})", score.score, score.trend)?;

    let Some(latest) = logs.readings.first() else {
        return writeln!(out, "{}", NO_BP_DATA);
    };

    let category = categorize_blood_pressure(latest.systolic, latest.diastolic, config.crisis_precedence);
    writeln!(
        out,
        "Latest reading: {}/{} mmHg, pulse {} bpm on {} ({})",
        latest.systolic,
        latest.diastolic,
        latest.pulse,
        latest.timestamp.format(DATE_TIME_FORMAT),
        category
    )?;

    let count = logs.readings.len() as f64;
    let systolic: f64 = logs.readings.iter().map(|r| f64::from(r.systolic)).sum::<f64>() / count;
    let diastolic: f64 = logs.readings.iter().map(|r| f64::from(r.diastolic)).sum::<f64>() / count;
    writeln!(
        out,
        "Average of {} readings: {:.1}/{:.1} mmHg",
        logs.readings.len(),
        systolic,
        diastolic
    )?;

    if category == BloodPressureCategory::HypertensiveCrisis {
        writeln!(
            out,
            "WARNING: the latest reading is in the hypertensive crisis range. Seek medical attention immediately."
        )?;
    }
    Ok(())
}

fn write_bp_history(out: &mut String, logs: &SortedLogs<'_>, config: &AggregatorConfig) -> fmt::Result {
    let readings = newest(&logs.readings, BP_HISTORY_LIMIT);
    if readings.is_empty() {
        return writeln!(out, "{}", NO_BP_DATA);
    }
    for reading in readings {
        let category = categorize_blood_pressure(reading.systolic, reading.diastolic, config.crisis_precedence);
        write!(
            out,
            "- {}: {}/{} mmHg, pulse {} bpm ({})",
            reading.timestamp.format(DATE_TIME_FORMAT),
            reading.systolic,
            reading.diastolic,
            reading.pulse,
            category
        )?;
        match &reading.notes {
            Some(notes) if !notes.trim().is_empty() => writeln!(out, " - {}", notes.trim())?,
            _ => writeln!(out)?,
        }
    }
    Ok(())
}

fn write_activity_history(out: &mut String, logs: &SortedLogs<'_>) -> fmt::Result {
    let activity = newest(&logs.activity, ACTIVITY_HISTORY_LIMIT);
    if activity.is_empty() {
        return writeln!(out, "{}", NO_ACTIVITY_DATA);
    }
    for log in activity {
        write!(
            out,
            "- {}: {}, {} steps, {} min, {} intensity ({})",
            log.timestamp.format(DATE_TIME_FORMAT),
            log.activity_type,
            log.steps,
            log.duration_minutes,
            log.intensity,
            log.health_impact
        )?;
        match &log.description {
            Some(description) if !description.trim().is_empty() => {
                writeln!(out, " - {}", description.trim())?
            }
            _ => writeln!(out)?,
        }
    }
    Ok(())
}

fn write_sleep_history(out: &mut String, logs: &SortedLogs<'_>) -> fmt::Result {
    let sleep = newest(&logs.sleep, SLEEP_HISTORY_LIMIT);
    if sleep.is_empty() {
        return writeln!(out, "{}", NO_SLEEP_DATA);
    }
    for log in sleep {
        write!(out, "- {}: {:.1} hours", log.timestamp.format(DATE_FORMAT), log.duration_hours)?;
        match &log.quality {
            Some(quality) if !quality.trim().is_empty() => writeln!(out, " (quality: {})", quality.trim())?,
            _ => writeln!(out)?,
        }
    }
    Ok(())
}

fn write_exercise_history(out: &mut String, logs: &SortedLogs<'_>) -> fmt::Result {
    let exercise = newest(&logs.exercise, EXERCISE_HISTORY_LIMIT);
    if exercise.is_empty() {
        return writeln!(out, "{}", NO_EXERCISE_DATA);
    }
    for log in exercise {
        writeln!(
            out,
            "- {}: {}, {} min, pulse {} bpm, breathing {}, difficulty {}",
            log.timestamp.format(DATE_TIME_FORMAT),
            log.exercise_title,
            log.duration_minutes,
            log.pulse,
            log.breathing,
            log.difficulty
        )?;
    }
    Ok(())
}

fn write_diet_history(out: &mut String, logs: &SortedLogs<'_>) -> fmt::Result {
    let food = newest(&logs.food, DIET_HISTORY_LIMIT);
    if food.is_empty() {
        return writeln!(out, "{}", NO_DIET_DATA);
    }
    for log in food {
        writeln!(out, "- {}: {}", log.timestamp.format(DATE_TIME_FORMAT), log.description)?;
    }
    Ok(())
}

/// Counts are taken over the entries listed in the history sections
fn write_pattern_analysis(out: &mut String, logs: &SortedLogs<'_>) -> fmt::Result {
    let readings = newest(&logs.readings, BP_HISTORY_LIMIT);
    if readings.is_empty() {
        writeln!(out, "{}", NO_BP_DATA)?;
    } else {
        let high = readings
            .iter()
            .filter(|r| is_high_reading(r.systolic, r.diastolic))
            .count();
        writeln!(
            out,
            "Blood pressure: {} of {} listed readings at or above 140/90 mmHg, {} below.",
            high,
            readings.len(),
            readings.len() - high
        )?;
    }

    let activity = newest(&logs.activity, ACTIVITY_HISTORY_LIMIT);
    if activity.is_empty() {
        writeln!(out, "{}", NO_ACTIVITY_DATA)?;
    } else {
        let count = |impact: HealthImpact| activity.iter().filter(|a| a.health_impact == impact).count();
        writeln!(
            out,
            "Activities: {} positive, {} negative, {} neutral.",
            count(HealthImpact::Positive),
            count(HealthImpact::Negative),
            count(HealthImpact::Neutral)
        )?;
    }

    let sleep = newest(&logs.sleep, SLEEP_HISTORY_LIMIT);
    if sleep.is_empty() {
        writeln!(out, "{}", NO_SLEEP_DATA)?;
    } else {
        let recommended = sleep.iter().filter(|s| s.is_recommended_duration()).count();
        writeln!(
            out,
            "Sleep: {} of {} listed nights within the recommended 7 to 9 hours.",
            recommended,
            sleep.len()
        )?;
    }

    let exercise = newest(&logs.exercise, EXERCISE_HISTORY_LIMIT);
    if exercise.is_empty() {
        writeln!(out, "{}", NO_EXERCISE_DATA)?;
    } else {
        let sessions = exercise.len() as f64;
        let duration = exercise.iter().map(|e| f64::from(e.duration_minutes)).sum::<f64>() / sessions;
        let pulse = exercise.iter().map(|e| f64::from(e.pulse)).sum::<f64>() / sessions;
        let normal_breathing = exercise
            .iter()
            .filter(|e| e.breathing == Breathing::Normal)
            .count();
        writeln!(
            out,
            "Exercise: average {:.1} min per session, average pulse {:.1} bpm, normal breathing in {} of {} sessions.",
            duration,
            pulse,
            normal_breathing,
            exercise.len()
        )?;
    }
    Ok(())
}

fn write_behavior_change(
    out: &mut String,
    snapshot: &HealthSnapshot,
    logs: &SortedLogs<'_>,
    now: DateTime<Utc>,
    config: &AggregatorConfig,
) -> fmt::Result {
    writeln!(out, "Blood pressure:")?;
    match logs.readings.first() {
        None => writeln!(out, "  {}", NO_BP_DATA)?,
        Some(latest) => {
            let category = categorize_blood_pressure(latest.systolic, latest.diastolic, config.crisis_precedence);
            writeln!(
                out,
                "  Before: latest reading {}/{} mmHg ({})",
                latest.systolic, latest.diastolic, category
            )?;
            if is_high_reading(latest.systolic, latest.diastolic) {
                writeln!(
                    out,
                    "  Target: below 140/90 mmHg through medication adherence, less salt and daily monitoring"
                )?;
            } else {
                writeln!(out, "  Target: keep readings below 140/90 mmHg")?;
            }
        }
    }

    writeln!(out, "Sleep:")?;
    match mean_sleep_hours(&snapshot.sleep_logs) {
        None => writeln!(out, "  {}", NO_SLEEP_DATA)?,
        Some(hours) => {
            writeln!(out, "  Before: average {:.1} hours per night", hours)?;
            if hours < 7.0 {
                writeln!(
                    out,
                    "  Target: 7 to 9 hours per night, going to bed and waking at consistent times"
                )?;
            } else {
                writeln!(out, "  Target: keep 7 to 9 hours per night on a consistent schedule")?;
            }
        }
    }

    writeln!(out, "Exercise:")?;
    match mean_exercise_minutes(&snapshot.exercise_logs) {
        None => {
            writeln!(out, "  Before: no exercise recorded")?;
            writeln!(out, "  Target: start with 3 sessions per week of 15 to 20 minutes")?;
        }
        Some(minutes) => {
            let sessions = entries_in_trailing_week(&snapshot.exercise_logs, now);
            writeln!(
                out,
                "  Before: average {:.1} min per session, {} sessions in the last 7 days",
                minutes, sessions
            )?;
            let mut adjusted = false;
            if minutes < 30.0 {
                writeln!(out, "  Target: increase session length toward 30 minutes")?;
                adjusted = true;
            }
            if sessions < 5 {
                writeln!(out, "  Target: increase frequency toward 5 sessions per week")?;
                adjusted = true;
            }
            if !adjusted {
                writeln!(out, "  Target: maintain at least 30 minutes, 5 times per week")?;
            }
        }
    }

    writeln!(out, "Activity:")?;
    if logs.activity.is_empty() {
        writeln!(out, "  {}", NO_ACTIVITY_DATA)?;
    } else {
        let positive = logs.activity.iter().filter(|a| a.health_impact == HealthImpact::Positive).count();
        let negative = logs.activity.iter().filter(|a| a.health_impact == HealthImpact::Negative).count();
        writeln!(out, "  Before: {} positive and {} negative activities", positive, negative)?;
        if negative > positive {
            writeln!(
                out,
                "  Target: reduce unhealthy activities such as smoking, alcohol and long sedentary periods, replacing them with walking, yoga or meditation"
            )?;
        } else {
            writeln!(out, "  Target: keep positive activities ahead of negative ones")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrisisPrecedence;
    use crate::entities::ActivityType;
    use crate::testing::{activity, exercise, food, reading, sample_profile, sample_snapshot, sleep, test_now};
    use chrono::Duration;

    fn report(profile: Option<&PatientProfile>, snapshot: &HealthSnapshot) -> String {
        generate_report(profile, snapshot, test_now(), &AggregatorConfig::default())
    }

    #[test]
    fn test_report_is_deterministic() {
        let profile = sample_profile();
        let snapshot = sample_snapshot();
        assert_eq!(report(Some(&profile), &snapshot), report(Some(&profile), &snapshot));
    }

    fn without_generated_line(text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| !line.starts_with(GENERATED_AT_PREFIX))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_same_day_only_changes_generated_line() {
        let profile = sample_profile();
        let snapshot = sample_snapshot();
        let config = AggregatorConfig::default();

        // 09:30 and 23:59 fall on the same UTC date
        let first = generate_report(Some(&profile), &snapshot, test_now(), &config);
        let later = test_now() + Duration::hours(14) + Duration::minutes(29);
        let second = generate_report(Some(&profile), &snapshot, later, &config);
        assert_ne!(first, second);

        assert_eq!(without_generated_line(&first), without_generated_line(&second));
        assert_eq!(first.lines().filter(|l| l.starts_with(GENERATED_AT_PREFIX)).count(), 1);
    }

    #[test]
    fn test_later_date_moves_trailing_week() {
        let profile = sample_profile();
        let snapshot = sample_snapshot();
        let config = AggregatorConfig::default();

        let first = generate_report(Some(&profile), &snapshot, test_now(), &config);
        let second = generate_report(Some(&profile), &snapshot, test_now() + Duration::days(3), &config);

        let score_line = |text: &str| -> String {
            text.lines()
                .find(|line| line.starts_with("Health score:"))
                .map(str::to_string)
                .unwrap_or_default()
        };
        assert_ne!(score_line(&first), score_line(&second));
        assert_ne!(without_generated_line(&first), without_generated_line(&second));
    }

    #[test]
    fn test_empty_data_renders_every_section() {
        let text = report(None, &HealthSnapshot::default());

        for header in SECTION_HEADERS {
            assert!(text.contains(header), "missing header {}", header);
        }
        assert!(text.contains(PROFILE_INCOMPLETE_NOTICE));
        assert!(text.contains(NO_BP_DATA));
        assert!(text.contains(NO_ACTIVITY_DATA));
        assert!(text.contains(NO_SLEEP_DATA));
        assert!(text.contains(NO_EXERCISE_DATA));
        assert!(text.contains(NO_DIET_DATA));
        assert!(text.contains("Health score: 0/100 (trend: stable)"));
        assert!(text.ends_with("--- End of Report ---"));
    }

    #[test]
    fn test_sections_appear_in_order() {
        let text = report(Some(&sample_profile()), &sample_snapshot());
        let positions: Vec<usize> = SECTION_HEADERS
            .iter()
            .map(|header| text.find(header).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_identity_section() {
        let text = report(Some(&sample_profile()), &HealthSnapshot::default());
        assert!(text.contains("Name: Siti Rahma"));
        assert!(text.contains("Age: 50 years"));
        assert!(text.contains("Gender: Female"));
        assert!(text.contains("BMI: 25.8 (Overweight)"));
        assert!(text.contains("Emergency contact: Budi Santoso (Spouse), +62 812 0000 2222"));
        assert!(text.contains("- Hypertension: Yes"));
        assert!(text.contains("- Diabetes: No"));
        assert!(text.contains("Other conditions: Asthma"));
        assert!(!text.contains(PROFILE_INCOMPLETE_NOTICE));
    }

    #[test]
    fn test_missing_height_does_not_break_bmi() {
        let mut profile = sample_profile();
        profile.height_cm = 0.0;
        let text = report(Some(&profile), &HealthSnapshot::default());
        assert!(text.contains("BMI: not available"));
    }

    #[test]
    fn test_summary_and_pattern_analysis() {
        let text = report(Some(&sample_profile()), &sample_snapshot());

        assert!(text.contains("Health score:"));
        assert!(text.contains("trend: improving"));
        assert!(text.contains("Latest reading: 130/85 mmHg, pulse 72 bpm on 15/03/2024 09:30 (High Stage 1)"));
        // 140/90 and 145/92 are at or above the threshold
        assert!(text.contains("Blood pressure: 2 of 6 listed readings at or above 140/90 mmHg, 4 below."));
        assert!(text.contains("Activities: 3 positive, 1 negative, 0 neutral."));
        assert!(text.contains("Sleep: 2 of 3 listed nights within the recommended 7 to 9 hours."));
        assert!(text.contains("average 25.0 min per session, average pulse 110.0 bpm, normal breathing in 2 of 2 sessions"));
    }

    #[test]
    fn test_history_is_capped_and_newest_first() {
        let snapshot = HealthSnapshot {
            readings: (0..15).map(|i| reading(120 + i as u16, 80, i * 24)).collect(),
            sleep_logs: (0..10).map(|i| sleep(7.0, i * 24)).collect(),
            ..Default::default()
        };
        let text = report(None, &snapshot);

        let bp_lines: Vec<&str> = text.lines().filter(|l| l.contains(" mmHg, pulse ") && l.starts_with("- ")).collect();
        assert_eq!(bp_lines.len(), BP_HISTORY_LIMIT);
        assert!(bp_lines[0].contains("120/80"));
        assert!(!text.contains("134/80"));

        let sleep_lines = text.lines().filter(|l| l.starts_with("- ") && l.ends_with("7.0 hours")).count();
        assert_eq!(sleep_lines, SLEEP_HISTORY_LIMIT);
    }

    #[test]
    fn test_crisis_warning_follows_precedence() {
        let snapshot = HealthSnapshot {
            readings: vec![reading(190, 125, 0)],
            ..Default::default()
        };

        let severity = report(None, &snapshot);
        assert!(severity.contains("(Hypertensive Crisis)"));
        assert!(severity.contains("WARNING"));

        let config = AggregatorConfig {
            crisis_precedence: CrisisPrecedence::SourceOrder,
            ..Default::default()
        };
        let source = generate_report(None, &snapshot, test_now(), &config);
        assert!(source.contains("(High Stage 2)"));
        assert!(!source.contains("WARNING"));
    }

    #[test]
    fn test_behavior_change_targets() {
        let snapshot = HealthSnapshot {
            readings: vec![reading(150, 95, 0)],
            activity_logs: vec![
                activity(ActivityType::Smoking, 1),
                activity(ActivityType::Alcohol, 2),
                activity(ActivityType::Walking, 3),
            ],
            sleep_logs: vec![sleep(5.5, 1)],
            exercise_logs: vec![exercise(15, 1), exercise(15, 30)],
            food_logs: vec![food(1)],
        };
        let text = report(None, &snapshot);

        assert!(text.contains("Target: below 140/90 mmHg"));
        assert!(text.contains("Before: average 5.5 hours per night"));
        assert!(text.contains("Target: 7 to 9 hours per night"));
        assert!(text.contains("Before: average 15.0 min per session, 2 sessions in the last 7 days"));
        assert!(text.contains("Target: increase session length toward 30 minutes"));
        assert!(text.contains("Target: increase frequency toward 5 sessions per week"));
        assert!(text.contains("Target: reduce unhealthy activities"));
    }

    #[test]
    fn test_behavior_change_without_exercise() {
        let text = report(None, &HealthSnapshot::default());
        assert!(text.contains("Before: no exercise recorded"));
        assert!(text.contains("Target: start with 3 sessions per week of 15 to 20 minutes"));
    }

    #[test]
    fn test_general_recommendations_are_listed() {
        let text = report(None, &HealthSnapshot::default());
        for recommendation in GENERAL_RECOMMENDATIONS {
            assert!(text.contains(recommendation));
        }
    }
}
