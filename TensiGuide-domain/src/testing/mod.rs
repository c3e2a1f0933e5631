// Testing utilities for the domain layer
// Only compiled for tests or when the "mock" feature is enabled

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::entities::{
    ActivityLog, ActivityType, BloodPressureReading, Breathing, Difficulty, EmergencyContact,
    ExerciseLog, FoodLog, Gender, HealthSnapshot, Intensity, MedicalHistory, PatientProfile,
    SleepLog,
};

/// Fixed evaluation instant used across tests: 2024-03-15 09:30 UTC
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

fn hours_before_now(hours_ago: i64) -> DateTime<Utc> {
    test_now() - Duration::hours(hours_ago)
}

/// Reading taken `hours_ago` hours before [`test_now`]
pub fn reading(systolic: u16, diastolic: u16, hours_ago: i64) -> BloodPressureReading {
    BloodPressureReading {
        id: format!("bp-{}-{}-{}", systolic, diastolic, hours_ago),
        systolic,
        diastolic,
        pulse: 72,
        notes: None,
        timestamp: hours_before_now(hours_ago),
    }
}

pub fn activity(activity_type: ActivityType, hours_ago: i64) -> ActivityLog {
    ActivityLog {
        id: format!("act-{}-{}", activity_type, hours_ago),
        steps: 2500,
        duration_minutes: 20,
        activity_type,
        health_impact: activity_type.health_impact(),
        intensity: Intensity::Medium,
        description: None,
        timestamp: hours_before_now(hours_ago),
    }
}

pub fn sleep(duration_hours: f64, hours_ago: i64) -> SleepLog {
    SleepLog {
        id: format!("sleep-{}", hours_ago),
        duration_hours,
        quality: None,
        timestamp: hours_before_now(hours_ago),
    }
}

pub fn exercise(duration_minutes: u32, hours_ago: i64) -> ExerciseLog {
    ExerciseLog {
        id: format!("ex-{}-{}", duration_minutes, hours_ago),
        exercise_title: "Brisk walk".to_string(),
        duration_minutes,
        pulse: 110,
        breathing: Breathing::Normal,
        difficulty: Difficulty::Medium,
        notes: None,
        timestamp: hours_before_now(hours_ago),
    }
}

pub fn food(hours_ago: i64) -> FoodLog {
    FoodLog {
        id: format!("food-{}", hours_ago),
        description: "Steamed rice, vegetables and grilled fish".to_string(),
        timestamp: hours_before_now(hours_ago),
    }
}

/// A complete profile, 50 years old on [`test_now`]
pub fn sample_profile() -> PatientProfile {
    PatientProfile {
        name: "Siti Rahma".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1974, 1, 20).unwrap_or_default(),
        gender: Gender::Female,
        height_cm: 160.0,
        weight_kg: 66.0,
        phone_number: "+62 812 0000 1111".to_string(),
        address: "Jl. Merdeka 10, Bandung".to_string(),
        emergency_contact: EmergencyContact {
            name: "Budi Santoso".to_string(),
            relationship: "Spouse".to_string(),
            phone_number: "+62 812 0000 2222".to_string(),
        },
        medical_history: MedicalHistory {
            has_hypertension: true,
            has_diabetes: false,
            has_heart_disease: false,
            has_kidney_disease: false,
            other_conditions: vec!["Asthma".to_string()],
        },
    }
}

/// A week of mixed data for one patient
pub fn sample_snapshot() -> HealthSnapshot {
    HealthSnapshot {
        readings: vec![
            reading(130, 85, 0),
            reading(125, 82, 24),
            reading(140, 90, 48),
            reading(138, 88, 72),
            reading(122, 79, 96),
            reading(145, 92, 120),
        ],
        activity_logs: vec![
            activity(ActivityType::Walking, 2),
            activity(ActivityType::Yoga, 26),
            activity(ActivityType::Exercise, 50),
            activity(ActivityType::Smoking, 74),
        ],
        sleep_logs: vec![sleep(7.5, 3), sleep(6.0, 27), sleep(8.0, 51)],
        exercise_logs: vec![exercise(30, 4), exercise(20, 28)],
        food_logs: vec![food(1), food(25), food(49), food(73), food(97)],
    }
}
