use chrono::{DateTime, Utc};
use tensi_guide_data::models as data;

use crate::entities::{
    ActivityLog, BloodPressureReading, EmergencyContact, ExerciseLog, FoodLog, HealthSnapshot,
    MedicalHistory, NewActivityLog, NewBloodPressureReading, NewExerciseLog, NewFoodLog,
    NewSleepLog, PatientProfile, SleepLog,
};

// Conversion functions between domain entities and data models.
// Stored labels are parsed here; an unknown label is reported as an error
// message, never remapped.

/// Convert from data model to domain entity for blood pressure reading
pub fn convert_to_domain_reading(record: data::BloodPressureRecord) -> BloodPressureReading {
    BloodPressureReading {
        id: record.id,
        systolic: record.systolic,
        diastolic: record.diastolic,
        pulse: record.pulse,
        notes: record.notes,
        timestamp: record.timestamp,
    }
}

/// Convert from domain values to data model for a new reading
pub fn convert_to_data_reading_request(reading: &NewBloodPressureReading, now: DateTime<Utc>) -> data::CreateBloodPressureRecord {
    data::CreateBloodPressureRecord {
        systolic: reading.systolic,
        diastolic: reading.diastolic,
        pulse: reading.pulse,
        notes: reading.notes.clone(),
        timestamp: reading.timestamp.unwrap_or(now),
    }
}

pub fn convert_to_domain_activity(record: data::ActivityRecord) -> Result<ActivityLog, String> {
    Ok(ActivityLog {
        activity_type: record.activity_type.parse()?,
        health_impact: record.health_impact.parse()?,
        intensity: record.intensity.parse()?,
        id: record.id,
        steps: record.steps,
        duration_minutes: record.duration,
        description: record.description,
        timestamp: record.timestamp,
    })
}

/// The impact tag is fixed here, at creation time, from the activity type
pub fn convert_to_data_activity_request(activity: &NewActivityLog, now: DateTime<Utc>) -> data::CreateActivityRecord {
    data::CreateActivityRecord {
        steps: activity.steps,
        duration: activity.duration_minutes,
        activity_type: activity.activity_type.as_str().to_string(),
        health_impact: activity.activity_type.health_impact().as_str().to_string(),
        intensity: activity.intensity.as_str().to_string(),
        description: activity.description.clone(),
        timestamp: activity.timestamp.unwrap_or(now),
    }
}

pub fn convert_to_domain_sleep(record: data::SleepRecord) -> SleepLog {
    SleepLog {
        id: record.id,
        duration_hours: record.duration,
        quality: record.quality,
        timestamp: record.timestamp,
    }
}

pub fn convert_to_data_sleep_request(sleep: &NewSleepLog, now: DateTime<Utc>) -> data::CreateSleepRecord {
    data::CreateSleepRecord {
        duration: sleep.duration_hours,
        quality: sleep.quality.clone(),
        timestamp: sleep.timestamp.unwrap_or(now),
    }
}

pub fn convert_to_domain_exercise(record: data::ExerciseRecord) -> Result<ExerciseLog, String> {
    Ok(ExerciseLog {
        breathing: record.breathing.parse()?,
        difficulty: record.difficulty.parse()?,
        id: record.id,
        exercise_title: record.exercise_title,
        duration_minutes: record.duration,
        pulse: record.pulse,
        notes: record.notes,
        timestamp: record.timestamp,
    })
}

pub fn convert_to_data_exercise_request(exercise: &NewExerciseLog, now: DateTime<Utc>) -> data::CreateExerciseRecord {
    data::CreateExerciseRecord {
        exercise_title: exercise.exercise_title.clone(),
        duration: exercise.duration_minutes,
        pulse: exercise.pulse,
        breathing: exercise.breathing.as_str().to_string(),
        difficulty: exercise.difficulty.as_str().to_string(),
        notes: exercise.notes.clone(),
        timestamp: exercise.timestamp.unwrap_or(now),
    }
}

pub fn convert_to_domain_food(record: data::FoodRecord) -> FoodLog {
    FoodLog {
        id: record.id,
        description: record.description,
        timestamp: record.timestamp,
    }
}

pub fn convert_to_data_food_request(food: &NewFoodLog, now: DateTime<Utc>) -> data::CreateFoodRecord {
    data::CreateFoodRecord {
        description: food.description.clone(),
        timestamp: food.timestamp.unwrap_or(now),
    }
}

pub fn convert_to_domain_profile(record: data::PatientProfileRecord) -> Result<PatientProfile, String> {
    Ok(PatientProfile {
        gender: record.gender.parse()?,
        name: record.name,
        birth_date: record.birth_date,
        height_cm: record.height,
        weight_kg: record.weight,
        phone_number: record.phone_number,
        address: record.address,
        emergency_contact: EmergencyContact {
            name: record.emergency_contact.name,
            relationship: record.emergency_contact.relationship,
            phone_number: record.emergency_contact.phone_number,
        },
        medical_history: MedicalHistory {
            has_hypertension: record.medical_history.has_hypertension,
            has_diabetes: record.medical_history.has_diabetes,
            has_heart_disease: record.medical_history.has_heart_disease,
            has_kidney_disease: record.medical_history.has_kidney_disease,
            other_conditions: record.medical_history.other_conditions,
        },
    })
}

pub fn convert_to_data_profile(profile: &PatientProfile, now: DateTime<Utc>) -> data::PatientProfileRecord {
    data::PatientProfileRecord {
        name: profile.name.clone(),
        birth_date: profile.birth_date,
        gender: profile.gender.as_str().to_string(),
        height: profile.height_cm,
        weight: profile.weight_kg,
        phone_number: profile.phone_number.clone(),
        address: profile.address.clone(),
        emergency_contact: data::EmergencyContactRecord {
            name: profile.emergency_contact.name.clone(),
            relationship: profile.emergency_contact.relationship.clone(),
            phone_number: profile.emergency_contact.phone_number.clone(),
        },
        medical_history: data::MedicalHistoryRecord {
            has_hypertension: profile.medical_history.has_hypertension,
            has_diabetes: profile.medical_history.has_diabetes,
            has_heart_disease: profile.medical_history.has_heart_disease,
            has_kidney_disease: profile.medical_history.has_kidney_disease,
            other_conditions: profile.medical_history.other_conditions.clone(),
        },
        updated_at: now,
    }
}

/// Convert a stored snapshot into domain collections plus the optional profile
pub fn convert_to_domain_snapshot(
    snapshot: data::PatientLogsSnapshot,
) -> Result<(HealthSnapshot, Option<PatientProfile>), String> {
    let profile = snapshot.profile.map(convert_to_domain_profile).transpose()?;

    let health = HealthSnapshot {
        readings: snapshot.readings.into_iter().map(convert_to_domain_reading).collect(),
        activity_logs: snapshot
            .activity
            .into_iter()
            .map(convert_to_domain_activity)
            .collect::<Result<_, _>>()?,
        sleep_logs: snapshot.sleep.into_iter().map(convert_to_domain_sleep).collect(),
        exercise_logs: snapshot
            .exercise
            .into_iter()
            .map(convert_to_domain_exercise)
            .collect::<Result<_, _>>()?,
        food_logs: snapshot.food.into_iter().map(convert_to_domain_food).collect(),
    };

    Ok((health, profile))
}
