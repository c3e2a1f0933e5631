use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use tensi_guide_domain::entities::{
    ActivityType, Breathing, Difficulty, Intensity, NewActivityLog, NewBloodPressureReading,
    NewExerciseLog, NewFoodLog, NewSleepLog,
};

use super::common::ErrorResponse;

/// Validate a request and turn it into its domain value
pub trait IntoDomain: Validate {
    type Domain;

    fn into_domain(self) -> Result<Self::Domain, ErrorResponse>;

    fn validated(self) -> Result<Self::Domain, ErrorResponse>
    where
        Self: Sized,
    {
        self.validate().map_err(|e| ErrorResponse::from_validation(&e))?;
        self.into_domain()
    }
}

fn parse_label<T>(field: &str, value: &str) -> Result<T, ErrorResponse>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|msg: String| ErrorResponse::validation_error(&format!("{}: {}", field, msg), None))
}

/// Request payload for recording a blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReadingRequest {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 40, max = 300, message = "Systolic must be between 40 and 300"))]
    pub systolic: i32,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 20, max = 200, message = "Diastolic must be between 20 and 200"))]
    pub diastolic: i32,

    /// Pulse rate in beats per minute
    #[validate(range(min = 20, max = 250, message = "Pulse must be between 20 and 250"))]
    pub pulse: i32,

    #[validate(length(max = 1000, message = "Notes cannot exceed 1000 characters"))]
    pub notes: Option<String>,

    /// When the reading was taken. Defaults to current time if not provided.
    pub timestamp: Option<DateTime<Utc>>,
}

impl IntoDomain for CreateReadingRequest {
    type Domain = NewBloodPressureReading;

    // Ranges are checked by validate(), so the casts cannot truncate
    fn into_domain(self) -> Result<Self::Domain, ErrorResponse> {
        Ok(NewBloodPressureReading {
            systolic: self.systolic as u16,
            diastolic: self.diastolic as u16,
            pulse: self.pulse as u16,
            notes: self.notes,
            timestamp: self.timestamp,
        })
    }
}

/// Request payload for recording an activity
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateActivityRequest {
    #[validate(range(max = 100000, message = "Steps must be at most 100000"))]
    #[serde(default)]
    pub steps: u32,

    /// Duration in minutes
    #[validate(range(max = 1440, message = "Duration cannot exceed a day"))]
    pub duration: u32,

    /// One of exercise, walking, smoking, alcohol, sedentary, stress,
    /// meditation, yoga, gaming, social, work, other
    #[schema(example = "walking")]
    pub activity_type: String,

    /// low, medium or high (default: medium)
    pub intensity: Option<String>,

    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    pub description: Option<String>,

    pub timestamp: Option<DateTime<Utc>>,
}

impl IntoDomain for CreateActivityRequest {
    type Domain = NewActivityLog;

    fn into_domain(self) -> Result<Self::Domain, ErrorResponse> {
        let activity_type: ActivityType = parse_label("activity_type", &self.activity_type)?;
        let intensity = match self.intensity.as_deref() {
            Some(label) => parse_label::<Intensity>("intensity", label)?,
            None => Intensity::default(),
        };

        Ok(NewActivityLog {
            steps: self.steps,
            duration_minutes: self.duration,
            activity_type,
            intensity,
            description: self.description,
            timestamp: self.timestamp,
        })
    }
}

/// Request payload for recording a night of sleep
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSleepRequest {
    /// Hours slept
    #[validate(range(min = 0.0, max = 24.0, message = "Sleep duration must be between 0 and 24 hours"))]
    pub duration: f64,

    #[validate(length(max = 200, message = "Quality cannot exceed 200 characters"))]
    pub quality: Option<String>,

    pub timestamp: Option<DateTime<Utc>>,
}

impl IntoDomain for CreateSleepRequest {
    type Domain = NewSleepLog;

    fn into_domain(self) -> Result<Self::Domain, ErrorResponse> {
        Ok(NewSleepLog {
            duration_hours: self.duration,
            quality: self.quality,
            timestamp: self.timestamp,
        })
    }
}

/// Request payload for recording an exercise session
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    #[validate(length(min = 1, max = 200, message = "Exercise title must be 1 to 200 characters"))]
    pub exercise_title: String,

    /// Duration in minutes
    #[validate(range(min = 1, max = 180, message = "Duration must be between 1 and 180 minutes"))]
    pub duration: u32,

    /// Pulse after the session
    #[validate(range(min = 40, max = 200, message = "Pulse must be between 40 and 200"))]
    pub pulse: i32,

    /// normal, fast or slow
    pub breathing: String,

    /// easy, medium or hard
    pub difficulty: String,

    #[validate(length(max = 1000, message = "Notes cannot exceed 1000 characters"))]
    pub notes: Option<String>,

    pub timestamp: Option<DateTime<Utc>>,
}

impl IntoDomain for CreateExerciseRequest {
    type Domain = NewExerciseLog;

    fn into_domain(self) -> Result<Self::Domain, ErrorResponse> {
        let breathing: Breathing = parse_label("breathing", &self.breathing)?;
        let difficulty: Difficulty = parse_label("difficulty", &self.difficulty)?;

        Ok(NewExerciseLog {
            exercise_title: self.exercise_title,
            duration_minutes: self.duration,
            pulse: self.pulse as u16,
            breathing,
            difficulty,
            notes: self.notes,
            timestamp: self.timestamp,
        })
    }
}

/// Request payload for a food diary entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFoodRequest {
    #[validate(length(min = 1, max = 2000, message = "Description must be 1 to 2000 characters"))]
    pub description: String,

    pub timestamp: Option<DateTime<Utc>>,
}

impl IntoDomain for CreateFoodRequest {
    type Domain = NewFoodLog;

    fn into_domain(self) -> Result<Self::Domain, ErrorResponse> {
        Ok(NewFoodLog {
            description: self.description,
            timestamp: self.timestamp,
        })
    }
}
