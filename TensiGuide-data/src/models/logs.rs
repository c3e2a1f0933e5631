use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Storage model for an activity log entry.
///
/// Enumerated fields are stored as their lowercase labels; the domain layer
/// owns parsing them back into typed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    pub steps: u32,
    /// Duration in minutes
    pub duration: u32,
    pub activity_type: String,
    /// Impact tag assigned when the entry was created
    pub health_impact: String,
    pub intensity: String,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Input data for storing a new activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityRecord {
    pub steps: u32,
    pub duration: u32,
    pub activity_type: String,
    pub health_impact: String,
    pub intensity: String,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Storage model for a sleep log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepRecord {
    pub id: String,
    /// Duration in hours
    pub duration: f64,
    pub quality: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Input data for storing a new sleep log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSleepRecord {
    pub duration: f64,
    pub quality: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Storage model for a guided exercise session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub id: String,
    pub exercise_title: String,
    /// Duration in minutes
    pub duration: u32,
    /// Pulse measured right after the session
    pub pulse: u16,
    pub breathing: String,
    pub difficulty: String,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Input data for storing a new exercise session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExerciseRecord {
    pub exercise_title: String,
    pub duration: u32,
    pub pulse: u16,
    pub breathing: String,
    pub difficulty: String,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Storage model for a food diary entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Input data for storing a new food diary entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFoodRecord {
    pub description: String,
    pub timestamp: DateTime<Utc>,
}
