use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Storage model for a blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodPressureRecord {
    /// Unique identifier for the reading
    pub id: String,

    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Pulse rate in beats per minute
    pub pulse: u16,

    /// Optional notes about the reading
    pub notes: Option<String>,

    /// When the reading was taken
    pub timestamp: DateTime<Utc>,
}

/// Input data for storing a new blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBloodPressureRecord {
    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Pulse rate in beats per minute
    pub pulse: u16,

    /// Optional notes about the reading
    pub notes: Option<String>,

    /// When the reading was taken
    pub timestamp: DateTime<Utc>,
}
