use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Domain model for a night of sleep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct SleepLog {
    pub id: String,
    pub duration_hours: f64,
    pub quality: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Values for recording a new sleep log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSleepLog {
    pub duration_hours: f64,
    pub quality: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl SleepLog {
    /// Whether the duration falls in the recommended 7 to 9 hour band
    pub fn is_recommended_duration(&self) -> bool {
        (7.0..=9.0).contains(&self.duration_hours)
    }
}
