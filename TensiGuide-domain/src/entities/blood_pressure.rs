use std::fmt;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Domain model for a blood pressure reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureReading {
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

/// Values for recording a new blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBloodPressureReading {
    pub systolic: u16,
    pub diastolic: u16,
    pub pulse: u16,
    pub notes: Option<String>,
    /// Defaults to the current time when not provided
    pub timestamp: Option<DateTime<Utc>>,
}

/// Blood pressure category based on measurements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureCategory {
    /// Hypotension (systolic < 90 or diastolic < 60)
    Low,

    /// Normal blood pressure (systolic < 120 and diastolic < 80)
    Normal,

    /// Elevated blood pressure (systolic 120-129 and diastolic < 80)
    Elevated,

    /// Stage 1 Hypertension (systolic 130-139 or diastolic 80-89)
    HighStage1,

    /// Stage 2 Hypertension (systolic ≥ 140 or diastolic ≥ 90)
    HighStage2,

    /// Hypertensive crisis (systolic > 180 or diastolic > 120)
    HypertensiveCrisis,
}

impl BloodPressureCategory {
    /// Human readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Low => "Low",
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::HighStage1 => "High Stage 1",
            BloodPressureCategory::HighStage2 => "High Stage 2",
            BloodPressureCategory::HypertensiveCrisis => "Hypertensive Crisis",
        }
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
