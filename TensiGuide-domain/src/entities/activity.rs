use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Kind of logged activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Exercise,
    Walking,
    Smoking,
    Alcohol,
    Sedentary,
    Stress,
    Meditation,
    Yoga,
    Gaming,
    Social,
    Work,
    Other,
}

impl ActivityType {
    pub const ALL: [ActivityType; 12] = [
        ActivityType::Exercise,
        ActivityType::Walking,
        ActivityType::Smoking,
        ActivityType::Alcohol,
        ActivityType::Sedentary,
        ActivityType::Stress,
        ActivityType::Meditation,
        ActivityType::Yoga,
        ActivityType::Gaming,
        ActivityType::Social,
        ActivityType::Work,
        ActivityType::Other,
    ];

    /// Impact tag stored with a new log of this type
    pub fn health_impact(&self) -> HealthImpact {
        match self {
            ActivityType::Exercise
            | ActivityType::Walking
            | ActivityType::Meditation
            | ActivityType::Yoga => HealthImpact::Positive,
            ActivityType::Smoking
            | ActivityType::Alcohol
            | ActivityType::Sedentary
            | ActivityType::Stress => HealthImpact::Negative,
            ActivityType::Gaming
            | ActivityType::Social
            | ActivityType::Work
            | ActivityType::Other => HealthImpact::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Exercise => "exercise",
            ActivityType::Walking => "walking",
            ActivityType::Smoking => "smoking",
            ActivityType::Alcohol => "alcohol",
            ActivityType::Sedentary => "sedentary",
            ActivityType::Stress => "stress",
            ActivityType::Meditation => "meditation",
            ActivityType::Yoga => "yoga",
            ActivityType::Gaming => "gaming",
            ActivityType::Social => "social",
            ActivityType::Work => "work",
            ActivityType::Other => "other",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown activity type: {}", s))
    }
}

/// Whether an activity helps or hurts blood pressure management
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HealthImpact {
    Positive,
    Negative,
    Neutral,
}

impl HealthImpact {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthImpact::Positive => "positive",
            HealthImpact::Negative => "negative",
            HealthImpact::Neutral => "neutral",
        }
    }
}

impl fmt::Display for HealthImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthImpact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(HealthImpact::Positive),
            "negative" => Ok(HealthImpact::Negative),
            "neutral" => Ok(HealthImpact::Neutral),
            _ => Err(format!("Unknown health impact: {}", s)),
        }
    }
}

/// Self-reported intensity of an activity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            _ => Err(format!("Unknown intensity: {}", s)),
        }
    }
}

/// Domain model for an activity log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ActivityLog {
    pub id: String,
    pub steps: u32,
    pub duration_minutes: u32,
    pub activity_type: ActivityType,
    /// Assigned from the activity type when the entry was created
    pub health_impact: HealthImpact,
    pub intensity: Intensity,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Values for recording a new activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivityLog {
    pub steps: u32,
    pub duration_minutes: u32,
    pub activity_type: ActivityType,
    pub intensity: Intensity,
    pub description: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}
