use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Breathing observed right after an exercise session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Breathing {
    Normal,
    #[serde(alias = "cepat")]
    Fast,
    #[serde(alias = "lambat")]
    Slow,
}

impl Breathing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Breathing::Normal => "normal",
            Breathing::Fast => "fast",
            Breathing::Slow => "slow",
        }
    }
}

impl fmt::Display for Breathing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breathing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Breathing::Normal),
            "fast" | "cepat" => Ok(Breathing::Fast),
            "slow" | "lambat" => Ok(Breathing::Slow),
            _ => Err(format!("Unknown breathing state: {}", s)),
        }
    }
}

/// Perceived difficulty of an exercise session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

/// Domain model for a guided exercise session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ExerciseLog {
    pub id: String,
    pub exercise_title: String,
    pub duration_minutes: u32,
    /// Pulse in bpm measured after the session
    pub pulse: u16,
    pub breathing: Breathing,
    pub difficulty: Difficulty,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Values for recording a new exercise session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExerciseLog {
    pub exercise_title: String,
    pub duration_minutes: u32,
    pub pulse: u16,
    pub breathing: Breathing,
    pub difficulty: Difficulty,
    pub notes: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breathing_accepts_stored_labels() {
        assert_eq!("cepat".parse::<Breathing>().unwrap(), Breathing::Fast);
        assert_eq!("lambat".parse::<Breathing>().unwrap(), Breathing::Slow);
        assert_eq!("Normal".parse::<Breathing>().unwrap(), Breathing::Normal);
        assert!("ragged".parse::<Breathing>().is_err());
    }

    #[test]
    fn test_breathing_deserializes_aliases() {
        let fast: Breathing = serde_json::from_str("\"cepat\"").unwrap();
        assert_eq!(fast, Breathing::Fast);
        assert_eq!(serde_json::to_string(&fast).unwrap(), "\"fast\"");
    }
}
