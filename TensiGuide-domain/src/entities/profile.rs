use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDate};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Person to call in an emergency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone_number: String,
}

/// Known conditions relevant to hypertension management
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MedicalHistory {
    pub has_hypertension: bool,
    pub has_diabetes: bool,
    pub has_heart_disease: bool,
    pub has_kidney_disease: bool,
    #[serde(default)]
    pub other_conditions: Vec<String>,
}

/// Patient identity and medical background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PatientProfile {
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    pub phone_number: String,
    pub address: String,
    pub emergency_contact: EmergencyContact,
    pub medical_history: MedicalHistory,
}

impl PatientProfile {
    /// Whole years of age on `today`, one less if the birthday has not yet
    /// occurred this year
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.birth_date.year();
        if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }

    /// Body mass index, or `None` when height or weight is missing
    pub fn bmi(&self) -> Option<f64> {
        if self.height_cm <= 0.0 || self.weight_kg <= 0.0 {
            return None;
        }
        let height_m = self.height_cm / 100.0;
        Some(self.weight_kg / (height_m * height_m))
    }
}

/// WHO body mass index bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_born(birth_date: NaiveDate) -> PatientProfile {
        PatientProfile {
            name: "Budi Santoso".to_string(),
            birth_date,
            gender: Gender::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            phone_number: "081234567890".to_string(),
            address: "Jl. Kenanga 12".to_string(),
            emergency_contact: EmergencyContact::default(),
            medical_history: MedicalHistory::default(),
        }
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let profile = profile_born(NaiveDate::from_ymd_opt(1970, 10, 20).unwrap());

        assert_eq!(profile.age_on(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()), 55);
        assert_eq!(profile.age_on(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()), 56);
        assert_eq!(profile.age_on(NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()), 56);
    }

    #[test]
    fn test_leap_day_birthday() {
        let profile = profile_born(NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());

        assert_eq!(profile.age_on(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()), 24);
        assert_eq!(profile.age_on(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()), 25);
    }

    #[test]
    fn test_bmi_and_category() {
        let profile = profile_born(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        let bmi = profile.bmi().unwrap();

        assert!((bmi - 24.22).abs() < 0.01);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_missing_height() {
        let mut profile = profile_born(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        profile.height_cm = 0.0;
        assert!(profile.bmi().is_none());
    }
}
