use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use tensi_guide_domain::entities::{EmergencyContact, Gender, MedicalHistory, PatientProfile};

use super::common::ErrorResponse;
use super::logs::IntoDomain;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct EmergencyContactRequest {
    #[validate(length(max = 200))]
    pub name: String,
    #[validate(length(max = 100))]
    pub relationship: String,
    #[validate(length(max = 50))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MedicalHistoryRequest {
    #[serde(default)]
    pub has_hypertension: bool,
    #[serde(default)]
    pub has_diabetes: bool,
    #[serde(default)]
    pub has_heart_disease: bool,
    #[serde(default)]
    pub has_kidney_disease: bool,
    #[serde(default)]
    pub other_conditions: Vec<String>,
}

/// Request payload for creating or replacing a patient profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveProfileRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1 to 200 characters"))]
    pub name: String,

    pub birth_date: NaiveDate,

    /// male or female
    pub gender: String,

    /// Height in centimetres
    #[validate(range(min = 40.0, max = 260.0, message = "Height must be between 40 and 260 cm"))]
    pub height: f64,

    /// Weight in kilograms
    #[validate(range(min = 2.0, max = 400.0, message = "Weight must be between 2 and 400 kg"))]
    pub weight: f64,

    #[validate(length(max = 50))]
    #[serde(default)]
    pub phone_number: String,

    #[validate(length(max = 500))]
    #[serde(default)]
    pub address: String,

    #[validate]
    #[serde(default)]
    pub emergency_contact: EmergencyContactRequest,

    #[serde(default)]
    pub medical_history: MedicalHistoryRequest,
}

impl IntoDomain for SaveProfileRequest {
    type Domain = PatientProfile;

    fn into_domain(self) -> Result<Self::Domain, ErrorResponse> {
        let gender: Gender = self
            .gender
            .parse()
            .map_err(|msg: String| ErrorResponse::validation_error(&format!("gender: {}", msg), None))?;

        Ok(PatientProfile {
            name: self.name,
            birth_date: self.birth_date,
            gender,
            height_cm: self.height,
            weight_kg: self.weight,
            phone_number: self.phone_number,
            address: self.address,
            emergency_contact: EmergencyContact {
                name: self.emergency_contact.name,
                relationship: self.emergency_contact.relationship,
                phone_number: self.emergency_contact.phone_number,
            },
            medical_history: MedicalHistory {
                has_hypertension: self.medical_history.has_hypertension,
                has_diabetes: self.medical_history.has_diabetes,
                has_heart_disease: self.medical_history.has_heart_disease,
                has_kidney_disease: self.medical_history.has_kidney_disease,
                other_conditions: self.medical_history.other_conditions,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SaveProfileRequest {
        SaveProfileRequest {
            name: "Budi Santoso".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1970, 6, 1).unwrap(),
            gender: "male".to_string(),
            height: 170.0,
            weight: 72.5,
            phone_number: String::new(),
            address: String::new(),
            emergency_contact: EmergencyContactRequest::default(),
            medical_history: MedicalHistoryRequest::default(),
        }
    }

    #[test]
    fn test_valid_profile() {
        let profile = request().validated().unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.height_cm, 170.0);
    }

    #[test]
    fn test_invalid_profile_fields() {
        let blank_name = SaveProfileRequest { name: String::new(), ..request() };
        assert!(blank_name.validated().is_err());

        let bad_gender = SaveProfileRequest { gender: "unknown".to_string(), ..request() };
        assert!(bad_gender.validated().unwrap_err().message.contains("gender"));

        let bad_height = SaveProfileRequest { height: 5.0, ..request() };
        assert!(bad_height.validated().is_err());
    }
}
