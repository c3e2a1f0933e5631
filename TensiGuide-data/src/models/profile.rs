use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

/// Storage model for a patient profile. At most one exists per patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfileRecord {
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    /// Height in centimetres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    pub phone_number: String,
    pub address: String,
    pub emergency_contact: EmergencyContactRecord,
    pub medical_history: MedicalHistoryRecord,
    /// Last time the profile was written
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmergencyContactRecord {
    pub name: String,
    pub relationship: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicalHistoryRecord {
    pub has_hypertension: bool,
    pub has_diabetes: bool,
    pub has_heart_disease: bool,
    pub has_kidney_disease: bool,
    pub other_conditions: Vec<String>,
}
