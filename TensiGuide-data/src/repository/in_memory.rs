use std::sync::{Arc, Mutex};
use std::collections::HashMap;

use crate::models::{
    ActivityRecord, BloodPressureRecord, ExerciseRecord, FoodRecord, PatientLogsSnapshot,
    PatientProfileRecord, SleepRecord,
};
use super::errors::RepositoryError;

/// In-memory storage for patient logs, keyed by patient id
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// All collections of every patient behind one lock, so a snapshot never
    /// observes a half-applied write
    patients: Arc<Mutex<HashMap<String, PatientLogsSnapshot>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            patients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Apply a mutation to one patient's collections, creating them on first use
    fn with_patient<T>(
        &self,
        patient_id: &str,
        apply: impl FnOnce(&mut PatientLogsSnapshot) -> T,
    ) -> Result<T, RepositoryError> {
        let mut store = self.patients.lock()?;
        let logs = store.entry(patient_id.to_string()).or_default();
        Ok(apply(logs))
    }

    /// Store a blood pressure reading
    pub async fn store_reading(&self, patient_id: &str, reading: &BloodPressureRecord) -> Result<BloodPressureRecord, RepositoryError> {
        self.with_patient(patient_id, |logs| logs.readings.push(reading.clone()))?;
        Ok(reading.clone())
    }

    /// Store an activity log entry
    pub async fn store_activity(&self, patient_id: &str, activity: &ActivityRecord) -> Result<ActivityRecord, RepositoryError> {
        self.with_patient(patient_id, |logs| logs.activity.push(activity.clone()))?;
        Ok(activity.clone())
    }

    /// Store a sleep log entry
    pub async fn store_sleep(&self, patient_id: &str, sleep: &SleepRecord) -> Result<SleepRecord, RepositoryError> {
        self.with_patient(patient_id, |logs| logs.sleep.push(sleep.clone()))?;
        Ok(sleep.clone())
    }

    /// Store an exercise session
    pub async fn store_exercise(&self, patient_id: &str, exercise: &ExerciseRecord) -> Result<ExerciseRecord, RepositoryError> {
        self.with_patient(patient_id, |logs| logs.exercise.push(exercise.clone()))?;
        Ok(exercise.clone())
    }

    /// Store a food diary entry
    pub async fn store_food(&self, patient_id: &str, food: &FoodRecord) -> Result<FoodRecord, RepositoryError> {
        self.with_patient(patient_id, |logs| logs.food.push(food.clone()))?;
        Ok(food.clone())
    }

    /// Insert or replace the profile of a patient
    pub async fn store_profile(&self, patient_id: &str, profile: &PatientProfileRecord) -> Result<PatientProfileRecord, RepositoryError> {
        self.with_patient(patient_id, |logs| logs.profile = Some(profile.clone()))?;
        Ok(profile.clone())
    }

    /// Get the profile of a patient, if one was saved
    pub async fn get_profile(&self, patient_id: &str) -> Result<Option<PatientProfileRecord>, RepositoryError> {
        let store = self.patients.lock()?;
        Ok(store.get(patient_id).and_then(|logs| logs.profile.clone()))
    }

    /// Copy out every collection of a patient under a single lock acquisition.
    /// Unknown patients yield an empty snapshot.
    pub async fn snapshot(&self, patient_id: &str) -> Result<PatientLogsSnapshot, RepositoryError> {
        let store = self.patients.lock()?;
        Ok(store.get(patient_id).cloned().unwrap_or_default())
    }

    /// Number of patients with at least one stored record or profile
    pub async fn patient_count(&self) -> Result<usize, RepositoryError> {
        let store = self.patients.lock()?;
        Ok(store.len())
    }
}
