// Storage models for patient logs and profiles
pub mod blood_pressure;
pub mod logs;
pub mod profile;

use serde::{Deserialize, Serialize};

pub use blood_pressure::{BloodPressureRecord, CreateBloodPressureRecord};
pub use logs::{
    ActivityRecord, CreateActivityRecord, CreateExerciseRecord, CreateFoodRecord,
    CreateSleepRecord, ExerciseRecord, FoodRecord, SleepRecord,
};
pub use profile::{EmergencyContactRecord, MedicalHistoryRecord, PatientProfileRecord};

/// Every collection stored for one patient, copied out at a single instant.
///
/// Records are kept in insertion order; no sorting is applied here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientLogsSnapshot {
    pub readings: Vec<BloodPressureRecord>,
    pub activity: Vec<ActivityRecord>,
    pub sleep: Vec<SleepRecord>,
    pub exercise: Vec<ExerciseRecord>,
    pub food: Vec<FoodRecord>,
    pub profile: Option<PatientProfileRecord>,
}

impl PatientLogsSnapshot {
    /// Total number of log entries across all collections
    pub fn entry_count(&self) -> usize {
        self.readings.len()
            + self.activity.len()
            + self.sleep.len()
            + self.exercise.len()
            + self.food.len()
    }
}
