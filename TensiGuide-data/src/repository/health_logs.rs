use tracing::debug;
use uuid::Uuid;
use async_trait::async_trait;

use crate::models::{
    ActivityRecord, BloodPressureRecord, CreateActivityRecord, CreateBloodPressureRecord,
    CreateExerciseRecord, CreateFoodRecord, CreateSleepRecord, ExerciseRecord, FoodRecord,
    PatientLogsSnapshot, PatientProfileRecord, SleepRecord,
};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for per-patient health logs
#[async_trait]
pub trait HealthLogRepositoryTrait {
    /// Store a new blood pressure reading
    async fn create_reading(&self, patient_id: &str, request: CreateBloodPressureRecord) -> Result<BloodPressureRecord, RepositoryError>;

    /// Store a new activity log entry
    async fn create_activity(&self, patient_id: &str, request: CreateActivityRecord) -> Result<ActivityRecord, RepositoryError>;

    /// Store a new sleep log entry
    async fn create_sleep(&self, patient_id: &str, request: CreateSleepRecord) -> Result<SleepRecord, RepositoryError>;

    /// Store a new exercise session
    async fn create_exercise(&self, patient_id: &str, request: CreateExerciseRecord) -> Result<ExerciseRecord, RepositoryError>;

    /// Store a new food diary entry
    async fn create_food(&self, patient_id: &str, request: CreateFoodRecord) -> Result<FoodRecord, RepositoryError>;

    /// Insert or replace the patient profile
    async fn upsert_profile(&self, patient_id: &str, profile: PatientProfileRecord) -> Result<PatientProfileRecord, RepositoryError>;

    /// Get the patient profile, if any
    async fn get_profile(&self, patient_id: &str) -> Result<Option<PatientProfileRecord>, RepositoryError>;

    /// Get every collection of a patient as one consistent snapshot
    async fn get_snapshot(&self, patient_id: &str) -> Result<PatientLogsSnapshot, RepositoryError>;

    /// Check that the backing storage is usable
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Repository for patient health logs backed by shared in-memory storage.
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct HealthLogRepository {
    storage: InMemoryStorage,
}

impl HealthLogRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

fn ensure_patient_id(patient_id: &str) -> Result<(), RepositoryError> {
    if patient_id.trim().is_empty() {
        return Err(RepositoryError::Validation("patient id must not be empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl HealthLogRepositoryTrait for HealthLogRepository {
    async fn create_reading(&self, patient_id: &str, request: CreateBloodPressureRecord) -> Result<BloodPressureRecord, RepositoryError> {
        ensure_patient_id(patient_id)?;

        let reading = BloodPressureRecord {
            id: Uuid::new_v4().to_string(),
            systolic: request.systolic,
            diastolic: request.diastolic,
            pulse: request.pulse,
            notes: request.notes,
            timestamp: request.timestamp,
        };

        debug!("Storing blood pressure reading {} for patient {}", reading.id, patient_id);
        self.storage.store_reading(patient_id, &reading).await
    }

    async fn create_activity(&self, patient_id: &str, request: CreateActivityRecord) -> Result<ActivityRecord, RepositoryError> {
        ensure_patient_id(patient_id)?;

        let activity = ActivityRecord {
            id: Uuid::new_v4().to_string(),
            steps: request.steps,
            duration: request.duration,
            activity_type: request.activity_type,
            health_impact: request.health_impact,
            intensity: request.intensity,
            description: request.description,
            timestamp: request.timestamp,
        };

        debug!("Storing activity {} for patient {}", activity.id, patient_id);
        self.storage.store_activity(patient_id, &activity).await
    }

    async fn create_sleep(&self, patient_id: &str, request: CreateSleepRecord) -> Result<SleepRecord, RepositoryError> {
        ensure_patient_id(patient_id)?;

        let sleep = SleepRecord {
            id: Uuid::new_v4().to_string(),
            duration: request.duration,
            quality: request.quality,
            timestamp: request.timestamp,
        };

        debug!("Storing sleep log {} for patient {}", sleep.id, patient_id);
        self.storage.store_sleep(patient_id, &sleep).await
    }

    async fn create_exercise(&self, patient_id: &str, request: CreateExerciseRecord) -> Result<ExerciseRecord, RepositoryError> {
        ensure_patient_id(patient_id)?;

        let exercise = ExerciseRecord {
            id: Uuid::new_v4().to_string(),
            exercise_title: request.exercise_title,
            duration: request.duration,
            pulse: request.pulse,
            breathing: request.breathing,
            difficulty: request.difficulty,
            notes: request.notes,
            timestamp: request.timestamp,
        };

        debug!("Storing exercise session {} for patient {}", exercise.id, patient_id);
        self.storage.store_exercise(patient_id, &exercise).await
    }

    async fn create_food(&self, patient_id: &str, request: CreateFoodRecord) -> Result<FoodRecord, RepositoryError> {
        ensure_patient_id(patient_id)?;

        let food = FoodRecord {
            id: Uuid::new_v4().to_string(),
            description: request.description,
            timestamp: request.timestamp,
        };

        debug!("Storing food log {} for patient {}", food.id, patient_id);
        self.storage.store_food(patient_id, &food).await
    }

    async fn upsert_profile(&self, patient_id: &str, profile: PatientProfileRecord) -> Result<PatientProfileRecord, RepositoryError> {
        ensure_patient_id(patient_id)?;
        debug!("Saving profile for patient {}", patient_id);
        self.storage.store_profile(patient_id, &profile).await
    }

    async fn get_profile(&self, patient_id: &str) -> Result<Option<PatientProfileRecord>, RepositoryError> {
        ensure_patient_id(patient_id)?;
        self.storage.get_profile(patient_id).await
    }

    async fn get_snapshot(&self, patient_id: &str) -> Result<PatientLogsSnapshot, RepositoryError> {
        ensure_patient_id(patient_id)?;
        let snapshot = self.storage.snapshot(patient_id).await?;
        debug!("Snapshot for patient {} holds {} entries", patient_id, snapshot.entry_count());
        Ok(snapshot)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        let patients = self.storage.patient_count().await?;
        debug!("Storage reachable, {} patients tracked", patients);
        Ok(())
    }
}
