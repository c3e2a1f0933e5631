use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use tensi_guide_data::repository::{HealthLogRepository, HealthLogRepositoryTrait, RepositoryError};

use crate::config::AggregatorConfig;
use crate::entities::conversions;
use crate::entities::{
    ActivityLog, BloodPressureCategory, BloodPressureReading, ExerciseLog, FoodLog, HealthSnapshot,
    NewActivityLog, NewBloodPressureReading, NewExerciseLog, NewFoodLog, NewSleepLog,
    PatientProfile, SleepLog,
};
use crate::services::aggregator::HealthAggregator;
use crate::services::behavior_plan::BehaviorChangePlan;
use crate::services::goals::{DailyGoals, DailyProgress};
use crate::services::insights::is_hypertensive_crisis;
use crate::services::score::HealthScore;

/// Patient service errors
#[derive(Debug, Error)]
pub enum PatientServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Stored data could not be read back into domain values
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
}

impl From<RepositoryError> for PatientServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(msg) => PatientServiceError::ValidationError(msg),
            _ => PatientServiceError::RepositoryError(err.to_string()),
        }
    }
}

/// Operations on one patient's logs, profile and derived insights
#[async_trait]
pub trait PatientHealthServiceTrait {
    /// Record a blood pressure reading
    async fn record_reading(&self, patient_id: &str, reading: NewBloodPressureReading)
        -> Result<BloodPressureReading, PatientServiceError>;

    /// Record an activity; its health impact follows from the activity type
    async fn record_activity(&self, patient_id: &str, activity: NewActivityLog)
        -> Result<ActivityLog, PatientServiceError>;

    async fn record_sleep(&self, patient_id: &str, sleep: NewSleepLog)
        -> Result<SleepLog, PatientServiceError>;

    async fn record_exercise(&self, patient_id: &str, exercise: NewExerciseLog)
        -> Result<ExerciseLog, PatientServiceError>;

    async fn record_food(&self, patient_id: &str, food: NewFoodLog)
        -> Result<FoodLog, PatientServiceError>;

    /// Create or replace the patient profile
    async fn save_profile(&self, patient_id: &str, profile: PatientProfile)
        -> Result<PatientProfile, PatientServiceError>;

    async fn get_profile(&self, patient_id: &str) -> Result<Option<PatientProfile>, PatientServiceError>;

    /// Every collection of the patient captured at one instant
    async fn get_snapshot(&self, patient_id: &str)
        -> Result<(HealthSnapshot, Option<PatientProfile>), PatientServiceError>;

    async fn health_score(&self, patient_id: &str, now: DateTime<Utc>)
        -> Result<HealthScore, PatientServiceError>;

    fn classify(&self, systolic: u16, diastolic: u16) -> BloodPressureCategory;

    async fn report(&self, patient_id: &str, now: DateTime<Utc>) -> Result<String, PatientServiceError>;

    async fn behavior_plan(&self, patient_id: &str, now: DateTime<Utc>)
        -> Result<BehaviorChangePlan, PatientServiceError>;

    async fn activity_progress(&self, patient_id: &str, goals: DailyGoals, now: DateTime<Utc>)
        -> Result<DailyProgress, PatientServiceError>;

    /// Check that storage is reachable
    async fn ping(&self) -> Result<(), PatientServiceError>;
}

/// Patient service backed by a health log repository
pub struct PatientHealthService<R: HealthLogRepositoryTrait> {
    repository: R,
    aggregator: HealthAggregator,
}

impl<R: HealthLogRepositoryTrait> PatientHealthService<R> {
    pub fn new(repository: R, config: AggregatorConfig) -> Self {
        Self {
            repository,
            aggregator: HealthAggregator::new(config),
        }
    }

    pub fn aggregator(&self) -> &HealthAggregator {
        &self.aggregator
    }
}

fn require_text(field: &str, value: &str) -> Result<(), PatientServiceError> {
    if value.trim().is_empty() {
        return Err(PatientServiceError::ValidationError(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[async_trait]
impl<R: HealthLogRepositoryTrait + Send + Sync> PatientHealthServiceTrait for PatientHealthService<R> {
    async fn record_reading(&self, patient_id: &str, reading: NewBloodPressureReading)
        -> Result<BloodPressureReading, PatientServiceError>
    {
        if is_hypertensive_crisis(reading.systolic, reading.diastolic) {
            warn!(
                patient_id,
                systolic = reading.systolic,
                diastolic = reading.diastolic,
                "Reading in hypertensive crisis range"
            );
        }

        let request = conversions::convert_to_data_reading_request(&reading, Utc::now());
        let record = self.repository.create_reading(patient_id, request).await?;
        Ok(conversions::convert_to_domain_reading(record))
    }

    async fn record_activity(&self, patient_id: &str, activity: NewActivityLog)
        -> Result<ActivityLog, PatientServiceError>
    {
        let request = conversions::convert_to_data_activity_request(&activity, Utc::now());
        let record = self.repository.create_activity(patient_id, request).await?;
        conversions::convert_to_domain_activity(record).map_err(PatientServiceError::DataIntegrity)
    }

    async fn record_sleep(&self, patient_id: &str, sleep: NewSleepLog)
        -> Result<SleepLog, PatientServiceError>
    {
        let request = conversions::convert_to_data_sleep_request(&sleep, Utc::now());
        let record = self.repository.create_sleep(patient_id, request).await?;
        Ok(conversions::convert_to_domain_sleep(record))
    }

    async fn record_exercise(&self, patient_id: &str, exercise: NewExerciseLog)
        -> Result<ExerciseLog, PatientServiceError>
    {
        require_text("exercise_title", &exercise.exercise_title)?;

        let request = conversions::convert_to_data_exercise_request(&exercise, Utc::now());
        let record = self.repository.create_exercise(patient_id, request).await?;
        conversions::convert_to_domain_exercise(record).map_err(PatientServiceError::DataIntegrity)
    }

    async fn record_food(&self, patient_id: &str, food: NewFoodLog)
        -> Result<FoodLog, PatientServiceError>
    {
        require_text("description", &food.description)?;

        let request = conversions::convert_to_data_food_request(&food, Utc::now());
        let record = self.repository.create_food(patient_id, request).await?;
        Ok(conversions::convert_to_domain_food(record))
    }

    async fn save_profile(&self, patient_id: &str, profile: PatientProfile)
        -> Result<PatientProfile, PatientServiceError>
    {
        require_text("name", &profile.name)?;

        let record = conversions::convert_to_data_profile(&profile, Utc::now());
        let stored = self.repository.upsert_profile(patient_id, record).await?;
        info!(patient_id, "Patient profile saved");
        conversions::convert_to_domain_profile(stored).map_err(PatientServiceError::DataIntegrity)
    }

    async fn get_profile(&self, patient_id: &str) -> Result<Option<PatientProfile>, PatientServiceError> {
        self.repository
            .get_profile(patient_id)
            .await?
            .map(conversions::convert_to_domain_profile)
            .transpose()
            .map_err(PatientServiceError::DataIntegrity)
    }

    async fn get_snapshot(&self, patient_id: &str)
        -> Result<(HealthSnapshot, Option<PatientProfile>), PatientServiceError>
    {
        let stored = self.repository.get_snapshot(patient_id).await?;
        conversions::convert_to_domain_snapshot(stored).map_err(|e| {
            error!(patient_id, error = %e, "Stored logs could not be converted");
            PatientServiceError::DataIntegrity(e)
        })
    }

    async fn health_score(&self, patient_id: &str, now: DateTime<Utc>)
        -> Result<HealthScore, PatientServiceError>
    {
        let (snapshot, _) = self.get_snapshot(patient_id).await?;
        let score = self.aggregator.compute_health_score(&snapshot, now);
        debug!(patient_id, score = score.score, trend = %score.trend, "Health score computed");
        Ok(score)
    }

    fn classify(&self, systolic: u16, diastolic: u16) -> BloodPressureCategory {
        self.aggregator.classify_blood_pressure(systolic, diastolic)
    }

    async fn report(&self, patient_id: &str, now: DateTime<Utc>) -> Result<String, PatientServiceError> {
        let (snapshot, profile) = self.get_snapshot(patient_id).await?;
        Ok(self.aggregator.generate_report(profile.as_ref(), &snapshot, now))
    }

    async fn behavior_plan(&self, patient_id: &str, now: DateTime<Utc>)
        -> Result<BehaviorChangePlan, PatientServiceError>
    {
        let (snapshot, profile) = self.get_snapshot(patient_id).await?;
        Ok(self.aggregator.behavior_plan(profile.as_ref(), &snapshot, now))
    }

    async fn activity_progress(&self, patient_id: &str, goals: DailyGoals, now: DateTime<Utc>)
        -> Result<DailyProgress, PatientServiceError>
    {
        let (snapshot, _) = self.get_snapshot(patient_id).await?;
        Ok(self.aggregator.daily_progress(&snapshot, goals, now))
    }

    async fn ping(&self) -> Result<(), PatientServiceError> {
        self.repository.ping().await.map_err(PatientServiceError::from)
    }
}

/// Create a patient service over a fresh in-memory repository
pub fn create_default_patient_service(config: AggregatorConfig) -> impl PatientHealthServiceTrait + Send + Sync {
    PatientHealthService::new(HealthLogRepository::new(), config)
}
