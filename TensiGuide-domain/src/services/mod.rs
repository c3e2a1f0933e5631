// Domain services
// Scoring, classification and reporting are pure; the patient service
// fetches snapshots from storage and hands them to the aggregator.

pub mod aggregator;
pub mod behavior_plan;
pub mod goals;
pub mod insights;
pub mod patient;
pub mod report;
pub mod score;

// Re-export service traits and factory functions
pub use aggregator::HealthAggregator;
pub use behavior_plan::{BehaviorChangePlan, FocusArea, Obstacle};
pub use goals::{DailyGoals, DailyProgress};
pub use patient::{
    create_default_patient_service, PatientHealthService, PatientHealthServiceTrait,
    PatientServiceError,
};
pub use score::{FactorScore, HealthScore, HealthTrend, ScoreFactor};
