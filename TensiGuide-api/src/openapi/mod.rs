use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Log endpoints
        crate::api::handlers::patient::create_reading,
        crate::api::handlers::patient::create_activity,
        crate::api::handlers::patient::create_sleep,
        crate::api::handlers::patient::create_exercise,
        crate::api::handlers::patient::create_food,

        // Profile endpoints
        crate::api::handlers::patient::get_profile,
        crate::api::handlers::patient::put_profile,

        // Insight endpoints
        crate::api::handlers::insights::get_health_score,
        crate::api::handlers::insights::get_report,
        crate::api::handlers::insights::get_behavior_plan,
        crate::api::handlers::insights::get_activity_progress,
        crate::api::handlers::insights::classify_blood_pressure
    ),
    components(
        schemas(
            // Request and response payloads
            crate::entities::common::ErrorResponse,
            crate::entities::logs::CreateReadingRequest,
            crate::entities::logs::CreateActivityRequest,
            crate::entities::logs::CreateSleepRequest,
            crate::entities::logs::CreateExerciseRequest,
            crate::entities::logs::CreateFoodRequest,
            crate::entities::profile::SaveProfileRequest,
            crate::entities::profile::EmergencyContactRequest,
            crate::entities::profile::MedicalHistoryRequest,
            crate::entities::insights::ClassificationResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentHealthStatus,

            // Domain records
            tensi_guide_domain::entities::BloodPressureReading,
            tensi_guide_domain::entities::BloodPressureCategory,
            tensi_guide_domain::entities::ActivityLog,
            tensi_guide_domain::entities::ActivityType,
            tensi_guide_domain::entities::HealthImpact,
            tensi_guide_domain::entities::Intensity,
            tensi_guide_domain::entities::SleepLog,
            tensi_guide_domain::entities::ExerciseLog,
            tensi_guide_domain::entities::Breathing,
            tensi_guide_domain::entities::Difficulty,
            tensi_guide_domain::entities::FoodLog,
            tensi_guide_domain::entities::PatientProfile,
            tensi_guide_domain::entities::Gender,
            tensi_guide_domain::entities::EmergencyContact,
            tensi_guide_domain::entities::MedicalHistory,

            // Derived insights
            tensi_guide_domain::services::HealthScore,
            tensi_guide_domain::services::HealthTrend,
            tensi_guide_domain::services::FactorScore,
            tensi_guide_domain::services::ScoreFactor,
            tensi_guide_domain::services::BehaviorChangePlan,
            tensi_guide_domain::services::FocusArea,
            tensi_guide_domain::services::Obstacle,
            tensi_guide_domain::services::DailyGoals,
            tensi_guide_domain::services::DailyProgress
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "logs", description = "Blood pressure, activity, sleep, exercise and food logs"),
        (name = "profile", description = "Patient profile management"),
        (name = "insights", description = "Health score, report, behavior plan and classification")
    ),
    info(
        title = "TensiGuide API",
        version = "0.1.0",
        description = "Hypertension self-management API: health logs, scoring and reports",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
