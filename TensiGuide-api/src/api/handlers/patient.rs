use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument};

use tensi_guide_domain::entities::{
    ActivityLog, BloodPressureReading, ExerciseLog, FoodLog, PatientProfile, SleepLog,
};
use tensi_guide_domain::services::PatientHealthServiceTrait;

use crate::entities::common::ErrorResponse;
use crate::entities::logs::{
    CreateActivityRequest, CreateExerciseRequest, CreateFoodRequest, CreateReadingRequest,
    CreateSleepRequest, IntoDomain,
};
use crate::entities::profile::SaveProfileRequest;

/// Service type for dependency injection
pub type PatientService = Arc<dyn PatientHealthServiceTrait + Send + Sync>;

/// Record a blood pressure reading
#[utoipa::path(
    post,
    path = "/api/v1/patients/{patient_id}/readings",
    params(("patient_id" = String, Path, description = "Patient identifier")),
    request_body = CreateReadingRequest,
    responses(
        (status = 201, description = "Reading recorded", body = BloodPressureReading),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "logs"
)]
#[instrument(skip(service, request))]
pub async fn create_reading(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
    Json(request): Json<CreateReadingRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let reading = service.record_reading(&patient_id, request.validated()?).await?;
    info!("Blood pressure reading created with ID: {}", reading.id);
    Ok((StatusCode::CREATED, Json(reading)))
}

/// Record an activity
#[utoipa::path(
    post,
    path = "/api/v1/patients/{patient_id}/activity",
    params(("patient_id" = String, Path, description = "Patient identifier")),
    request_body = CreateActivityRequest,
    responses(
        (status = 201, description = "Activity recorded", body = ActivityLog),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "logs"
)]
#[instrument(skip(service, request))]
pub async fn create_activity(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
    Json(request): Json<CreateActivityRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let activity = service.record_activity(&patient_id, request.validated()?).await?;
    info!("Activity {} recorded as {}", activity.activity_type, activity.health_impact);
    Ok((StatusCode::CREATED, Json(activity)))
}

/// Record a night of sleep
#[utoipa::path(
    post,
    path = "/api/v1/patients/{patient_id}/sleep",
    params(("patient_id" = String, Path, description = "Patient identifier")),
    request_body = CreateSleepRequest,
    responses(
        (status = 201, description = "Sleep recorded", body = SleepLog),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "logs"
)]
#[instrument(skip(service, request))]
pub async fn create_sleep(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
    Json(request): Json<CreateSleepRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let sleep = service.record_sleep(&patient_id, request.validated()?).await?;
    Ok((StatusCode::CREATED, Json(sleep)))
}

/// Record an exercise session
#[utoipa::path(
    post,
    path = "/api/v1/patients/{patient_id}/exercise",
    params(("patient_id" = String, Path, description = "Patient identifier")),
    request_body = CreateExerciseRequest,
    responses(
        (status = 201, description = "Exercise recorded", body = ExerciseLog),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "logs"
)]
#[instrument(skip(service, request))]
pub async fn create_exercise(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
    Json(request): Json<CreateExerciseRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let exercise = service.record_exercise(&patient_id, request.validated()?).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

/// Record a food diary entry
#[utoipa::path(
    post,
    path = "/api/v1/patients/{patient_id}/food",
    params(("patient_id" = String, Path, description = "Patient identifier")),
    request_body = CreateFoodRequest,
    responses(
        (status = 201, description = "Food entry recorded", body = FoodLog),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "logs"
)]
#[instrument(skip(service, request))]
pub async fn create_food(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
    Json(request): Json<CreateFoodRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let food = service.record_food(&patient_id, request.validated()?).await?;
    Ok((StatusCode::CREATED, Json(food)))
}

/// Get the patient profile
#[utoipa::path(
    get,
    path = "/api/v1/patients/{patient_id}/profile",
    params(("patient_id" = String, Path, description = "Patient identifier")),
    responses(
        (status = 200, description = "Profile found", body = PatientProfile),
        (status = 404, description = "No profile recorded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "profile"
)]
#[instrument(skip(service))]
pub async fn get_profile(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    match service.get_profile(&patient_id).await? {
        Some(profile) => Ok(Json(profile)),
        None => {
            info!("No profile recorded for patient {}", patient_id);
            Err(ErrorResponse::not_found("patient profile"))
        }
    }
}

/// Create or replace the patient profile
#[utoipa::path(
    put,
    path = "/api/v1/patients/{patient_id}/profile",
    params(("patient_id" = String, Path, description = "Patient identifier")),
    request_body = SaveProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = PatientProfile),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "profile"
)]
#[instrument(skip(service, request))]
pub async fn put_profile(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
    Json(request): Json<SaveProfileRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let profile = service.save_profile(&patient_id, request.validated()?).await?;
    Ok(Json(profile))
}
