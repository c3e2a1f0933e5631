use axum::{
    extract::{Json, Path, Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{info, instrument, warn};
use validator::Validate;

use tensi_guide_domain::entities::BloodPressureCategory;
use tensi_guide_domain::services::{BehaviorChangePlan, DailyProgress, HealthScore};

use super::patient::PatientService;
use crate::entities::common::ErrorResponse;
use crate::entities::insights::{ClassificationResponse, ClassifyQuery, ProgressQuery};

/// Composite health score and trend for a patient
#[utoipa::path(
    get,
    path = "/api/v1/patients/{patient_id}/score",
    params(("patient_id" = String, Path, description = "Patient identifier")),
    responses(
        (status = 200, description = "Health score computed", body = HealthScore),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "insights"
)]
#[instrument(skip(service))]
pub async fn get_health_score(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let score = service.health_score(&patient_id, Utc::now()).await?;
    info!("Health score for {}: {} ({})", patient_id, score.score, score.trend);
    Ok(Json(score))
}

/// Plain-text health report for sharing with a clinician
#[utoipa::path(
    get,
    path = "/api/v1/patients/{patient_id}/report",
    params(("patient_id" = String, Path, description = "Patient identifier")),
    responses(
        (status = 200, description = "Report generated", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "insights"
)]
#[instrument(skip(service))]
pub async fn get_report(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let report = service.report(&patient_id, Utc::now()).await?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], report))
}

/// Rule-based behavior change plan
#[utoipa::path(
    get,
    path = "/api/v1/patients/{patient_id}/behavior-plan",
    params(("patient_id" = String, Path, description = "Patient identifier")),
    responses(
        (status = 200, description = "Plan generated", body = BehaviorChangePlan),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "insights"
)]
#[instrument(skip(service))]
pub async fn get_behavior_plan(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let plan = service.behavior_plan(&patient_id, Utc::now()).await?;
    Ok(Json(plan))
}

/// Today's steps and activity minutes against the daily goals
#[utoipa::path(
    get,
    path = "/api/v1/patients/{patient_id}/activity/progress",
    params(
        ("patient_id" = String, Path, description = "Patient identifier"),
        ProgressQuery
    ),
    responses(
        (status = 200, description = "Progress computed", body = DailyProgress),
        (status = 400, description = "Invalid goals", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "insights"
)]
#[instrument(skip(service))]
pub async fn get_activity_progress(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
    Query(query): Query<ProgressQuery>,
) -> Result<impl IntoResponse, ErrorResponse> {
    query.validate().map_err(|e| ErrorResponse::from_validation(&e))?;
    let progress = service
        .activity_progress(&patient_id, query.goals(), Utc::now())
        .await?;
    Ok(Json(progress))
}

/// Classify a single blood pressure reading
#[utoipa::path(
    get,
    path = "/api/v1/bloodpressure/classify",
    params(ClassifyQuery),
    responses(
        (status = 200, description = "Reading classified", body = ClassificationResponse),
        (status = 400, description = "Missing or invalid values"),
    ),
    tag = "insights"
)]
#[instrument(skip(service))]
pub async fn classify_blood_pressure(
    State(service): State<PatientService>,
    Query(query): Query<ClassifyQuery>,
) -> impl IntoResponse {
    let category = service.classify(query.systolic, query.diastolic);
    if category == BloodPressureCategory::HypertensiveCrisis {
        warn!("Classified {}/{} as hypertensive crisis", query.systolic, query.diastolic);
    }

    Json(ClassificationResponse {
        systolic: query.systolic,
        diastolic: query.diastolic,
        category,
        label: category.label().to_string(),
    })
}
