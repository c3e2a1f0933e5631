use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use tensi_guide_domain::config::AggregatorConfig;
use tensi_guide_domain::services::create_default_patient_service;

use crate::api::handlers::{health, insights, patient, PatientService};
use crate::openapi::configure_swagger_routes;

/// Create the application router over a fresh in-memory patient service
pub fn create_app(config: AggregatorConfig) -> Router {
    debug!(?config, "Creating application router");
    let service: PatientService = Arc::new(create_default_patient_service(config));
    create_app_with_service(service)
}

/// Create the application router around an existing patient service
pub fn create_app_with_service(service: PatientService) -> Router {
    let health_service = health::create_health_service(service.clone());

    let patient_routes = Router::new()
        // Define specific routes before parametrized routes to avoid conflicts
        .route("/activity/progress", get(insights::get_activity_progress))
        .route("/readings", post(patient::create_reading))
        .route("/activity", post(patient::create_activity))
        .route("/sleep", post(patient::create_sleep))
        .route("/exercise", post(patient::create_exercise))
        .route("/food", post(patient::create_food))
        .route("/profile", get(patient::get_profile).put(patient::put_profile))
        .route("/score", get(insights::get_health_score))
        .route("/report", get(insights::get_report))
        .route("/behavior-plan", get(insights::get_behavior_plan));

    let api_routes = Router::new()
        .route("/bloodpressure/classify", get(insights::classify_blood_pressure))
        .nest("/patients/:patient_id", patient_routes);

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service));

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(service);

    debug!("API routes nested");

    let app = add_swagger_ui(app);

    health::initialize_server_start_time();

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
