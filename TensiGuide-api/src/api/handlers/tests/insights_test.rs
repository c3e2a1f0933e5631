use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value;
use tower::ServiceExt;

use tensi_guide_domain::config::AggregatorConfig;
use tensi_guide_domain::entities::NewBloodPressureReading;
use tensi_guide_domain::services::{
    create_default_patient_service, report::SECTION_HEADERS, PatientHealthServiceTrait,
};
use tensi_guide_domain::testing::sample_profile;

use crate::api::handlers::PatientService;
use crate::api::routes::create_app_with_service;

fn service() -> PatientService {
    Arc::new(create_default_patient_service(AggregatorConfig::default()))
}

async fn seed_reading(service: &PatientService, systolic: u16, diastolic: u16, hours_ago: i64) {
    service
        .record_reading(
            "p-1",
            NewBloodPressureReading {
                systolic,
                diastolic,
                pulse: 70,
                notes: None,
                timestamp: Some(Utc::now() - Duration::hours(hours_ago)),
            },
        )
        .await
        .unwrap();
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn test_score_for_patient_without_logs() {
    let (status, _, body) = get(create_app_with_service(service()), "/api/v1/patients/p-1/score").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["score"], 0);
    assert_eq!(json["trend"], "stable");
    assert_eq!(json["factors"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_score_uses_recorded_readings() {
    let service = service();
    seed_reading(&service, 115, 75, 1).await;

    let (status, _, body) = get(create_app_with_service(service), "/api/v1/patients/p-1/score").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["score"], 100);
    assert_eq!(json["factors"][0]["factor"], "blood_pressure");
}

#[tokio::test]
async fn test_report_is_plain_text() {
    let service = service();
    seed_reading(&service, 190, 100, 2).await;

    let (status, content_type, body) =
        get(create_app_with_service(service), "/api/v1/patients/p-1/report").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    let text = String::from_utf8(body).unwrap();
    for header in SECTION_HEADERS {
        assert!(text.contains(header), "missing section {}", header);
    }
    assert!(text.contains("190/100"));
}

#[tokio::test]
async fn test_report_includes_saved_profile() {
    let service = service();
    service.save_profile("p-1", sample_profile()).await.unwrap();

    let (status, _, body) =
        get(create_app_with_service(service), "/api/v1/patients/p-1/report").await;

    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("Siti Rahma"));
    assert!(text.contains("Budi Santoso"));
}

#[tokio::test]
async fn test_behavior_plan_lists_focus_areas() {
    let service = service();
    seed_reading(&service, 150, 95, 3).await;

    let (status, _, body) =
        get(create_app_with_service(service), "/api/v1/patients/p-1/behavior-plan").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(!json["focus_areas"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_activity_progress_rejects_invalid_goal() {
    let (status, _, body) = get(
        create_app_with_service(service()),
        "/api/v1/patients/p-1/activity/progress?step_goal=0",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_activity_progress_defaults() {
    let (status, _, body) = get(
        create_app_with_service(service()),
        "/api/v1/patients/p-1/activity/progress",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["steps"], 0);
    assert_eq!(json["goals"]["step_goal"], 10000);
}

#[tokio::test]
async fn test_classify_reading() {
    let app = create_app_with_service(service());
    let (status, _, body) = get(app, "/api/v1/bloodpressure/classify?systolic=185&diastolic=100").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["category"], "hypertensive_crisis");
    assert_eq!(json["label"], "Hypertensive Crisis");
}

#[tokio::test]
async fn test_classify_requires_both_values() {
    let app = create_app_with_service(service());
    let (status, _, _) = get(app, "/api/v1/bloodpressure/classify?systolic=120").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
