use crate::infra::{AppState, InMemoryCandidateRepository, InMemoryTutorRepository};
use atomik::workflows::aptitude::{aptitude_router, AptitudeService, CANDIDATE_COLLECTION};
use atomik::workflows::tutors::{tutor_router, TutorDirectoryService, TUTOR_COLLECTION};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) type TutorService = TutorDirectoryService<InMemoryTutorRepository>;
pub(crate) type CandidateService = AptitudeService<InMemoryCandidateRepository>;

/// Merge the workflow routers with the service-level endpoints.
pub(crate) fn with_service_routes(
    tutors: Arc<TutorService>,
    aptitude: Arc<CandidateService>,
) -> Router {
    tutor_router(tutors)
        .merge(aptitude_router(aptitude))
        .route("/", get(root))
        .route("/schema", get(schema))
        .route("/test", get(store_check))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Atomik backend running" }))
}

pub(crate) async fn schema() -> Json<serde_json::Value> {
    Json(json!({ "schemas": [TUTOR_COLLECTION, CANDIDATE_COLLECTION] }))
}

pub(crate) async fn store_check(Extension(state): Extension<AppState>) -> impl IntoResponse {
    Json(state.store.diagnostics())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
