use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::domain::{TutorFilter, TutorProfile};
use super::repository::TutorRepository;
use super::service::{TutorDirectoryService, TutorServiceError};
use crate::workflows::clamp_limit;

/// Query string accepted by the tutor search.
#[derive(Debug, Default, Deserialize)]
pub struct TutorQuery {
    pub grade: Option<i64>,
    pub subject: Option<String>,
    pub limit: Option<usize>,
}

pub fn tutor_router<R>(service: Arc<TutorDirectoryService<R>>) -> Router
where
    R: TutorRepository + 'static,
{
    Router::new()
        .route(
            "/tutors",
            post(register_handler::<R>).get(search_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<TutorDirectoryService<R>>>,
    Json(profile): Json<TutorProfile>,
) -> Response
where
    R: TutorRepository + 'static,
{
    match service.register(profile) {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "id": id }))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn search_handler<R>(
    State(service): State<Arc<TutorDirectoryService<R>>>,
    Query(query): Query<TutorQuery>,
) -> Response
where
    R: TutorRepository + 'static,
{
    let TutorQuery {
        grade,
        subject,
        limit,
    } = query;
    let filter = TutorFilter { grade, subject };

    match service.search(&filter, clamp_limit(limit)) {
        Ok(tutors) => (StatusCode::OK, Json(json!({ "tutors": tutors }))).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: TutorServiceError) -> Response {
    let status = match &err {
        TutorServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TutorServiceError::Repository(_) => {
            error!(error = %err, "tutor store unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
