use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};
use serde_json::json;
use tracing::error;

use super::domain::{AptitudeSubmission, CandidateFilter, CandidateStatus};
use super::repository::CandidateRepository;
use super::service::{AptitudeService, AptitudeServiceError};
use crate::workflows::{clamp_limit, RepositoryError};

/// Query string accepted by the candidate listing.
#[derive(Debug, Default, Deserialize)]
pub struct CandidateQuery {
    #[serde(default, deserialize_with = "blank_status_as_none")]
    pub status: Option<CandidateStatus>,
    pub limit: Option<usize>,
}

/// An empty `status=` means no status filter.
fn blank_status_as_none<'de, D>(deserializer: D) -> Result<Option<CandidateStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let value: serde::de::value::StrDeserializer<'_, D::Error> = value.into_deserializer();
            CandidateStatus::deserialize(value).map(Some)
        }
    }
}

/// Router exposing aptitude submission and candidate review endpoints.
pub fn aptitude_router<R>(service: Arc<AptitudeService<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route("/aptitude/submit", post(submit_handler::<R>))
        .route("/aptitude/candidates", get(candidates_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AptitudeService<R>>>,
    Json(submission): Json<AptitudeSubmission>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.submit(submission) {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn candidates_handler<R>(
    State(service): State<Arc<AptitudeService<R>>>,
    Query(query): Query<CandidateQuery>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let filter = CandidateFilter {
        status: query.status,
    };

    match service.candidates(&filter, clamp_limit(query.limit)) {
        Ok(candidates) => (StatusCode::OK, Json(json!({ "candidates": candidates }))).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AptitudeServiceError) -> Response {
    let status = match &err {
        AptitudeServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AptitudeServiceError::Repository(RepositoryError::Unavailable(_)) => {
            error!(error = %err, "candidate store unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
