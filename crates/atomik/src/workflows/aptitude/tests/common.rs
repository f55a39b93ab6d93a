use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::AptitudeConfig;
use crate::workflows::aptitude::domain::{
    AptitudeSubmission, CandidateDocument, CandidateFilter, CandidateId, CandidateRecord,
};
use crate::workflows::aptitude::repository::CandidateRepository;
use crate::workflows::aptitude::{aptitude_router, AptitudeService};
use crate::workflows::RepositoryError;

pub(super) const KEY: [i64; 5] = [2, 1, 3, 2, 4];

pub(super) fn submission(answers: Vec<i64>) -> AptitudeSubmission {
    AptitudeSubmission {
        name: "Maya Okafor".to_string(),
        email: "maya.okafor@example.com".to_string(),
        grade: 11,
        subjects: vec!["Algebra".to_string(), "Chemistry".to_string()],
        motivation: Some("I like explaining things twice".to_string()),
        answers,
    }
}

pub(super) fn build_service() -> (AptitudeService<MemoryCandidates>, Arc<MemoryCandidates>) {
    let repository = Arc::new(MemoryCandidates::default());
    let service = AptitudeService::new(repository.clone(), AptitudeConfig::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryCandidates {
    records: Arc<Mutex<Vec<CandidateRecord>>>,
}

impl MemoryCandidates {
    pub(super) fn stored(&self) -> Vec<CandidateRecord> {
        self.records.lock().expect("repository mutex poisoned").clone()
    }
}

impl CandidateRepository for MemoryCandidates {
    fn insert(&self, document: CandidateDocument) -> Result<CandidateId, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let id = CandidateId(format!("candidate-{:06}", guard.len() + 1));
        guard.push(CandidateRecord::from_document(id.clone(), document));
        Ok(id)
    }

    fn list(
        &self,
        filter: &CandidateFilter,
        limit: usize,
    ) -> Result<Vec<CandidateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| filter.matches(&record.candidate))
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct OfflineCandidates;

impl CandidateRepository for OfflineCandidates {
    fn insert(&self, _document: CandidateDocument) -> Result<CandidateId, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(
        &self,
        _filter: &CandidateFilter,
        _limit: usize,
    ) -> Result<Vec<CandidateRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn router_with_service(service: AptitudeService<MemoryCandidates>) -> axum::Router {
    aptitude_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
