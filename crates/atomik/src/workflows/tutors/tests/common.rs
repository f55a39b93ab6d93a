use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::tutors::domain::{
    TutorDocument, TutorFilter, TutorId, TutorProfile, TutorRecord,
};
use crate::workflows::tutors::repository::TutorRepository;
use crate::workflows::tutors::TutorDirectoryService;
use crate::workflows::RepositoryError;

pub(super) fn profile(name: &str, grades: &[u8], subjects: &[&str]) -> TutorProfile {
    TutorProfile {
        name: name.to_string(),
        grade_levels: grades.iter().copied().collect::<BTreeSet<_>>(),
        subjects: subjects.iter().map(|subject| subject.to_string()).collect(),
        bio: Some("Junior, tutoring since freshman year".to_string()),
        availability: Some("Weeknights after 6pm".to_string()),
        rating: Some(4.6),
    }
}

pub(super) fn build_service() -> (TutorDirectoryService<MemoryTutors>, Arc<MemoryTutors>) {
    let repository = Arc::new(MemoryTutors::default());
    let service = TutorDirectoryService::new(repository.clone());
    (service, repository)
}

pub(super) fn seeded_service() -> TutorDirectoryService<MemoryTutors> {
    let (service, _) = build_service();
    for profile in [
        profile("Ada", &[9, 10], &["Algebra", "Geometry"]),
        profile("Ben", &[11, 12], &["Chemistry"]),
        profile("Cleo", &[10, 11], &["Algebra", "Chemistry"]),
    ] {
        service.register(profile).expect("seed tutor");
    }
    service
}

#[derive(Default, Clone)]
pub(super) struct MemoryTutors {
    records: Arc<Mutex<Vec<TutorRecord>>>,
}

impl MemoryTutors {
    pub(super) fn stored(&self) -> Vec<TutorRecord> {
        self.records.lock().expect("repository mutex poisoned").clone()
    }
}

impl TutorRepository for MemoryTutors {
    fn insert(&self, document: TutorDocument) -> Result<TutorId, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let id = TutorId(format!("tutor-{:06}", guard.len() + 1));
        guard.push(TutorRecord::from_document(id.clone(), document));
        Ok(id)
    }

    fn list(
        &self,
        filter: &TutorFilter,
        limit: usize,
    ) -> Result<Vec<TutorRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| filter.matches(&record.profile))
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct OfflineTutors;

impl TutorRepository for OfflineTutors {
    fn insert(&self, _document: TutorDocument) -> Result<TutorId, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(
        &self,
        _filter: &TutorFilter,
        _limit: usize,
    ) -> Result<Vec<TutorRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Accepts `capacity` inserts, then reports the store as unavailable.
pub(super) struct FlakyTutors {
    pub(super) inner: MemoryTutors,
    pub(super) capacity: usize,
}

impl TutorRepository for FlakyTutors {
    fn insert(&self, document: TutorDocument) -> Result<TutorId, RepositoryError> {
        if self.inner.stored().len() >= self.capacity {
            return Err(RepositoryError::Unavailable("disk full".to_string()));
        }
        self.inner.insert(document)
    }

    fn list(
        &self,
        filter: &TutorFilter,
        limit: usize,
    ) -> Result<Vec<TutorRecord>, RepositoryError> {
        self.inner.list(filter, limit)
    }
}

pub(super) fn names(records: &[TutorRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|record| record.profile.name.as_str())
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
