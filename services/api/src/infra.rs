use atomik::workflows::aptitude::{
    CandidateDocument, CandidateFilter, CandidateId, CandidateRecord, CandidateRepository,
    CANDIDATE_COLLECTION,
};
use atomik::workflows::tutors::{
    TutorDocument, TutorFilter, TutorId, TutorRecord, TutorRepository, TUTOR_COLLECTION,
};
use atomik::workflows::RepositoryError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) store: Arc<InMemoryStore>,
}

/// Insertion-ordered document collection with store-generated identifiers.
pub(crate) struct MemoryCollection<T> {
    name: &'static str,
    id_prefix: &'static str,
    sequence: AtomicU64,
    documents: Mutex<Vec<(String, T)>>,
}

impl<T: Clone> MemoryCollection<T> {
    pub(crate) fn new(name: &'static str, id_prefix: &'static str) -> Self {
        Self {
            name,
            id_prefix,
            sequence: AtomicU64::new(1),
            documents: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn insert(&self, document: T) -> Result<String, RepositoryError> {
        let mut guard = self.lock()?;
        let id = format!(
            "{}-{:06}",
            self.id_prefix,
            self.sequence.fetch_add(1, Ordering::Relaxed)
        );
        guard.push((id.clone(), document));
        Ok(id)
    }

    pub(crate) fn find<F>(
        &self,
        matches: F,
        limit: usize,
    ) -> Result<Vec<(String, T)>, RepositoryError>
    where
        F: Fn(&T) -> bool,
    {
        let guard = self.lock()?;
        Ok(guard
            .iter()
            .filter(|(_, document)| matches(document))
            .take(limit)
            .cloned()
            .collect())
    }

    pub(crate) fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<(String, T)>>, RepositoryError> {
        self.documents
            .lock()
            .map_err(|_| RepositoryError::Unavailable(format!("{} lock poisoned", self.name)))
    }
}

pub(crate) struct InMemoryTutorRepository {
    collection: MemoryCollection<TutorDocument>,
}

impl Default for InMemoryTutorRepository {
    fn default() -> Self {
        Self {
            collection: MemoryCollection::new(TUTOR_COLLECTION, "tutor"),
        }
    }
}

impl TutorRepository for InMemoryTutorRepository {
    fn insert(&self, document: TutorDocument) -> Result<TutorId, RepositoryError> {
        self.collection.insert(document).map(TutorId)
    }

    fn list(
        &self,
        filter: &TutorFilter,
        limit: usize,
    ) -> Result<Vec<TutorRecord>, RepositoryError> {
        let found = self
            .collection
            .find(|document| filter.matches(&document.profile), limit)?;
        Ok(found
            .into_iter()
            .map(|(id, document)| TutorRecord::from_document(TutorId(id), document))
            .collect())
    }
}

pub(crate) struct InMemoryCandidateRepository {
    collection: MemoryCollection<CandidateDocument>,
}

impl Default for InMemoryCandidateRepository {
    fn default() -> Self {
        Self {
            collection: MemoryCollection::new(CANDIDATE_COLLECTION, "candidate"),
        }
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn insert(&self, document: CandidateDocument) -> Result<CandidateId, RepositoryError> {
        self.collection.insert(document).map(CandidateId)
    }

    fn list(
        &self,
        filter: &CandidateFilter,
        limit: usize,
    ) -> Result<Vec<CandidateRecord>, RepositoryError> {
        let found = self
            .collection
            .find(|document| filter.matches(&document.candidate), limit)?;
        Ok(found
            .into_iter()
            .map(|(id, document)| CandidateRecord::from_document(CandidateId(id), document))
            .collect())
    }
}

/// Both collections served by this process.
#[derive(Default)]
pub(crate) struct InMemoryStore {
    pub(crate) tutors: Arc<InMemoryTutorRepository>,
    pub(crate) candidates: Arc<InMemoryCandidateRepository>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CollectionStats {
    pub(crate) name: &'static str,
    pub(crate) documents: usize,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StoreDiagnostics {
    pub(crate) backend: &'static str,
    pub(crate) store: &'static str,
    pub(crate) connection_status: String,
    pub(crate) collections: Vec<CollectionStats>,
}

impl InMemoryStore {
    pub(crate) fn diagnostics(&self) -> StoreDiagnostics {
        let counts = [
            (self.tutors.collection.name(), self.tutors.collection.len()),
            (
                self.candidates.collection.name(),
                self.candidates.collection.len(),
            ),
        ];

        let mut collections = Vec::new();
        let mut failures = Vec::new();
        for (name, count) in counts {
            match count {
                Ok(documents) => collections.push(CollectionStats { name, documents }),
                Err(err) => failures.push(err.to_string()),
            }
        }

        let connection_status = if failures.is_empty() {
            "connected".to_string()
        } else {
            format!("degraded: {}", failures.join("; "))
        };

        StoreDiagnostics {
            backend: "running",
            store: "in-memory",
            connection_status,
            collections,
        }
    }
}
