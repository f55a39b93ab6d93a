use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{TutorDocument, TutorFilter, TutorId, TutorProfile, TutorRecord};
use super::import::{parse_profiles, TutorImportError};
use super::intake::{self, TutorValidationError};
use super::repository::TutorRepository;
use crate::workflows::RepositoryError;

/// Service fronting the tutor collection.
pub struct TutorDirectoryService<R> {
    repository: Arc<R>,
}

impl<R> TutorDirectoryService<R>
where
    R: TutorRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store a new profile, returning the generated identifier.
    pub fn register(&self, profile: TutorProfile) -> Result<TutorId, TutorServiceError> {
        let profile = intake::validate(profile)?;
        let id = self.store(profile)?;
        info!(tutor_id = %id, "tutor registered");
        Ok(id)
    }

    pub fn search(
        &self,
        filter: &TutorFilter,
        limit: usize,
    ) -> Result<Vec<TutorRecord>, TutorServiceError> {
        Ok(self.repository.list(filter, limit)?)
    }

    /// Register every row of a CSV export. Rows are all validated before any is stored; a
    /// store failure part way through reports how many rows were already saved.
    pub fn import_csv<Rd: Read>(&self, reader: Rd) -> Result<Vec<TutorId>, TutorImportError> {
        let profiles = parse_profiles(reader)?;
        let mut ids = Vec::with_capacity(profiles.len());
        for profile in profiles {
            let id = self
                .store(profile)
                .map_err(|source| TutorImportError::Repository {
                    stored: ids.len(),
                    source,
                })?;
            ids.push(id);
        }

        info!(count = ids.len(), "tutor export imported");
        Ok(ids)
    }

    pub fn import_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<TutorId>, TutorImportError> {
        let file = std::fs::File::open(path)?;
        self.import_csv(file)
    }

    fn store(&self, profile: TutorProfile) -> Result<TutorId, RepositoryError> {
        self.repository.insert(TutorDocument {
            profile,
            created_at: Utc::now(),
        })
    }
}

/// Error raised by the tutor directory service.
#[derive(Debug, thiserror::Error)]
pub enum TutorServiceError {
    #[error(transparent)]
    Validation(#[from] TutorValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
