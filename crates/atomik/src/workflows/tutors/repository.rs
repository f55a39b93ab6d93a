use super::domain::{TutorDocument, TutorFilter, TutorId, TutorRecord};
use crate::workflows::RepositoryError;

/// Storage abstraction for the `tutorprofile` collection.
pub trait TutorRepository: Send + Sync {
    fn insert(&self, document: TutorDocument) -> Result<TutorId, RepositoryError>;
    fn list(
        &self,
        filter: &TutorFilter,
        limit: usize,
    ) -> Result<Vec<TutorRecord>, RepositoryError>;
}
