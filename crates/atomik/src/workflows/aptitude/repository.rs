use super::domain::{CandidateDocument, CandidateFilter, CandidateId, CandidateRecord};
use crate::workflows::RepositoryError;

/// Storage abstraction for the `teachercandidate` collection.
pub trait CandidateRepository: Send + Sync {
    /// Persist one document and return the identifier the store generated for it.
    fn insert(&self, document: CandidateDocument) -> Result<CandidateId, RepositoryError>;

    /// Matching documents in insertion order, at most `limit` of them.
    fn list(
        &self,
        filter: &CandidateFilter,
        limit: usize,
    ) -> Result<Vec<CandidateRecord>, RepositoryError>;
}
