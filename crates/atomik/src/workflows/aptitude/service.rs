use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use super::domain::{
    AptitudeSubmission, CandidateDocument, CandidateFilter, CandidateId, CandidateRecord,
    CandidateStatus,
};
use super::intake::{self, CandidateValidationError};
use super::repository::CandidateRepository;
use super::scoring::{AptitudeScore, AptitudeScorer};
use crate::config::AptitudeConfig;
use crate::workflows::RepositoryError;

/// Service composing intake validation, the scorer, and the candidate store.
pub struct AptitudeService<R> {
    scorer: AptitudeScorer,
    repository: Arc<R>,
}

/// Response returned to the candidate after a submission is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: CandidateId,
    pub score: u32,
    pub status: CandidateStatus,
}

impl<R> AptitudeService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: AptitudeConfig) -> Self {
        Self {
            scorer: AptitudeScorer::new(config.answer_key),
            repository,
        }
    }

    pub fn scorer(&self) -> &AptitudeScorer {
        &self.scorer
    }

    /// Validate, score, and persist a submission. Nothing is stored when validation fails.
    pub fn submit(
        &self,
        submission: AptitudeSubmission,
    ) -> Result<SubmissionReceipt, AptitudeServiceError> {
        let screened = intake::screen(submission).inspect_err(|err| {
            debug!(error = %err, "aptitude submission rejected");
        })?;

        let AptitudeScore { score, status } = self.scorer.score(&screened.answers);
        let document = CandidateDocument {
            candidate: screened.into_candidate(score, status),
            created_at: Utc::now(),
        };

        let id = self.repository.insert(document)?;
        info!(candidate_id = %id, score, %status, "aptitude submission scored");

        Ok(SubmissionReceipt { id, score, status })
    }

    /// List stored candidates, optionally narrowed to a single status.
    pub fn candidates(
        &self,
        filter: &CandidateFilter,
        limit: usize,
    ) -> Result<Vec<CandidateRecord>, AptitudeServiceError> {
        Ok(self.repository.list(filter, limit)?)
    }
}

/// Error raised by the aptitude service.
#[derive(Debug, thiserror::Error)]
pub enum AptitudeServiceError {
    #[error(transparent)]
    Validation(#[from] CandidateValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
