//! Aptitude screening for prospective tutors: intake validation, answer-key scoring, and the
//! candidate listing used by reviewers.

pub mod domain;
pub(crate) mod intake;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AptitudeSubmission, CandidateDocument, CandidateFilter, CandidateId, CandidateRecord,
    CandidateStatus, TeacherCandidate, CANDIDATE_COLLECTION,
};
pub use intake::CandidateValidationError;
pub use repository::CandidateRepository;
pub use router::aptitude_router;
pub use scoring::{AnswerKey, AnswerKeyError, AptitudeScore, AptitudeScorer};
pub use service::{AptitudeService, AptitudeServiceError, SubmissionReceipt};
