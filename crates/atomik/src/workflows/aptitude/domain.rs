use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection holding screened candidates.
pub const CANDIDATE_COLLECTION: &str = "teachercandidate";

/// Store-generated identifier for a candidate document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Aptitude test payload submitted by a prospective tutor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptitudeSubmission {
    pub name: String,
    pub email: String,
    pub grade: i64,
    pub subjects: Vec<String>,
    #[serde(default)]
    pub motivation: Option<String>,
    pub answers: Vec<i64>,
}

/// Screening outcome recorded against a candidate.
///
/// `Rejected` is only ever assigned outside the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateStatus {
    Pending,
    Passed,
    NeedsReview,
    Rejected,
}

impl CandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CandidateStatus::Pending => "pending",
            CandidateStatus::Passed => "passed",
            CandidateStatus::NeedsReview => "needs-review",
            CandidateStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A candidate as persisted. Score and status are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherCandidate {
    pub name: String,
    pub email: String,
    pub grade: u8,
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    pub score: u32,
    pub status: CandidateStatus,
}

/// Document handed to the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDocument {
    #[serde(flatten)]
    pub candidate: TeacherCandidate,
    pub created_at: DateTime<Utc>,
}

/// Stored candidate returned from listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    #[serde(flatten)]
    pub candidate: TeacherCandidate,
    pub created_at: DateTime<Utc>,
}

impl CandidateRecord {
    pub fn from_document(id: CandidateId, document: CandidateDocument) -> Self {
        Self {
            id,
            candidate: document.candidate,
            created_at: document.created_at,
        }
    }
}

/// Exact-match filter over candidate fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    pub status: Option<CandidateStatus>,
}

impl CandidateFilter {
    pub fn with_status(status: CandidateStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    pub fn matches(&self, candidate: &TeacherCandidate) -> bool {
        self.status
            .map(|status| candidate.status == status)
            .unwrap_or(true)
    }
}
