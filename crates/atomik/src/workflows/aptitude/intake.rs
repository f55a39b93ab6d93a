use super::domain::{AptitudeSubmission, CandidateStatus, TeacherCandidate};
use crate::workflows::validation::{is_valid_email, required_text};

const MIN_GRADE: i64 = 8;
const MAX_GRADE: i64 = 12;

/// Reasons a submission is refused before scoring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateValidationError {
    #[error("candidate name must not be empty")]
    MissingName,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("grade {0} is outside the supported range 8-12")]
    GradeOutOfRange(i64),
}

/// A submission whose applicant fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScreenedSubmission {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) grade: u8,
    pub(crate) subjects: Vec<String>,
    pub(crate) motivation: Option<String>,
    pub(crate) answers: Vec<i64>,
}

impl ScreenedSubmission {
    pub(crate) fn into_candidate(self, score: u32, status: CandidateStatus) -> TeacherCandidate {
        TeacherCandidate {
            name: self.name,
            email: self.email,
            grade: self.grade,
            subjects: self.subjects,
            motivation: self.motivation,
            score,
            status,
        }
    }
}

pub(crate) fn screen(
    submission: AptitudeSubmission,
) -> Result<ScreenedSubmission, CandidateValidationError> {
    let AptitudeSubmission {
        name,
        email,
        grade,
        subjects,
        motivation,
        answers,
    } = submission;

    let name = required_text(&name).ok_or(CandidateValidationError::MissingName)?;

    let email = email.trim().to_string();
    if !is_valid_email(&email) {
        return Err(CandidateValidationError::InvalidEmail(email));
    }

    if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
        return Err(CandidateValidationError::GradeOutOfRange(grade));
    }

    Ok(ScreenedSubmission {
        name,
        email,
        grade: grade as u8,
        subjects,
        motivation: motivation.and_then(|text| required_text(&text)),
        answers,
    })
}
