use serde::{Deserialize, Serialize};

use super::domain::CandidateStatus;

/// Lowest score that passes screening outright.
pub const PASSING_SCORE: u32 = 4;
/// Lowest score routed to a reviewer instead of staying pending.
pub const REVIEW_SCORE: u32 = 3;

const DEFAULT_KEY: [i64; 5] = [2, 1, 3, 2, 4];
const MIN_OPTION: i64 = 1;
const MAX_OPTION: i64 = 4;

/// Ordered list of correct options, one per question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey(Vec<i64>);

impl AnswerKey {
    pub fn new(options: Vec<i64>) -> Result<Self, AnswerKeyError> {
        if options.is_empty() {
            return Err(AnswerKeyError::Empty);
        }

        if let Some((position, &option)) = options
            .iter()
            .enumerate()
            .find(|(_, option)| !(MIN_OPTION..=MAX_OPTION).contains(*option))
        {
            return Err(AnswerKeyError::OptionOutOfRange {
                question: position + 1,
                option,
            });
        }

        Ok(Self(options))
    }

    /// Parse a comma separated key such as `2,1,3,2,4`.
    pub fn parse(raw: &str) -> Result<Self, AnswerKeyError> {
        let options = raw
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| {
                value
                    .parse::<i64>()
                    .map_err(|_| AnswerKeyError::NotANumber(value.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(options)
    }

    pub fn options(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AnswerKey {
    fn default() -> Self {
        Self(DEFAULT_KEY.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerKeyError {
    #[error("answer key must list at least one option")]
    Empty,
    #[error("answer key entry '{0}' is not an integer")]
    NotANumber(String),
    #[error("question {question} expects an option between 1 and 4, found {option}")]
    OptionOutOfRange { question: usize, option: i64 },
}

/// Result of scoring one answer sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AptitudeScore {
    pub score: u32,
    pub status: CandidateStatus,
}

/// Compares answer sheets against a fixed key.
#[derive(Debug, Clone, Default)]
pub struct AptitudeScorer {
    key: AnswerKey,
}

impl AptitudeScorer {
    pub fn new(key: AnswerKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    /// Count positional matches; answers past the end of the key are never compared.
    pub fn score(&self, answers: &[i64]) -> AptitudeScore {
        let score = answers
            .iter()
            .zip(self.key.options())
            .filter(|(answer, expected)| answer == expected)
            .count() as u32;

        AptitudeScore {
            score,
            status: classify(score),
        }
    }
}

pub fn classify(score: u32) -> CandidateStatus {
    if score >= PASSING_SCORE {
        CandidateStatus::Passed
    } else if score >= REVIEW_SCORE {
        CandidateStatus::NeedsReview
    } else {
        CandidateStatus::Pending
    }
}
