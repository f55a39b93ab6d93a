use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection holding registered tutor profiles.
pub const TUTOR_COLLECTION: &str = "tutorprofile";

/// Store-generated identifier for a tutor document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TutorId(pub String);

impl fmt::Display for TutorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Peer tutor available for booking. Grades are expected in 8-12 but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorProfile {
    pub name: String,
    pub grade_levels: BTreeSet<u8>,
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

/// Document handed to the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorDocument {
    #[serde(flatten)]
    pub profile: TutorProfile,
    pub created_at: DateTime<Utc>,
}

/// Stored tutor returned from searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorRecord {
    pub id: TutorId,
    #[serde(flatten)]
    pub profile: TutorProfile,
    pub created_at: DateTime<Utc>,
}

impl TutorRecord {
    pub fn from_document(id: TutorId, document: TutorDocument) -> Self {
        Self {
            id,
            profile: document.profile,
            created_at: document.created_at,
        }
    }
}

/// Search criteria. Array fields match when they contain the requested value.
/// A grade outside the stored range matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorFilter {
    pub grade: Option<i64>,
    pub subject: Option<String>,
}

impl TutorFilter {
    pub fn matches(&self, profile: &TutorProfile) -> bool {
        let grade_ok = self
            .grade
            .map(|grade| {
                u8::try_from(grade)
                    .map(|grade| profile.grade_levels.contains(&grade))
                    .unwrap_or(false)
            })
            .unwrap_or(true);
        let subject_ok = self
            .subject
            .as_deref()
            .map(|subject| profile.subjects.iter().any(|candidate| candidate == subject))
            .unwrap_or(true);

        grade_ok && subject_ok
    }
}
