use std::collections::BTreeSet;
use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::domain::TutorProfile;
use super::intake::{self, TutorValidationError};
use crate::workflows::RepositoryError;

const LIST_SEPARATOR: char = ';';

#[derive(Debug)]
pub enum TutorImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MalformedCell {
        row: usize,
        column: &'static str,
        value: String,
    },
    InvalidRow {
        row: usize,
        source: TutorValidationError,
    },
    Repository {
        stored: usize,
        source: RepositoryError,
    },
}

impl std::fmt::Display for TutorImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TutorImportError::Io(err) => write!(f, "failed to read tutor export: {}", err),
            TutorImportError::Csv(err) => write!(f, "invalid tutor CSV data: {}", err),
            TutorImportError::MalformedCell { row, column, value } => {
                write!(f, "row {row}: column '{column}' has unreadable value '{value}'")
            }
            TutorImportError::InvalidRow { row, source } => write!(f, "row {row}: {source}"),
            TutorImportError::Repository { stored, source } => write!(
                f,
                "could not store tutors after {stored} row(s) were saved: {source}"
            ),
        }
    }
}

impl std::error::Error for TutorImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TutorImportError::Io(err) => Some(err),
            TutorImportError::Csv(err) => Some(err),
            TutorImportError::MalformedCell { .. } => None,
            TutorImportError::InvalidRow { source, .. } => Some(source),
            TutorImportError::Repository { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for TutorImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TutorImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Parse and validate every row. Rows are numbered from 1, excluding the header.
pub(crate) fn parse_profiles<R: Read>(reader: R) -> Result<Vec<TutorProfile>, TutorImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut profiles = Vec::new();

    for (index, record) in csv_reader.deserialize::<TutorRow>().enumerate() {
        let row_number = index + 1;
        let profile = record?.into_profile(row_number)?;
        let profile = intake::validate(profile).map_err(|source| TutorImportError::InvalidRow {
            row: row_number,
            source,
        })?;
        profiles.push(profile);
    }

    Ok(profiles)
}

#[derive(Debug, Deserialize)]
struct TutorRow {
    name: String,
    #[serde(default)]
    grade_levels: String,
    #[serde(default)]
    subjects: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    bio: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    availability: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rating: Option<String>,
}

impl TutorRow {
    fn into_profile(self, row: usize) -> Result<TutorProfile, TutorImportError> {
        let grade_levels = split_list(&self.grade_levels)
            .map(|value| {
                value
                    .parse::<u8>()
                    .map_err(|_| TutorImportError::MalformedCell {
                        row,
                        column: "grade_levels",
                        value: value.to_string(),
                    })
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        let rating = self
            .rating
            .map(|value| {
                value
                    .parse::<f32>()
                    .map_err(|_| TutorImportError::MalformedCell {
                        row,
                        column: "rating",
                        value,
                    })
            })
            .transpose()?;

        Ok(TutorProfile {
            name: self.name,
            grade_levels,
            subjects: split_list(&self.subjects).map(str::to_string).collect(),
            bio: self.bio,
            availability: self.availability,
            rating,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
