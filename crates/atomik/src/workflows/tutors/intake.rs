use super::domain::TutorProfile;
use crate::workflows::validation::required_text;

const MAX_RATING: f32 = 5.0;

/// Reasons a tutor profile is refused at registration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TutorValidationError {
    #[error("tutor name must not be empty")]
    MissingName,
    #[error("rating {0} must be between 0 and 5")]
    RatingOutOfRange(f32),
}

pub(crate) fn validate(profile: TutorProfile) -> Result<TutorProfile, TutorValidationError> {
    let name = required_text(&profile.name).ok_or(TutorValidationError::MissingName)?;

    if let Some(rating) = profile.rating {
        if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
            return Err(TutorValidationError::RatingOutOfRange(rating));
        }
    }

    Ok(TutorProfile {
        name,
        bio: profile.bio.and_then(|text| required_text(&text)),
        availability: profile.availability.and_then(|text| required_text(&text)),
        ..profile
    })
}
