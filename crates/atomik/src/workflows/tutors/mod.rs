//! Tutor directory: registration, grade/subject search, and CSV seeding.

pub mod domain;
mod import;
pub(crate) mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    TutorDocument, TutorFilter, TutorId, TutorProfile, TutorRecord, TUTOR_COLLECTION,
};
pub use import::TutorImportError;
pub use intake::TutorValidationError;
pub use repository::TutorRepository;
pub use router::tutor_router;
pub use service::{TutorDirectoryService, TutorServiceError};
