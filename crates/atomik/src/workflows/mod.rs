pub mod aptitude;
pub mod tutors;

mod listing;
pub mod repository;
mod validation;

pub use listing::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
pub use repository::RepositoryError;
