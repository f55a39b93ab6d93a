//! Tutor directory and aptitude screening workflows for the Atomik backend.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
