//! Error types for schedule validation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A schedule entry carries a time-of-day string that is not `HH:MM`.
    #[error("invalid time of day in {field}: {value:?} (expected HH:MM)")]
    InvalidTimeOfDay { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
