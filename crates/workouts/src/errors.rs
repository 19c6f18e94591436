use thiserror::Error;

use crate::models::WorkoutKind;

pub type Result<T> = std::result::Result<T, WorkoutError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unrecognized workout type: {0:?}")]
    UnknownWorkout(String),

    #[error("Arity mismatch for {kind}: expected {expected} values, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("Non-positive duration: {0}")]
    NonPositiveDuration(f64),

    #[error("Non-positive {field}: {value}")]
    NonPositiveField { field: &'static str, value: f64 },

    #[error("Invalid {field}: {value} is not a non-negative whole number")]
    InvalidField { field: &'static str, value: f64 },

    #[error("Invalid setting {name}: {value:?}")]
    InvalidSetting { name: &'static str, value: String },
}
