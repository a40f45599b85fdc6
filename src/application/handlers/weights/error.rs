//! Error type shared by the weight command and query handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ObjectiveId, ValidationError};

/// Errors returned by weight handlers.
#[derive(Debug, Clone, Error)]
pub enum WeightCommandError {
    #[error("Objective not found: {0}")]
    ObjectiveNotFound(ObjectiveId),

    #[error("Measure '{measure_id}' not found in objective {objective_id}")]
    MeasureNotFound {
        objective_id: ObjectiveId,
        measure_id: String,
    },

    #[error("Measure '{measure_id}' already exists in objective {objective_id}")]
    DuplicateMeasure {
        objective_id: ObjectiveId,
        measure_id: String,
    },

    #[error("Invalid command: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl WeightCommandError {
    /// Returns the error code for API responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            WeightCommandError::ObjectiveNotFound(_) => ErrorCode::ObjectiveNotFound,
            WeightCommandError::MeasureNotFound { .. } => ErrorCode::MeasureNotFound,
            WeightCommandError::DuplicateMeasure { .. } => ErrorCode::DuplicateMeasure,
            WeightCommandError::Validation(_) => ErrorCode::ValidationFailed,
            WeightCommandError::Domain(err) => err.code,
        }
    }
}
