//! Error types for yg-plan.

use thiserror::Error;

/// Errors that can occur while loading plan data.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Alias for `Result<T, PlanError>`.
pub type PlanResult<T> = Result<T, PlanError>;
