//! Error types for yg-engine.
//!
//! The engine has exactly two hard failure modes, both configuration
//! preconditions checked before any hour is processed.  Everything else —
//! missing plan entries, missing capacity data, fully-capped classes —
//! degrades to zero/no-op by contract and never errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SteerError {
    #[error("avg_teu_per_truck must be > 0, got {0}")]
    BadTeuPerTruck(f64),

    #[error("reserve_rho must be in [0, 1), got {0}")]
    BadReserveRho(f64),
}

/// Alias for `Result<T, SteerError>`.
pub type SteerResult<T> = Result<T, SteerError>;
