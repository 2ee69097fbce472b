//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into `YgError`
//! via `From` impls or keep them separate.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `yg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum YgError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `yg-*` crates.
pub type YgResult<T> = Result<T, YgError>;
