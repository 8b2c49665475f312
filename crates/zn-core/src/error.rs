//! Engine-wide error type.
//!
//! Sub-crates define their own error enums for load/query concerns and wrap
//! `CoreError` as one variant where a validation failure has to propagate.

use thiserror::Error;

/// Validation errors shared by all `zn-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid zip code {0:?}: expected exactly five ASCII digits")]
    InvalidCode(String),

    #[error("coordinate out of range: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for all `zn-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
