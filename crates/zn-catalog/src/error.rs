//! Catalog error types.
//!
//! [`RecordError`] describes why one dataset record was skipped; it is
//! logged and counted, never propagated.  [`CatalogError`] is the structural
//! failure of a whole load, the only hard failure in the engine.

use thiserror::Error;

use zn_core::{CoreError, ZipCode};

/// Why a single dataset record was rejected during load.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("missing geometry")]
    MissingGeometry,

    #[error("geometry type {0:?} is not a Point")]
    NotAPoint(String),

    #[error("coordinates must be a [lon, lat] pair")]
    BadCoordinates,

    #[error("missing or non-string zipCode property")]
    MissingCode,

    #[error("duplicate zip code {0}; keeping the first occurrence")]
    Duplicate(ZipCode),

    #[error("malformed row: {0}")]
    Row(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Structural failure of a dataset load.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("dataset contains no loadable features")]
    EmptyDataset,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
