//! Query-engine error type.
//!
//! These are diagnostic signals for the strict query path; the lenient
//! facade ([`ZipSearch::find_within_radius`](crate::ZipSearch::find_within_radius))
//! maps every one of them to an empty result instead.

use thiserror::Error;

use zn_core::{CoreError, ZipCode};

use crate::query::MAX_RADIUS_MILES;

/// Errors produced by `zn-search`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("radius {0} is outside the accepted range (0, {MAX_RADIUS_MILES}] miles")]
    InvalidRadius(f64),

    #[error("zip code {0} is not in the catalog")]
    UnknownCode(ZipCode),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SearchResult<T> = Result<T, SearchError>;
