//! `zn-catalog` — feature catalog for the `zipnear` radius-search engine.
//!
//! Loads a static dataset of postal-code point features once and exposes an
//! O(1) lookup from [`ZipCode`](zn_core::ZipCode) to [`ZipFeature`].  The
//! catalog is read-only after construction; the spatial index in `zn-search`
//! addresses its features by [`FeatureId`](zn_core::FeatureId).
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`feature`] | `ZipFeature` — one postal code's point + attributes       |
//! | [`geojson`] | GeoJSON wire model (`FeatureCollection`, `Feature`, …)    |
//! | [`csv`]     | CSV dataset loader (`zip,lat,lon[,city,state]`)           |
//! | [`catalog`] | `ZipCatalog` — owned storage + code index                 |
//! | [`error`]   | `CatalogError`, `RecordError`, `CatalogResult<T>`         |
//!
//! # Load policy
//!
//! Individual malformed records are skipped with a `tracing::warn!` and
//! counted ([`ZipCatalog::skipped_records`]); the load continues.  Only a
//! structurally broken dataset (unreadable, unparseable, or empty after
//! skipping) fails the whole load; the catalog is never left partially
//! built.

pub mod catalog;
pub mod csv;
pub mod error;
pub mod feature;
pub mod geojson;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::ZipCatalog;
pub use error::{CatalogError, CatalogResult, RecordError};
pub use feature::ZipFeature;
pub use geojson::{Feature, FeatureCollection, Geometry};
// `crate::` disambiguates the module from the csv crate itself.
pub use crate::csv::{load_zip_csv, load_zip_csv_reader};
