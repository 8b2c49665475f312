//! CSV dataset loader.
//!
//! Alternative input boundary for tabular zip datasets.
//!
//! # CSV format
//!
//! One row per postal code, headers required:
//!
//! ```csv
//! zip,lat,lon,city,state
//! 10001,40.7508,-73.9961,New York,NY
//! 10002,40.7168,-73.9861,New York,NY
//! ```
//!
//! `city` and `state` columns are optional; when present they are carried
//! into the feature's attribute map.  Malformed rows are skipped under the
//! same warn-and-count policy as the GeoJSON loader.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use zn_core::{GeoPoint, ZipCode};

use crate::catalog::ZipCatalog;
use crate::error::{CatalogResult, RecordError};
use crate::feature::ZipFeature;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ZipRecord {
    zip:   ZipCode,
    lat:   f64,
    lon:   f64,
    #[serde(default)]
    city:  Option<String>,
    #[serde(default)]
    state: Option<String>,
}

impl ZipRecord {
    fn into_zip_feature(self) -> Result<ZipFeature, RecordError> {
        let position = GeoPoint::try_new(self.lat, self.lon)?;

        let mut properties = Map::new();
        if let Some(city) = self.city {
            properties.insert("city".to_string(), Value::String(city));
        }
        if let Some(state) = self.state {
            properties.insert("state".to_string(), Value::String(state));
        }

        Ok(ZipFeature::new(self.zip, position, properties))
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a catalog from a CSV file.
pub fn load_zip_csv(path: &Path) -> CatalogResult<ZipCatalog> {
    let file = std::fs::File::open(path)?;
    load_zip_csv_reader(file)
}

/// Like [`load_zip_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded datasets.
pub fn load_zip_csv_reader<R: Read>(reader: R) -> CatalogResult<ZipCatalog> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let records: Vec<Result<ZipFeature, RecordError>> = csv_reader
        .deserialize::<ZipRecord>()
        .map(|row| {
            row.map_err(|e| RecordError::Row(e.to_string()))
                .and_then(ZipRecord::into_zip_feature)
        })
        .collect();
    ZipCatalog::from_records(records)
}
