//! Owned feature storage plus the code → feature index.

use std::io::Read;

use rustc_hash::FxHashMap;
use tracing::warn;

use zn_core::{FeatureId, ZipCode};

use crate::error::{CatalogError, CatalogResult, RecordError};
use crate::feature::ZipFeature;
use crate::geojson::{Feature, FeatureCollection};

/// The feature catalog: every loadable feature of the dataset, addressable
/// by [`FeatureId`] (dense index) or [`ZipCode`] (hash lookup).
///
/// Built once at startup, read-only afterwards.  Share it (and any index
/// built over it) behind an `Arc` for concurrent readers; a dataset change
/// means building a fresh catalog and swapping the shared handle, never
/// mutating in place.
#[derive(Clone, Debug)]
pub struct ZipCatalog {
    features: Vec<ZipFeature>,
    by_code: FxHashMap<ZipCode, FeatureId>,
    skipped: usize,
}

impl ZipCatalog {
    // ── Construction ──────────────────────────────────────────────────────

    /// Parse a GeoJSON feature collection and build the catalog.
    pub fn from_geojson_str(s: &str) -> CatalogResult<Self> {
        let collection: FeatureCollection = serde_json::from_str(s)?;
        Self::from_collection(collection)
    }

    /// Like [`from_geojson_str`](Self::from_geojson_str) but accepts any
    /// `Read` source (file, embedded bytes, test cursor).
    pub fn from_geojson_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let collection: FeatureCollection = serde_json::from_reader(reader)?;
        Self::from_collection(collection)
    }

    /// Build from an already-parsed wire collection.
    pub fn from_collection(collection: FeatureCollection) -> CatalogResult<Self> {
        Self::from_records(collection.features.into_iter().map(Feature::into_zip_feature))
    }

    /// Build from per-record validation results.
    ///
    /// `Err` records and duplicate codes are skipped with a warning and
    /// counted; the load continues (first occurrence of a code wins).
    /// Fails with [`CatalogError::EmptyDataset`] only if nothing loadable
    /// remains.
    pub fn from_records(
        records: impl IntoIterator<Item = Result<ZipFeature, RecordError>>,
    ) -> CatalogResult<Self> {
        let mut features: Vec<ZipFeature> = Vec::new();
        let mut by_code: FxHashMap<ZipCode, FeatureId> = FxHashMap::default();
        let mut skipped = 0usize;

        for record in records {
            let feature = match record {
                Ok(feature) => feature,
                Err(err) => {
                    warn!(%err, "skipping dataset record");
                    skipped += 1;
                    continue;
                }
            };
            if by_code.contains_key(&feature.code) {
                let err = RecordError::Duplicate(feature.code);
                warn!(%err, "skipping dataset record");
                skipped += 1;
                continue;
            }
            let id = FeatureId(features.len() as u32);
            by_code.insert(feature.code, id);
            features.push(feature);
        }

        if features.is_empty() {
            return Err(CatalogError::EmptyDataset);
        }
        Ok(Self { features, by_code, skipped })
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// O(1) expected lookup by code.
    ///
    /// `None` for an unknown code is a normal outcome, not an error; the
    /// caller declines to search.
    pub fn lookup(&self, code: ZipCode) -> Option<&ZipFeature> {
        self.by_code.get(&code).map(|id| &self.features[id.index()])
    }

    /// Direct access by dense id.  Ids handed out by this catalog (or an
    /// index built over it) are always in bounds.
    #[inline]
    pub fn get(&self, id: FeatureId) -> &ZipFeature {
        &self.features[id.index()]
    }

    /// All features, in load order, indexed by `FeatureId`.
    pub fn features(&self) -> &[ZipFeature] {
        &self.features
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZipFeature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Records dropped by the skip-log-continue load policy (malformed or
    /// duplicate).
    pub fn skipped_records(&self) -> usize {
        self.skipped
    }
}
