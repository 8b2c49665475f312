//! Copy-out helpers for the presentation layer.
//!
//! The engine hands out borrowed features; these helpers turn a result set
//! into the two shapes the UI consumes: a GeoJSON collection for map
//! markers, and a flat code line for clipboard export.

use zn_catalog::{FeatureCollection, ZipFeature};

/// Serialize a result set into the same GeoJSON shape as the input dataset.
pub fn to_feature_collection<'a>(
    features: impl IntoIterator<Item = &'a ZipFeature>,
) -> FeatureCollection {
    FeatureCollection::from_zip_features(features)
}

/// Join the codes of a result set with `", "` (the clipboard export
/// format).  Pure function of the collection; an empty set yields an empty
/// string.
pub fn zip_code_line<'a>(features: impl IntoIterator<Item = &'a ZipFeature>) -> String {
    features
        .into_iter()
        .map(|f| f.code.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
