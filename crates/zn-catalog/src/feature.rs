//! A single postal code's point location plus descriptive attributes.

use serde_json::{Map, Value};

use zn_core::{GeoPoint, ZipCode};

/// One postal code's point feature.
///
/// Immutable after construction: the catalog owns every `ZipFeature` for the
/// life of the index and hands out shared references only.  The attribute
/// map is carried through from the dataset unchanged and is opaque to the
/// engine; the one guaranteed entry is `"zipCode"`, kept in sync with
/// [`ZipFeature::code`].
#[derive(Clone, Debug)]
pub struct ZipFeature {
    /// Unique five-digit code of this feature.
    pub code: ZipCode,
    /// Point location in WGS-84 degrees.
    pub position: GeoPoint,
    /// Free-form descriptive attributes (`city`, `state`, …).
    pub properties: Map<String, Value>,
}

impl ZipFeature {
    /// Build a feature, canonicalizing the `"zipCode"` attribute entry.
    pub fn new(code: ZipCode, position: GeoPoint, mut properties: Map<String, Value>) -> Self {
        properties.insert("zipCode".to_string(), Value::String(code.to_string()));
        Self { code, position, properties }
    }

    /// String attribute lookup; absent or non-string values yield `None`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// The conventional `city` attribute, if the dataset carries it.
    pub fn city(&self) -> Option<&str> {
        self.attribute("city")
    }

    /// The conventional `state` attribute, if the dataset carries it.
    pub fn state(&self) -> Option<&str> {
        self.attribute("state")
    }
}
