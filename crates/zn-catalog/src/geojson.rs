//! GeoJSON wire model.
//!
//! The dataset's input boundary is a GeoJSON-like feature collection: each
//! feature carries a `Point` geometry with `[lon, lat]` coordinates and a
//! properties object containing at least a string `zipCode`.  The same
//! shapes serve as the output boundary: query results serialize back to a
//! `FeatureCollection` for the presentation layer.
//!
//! The structs are deliberately lenient on the way in (optional geometry,
//! untyped coordinates) so that one malformed feature is a per-record skip,
//! not a structural parse failure.  Validation happens per feature in
//! [`Feature::into_zip_feature`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use zn_core::{GeoPoint, ZipCode};

use crate::error::RecordError;
use crate::feature::ZipFeature;

/// A GeoJSON feature collection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_kind")]
    pub kind: String,
    pub features: Vec<Feature>,
}

/// A single GeoJSON feature.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_kind")]
    pub kind: String,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

/// A GeoJSON geometry.  Only `Point` is meaningful to this engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Value,
}

fn collection_kind() -> String {
    "FeatureCollection".to_string()
}

fn feature_kind() -> String {
    "Feature".to_string()
}

impl Geometry {
    /// A `Point` geometry at `position`, in GeoJSON `[lon, lat]` order.
    pub fn point(position: GeoPoint) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: json!([position.lon, position.lat]),
        }
    }
}

impl Feature {
    /// Validate one wire feature into an engine feature.
    ///
    /// Required: a `Point` geometry with a finite in-range `[lon, lat]`
    /// pair (a trailing altitude is tolerated and ignored) and a string
    /// `zipCode` property of five digits.  The full properties object is
    /// carried into the result unchanged.
    pub fn into_zip_feature(self) -> Result<ZipFeature, RecordError> {
        let geometry = self.geometry.ok_or(RecordError::MissingGeometry)?;
        if geometry.kind != "Point" {
            return Err(RecordError::NotAPoint(geometry.kind));
        }

        let coords = geometry
            .coordinates
            .as_array()
            .ok_or(RecordError::BadCoordinates)?;
        let (lon, lat) = match coords.as_slice() {
            [lon, lat, ..] => (
                lon.as_f64().ok_or(RecordError::BadCoordinates)?,
                lat.as_f64().ok_or(RecordError::BadCoordinates)?,
            ),
            _ => return Err(RecordError::BadCoordinates),
        };
        let position = GeoPoint::try_new(lat, lon)?;

        let properties = self.properties.unwrap_or_default();
        let code = {
            let raw = properties
                .get("zipCode")
                .and_then(Value::as_str)
                .ok_or(RecordError::MissingCode)?;
            ZipCode::parse(raw)?
        };

        Ok(ZipFeature::new(code, position, properties))
    }

    /// Wire form of an engine feature, for rendering output.
    pub fn from_zip_feature(feature: &ZipFeature) -> Self {
        Self {
            kind: feature_kind(),
            geometry: Some(Geometry::point(feature.position)),
            properties: Some(feature.properties.clone()),
        }
    }
}

impl FeatureCollection {
    /// Collect engine features back into the wire shape.
    pub fn from_zip_features<'a>(features: impl IntoIterator<Item = &'a ZipFeature>) -> Self {
        Self {
            kind: collection_kind(),
            features: features
                .into_iter()
                .map(Feature::from_zip_feature)
                .collect(),
        }
    }
}
