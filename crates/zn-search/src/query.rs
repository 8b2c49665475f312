//! Radius validation, disc envelope, and the query engine itself.

use rstar::{AABB, RTree};
use tracing::debug;

use zn_catalog::{ZipCatalog, ZipFeature};
use zn_core::{EARTH_RADIUS_MILES, GeoPoint, ZipCode};

use crate::error::{SearchError, SearchResult};
use crate::index::{TreeEntry, build_tree};

/// Upper bound on the query radius, matching the largest UI-selectable
/// distance.  Radii above it are rejected, not clipped.
pub const MAX_RADIUS_MILES: f64 = 30.0;

// ── Radius ────────────────────────────────────────────────────────────────────

/// A validated query radius: finite and in `(0, MAX_RADIUS_MILES]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadiusMiles(f64);

impl RadiusMiles {
    /// Validate a raw radius.  Non-finite, zero, negative, and
    /// over-the-bound values are all [`SearchError::InvalidRadius`].
    pub fn new(miles: f64) -> SearchResult<Self> {
        if miles.is_finite() && miles > 0.0 && miles <= MAX_RADIUS_MILES {
            Ok(Self(miles))
        } else {
            Err(SearchError::InvalidRadius(miles))
        }
    }

    #[inline]
    pub fn miles(self) -> f64 {
        self.0
    }
}

// ── Disc envelope ─────────────────────────────────────────────────────────────

/// Lat/lon bounding box guaranteed to contain the disc of `radius` around
/// `origin`.
///
/// A fixed-radius circle on the sphere is not a rectangle in degree space:
/// the longitude extent grows with latitude.  The box therefore uses the
/// smallest cosine of latitude anywhere in the disc's latitude band, and
/// widens to the full longitude range when the band touches a pole or the
/// half-width crosses the antimeridian.  The envelope may overshoot (the
/// exact distance filter removes false positives) but is never smaller
/// than the true disc.
fn disc_envelope(origin: GeoPoint, radius: RadiusMiles) -> AABB<[f64; 2]> {
    let half_lat = (radius.miles() / EARTH_RADIUS_MILES).to_degrees();

    let lat_min = (origin.lat - half_lat).max(-90.0);
    let lat_max = (origin.lat + half_lat).min(90.0);

    let widest_abs_lat = lat_min.abs().max(lat_max.abs());
    let min_cos = widest_abs_lat.to_radians().cos();

    let touches_pole = lat_max >= 90.0 || lat_min <= -90.0 || min_cos < 1e-9;
    let half_lon = if touches_pole {
        180.0
    } else {
        (half_lat / min_cos).min(180.0)
    };

    let (lon_min, lon_max) = if half_lon >= 180.0 {
        (-180.0, 180.0)
    } else {
        let lo = origin.lon - half_lon;
        let hi = origin.lon + half_lon;
        // Crossing the antimeridian: fall back to the full longitude range
        // rather than splitting the box.  The dataset is sparse there and
        // the exact filter cleans up the extra candidates.
        if lo < -180.0 || hi > 180.0 {
            (-180.0, 180.0)
        } else {
            (lo, hi)
        }
    };

    AABB::from_corners([lat_min, lon_min], [lat_max, lon_max])
}

// ── Query engine ──────────────────────────────────────────────────────────────

/// The radius-search engine: an owned [`ZipCatalog`] plus an immutable
/// R-tree over its features.
///
/// All query methods take `&self`; see the crate docs for the sharing and
/// rebuild model.
pub struct ZipSearch {
    catalog: ZipCatalog,
    tree: RTree<TreeEntry>,
}

impl ZipSearch {
    /// Index every catalog feature.  O(n log n); a few hundred to a few
    /// thousand points build in well under a millisecond.
    pub fn build(catalog: ZipCatalog) -> Self {
        let tree = build_tree(&catalog);
        debug!(features = catalog.len(), "spatial index built");
        Self { catalog, tree }
    }

    /// The catalog this engine indexes.
    pub fn catalog(&self) -> &ZipCatalog {
        &self.catalog
    }

    /// Number of indexed features.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    // ── Resolution ────────────────────────────────────────────────────────

    /// Resolve a raw code string to its feature.
    ///
    /// `None` covers both outcomes the caller must decline to search on:
    /// a string that is not a five-digit code, and a well-formed code that
    /// is not in the catalog.
    pub fn resolve(&self, code: &str) -> Option<&ZipFeature> {
        let code = ZipCode::parse(code).ok()?;
        self.catalog.lookup(code)
    }

    // ── Radius query ──────────────────────────────────────────────────────

    /// All features within `radius` of `origin`, excluding `origin` itself.
    ///
    /// Deterministic for a given engine, origin, and radius; result order
    /// is unspecified and must not be relied on.  The distance comparison
    /// is inclusive: a feature exactly at the radius is returned.
    pub fn neighbours(&self, origin: &ZipFeature, radius: RadiusMiles) -> Vec<&ZipFeature> {
        let envelope = disc_envelope(origin.position, radius);

        let mut out = Vec::new();
        for entry in self.tree.locate_in_envelope_intersecting(&envelope) {
            let feature = self.catalog.get(entry.id);
            // Self-exclusion is by code identity, never by zero-distance:
            // a re-derived coordinate may sit epsilon away from itself.
            if feature.code == origin.code {
                continue;
            }
            if origin.position.distance_miles(feature.position) <= radius.miles() {
                out.push(feature);
            }
        }
        out
    }

    /// Strict query path: resolve `code`, validate `radius_miles`, and run
    /// the radius query, reporting exactly why nothing could be searched.
    ///
    /// An `Ok` empty vector means the query ran and legitimately found no
    /// neighbours.
    pub fn try_find_within_radius(
        &self,
        code: &str,
        radius_miles: f64,
    ) -> SearchResult<Vec<&ZipFeature>> {
        let radius = RadiusMiles::new(radius_miles)?;
        let code = ZipCode::parse(code)?;
        let origin = self
            .catalog
            .lookup(code)
            .ok_or(SearchError::UnknownCode(code))?;
        Ok(self.neighbours(origin, radius))
    }

    /// Lenient facade over [`try_find_within_radius`](Self::try_find_within_radius):
    /// every validation failure (malformed code, unknown code, out-of-range
    /// radius) degrades to an empty collection, mirroring a UI that simply
    /// declines to search on bad input.
    pub fn find_within_radius(&self, code: &str, radius_miles: f64) -> Vec<&ZipFeature> {
        self.try_find_within_radius(code, radius_miles)
            .unwrap_or_default()
    }
}
