//! `zn-search` — spatial index and radius-query engine.
//!
//! Builds an immutable R-tree over every feature of a
//! [`ZipCatalog`](zn_catalog::ZipCatalog) once, then answers "all codes
//! within `r` miles of code `c`" queries by pruning the tree with a
//! conservative bounding envelope of the query disc and exact-filtering the
//! survivors by great-circle distance.
//!
//! # Query pipeline
//!
//! ```text
//! find_within_radius(code, miles)
//!   ① validate   — radius finite, 0 < r ≤ MAX_RADIUS_MILES; code is five
//!                  digits and present in the catalog
//!   ② envelope   — lat/lon box guaranteed to contain the query disc
//!   ③ prune      — R-tree envelope-intersection scan (coarse, no false
//!                  negatives)
//!   ④ filter     — haversine distance ≤ r, inclusive
//!   ⑤ exclude    — drop the origin feature by code equality
//! ```
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`index`]  | `TreeEntry`, R-tree bulk load                             |
//! | [`query`]  | `ZipSearch`, `RadiusMiles`, disc envelope                 |
//! | [`output`] | Copy-out helpers for the presentation layer               |
//! | [`error`]  | `SearchError`, `SearchResult<T>`                          |
//!
//! # Sharing
//!
//! [`ZipSearch`](query::ZipSearch) is `Send + Sync` and all query methods
//! take `&self`; any number of threads may query one instance without
//! locking.  To pick up a changed dataset, build a fresh `ZipSearch` and
//! swap the shared handle (e.g. an `Arc`) atomically; in-flight queries
//! keep the old index, none ever observe a partial one.

pub mod error;
pub mod index;
pub mod output;
pub mod query;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SearchError, SearchResult};
pub use output::{to_feature_collection, zip_code_line};
pub use query::{MAX_RADIUS_MILES, RadiusMiles, ZipSearch};
