//! `zn-core` — foundational types for the `zipnear` radius-search engine.
//!
//! This crate is a dependency of every other `zn-*` crate.  It intentionally
//! has no `zn-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`geo`]   | `GeoPoint`, haversine distance in miles                 |
//! | [`code`]  | `ZipCode` — validated five-digit postal code            |
//! | [`ids`]   | `FeatureId` — typed index into catalog storage          |
//! | [`error`] | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |
//!           | Required by `zn-catalog`.                                 |

pub mod code;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use code::ZipCode;
pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_MILES, GeoPoint};
pub use ids::FeatureId;
