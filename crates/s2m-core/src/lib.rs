//! `s2m-core` — foundational types for the sndlib → MatPlanWDM converter.
//!
//! This crate is a dependency of every other `s2m-*` crate.  It has no
//! `s2m-*` dependencies and a single external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`geo`]    | `GeoPoint`, `haversine_km`                                |
//! | [`ids`]    | `NodeIndex`, `LinkIndex`                                  |
//! | [`config`] | `MatPlanConfig`, `MatchStrategy`                          |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `MatPlanConfig`.         |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MatPlanConfig, MatchStrategy, contains_match};
pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, haversine_km};
pub use ids::{LinkIndex, NodeIndex};
