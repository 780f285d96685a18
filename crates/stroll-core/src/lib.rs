//! `stroll-core`: foundational types for the `stroll` walking-path engine.
//!
//! This crate is a dependency of every other `stroll-*` crate.  It has no
//! `stroll-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `PlaceId`                                               |
//! | [`geo`]       | `Coordinate`, haversine distance                        |
//! | [`geometry`]  | `Geometry` (WKT / GeoJSON-like point), extraction       |
//! | [`place`]     | `Place`, `LocatedPlace`                                 |
//! | [`pace`]      | `WalkingPace` presets                                   |
//! | [`config`]    | `WalkConfig`: tunable constants                         |
//! | [`loader`]    | CSV candidate loading                                   |
//! | [`error`]     | `CoreError`, `CoreResult`                               |

pub mod config;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod ids;
pub mod loader;
pub mod pace;
pub mod place;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WalkConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, EARTH_RADIUS_KM};
pub use geometry::Geometry;
pub use ids::PlaceId;
pub use loader::{load_places_csv, load_places_reader};
pub use pace::WalkingPace;
pub use place::{LocatedPlace, Place};
