//! `stroll-route`: leg estimation, path metrics, and candidate indexing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`provider`] | `RouteDistanceProvider` trait, `Leg`, `GreatCircleProvider`  |
//! | [`time`]     | `travel_minutes`                                             |
//! | [`matrix`]   | `LegMatrix`: precomputed legs behind the sync trait          |
//! | [`metrics`]  | `aggregate`, `PathMetrics`, `DwellTimes`, `Limits`           |
//! | [`index`]    | `CandidateIndex` (R-tree) for capping candidate pools        |
//! | [`http`]     | `AsyncRouteDistanceProvider`, `OsrmFootClient` (`http` only) |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag   | Effect                                                        |
//! |--------|---------------------------------------------------------------|
//! | `http` | Enables the async external routing client via `reqwest`.      |

pub mod error;
pub mod index;
pub mod matrix;
pub mod metrics;
pub mod provider;
pub mod time;

#[cfg(feature = "http")]
pub mod http;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use index::CandidateIndex;
pub use matrix::LegMatrix;
pub use metrics::{aggregate, DwellTimes, Limits, PathMetrics};
pub use provider::{GreatCircleProvider, Leg, RouteDistanceProvider};
pub use time::travel_minutes;

#[cfg(feature = "http")]
pub use http::{AsyncRouteDistanceProvider, OsrmFootClient, OsrmFootClientParams};
