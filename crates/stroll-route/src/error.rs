//! Routing-subsystem error type.

use thiserror::Error;

use stroll_core::{CoreError, Coordinate};

/// Errors produced by `stroll-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("walking speed must be positive, got {0} km/h")]
    InvalidSpeed(f64),

    #[error("no leg known from {from} to {to}")]
    MissingLeg { from: Coordinate, to: Coordinate },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("routing service error: {0}")]
    Upstream(String),

    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
