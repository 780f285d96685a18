//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enums via
//! `#[from]`, so a geometry failure surfaces unchanged at the request layer.

use thiserror::Error;

use crate::PlaceId;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The place's geometry is neither a WKT point nor a point object, or
    /// its coordinates are malformed or out of range.
    #[error("cannot extract coordinates for place {place_id}: {reason}")]
    GeometryParse { place_id: PlaceId, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    pub(crate) fn geometry(place_id: &PlaceId, reason: impl Into<String>) -> Self {
        CoreError::GeometryParse {
            place_id: place_id.clone(),
            reason:   reason.into(),
        }
    }
}

/// Shorthand result type for `stroll-core`.
pub type CoreResult<T> = Result<T, CoreError>;
