//! Point geometry as supplied by the place catalogue, and coordinate
//! extraction.
//!
//! Two encodings are accepted, both longitude-first:
//!
//! | Encoding     | Example                                              |
//! |--------------|------------------------------------------------------|
//! | WKT          | `"POINT(13.405 52.52)"` (optionally `SRID=4326;…`)   |
//! | point object | `{"type": "Point", "coordinates": [13.405, 52.52]}`  |
//!
//! Anything else deserialises into [`Geometry::Unrecognized`] so one broken
//! row never fails a whole candidate list; the failure is reported per place
//! by [`Geometry::extract`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wkt::TryFromWkt;

use crate::{CoreError, CoreResult, Coordinate, PlaceId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    Wkt(String),
    Object(PointObject),
    Unrecognized(Value),
}

/// GeoJSON-like `{type, coordinates}` object.  Coordinates are kept as raw
/// JSON values so non-numeric entries are reported, not rejected by serde.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointObject {
    #[serde(rename = "type")]
    pub kind:        String,
    pub coordinates: Vec<Value>,
}

impl Geometry {
    /// Point object for `(lon, lat)`.
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Geometry::Object(PointObject {
            kind:        "Point".to_owned(),
            coordinates: vec![Value::from(longitude), Value::from(latitude)],
        })
    }

    /// WKT text, stored verbatim.
    pub fn wkt(text: impl Into<String>) -> Self {
        Geometry::Wkt(text.into())
    }

    /// Parse into a [`Coordinate`].
    ///
    /// `place_id` is only used to label the error.
    pub fn extract(&self, place_id: &PlaceId) -> CoreResult<Coordinate> {
        let coord = match self {
            Geometry::Wkt(text) => parse_wkt_point(place_id, text)?,
            Geometry::Object(obj) => parse_point_object(place_id, obj)?,
            Geometry::Unrecognized(v) => {
                return Err(CoreError::geometry(
                    place_id,
                    format!("unsupported geometry representation {v}"),
                ));
            }
        };

        if !coord.latitude.is_finite() || !coord.longitude.is_finite() || !coord.is_valid() {
            return Err(CoreError::geometry(
                place_id,
                format!("coordinate {coord} is out of range"),
            ));
        }
        Ok(coord)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_wkt_point(place_id: &PlaceId, text: &str) -> CoreResult<Coordinate> {
    let text = text.trim();
    // PostGIS EWKT prefix, e.g. "SRID=4326;POINT(…)".
    let body = match text.split_once(';') {
        Some((srid, rest)) if srid.trim_start().to_ascii_uppercase().starts_with("SRID=") => rest,
        _ => text,
    };

    // Z, M and ZM points carry more than two ordinates.
    let body = body.trim_start();
    if let Some(tag) = body.get(..5).filter(|t| t.eq_ignore_ascii_case("POINT")) {
        let dims = body[tag.len()..].split('(').next().unwrap_or_default().trim();
        if !dims.is_empty() && !dims.eq_ignore_ascii_case("EMPTY") {
            return Err(CoreError::geometry(
                place_id,
                format!("expected a 2D point, got POINT {dims} in {text:?}"),
            ));
        }
    }

    geo_types::Point::<f64>::try_from_wkt_str(body)
        .map(Coordinate::from)
        .map_err(|e| CoreError::geometry(place_id, format!("invalid WKT point {text:?}: {e}")))
}

fn parse_point_object(place_id: &PlaceId, obj: &PointObject) -> CoreResult<Coordinate> {
    if obj.kind != "Point" {
        return Err(CoreError::geometry(
            place_id,
            format!("expected geometry type \"Point\", got {:?}", obj.kind),
        ));
    }

    let [lon, lat] = obj.coordinates.as_slice() else {
        return Err(CoreError::geometry(
            place_id,
            format!("expected 2 coordinates, got {}", obj.coordinates.len()),
        ));
    };

    let number = |v: &Value| {
        v.as_f64().ok_or_else(|| {
            CoreError::geometry(place_id, format!("coordinate {v} is not a number"))
        })
    };

    Ok(Coordinate::new(number(lat)?, number(lon)?))
}
