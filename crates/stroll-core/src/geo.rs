//! Geographic coordinate type and great-circle distance.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Candidate pools are small
//! (tens of places) so double precision costs nothing and keeps leg
//! distances stable to the metre across repeated aggregation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude:  f64,
    pub longitude: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// `true` if latitude is in [-90, 90] and longitude in [-180, 180].
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric, and exactly zero for identical points.
    pub fn great_circle_km(self, other: Coordinate) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Straight-line distance inflated by `factor` to approximate the
    /// length of a real walking route.
    #[inline]
    pub fn pedestrian_km(self, other: Coordinate, factor: f64) -> f64 {
        self.great_circle_km(other) * factor
    }

    /// `[lon, lat]`, the axis order used by WKT, GeoJSON and OSRM.
    #[inline]
    pub fn lon_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl From<geo_types::Point<f64>> for Coordinate {
    fn from(p: geo_types::Point<f64>) -> Self {
        Self::new(p.y(), p.x())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
