//! Spatial index over candidate places.
//!
//! The sequencer is O(n²) in the candidate count, so callers keep pools to
//! tens of places.  `CandidateIndex` is how they get there: an R-tree (via
//! `rstar`) over `[lat, lon]` that answers nearest, k-nearest and
//! radius queries around a starting point.
//!
//! The tree ranks in degree space, which stretches east-west distances
//! away from the equator.  Every query therefore finishes with a haversine
//! pass, so results are ordered by great-circle distance.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use stroll_core::{Coordinate, LocatedPlace};

/// Kilometres per degree of latitude on the haversine sphere.
const KM_PER_DEG_LAT: f64 = 111.195;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct CandidateEntry {
    point: [f64; 2], // [lat, lon]
    slot:  usize,
}

impl RTreeObject for CandidateEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CandidateEntry {
    /// Squared Euclidean distance in degree space.  Only used to find
    /// candidates; callers re-rank by haversine.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── CandidateIndex ────────────────────────────────────────────────────────────

pub struct CandidateIndex {
    places: Vec<LocatedPlace>,
    tree:   RTree<CandidateEntry>,
}

impl CandidateIndex {
    /// Bulk-load the index.  O(n log n).
    pub fn new(places: Vec<LocatedPlace>) -> Self {
        let entries: Vec<CandidateEntry> = places
            .iter()
            .enumerate()
            .map(|(slot, p)| CandidateEntry {
                point: [p.coordinate.latitude, p.coordinate.longitude],
                slot,
            })
            .collect();
        Self { places, tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Closest candidate to `origin`, or `None` for an empty index.
    pub fn nearest(&self, origin: Coordinate) -> Option<&LocatedPlace> {
        self.k_nearest(origin, 1).into_iter().next()
    }

    /// Up to `k` candidates, nearest first by great-circle distance.
    ///
    /// The degree-space k nearest bound the answer: the k-th of them sets a
    /// radius that every true k-nearest candidate must fall within.
    pub fn k_nearest(&self, origin: Coordinate, k: usize) -> Vec<&LocatedPlace> {
        if k == 0 {
            return Vec::new();
        }
        let radius_km = self
            .tree
            .nearest_neighbor_iter(&[origin.latitude, origin.longitude])
            .take(k)
            .map(|e| origin.great_circle_km(self.places[e.slot].coordinate))
            .fold(0.0_f64, f64::max);

        let mut hits = self.within_km(origin, radius_km);
        hits.truncate(k);
        hits
    }

    /// Every candidate within `radius_km` great-circle distance of `origin`,
    /// nearest first.
    pub fn within_km(&self, origin: Coordinate, radius_km: f64) -> Vec<&LocatedPlace> {
        let half_lat = radius_km / KM_PER_DEG_LAT;
        // Widest longitude span is at the box edge farthest from the equator.
        let edge_lat = (origin.latitude.abs() + half_lat).min(90.0);
        let cos_lat = edge_lat.to_radians().cos().max(1e-6);
        let half_lon = (half_lat / cos_lat).min(180.0);

        let envelope = AABB::from_corners(
            [origin.latitude - half_lat, origin.longitude - half_lon],
            [origin.latitude + half_lat, origin.longitude + half_lon],
        );

        let mut hits: Vec<(f64, &LocatedPlace)> = self
            .tree
            .locate_in_envelope(&envelope)
            .map(|e| &self.places[e.slot])
            .map(|p| (origin.great_circle_km(p.coordinate), p))
            .filter(|(d, _)| *d <= radius_km)
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.into_iter().map(|(_, p)| p).collect()
    }

    pub fn into_places(self) -> Vec<LocatedPlace> {
        self.places
    }
}
