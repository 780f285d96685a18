//! Unit tests for stroll-route.
//!
//! Places sit on the equator one degree of longitude apart unless noted,
//! so each hop is ~111.19 km of great-circle distance.

#[cfg(test)]
mod helpers {
    use stroll_core::{Coordinate, LocatedPlace};

    pub fn place(id: &str, lat: f64, lon: f64) -> LocatedPlace {
        LocatedPlace::new(id, Coordinate::new(lat, lon))
    }

    pub fn equator_row() -> Vec<LocatedPlace> {
        vec![place("a", 0.0, 0.0), place("b", 0.0, 1.0), place("c", 0.0, 2.0)]
    }
}

// ── Providers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod provider {
    use stroll_core::{Coordinate, WalkConfig};

    use crate::{travel_minutes, GreatCircleProvider, RouteDistanceProvider, RouteError};

    #[test]
    fn pedestrian_is_inflated_great_circle() {
        let p = GreatCircleProvider::pedestrian(&WalkConfig::default()).unwrap();
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let d = p.distance_km(a, b).unwrap();
        assert!((d - 1.15 * a.great_circle_km(b)).abs() < 1e-9);
    }

    #[test]
    fn plain_is_uninflated() {
        let p = GreatCircleProvider::plain(&WalkConfig::default()).unwrap();
        assert_eq!(p.factor(), 1.0);
        assert_eq!(p.speed_kmh(), 5.0);
    }

    #[test]
    fn leg_time_uses_provider_speed() {
        let p = GreatCircleProvider::new(1.0, 4.0).unwrap();
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let leg = p.leg(a, b).unwrap();
        assert_eq!(leg.travel_minutes, travel_minutes(leg.distance_km, 4.0));
    }

    #[test]
    fn zero_speed_rejected() {
        assert!(matches!(GreatCircleProvider::new(1.0, 0.0), Err(RouteError::InvalidSpeed(_))));
        assert!(GreatCircleProvider::new(1.0, -3.0).is_err());
    }

    #[test]
    fn travel_minutes_rounds_up() {
        assert_eq!(travel_minutes(0.0, 5.0), 0);
        assert_eq!(travel_minutes(1.0, 5.0), 12);
        assert_eq!(travel_minutes(1.01, 5.0), 13);
        assert_eq!(travel_minutes(2.0, 4.0), 30);
    }
}

// ── LegMatrix ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod matrix {
    use stroll_core::Coordinate;

    use crate::{GreatCircleProvider, Leg, LegMatrix, RouteDistanceProvider, RouteError};

    #[test]
    fn answers_inserted_legs_only() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let mut m = LegMatrix::new();
        m.insert(a, b, Leg { distance_km: 2.5, travel_minutes: 30 });

        assert_eq!(m.leg(a, b).unwrap().travel_minutes, 30);
        assert_eq!(m.leg(a, a).unwrap(), Leg::ZERO);
        assert!(matches!(m.leg(b, a), Err(RouteError::MissingLeg { .. })));
    }

    #[test]
    fn precompute_matches_source_provider() {
        let points = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0), Coordinate::new(1.0, 1.0)];
        let p = GreatCircleProvider::new(1.15, 4.0).unwrap();
        let m = LegMatrix::precompute(&points, &p).unwrap();
        assert_eq!(m.len(), 9);
        for &from in &points {
            for &to in &points {
                assert_eq!(m.leg(from, to).unwrap(), p.leg(from, to).unwrap());
            }
        }
    }
}

// ── Metrics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use super::helpers::{equator_row, place};
    use crate::{aggregate, DwellTimes, GreatCircleProvider, Leg, Limits};

    fn provider() -> GreatCircleProvider {
        GreatCircleProvider::new(1.15, 4.0).unwrap()
    }

    #[test]
    fn single_stop_is_dwell_only() {
        let m = aggregate(&[place("a", 10.0, 10.0)], &DwellTimes::uniform(20), &provider()).unwrap();
        assert_eq!(m.total_distance_km, 0.0);
        assert_eq!(m.total_time_minutes, 20);
        assert_eq!(m.legs, vec![Leg::ZERO]);
    }

    #[test]
    fn empty_sequence() {
        let m = aggregate(&[], &DwellTimes::uniform(15), &provider()).unwrap();
        assert!(m.legs.is_empty());
        assert_eq!(m.total_time_minutes, 0);
    }

    #[test]
    fn totals_are_sums() {
        let dwell = DwellTimes::uniform(15).with("b", 40);
        let m = aggregate(&equator_row(), &dwell, &provider()).unwrap();

        assert_eq!(m.legs[0], Leg::ZERO);
        let dist: f64 = m.legs.iter().map(|l| l.distance_km).sum();
        assert!((m.total_distance_km - dist).abs() < 1e-9);
        assert!((m.total_distance_km - 2.0 * 111.19 * 1.15).abs() < 0.1, "got {}", m.total_distance_km);

        assert_eq!(m.dwell_minutes, vec![15, 40, 15]);
        assert_eq!(m.total_time_minutes, m.total_travel_minutes() + 70);
    }

    #[test]
    fn crawling_speed_saturates_instead_of_wrapping() {
        let crawl = GreatCircleProvider::new(1.15, 1e-6).unwrap();
        let m = aggregate(&equator_row(), &DwellTimes::uniform(15), &crawl).unwrap();

        assert_eq!(m.legs[1].travel_minutes, u32::MAX);
        assert_eq!(m.total_travel_minutes(), u32::MAX);
        assert_eq!(m.total_time_minutes, u32::MAX);
        assert!(!m.within(&Limits { max_duration_minutes: Some(600), ..Limits::default() }));
    }

    #[test]
    fn within_limits() {
        let m = aggregate(&equator_row(), &DwellTimes::uniform(0), &provider()).unwrap();
        assert!(m.within(&Limits::unbounded()));
        assert!(!m.within(&Limits { max_distance_km: Some(100.0), ..Limits::default() }));
        assert!(m.within(&Limits { max_distance_km: Some(300.0), ..Limits::default() }));
        assert!(!m.within(&Limits { max_duration_minutes: Some(60), ..Limits::default() }));
    }
}

// ── CandidateIndex ────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use stroll_core::Coordinate;

    use super::helpers::place;
    use crate::CandidateIndex;

    fn city() -> CandidateIndex {
        CandidateIndex::new(vec![
            place("near", 52.520, 13.405),
            place("mid", 52.530, 13.405),
            place("far", 52.600, 13.405),
        ])
    }

    #[test]
    fn nearest_and_k_nearest_order() {
        let idx = city();
        let origin = Coordinate::new(52.519, 13.405);
        assert_eq!(idx.nearest(origin).unwrap().id.as_str(), "near");
        let ids: Vec<_> = idx.k_nearest(origin, 2).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["near", "mid"]);
    }

    #[test]
    fn k_nearest_ranks_by_great_circle_at_high_latitude() {
        // At 60°N a degree of longitude is half a degree of latitude, so in
        // raw degrees `north` looks closer than `east`.
        let idx = CandidateIndex::new(vec![
            place("north", 60.0 + 1.67 / 111.195, 10.0),
            place("east", 60.0, 10.0 + 1.0 / (111.195 * 0.5)),
            place("far", 60.1, 10.0),
        ]);
        let origin = Coordinate::new(60.0, 10.0);

        assert_eq!(idx.nearest(origin).unwrap().id.as_str(), "east");
        let ids: Vec<_> = idx.k_nearest(origin, 2).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["east", "north"]);
        assert_eq!(idx.k_nearest(origin, 10).len(), 3);
        assert!(idx.k_nearest(origin, 0).is_empty());
    }

    #[test]
    fn radius_filters_by_great_circle() {
        let idx = city();
        let origin = Coordinate::new(52.520, 13.405);
        // mid is ~1.1 km away, far ~8.9 km.
        let ids: Vec<_> = idx.within_km(origin, 2.0).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["near", "mid"]);
    }

    #[test]
    fn empty_index() {
        let idx = CandidateIndex::new(vec![]);
        assert!(idx.is_empty());
        assert!(idx.nearest(Coordinate::new(0.0, 0.0)).is_none());
    }
}

// ── Async provider ────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "http"))]
mod async_provider {
    use async_trait::async_trait;
    use stroll_core::Coordinate;

    use crate::{AsyncRouteDistanceProvider, Leg, RouteDistanceProvider, RouteResult};

    /// One kilometre and ten minutes for every leg.
    struct FlatService;

    #[async_trait]
    impl AsyncRouteDistanceProvider for FlatService {
        async fn leg(&self, _from: Coordinate, _to: Coordinate) -> RouteResult<Leg> {
            Ok(Leg { distance_km: 1.0, travel_minutes: 10 })
        }
    }

    #[tokio::test]
    async fn default_matrix_feeds_sync_trait() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let m = FlatService.matrix(&[a, b]).await.unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.leg(a, b).unwrap().travel_minutes, 10);
        assert_eq!(m.leg(b, b).unwrap(), Leg::ZERO);
    }
}
