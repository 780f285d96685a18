//! Unit tests for stroll-core primitives.

#[cfg(test)]
mod geo {
    use crate::Coordinate;

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(52.5190, 13.4010);
        assert_eq!(p.great_circle_km(p), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = Coordinate::new(48.8566, 2.3522);
        let b = Coordinate::new(52.5200, 13.4050);
        assert_eq!(a.great_circle_km(b), b.great_circle_km(a));
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let d = a.great_circle_km(b);
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn pedestrian_inflates_by_factor() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let expected = a.great_circle_km(b) * 1.15;
        assert!((a.pedestrian_km(b, 1.15) - expected).abs() < 1e-9);
    }

    #[test]
    fn validity_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
    }
}

#[cfg(test)]
mod geometry {
    use serde_json::json;

    use crate::{CoreError, Geometry, PlaceId};

    fn id() -> PlaceId {
        PlaceId::from("p-1")
    }

    #[test]
    fn wkt_is_lon_first() {
        let c = Geometry::wkt("POINT(13.4010 52.5190)").extract(&id()).unwrap();
        assert_eq!(c.longitude, 13.4010);
        assert_eq!(c.latitude, 52.5190);
    }

    #[test]
    fn ewkt_srid_prefix_is_accepted() {
        let c = Geometry::wkt("SRID=4326;POINT(1 2)").extract(&id()).unwrap();
        assert_eq!((c.latitude, c.longitude), (2.0, 1.0));
    }

    #[test]
    fn point_object_is_lon_first() {
        let g: Geometry = serde_json::from_value(json!({
            "type": "Point",
            "coordinates": [2.3522, 48.8566]
        }))
        .unwrap();
        let c = g.extract(&id()).unwrap();
        assert_eq!((c.latitude, c.longitude), (48.8566, 2.3522));
    }

    #[test]
    fn string_deserialises_as_wkt() {
        let g: Geometry = serde_json::from_value(json!("POINT(1 2)")).unwrap();
        assert!(matches!(g, Geometry::Wkt(_)));
    }

    #[test]
    fn malformed_wkt_names_place() {
        let err = Geometry::wkt("POINT(1)").extract(&id()).unwrap_err();
        match err {
            CoreError::GeometryParse { place_id, .. } => assert_eq!(place_id, id()),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn non_point_wkt_rejected() {
        assert!(Geometry::wkt("LINESTRING(0 0, 1 1)").extract(&id()).is_err());
    }

    #[test]
    fn wrong_coordinate_count_rejected() {
        let g: Geometry =
            serde_json::from_value(json!({"type": "Point", "coordinates": [1.0, 2.0, 3.0]}))
                .unwrap();
        assert!(g.extract(&id()).is_err());
    }

    #[test]
    fn three_and_four_ordinate_wkt_rejected() {
        for text in ["POINT Z(1 2 3)", "POINT M (1 2 3)", "point zm(1 2 3 4)", "POINTZ(1 2 3)", "POINT(1 2 3)"] {
            let err = Geometry::wkt(text).extract(&id()).unwrap_err();
            assert!(matches!(err, CoreError::GeometryParse { .. }), "{text}");
        }
        assert!(Geometry::wkt("POINT (1 2)").extract(&id()).is_ok());
    }

    #[test]
    fn non_numeric_coordinate_rejected() {
        let g: Geometry =
            serde_json::from_value(json!({"type": "Point", "coordinates": ["a", 2.0]})).unwrap();
        assert!(g.extract(&id()).is_err());
    }

    #[test]
    fn wrong_type_rejected() {
        let g: Geometry =
            serde_json::from_value(json!({"type": "Polygon", "coordinates": [1.0, 2.0]}))
                .unwrap();
        assert!(g.extract(&id()).is_err());
    }

    #[test]
    fn unrecognised_value_rejected() {
        let g: Geometry = serde_json::from_value(json!(42)).unwrap();
        assert!(matches!(g, Geometry::Unrecognized(_)));
        assert!(g.extract(&id()).is_err());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(Geometry::point(0.0, 95.0).extract(&id()).is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{WalkConfig, WalkingPace};

    #[test]
    fn defaults_match_legacy_constants() {
        let c = WalkConfig::default();
        assert_eq!(c.pedestrian_factor, 1.15);
        assert_eq!(c.default_dwell_minutes, 15);
        assert_eq!(c.buffer_minutes, 15);
        assert_eq!(c.max_place_count, 20);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = WalkConfig::from_json_str(r#"{"buffer_minutes": 5}"#).unwrap();
        assert_eq!(c.buffer_minutes, 5);
        assert_eq!(c.default_dwell_minutes, 15);
    }

    #[test]
    fn non_positive_speed_rejected() {
        assert!(WalkConfig::from_json_str(r#"{"plain_speed_kmh": 0}"#).is_err());
    }

    #[test]
    fn pace_presets() {
        let c = WalkConfig::default();
        assert_eq!(WalkingPace::Plain.speed_kmh(&c), 5.0);
        assert_eq!(WalkingPace::Sightseeing.speed_kmh(&c), 4.0);
        assert_eq!(WalkingPace::Custom(3.2).speed_kmh(&c), 3.2);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_places_reader, PlaceId};

    #[test]
    fn wkt_column() {
        let csv = "id,geometry\na,POINT(1 2)\nb,POINT(3 4)\n";
        let places = load_places_reader(Cursor::new(csv)).unwrap();
        assert_eq!(places.len(), 2);
        let b = places[1].locate().unwrap();
        assert_eq!(b.id, PlaceId::from("b"));
        assert_eq!((b.coordinate.latitude, b.coordinate.longitude), (4.0, 3.0));
    }

    #[test]
    fn lon_lat_columns() {
        let csv = "id,lon,lat\na, 13.4 , 52.5\n";
        let places = load_places_reader(Cursor::new(csv)).unwrap();
        let a = places[0].locate().unwrap();
        assert_eq!((a.coordinate.latitude, a.coordinate.longitude), (52.5, 13.4));
    }

    #[test]
    fn missing_location_is_parse_error() {
        let csv = "id,lon,lat\na,,\n";
        assert!(load_places_reader(Cursor::new(csv)).is_err());
    }
}
