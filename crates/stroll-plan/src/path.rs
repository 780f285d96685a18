//! Generated path: ordered stops plus totals.
//!
//! Serialised in the camelCase shape the persistence layer stores:
//!
//! ```json
//! {"stops": [{"placeId": "a", "order": 0, "dwellTimeMinutes": 15,
//!             "distanceFromPrevious": 0.0, "travelTimeFromPrevious": 0}],
//!  "totalDistanceKm": 0.0, "totalTimeMinutes": 15, "constraintsSatisfied": true}
//! ```

use serde::Serialize;

use stroll_core::{LocatedPlace, PlaceId};
use stroll_route::PathMetrics;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub place_id:                  PlaceId,
    /// 0-based, contiguous.
    pub order:                     u32,
    pub dwell_time_minutes:        u32,
    /// Kilometres; zero for stop 0.
    pub distance_from_previous:    f64,
    /// Minutes; zero for stop 0.
    pub travel_time_from_previous: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPath {
    pub stops:                 Vec<Stop>,
    pub total_distance_km:     f64,
    pub total_time_minutes:    u32,
    /// `false` when trimming reached two stops without fitting the limits.
    pub constraints_satisfied: bool,
}

impl GeneratedPath {
    pub fn empty() -> Self {
        Self {
            stops:                 Vec::new(),
            total_distance_km:     0.0,
            total_time_minutes:    0,
            constraints_satisfied: true,
        }
    }

    /// Assemble stops from a sequence and the metrics computed for it.
    ///
    /// `metrics` must have been aggregated over exactly `sequence`.
    pub fn from_metrics(
        sequence:  &[LocatedPlace],
        metrics:   &PathMetrics,
        satisfied: bool,
    ) -> Self {
        debug_assert_eq!(sequence.len(), metrics.legs.len());

        let stops = sequence
            .iter()
            .zip(metrics.legs.iter().zip(&metrics.dwell_minutes))
            .enumerate()
            .map(|(order, (place, (leg, &dwell)))| Stop {
                place_id:                  place.id.clone(),
                order:                     order as u32,
                dwell_time_minutes:        dwell,
                distance_from_previous:    leg.distance_km,
                travel_time_from_previous: leg.travel_minutes,
            })
            .collect();

        Self {
            stops,
            total_distance_km:     metrics.total_distance_km,
            total_time_minutes:    metrics.total_time_minutes,
            constraints_satisfied: satisfied,
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn place_ids(&self) -> impl Iterator<Item = &PlaceId> + '_ {
        self.stops.iter().map(|s| &s.place_id)
    }
}
