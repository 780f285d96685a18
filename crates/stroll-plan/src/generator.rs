//! End-to-end path generation.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use stroll_core::{LocatedPlace, Place, PlaceId, WalkConfig};
use stroll_route::{DwellTimes, GreatCircleProvider, Limits, RouteDistanceProvider};

use crate::{sequence, trim, GeneratedPath, PlanError, PlanResult};

// ── Constraints ───────────────────────────────────────────────────────────────

/// Per-request generation parameters, as sent by the request layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Constraints {
    pub start_place_id:          Option<PlaceId>,
    pub end_place_id:            Option<PlaceId>,
    pub max_duration_minutes:    Option<u32>,
    pub max_distance_km:         Option<f64>,
    /// `None` keeps the provider's own speed.
    pub walking_speed_kmh:       Option<f64>,
    /// `None` uses `WalkConfig::default_dwell_minutes`.
    pub dwell_minutes_per_place: Option<u32>,
    /// Per-place dwell overrides.
    pub dwell_overrides:         FxHashMap<PlaceId, u32>,
}

impl Constraints {
    pub fn limits(&self) -> Limits {
        Limits {
            max_duration_minutes: self.max_duration_minutes,
            max_distance_km:      self.max_distance_km,
        }
    }

    pub fn dwell_times(&self, config: &WalkConfig) -> DwellTimes {
        let mut dwell = DwellTimes::uniform(
            self.dwell_minutes_per_place.unwrap_or(config.default_dwell_minutes),
        );
        for (place, &minutes) in &self.dwell_overrides {
            dwell.set(place.clone(), minutes);
        }
        dwell
    }
}

// ── PathGenerator ─────────────────────────────────────────────────────────────

/// Runs the extract → sequence → trim → assemble pipeline.
///
/// # Type parameter
///
/// `P` is the leg estimator.  [`PathGenerator::pedestrian`] builds the
/// default haversine-based generator; pass a [`stroll_route::LegMatrix`] to
/// plan over distances fetched from a routing service.
pub struct PathGenerator<P: RouteDistanceProvider> {
    config:   WalkConfig,
    provider: P,
}

impl PathGenerator<GreatCircleProvider> {
    /// Pedestrian-adjusted distances at sightseeing pace.
    ///
    /// Fails with [`stroll_core::CoreError::Config`] when `config` does not
    /// pass [`WalkConfig::validate`].
    pub fn pedestrian(config: WalkConfig) -> PlanResult<Self> {
        config.validate()?;
        let provider = GreatCircleProvider::pedestrian(&config)?;
        Ok(Self { config, provider })
    }
}

impl<P: RouteDistanceProvider> PathGenerator<P> {
    pub fn new(config: WalkConfig, provider: P) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate one path.
    ///
    /// Any candidate with unusable geometry fails the whole request with
    /// the offending place id.  Tight limits are not an error: the result
    /// carries `constraints_satisfied == false` instead.
    ///
    /// # Errors
    ///
    /// * [`PlanError::InvalidSpeed`] for a non-positive `walking_speed_kmh`.
    /// * [`PlanError::Core`] for a candidate whose geometry cannot be read.
    /// * [`PlanError::DuplicatePlace`] when two candidates share an id.  Stops
    ///   are keyed by place id, so a repeated id would make the output
    ///   ambiguous; callers deduplicate the candidate list first.
    /// * [`PlanError::Route`] when the provider cannot answer a leg.
    pub fn generate(&self, places: &[Place], constraints: &Constraints) -> PlanResult<GeneratedPath> {
        let provider = match constraints.walking_speed_kmh {
            Some(speed) if !(speed.is_finite() && speed > 0.0) => {
                return Err(PlanError::InvalidSpeed(speed));
            }
            Some(speed) => self.provider.at_speed(speed)?,
            None => Box::new(&self.provider) as Box<dyn RouteDistanceProvider + '_>,
        };

        if places.is_empty() {
            return Ok(GeneratedPath::empty());
        }

        let located = locate_all(places)?;
        let ordered = sequence(
            located,
            constraints.start_place_id.as_ref(),
            constraints.end_place_id.as_ref(),
            &*provider,
        )?;

        let trimmed = trim(
            ordered,
            &constraints.dwell_times(&self.config),
            &constraints.limits(),
            &*provider,
        )?;

        tracing::debug!(
            candidates = places.len(),
            stops = trimmed.sequence.len(),
            total_distance_km = trimmed.metrics.total_distance_km,
            total_time_minutes = trimmed.metrics.total_time_minutes,
            satisfied = trimmed.satisfied,
            "generated walking path"
        );

        Ok(GeneratedPath::from_metrics(&trimmed.sequence, &trimmed.metrics, trimmed.satisfied))
    }

    /// Generate many independent paths on the Rayon pool.
    ///
    /// Results are returned in request order.
    #[cfg(feature = "parallel")]
    pub fn generate_many(
        &self,
        requests: &[(Vec<Place>, Constraints)],
    ) -> Vec<PlanResult<GeneratedPath>> {
        use rayon::prelude::*;

        requests
            .par_iter()
            .map(|(places, constraints)| self.generate(places, constraints))
            .collect()
    }
}

/// Extract every coordinate, rejecting bad geometry and repeated ids.
fn locate_all(places: &[Place]) -> PlanResult<Vec<LocatedPlace>> {
    let mut seen: FxHashSet<&PlaceId> = FxHashSet::default();
    places
        .iter()
        .map(|place| {
            if !seen.insert(&place.id) {
                return Err(PlanError::DuplicatePlace(place.id.clone()));
            }
            Ok(place.locate()?)
        })
        .collect()
}
