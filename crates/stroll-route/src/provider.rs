//! Leg estimation trait and default great-circle implementation.
//!
//! # Pluggability
//!
//! The sequencer, trimmer and metrics aggregator ask for legs through the
//! [`RouteDistanceProvider`] trait, so a deployment can substitute real
//! network distances without touching the planning code.  The default
//! [`GreatCircleProvider`] needs no I/O.  Data fetched asynchronously from an
//! external routing service is fed back in through
//! [`LegMatrix`](crate::LegMatrix), which implements this same sync trait.
//!
//! # Units
//!
//! Distances are kilometres (`f64`); travel times are whole minutes (`u32`),
//! always rounded up.

use serde::Serialize;

use stroll_core::{Coordinate, WalkConfig, WalkingPace};

use crate::{travel_minutes, RouteError, RouteResult};

// ── Leg ───────────────────────────────────────────────────────────────────────

/// Distance and walking time between two consecutive stops.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize)]
pub struct Leg {
    pub distance_km:    f64,
    pub travel_minutes: u32,
}

impl Leg {
    /// The implicit leg leading into the first stop of a path.
    pub const ZERO: Leg = Leg { distance_km: 0.0, travel_minutes: 0 };
}

// ── RouteDistanceProvider ─────────────────────────────────────────────────────

/// Pluggable leg estimator.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so independent generation requests
/// can share one provider across threads.
pub trait RouteDistanceProvider: Send + Sync {
    /// Walking distance and time from `from` to `to`.
    fn leg(&self, from: Coordinate, to: Coordinate) -> RouteResult<Leg>;

    /// Walking distance only.  The sequencer calls this O(n²) times.
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> RouteResult<f64> {
        self.leg(from, to).map(|leg| leg.distance_km)
    }

    /// Provider for a request walking at `speed_kmh`.
    ///
    /// Providers whose times come from measured data (e.g. a [`LegMatrix`]
    /// filled by a routing service) ignore the speed and return themselves.
    ///
    /// [`LegMatrix`]: crate::LegMatrix
    fn at_speed(&self, _speed_kmh: f64) -> RouteResult<Box<dyn RouteDistanceProvider + '_>> {
        Ok(Box::new(self))
    }
}

impl<P: RouteDistanceProvider + ?Sized> RouteDistanceProvider for &P {
    fn leg(&self, from: Coordinate, to: Coordinate) -> RouteResult<Leg> {
        (**self).leg(from, to)
    }

    fn distance_km(&self, from: Coordinate, to: Coordinate) -> RouteResult<f64> {
        (**self).distance_km(from, to)
    }

    fn at_speed(&self, speed_kmh: f64) -> RouteResult<Box<dyn RouteDistanceProvider + '_>> {
        (**self).at_speed(speed_kmh)
    }
}

// ── GreatCircleProvider ───────────────────────────────────────────────────────

/// Haversine distance scaled by a fixed inflation factor, walked at a fixed
/// speed.
///
/// | Constructor    | Factor                         | Speed                     |
/// |----------------|--------------------------------|---------------------------|
/// | `plain`        | 1.0                            | `plain_speed_kmh`         |
/// | `pedestrian`   | `pedestrian_factor` (1.15)     | `sightseeing_speed_kmh`   |
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GreatCircleProvider {
    factor:    f64,
    speed_kmh: f64,
}

impl GreatCircleProvider {
    /// Fails with [`RouteError::InvalidSpeed`] unless `speed_kmh > 0`.
    pub fn new(factor: f64, speed_kmh: f64) -> RouteResult<Self> {
        if !(speed_kmh.is_finite() && speed_kmh > 0.0) {
            return Err(RouteError::InvalidSpeed(speed_kmh));
        }
        Ok(Self { factor, speed_kmh })
    }

    /// Straight-line distance at the generic routing speed.
    pub fn plain(config: &WalkConfig) -> RouteResult<Self> {
        Self::new(1.0, WalkingPace::Plain.speed_kmh(config))
    }

    /// Pedestrian-adjusted distance at sightseeing pace.
    pub fn pedestrian(config: &WalkConfig) -> RouteResult<Self> {
        Self::new(config.pedestrian_factor, WalkingPace::Sightseeing.speed_kmh(config))
    }

    /// Same inflation factor, different speed.
    pub fn with_speed(self, speed_kmh: f64) -> RouteResult<Self> {
        Self::new(self.factor, speed_kmh)
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }
}

impl RouteDistanceProvider for GreatCircleProvider {
    fn leg(&self, from: Coordinate, to: Coordinate) -> RouteResult<Leg> {
        let distance_km = from.pedestrian_km(to, self.factor);
        Ok(Leg {
            distance_km,
            travel_minutes: travel_minutes(distance_km, self.speed_kmh),
        })
    }

    fn distance_km(&self, from: Coordinate, to: Coordinate) -> RouteResult<f64> {
        Ok(from.pedestrian_km(to, self.factor))
    }

    fn at_speed(&self, speed_kmh: f64) -> RouteResult<Box<dyn RouteDistanceProvider + '_>> {
        Ok(Box::new(self.with_speed(speed_kmh)?))
    }
}
