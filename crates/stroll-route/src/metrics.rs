//! Path metrics aggregation.
//!
//! For a sequence `s0, s1, …, sn` the aggregator computes one [`Leg`] per
//! stop: `Leg::ZERO` for `s0`, and `provider.leg(s(i-1), si)` for the rest.
//!
//! ```text
//! total_distance_km  = Σ legs.distance_km
//! total_time_minutes = Σ legs.travel_minutes + Σ dwell minutes
//! ```

use rustc_hash::FxHashMap;
use serde::Serialize;

use stroll_core::{LocatedPlace, PlaceId};

use crate::{Leg, RouteDistanceProvider, RouteResult};

// ── DwellTimes ────────────────────────────────────────────────────────────────

/// Planned minutes spent at each stop: a default plus per-place overrides.
#[derive(Clone, Debug, Default)]
pub struct DwellTimes {
    default_minutes: u32,
    overrides:       FxHashMap<PlaceId, u32>,
}

impl DwellTimes {
    /// Every stop dwells for `minutes`.
    pub fn uniform(minutes: u32) -> Self {
        Self { default_minutes: minutes, overrides: FxHashMap::default() }
    }

    /// Builder-style override for one place.
    pub fn with(mut self, place: impl Into<PlaceId>, minutes: u32) -> Self {
        self.set(place, minutes);
        self
    }

    pub fn set(&mut self, place: impl Into<PlaceId>, minutes: u32) {
        self.overrides.insert(place.into(), minutes);
    }

    #[inline]
    pub fn minutes_for(&self, place: &PlaceId) -> u32 {
        self.overrides.get(place).copied().unwrap_or(self.default_minutes)
    }

    pub fn default_minutes(&self) -> u32 {
        self.default_minutes
    }
}

// ── Limits ────────────────────────────────────────────────────────────────────

/// Caller-supplied ceilings.  `None` means unconstrained.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Limits {
    pub max_duration_minutes: Option<u32>,
    pub max_distance_km:      Option<f64>,
}

impl Limits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_duration_minutes.is_none() && self.max_distance_km.is_none()
    }
}

// ── PathMetrics ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathMetrics {
    /// One leg per stop; `legs[0]` is always `Leg::ZERO`.
    pub legs:               Vec<Leg>,
    /// Dwell minutes per stop, parallel to `legs`.
    pub dwell_minutes:      Vec<u32>,
    pub total_distance_km:  f64,
    pub total_time_minutes: u32,
}

impl PathMetrics {
    /// `true` if neither ceiling in `limits` is exceeded.
    pub fn within(&self, limits: &Limits) -> bool {
        let duration_ok = limits
            .max_duration_minutes
            .is_none_or(|max| self.total_time_minutes <= max);
        let distance_ok = limits
            .max_distance_km
            .is_none_or(|max| self.total_distance_km <= max);
        duration_ok && distance_ok
    }

    pub fn total_travel_minutes(&self) -> u32 {
        saturating_sum(self.legs.iter().map(|l| l.travel_minutes))
    }

    pub fn total_dwell_minutes(&self) -> u32 {
        saturating_sum(self.dwell_minutes.iter().copied())
    }
}

/// Minute totals clamp at `u32::MAX` rather than wrap.
fn saturating_sum(minutes: impl Iterator<Item = u32>) -> u32 {
    minutes.fold(0, u32::saturating_add)
}

/// Compute per-stop legs and path totals for `sequence`.
///
/// A sequence of length ≤ 1 has zero distance and a total time equal to its
/// dwell time.
pub fn aggregate<P: RouteDistanceProvider + ?Sized>(
    sequence: &[LocatedPlace],
    dwell:    &DwellTimes,
    provider: &P,
) -> RouteResult<PathMetrics> {
    let mut legs = Vec::with_capacity(sequence.len());
    let mut dwell_minutes = Vec::with_capacity(sequence.len());

    for (i, stop) in sequence.iter().enumerate() {
        let leg = match i {
            0 => Leg::ZERO,
            _ => provider.leg(sequence[i - 1].coordinate, stop.coordinate)?,
        };
        legs.push(leg);
        dwell_minutes.push(dwell.minutes_for(&stop.id));
    }

    let total_distance_km: f64 = legs.iter().map(|l| l.distance_km).sum();
    let total_time_minutes = saturating_sum(legs.iter().map(|l| l.travel_minutes))
        .saturating_add(saturating_sum(dwell_minutes.iter().copied()));

    tracing::trace!(
        stops = sequence.len(),
        total_distance_km,
        total_time_minutes,
        "aggregated path metrics"
    );

    Ok(PathMetrics { legs, dwell_minutes, total_distance_km, total_time_minutes })
}
