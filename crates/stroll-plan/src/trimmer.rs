//! Shorten a sequence until it fits its distance/duration limits.
//!
//! The first and last stops are never removed.  Interior stops are dropped
//! one at a time starting from the one just before the last stop, with
//! metrics recomputed after each removal, until the limits hold or only the
//! two endpoints remain.
//!
//! Removal order is positional: the stop contributing the most distance is
//! not preferred.  A path that still exceeds its limits at two stops is
//! returned as a best-effort result with `satisfied == false`.

use stroll_core::{LocatedPlace, PlaceId};
use stroll_route::{aggregate, DwellTimes, Limits, PathMetrics, RouteDistanceProvider, RouteResult};

#[derive(Clone, Debug)]
pub struct Trimmed {
    pub sequence:  Vec<LocatedPlace>,
    pub metrics:   PathMetrics,
    /// `true` if `metrics` is within the limits.
    pub satisfied: bool,
    /// Places dropped, in removal order.
    pub removed:   Vec<PlaceId>,
}

pub fn trim<P: RouteDistanceProvider + ?Sized>(
    sequence: Vec<LocatedPlace>,
    dwell:    &DwellTimes,
    limits:   &Limits,
    provider: &P,
) -> RouteResult<Trimmed> {
    let mut metrics = aggregate(&sequence, dwell, provider)?;
    let mut satisfied = metrics.within(limits);
    let mut current = sequence;
    let mut removed = Vec::new();

    while !satisfied && current.len() > 2 {
        let last = current.len() - 1;
        removed.push(current[last - 1].id.clone());

        let shorter: Vec<LocatedPlace> = current[..last - 1]
            .iter()
            .chain(std::iter::once(&current[last]))
            .cloned()
            .collect();

        metrics = aggregate(&shorter, dwell, provider)?;
        satisfied = metrics.within(limits);
        current = shorter;
    }

    if !removed.is_empty() {
        tracing::debug!(
            removed = removed.len(),
            kept = current.len(),
            satisfied,
            total_distance_km = metrics.total_distance_km,
            total_time_minutes = metrics.total_time_minutes,
            "trimmed path to fit limits"
        );
    }

    Ok(Trimmed { sequence: current, metrics, satisfied, removed })
}
