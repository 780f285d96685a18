//! Greedy nearest-neighbour ordering with optional start/end anchors.
//!
//! # Algorithm
//!
//! 1. Pools of two or fewer candidates are returned untouched.
//! 2. A start anchor found in the pool becomes stop 0.
//! 3. Repeatedly append the pool member closest (by provider distance) to
//!    the last placed stop.  With no start anchor the first pick is simply
//!    the first pool member.  Ties go to the earliest pool position.
//! 4. An end anchor found in the result is moved to the last position.
//!
//! O(n²) distance evaluations.  This is a heuristic, not a shortest
//! Hamiltonian path; pools are kept to tens of places.

use stroll_core::{Coordinate, LocatedPlace, PlaceId};
use stroll_route::{RouteDistanceProvider, RouteResult};

/// Order `candidates` into a visiting sequence.
///
/// The output is always a permutation of the input.  Anchors that are not
/// among the candidates are ignored.
pub fn sequence<P: RouteDistanceProvider + ?Sized>(
    candidates: Vec<LocatedPlace>,
    start:      Option<&PlaceId>,
    end:        Option<&PlaceId>,
    provider:   &P,
) -> RouteResult<Vec<LocatedPlace>> {
    if candidates.len() <= 2 {
        return Ok(candidates);
    }

    let mut pool = candidates;
    let mut ordered = Vec::with_capacity(pool.len());

    if let Some(pos) = start.and_then(|id| position_of(&pool, id)) {
        ordered.push(pool.remove(pos));
    }

    while !pool.is_empty() {
        let next = match ordered.last() {
            None => 0,
            Some(last) => nearest_in(&pool, last.coordinate, provider)?,
        };
        ordered.push(pool.remove(next));
    }

    if let Some(pos) = end.and_then(|id| position_of(&ordered, id)) {
        if pos != ordered.len() - 1 {
            let anchor = ordered.remove(pos);
            ordered.push(anchor);
        }
    }

    Ok(ordered)
}

fn position_of(places: &[LocatedPlace], id: &PlaceId) -> Option<usize> {
    places.iter().position(|p| &p.id == id)
}

/// Index of the pool member closest to `from`; first minimum wins.
fn nearest_in<P: RouteDistanceProvider + ?Sized>(
    pool:     &[LocatedPlace],
    from:     Coordinate,
    provider: &P,
) -> RouteResult<usize> {
    let mut best = 0;
    let mut best_km = f64::INFINITY;
    for (i, candidate) in pool.iter().enumerate() {
        let km = provider.distance_km(from, candidate.coordinate)?;
        if km < best_km {
            best = i;
            best_km = km;
        }
    }
    Ok(best)
}
