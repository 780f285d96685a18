//! Precomputed legs keyed by coordinate pair.
//!
//! An external routing service answers asynchronously; the planner is
//! synchronous.  The bridge is to fetch every leg the planner could ask for
//! up front (an n × n table for n candidates) and hand the planner a
//! `LegMatrix`, which answers from memory.

use rustc_hash::FxHashMap;

use stroll_core::Coordinate;

use crate::{Leg, RouteDistanceProvider, RouteError, RouteResult};

/// Coordinates are keyed by their exact bit patterns: lookups must use the
/// same `Coordinate` values the matrix was filled with.
type PairKey = [u64; 4];

#[inline]
fn key(from: Coordinate, to: Coordinate) -> PairKey {
    [
        from.latitude.to_bits(),
        from.longitude.to_bits(),
        to.latitude.to_bits(),
        to.longitude.to_bits(),
    ]
}

#[derive(Clone, Debug, Default)]
pub struct LegMatrix {
    legs: FxHashMap<PairKey, Leg>,
}

impl LegMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(points: usize) -> Self {
        Self {
            legs: FxHashMap::with_capacity_and_hasher(points * points, Default::default()),
        }
    }

    /// Record the leg `from → to`.  Legs are directed; insert both
    /// directions for a symmetric network.
    pub fn insert(&mut self, from: Coordinate, to: Coordinate, leg: Leg) {
        self.legs.insert(key(from, to), leg);
    }

    /// Fill every ordered pair of `points` from `provider`.
    pub fn precompute<P: RouteDistanceProvider + ?Sized>(
        points: &[Coordinate],
        provider: &P,
    ) -> RouteResult<Self> {
        let mut matrix = Self::with_capacity(points.len());
        for &from in points {
            for &to in points {
                matrix.insert(from, to, provider.leg(from, to)?);
            }
        }
        Ok(matrix)
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl RouteDistanceProvider for LegMatrix {
    fn leg(&self, from: Coordinate, to: Coordinate) -> RouteResult<Leg> {
        match self.legs.get(&key(from, to)) {
            Some(leg) => Ok(*leg),
            None if from == to => Ok(Leg::ZERO),
            None => Err(RouteError::MissingLeg { from, to }),
        }
    }
}
