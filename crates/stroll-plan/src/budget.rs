//! Time-budget arithmetic.
//!
//! # Forward
//!
//! ```text
//! walking = ceil(distance_km / speed_kmh × 60)
//! dwell   = place_count × per_place_minutes
//! total   = walking + dwell + buffer
//! ```
//!
//! # Inverse
//!
//! Given a total budget, [`TimeBudget::max_walking_minutes`] removes dwell
//! and buffer, [`TimeBudget::max_distance_km`] turns walking minutes back
//! into distance, and [`TimeBudget::optimal_place_count`] asks how many
//! stops fit once a walking distance is fixed.
//!
//! All minute values are whole minutes.

use serde::Serialize;

use stroll_core::WalkConfig;
use stroll_route::travel_minutes;

use crate::{PlanError, PlanResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimeBreakdown {
    pub walking_minutes: u32,
    pub dwell_minutes:   u32,
    pub buffer_minutes:  u32,
    pub total_minutes:   u32,
}

/// Budget calculator.  Cheap to copy; holds only the three tunables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeBudget {
    pub per_place_minutes: u32,
    pub buffer_minutes:    u32,
    pub max_place_count:   u32,
}

impl TimeBudget {
    pub fn new(config: &WalkConfig) -> Self {
        Self {
            per_place_minutes: config.default_dwell_minutes,
            buffer_minutes:    config.buffer_minutes,
            max_place_count:   config.max_place_count,
        }
    }

    /// Same calculator with a different dwell time per place.
    pub fn with_per_place_minutes(mut self, minutes: u32) -> Self {
        self.per_place_minutes = minutes;
        self
    }

    /// Forward budget for walking `distance_km` and visiting `place_count`
    /// places.
    pub fn breakdown(
        &self,
        distance_km: f64,
        speed_kmh:   f64,
        place_count: u32,
    ) -> PlanResult<TimeBreakdown> {
        check_speed(speed_kmh)?;

        let walking_minutes = travel_minutes(distance_km, speed_kmh);
        let dwell_minutes = place_count.saturating_mul(self.per_place_minutes);
        Ok(TimeBreakdown {
            walking_minutes,
            dwell_minutes,
            buffer_minutes: self.buffer_minutes,
            total_minutes:  walking_minutes
                .saturating_add(dwell_minutes)
                .saturating_add(self.buffer_minutes),
        })
    }

    /// Minutes left for walking once dwell and buffer are taken out of
    /// `total_budget`.
    ///
    /// Fails with [`PlanError::InsufficientBudget`] when nothing is left.
    pub fn max_walking_minutes(&self, total_budget: u32, place_count: u32) -> PlanResult<u32> {
        let reserved = place_count
            .saturating_mul(self.per_place_minutes)
            .saturating_add(self.buffer_minutes);
        match total_budget.checked_sub(reserved) {
            Some(left) if left > 0 => Ok(left),
            _ => Err(PlanError::InsufficientBudget { budget: total_budget, minimum: reserved }),
        }
    }

    /// Distance covered in `walking_minutes` at `speed_kmh`.
    pub fn max_distance_km(&self, walking_minutes: u32, speed_kmh: f64) -> f64 {
        walking_minutes as f64 / 60.0 * speed_kmh
    }

    /// How many stops fit in `total_budget` after walking `max_distance_km`
    /// and the buffer, clamped to `[0, max_place_count]`.
    pub fn optimal_place_count(
        &self,
        total_budget:    u32,
        max_distance_km: f64,
        speed_kmh:       f64,
    ) -> PlanResult<u32> {
        check_speed(speed_kmh)?;

        let walking = travel_minutes(max_distance_km, speed_kmh) as i64;
        let remainder = total_budget as i64 - walking - self.buffer_minutes as i64;
        if remainder <= 0 {
            return Ok(0);
        }
        if self.per_place_minutes == 0 {
            return Ok(self.max_place_count);
        }

        let count = remainder / self.per_place_minutes as i64;
        Ok(count.clamp(0, self.max_place_count as i64) as u32)
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self::new(&WalkConfig::default())
    }
}

fn check_speed(speed_kmh: f64) -> PlanResult<()> {
    if speed_kmh.is_finite() && speed_kmh > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidSpeed(speed_kmh))
    }
}
