//! Travel time estimation.

/// Minutes needed to walk `distance_km` at `speed_kmh`, rounded up so a
/// planned arrival is never early.
///
/// The speed is not checked here.  Callers own that guard: providers
/// validate their speed on construction and the budget calculator returns
/// an error for non-positive speeds.
#[inline]
pub fn travel_minutes(distance_km: f64, speed_kmh: f64) -> u32 {
    debug_assert!(speed_kmh > 0.0, "non-positive walking speed {speed_kmh}");
    (distance_km * 60.0 / speed_kmh).ceil() as u32
}
