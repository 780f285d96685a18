//! Engine configuration.
//!
//! Every constant the engine used to hard-code lives here so tests and
//! deployments can override it.  `WalkConfig::default()` reproduces the
//! production values:
//!
//! | Field                   | Default |
//! |-------------------------|---------|
//! | `pedestrian_factor`     | 1.15    |
//! | `default_dwell_minutes` | 15      |
//! | `buffer_minutes`        | 15      |
//! | `plain_speed_kmh`       | 5.0     |
//! | `sightseeing_speed_kmh` | 4.0     |
//! | `max_place_count`       | 20      |

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Multiplier applied to straight-line distance to approximate the
    /// length of a real walking route.  Not derived from any street graph.
    pub pedestrian_factor: f64,

    /// Dwell time per stop when the request does not specify one.
    pub default_dwell_minutes: u32,

    /// Fixed safety margin added to every time budget.
    pub buffer_minutes: u32,

    pub plain_speed_kmh: f64,

    pub sightseeing_speed_kmh: f64,

    /// Upper clamp for `optimal_place_count`.
    pub max_place_count: u32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            pedestrian_factor:     1.15,
            default_dwell_minutes: 15,
            buffer_minutes:        15,
            plain_speed_kmh:       5.0,
            sightseeing_speed_kmh: 4.0,
            max_place_count:       20,
        }
    }
}

impl WalkConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: WalkConfig =
            serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make distance or time arithmetic meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.pedestrian_factor.is_finite() && self.pedestrian_factor >= 1.0) {
            return Err(CoreError::Config(format!(
                "pedestrian_factor must be >= 1.0, got {}",
                self.pedestrian_factor
            )));
        }
        for (name, speed) in [
            ("plain_speed_kmh", self.plain_speed_kmh),
            ("sightseeing_speed_kmh", self.sightseeing_speed_kmh),
        ] {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(CoreError::Config(format!("{name} must be positive, got {speed}")));
            }
        }
        Ok(())
    }
}
