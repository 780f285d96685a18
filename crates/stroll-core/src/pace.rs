//! Walking pace presets.
//!
//! Callers pick a pace; the numeric speed is resolved against a
//! [`WalkConfig`] so the presets stay overridable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::WalkConfig;

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkingPace {
    /// Generic routing speed (5 km/h by default).
    Plain,
    /// Slower pace used with pedestrian-adjusted distances (4 km/h by default).
    #[default]
    Sightseeing,
    /// Explicit speed in km/h.
    Custom(f64),
}

impl WalkingPace {
    /// Speed in km/h under `config`.
    pub fn speed_kmh(self, config: &WalkConfig) -> f64 {
        match self {
            WalkingPace::Plain       => config.plain_speed_kmh,
            WalkingPace::Sightseeing => config.sightseeing_speed_kmh,
            WalkingPace::Custom(kmh) => kmh,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WalkingPace::Plain       => "plain",
            WalkingPace::Sightseeing => "sightseeing",
            WalkingPace::Custom(_)   => "custom",
        }
    }
}

impl fmt::Display for WalkingPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkingPace::Custom(kmh) => write!(f, "custom({kmh} km/h)"),
            other => f.write_str(other.as_str()),
        }
    }
}
