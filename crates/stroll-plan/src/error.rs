use thiserror::Error;

use stroll_core::{CoreError, PlaceId};
use stroll_route::RouteError;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("walking speed must be positive, got {0} km/h")]
    InvalidSpeed(f64),

    /// Dwell time plus buffer already uses up the whole budget.
    #[error("time budget of {budget} min is too small: stops and buffer alone need {minimum} min")]
    InsufficientBudget { budget: u32, minimum: u32 },

    #[error("place {0} appears more than once in the candidate list")]
    DuplicatePlace(PlaceId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type PlanResult<T> = Result<T, PlanError>;
