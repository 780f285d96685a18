//! `stroll-plan`: turn a candidate pool into an ordered walking path.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`sequencer`] | `sequence`: greedy nearest-neighbour with start/end anchors  |
//! | [`trimmer`]   | `trim`, `Trimmed`: shorten a sequence to fit its limits      |
//! | [`budget`]    | `TimeBudget`, `TimeBreakdown`: forward and inverse budgets   |
//! | [`path`]      | `Stop`, `GeneratedPath`                                      |
//! | [`generator`] | `PathGenerator`, `Constraints`: the end-to-end pipeline      |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                                 |
//!
//! # Pipeline
//!
//! ```text
//! Place[] ─extract─▶ LocatedPlace[] ─sequence─▶ ordered ─trim─▶ kept + metrics ─▶ GeneratedPath
//! ```
//!
//! Every stage is a pure function of its inputs.  Concurrent requests share
//! nothing but the (immutable) provider and configuration.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Adds `PathGenerator::generate_many` on the Rayon pool.    |

pub mod budget;
pub mod error;
pub mod generator;
pub mod path;
pub mod sequencer;
pub mod trimmer;


pub use budget::{TimeBreakdown, TimeBudget};
pub use error::{PlanError, PlanResult};
pub use generator::{Constraints, PathGenerator};
pub use path::{GeneratedPath, Stop};
pub use sequencer::sequence;
pub use trimmer::{trim, Trimmed};
