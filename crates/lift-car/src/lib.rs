//! `lift-car` — elevator car state, routes, and trip scheduling.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                           |
//! |--------------|--------------------------------------------------------------------|
//! | [`route`]    | `Stop` (one leg) and `Route` (ordered legs)                        |
//! | [`schedule`] | `Step`, `StepSchedule` — second-by-second trip labels              |
//! | [`state`]    | `CarState` — `Idle` / `Busy` state machine                         |
//! | [`elevator`] | `Elevator` — position, cumulative distance, state                  |
//! | [`fleet`]    | `Fleet` — every car of the bank, indexed by `ElevatorId`           |
//! | [`travel`]   | `TravelScheduler` — expands a `Route` into a `Trip`                |
//! | [`error`]    | `CarError`, `CarResult<T>`                                         |
//!
//! # Movement model (commit-at-dispatch)
//!
//! 1. `TravelScheduler::plan` expands a route into a `StepSchedule` starting
//!    at the dispatch tick and computes `available_at = start + len`.
//! 2. `Elevator::begin_trip` commits the trip immediately: the car's floor
//!    becomes the route's final floor and its cumulative distance grows by
//!    the route distance.  The car turns `Busy`.
//! 3. While busy, the displayed label comes from the schedule.
//! 4. `Fleet::release_due(now)` returns every car whose `available_at <= now`
//!    to `Idle` and drops its schedule.

pub mod elevator;
pub mod error;
pub mod fleet;
pub mod route;
pub mod schedule;
pub mod state;
pub mod travel;


pub use elevator::Elevator;
pub use error::{CarError, CarResult};
pub use fleet::Fleet;
pub use route::{Route, Stop};
pub use schedule::{Step, StepSchedule, GAP_LABEL};
pub use state::CarState;
pub use travel::{TravelScheduler, Trip};
