//! `lift-dispatch` — turning pending calls into a car assignment.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                         |
//! |----------------|------------------------------------------------------------------|
//! | [`aggregate`]  | `merge_calls` — collapse pending calls into one sweep `Route`    |
//! | [`dispatcher`] | `Dispatcher` trait, `NearestCarDispatcher`                       |
//! | [`assignment`] | `Assignment`, `plan_assignment` — pick a car, add repositioning  |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                             |
//!
//! # Dispatch pass
//!
//! 1. **Aggregate**: in batch mode every pending call is merged into one
//!    multi-leg route by [`merge_calls`]; in single-call mode each call is a
//!    one-leg route of its own.
//! 2. **Select**: the [`Dispatcher`] chooses an idle car for the route's
//!    first pickup floor, or reports that none is free.
//! 3. **Finalize**: [`plan_assignment`] prepends a repositioning leg when the
//!    chosen car is not already at the pickup floor.
//!
//! The result is handed to `lift_car::TravelScheduler`, which expands and
//! commits it.

pub mod aggregate;
pub mod assignment;
pub mod dispatcher;
pub mod error;

#[cfg(test)]
mod tests;

pub use aggregate::merge_calls;
pub use assignment::{plan_assignment, Assignment};
pub use dispatcher::{Dispatcher, NearestCarDispatcher};
pub use error::{DispatchError, DispatchResult};
