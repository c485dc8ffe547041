//! Simulation observer trait for progress reporting and data collection.

use lift_car::{Fleet, Route};
use lift_core::{ElevatorId, Tick};

use crate::RowSnapshot;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — dispatch log
///
/// ```rust,ignore
/// struct DispatchLog(Vec<(Tick, ElevatorId)>);
///
/// impl SimObserver for DispatchLog {
///     fn on_dispatch(&mut self, tick: Tick, car: ElevatorId, _: &Route, _: Tick) {
///         self.0.push((tick, car));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a busy car turns idle during the release phase.
    fn on_release(&mut self, _tick: Tick, _elevator: ElevatorId) {}

    /// Called on every minute boundary with the row just appended to the
    /// result table.
    fn on_snapshot(&mut self, _row: &RowSnapshot) {}

    /// Called after a route has been committed to a car.
    ///
    /// `available_at` is the tick at which the car will be released.
    fn on_dispatch(
        &mut self,
        _tick:         Tick,
        _elevator:     ElevatorId,
        _route:        &Route,
        _available_at: Tick,
    ) {}

    /// Called at the end of each tick with read-only access to every car.
    fn on_tick_end(&mut self, _tick: Tick, _fleet: &Fleet) {}

    /// Called once after the final tick completes.
    ///
    /// `dropped_calls` is the number of calls still pending, which are
    /// discarded.
    fn on_sim_end(&mut self, _final_tick: Tick, _dropped_calls: usize) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
