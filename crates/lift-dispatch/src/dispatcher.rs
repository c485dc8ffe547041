//! Car-selection policy.
//!
//! # Pluggability
//!
//! `lift-sim` selects cars through the [`Dispatcher`] trait, so applications
//! can swap in zoning, destination-control or load-aware policies without
//! touching the clock.  The default [`NearestCarDispatcher`] is the closest
//! idle car with a least-used tie-break.

use lift_car::Fleet;
use lift_core::{ElevatorId, Floor};

/// Pluggable elevator-selection policy.
pub trait Dispatcher: Send + Sync {
    /// Choose an idle car to serve a route whose first pickup is `pickup`.
    ///
    /// Returns `None` when every car is busy.  Implementations must never
    /// return a busy car.
    fn select(&self, fleet: &Fleet, pickup: Floor) -> Option<ElevatorId>;
}

/// Nearest idle car; ties broken by smallest cumulative distance, then by
/// lowest id.
///
/// A car already resting at the pickup floor is taken immediately.
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestCarDispatcher;

impl Dispatcher for NearestCarDispatcher {
    fn select(&self, fleet: &Fleet, pickup: Floor) -> Option<ElevatorId> {
        if let Some(car) = fleet.available().find(|c| c.floor() == pickup) {
            return Some(car.id);
        }
        // `min_by_key` keeps the first of equal minima, so fleet (id) order
        // decides a full tie.
        fleet
            .available()
            .min_by_key(|c| (c.distance_to(pickup), c.cumulative_distance()))
            .map(|c| c.id)
    }
}
