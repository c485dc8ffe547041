//! Plain data row types written by output backends.

use lift_car::Route;
use lift_core::{ElevatorId, Tick};

/// One committed assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRow {
    /// `"HH:MM:SS"` dispatch instant.
    pub tick:         String,
    pub elevator:     String,
    /// Legs as `"a -> b, b -> c"`.
    pub route:        String,
    pub distance:     u64,
    /// `"HH:MM:SS"` instant the car becomes free.
    pub available_at: String,
}

impl DispatchRow {
    pub fn new(tick: Tick, elevator: ElevatorId, route: &Route, available_at: Tick) -> Self {
        Self {
            tick:         tick.to_string(),
            elevator:     elevator.name(),
            route:        route.to_string(),
            distance:     route.total_distance(),
            available_at: available_at.to_string(),
        }
    }
}
