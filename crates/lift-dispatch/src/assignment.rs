//! Finalizing a route for the selected car.

use lift_car::{Fleet, Route};
use lift_core::ElevatorId;
use tracing::trace;

use crate::{DispatchError, DispatchResult, Dispatcher};

/// A route bound to the car that will serve it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub elevator: ElevatorId,
    /// The route as it will be travelled, repositioning leg included.
    pub route: Route,
    /// `true` if a leg from the car's floor to the first pickup was prepended.
    pub repositioned: bool,
}

/// Select a car for `route` with `dispatcher` and prepend a repositioning leg
/// if the car is elsewhere.
///
/// Returns `Ok(None)` when no car is free; the caller keeps its calls queued.
///
/// # Errors
///
/// [`DispatchError::EmptyRoute`] if `route` has no legs, or
/// [`DispatchError::UnknownElevator`] if the dispatcher names a car outside
/// the fleet.
pub fn plan_assignment<D: Dispatcher + ?Sized>(
    dispatcher: &D,
    fleet:      &Fleet,
    mut route:  Route,
) -> DispatchResult<Option<Assignment>> {
    let pickup = route.first().ok_or(DispatchError::EmptyRoute)?.from;

    let Some(elevator) = dispatcher.select(fleet, pickup) else {
        trace!(%pickup, "no idle car");
        return Ok(None);
    };
    let car = fleet
        .get(elevator)
        .ok_or(DispatchError::UnknownElevator(elevator))?;

    let repositioned = route.prepend_repositioning(car.floor());
    Ok(Some(Assignment { elevator, route, repositioned }))
}
