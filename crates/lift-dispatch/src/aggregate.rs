//! Merging a batch of pending calls into one route.
//!
//! Origins and destinations are deduplicated first, then the route shape is
//! chosen by how many distinct floors each side has:
//!
//! | Origins | Destinations | Route                                               |
//! |---------|--------------|-----------------------------------------------------|
//! | 1       | 1            | `o → d`                                             |
//! | 1       | N            | `o → d₀ → d₁ → …` (destinations ascending)          |
//! | N       | 1            | `o₀ → o₁ → … → oₙ → d` (origins ascending)          |
//! | N       | N            | origins ascending, then destinations descending     |
//!
//! In the last case a destination leg whose `from` equals its `to` is skipped.

use std::collections::BTreeSet;

use lift_car::{Route, Stop};
use lift_core::Floor;
use lift_traffic::CallRequest;

/// Collapse `calls` into a single sweep route.
///
/// Returns an empty route for an empty slice.  The result depends only on the
/// *set* of origins and destinations, never on call order.
pub fn merge_calls(calls: &[CallRequest]) -> Route {
    let origins: BTreeSet<Floor>      = calls.iter().map(|c| c.origin).collect();
    let destinations: BTreeSet<Floor> = calls.iter().map(|c| c.destination).collect();

    let (Some(&first_origin), Some(&last_origin)) = (origins.first(), origins.last()) else {
        return Route::default();
    };

    let mut route = Route::default();

    match (origins.len(), destinations.len()) {
        (1, _) => {
            chain(&mut route, first_origin, destinations.iter().copied(), false);
        }
        (_, 1) => {
            let mut legs = origins.iter().copied().chain(destinations.iter().copied());
            if let Some(start) = legs.next() {
                chain(&mut route, start, legs, false);
            }
        }
        _ => {
            let mut pickups = origins.iter().copied();
            if let Some(start) = pickups.next() {
                chain(&mut route, start, pickups, false);
            }
            chain(&mut route, last_origin, destinations.iter().rev().copied(), true);
        }
    }

    route
}

/// Append legs `from → f₀ → f₁ → …` to `route`.
fn chain(
    route:           &mut Route,
    from:            Floor,
    floors:          impl IntoIterator<Item = Floor>,
    skip_stationary: bool,
) {
    let mut previous = from;
    for floor in floors {
        if !(skip_stationary && previous == floor) {
            route.push(Stop::new(previous, floor));
        }
        previous = floor;
    }
}
