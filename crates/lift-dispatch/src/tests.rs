//! Unit tests for lift-dispatch.

use lift_car::{Fleet, Route, Stop, TravelScheduler};
use lift_core::{ElevatorId, Floor, Tick};
use lift_traffic::CallRequest;

use crate::{merge_calls, plan_assignment, DispatchError, Dispatcher, NearestCarDispatcher};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn calls(pairs: &[(u32, u32)]) -> Vec<CallRequest> {
    pairs.iter().map(|&(o, d)| CallRequest::new(Floor(o), Floor(d))).collect()
}

fn legs(route: &Route) -> Vec<(u32, u32)> {
    route.legs().iter().map(|s| (s.from.0, s.to.0)).collect()
}

/// Drive car `id` along `path` (floor by floor, starting from its resting
/// floor) and release it again, leaving it idle at the last floor.
fn drive(fleet: &mut Fleet, id: u32, path: &[u32]) {
    let car = fleet.get_mut(ElevatorId(id)).unwrap();
    let mut from = car.floor();
    let mut route = Route::default();
    for &to in path {
        route.push(Stop::new(from, Floor(to)));
        from = Floor(to);
    }
    let until = TravelScheduler::new(1, 1).assign(car, &route, Tick(0)).unwrap();
    assert!(car.release_if_due(until));
}

fn occupy(fleet: &mut Fleet, id: u32) {
    let car = fleet.get_mut(ElevatorId(id)).unwrap();
    let route = Route::single(Stop::new(car.floor(), car.floor()));
    TravelScheduler::new(1, 100).assign(car, &route, Tick(0)).unwrap();
}

// ── merge_calls ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod aggregate {
    use super::*;

    #[test]
    fn one_origin_one_destination() {
        assert_eq!(legs(&merge_calls(&calls(&[(0, 2)]))), [(0, 2)]);
    }

    #[test]
    fn one_origin_many_destinations_ascending() {
        assert_eq!(legs(&merge_calls(&calls(&[(0, 3), (0, 1)]))), [(0, 1), (1, 3)]);
    }

    #[test]
    fn many_origins_one_destination() {
        assert_eq!(legs(&merge_calls(&calls(&[(3, 0), (1, 0)]))), [(1, 3), (3, 0)]);
    }

    #[test]
    fn many_to_many_sweeps_up_then_down() {
        let route = merge_calls(&calls(&[(1, 4), (2, 0), (1, 0), (2, 4)]));
        assert_eq!(legs(&route), [(1, 2), (2, 4), (4, 0)]);
    }

    #[test]
    fn many_to_many_skips_stationary_leg() {
        // Highest destination equals the last origin.
        let route = merge_calls(&calls(&[(1, 3), (3, 0)]));
        assert_eq!(legs(&route), [(1, 3), (3, 0)]);
    }

    #[test]
    fn duplicates_collapse() {
        let route = merge_calls(&calls(&[(0, 2), (0, 2), (0, 2)]));
        assert_eq!(legs(&route), [(0, 2)]);
    }

    #[test]
    fn order_insensitive() {
        let a = merge_calls(&calls(&[(1, 0), (2, 0), (3, 0), (0, 3)]));
        let b = merge_calls(&calls(&[(0, 3), (3, 0), (2, 0), (1, 0)]));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_batch() {
        assert!(merge_calls(&[]).is_empty());
    }
}

// ── NearestCarDispatcher ──────────────────────────────────────────────────────

#[cfg(test)]
mod dispatcher {
    use super::*;

    #[test]
    fn car_at_pickup_wins_immediately() {
        let mut fleet = Fleet::new(3);
        drive(&mut fleet, 0, &[3, 0, 3, 0]);
        drive(&mut fleet, 2, &[2]);
        // Car 0 has travelled furthest but is at floor 0.
        assert_eq!(NearestCarDispatcher.select(&fleet, Floor(0)), Some(ElevatorId(0)));
    }

    #[test]
    fn closest_car_chosen() {
        let mut fleet = Fleet::new(2);
        drive(&mut fleet, 0, &[1]);
        drive(&mut fleet, 1, &[3]);
        assert_eq!(NearestCarDispatcher.select(&fleet, Floor(4)), Some(ElevatorId(1)));
    }

    #[test]
    fn equidistant_prefers_least_used() {
        let mut fleet = Fleet::new(2);
        drive(&mut fleet, 0, &[3, 1]); // floor 1, distance 5
        drive(&mut fleet, 1, &[1]);    // floor 1, distance 1
        assert_eq!(NearestCarDispatcher.select(&fleet, Floor(2)), Some(ElevatorId(1)));
    }

    #[test]
    fn full_tie_takes_first_car() {
        let mut fleet = Fleet::new(3);
        for id in 0..3 {
            drive(&mut fleet, id, &[2]);
        }
        assert_eq!(NearestCarDispatcher.select(&fleet, Floor(0)), Some(ElevatorId(0)));
    }

    #[test]
    fn busy_cars_are_skipped() {
        let mut fleet = Fleet::new(2);
        occupy(&mut fleet, 0);
        assert_eq!(NearestCarDispatcher.select(&fleet, Floor(0)), Some(ElevatorId(1)));
        occupy(&mut fleet, 1);
        assert_eq!(NearestCarDispatcher.select(&fleet, Floor(0)), None);
    }
}

// ── plan_assignment ───────────────────────────────────────────────────────────

#[cfg(test)]
mod assignment {
    use super::*;

    #[test]
    fn repositioning_leg_prepended() {
        let mut fleet = Fleet::new(1);
        drive(&mut fleet, 0, &[3]);
        let route = Route::single(Stop::new(Floor(1), Floor(0)));
        let a = plan_assignment(&NearestCarDispatcher, &fleet, route).unwrap().unwrap();
        assert_eq!(a.elevator, ElevatorId(0));
        assert!(a.repositioned);
        assert_eq!(legs(&a.route), [(3, 1), (1, 0)]);
    }

    #[test]
    fn no_repositioning_when_car_at_pickup() {
        let fleet = Fleet::new(1);
        let route = Route::single(Stop::new(Floor(0), Floor(2)));
        let a = plan_assignment(&NearestCarDispatcher, &fleet, route).unwrap().unwrap();
        assert!(!a.repositioned);
        assert_eq!(legs(&a.route), [(0, 2)]);
    }

    #[test]
    fn none_when_all_busy() {
        let mut fleet = Fleet::new(1);
        occupy(&mut fleet, 0);
        let route = Route::single(Stop::new(Floor(0), Floor(2)));
        assert!(plan_assignment(&NearestCarDispatcher, &fleet, route).unwrap().is_none());
    }

    #[test]
    fn empty_route_rejected() {
        let fleet = Fleet::new(1);
        assert!(matches!(
            plan_assignment(&NearestCarDispatcher, &fleet, Route::default()),
            Err(DispatchError::EmptyRoute)
        ));
    }

    #[test]
    fn unknown_car_rejected() {
        struct Phantom;
        impl Dispatcher for Phantom {
            fn select(&self, _fleet: &Fleet, _pickup: Floor) -> Option<ElevatorId> {
                Some(ElevatorId(9))
            }
        }
        let fleet = Fleet::new(1);
        let route = Route::single(Stop::new(Floor(0), Floor(1)));
        assert!(matches!(
            plan_assignment(&Phantom, &fleet, route),
            Err(DispatchError::UnknownElevator(ElevatorId(9)))
        ));
    }
}
