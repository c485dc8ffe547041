//! Turning a route into a concrete, second-indexed trip.

use lift_core::{Floor, Tick};

use crate::{CarError, CarResult, Elevator, Route, Step, StepSchedule};

/// A fully expanded trip, ready to be committed to a car.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    pub schedule:     StepSchedule,
    /// Floor the car rests at after the last leg.
    pub final_floor:  Floor,
    /// Floors travelled across all legs.
    pub distance:     u64,
    /// `schedule.start() + schedule.len_secs()`.
    pub available_at: Tick,
}

/// Expands routes using the building's timing parameters.
///
/// For every leg, each single-floor movement takes `travel_secs` seconds and
/// the car then dwells `floor_secs` seconds at the leg's destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TravelScheduler {
    pub travel_secs: u32,
    pub floor_secs:  u32,
}

impl TravelScheduler {
    pub fn new(travel_secs: u32, floor_secs: u32) -> Self {
        Self { travel_secs, floor_secs }
    }

    /// Seconds a route takes from dispatch to availability.
    pub fn duration_secs(&self, route: &Route) -> u64 {
        route
            .legs()
            .iter()
            .map(|leg| leg.distance() as u64 * self.travel_secs as u64 + self.floor_secs as u64)
            .sum()
    }

    /// Expand `route` into a trip starting at `start`.
    ///
    /// `distance_so_far` is the car's cumulative distance before the trip;
    /// step labels carry the running total from there.
    ///
    /// # Errors
    ///
    /// [`CarError::EmptyRoute`] if `route` has no legs.
    pub fn plan(&self, route: &Route, start: Tick, distance_so_far: u64) -> CarResult<Trip> {
        let final_floor = route.final_floor().ok_or(CarError::EmptyRoute)?;

        let mut schedule = StepSchedule::new(start);
        let mut running  = distance_so_far;

        for leg in route.legs() {
            let mut floor = leg.from;
            while floor != leg.to {
                let next = floor.toward(leg.to);
                running += 1;
                schedule.push_repeated(
                    Step::Moving { from: floor, to: next, distance: running },
                    self.travel_secs,
                );
                floor = next;
            }
            schedule.push_repeated(
                Step::Waiting { floor: leg.to, distance: running },
                self.floor_secs,
            );
        }

        Ok(Trip {
            available_at: schedule.end(),
            distance:     running - distance_so_far,
            final_floor,
            schedule,
        })
    }

    /// Plan `route` for `car` at `now` and commit it.
    ///
    /// Returns the tick at which the car becomes available again.
    pub fn assign(&self, car: &mut Elevator, route: &Route, now: Tick) -> CarResult<Tick> {
        if !car.is_available() {
            return Err(CarError::Busy(car.id));
        }
        let trip = self.plan(route, now, car.cumulative_distance())?;
        car.begin_trip(trip)
    }
}
