//! A single elevator car.

use lift_core::{ElevatorId, Floor, Tick};

use crate::{CarError, CarResult, CarState, StepSchedule, Trip, GAP_LABEL};

/// One car of the bank.
///
/// Created once per configured elevator at simulation start and mutated
/// only by the clock's release and dispatch phases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Elevator {
    pub id: ElevatorId,
    floor: Floor,
    /// Total floors travelled over the whole run.  Never decreases.
    cumulative_distance: u64,
    state: CarState,
}

impl Elevator {
    /// A new idle car resting on the ground floor.
    pub fn new(id: ElevatorId) -> Self {
        Self {
            id,
            floor: Floor::GROUND,
            cumulative_distance: 0,
            state: CarState::Idle,
        }
    }

    /// Column header for this car.
    pub fn name(&self) -> String {
        self.id.name()
    }

    /// Resting floor.  While busy this is already the trip's final floor.
    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn cumulative_distance(&self) -> u64 {
        self.cumulative_distance
    }

    #[inline]
    pub fn state(&self) -> &CarState {
        &self.state
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.state.is_idle()
    }

    /// When a busy car becomes free; `None` while idle.
    pub fn available_at(&self) -> Option<Tick> {
        match self.state {
            CarState::Busy { available_at, .. } => Some(available_at),
            CarState::Idle => None,
        }
    }

    /// The current trip's schedule; `None` while idle.
    pub fn schedule(&self) -> Option<&StepSchedule> {
        match &self.state {
            CarState::Busy { schedule, .. } => Some(schedule),
            CarState::Idle => None,
        }
    }

    /// Floors between the car's resting floor and `floor`.
    #[inline]
    pub fn distance_to(&self, floor: Floor) -> u32 {
        self.floor.distance(floor)
    }

    /// Display label at `now`.
    ///
    /// Idle: `"<floor>|<cumulative distance>"`.  Busy: the scheduled step for
    /// `now`, or [`GAP_LABEL`] if the schedule has no entry for that second.
    pub fn floor_label(&self, now: Tick) -> String {
        match &self.state {
            CarState::Idle => format!("{}|{}", self.floor, self.cumulative_distance),
            CarState::Busy { schedule, .. } => schedule
                .get(now)
                .map_or_else(|| GAP_LABEL.to_owned(), ToString::to_string),
        }
    }

    /// Commit `trip`: move to its final floor, add its distance, turn busy.
    ///
    /// Returns the tick at which the car becomes available again.
    ///
    /// # Errors
    ///
    /// [`CarError::Busy`] if the car is already serving a route.
    pub fn begin_trip(&mut self, trip: Trip) -> CarResult<Tick> {
        if !self.is_available() {
            return Err(CarError::Busy(self.id));
        }
        self.floor = trip.final_floor;
        self.cumulative_distance += trip.distance;
        self.state = CarState::Busy {
            available_at: trip.available_at,
            schedule:     trip.schedule,
        };
        Ok(trip.available_at)
    }

    /// Return the car to `Idle` if its trip has finished by `now`.
    ///
    /// Returns `true` if the car was released.
    pub fn release_if_due(&mut self, now: Tick) -> bool {
        match self.state {
            CarState::Busy { available_at, .. } if now >= available_at => {
                self.state = CarState::Idle;
                true
            }
            _ => false,
        }
    }
}
