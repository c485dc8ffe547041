//! Every car in the bank, indexed by `ElevatorId`.

use lift_core::{ElevatorId, Tick};

use crate::Elevator;

/// All elevators of one run.
///
/// `cars[i].id == ElevatorId(i)` always holds, so ids double as indices.
#[derive(Clone, Debug)]
pub struct Fleet {
    cars: Vec<Elevator>,
}

impl Fleet {
    /// `count` idle cars on the ground floor.
    pub fn new(count: u32) -> Self {
        Self {
            cars: (0..count).map(|i| Elevator::new(ElevatorId(i))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn get(&self, id: ElevatorId) -> Option<&Elevator> {
        self.cars.get(id.index())
    }

    pub fn get_mut(&mut self, id: ElevatorId) -> Option<&mut Elevator> {
        self.cars.get_mut(id.index())
    }

    /// Read-only slice of all cars in id order.
    pub fn cars(&self) -> &[Elevator] {
        &self.cars
    }

    pub fn iter(&self) -> impl Iterator<Item = &Elevator> {
        self.cars.iter()
    }

    /// Idle cars in id order.
    pub fn available(&self) -> impl Iterator<Item = &Elevator> {
        self.cars.iter().filter(|c| c.is_available())
    }

    /// Column headers, one per car.
    pub fn names(&self) -> Vec<String> {
        self.cars.iter().map(Elevator::name).collect()
    }

    /// Release every busy car whose trip has finished by `now`.
    ///
    /// Returns the ids of the released cars in id order.
    pub fn release_due(&mut self, now: Tick) -> Vec<ElevatorId> {
        self.cars
            .iter_mut()
            .filter_map(|car| car.release_if_due(now).then_some(car.id))
            .collect()
    }

    /// Display label of every car at `now`, in id order.
    pub fn labels(&self, now: Tick) -> Vec<String> {
        self.cars.iter().map(|c| c.floor_label(now)).collect()
    }
}
