//! Routes: ordered lists of legs assigned to one car.

use std::fmt;

use lift_core::Floor;

/// One leg of a route: travel from `from` to `to`, then dwell at `to`.
///
/// A leg with `from == to` is legal and costs only the dwell time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Stop {
    pub from: Floor,
    pub to:   Floor,
}

impl Stop {
    #[inline]
    pub fn new(from: Floor, to: Floor) -> Self {
        Self { from, to }
    }

    /// Floors travelled on this leg.
    #[inline]
    pub fn distance(&self) -> u32 {
        self.from.distance(self.to)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// An ordered, possibly multi-leg itinerary for a single car.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Route {
    legs: Vec<Stop>,
}

impl Route {
    pub fn new(legs: Vec<Stop>) -> Self {
        Self { legs }
    }

    /// A route with a single leg.
    pub fn single(stop: Stop) -> Self {
        Self { legs: vec![stop] }
    }

    pub fn legs(&self) -> &[Stop] {
        &self.legs
    }

    pub fn first(&self) -> Option<&Stop> {
        self.legs.first()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Append a leg at the end of the route.
    pub fn push(&mut self, stop: Stop) {
        self.legs.push(stop);
    }

    /// Floor the car rests at once the route is complete.
    pub fn final_floor(&self) -> Option<Floor> {
        self.legs.last().map(|s| s.to)
    }

    /// Sum of all leg distances.
    pub fn total_distance(&self) -> u64 {
        self.legs.iter().map(|s| s.distance() as u64).sum()
    }

    /// Prepend a repositioning leg from `car_floor` to the first pickup floor
    /// unless the car is already there.
    ///
    /// Returns `true` if a leg was inserted.
    pub fn prepend_repositioning(&mut self, car_floor: Floor) -> bool {
        match self.legs.first() {
            Some(first) if first.from != car_floor => {
                let pickup = first.from;
                self.legs.insert(0, Stop::new(car_floor, pickup));
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, leg) in self.legs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{leg}")?;
        }
        Ok(())
    }
}

impl From<Vec<Stop>> for Route {
    fn from(legs: Vec<Stop>) -> Self {
        Self::new(legs)
    }
}
