//! A single passenger travel request.

use std::fmt;

use lift_core::Floor;

/// One origin → destination request produced by a firing sequence.
///
/// Calls are immutable.  They live in the `CallQueue` until a dispatch pass
/// consumes them and never outlive the run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallRequest {
    pub origin:      Floor,
    pub destination: Floor,
}

impl CallRequest {
    #[inline]
    pub fn new(origin: Floor, destination: Floor) -> Self {
        Self { origin, destination }
    }
}

impl fmt::Display for CallRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
