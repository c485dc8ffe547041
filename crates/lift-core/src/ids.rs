//! Strongly typed identifier and floor wrappers.
//!
//! Both are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing, but callers should prefer the helpers for clarity.

use std::fmt;

// ── ElevatorId ────────────────────────────────────────────────────────────────

/// Index of an elevator car in the fleet (0-based).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorId(pub u32);

impl ElevatorId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Display name used as the result-table column header.
    ///
    /// Names are 1-based: `ElevatorId(0)` is `"Elevator 1"`.
    pub fn name(self) -> String {
        format!("Elevator {}", self.0 + 1)
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElevatorId({})", self.0)
    }
}

impl From<ElevatorId> for usize {
    #[inline(always)]
    fn from(id: ElevatorId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for ElevatorId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ElevatorId, Self::Error> {
        u32::try_from(n).map(ElevatorId)
    }
}

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A floor index.  Ground floor is `Floor(0)`; a building with `floor_count`
/// floors has valid floors `0..floor_count`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Floor(pub u32);

impl Floor {
    pub const GROUND: Floor = Floor(0);

    /// Number of floors between `self` and `other`, in either direction.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor one step from `self` in the direction of `target`.
    ///
    /// Returns `self` unchanged when already at `target`.
    #[inline]
    pub fn toward(self, target: Floor) -> Floor {
        match self.0.cmp(&target.0) {
            std::cmp::Ordering::Less    => Floor(self.0 + 1),
            std::cmp::Ordering::Greater => Floor(self.0 - 1),
            std::cmp::Ordering::Equal   => self,
        }
    }

    /// `true` if this floor exists in a building of `floor_count` floors.
    #[inline]
    pub fn is_within(self, floor_count: u32) -> bool {
        self.0 < floor_count
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Floor {
    #[inline]
    fn from(n: u32) -> Floor {
        Floor(n)
    }
}
