//! Run configuration.

use crate::{LiftError, LiftResult, SimClock, Tick};
use crate::time::SECS_PER_DAY;

// ── DispatchMode ──────────────────────────────────────────────────────────────

/// How pending calls are turned into elevator assignments.
///
/// A run uses exactly one mode; the two are never mixed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DispatchMode {
    /// Merge every pending call into one multi-stop route for a single car.
    #[default]
    Batch,
    /// Assign pending calls one at a time, oldest first, each as a one-leg
    /// route to its own car.
    SingleCall,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Building and run parameters.
///
/// Typically assembled by the application crate from command-line flags or a
/// JSON file and passed to the simulation builder.  Missing JSON fields take
/// the [`Default`] values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of cars in the bank.  Default: 3.
    pub elevator_count: u32,

    /// Number of floors; valid floors are `0..floor_count`.  Default: 4.
    pub floor_count: u32,

    /// Seconds to move between two adjacent floors.  Default: 5.
    pub travel_secs: u32,

    /// Seconds a car dwells at the end of every leg.  Default: 20.
    pub floor_secs: u32,

    /// First simulated instant.  Default: 09:00.
    pub start: Tick,

    /// Last simulated instant (inclusive).  Default: 20:00.
    pub end: Tick,

    /// Call-assignment policy.  Default: [`DispatchMode::Batch`].
    pub dispatch_mode: DispatchMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            elevator_count: 3,
            floor_count:    4,
            travel_secs:    5,
            floor_secs:     20,
            start:          Tick::from_hm(9, 0),
            end:            Tick::from_hm(20, 0),
            dispatch_mode:  DispatchMode::Batch,
        }
    }
}

impl SimConfig {
    /// Reject configurations the simulation loop cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.elevator_count == 0 {
            return Err(LiftError::Config("elevator_count must be at least 1".into()));
        }
        if self.floor_count == 0 {
            return Err(LiftError::Config("floor_count must be at least 1".into()));
        }
        if self.start.0 >= SECS_PER_DAY || self.end.0 >= SECS_PER_DAY {
            return Err(LiftError::Config(format!(
                "simulation window {}..{} must lie within one day",
                self.start, self.end
            )));
        }
        if self.end < self.start {
            return Err(LiftError::Config(format!(
                "end time {} is before start time {}",
                self.end, self.start
            )));
        }
        Ok(())
    }

    /// Construct a `SimClock` covering `start..=end`.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start, self.end)
    }

    /// Number of one-second ticks the run will simulate.
    #[inline]
    pub fn total_ticks(&self) -> u32 {
        self.end.0.saturating_sub(self.start.0) + 1
    }
}
