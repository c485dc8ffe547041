//! Second-by-second trip labels.
//!
//! A trip occupies a contiguous run of ticks starting at the dispatch
//! instant, so the schedule is stored as a start tick plus one `Step` per
//! second rather than as a sparse map.  Lookups outside the run return
//! `None`; the display layer substitutes [`GAP_LABEL`].

use std::fmt;

use lift_core::{Floor, Tick};

/// Label shown for a busy car when its schedule has no entry for the
/// requested second.
pub const GAP_LABEL: &str = "in movement...";

/// The state of a busy car during one simulated second.
///
/// `distance` is the car's running cumulative distance at that second,
/// counting the floor currently being crossed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Step {
    /// Between `from` and the adjacent floor `to`.
    Moving { from: Floor, to: Floor, distance: u64 },
    /// Dwelling at `floor` at the end of a leg.
    Waiting { floor: Floor, distance: u64 },
}

impl Step {
    /// Running cumulative distance at this second.
    pub fn distance(&self) -> u64 {
        match *self {
            Step::Moving { distance, .. } | Step::Waiting { distance, .. } => distance,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Moving { from, to, distance } => {
                write!(f, "{from} -> {to}|{distance} (in movement)")
            }
            Step::Waiting { floor, distance } => {
                write!(f, "{floor}|{distance} (waiting time)")
            }
        }
    }
}

/// The steps of one trip, keyed by absolute tick.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StepSchedule {
    start: Tick,
    steps: Vec<Step>,
}

impl StepSchedule {
    /// An empty schedule beginning at `start`.
    pub fn new(start: Tick) -> Self {
        Self { start, steps: Vec::new() }
    }

    /// Append `step` for `secs` consecutive seconds.
    pub fn push_repeated(&mut self, step: Step, secs: u32) {
        self.steps
            .extend(std::iter::repeat_n(step, secs as usize));
    }

    /// The step at absolute tick `at`, or `None` outside the schedule.
    pub fn get(&self, at: Tick) -> Option<&Step> {
        let offset = at.0.checked_sub(self.start.0)?;
        self.steps.get(offset as usize)
    }

    /// First tick covered by the schedule.
    pub fn start(&self) -> Tick {
        self.start
    }

    /// First tick after the schedule, i.e. the instant the car becomes free.
    pub fn end(&self) -> Tick {
        self.start + self.len_secs()
    }

    /// Number of seconds (entries) in the schedule.
    pub fn len_secs(&self) -> u32 {
        self.steps.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `(tick, step)` pairs in tick order.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, &Step)> {
        let start = self.start;
        self.steps
            .iter()
            .enumerate()
            .map(move |(i, s)| (start + i as u32, s))
    }
}
