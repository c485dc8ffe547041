//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a `Tick`: whole seconds since 00:00 of the simulated
//! day.  One tick is one simulated second, the atomic unit of the clock.
//! Using an integer tick means all schedule arithmetic is exact and
//! comparisons are O(1).
//!
//! `Tick` never wraps at midnight.  A trip dispatched at 23:59:50 may be
//! scheduled past `Tick(86_400)`; only the display helpers reduce modulo a day.

use std::fmt;
use std::str::FromStr;

use crate::{LiftError, LiftResult};

pub const SECS_PER_MINUTE: u32 = 60;
pub const SECS_PER_HOUR:   u32 = 3_600;
pub const SECS_PER_DAY:    u32 = 86_400;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulated instant, in seconds since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Tick(pub u32);

impl Tick {
    pub const MIDNIGHT: Tick = Tick(0);

    /// Construct from hour, minute and second of the day.
    #[inline]
    pub const fn from_hms(hour: u32, minute: u32, second: u32) -> Tick {
        Tick(hour * SECS_PER_HOUR + minute * SECS_PER_MINUTE + second)
    }

    /// Construct from hour and minute of the day (second 0).
    #[inline]
    pub const fn from_hm(hour: u32, minute: u32) -> Tick {
        Tick::from_hms(hour, minute, 0)
    }

    /// Return the tick `n` seconds after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Tick {
        Tick(self.0 + n)
    }

    /// Hour of the day, `0..24`.
    #[inline]
    pub fn hour(self) -> u32 {
        (self.0 % SECS_PER_DAY) / SECS_PER_HOUR
    }

    /// Minute of the hour, `0..60`.
    #[inline]
    pub fn minute(self) -> u32 {
        (self.0 % SECS_PER_HOUR) / SECS_PER_MINUTE
    }

    /// Second of the minute, `0..60`.
    #[inline]
    pub fn second(self) -> u32 {
        self.0 % SECS_PER_MINUTE
    }

    /// `true` on the first second of every minute.
    #[inline]
    pub fn is_minute_start(self) -> bool {
        self.second() == 0
    }

    /// `"HH:MM"` label used as the result-table time column.
    pub fn hhmm(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

impl std::ops::Add<u32> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u32) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Tick) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

impl FromStr for Tick {
    type Err = LiftError;

    /// Parse a 24-hour `HH:MM` or `HH:MM:SS` time of day.
    ///
    /// Every component must be exactly two digits.
    fn from_str(s: &str) -> LiftResult<Tick> {
        let invalid = || LiftError::Parse(format!("invalid time {s:?}: expected HH:MM"));

        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }

        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }

        let [hour, minute, second] = fields;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(invalid());
        }
        Ok(Tick::from_hms(hour, minute, second))
    }
}

impl TryFrom<String> for Tick {
    type Error = LiftError;
    fn try_from(s: String) -> LiftResult<Tick> {
        s.parse()
    }
}

impl From<Tick> for String {
    fn from(t: Tick) -> String {
        if t.second() == 0 { t.hhmm() } else { t.to_string() }
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The discrete one-second clock that drives a run.
///
/// `end` is exclusive and already adjusted: it is one second past the
/// configured end time, so the configured end instant is itself simulated.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// First simulated tick.
    pub start: Tick,
    /// Exclusive upper bound (configured end + 1 s).
    pub end: Tick,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current: Tick,
}

impl SimClock {
    /// Create a clock covering `start..=end_inclusive`.
    pub fn new(start: Tick, end_inclusive: Tick) -> Self {
        Self {
            start,
            end: end_inclusive + 1,
            current: start,
        }
    }

    /// Advance the clock by one second.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current + 1;
    }

    /// `true` once every tick in the window has been simulated.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current >= self.end
    }

    /// Ticks still to simulate, including the current one.
    #[inline]
    pub fn ticks_remaining(&self) -> u32 {
        self.end.0.saturating_sub(self.current.0)
    }

    /// Seconds simulated so far.
    #[inline]
    pub fn elapsed_secs(&self) -> u32 {
        self.current.0.saturating_sub(self.start.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}s elapsed)", self.current, self.elapsed_secs())
    }
}
