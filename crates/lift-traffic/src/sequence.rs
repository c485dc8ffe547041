//! Recurring traffic generators.
//!
//! A `Sequence` describes a pattern such as "every 5 minutes between 09:00
//! and 11:00, somebody on the ground floor calls a car to floor 2".  The
//! simulation clock asks every sequence on each minute boundary whether it
//! fires; a firing enqueues one call per (origin, destination) pair.

use std::collections::BTreeSet;

use lift_core::{Floor, Tick};

use crate::{CallRequest, TrafficError, TrafficResult};

/// A named, recurring source of calls.
///
/// Origins and destinations are sorted sets, so the calls from one firing
/// come out in (origin ascending, destination ascending) order regardless of
/// how the sequence was built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    /// Unique key within a `SequenceSet`.
    pub name: String,

    /// Fire on every minute-of-hour divisible by this value.  Must be > 0.
    pub interval_minutes: u32,

    /// First instant (inclusive) at which the sequence may fire.
    pub active_from: Tick,

    /// Last instant (inclusive) at which the sequence may fire.
    pub active_until: Tick,

    pub origins: BTreeSet<Floor>,

    pub destinations: BTreeSet<Floor>,
}

impl Sequence {
    pub fn new(
        name:             impl Into<String>,
        interval_minutes: u32,
        active_from:      Tick,
        active_until:     Tick,
        origins:          impl IntoIterator<Item = u32>,
        destinations:     impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            name: name.into(),
            interval_minutes,
            active_from,
            active_until,
            origins:      origins.into_iter().map(Floor).collect(),
            destinations: destinations.into_iter().map(Floor).collect(),
        }
    }

    /// `true` if `now` lies inside the active window (both ends inclusive).
    #[inline]
    pub fn is_active(&self, now: Tick) -> bool {
        self.active_from <= now && now <= self.active_until
    }

    /// `true` if the sequence generates calls at `now`.
    ///
    /// Only meaningful on minute boundaries; the clock never asks otherwise.
    /// A zero interval never fires (validation rejects it up front).
    pub fn fires_at(&self, now: Tick) -> bool {
        self.is_active(now)
            && now
                .minute()
                .checked_rem(self.interval_minutes)
                .is_some_and(|r| r == 0)
    }

    /// The calls produced by one firing: the full `origins × destinations`
    /// cross product.
    pub fn calls(&self) -> impl Iterator<Item = CallRequest> + '_ {
        self.origins.iter().flat_map(move |&origin| {
            self.destinations
                .iter()
                .map(move |&destination| CallRequest::new(origin, destination))
        })
    }

    /// Number of calls one firing produces.
    #[inline]
    pub fn calls_per_firing(&self) -> usize {
        self.origins.len() * self.destinations.len()
    }

    /// Check the sequence against a building of `floor_count` floors.
    pub fn validate(&self, floor_count: u32) -> TrafficResult<()> {
        let invalid = |reason: String| TrafficError::InvalidSequence {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".into()));
        }
        if self.interval_minutes == 0 {
            return Err(invalid("interval must be at least one minute".into()));
        }
        if self.active_until < self.active_from {
            return Err(invalid(format!(
                "window ends at {} before it starts at {}",
                self.active_until, self.active_from
            )));
        }
        if self.origins.is_empty() {
            return Err(invalid("no origin floors".into()));
        }
        if self.destinations.is_empty() {
            return Err(invalid("no destination floors".into()));
        }
        if let Some(floor) = self
            .origins
            .iter()
            .chain(&self.destinations)
            .find(|f| !f.is_within(floor_count))
        {
            return Err(invalid(format!(
                "floor {floor} is outside the building (floors 0..{floor_count})"
            )));
        }
        Ok(())
    }
}
