//! Fluent builder for constructing a [`Sim`].

use lift_car::{Fleet, TravelScheduler};
use lift_core::SimConfig;
use lift_dispatch::{Dispatcher, NearestCarDispatcher};
use lift_traffic::{CallQueue, SequenceSet};
use tracing::debug;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<D>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: building size, timings, window and dispatch mode
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                           |
/// |--------------------|-----------------------------------|
/// | `.sequences(s)`    | `SequenceSet::default_office()`   |
/// | `.dispatcher(d)`   | `NearestCarDispatcher`            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .sequences(sequences)
///     .build()?;
/// let table = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<D: Dispatcher = NearestCarDispatcher> {
    config:     SimConfig,
    sequences:  Option<SequenceSet>,
    dispatcher: D,
}

impl SimBuilder<NearestCarDispatcher> {
    /// Create a builder using the nearest-car dispatch policy.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            sequences:  None,
            dispatcher: NearestCarDispatcher,
        }
    }
}

impl<D: Dispatcher> SimBuilder<D> {
    /// Supply the traffic sequences for the run.
    ///
    /// An empty set is treated like no set: the default office pattern is
    /// installed instead.
    pub fn sequences(mut self, sequences: SequenceSet) -> Self {
        self.sequences = Some(sequences);
        self
    }

    /// Replace the car-selection policy.
    pub fn dispatcher<D2: Dispatcher>(self, dispatcher: D2) -> SimBuilder<D2> {
        SimBuilder {
            config:    self.config,
            sequences: self.sequences,
            dispatcher,
        }
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or any sequence names a floor
    /// outside the building.
    pub fn build(self) -> SimResult<Sim<D>> {
        self.config.validate()?;

        let sequences = match self.sequences {
            Some(s) if !s.is_empty() => s,
            _ => {
                debug!("no sequences supplied, installing the default office set");
                SequenceSet::default_office()
            }
        };
        sequences.validate(self.config.floor_count)?;

        Ok(Sim {
            clock:      self.config.make_clock(),
            fleet:      Fleet::new(self.config.elevator_count),
            scheduler:  TravelScheduler::new(self.config.travel_secs, self.config.floor_secs),
            queue:      CallQueue::new(),
            rows:       Vec::with_capacity(self.config.total_ticks() as usize / 60 + 1),
            dispatches: 0,
            config:     self.config,
            sequences,
            dispatcher: self.dispatcher,
        })
    }
}
