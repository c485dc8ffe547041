//! The `Sim` struct and its tick loop.

use lift_car::{Fleet, Route, Stop, TravelScheduler};
use lift_core::{DispatchMode, SimClock, SimConfig, Tick};
use lift_dispatch::{merge_calls, plan_assignment, Assignment, Dispatcher};
use lift_traffic::{CallQueue, SequenceSet};
use tracing::{debug, info, trace, warn};

use crate::{
    NoopObserver, ResultTable, RowSnapshot, RunSummary, SimBuilder, SimError, SimObserver,
    SimResult,
};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<D>` holds all run state and drives the three-phase tick loop
/// described in the crate docs.  It is single-threaded and fully
/// deterministic: identical configuration and sequences always produce an
/// identical [`ResultTable`].
///
/// Create via [`SimBuilder`].
pub struct Sim<D: Dispatcher> {
    pub config: SimConfig,

    /// One-second clock covering `config.start..=config.end`.
    pub clock: SimClock,

    /// Every car, indexed by `ElevatorId`.
    pub fleet: Fleet,

    /// Name-keyed traffic sequences, evaluated on every minute boundary.
    pub sequences: SequenceSet,

    /// Calls waiting for a car.
    pub queue: CallQueue,

    /// Expands routes using `travel_secs` / `floor_secs`.
    pub scheduler: TravelScheduler,

    /// Car-selection policy.
    pub dispatcher: D,

    /// Rows appended so far, one per simulated minute.
    pub(crate) rows: Vec<RowSnapshot>,

    pub(crate) dispatches: u64,
}

impl<D: Dispatcher> Sim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick through the configured end instant.
    ///
    /// Returns the result table accumulated so far.  Calls that are still
    /// pending once the window closes are never dispatched; they remain
    /// counted in [`RunSummary::calls_pending`].
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<ResultTable> {
        info!(
            elevators = self.config.elevator_count,
            floors    = self.config.floor_count,
            sequences = self.sequences.len(),
            mode      = ?self.config.dispatch_mode,
            "simulating {}..={}",
            self.config.start,
            self.config.end
        );

        while !self.clock.is_finished() {
            self.step(observer)?;
        }

        let dropped = self.queue.len();
        if dropped > 0 {
            warn!(dropped, "window closed with calls still pending; discarding them");
        }
        observer.on_sim_end(self.clock.current, dropped);

        info!(
            rows       = self.rows.len(),
            dispatches = self.dispatches,
            calls      = self.queue.total_enqueued(),
            "simulation finished"
        );
        Ok(self.result_table())
    }

    /// Run exactly `n` ticks from the current position (ignores the end of
    /// the window).
    ///
    /// Useful for tests and incremental stepping.  Pending calls are kept.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// The rows recorded so far with the elevator names as headers.
    pub fn result_table(&self) -> ResultTable {
        ResultTable {
            headers: self.fleet.names(),
            rows:    self.rows.clone(),
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks:           self.clock.elapsed_secs(),
            rows:            self.rows.len(),
            calls_generated: self.queue.total_enqueued(),
            calls_pending:   self.queue.len(),
            dispatches:      self.dispatches,
            distances:       self
                .fleet
                .iter()
                .map(|car| (car.name(), car.cumulative_distance()))
                .collect(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current;
        observer.on_tick_start(now);
        self.process_tick(now, observer)?;
        observer.on_tick_end(now, &self.fleet);
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        // ── Phase 1: release finished trips ───────────────────────────────
        for id in self.fleet.release_due(now) {
            trace!(%now, elevator = %id, "released");
            observer.on_release(now, id);
        }

        // ── Phase 2: minute boundary ──────────────────────────────────────
        //
        // The row is taken before any call of this minute is dispatched, so
        // it shows the state the minute starts in.
        if now.is_minute_start() {
            let row = RowSnapshot { tick: now, labels: self.fleet.labels(now) };
            observer.on_snapshot(&row);
            self.rows.push(row);

            for sequence in self.sequences.firing_at(now) {
                trace!(%now, sequence = %sequence.name, calls = sequence.calls_per_firing(), "fired");
                self.queue.push_firing(sequence);
            }
        }

        // ── Phase 3: dispatch ─────────────────────────────────────────────
        if !self.queue.is_empty() {
            match self.config.dispatch_mode {
                DispatchMode::Batch      => self.dispatch_batch(now, observer)?,
                DispatchMode::SingleCall => self.dispatch_single(now, observer)?,
            }
        }
        Ok(())
    }

    /// Merge every pending call into one route for one car.
    fn dispatch_batch<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        let route = merge_calls(&self.queue.to_vec());
        if let Some(assignment) = plan_assignment(&self.dispatcher, &self.fleet, route)? {
            self.commit(now, assignment, observer)?;
            self.queue.clear();
        }
        Ok(())
    }

    /// Assign pending calls oldest first until one finds no idle car.
    fn dispatch_single<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        while let Some(&call) = self.queue.front() {
            let route = Route::single(Stop::new(call.origin, call.destination));
            let Some(assignment) = plan_assignment(&self.dispatcher, &self.fleet, route)? else {
                break;
            };
            self.commit(now, assignment, observer)?;
            self.queue.pop_front();
        }
        Ok(())
    }

    fn commit<O: SimObserver>(
        &mut self,
        now:        Tick,
        assignment: Assignment,
        observer:   &mut O,
    ) -> SimResult<()> {
        let Assignment { elevator, route, repositioned } = assignment;
        let car = self
            .fleet
            .get_mut(elevator)
            .ok_or(SimError::UnknownElevator(elevator))?;
        let available_at = self.scheduler.assign(car, &route, now)?;
        self.dispatches += 1;

        debug!(
            %now,
            elevator = %elevator.name(),
            %route,
            repositioned,
            %available_at,
            "dispatched"
        );
        observer.on_dispatch(now, elevator, &route, available_at);
        Ok(())
    }
}

// ── Convenience entry point ───────────────────────────────────────────────────

/// Build and run a simulation with the default dispatcher.
///
/// An empty `sequences` set installs the default office pattern.
pub fn simulate(config: SimConfig, sequences: SequenceSet) -> SimResult<ResultTable> {
    SimBuilder::new(config)
        .sequences(sequences)
        .build()?
        .run(&mut NoopObserver)
}
