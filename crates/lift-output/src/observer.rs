//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_car::Route;
use lift_core::{ElevatorId, Tick};
use lift_sim::{RowSnapshot, SimObserver};

use crate::row::DispatchRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every result row and dispatch to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` and declare the elevator columns.
    pub fn new(mut writer: W, elevators: &[String]) -> OutputResult<Self> {
        writer.write_header(elevators)?;
        Ok(Self { writer, last_error: None })
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, row: &RowSnapshot) {
        let result = self.writer.write_row(row);
        self.store_err(result);
    }

    fn on_dispatch(&mut self, tick: Tick, elevator: ElevatorId, route: &Route, available_at: Tick) {
        let row = DispatchRow::new(tick, elevator, route, available_at);
        let result = self.writer.write_dispatch(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _dropped_calls: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
