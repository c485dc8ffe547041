//! The `OutputWriter` trait implemented by all backend writers.

use lift_sim::RowSnapshot;

use crate::{DispatchRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface to the observer, which stores the first one for
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Declare the elevator columns.  Must be called before `write_row`.
    fn write_header(&mut self, elevators: &[String]) -> OutputResult<()>;

    /// Write one minute row of the result table.
    fn write_row(&mut self, row: &RowSnapshot) -> OutputResult<()>;

    /// Record one committed assignment.
    fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
