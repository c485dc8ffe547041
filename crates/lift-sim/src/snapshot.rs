//! The result table produced by a run.

use lift_core::{ElevatorId, Tick};

/// Every car's display label at one minute boundary.
///
/// `labels[i]` belongs to `ElevatorId(i)`; the matching column header is
/// `ResultTable::headers[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowSnapshot {
    pub tick:   Tick,
    pub labels: Vec<String>,
}

impl RowSnapshot {
    /// `"HH:MM"` time column.
    pub fn time(&self) -> String {
        self.tick.hhmm()
    }

    pub fn label(&self, elevator: ElevatorId) -> Option<&str> {
        self.labels.get(elevator.index()).map(String::as_str)
    }
}

/// Ordered rows plus the elevator names used as column headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows:    Vec<RowSnapshot>,
}

impl ResultTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row recorded at `"HH:MM"` time `time`.
    pub fn row(&self, time: &str) -> Option<&RowSnapshot> {
        self.rows.iter().find(|r| r.time() == time)
    }

    /// Label of the car named `elevator` at `"HH:MM"` time `time`.
    pub fn label(&self, time: &str, elevator: &str) -> Option<&str> {
        let column = self.headers.iter().position(|h| h == elevator)?;
        self.row(time)?.labels.get(column).map(String::as_str)
    }
}

/// Counters describing a finished (or partially run) simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks:           u32,
    pub rows:            usize,
    pub calls_generated: u64,
    /// Calls never dispatched.  After `run` these are the dropped calls.
    pub calls_pending:   usize,
    pub dispatches:      u64,
    /// `(name, cumulative distance)` per car, in id order.
    pub distances:       Vec<(String, u64)>,
}
