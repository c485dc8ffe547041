//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `elevator_positions.csv`: `time` plus one column per elevator
//! - `dispatches.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use lift_sim::RowSnapshot;

use crate::writer::OutputWriter;
use crate::{DispatchRow, OutputError, OutputResult};

/// Writes the result table and dispatch log to two CSV files.
pub struct CsvWriter {
    positions:  Writer<File>,
    dispatches: Writer<File>,
    columns:    usize,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir`.
    ///
    /// The dispatch header is written immediately; the positions header is
    /// written by [`OutputWriter::write_header`].
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let positions = Writer::from_path(dir.join("elevator_positions.csv"))?;

        let mut dispatches = Writer::from_path(dir.join("dispatches.csv"))?;
        dispatches.write_record(["tick", "elevator", "route", "distance", "available_at"])?;

        Ok(Self {
            positions,
            dispatches,
            columns:  0,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_header(&mut self, elevators: &[String]) -> OutputResult<()> {
        self.columns = elevators.len();
        self.positions
            .write_record(std::iter::once("time").chain(elevators.iter().map(String::as_str)))?;
        Ok(())
    }

    fn write_row(&mut self, row: &RowSnapshot) -> OutputResult<()> {
        if row.labels.len() != self.columns {
            return Err(OutputError::ColumnMismatch {
                expected: self.columns,
                got:      row.labels.len(),
            });
        }
        let time = row.time();
        self.positions
            .write_record(std::iter::once(time.as_str()).chain(row.labels.iter().map(String::as_str)))?;
        Ok(())
    }

    fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()> {
        self.dispatches.write_record(&[
            row.tick.clone(),
            row.elevator.clone(),
            row.route.clone(),
            row.distance.to_string(),
            row.available_at.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.positions.flush()?;
        self.dispatches.flush()?;
        Ok(())
    }
}
