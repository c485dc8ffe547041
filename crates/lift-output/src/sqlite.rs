//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `positions` (one row per minute per elevator) and
//! `dispatches`.

use std::path::Path;

use lift_sim::RowSnapshot;
use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DispatchRow, OutputError, OutputResult};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:      Connection,
    elevators: Vec<String>,
    finished:  bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS positions (
                 time     TEXT NOT NULL,
                 elevator TEXT NOT NULL,
                 label    TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS dispatches (
                 tick         TEXT NOT NULL,
                 elevator     TEXT NOT NULL,
                 route        TEXT NOT NULL,
                 distance     INTEGER NOT NULL,
                 available_at TEXT NOT NULL
             );",
        )?;

        Ok(Self { conn, elevators: Vec::new(), finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_header(&mut self, elevators: &[String]) -> OutputResult<()> {
        self.elevators = elevators.to_vec();
        Ok(())
    }

    fn write_row(&mut self, row: &RowSnapshot) -> OutputResult<()> {
        if row.labels.len() != self.elevators.len() {
            return Err(OutputError::ColumnMismatch {
                expected: self.elevators.len(),
                got:      row.labels.len(),
            });
        }
        let time = row.time();
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO positions (time, elevator, label) VALUES (?1, ?2, ?3)",
            )?;
            for (elevator, label) in self.elevators.iter().zip(&row.labels) {
                stmt.execute(rusqlite::params![time, elevator, label])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO dispatches (tick, elevator, route, distance, available_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![row.tick, row.elevator, row.route, row.distance as i64, row.available_at],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
