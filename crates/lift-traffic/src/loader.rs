//! CSV sequence loader.
//!
//! # CSV format
//!
//! One row per sequence.  Floor lists are `;`-separated.
//!
//! ```csv
//! name,interval_minutes,active_from,active_until,origins,destinations
//! Sequence 1,5,09:00,11:00,0,2
//! Sequence 4,4,14:00,15:00,1;2;3,0
//! ```
//!
//! Times are 24-hour `HH:MM`.  Duplicate names are rejected; floor ranges
//! are checked later, against the building, by `SequenceSet::validate`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::Tick;

use crate::{Sequence, SequenceSet, TrafficError, TrafficResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SequenceRecord {
    name:             String,
    interval_minutes: u32,
    active_from:      String,
    active_until:     String,
    origins:          String,
    destinations:     String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a `SequenceSet` from a CSV file.
pub fn load_sequences_csv(path: &Path) -> TrafficResult<SequenceSet> {
    let file = std::fs::File::open(path)?;
    load_sequences_reader(file)
}

/// Like [`load_sequences_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for sequences embedded
/// in an application binary.
pub fn load_sequences_reader<R: Read>(reader: R) -> TrafficResult<SequenceSet> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut set = SequenceSet::new();

    for result in csv_reader.deserialize::<SequenceRecord>() {
        let row = result.map_err(|e| TrafficError::Parse(e.to_string()))?;
        set.insert(Sequence::new(
            row.name.trim(),
            row.interval_minutes,
            parse_time(&row.active_from)?,
            parse_time(&row.active_until)?,
            parse_floors(&row.origins)?,
            parse_floors(&row.destinations)?,
        ))?;
    }

    Ok(set)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_time(s: &str) -> TrafficResult<Tick> {
    s.parse::<Tick>()
        .map_err(|e| TrafficError::Parse(e.to_string()))
}

fn parse_floors(s: &str) -> TrafficResult<Vec<u32>> {
    s.split(';')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| {
            f.parse::<u32>().map_err(|_| {
                TrafficError::Parse(format!("invalid floor {f:?}: expected a non-negative integer"))
            })
        })
        .collect()
}
