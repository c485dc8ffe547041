//! `lift-sim` — tick loop orchestrator for the lift simulator.
//!
//! # Tick loop
//!
//! ```text
//! for now in start..=end (one second per tick):
//!   ① Release  — busy cars with available_at <= now turn idle.
//!   ② Minute   — on second 0 only:
//!                  append a RowSnapshot of every car's label,
//!                  enqueue the calls of every firing sequence.
//!   ③ Dispatch — if calls are pending:
//!                  Batch      → merge all of them into one route for one
//!                               car; clear the queue on success.
//!                  SingleCall → assign the oldest call first, one route
//!                               per car, until a call finds no idle car.
//!                Calls that cannot be assigned wait for the next tick.
//! ```
//!
//! The phase order within a tick is fixed: dispatch always sees the
//! availability produced by the release phase of the same tick.  Calls still
//! pending when the window closes are dropped.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let table = sim.run(&mut NoopObserver)?;
//! for row in &table.rows {
//!     println!("{} {:?}", row.time(), row.labels);
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{simulate, Sim};
pub use snapshot::{ResultTable, RowSnapshot, RunSummary};
