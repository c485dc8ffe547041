//! `lift-traffic` — recurring traffic sequences and the calls they generate.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`call`]       | `CallRequest` (immutable origin → destination pair)      |
//! | [`sequence`]   | `Sequence` — interval, active window, floor sets         |
//! | [`set`]        | `SequenceSet` (name-keyed) and the default office set    |
//! | [`call_queue`] | `CallQueue` — calls waiting for an assignment            |
//! | [`loader`]     | `load_sequences_csv`, `load_sequences_reader`            |
//! | [`error`]      | `TrafficError`, `TrafficResult<T>`                       |
//!
//! # Firing model (summary)
//!
//! A sequence is evaluated on every minute boundary.  At instant `t`:
//!
//! ```text
//! fires(t) = active_from <= t <= active_until
//!            && t.minute() % interval_minutes == 0
//! ```
//!
//! One firing yields the full `origins × destinations` cross product as
//! individual `CallRequest`s, which wait in the `CallQueue` until dispatched.

pub mod call;
pub mod call_queue;
pub mod error;
pub mod loader;
pub mod sequence;
pub mod set;


pub use call::CallRequest;
pub use call_queue::CallQueue;
pub use error::{TrafficError, TrafficResult};
pub use loader::{load_sequences_csv, load_sequences_reader};
pub use sequence::Sequence;
pub use set::SequenceSet;
