//! `lift-core` — foundational types for the lift simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `ElevatorId`, `Floor`                                 |
//! | [`time`]    | `Tick`, `SimClock`                                    |
//! | [`config`]  | `SimConfig`, `DispatchMode`                           |
//! | [`error`]   | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Times round-trip as `"HH:MM"` / `"HH:MM:SS"` strings.      |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DispatchMode, SimConfig};
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, Floor};
pub use time::{SimClock, Tick};
