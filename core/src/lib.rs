//! Scoring and update-shaping helpers for challenge bingo boards.
//!
//! Everything here is a pure function of its arguments: boards are plain
//! snapshots handed in by the caller, and the toggle payload is a value the
//! caller sends on to the server.

pub use board::*;
pub use cell::*;
pub use coerce::*;
pub use error::*;
pub use payload::*;

mod board;
mod cell;
mod coerce;
mod error;
mod payload;
