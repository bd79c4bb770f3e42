//! Request and response bodies of the challenge bingo JSON API.

pub use api::*;
pub use roster::*;

mod api;
mod roster;
