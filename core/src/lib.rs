//! Game core for a grid mine-avoidance puzzle.
//!
//! A [`Session`] owns the current [`GameState`] and is the entry point for a
//! frontend: it forwards taps and long presses, hands out [`Snapshot`]s to
//! render and queues [`GameEvent`]s (clock start/stop, detonation, completion).
//! Time is driven from outside by calling [`Session::tick`] once per second
//! with the token from the last [`GameEvent::ClockStarted`].

extern crate alloc;

pub use board::*;
pub use cell_set::*;
pub use clock::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use gesture::*;
pub use reveal::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell_set;
mod clock;
mod config;
mod engine;
mod error;
mod generator;
mod gesture;
mod reveal;
mod session;
mod snapshot;
mod types;
