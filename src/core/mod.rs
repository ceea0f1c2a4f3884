//! Core engine types: difficulty, session state, RNG, clock, errors.
//!
//! This module contains the fundamental building blocks that are
//! round-agnostic. Concrete rounds build on these via the `rounds` module
//! rather than modifying the core.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use clock::{GameClock, ManualClock, SystemClock};
pub use config::{Difficulty, RoundProgression};
pub use error::GameError;
pub use rng::GameRng;
pub use state::{Ending, GameState, LineRange};
