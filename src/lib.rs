//! # typedrill
//!
//! A round-based typing practice game engine for embedding in editor hosts.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: the engine never touches an editor buffer or
//!    window. Hosts implement `RenderSink`; the engine pushes instructions
//!    and lines through it and reads the board back for win checks.
//!
//! 2. **Capability Traits at the Seams**: rounds (`Round`), content
//!    (`ContentProvider`), time (`GameClock`), and rendering (`RenderSink`)
//!    are all swappable without touching engine control flow.
//!
//! 3. **Deterministic When Asked**: seed the RNG and substitute the manual
//!    clock and an entire session replays move-for-move.
//!
//! ## Architecture
//!
//! - **Single-threaded, cooperative**: one control thread, no locks. The
//!   round timer holds a deadline and expiry is observed at poll time, so
//!   callbacks interleave between operations, never during a render.
//!
//! - **Win/fail independence**: completion and expiry are separate queries
//!   with no forced precedence; the embedding host decides how ties break.
//!
//! ## Modules
//!
//! - `core`: difficulty and progression, session state, RNG, clock, errors
//! - `timer`: the single-shot round timer
//! - `render`: the rendering sink boundary and the in-memory implementation
//! - `content`: word/sentence pools behind the content-provider capability
//! - `rounds`: the round capability trait and the standard puzzle pool
//! - `engine`: the `Game` engine and its builder

pub mod content;
pub mod core;
pub mod engine;
pub mod render;
pub mod rounds;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, Ending, GameClock, GameError, GameRng, GameState, LineRange, ManualClock,
    RoundProgression, SystemClock,
};

pub use crate::content::{ContentProvider, StaticContent};

pub use crate::engine::{Game, GameBuilder};

pub use crate::render::{MemorySink, RenderSink};

pub use crate::rounds::{
    default_rounds, standard_timeout, CiRound, DeleteRound, Round, RoundContext, WhackAMoleRound,
};

pub use crate::timer::RoundTimer;
