//! Session state: the one mutable record of a play-through.
//!
//! ## GameState
//!
//! One per session, created at session start and discarded after the final
//! results flush:
//! - identity: session name and difficulty
//! - counters: current round ordinal, cumulative failures
//! - geometry: the editable line range delegated to the rendering sink
//! - `results`: append-only log of per-round outcomes
//! - `round_state`: string-keyed scratch for the active round
//!
//! The engine is the only mutator of the counters and results; the active
//! round owns the scratch map. Exclusivity is structural: one session, one
//! control thread, no locks.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::{Difficulty, RoundProgression};

/// Geometry of the editable region, in buffer line numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    /// First editable line.
    pub start: usize,
    /// One past the last editable line.
    pub end: usize,
}

impl LineRange {
    /// Number of lines in the region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the region holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Terminal round-ordinal threshold defining session completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ending {
    pub count: u32,
}

/// Mutable per-session record.
///
/// ## State Values (i64 only)
///
/// `round_state` uses `FxHashMap<String, i64>` so rounds stay stateless
/// objects; anything a round needs to remember between `render` and
/// `is_complete` (target rows, character positions) goes here. To store
/// non-integer values: booleans as 0/1, characters as `u32` code points.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Session/player identifier, used as the results-file key.
    pub name: String,

    /// Selected at construction; immutable for the session.
    pub difficulty: Difficulty,

    /// Current round ordinal. Direction of movement depends on difficulty.
    pub current_count: u32,

    /// Cumulative fails across the session.
    pub failure_count: u32,

    /// Where the session ends.
    pub ending: Ending,

    /// Editable region handed to the rendering sink.
    pub line_range: LineRange,

    /// Width budget for rendered lines.
    pub line_length: usize,

    /// Scratch storage for the active round. Cleared on round transition.
    pub round_state: FxHashMap<String, i64>,

    /// Append-only per-round outcomes, chronological order.
    results: Vec<f64>,
}

impl GameState {
    /// Create a session with the standard board geometry.
    #[must_use]
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            difficulty,
            current_count: 1,
            failure_count: 0,
            ending: Ending { count: 10 },
            line_range: LineRange { start: 2, end: 22 },
            line_length: 20,
            round_state: FxHashMap::default(),
            results: Vec::new(),
        }
    }

    // === Round Scratch ===

    /// Get a round scratch value with default.
    #[must_use]
    pub fn get_round_state(&self, key: &str, default: i64) -> i64 {
        self.round_state.get(key).copied().unwrap_or(default)
    }

    /// Set a round scratch value.
    pub fn set_round_state(&mut self, key: impl Into<String>, value: i64) {
        self.round_state.insert(key.into(), value);
    }

    /// Drop all scratch values. The engine calls this on round transition.
    pub fn clear_round_state(&mut self) {
        self.round_state.clear();
    }

    // === Results ===

    /// Record a per-round outcome. Entries are never reordered or removed.
    pub fn record_result(&mut self, value: f64) {
        self.results.push(value);
    }

    /// Record a failed round.
    pub fn record_failure(&mut self) {
        self.failure_count += 1;
    }

    /// The outcome log, in chronological order.
    #[must_use]
    pub fn results(&self) -> &[f64] {
        &self.results
    }

    // === Progression ===

    /// True when the progression direction has carried `current_count` to
    /// the terminal threshold.
    #[must_use]
    pub fn reached_ending(&self) -> bool {
        match self.difficulty.progression() {
            RoundProgression::Ascending => self.current_count >= self.ending.count,
            RoundProgression::Descending => self.current_count == 0,
        }
    }
}
