//! Session configuration: difficulty levels and round-number progression.
//!
//! A difficulty is selected once, at session construction, and is immutable
//! for the life of the session. It controls two things:
//! - which direction the round ordinal moves after each round
//!   (`RoundProgression`), and
//! - the per-round timeout policy, which is resolved by the active round,
//!   not the engine (see `Round::timeout`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// Session difficulty.
///
/// `Noob` is the only level that plays untimed rounds and the only level
/// whose round ordinal counts down instead of up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Untimed, descending round numbers.
    Noob,
    /// The default.
    #[default]
    Easy,
    Medium,
    Hard,
    Nightmare,
    /// You are not ready.
    Tpope,
}

impl Difficulty {
    /// All difficulties, in ascending order of pain.
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Noob,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Nightmare,
        Difficulty::Tpope,
    ];

    /// The progression strategy for this difficulty.
    ///
    /// Kept as an explicit mapping so that adding a difficulty with another
    /// progression rule (skip-by-two, say) never touches engine control flow.
    #[must_use]
    pub fn progression(self) -> RoundProgression {
        match self {
            Difficulty::Noob => RoundProgression::Descending,
            _ => RoundProgression::Ascending,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Noob => "noob",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Nightmare => "nightmare",
            Difficulty::Tpope => "tpope",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noob" => Ok(Difficulty::Noob),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "nightmare" => Ok(Difficulty::Nightmare),
            "tpope" => Ok(Difficulty::Tpope),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Direction the round ordinal moves after each completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundProgression {
    /// Round numbers count up (everything except `Noob`).
    Ascending,
    /// Round numbers count down, saturating at zero (`Noob`).
    Descending,
}

impl RoundProgression {
    /// Compute the round number that follows `current`.
    ///
    /// This computes but never commits; callers decide when to store the
    /// value back into the session state.
    #[must_use]
    pub fn next(self, current: u32) -> u32 {
        match self {
            RoundProgression::Ascending => current + 1,
            RoundProgression::Descending => current.saturating_sub(1),
        }
    }
}
