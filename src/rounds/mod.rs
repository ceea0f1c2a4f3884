//! Rounds: one discrete puzzle each, behind a uniform capability trait.
//!
//! The engine treats every round the same way: ask for instructions, ask for
//! renderable lines, let it adjust the cursor after the content is visible,
//! then poll its completion predicate. Rounds keep no fields of their own:
//! anything they need to remember between `render` and `is_complete` goes in
//! the session's scratch map (`GameState::round_state`), which the engine
//! clears on every actual round transition.

pub mod ci;
pub mod delete;
pub mod whackamole;

pub use ci::CiRound;
pub use delete::DeleteRound;
pub use whackamole::WhackAMoleRound;

use std::time::Duration;

use crate::content::ContentProvider;
use crate::core::{Difficulty, GameRng, GameState};
use crate::render::RenderSink;

/// Everything a round may draw on while producing content.
pub struct RoundContext<'a> {
    pub state: &'a mut GameState,
    pub rng: &'a mut GameRng,
    pub content: &'a dyn ContentProvider,
}

/// Capability interface every puzzle type implements.
///
/// ## Implementation Notes
///
/// - `render`: may stash positions in `ctx.state.round_state`
/// - `is_complete`: pure predicate over state and the board read-back
/// - `timeout`: resolved per round, per difficulty; the engine never
///   hardcodes budgets
pub trait Round {
    /// Short name for diagnostics and logs.
    fn name(&self) -> &'static str;

    /// Instruction text shown above the play area.
    fn instructions(&self) -> String;

    /// Produce the lines to display for this round.
    fn render(&self, ctx: &mut RoundContext<'_>) -> Vec<String>;

    /// Positional adjustments that must happen after content is visible.
    fn post_render(&self, _state: &GameState, _sink: &mut dyn RenderSink) {}

    /// Completion predicate, evaluated against session state and the
    /// current board contents.
    fn is_complete(&self, state: &GameState, board: &[String]) -> bool;

    /// Whether this round runs against the clock at `difficulty`.
    fn is_timed(&self, difficulty: Difficulty) -> bool {
        difficulty != Difficulty::Noob
    }

    /// Time budget for this round at `difficulty`.
    fn timeout(&self, difficulty: Difficulty) -> Duration {
        standard_timeout(difficulty)
    }
}

/// The shared difficulty-to-budget ladder most rounds use as-is.
#[must_use]
pub fn standard_timeout(difficulty: Difficulty) -> Duration {
    let millis = match difficulty {
        // Noob rounds are untimed; the value only matters if a host arms
        // one anyway, so keep it comfortable.
        Difficulty::Noob => 60_000,
        Difficulty::Easy => 5_000,
        Difficulty::Medium => 3_500,
        Difficulty::Hard => 2_500,
        Difficulty::Nightmare => 1_600,
        Difficulty::Tpope => 1_000,
    };
    Duration::from_millis(millis)
}

/// The standard playable pool.
#[must_use]
pub fn default_rounds() -> Vec<Box<dyn Round>> {
    vec![
        Box::new(DeleteRound),
        Box::new(WhackAMoleRound),
        Box::new(CiRound),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_timeout_shrinks_with_difficulty() {
        let ladder = [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Nightmare,
            Difficulty::Tpope,
        ];

        for pair in ladder.windows(2) {
            assert!(
                standard_timeout(pair[0]) > standard_timeout(pair[1]),
                "{} should allow more time than {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_default_pool_has_three_rounds() {
        let rounds = default_rounds();
        assert_eq!(rounds.len(), 3);

        let names: Vec<_> = rounds.iter().map(|r| r.name()).collect();
        assert!(names.contains(&"delete"));
        assert!(names.contains(&"whackamole"));
        assert!(names.contains(&"ci"));
    }

    #[test]
    fn test_only_noob_is_untimed_by_default() {
        for round in default_rounds() {
            assert!(!round.is_timed(Difficulty::Noob));
            assert!(round.is_timed(Difficulty::Easy));
            assert!(round.is_timed(Difficulty::Tpope));
        }
    }
}
