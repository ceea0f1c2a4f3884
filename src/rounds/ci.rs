//! Empty the delimited text.

use std::time::Duration;

use crate::core::{Difficulty, GameState};
use crate::render::RenderSink;

use super::{standard_timeout, Round, RoundContext};

const PAIR_KEY: &str = "ci_pair";

/// Delimiter pairs the round draws from, matching the `ci(`-family motions.
const PAIRS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}'), ('"', '"')];

/// A line renders with junk between a random delimiter pair; change-inside
/// it away to win.
#[derive(Clone, Copy, Debug, Default)]
pub struct CiRound;

impl CiRound {
    /// Interior of the stored delimiter pair in `line`, if both delimiters
    /// are present.
    fn interior<'a>(state: &GameState, line: &'a str) -> Option<&'a str> {
        let pair_idx = state.get_round_state(PAIR_KEY, -1);
        if pair_idx < 0 {
            return None;
        }
        let (open, close) = PAIRS[pair_idx as usize % PAIRS.len()];

        let open_at = line.find(open)?;
        let rest = &line[open_at + open.len_utf8()..];
        let close_at = rest.find(close)?;
        Some(&rest[..close_at])
    }
}

impl Round for CiRound {
    fn name(&self) -> &'static str {
        "ci"
    }

    fn instructions(&self) -> String {
        "Empty the delimited text: ci( ci[ ci{ ci\" then Esc".to_string()
    }

    fn render(&self, ctx: &mut RoundContext<'_>) -> Vec<String> {
        let pair_idx = ctx.rng.gen_range_usize(0..PAIRS.len());
        let (open, close) = PAIRS[pair_idx];

        let prefix = ctx.content.random_word(ctx.rng);
        let filler = format!(
            "{} {} {}",
            ctx.content.random_word(ctx.rng),
            ctx.content.random_word(ctx.rng),
            ctx.content.random_word(ctx.rng),
        );

        ctx.state.set_round_state(PAIR_KEY, pair_idx as i64);

        vec![format!("{} {}{}{}", prefix, open, filler, close)]
    }

    fn post_render(&self, state: &GameState, sink: &mut dyn RenderSink) {
        sink.move_cursor(state.line_range.start, 0);
    }

    fn timeout(&self, difficulty: Difficulty) -> Duration {
        // Four delimiter pairs to scan for before the motion; a little
        // extra headroom over the standard ladder.
        standard_timeout(difficulty) + Duration::from_millis(500)
    }

    fn is_complete(&self, state: &GameState, board: &[String]) -> bool {
        let line = match board.iter().find(|l| !l.trim().is_empty()) {
            Some(line) => line,
            None => return false,
        };

        match Self::interior(state, line) {
            Some(interior) => interior.trim().is_empty(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StaticContent;
    use crate::core::{Difficulty, GameRng, GameState};

    fn render_once(state: &mut GameState) -> Vec<String> {
        let mut rng = GameRng::new(42);
        let mut ctx = RoundContext {
            state,
            rng: &mut rng,
            content: &StaticContent,
        };
        CiRound.render(&mut ctx)
    }

    #[test]
    fn test_render_produces_a_delimited_line() {
        let mut state = GameState::new("kyle", Difficulty::Easy);
        let lines = render_once(&mut state);

        assert_eq!(lines.len(), 1);

        let interior = CiRound::interior(&state, &lines[0]).unwrap();
        assert!(!interior.trim().is_empty());
    }

    #[test]
    fn test_filled_interior_is_incomplete() {
        let mut state = GameState::new("kyle", Difficulty::Easy);
        let lines = render_once(&mut state);

        assert!(!CiRound.is_complete(&state, &lines));
    }

    #[test]
    fn test_emptied_interior_completes() {
        let mut state = GameState::new("kyle", Difficulty::Easy);
        let lines = render_once(&mut state);

        let pair_idx = state.get_round_state(PAIR_KEY, -1) as usize;
        let (open, close) = PAIRS[pair_idx];

        // Simulate ci<delimiter> followed by Esc: interior collapses.
        let line = &lines[0];
        let open_at = line.find(open).unwrap();
        let close_at = open_at + line[open_at + 1..].find(close).unwrap() + 1;
        let edited = format!("{}{}", &line[..=open_at], &line[close_at..]);

        assert!(CiRound.is_complete(&state, &[edited]));
    }

    #[test]
    fn test_deleting_the_line_is_not_a_win() {
        let mut state = GameState::new("kyle", Difficulty::Easy);
        let _ = render_once(&mut state);

        assert!(!CiRound.is_complete(&state, &[String::new()]));
    }
}
