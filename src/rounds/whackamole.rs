//! Toggle the case of the character under the cursor.

use crate::core::GameState;
use crate::render::RenderSink;

use super::{Round, RoundContext};

const COL_KEY: &str = "mole_col";
const CHAR_KEY: &str = "mole_char";

/// A sentence renders with the cursor parked on one letter; hit `~` to flip
/// that letter's case.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhackAMoleRound;

impl Round for WhackAMoleRound {
    fn name(&self) -> &'static str {
        "whackamole"
    }

    fn instructions(&self) -> String {
        "Flip the case of the letter under the cursor (~ is one keystroke)".to_string()
    }

    fn render(&self, ctx: &mut RoundContext<'_>) -> Vec<String> {
        let sentence = ctx.content.random_sentence(ctx.rng);

        let letter_cols: Vec<usize> = sentence
            .char_indices()
            .filter(|(_, c)| c.is_ascii_alphabetic())
            .map(|(i, _)| i)
            .collect();

        // Every pool sentence has letters; the fallback is for custom
        // providers handing back something like "1234".
        let col = ctx
            .rng
            .choose(&letter_cols)
            .copied()
            .unwrap_or(0);
        let target = sentence.as_bytes().get(col).copied().unwrap_or(b' ');

        ctx.state.set_round_state(COL_KEY, col as i64);
        ctx.state.set_round_state(CHAR_KEY, i64::from(target));

        vec![sentence]
    }

    fn post_render(&self, state: &GameState, sink: &mut dyn RenderSink) {
        let col = state.get_round_state(COL_KEY, 0).max(0) as usize;
        sink.move_cursor(state.line_range.start, col);
    }

    fn is_complete(&self, state: &GameState, board: &[String]) -> bool {
        let col = state.get_round_state(COL_KEY, -1);
        let original = state.get_round_state(CHAR_KEY, -1);
        if col < 0 || original < 0 {
            return false;
        }

        let original = original as u8 as char;
        let current = board
            .first()
            .and_then(|line| line.as_bytes().get(col as usize))
            .map(|&b| b as char);

        match current {
            Some(c) => c != original && c.eq_ignore_ascii_case(&original),
            None => false,
        }
    }
}
