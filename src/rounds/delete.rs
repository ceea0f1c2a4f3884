//! Delete the marked line.

use crate::core::GameState;
use crate::render::RenderSink;

use super::{Round, RoundContext};

const MARKER: &str = "DELETE ME";
const ROW_KEY: &str = "delete_row";

/// One line in the play area carries the marker; remove it to win.
///
/// The marker lands on a random row at a random indent, so the player has to
/// jump there (relative line numbers help) before deleting.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteRound;

impl Round for DeleteRound {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn instructions(&self) -> String {
        format!("Delete the line marked {} (dd works, relative jumps are faster)", MARKER)
    }

    fn render(&self, ctx: &mut RoundContext<'_>) -> Vec<String> {
        let height = ctx.state.line_range.len().max(1);
        let row = ctx.rng.gen_range_usize(0..height);

        let max_indent = ctx.state.line_length.saturating_sub(MARKER.len());
        let indent = if max_indent == 0 {
            0
        } else {
            ctx.rng.gen_range_usize(0..max_indent)
        };

        let mut lines = vec![String::new(); height];
        lines[row] = format!("{}{}", " ".repeat(indent), MARKER);

        ctx.state.set_round_state(ROW_KEY, row as i64);
        lines
    }

    fn post_render(&self, state: &GameState, sink: &mut dyn RenderSink) {
        // Start the player at the top of the play area, away from the mark.
        sink.move_cursor(state.line_range.start, 0);
    }

    fn is_complete(&self, state: &GameState, board: &[String]) -> bool {
        if state.get_round_state(ROW_KEY, -1) < 0 {
            // Nothing rendered yet; an empty board is not a win.
            return false;
        }
        !board.iter().any(|line| line.contains(MARKER))
    }
}
