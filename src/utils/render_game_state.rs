//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics in text environments. Ranks are listed from row 10 at the
//! top down to row 1, with column numbers on the rails and a marker for
//! the river between the two halves.

use crate::board_location::{COL_COUNT, ROW_COUNT};
use crate::engine::XiangqiEngine;
use crate::utils::fen_generator::piece_to_fen_char;

pub fn render_game_state(engine: &XiangqiEngine) -> String {
    let mut out = String::new();

    out.push_str("    1 2 3 4 5 6 7 8 9\n");

    for row in (1..=ROW_COUNT).rev() {
        out.push_str(&format!("{:>2}  ", row));

        for col in 1..=COL_COUNT {
            match engine.board.view(&(row, col)) {
                Some(piece) => out.push(piece_to_fen_char(piece)),
                None => out.push('.'),
            }
            if col < COL_COUNT {
                out.push(' ');
            }
        }
        out.push('\n');

        if row == 6 {
            out.push_str("    ~ ~ ~ ~ ~ ~ ~ ~ ~\n");
        }
    }

    out.push_str("    1 2 3 4 5 6 7 8 9");
    out
}
