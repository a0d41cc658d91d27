//! Renders an engine position as a UCCI-style position string.

use crate::board_location::{COL_COUNT, ROW_COUNT};
use crate::engine::XiangqiEngine;
use crate::piece_types::{PieceColor, PieceKind, PieceRecord};

pub fn generate_fen(engine: &XiangqiEngine) -> String {
    let board = generate_board_field(engine);
    let side_to_move = match engine.turn_manager.current_turn {
        PieceColor::Red => "w",
        PieceColor::Black => "b",
    };
    // The engine tracks no clocks; emit the conventional placeholders.
    format!("{} {} - - 0 1", board, side_to_move)
}

fn generate_board_field(engine: &XiangqiEngine) -> String {
    let mut out = String::new();

    for row in (1..=ROW_COUNT).rev() {
        let mut empty_count = 0u8;

        for col in 1..=COL_COUNT {
            if let Some(piece) = engine.board.view(&(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 1 {
            out.push('/');
        }
    }

    out
}

pub(crate) fn piece_to_fen_char(piece: &PieceRecord) -> char {
    let base = match piece.kind {
        PieceKind::General => 'k',
        PieceKind::Guard => 'a',
        PieceKind::Elephant => 'b',
        PieceKind::Horse => 'n',
        PieceKind::Cannon => 'c',
        PieceKind::Rook => 'r',
        PieceKind::Soldier => 'p',
    };
    match piece.color {
        PieceColor::Red => base.to_ascii_uppercase(),
        PieceColor::Black => base,
    }
}
