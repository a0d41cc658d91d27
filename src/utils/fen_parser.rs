//! Parses UCCI-style position strings into an engine.
//!
//! The board field lists ten ranks from row 10 down to row 1, nine files
//! per rank, with run-length digits for empty squares. Piece letters are
//! the UCCI set (`k a b n c r p`, uppercase for Red). The side-to-move
//! field is `w` for Red or `b` for Black. Any trailing clock fields are
//! accepted and ignored.

use crate::engine::XiangqiEngine;
use crate::errors::XiangqiErrors;
use crate::piece_types::{PieceColor, PieceKind, PieceRecord};

pub fn parse_fen(fen: &str) -> Result<XiangqiEngine, XiangqiErrors> {
    let mut fields = fen.split_ascii_whitespace();

    let Some(position_field) = fields.next() else {
        return Err(XiangqiErrors::InvalidFenString(fen.to_string()));
    };
    let mut engine = XiangqiEngine::new();

    let mut row: i8 = 10;
    let mut col: i8 = 1;
    for token in position_field.chars() {
        match token {
            '/' => {
                // A rank must account for all nine files before the next
                // one starts.
                if col != 10 || row <= 1 {
                    return Err(XiangqiErrors::InvalidFenString(fen.to_string()));
                }
                row -= 1;
                col = 1;
            }
            '1'..='9' => {
                col += (token as u8 - b'0') as i8;
                if col > 10 {
                    return Err(XiangqiErrors::InvalidFenString(fen.to_string()));
                }
            }
            other => {
                let Some(piece) = piece_from_fen_char(other) else {
                    return Err(XiangqiErrors::InvalidFenToken(other));
                };
                if col > 9 {
                    return Err(XiangqiErrors::InvalidFenLocation);
                }
                engine.board.place((row, col), piece);
                col += 1;
            }
        }
    }
    if row != 1 || col != 10 {
        return Err(XiangqiErrors::InvalidFenString(fen.to_string()));
    }

    let Some(turn_field) = fields.next() else {
        return Err(XiangqiErrors::InvalidFenString(fen.to_string()));
    };
    engine.turn_manager.current_turn = match turn_field {
        "w" => PieceColor::Red,
        "b" => PieceColor::Black,
        _ => return Err(XiangqiErrors::InvalidFenString(fen.to_string())),
    };

    Ok(engine)
}

fn piece_from_fen_char(token: char) -> Option<PieceRecord> {
    let color = if token.is_ascii_uppercase() {
        PieceColor::Red
    } else {
        PieceColor::Black
    };
    let kind = match token.to_ascii_lowercase() {
        'k' => PieceKind::General,
        'a' => PieceKind::Guard,
        'b' => PieceKind::Elephant,
        'n' => PieceKind::Horse,
        'c' => PieceKind::Cannon,
        'r' => PieceKind::Rook,
        'p' => PieceKind::Soldier,
        _ => return None,
    };
    Some(PieceRecord::new(color, kind))
}
