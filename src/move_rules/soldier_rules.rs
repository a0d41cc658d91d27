use crate::board_location::BoardLocation;
use crate::piece_register::PieceRegister;
use crate::piece_types::{PieceColor, PieceRecord};

/// A soldier advances one point at a time and never retreats. Until it has
/// crossed the river it may only step forward; after crossing it may also
/// step one point sideways. Diagonal steps are never allowed.
///
/// Orientation: Red advances toward row 1 and counts rows 6..=10 as across
/// the river; Black advances toward row 10 and counts rows 1..=5 as across.
pub fn is_valid_soldier_move(
    _register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
    piece: &PieceRecord,
) -> bool {
    let row_diff = to.0 - from.0;
    let col_diff = (to.1 - from.1).abs();

    // One orthogonal step, nothing else.
    let single_step = (row_diff.abs() == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1);
    if !single_step {
        return false;
    }

    if !has_crossed_river(from.0, piece.color) {
        // Forward only until across the river.
        if col_diff != 0 {
            return false;
        }
        return row_diff == forward_step(piece.color);
    }

    if col_diff == 1 {
        // A lateral step once across; the shape check already rules out
        // any vertical component.
        return true;
    }
    row_diff == forward_step(piece.color)
}

/// Whether a soldier on this row counts as having crossed the river.
pub fn has_crossed_river(row: i8, color: PieceColor) -> bool {
    match color {
        PieceColor::Red => row >= 6,
        PieceColor::Black => row <= 5,
    }
}

const fn forward_step(color: PieceColor) -> i8 {
    match color {
        PieceColor::Red => -1,
        PieceColor::Black => 1,
    }
}
