use crate::board_location::{is_on_home_side, BoardLocation};
use crate::piece_register::PieceRegister;
use crate::piece_types::PieceRecord;

/// An elephant moves exactly two points diagonally, never crosses the
/// river, and is blocked when the midpoint (the "elephant eye") is
/// occupied.
pub fn is_valid_elephant_move(
    register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
    piece: &PieceRecord,
) -> bool {
    let row_diff = to.0 - from.0;
    let col_diff = to.1 - from.1;
    if row_diff.abs() != 2 || col_diff.abs() != 2 {
        return false;
    }

    if !is_on_home_side(to, piece.color) {
        return false;
    }

    let midpoint = (from.0 + row_diff / 2, from.1 + col_diff / 2);
    register.view(&midpoint).is_none()
}
