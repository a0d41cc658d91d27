use crate::board_location::BoardLocation;
use crate::move_rules::legal_move_shared::{is_straight_line, path_is_clear};
use crate::piece_register::PieceRegister;
use crate::piece_types::PieceRecord;

/// A rook moves any distance along a row or column with every square
/// between origin and destination empty.
pub fn is_valid_rook_move(
    register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
    _piece: &PieceRecord,
) -> bool {
    if !is_straight_line(from, to) {
        return false;
    }
    path_is_clear(register, from, to)
}
