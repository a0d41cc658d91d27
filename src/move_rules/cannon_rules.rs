use crate::board_location::BoardLocation;
use crate::move_rules::legal_move_shared::{count_pieces_between, is_straight_line, path_is_clear};
use crate::piece_register::PieceRegister;
use crate::piece_types::PieceRecord;

/// A cannon moves like a rook onto an empty square, but captures by
/// jumping exactly one screen piece anywhere between it and the target.
pub fn is_valid_cannon_move(
    register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
    _piece: &PieceRecord,
) -> bool {
    if !is_straight_line(from, to) {
        return false;
    }
    match register.view(&to) {
        // Capture: exactly one screen between cannon and target.
        Some(_) => count_pieces_between(register, from, to) == 1,
        // Quiet move: the path must be fully clear.
        None => path_is_clear(register, from, to),
    }
}
