use crate::board_location::BoardLocation;
use crate::piece_register::PieceRegister;
use crate::piece_types::PieceRecord;

/// A horse moves one point orthogonally and one point further diagonally
/// outward. The orthogonal square next to the origin along the long axis
/// (the "leg") must be empty or the move is blocked.
pub fn is_valid_horse_move(
    register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
    _piece: &PieceRecord,
) -> bool {
    let row_diff = to.0 - from.0;
    let col_diff = to.1 - from.1;

    let l_shaped = (row_diff.abs() == 2 && col_diff.abs() == 1)
        || (row_diff.abs() == 1 && col_diff.abs() == 2);
    if !l_shaped {
        return false;
    }

    // The leg sits one step from the origin along the long axis.
    let leg = if row_diff.abs() == 2 {
        (from.0 + row_diff.signum(), from.1)
    } else {
        (from.0, from.1 + col_diff.signum())
    };
    register.view(&leg).is_none()
}
