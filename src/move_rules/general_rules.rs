use crate::board_location::{is_in_palace, BoardLocation};
use crate::move_rules::legal_move_shared::count_pieces_between;
use crate::piece_register::PieceRegister;
use crate::piece_types::{PieceColor, PieceRecord};

/// A general moves one point orthogonally inside its own palace, and may
/// never end a move leaving the two generals on the same open column.
pub fn is_valid_general_move(
    register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
    piece: &PieceRecord,
) -> bool {
    is_legal_palace_step(from, to, piece.color) && !would_face_generals(register, from, to, piece)
}

/// One orthogonal step that stays inside the given color's palace.
pub fn is_legal_palace_step(from: BoardLocation, to: BoardLocation, color: PieceColor) -> bool {
    if !is_in_palace(to, color) {
        return false;
    }
    let row_diff = (to.0 - from.0).abs();
    let col_diff = (to.1 - from.1).abs();
    (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
}

/// Returns true when executing the move would leave the two generals on
/// the same column with every square between them empty. Checked against
/// the board as it would look after the move.
pub fn would_face_generals(
    register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
    piece: &PieceRecord,
) -> bool {
    let mut trial = register.clone();
    trial.remove(&from);
    trial.place(to, *piece);

    let (Some(red), Some(black)) = (
        trial.find_general(PieceColor::Red),
        trial.find_general(PieceColor::Black),
    ) else {
        // With fewer than two generals on the board there is nothing to face.
        return false;
    };

    if red.1 != black.1 {
        return false;
    }
    count_pieces_between(&trial, red, black) == 0
}
