use crate::board_location::{is_in_palace, BoardLocation};
use crate::piece_register::PieceRegister;
use crate::piece_types::PieceRecord;

/// A guard moves exactly one point diagonally and never leaves its own
/// palace.
pub fn is_valid_guard_move(
    _register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
    piece: &PieceRecord,
) -> bool {
    if !is_in_palace(to, piece.color) {
        return false;
    }
    let row_diff = (to.0 - from.0).abs();
    let col_diff = (to.1 - from.1).abs();
    row_diff == 1 && col_diff == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_types::{PieceColor, PieceKind};

    fn guard(color: PieceColor) -> PieceRecord {
        PieceRecord::new(color, PieceKind::Guard)
    }

    #[test]
    fn diagonal_steps_inside_the_palace() {
        let register = PieceRegister::new();
        assert!(is_valid_guard_move(
            &register,
            (1, 4),
            (2, 5),
            &guard(PieceColor::Red)
        ));
        assert!(is_valid_guard_move(
            &register,
            (2, 5),
            (3, 4),
            &guard(PieceColor::Red)
        ));
        assert!(is_valid_guard_move(
            &register,
            (10, 4),
            (9, 5),
            &guard(PieceColor::Black)
        ));
    }

    #[test]
    fn orthogonal_steps_are_illegal() {
        let register = PieceRegister::new();
        assert!(!is_valid_guard_move(
            &register,
            (2, 5),
            (2, 6),
            &guard(PieceColor::Red)
        ));
        assert!(!is_valid_guard_move(
            &register,
            (2, 5),
            (3, 5),
            &guard(PieceColor::Red)
        ));
    }

    #[test]
    fn leaving_the_palace_is_illegal() {
        let register = PieceRegister::new();
        assert!(!is_valid_guard_move(
            &register,
            (3, 6),
            (4, 7),
            &guard(PieceColor::Red)
        ));
        assert!(!is_valid_guard_move(
            &register,
            (8, 4),
            (7, 3),
            &guard(PieceColor::Black)
        ));
    }

    #[test]
    fn null_move_is_illegal() {
        let register = PieceRegister::new();
        assert!(!is_valid_guard_move(
            &register,
            (2, 5),
            (2, 5),
            &guard(PieceColor::Red)
        ));
    }
}
