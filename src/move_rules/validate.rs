//! Movement-rule dispatch.
//!
//! One arm per piece kind, matched exhaustively: a kind added without a
//! rule is a compile error, so no piece can ever fall through to a
//! permissive default.

use crate::board_location::BoardLocation;
use crate::errors::MoveRejection;
use crate::move_rules::{
    cannon_rules, elephant_rules, general_rules, guard_rules, horse_rules, rook_rules,
    soldier_rules,
};
use crate::piece_register::PieceRegister;
use crate::piece_types::{PieceKind, PieceRecord};

/// Checks the movement rule for the piece's kind, reporting why the move
/// was refused. The general's two failure modes are distinguished so
/// callers can tell a bad step from an open-file facing.
pub fn validate_move(
    register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
    piece: &PieceRecord,
) -> Result<(), MoveRejection> {
    match piece.kind {
        PieceKind::General => {
            if !general_rules::is_legal_palace_step(from, to, piece.color) {
                return Err(MoveRejection::IllegalGeometry(PieceKind::General));
            }
            if general_rules::would_face_generals(register, from, to, piece) {
                return Err(MoveRejection::GeneralsWouldFace);
            }
            Ok(())
        }
        PieceKind::Guard => check(
            guard_rules::is_valid_guard_move(register, from, to, piece),
            PieceKind::Guard,
        ),
        PieceKind::Rook => check(
            rook_rules::is_valid_rook_move(register, from, to, piece),
            PieceKind::Rook,
        ),
        PieceKind::Horse => check(
            horse_rules::is_valid_horse_move(register, from, to, piece),
            PieceKind::Horse,
        ),
        PieceKind::Cannon => check(
            cannon_rules::is_valid_cannon_move(register, from, to, piece),
            PieceKind::Cannon,
        ),
        PieceKind::Elephant => check(
            elephant_rules::is_valid_elephant_move(register, from, to, piece),
            PieceKind::Elephant,
        ),
        PieceKind::Soldier => check(
            soldier_rules::is_valid_soldier_move(register, from, to, piece),
            PieceKind::Soldier,
        ),
    }
}

/// Boolean view of `validate_move` for callers that only need legality.
pub fn is_legal_move(
    register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
    piece: &PieceRecord,
) -> bool {
    validate_move(register, from, to, piece).is_ok()
}

fn check(legal: bool, kind: PieceKind) -> Result<(), MoveRejection> {
    if legal {
        Ok(())
    } else {
        Err(MoveRejection::IllegalGeometry(kind))
    }
}
