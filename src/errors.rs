//! Errors used throughout the Xiangqi engine.
//!
//! Two enums cover the two failure domains: `MoveRejection` is the typed
//! reason a proposed move was refused, and `XiangqiErrors` covers everything
//! else (position parsing, coordinate arithmetic). Both are plain enums so
//! callers can match on them directly; no failure in this crate panics.

use crate::piece_types::PieceKind;

/// Reason a proposed move was rejected.
///
/// `XiangqiEngine::try_move_piece` reports the first stage of validation
/// that failed, in pipeline order. `move_piece` collapses the reason to a
/// plain `false` for callers that only need legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The origin or destination lies outside the 10x9 board.
    OutOfBounds,
    /// The origin square holds no piece.
    NoPieceAtOrigin,
    /// The piece at the origin does not belong to the side to move.
    WrongTurn,
    /// The destination holds a piece of the mover's own color.
    FriendlyCapture,
    /// The move violates the movement rule of the given piece kind.
    IllegalGeometry(PieceKind),
    /// The move would leave the two Generals on the same column with no
    /// piece between them.
    GeneralsWouldFace,
}

/// Errors returned by position parsing and coordinate helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XiangqiErrors {
    /// A displacement would land outside the board.
    OutOfBounds,
    /// A position string had malformed structure; carries the offending
    /// string for diagnostics.
    InvalidFenString(String),
    /// A single character in a position string could not be interpreted.
    InvalidFenToken(char),
    /// A position string placed a piece outside the board.
    InvalidFenLocation,
}
