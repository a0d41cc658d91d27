use std::fmt;

use serde::{Deserialize, Serialize};

/// Side of the board. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    Red,
    Black,
}

impl PieceColor {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::Red => PieceColor::Black,
            PieceColor::Black => PieceColor::Red,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::Red => write!(f, "Red"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind (color is carried separately on the record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    General,
    Guard,
    Rook,
    Horse,
    Cannon,
    Elephant,
    Soldier,
}

/// A piece as stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl PieceRecord {
    #[inline]
    pub const fn new(color: PieceColor, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Outcome of the game as tracked by the engine. Capturing the enemy
/// General decides the game immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Continue,
    Winner(PieceColor),
}

impl Default for GameResult {
    fn default() -> Self {
        GameResult::Continue
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Continue => write!(f, "Continue"),
            GameResult::Winner(color) => write!(f, "{} wins", color),
        }
    }
}
