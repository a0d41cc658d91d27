//! Turn order state machine, independent of the board.

use crate::piece_types::PieceColor;

/// Tracks whose turn it is. Red opens the game. Fields are public so
/// harnesses can stage mid-game states directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnManager {
    pub current_turn: PieceColor,
    pub last_moved: Option<PieceColor>,
}

impl TurnManager {
    pub fn new() -> Self {
        Self {
            current_turn: PieceColor::Red,
            last_moved: None,
        }
    }

    /// Returns true when it is the given color's turn to move.
    #[inline]
    pub fn is_valid_turn(&self, color: PieceColor) -> bool {
        self.current_turn == color
    }

    /// Flips the side to move without recording who moved.
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opposite();
    }

    /// Records a completed move and hands the turn to the opponent. Invoked
    /// only after a move has been fully validated and executed.
    pub fn record_move(&mut self, color: PieceColor) {
        self.last_moved = Some(color);
        self.switch_turn();
    }
}

impl Default for TurnManager {
    fn default() -> Self {
        Self::new()
    }
}
