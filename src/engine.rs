//! Engine orchestrator.
//!
//! `XiangqiEngine` owns the piece register, the turn order, and the game
//! result for exactly one game. Moves mutate state if and only if every
//! validation stage passes; any rejection leaves the engine untouched.

use crate::board_location::{self, BoardLocation};
use crate::errors::{MoveRejection, XiangqiErrors};
use crate::inspect_check;
use crate::move_rules::validate;
use crate::piece_register::PieceRegister;
use crate::piece_types::{GameResult, PieceColor, PieceKind, PieceRecord};
use crate::turn_manager::TurnManager;
use crate::utils::{fen_generator, fen_parser};

#[derive(Debug, Clone, Default)]
pub struct XiangqiEngine {
    pub board: PieceRegister,
    pub turn_manager: TurnManager,
    pub game_result: GameResult,
}

impl XiangqiEngine {
    pub fn new() -> Self {
        Self {
            board: PieceRegister::new(),
            turn_manager: TurnManager::new(),
            game_result: GameResult::Continue,
        }
    }

    /// Builds an engine from a UCCI-style position string.
    pub fn from_fen(fen: &str) -> Result<Self, XiangqiErrors> {
        fen_parser::parse_fen(fen)
    }

    /// Renders the current position as a UCCI-style position string.
    pub fn get_fen(&self) -> String {
        fen_generator::generate_fen(self)
    }

    /// Clears every square. Turn order and result are left as they are.
    pub fn setup_empty_board(&mut self) {
        self.board.clear();
    }

    /// Places a piece unconditionally, overwriting any occupant. Placement
    /// is deliberately unchecked so scenarios can stage arbitrary positions.
    pub fn place_piece(&mut self, color: PieceColor, kind: PieceKind, row: i8, col: i8) {
        self.board.place((row, col), PieceRecord::new(color, kind));
    }

    /// Attempts a move, reporting the first validation stage that refused
    /// it. On success the board, the result, and the turn order are
    /// updated; on failure nothing is touched.
    pub fn try_move_piece(
        &mut self,
        from_row: i8,
        from_col: i8,
        to_row: i8,
        to_col: i8,
    ) -> Result<(), MoveRejection> {
        let from = (from_row, from_col);
        let to = (to_row, to_col);

        if !board_location::is_on_board(from) || !board_location::is_on_board(to) {
            return Err(MoveRejection::OutOfBounds);
        }
        let piece = match self.board.view(&from) {
            Some(found) => *found,
            None => return Err(MoveRejection::NoPieceAtOrigin),
        };
        if !self.turn_manager.is_valid_turn(piece.color) {
            return Err(MoveRejection::WrongTurn);
        }
        self.reject_capture_and_geometry(from, to, &piece)?;

        self.execute_move(from, to);
        self.turn_manager.record_move(piece.color);
        Ok(())
    }

    /// Boolean view of `try_move_piece` for callers that only need
    /// legality.
    pub fn move_piece(&mut self, from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> bool {
        self.try_move_piece(from_row, from_col, to_row, to_col)
            .is_ok()
    }

    pub fn game_result(&self) -> GameResult {
        self.game_result
    }

    /// Whether the given color's General is currently attacked.
    pub fn is_in_check(&self, color: PieceColor) -> bool {
        inspect_check::is_in_check(&self.board, color)
    }

    /// Whether the given color is in check with no move that resolves it.
    pub fn detect_checkmate(&mut self, color: PieceColor) -> bool {
        inspect_check::detect_checkmate(self, color)
    }

    /// The validation a committed move runs, minus the turn check. Used by
    /// the checkmate trials so their answer does not depend on whose turn
    /// it happens to be.
    pub(crate) fn validate_ignoring_turn(
        &self,
        from: BoardLocation,
        to: BoardLocation,
    ) -> Result<PieceRecord, MoveRejection> {
        if !board_location::is_on_board(from) || !board_location::is_on_board(to) {
            return Err(MoveRejection::OutOfBounds);
        }
        let piece = match self.board.view(&from) {
            Some(found) => *found,
            None => return Err(MoveRejection::NoPieceAtOrigin),
        };
        self.reject_capture_and_geometry(from, to, &piece)?;
        Ok(piece)
    }

    fn reject_capture_and_geometry(
        &self,
        from: BoardLocation,
        to: BoardLocation,
        piece: &PieceRecord,
    ) -> Result<(), MoveRejection> {
        if let Some(target) = self.board.view(&to) {
            if target.color == piece.color {
                return Err(MoveRejection::FriendlyCapture);
            }
        }
        validate::validate_move(&self.board, from, to, piece)
    }

    /// Moves the piece, resolving any capture. Capturing the enemy General
    /// ends the game on the spot; any other move leaves the result at
    /// `Continue`.
    pub(crate) fn execute_move(&mut self, from: BoardLocation, to: BoardLocation) {
        let Some(piece) = self.board.remove(&from) else {
            return;
        };
        let captured = self.board.view(&to).copied();
        self.board.place(to, piece);

        self.game_result = match captured {
            Some(target) if target.kind == PieceKind::General => GameResult::Winner(piece.color),
            _ => GameResult::Continue,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_state(engine: &XiangqiEngine) -> (String, GameResult, TurnManager) {
        (
            engine.get_fen(),
            engine.game_result,
            engine.turn_manager.clone(),
        )
    }

    #[test]
    fn fresh_engine_is_empty_and_undecided() {
        let engine = XiangqiEngine::new();
        assert!(engine.board.is_empty());
        assert_eq!(engine.game_result(), GameResult::Continue);
        assert!(engine.turn_manager.is_valid_turn(PieceColor::Red));
    }

    #[test]
    fn placement_is_unconditional() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::General, 1, 5);
        assert_eq!(
            engine.board.view(&(1, 5)),
            Some(&PieceRecord::new(PieceColor::Red, PieceKind::General))
        );

        engine.place_piece(PieceColor::Black, PieceKind::Rook, 1, 5);
        assert_eq!(
            engine.board.view(&(1, 5)),
            Some(&PieceRecord::new(PieceColor::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn moving_from_an_empty_square_is_rejected() {
        let mut engine = XiangqiEngine::new();
        assert_eq!(
            engine.try_move_piece(1, 1, 2, 1),
            Err(MoveRejection::NoPieceAtOrigin)
        );
        assert!(!engine.move_piece(1, 1, 2, 1));
    }

    #[test]
    fn out_of_board_endpoints_are_rejected_first() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::Rook, 1, 1);
        assert_eq!(
            engine.try_move_piece(0, 1, 1, 1),
            Err(MoveRejection::OutOfBounds)
        );
        assert_eq!(
            engine.try_move_piece(1, 1, 1, 10),
            Err(MoveRejection::OutOfBounds)
        );
    }

    #[test]
    fn turn_order_is_enforced() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::Rook, 3, 3);
        engine.place_piece(PieceColor::Red, PieceKind::Cannon, 4, 4);
        engine.place_piece(PieceColor::Black, PieceKind::Rook, 10, 9);

        assert!(engine.move_piece(3, 3, 3, 5));
        // A second Red move before Black replies is a turn violation.
        assert_eq!(
            engine.try_move_piece(4, 4, 4, 5),
            Err(MoveRejection::WrongTurn)
        );
        assert!(engine.move_piece(10, 9, 9, 9));
        assert!(engine.move_piece(4, 4, 4, 5));
    }

    #[test]
    fn wrong_turn_is_reported_before_the_capture_check() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Black, PieceKind::Rook, 1, 1);
        engine.place_piece(PieceColor::Black, PieceKind::Soldier, 1, 5);
        assert_eq!(
            engine.try_move_piece(1, 1, 1, 5),
            Err(MoveRejection::WrongTurn)
        );
    }

    #[test]
    fn capturing_your_own_piece_is_rejected() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::Rook, 1, 1);
        engine.place_piece(PieceColor::Red, PieceKind::Soldier, 1, 5);
        assert_eq!(
            engine.try_move_piece(1, 1, 1, 5),
            Err(MoveRejection::FriendlyCapture)
        );
    }

    #[test]
    fn capturing_the_general_wins_immediately() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::Rook, 5, 5);
        engine.place_piece(PieceColor::Black, PieceKind::General, 5, 8);

        assert!(engine.move_piece(5, 5, 5, 8));
        assert_eq!(engine.game_result(), GameResult::Winner(PieceColor::Red));
        assert_eq!(engine.game_result().to_string(), "Red wins");
    }

    #[test]
    fn capturing_anything_else_continues_the_game() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::Rook, 5, 5);
        engine.place_piece(PieceColor::Black, PieceKind::Cannon, 5, 8);
        engine.place_piece(PieceColor::Black, PieceKind::General, 8, 5);

        assert!(engine.move_piece(5, 5, 5, 8));
        assert_eq!(engine.game_result(), GameResult::Continue);
        assert_eq!(engine.game_result().to_string(), "Continue");
    }

    #[test]
    fn generals_may_not_face_each_other() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::General, 2, 4);
        engine.place_piece(PieceColor::Black, PieceKind::General, 8, 5);

        assert_eq!(
            engine.try_move_piece(2, 4, 2, 5),
            Err(MoveRejection::GeneralsWouldFace)
        );
        // The same step away from the shared column is fine.
        assert!(engine.move_piece(2, 4, 1, 4));
    }

    #[test]
    fn general_moves_inside_the_palace() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::General, 1, 5);
        assert!(engine.move_piece(1, 5, 1, 4));

        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::General, 1, 4);
        assert_eq!(
            engine.try_move_piece(1, 4, 1, 3),
            Err(MoveRejection::IllegalGeometry(PieceKind::General))
        );
    }

    #[test]
    fn rejected_moves_leave_the_engine_untouched() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::General, 2, 4);
        engine.place_piece(PieceColor::Red, PieceKind::Rook, 5, 6);
        engine.place_piece(PieceColor::Red, PieceKind::Soldier, 5, 9);
        engine.place_piece(PieceColor::Black, PieceKind::General, 8, 5);
        engine.place_piece(PieceColor::Black, PieceKind::Rook, 10, 1);
        let before = engine_state(&engine);

        // One failure from each rejection category.
        let attempts = [
            ((0, 1), (1, 1), MoveRejection::OutOfBounds),
            ((7, 7), (7, 8), MoveRejection::NoPieceAtOrigin),
            ((10, 1), (9, 1), MoveRejection::WrongTurn),
            ((5, 6), (5, 9), MoveRejection::FriendlyCapture),
            (
                (5, 6),
                (6, 7),
                MoveRejection::IllegalGeometry(PieceKind::Rook),
            ),
            ((2, 4), (2, 5), MoveRejection::GeneralsWouldFace),
        ];
        for (from, to, expected) in attempts {
            assert_eq!(
                engine.try_move_piece(from.0, from.1, to.0, to.1),
                Err(expected)
            );
            assert_eq!(engine_state(&engine), before);
        }
    }

    #[test]
    fn moving_into_an_attack_is_not_rejected_at_move_time() {
        // Only the facing rule constrains a move at execution; stepping
        // into an ordinary attack is caught by the checkmate search, not
        // by `move_piece`.
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::General, 1, 5);
        engine.place_piece(PieceColor::Black, PieceKind::Rook, 5, 4);
        assert!(engine.move_piece(1, 5, 1, 4));
        assert!(engine.is_in_check(PieceColor::Red));
    }

    #[test]
    fn successful_moves_hand_the_turn_over() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::Soldier, 4, 5);
        assert!(engine.move_piece(4, 5, 3, 5));
        assert!(!engine.turn_manager.is_valid_turn(PieceColor::Red));
        assert!(engine.turn_manager.is_valid_turn(PieceColor::Black));
        assert_eq!(engine.turn_manager.last_moved, Some(PieceColor::Red));
    }

    #[test]
    fn setup_empty_board_only_clears_pieces() {
        let mut engine = XiangqiEngine::new();
        engine.place_piece(PieceColor::Red, PieceKind::Soldier, 4, 5);
        assert!(engine.move_piece(4, 5, 3, 5));

        engine.setup_empty_board();
        assert!(engine.board.is_empty());
        // Turn bookkeeping survives a board reset.
        assert!(engine.turn_manager.is_valid_turn(PieceColor::Black));
    }
}
