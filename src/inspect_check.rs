//! Check and checkmate inspection.
//!
//! `is_in_check` asks whether any opposing piece has a legal move onto the
//! square held by a color's General. `has_legal_moves` enumerates every
//! candidate move for a color across the 10x9 board and trials each one
//! through the engine's own validation and execution path; a candidate
//! counts only if it executes and leaves the color out of check. Trials run
//! under `TrialGuard`, which captures the engine's register, turn state,
//! and result up front and restores them when it drops, so no exit path can
//! leak a half-mutated engine.
//!
//! Turn bookkeeping is not part of a trial: the question "does this color
//! have an escaping move" has the same answer regardless of whose turn it
//! happens to be when it is asked.

use crate::board_location::{BoardLocation, COL_COUNT, ROW_COUNT};
use crate::engine::XiangqiEngine;
use crate::move_rules::validate::is_legal_move;
use crate::piece_register::PieceRegister;
use crate::piece_types::{GameResult, PieceColor};
use crate::turn_manager::TurnManager;

/// Saved engine state for one trial move.
struct EngineSnapshot {
    board: PieceRegister,
    turn_manager: TurnManager,
    game_result: GameResult,
}

/// Restores the captured engine state when dropped.
struct TrialGuard<'a> {
    engine: &'a mut XiangqiEngine,
    saved: Option<EngineSnapshot>,
}

impl<'a> TrialGuard<'a> {
    fn new(engine: &'a mut XiangqiEngine) -> Self {
        let saved = EngineSnapshot {
            board: engine.board.clone(),
            turn_manager: engine.turn_manager.clone(),
            game_result: engine.game_result,
        };
        Self {
            engine,
            saved: Some(saved),
        }
    }

    fn engine(&mut self) -> &mut XiangqiEngine {
        self.engine
    }
}

impl Drop for TrialGuard<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.engine.board = saved.board;
            self.engine.turn_manager = saved.turn_manager;
            self.engine.game_result = saved.game_result;
        }
    }
}

/// Returns true when any opposing piece has a legal move onto the square
/// held by the color's General. A board with no such General is never in
/// check.
pub fn is_in_check(register: &PieceRegister, color: PieceColor) -> bool {
    let Some(general_location) = register.find_general(color) else {
        return false;
    };
    register.iter().any(|(location, piece)| {
        piece.color == color.opposite()
            && is_legal_move(register, *location, general_location, piece)
    })
}

/// Returns true when the color has at least one move that executes and
/// does not leave its own General attacked. Short-circuits on the first
/// such move.
pub fn has_legal_moves(engine: &mut XiangqiEngine, color: PieceColor) -> bool {
    let origins: Vec<BoardLocation> = engine
        .board
        .iter()
        .filter(|(_, piece)| piece.color == color)
        .map(|(location, _)| *location)
        .collect();

    for from in origins {
        for row in 1..=ROW_COUNT {
            for col in 1..=COL_COUNT {
                let to = (row, col);
                if to == from {
                    continue;
                }
                if trial_move_resolves_check(engine, from, to, color) {
                    return true;
                }
            }
        }
    }
    false
}

/// Checkmate: in check with no move that resolves it.
pub fn detect_checkmate(engine: &mut XiangqiEngine, color: PieceColor) -> bool {
    is_in_check(&engine.board, color) && !has_legal_moves(engine, color)
}

/// Runs one candidate move under a restore-on-drop snapshot and reports
/// whether it leaves the color out of check.
fn trial_move_resolves_check(
    engine: &mut XiangqiEngine,
    from: BoardLocation,
    to: BoardLocation,
    color: PieceColor,
) -> bool {
    let mut guard = TrialGuard::new(engine);
    let engine = guard.engine();

    if engine.validate_ignoring_turn(from, to).is_err() {
        return false;
    }
    engine.execute_move(from, to);
    !is_in_check(&engine.board, color)
}
