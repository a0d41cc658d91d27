//! Sparse board storage.
//!
//! `PieceRegister` is pure storage: a map from board location to piece
//! record with at most one piece per square. It performs no legality
//! checking of any kind; placement overwrites unconditionally so test
//! scenarios can stage arbitrary, partially populated positions.

use std::collections::HashMap;

use crate::board_location::BoardLocation;
use crate::piece_types::{PieceColor, PieceKind, PieceRecord};

#[derive(Debug, Clone, Default)]
pub struct PieceRegister {
    squares: HashMap<BoardLocation, PieceRecord>,
}

impl PieceRegister {
    pub fn new() -> Self {
        Self {
            squares: HashMap::new(),
        }
    }

    /// Removes every piece from the board.
    pub fn clear(&mut self) {
        self.squares.clear();
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Places a piece with no rule checking, overwriting any occupant.
    pub fn place(&mut self, location: BoardLocation, piece: PieceRecord) {
        self.squares.insert(location, piece);
    }

    /// Views the piece on a square, if any.
    pub fn view(&self, location: &BoardLocation) -> Option<&PieceRecord> {
        self.squares.get(location)
    }

    /// Removes and returns the piece on a square, if any.
    pub fn remove(&mut self, location: &BoardLocation) -> Option<PieceRecord> {
        self.squares.remove(location)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BoardLocation, &PieceRecord)> {
        self.squares.iter()
    }

    /// Locates the General of the given color, if present.
    pub fn find_general(&self, color: PieceColor) -> Option<BoardLocation> {
        self.squares
            .iter()
            .find(|(_, piece)| piece.kind == PieceKind::General && piece.color == color)
            .map(|(location, _)| *location)
    }
}
