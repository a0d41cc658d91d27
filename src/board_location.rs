use crate::errors::XiangqiErrors;
use crate::piece_types::PieceColor;

/// Board coordinate as `(row, column)`: rows 1..=10, columns 1..=9.
///
/// Rows 1..=5 form one half of the board and rows 6..=10 the other, with
/// the river between them. Each palace spans columns 4..=6 on the three
/// back rows of its side.
pub type BoardLocation = (i8, i8);

pub const ROW_COUNT: i8 = 10;
pub const COL_COUNT: i8 = 9;

/// Returns true when the location lies on the 10x9 board.
#[inline]
pub fn is_on_board(x: BoardLocation) -> bool {
    (1..=ROW_COUNT).contains(&x.0) && (1..=COL_COUNT).contains(&x.1)
}

/// Moves a board location by a row and column offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, XiangqiErrors>` - The displaced location if it
///   stays on the board, otherwise `OutOfBounds`.
pub fn move_board_location(
    x: &BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, XiangqiErrors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if is_on_board(y) {
        Ok(y)
    } else {
        Err(XiangqiErrors::OutOfBounds)
    }
}

/// Returns true when the location lies inside the given color's palace:
/// columns 4..=6 at rows 1..=3 for Red, rows 8..=10 for Black.
pub fn is_in_palace(x: BoardLocation, color: PieceColor) -> bool {
    let (row, col) = x;
    if !(4..=6).contains(&col) {
        return false;
    }
    match color {
        PieceColor::Red => (1..=3).contains(&row),
        PieceColor::Black => (8..=10).contains(&row),
    }
}

/// Returns true when the location lies on the given color's own side of
/// the river (Red rows 1..=5, Black rows 6..=10).
pub fn is_on_home_side(x: BoardLocation, color: PieceColor) -> bool {
    match color {
        PieceColor::Red => x.0 <= 5,
        PieceColor::Black => x.0 >= 6,
    }
}
