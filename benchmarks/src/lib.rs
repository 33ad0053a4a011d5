//! Shared helpers for wayfind benchmark suites.

use wayfind_tiles::board::TileBoard;

/// Two blank-moves from solved.
///
/// # Panics
///
/// Never; the cells are a fixed legal permutation.
#[must_use]
pub fn two_move_board() -> TileBoard {
    TileBoard::new([[1, 4, 2], [3, 0, 5], [6, 7, 8]]).expect("legal permutation")
}

/// Ten moves to solve.
///
/// # Panics
///
/// Never; the digits are a fixed legal permutation.
#[must_use]
pub fn ten_move_board() -> TileBoard {
    TileBoard::parse("142637850").expect("legal permutation")
}
