//! Shared board fixtures for wayfind acceptance tests.

use wayfind_tiles::board::TileBoard;

/// Two blank-moves from solved; unique minimal solution.
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

/// Odd-parity position: the solved board is unreachable.
///
/// # Panics
///
/// Never; the cells are a fixed legal permutation.
#[must_use]
pub fn unsolvable_board() -> TileBoard {
    TileBoard::new([[0, 4, 2], [6, 3, 7], [8, 5, 1]]).expect("legal permutation")
}
