//! Moves module - legal placements and the game-over check
//!
//! The game is over when no offered piece fits at any anchor of the board.
//! The search is exhaustive over every (row, col) in the board; it only skips
//! anchors that put part of the shape outside the board, which the placement
//! check would reject anyway. There are no early-game shortcuts: an empty
//! board is checked like any other.

use block_grid_types::BOARD_SIZE;

use crate::board::Board;
use crate::pieces::{Piece, Shape};

const SIZE: i32 = BOARD_SIZE as i32;

/// Anchors (row, col) in `[0, 10)²` where `shape` can be placed, row-major.
pub fn legal_placements<'a>(
    shape: &'a Shape,
    board: &'a Board,
) -> impl Iterator<Item = (i32, i32)> + 'a {
    let (_, max_r, _, max_c) = shape.extent();
    let rows = (SIZE - max_r as i32).max(0);
    let cols = (SIZE - max_c as i32).max(0);

    (0..rows)
        .flat_map(move |row| (0..cols).map(move |col| (row, col)))
        .filter(move |&(row, col)| board.can_place(row, col, shape))
}

/// Whether `shape` fits anywhere on `board`.
pub fn shape_fits(shape: &Shape, board: &Board) -> bool {
    if shape.cell_count() > board.empty_count() {
        return false;
    }
    legal_placements(shape, board).next().is_some()
}

/// Whether any piece in `offer` fits anywhere on `board`.
///
/// An empty offer has no legal move.
pub fn can_place_any(offer: &[Piece], board: &Board) -> bool {
    offer.iter().any(|piece| shape_fits(&piece.shape, board))
}
