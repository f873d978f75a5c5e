//! Alignment detection for arbitrary board sizes.

use crate::board::{Board, Cell, Coord};
use crate::symbol::Symbol;
use tracing::instrument;

/// Run length that wins, independent of board size.
pub const WIN_LENGTH: usize = 3;

/// The four scan directions: horizontal, vertical, and the two diagonals.
/// A run and its 180-degree reverse share an axis, so scanning forward
/// from every occupied cell visits each run at its first cell in
/// row-major order.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// True iff `symbol` holds [`WIN_LENGTH`] consecutive cells along one of
/// the four axes.
///
/// Pure and deterministic, O(rows * cols) per call. A symbol with no
/// cells yields false, as does a board too small to hold a run in a
/// given direction.
#[instrument]
pub fn has_alignment(board: &Board, symbol: Symbol) -> bool {
    for origin in board.occupied(symbol) {
        for (step_row, step_col) in DIRECTIONS {
            let mut length = 1;
            let mut row = origin.row as isize;
            let mut col = origin.col as isize;
            while length < WIN_LENGTH {
                row += step_row;
                col += step_col;
                match cell_at(board, row, col) {
                    Some(Cell::Occupied(found)) if found == symbol => length += 1,
                    _ => break,
                }
            }
            if length == WIN_LENGTH {
                return true;
            }
        }
    }
    false
}

fn cell_at(board: &Board, row: isize, col: isize) -> Option<Cell> {
    if row < 0 || col < 0 {
        return None;
    }
    board.get(Coord::new(row as usize, col as usize))
}
