//! Draw detection.

use crate::board::Board;
use crate::rules::win::has_alignment;
use crate::symbol::Symbol;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A full board on which no symbol holds an alignment.
///
/// The round itself checks the winning move before fullness; this helper
/// serves diagnostics and tests.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && Symbol::iter().all(|symbol| !has_alignment(board, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    // A B A
    // B A A
    // B A B   -- full, no run of three anywhere
    fn full_no_alignment() -> Board {
        let mut board = Board::new(3, 3);
        let layout = [
            (0, 0, Symbol::A),
            (0, 1, Symbol::B),
            (0, 2, Symbol::A),
            (1, 0, Symbol::B),
            (1, 1, Symbol::A),
            (1, 2, Symbol::A),
            (2, 0, Symbol::B),
            (2, 1, Symbol::A),
            (2, 2, Symbol::B),
        ];
        for (row, col, symbol) in layout {
            board.place(Coord::new(row, col), symbol).unwrap();
        }
        board
    }

    #[test]
    fn test_full_board_without_alignment_is_draw() {
        let board = full_no_alignment();
        assert!(board.is_full());
        assert!(is_draw(&board));
    }

    #[test]
    fn test_partial_board_is_not_draw() {
        let mut board = Board::new(3, 3);
        board.place(Coord::new(1, 1), Symbol::A).unwrap();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_with_alignment_is_not_draw() {
        let mut board = Board::new(1, 3);
        for col in 0..3 {
            board.place(Coord::new(0, col), Symbol::A).unwrap();
        }
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
