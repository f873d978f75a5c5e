//! Board storage and placement.

use crate::symbol::Symbol;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No symbol placed yet.
    Empty,
    /// Cell claimed by a symbol.
    Occupied(Symbol),
}

/// Zero-based cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new, Display, Serialize, Deserialize)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

/// Why a placement was rejected.
///
/// Always recoverable: the caller re-solicits a move and tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinate outside the board.
    #[display("coordinate {_0} is outside the board")]
    OutOfBounds(#[error(not(source))] Coord),
    /// Target cell already holds a symbol.
    #[display("cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Coord),
}

/// A `rows x cols` grid of cells, row-major.
///
/// Dimensions are fixed at creation and hold for the board's lifetime.
/// The only mutation is placing a symbol into an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board. Callers guarantee `rows >= 1, cols >= 1`.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `target`, `None` out of bounds.
    pub fn get(&self, target: Coord) -> Option<Cell> {
        self.index(target).map(|index| self.cells[index])
    }

    /// Places `symbol` at `target`.
    ///
    /// Succeeds only when the coordinate is in bounds and the cell is
    /// empty; on failure the board is unchanged.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] or [`MoveError::Occupied`].
    pub fn place(&mut self, target: Coord, symbol: Symbol) -> Result<(), MoveError> {
        let index = self.index(target).ok_or(MoveError::OutOfBounds(target))?;
        match self.cells[index] {
            Cell::Empty => {
                self.cells[index] = Cell::Occupied(symbol);
                Ok(())
            }
            Cell::Occupied(_) => Err(MoveError::Occupied(target)),
        }
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Coordinates currently holding `symbol`, in row-major scan order.
    pub fn occupied(&self, symbol: Symbol) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            (*cell == Cell::Occupied(symbol)).then(|| Coord::new(index / self.cols, index % self.cols))
        })
    }

    fn index(&self, target: Coord) -> Option<usize> {
        (target.row < self.rows && target.col < self.cols)
            .then(|| target.row * self.cols + target.col)
    }
}
