//! Board state: a square grid of cells with the canonical Othello opening.

use crate::utils::format_grid;
use crate::{Location, MAX_EDGE_LENGTH, MIN_EDGE_LENGTH};
use derive_more::{Display, Error};
use std::fmt;

/// One cell of the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The single-character render used by the text interface.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => 'U',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

/// The dimension passed to [`Board::new`] was odd or outside 2..=26.
#[derive(Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "invalid board dimension: {}", dimension)]
pub struct InvalidDimensionError {
    pub dimension: usize,
}

/// A square Othello board, stored row-major.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    cells: Vec<Cell>,
    edge_length: usize,
}

impl Board {
    /// Create a board with every cell empty except the four-center opening
    /// pattern: the descending diagonal of the center square is White, the
    /// ascending diagonal is Black.
    ///
    /// The dimension must be even so the center cells exist, and no larger
    /// than 26 so every row and column has a letter label.
    pub fn new(edge_length: usize) -> Result<Self, InvalidDimensionError> {
        if edge_length < MIN_EDGE_LENGTH || edge_length > MAX_EDGE_LENGTH || edge_length % 2 != 0 {
            return Err(InvalidDimensionError {
                dimension: edge_length,
            });
        }

        let mut board = Self {
            cells: vec![Cell::Empty; edge_length * edge_length],
            edge_length,
        };

        let center = edge_length / 2 - 1;
        board.set(center, center, Cell::White);
        board.set(center, center + 1, Cell::Black);
        board.set(center + 1, center, Cell::Black);
        board.set(center + 1, center + 1, Cell::White);
        Ok(board)
    }

    /// The number of cells on one edge of this board.
    pub fn edge_length(&self) -> usize {
        self.edge_length
    }

    /// Whether signed coordinates name a cell on this board.
    /// Negative values come up during directional walks and are rejected here.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.edge_length
            && (col as usize) < self.edge_length
    }

    /// The cell at `loc`, or `None` if `loc` is off this board.
    pub fn cell(&self, loc: Location) -> Option<Cell> {
        if loc.row < self.edge_length && loc.col < self.edge_length {
            Some(self.at(loc.row, loc.col))
        } else {
            None
        }
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.edge_length + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.edge_length + col] = cell;
    }

    /// Overwrite the named cells, silently ignoring out-of-bounds entries.
    ///
    /// Entries may hold [`Cell::Empty`], so a configuration can also erase
    /// pieces. Nothing checks that the result is reachable by legal play;
    /// arbitrary setups are the point of this operation.
    pub fn apply_configuration<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Cell, usize, usize)>,
    {
        for (cell, row, col) in entries {
            if row < self.edge_length && col < self.edge_length {
                self.set(row, col, cell);
            }
        }
    }

    /// How many cells currently hold `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.count(Cell::Empty) == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_grid(
            self.edge_length,
            self.cells.iter().map(|cell| cell.to_char()),
            f,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_initial_setup() {
        let board = Board::new(8).unwrap();

        assert_eq!(board.at(3, 3), Cell::White);
        assert_eq!(board.at(3, 4), Cell::Black);
        assert_eq!(board.at(4, 3), Cell::Black);
        assert_eq!(board.at(4, 4), Cell::White);

        for row in 0..8 {
            for col in 0..8 {
                if (3..=4).contains(&row) && (3..=4).contains(&col) {
                    continue;
                }
                assert_eq!(board.at(row, col), Cell::Empty);
            }
        }

        assert_eq!(board.count(Cell::Black), 2);
        assert_eq!(board.count(Cell::White), 2);
        assert_eq!(board.count(Cell::Empty), 60);
    }

    #[test]
    fn new_board_smallest_dimension_is_full() {
        let board = Board::new(2).unwrap();
        assert!(board.is_full());
        assert_eq!(board.at(0, 0), Cell::White);
        assert_eq!(board.at(1, 1), Cell::White);
        assert_eq!(board.at(0, 1), Cell::Black);
        assert_eq!(board.at(1, 0), Cell::Black);
    }

    #[test]
    fn new_board_rejects_bad_dimensions() {
        assert_eq!(Board::new(0).unwrap_err().dimension, 0);
        assert!(Board::new(7).is_err());
        assert!(Board::new(28).is_err());
        assert!(Board::new(26).is_ok());
    }

    #[test]
    fn in_bounds_rejects_negatives() {
        let board = Board::new(8).unwrap();
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(7, 7));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, -1));
        assert!(!board.in_bounds(8, 0));
        assert!(!board.in_bounds(0, 8));
    }

    #[test]
    fn cell_is_none_off_the_board() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.cell(Location { row: 1, col: 1 }), Some(Cell::White));
        assert_eq!(board.cell(Location { row: 4, col: 0 }), None);
        assert_eq!(board.cell(Location { row: 0, col: 25 }), None);
    }

    #[test]
    fn apply_configuration_overwrites_and_erases() {
        let mut board = Board::new(4).unwrap();
        board.apply_configuration(vec![
            (Cell::Black, 0, 0),
            (Cell::White, 1, 2),
            (Cell::Empty, 1, 1),
        ]);

        assert_eq!(board.at(0, 0), Cell::Black);
        assert_eq!(board.at(1, 2), Cell::White);
        assert_eq!(board.at(1, 1), Cell::Empty);
    }

    #[test]
    fn apply_configuration_ignores_out_of_bounds() {
        let mut board = Board::new(4).unwrap();
        let before = board.clone();
        board.apply_configuration(vec![(Cell::Black, 4, 0), (Cell::White, 0, 25)]);
        assert_eq!(board, before);
    }

    #[test]
    fn display_renders_labelled_grid() {
        let board = Board::new(4).unwrap();
        let expected = "  abcd\n\
                        a UUUU\n\
                        b UWBU\n\
                        c UBWU\n\
                        d UUUU\n";
        assert_eq!(board.to_string(), expected);
    }
}
