//! The directional capture engine: per-direction flip counts, aggregate
//! move legality, and the atomic flip-and-place mutation.

use crate::board::{Board, Cell};
use crate::game::Player;
use crate::location::Location;
use derive_more::{Display, Error};

/// A unit step along one of the eight board directions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    pub delta_row: isize,
    pub delta_col: isize,
}

/// The eight radial directions in N, NE, E, SE, S, SW, W, NW order.
/// The order is fixed for reproducibility; no two directions touch the same
/// cells, so it never affects the outcome of a move.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { delta_row: -1, delta_col: 0 },
    Direction { delta_row: -1, delta_col: 1 },
    Direction { delta_row: 0, delta_col: 1 },
    Direction { delta_row: 1, delta_col: 1 },
    Direction { delta_row: 1, delta_col: 0 },
    Direction { delta_row: 1, delta_col: -1 },
    Direction { delta_row: 0, delta_col: -1 },
    Direction { delta_row: -1, delta_col: -1 },
];

/// The target cell was occupied, off the board, or no direction captures.
#[derive(Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "illegal move")]
pub struct IllegalMoveError;

impl Board {
    /// Walk outward from `loc` along `dir` and return how many opposing
    /// tiles a piece of `player`'s color placed at `loc` would capture:
    /// the length of the run of opposing tiles, provided the run ends on a
    /// same-colored anchor.
    ///
    /// A walk that leaves the board, reaches an empty cell, or finds the
    /// anchor with no opposing tiles in between captures nothing.
    pub fn flips_in_direction(&self, loc: Location, player: Player, dir: Direction) -> usize {
        let own = player.cell();
        let opposing = (!player).cell();

        let mut row = loc.row as isize + dir.delta_row;
        let mut col = loc.col as isize + dir.delta_col;
        let mut flips = 0;

        while self.in_bounds(row, col) && self.at(row as usize, col as usize) == opposing {
            row += dir.delta_row;
            col += dir.delta_col;
            flips += 1;
        }

        if flips > 0 && self.in_bounds(row, col) && self.at(row as usize, col as usize) == own {
            flips
        } else {
            0
        }
    }

    /// Per-direction capture lengths for placing `player` at `loc`, in
    /// [`DIRECTIONS`] order.
    pub fn flip_counts(&self, loc: Location, player: Player) -> [usize; 8] {
        let mut counts = [0; 8];
        for (count, &dir) in counts.iter_mut().zip(DIRECTIONS.iter()) {
            *count = self.flips_in_direction(loc, player, dir);
        }
        counts
    }

    /// Total tiles flipped by placing `player` at `loc`.
    pub fn total_flips(&self, loc: Location, player: Player) -> usize {
        self.flip_counts(loc, player).iter().sum()
    }

    /// A placement is legal iff the target is an empty cell on this board
    /// and at least one direction captures.
    pub fn is_legal_move(&self, loc: Location, player: Player) -> bool {
        self.cell(loc) == Some(Cell::Empty) && self.total_flips(loc, player) > 0
    }

    /// Place `player` at `loc`, flipping every captured tile.
    ///
    /// All eight counts are taken from the pre-move state before any cell
    /// changes, so the board is untouched on error and the per-direction
    /// flips never interfere with one another. Returns how many tiles were
    /// flipped.
    pub fn apply_move(&mut self, loc: Location, player: Player) -> Result<usize, IllegalMoveError> {
        if self.cell(loc) != Some(Cell::Empty) {
            return Err(IllegalMoveError);
        }

        let counts = self.flip_counts(loc, player);
        let total = counts.iter().sum();
        if total == 0 {
            return Err(IllegalMoveError);
        }

        let own = player.cell();
        for (&count, &dir) in counts.iter().zip(DIRECTIONS.iter()) {
            for step in 1..=count as isize {
                let row = loc.row as isize + dir.delta_row * step;
                let col = loc.col as isize + dir.delta_col * step;
                self.set(row as usize, col as usize, own);
            }
        }
        self.set(loc.row, loc.col, own);

        Ok(total)
    }

    /// Every legal placement for `player`, in row-major scan order.
    pub fn legal_moves(&self, player: Player) -> Vec<Location> {
        let mut moves = Vec::new();
        for row in 0..self.edge_length() {
            for col in 0..self.edge_length() {
                let loc = Location { row, col };
                if self.is_legal_move(loc, player) {
                    moves.push(loc);
                }
            }
        }
        moves
    }

    /// How many legal placements `player` has.
    pub fn count_legal_moves(&self, player: Player) -> usize {
        self.legal_moves(player).len()
    }
}
