//! Players, game-over determination, and the winner query.
//!
//! The turn loop itself lives with the callers; this module only answers
//! the questions a loop needs: is the session over, and who holds more
//! cells. The forfeit rule for an invalid human move is a loop policy,
//! not an engine rule.

use crate::board::{Board, Cell};
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;

/// One of the two colors in a game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// The cell state this player's pieces occupy.
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::Black => "B",
            Player::White => "W",
        })
    }
}

/// The string was not `B` or `W`.
#[derive(Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "invalid player color")]
pub struct ParsePlayerError;

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Player::Black),
            "W" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

impl Board {
    /// The game ends when the board is full or neither color can move.
    pub fn is_game_over(&self) -> bool {
        self.is_full()
            || (self.count_legal_moves(Player::Black) == 0
                && self.count_legal_moves(Player::White) == 0)
    }

    /// The color holding strictly more cells, or `None` for a draw.
    pub fn winner(&self) -> Option<Player> {
        let black = self.count(Cell::Black);
        let white = self.count(Cell::White);
        if black > white {
            Some(Player::Black)
        } else if white > black {
            Some(Player::White)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_not_and_default() {
        assert_eq!(!Player::Black, Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::default(), Player::Black);
    }

    #[test]
    fn player_parse_and_display() {
        assert_eq!("B".parse(), Ok(Player::Black));
        assert_eq!("W".parse(), Ok(Player::White));
        assert_eq!("b".parse::<Player>(), Err(ParsePlayerError));
        assert_eq!("X".parse::<Player>(), Err(ParsePlayerError));
        assert_eq!(Player::White.to_string(), "W");
    }

    #[test]
    fn opening_board_is_not_over() {
        let board = Board::new(8).unwrap();
        assert!(!board.is_game_over());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn full_board_is_over_regardless_of_moves() {
        let mut board = Board::new(4).unwrap();
        let all_black: Vec<_> = (0..4)
            .flat_map(|row| (0..4).map(move |col| (Cell::Black, row, col)))
            .collect();
        board.apply_configuration(all_black);

        assert!(board.is_full());
        assert!(board.is_game_over());
        assert_eq!(board.winner(), Some(Player::Black));
    }

    #[test]
    fn one_moveless_player_does_not_end_the_game() {
        // Black at the west edge with White beside it: Black can still
        // capture eastward, but White's only bracket would sit off-board.
        let mut board = Board::new(4).unwrap();
        board.apply_configuration(vec![
            (Cell::Empty, 1, 1),
            (Cell::Empty, 1, 2),
            (Cell::Empty, 2, 1),
            (Cell::Empty, 2, 2),
            (Cell::Black, 0, 0),
            (Cell::White, 0, 1),
        ]);

        assert!(board.count_legal_moves(Player::Black) > 0);
        assert_eq!(board.count_legal_moves(Player::White), 0);
        assert!(!board.is_game_over());
    }

    #[test]
    fn equal_counts_are_a_draw() {
        let mut board = Board::new(4).unwrap();
        let mut entries = Vec::new();
        for row in 0..4 {
            for col in 0..4 {
                let cell = if row < 2 { Cell::Black } else { Cell::White };
                entries.push((cell, row, col));
            }
        }
        board.apply_configuration(entries);

        assert!(board.is_game_over());
        assert_eq!(board.winner(), None);
    }
}
