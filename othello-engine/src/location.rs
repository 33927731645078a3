//! Code for working with [`Location`]s on the board.

use crate::MAX_EDGE_LENGTH;
use derive_more::{Display, Error, From};
use std::fmt::{self, Write};
use std::str::FromStr;

/// A 0-based (row, column) pair on the board.
///
/// Both components are bounded by the letter labels of the text notation
/// (`'a'..='z'`), not by any particular board; whether a location is on a
/// given board is the board's question.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, From)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    /// Convert from row and column coordinates.
    /// Panics if either exceeds the largest labelled coordinate.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < MAX_EDGE_LENGTH && col < MAX_EDGE_LENGTH);
        Self { row, col }
    }
}

/// The string was not exactly two letters in `'a'..='z'`.
#[derive(Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from two-letter notation, row letter first ("cd").
impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row = letter_index(chars.next().ok_or(ParseLocationError)?)?;
        let col = letter_index(chars.next().ok_or(ParseLocationError)?)?;

        if chars.next() != None {
            return Err(ParseLocationError);
        }

        Ok(Self { row, col })
    }
}

/// Convert this [`Location`] into two-letter notation ("cd").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + self.row as u8) as char)?;
        f.write_char((b'a' + self.col as u8) as char)
    }
}

fn letter_index(c: char) -> Result<usize, ParseLocationError> {
    if c.is_ascii_lowercase() {
        Ok((c as u8 - b'a') as usize)
    } else {
        Err(ParseLocationError)
    }
}
