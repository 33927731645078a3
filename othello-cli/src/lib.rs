//! Shared stdin plumbing for the two Othello programs: a scanf-like
//! scanner over any `BufRead`, and the `!`-terminated configuration
//! stream format.

use othello_engine::Cell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// The character ending a configuration stream.
pub const CONFIG_SENTINEL: char = '!';

/// Print a prompt without a trailing newline and flush it.
pub fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text);
    io::stdout().flush()
}

/// Reads whitespace-separated characters and tokens from a `BufRead`,
/// buffering one line at a time so prompts can interleave with input.
pub struct InputScanner<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> InputScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn refill(&mut self) -> io::Result<bool> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        self.pending.extend(line.chars());
        Ok(true)
    }

    /// The next non-whitespace character, or `None` at end of input.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        loop {
            while let Some(c) = self.pending.pop_front() {
                if !c.is_whitespace() {
                    return Ok(Some(c));
                }
            }
            if !self.refill()? {
                return Ok(None);
            }
        }
    }

    /// The next whitespace-delimited token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        let first = match self.next_char()? {
            Some(c) => c,
            None => return Ok(None),
        };

        let mut token = String::new();
        token.push(first);
        while let Some(&c) = self.pending.front() {
            if c.is_whitespace() {
                break;
            }
            token.push(c);
            self.pending.pop_front();
        }
        Ok(Some(token))
    }

    /// Read `(colour, row, col)` character triples until the sentinel or
    /// end of input. The sentinel ends the stream wherever it appears,
    /// including mid-triple.
    ///
    /// Colour characters map to cells as in the board render (`B`/`W`/`U`);
    /// a triple with any other colour or with coordinates outside the
    /// letter range is skipped. Bounds against a concrete board are left to
    /// `Board::apply_configuration`.
    pub fn read_configuration(&mut self) -> io::Result<Vec<(Cell, usize, usize)>> {
        let mut entries = Vec::new();
        loop {
            let colour = match self.next_char()? {
                None | Some(CONFIG_SENTINEL) => break,
                Some(c) => c,
            };
            let row = match self.next_char()? {
                None | Some(CONFIG_SENTINEL) => break,
                Some(c) => c,
            };
            let col = match self.next_char()? {
                None | Some(CONFIG_SENTINEL) => break,
                Some(c) => c,
            };

            if let (Some(cell), Some(row), Some(col)) =
                (cell_for(colour), letter_index(row), letter_index(col))
            {
                entries.push((cell, row, col));
            }
        }
        Ok(entries)
    }

    /// Read a single `(colour, row, col)` move entry, or `None` if the
    /// input ends first.
    pub fn read_move_entry(&mut self) -> io::Result<Option<(char, char, char)>> {
        let colour = match self.next_char()? {
            Some(c) => c,
            None => return Ok(None),
        };
        let row = match self.next_char()? {
            Some(c) => c,
            None => return Ok(None),
        };
        let col = match self.next_char()? {
            Some(c) => c,
            None => return Ok(None),
        };
        Ok(Some((colour, row, col)))
    }
}

fn cell_for(c: char) -> Option<Cell> {
    match c {
        'B' => Some(Cell::Black),
        'W' => Some(Cell::White),
        'U' => Some(Cell::Empty),
        _ => None,
    }
}

fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}
