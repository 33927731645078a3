//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format a square grid of cell characters with `a..` column and row labels.
/// `piece_iter` must yield exactly `edge_length * edge_length` items.
pub fn format_grid<T: Iterator<Item = char>>(
    edge_length: usize,
    mut piece_iter: T,
    f: &mut Formatter,
) -> fmt::Result {
    write!(f, "  ")?;
    for col in 0..edge_length {
        write!(f, "{}", (b'a' + col as u8) as char)?;
    }
    writeln!(f)?;

    for row in 0..edge_length {
        write!(f, "{} ", (b'a' + row as u8) as char)?;
        for _ in 0..edge_length {
            write!(f, "{}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
        writeln!(f)?;
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
