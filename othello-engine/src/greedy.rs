//! A one-ply greedy move selector: maximize immediate captures.

use crate::board::{Board, Cell};
use crate::game::Player;
use crate::location::Location;

/// Scan every cell in row-major order and return the legal placement with
/// the highest total capture count, together with that count.
///
/// The comparison is strictly greater-than, so the first cell to reach the
/// maximum keeps it; later equal scores never replace it. Returns `None`
/// when `player` has no legal move.
pub fn select_move(board: &Board, player: Player) -> Option<(Location, usize)> {
    let mut best: Option<(Location, usize)> = None;

    for row in 0..board.edge_length() {
        for col in 0..board.edge_length() {
            let loc = Location { row, col };
            if board.cell(loc) != Some(Cell::Empty) {
                continue;
            }
            let score = board.total_flips(loc, player);
            if score > 0 && score > best.map_or(0, |(_, s)| s) {
                best = Some((loc, score));
            }
        }
    }

    best
}

/// Select the greedy move for `player` and apply it, returning where the
/// piece was placed, or `None` when no legal move exists.
pub fn make_greedy_move(board: &mut Board, player: Player) -> Option<Location> {
    let (loc, _) = select_move(board, player)?;
    // A positive score from the scan just above makes this placement legal.
    board.apply_move(loc, player).ok()?;
    Some(loc)
}
