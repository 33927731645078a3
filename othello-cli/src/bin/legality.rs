//! Arbitrary-configuration legality checker: set up any board position,
//! report the legal moves for both colours, then validate a single
//! entered move.

use othello_cli::{prompt, InputScanner};
use othello_engine::{Board, Location, Player};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = InputScanner::new(stdin.lock());

    prompt("Enter the board dimension: ")?;
    let dimension: usize = input
        .next_token()?
        .ok_or("missing board dimension")?
        .parse()?;
    let mut board = Board::new(dimension)?;
    print!("{}", board);

    println!("Enter board configuration:");
    let entries = input.read_configuration()?;
    board.apply_configuration(entries);
    print!("{}", board);

    println!("Available moves for W:");
    for loc in board.legal_moves(Player::White) {
        println!("{}", loc);
    }
    println!("Available moves for B:");
    for loc in board.legal_moves(Player::Black) {
        println!("{}", loc);
    }

    println!("Enter a move:");
    let valid = match input.read_move_entry()? {
        Some(entry) => try_move(&mut board, entry),
        None => false,
    };
    if valid {
        println!("Valid move.");
    } else {
        println!("Invalid move.");
    }
    print!("{}", board);
    Ok(())
}

/// Apply a `(colour, row, col)` entry if it names a legal placement.
fn try_move(board: &mut Board, (colour, row, col): (char, char, char)) -> bool {
    let player: Player = match colour.to_string().parse() {
        Ok(player) => player,
        Err(_) => return false,
    };
    let loc: Location = match format!("{}{}", row, col).parse() {
        Ok(loc) => loc,
        Err(_) => return false,
    };
    board.apply_move(loc, player).is_ok()
}
