//! Human-versus-computer Othello on a board dimension read from stdin.
//!
//! The computer plays the one-ply greedy strategy. A malformed or illegal
//! human move forfeits the game to the computer on the spot; there is no
//! re-prompt.

use othello_cli::{prompt, InputScanner};
use othello_engine::{make_greedy_move, Board, Location, Player};
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

    prompt("Computer plays (B/W): ")?;
    let computer: Player = input
        .next_token()?
        .ok_or("missing computer colour")?
        .parse()?;
    let human = !computer;

    let mut turn = Player::Black;
    let mut print_needed = true;
    let mut forfeit_winner = None;

    loop {
        if print_needed {
            print!("{}", board);
            print_needed = false;
        }
        if board.is_game_over() {
            break;
        }

        if turn == human {
            if board.count_legal_moves(human) > 0 {
                prompt(&format!("Enter move for colour {} (RowCol): ", human))?;
                let entered = match input.next_token()? {
                    Some(token) => token.parse::<Location>().ok(),
                    None => None,
                };

                match entered.and_then(|loc| board.apply_move(loc, human).ok()) {
                    Some(_) => {
                        turn = computer;
                        print_needed = true;
                    }
                    None => {
                        println!("Invalid move.");
                        forfeit_winner = Some(computer);
                        break;
                    }
                }
            } else {
                println!("{} player has no valid move.", human);
                turn = computer;
            }
        } else if board.count_legal_moves(computer) > 0 {
            if let Some(loc) = make_greedy_move(&mut board, computer) {
                println!("Computer places {} at {}.", computer, loc);
            }
            turn = human;
            print_needed = true;
        } else {
            println!("{} player has no valid move.", computer);
            turn = human;
        }
    }

    match forfeit_winner.or_else(|| board.winner()) {
        Some(winner) => println!("{} player wins.", winner),
        None => println!("Draw!"),
    }
    Ok(())
}
