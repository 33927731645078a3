//! `othello-engine` is a complete Othello (Reversi) engine for square boards
//! of any even edge length up to 26.
//!
//! The crate is layered leaf-first:
//!
//!  - [`Board`] holds the grid of cells and the canonical opening pattern,
//!    and knows nothing about captures.
//!  - The capture engine (implemented on [`Board`]) computes per-direction
//!    flip counts, aggregate move legality, and the atomic flip-and-place
//!    mutation. This is the heart of the crate.
//!  - [`select_move`] is a one-ply greedy selector on top of the engine,
//!    suitable for an automated player.
//!
//! Coordinates are communicated as two lowercase letters ([`Location`]),
//! which is what bounds the edge length to 26.

mod board;
mod capture;
mod game;
mod greedy;
mod location;
mod utils;

pub use board::*;
pub use capture::*;
pub use game::*;
pub use greedy::*;
pub use location::*;

/// The smallest supported board edge length.
pub const MIN_EDGE_LENGTH: usize = 2;

/// The largest edge length addressable with single-letter coordinate labels.
pub const MAX_EDGE_LENGTH: usize = 26;
