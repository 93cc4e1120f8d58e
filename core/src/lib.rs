//! Board engine for a text-based single-player Minesweeper game.
//!
//! The engine owns all game state and exposes setup (board construction,
//! mine planting, display computation), queries (adjacency counts, win and
//! game-over checks, render snapshots), and the reveal operation with its
//! flood-fill cascade. Driving the game turn by turn is left to a caller
//! such as the `minegrid` command-line binary.

pub use board::*;
pub use cell::*;
pub use coords::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod coords;
mod error;
mod generator;
mod types;
