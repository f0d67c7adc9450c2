//! n-puzzle solver library.
//!
//! Solves the classic sliding-tile puzzle: an n-by-n grid of numbered tiles
//! with one blank cell, where the goal is to reach the sorted configuration
//! in as few blank slides as possible. The [`Board`] type represents one
//! immutable configuration, [`Solver`] runs A* with the Manhattan-distance
//! heuristic, and [`solver::is_solvable`] classifies a board by inversion
//! parity without searching at all.

pub mod board;
pub mod node;
pub mod parse;
pub mod solver;

pub use board::{Board, BoardError, Direction};
pub use parse::{parse_board, ParseError};
pub use solver::Solver;
