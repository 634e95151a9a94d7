#![deny(missing_docs)]

//! Solver for [Sudoku](https://en.wikipedia.org/wiki/Sudoku) puzzles using
//! depth-first [backtracking](https://en.wikipedia.org/wiki/Backtracking)
//! search.
//!
//! The crate splits the problem into its two halves: [`Board`] stores the
//! 9 × 9 grid and answers placement-legality queries, while [`Solver`]
//! drives the search that fills every empty cell or proves that no filling
//! exists.

pub(crate) mod board;
pub(crate) mod solver;

pub use board::{Board, ParseBoardError, BLOCK_SIDE_LENGTH, CELL_COUNT, SIDE_LENGTH};
pub use solver::{SolveError, Solver};
