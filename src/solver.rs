//! Exhaustive depth-first search over a [`Board`], pruned by the board's
//! legality queries.
//!
//! The search visits empty cells in row-major order and tries candidate
//! digits in ascending order, undoing a placement whenever the branch below
//! it runs dry. It is deliberately plain backtracking: no candidate
//! bookkeeping beyond the board's occupancy masks, no human-style solving
//! techniques, and no randomness, so the result of solving a given board is
//! always the same.

use crate::board::{Board, CELL_COUNT};

/// The ways that [`Solver::solve`] can fail to produce a completed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The exhaustive search ran out of candidates: no assignment of digits
    /// to the empty cells satisfies the row, column, and block constraints.
    #[error("the board has no solution")]
    Unsolvable,

    /// The board was contradictory before the search started, so reporting
    /// "no solution" would be misleading. The coordinates name the first
    /// cell (in row-major order) that duplicates a digit appearing earlier
    /// in its row, column, or block.
    #[error("cell ({row}, {column}) duplicates a digit in its row, column, or block")]
    Inconsistent {
        /// Row of the conflicting cell.
        row: usize,
        /// Column of the conflicting cell.
        column: usize,
    },
}

/// Solver that completes Sudoku boards by depth-first backtracking search.
///
/// The solver keeps no board state between calls; it owns only the frame
/// stack backing the search, so one `Solver` can be reused across many
/// boards without reallocating.
#[derive(Debug)]
pub struct Solver {
    stack: Vec<Frame>,
}

// One tentative placement, equivalent to a suspended frame of the recursive
// formulation of the search.
#[derive(Debug)]
struct Frame {
    row: usize,
    column: usize,
    // The digit currently placed at `(row, column)`. After backtracking, the
    // cell's candidate scan resumes at `digit + 1`.
    digit: u8,
}

impl Solver {
    /// Create a new `Solver`.
    pub fn new() -> Self {
        Solver {
            stack: Vec::with_capacity(CELL_COUNT),
        }
    }

    /// Fill every empty cell of `board` so that each row, column, and block
    /// contains the digits `1` through `9` exactly once.
    ///
    /// Cells that are non-zero on entry are fixed: the search never selects
    /// them, and the completed board agrees with every one of them. A board
    /// with no empty cells (that is not contradictory) succeeds immediately.
    ///
    /// # Errors
    ///
    /// * [`SolveError::Inconsistent`] if the given board already violates
    ///   the distinctness invariant. Detected before the search starts; the
    ///   board is not modified.
    /// * [`SolveError::Unsolvable`] if the exhaustive search finds no
    ///   solution. Every cell the search filled has been cleared back to
    ///   `0`, so the board is returned exactly as given.
    ///
    /// The search is deterministic: empty cells are visited in row-major
    /// order and candidates are tried in ascending order, so solving equal
    /// boards produces equal outcomes.
    pub fn solve(&mut self, board: &mut Board) -> Result<(), SolveError> {
        if let Some((row, column)) = board.find_conflict() {
            return Err(SolveError::Inconsistent { row, column });
        }

        self.stack.clear();
        let mut backtracks = 0usize;

        let mut next = board.find_next_empty();

        log::debug!(
            "Solving board [{}] with [{}] filled cells.",
            board,
            CELL_COUNT - count_empty(board)
        );

        // Each pass of the outer loop works on one empty cell. Placing a
        // digit suspends the cell as a stack frame and moves on to the next
        // empty cell; running out of candidates pops the most recent frame
        // and resumes its cell one digit further on. An empty stack with no
        // candidate left means the search space is exhausted.
        'descend: while let Some((mut row, mut column)) = next {
            let mut candidate = 1;

            loop {
                let placed = (candidate..=9).find(|&digit| board.is_legal(row, column, digit));

                match placed {
                    Some(digit) => {
                        board.set(row, column, digit);
                        self.stack.push(Frame { row, column, digit });

                        next = board.find_next_empty();
                        continue 'descend;
                    }
                    None => match self.stack.pop() {
                        Some(frame) => {
                            board.set(frame.row, frame.column, 0);
                            backtracks += 1;

                            row = frame.row;
                            column = frame.column;
                            candidate = frame.digit + 1;
                        }
                        None => {
                            log::debug!(
                                "Search exhausted all branches after [{}] backtracks.",
                                backtracks
                            );

                            return Err(SolveError::Unsolvable);
                        }
                    },
                }
            }
        }

        log::debug!(
            "Search placed [{}] digits with [{}] backtracks.",
            self.stack.len(),
            backtracks
        );

        Ok(())
    }
}

impl Default for Solver {
    fn default() -> Self {
        Solver::new()
    }
}

fn count_empty(board: &Board) -> usize {
    board
        .cells()
        .iter()
        .flatten()
        .filter(|&&value| value == 0)
        .count()
}
