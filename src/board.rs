//! A [Sudoku puzzle](https://en.wikipedia.org/wiki/Sudoku) is a 9 × 9 grid
//! partitioned into nine 3 × 3 blocks. Each row, column, and block contains
//! the digits `1` through `9` with no repeats.
//!
//! [`Board`] stores the current cell values together with per-row,
//! per-column, and per-block occupancy masks, so that asking "may digit `d`
//! go in cell `(r, c)`?" is a constant-time operation.

use core::{fmt, str::FromStr};

/// The number of cells along one side of the board.
pub const SIDE_LENGTH: usize = 9;

/// The number of cells along one side of a block.
pub const BLOCK_SIDE_LENGTH: usize = 3;

/// The total number of cells in the board.
pub const CELL_COUNT: usize = SIDE_LENGTH * SIDE_LENGTH;

/// A 9 × 9 grid of cell values, where `0` marks an empty cell and `1`
/// through `9` mark a placed digit.
///
/// The board does not police the Sudoku distinctness invariant on its own:
/// [`Board::set`] places whatever it is given. Callers that mutate the board
/// are expected to consult [`Board::is_legal`] first, the way
/// [`Solver::solve`](crate::Solver::solve) does. Placing a digit that
/// duplicates one in its row, column, or block leaves the occupancy masks
/// tracking a board that cannot exist, and later legality answers will be
/// wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Board {
    cells: [[u8; SIDE_LENGTH]; SIDE_LENGTH],

    // Occupancy masks, one per unit: bit `d - 1` is set when digit `d` is
    // present somewhere in that row, column, or block.
    row_masks: [u16; SIDE_LENGTH],
    column_masks: [u16; SIDE_LENGTH],
    block_masks: [u16; SIDE_LENGTH],
}

impl Board {
    /// Create a board with every cell empty.
    pub fn empty() -> Self {
        Board {
            cells: [[0; SIDE_LENGTH]; SIDE_LENGTH],
            row_masks: [0; SIDE_LENGTH],
            column_masks: [0; SIDE_LENGTH],
            block_masks: [0; SIDE_LENGTH],
        }
    }

    /// Create a board from an array of cell values in row-major order, where
    /// `0` marks an empty cell.
    ///
    /// The given values are not checked for duplicates within a row, column,
    /// or block; use [`Board::find_conflict`] to detect a contradictory
    /// board before searching it.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than `9`.
    pub fn new(cells: [[u8; SIDE_LENGTH]; SIDE_LENGTH]) -> Self {
        let mut board = Board::empty();

        for (row, values) in cells.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                if value != 0 {
                    board.set(row, column, value);
                }
            }
        }

        board
    }

    /// Return the value at the given cell: `0` for empty, `1` through `9`
    /// for a placed digit.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is `9` or greater.
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.cells[row][column]
    }

    /// Place a digit (`1` through `9`) at the given cell, or clear the cell
    /// with `0`.
    ///
    /// No legality check is performed; see the type-level documentation for
    /// the contract this puts on callers.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is `9` or greater, or if `value` is
    /// greater than `9`.
    pub fn set(&mut self, row: usize, column: usize, value: u8) {
        assert!(value <= 9, "cell value {value} out of range");

        let block = block_index(row, column);
        let old = self.cells[row][column];

        if old != 0 {
            let bit = digit_bit(old);
            self.row_masks[row] &= !bit;
            self.column_masks[column] &= !bit;
            self.block_masks[block] &= !bit;
        }

        if value != 0 {
            let bit = digit_bit(value);
            self.row_masks[row] |= bit;
            self.column_masks[column] |= bit;
            self.block_masks[block] |= bit;
        }

        self.cells[row][column] = value;
    }

    /// Return true if placing `digit` at the given empty cell would not
    /// duplicate `digit` elsewhere in that cell's row, column, or block.
    ///
    /// The target cell itself must be empty: a cell's own value is counted
    /// by the occupancy masks, so probing an occupied cell would report its
    /// current digit as illegal.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is `9` or greater, or if `digit` is not
    /// in `1..=9`.
    pub fn is_legal(&self, row: usize, column: usize, digit: u8) -> bool {
        assert!((1..=9).contains(&digit), "digit {digit} out of range");
        debug_assert_eq!(self.cells[row][column], 0, "legality probe of an occupied cell");

        let occupied =
            self.row_masks[row] | self.column_masks[column] | self.block_masks[block_index(row, column)];

        occupied & digit_bit(digit) == 0
    }

    /// Return the first empty cell in row-major order (left to right, top to
    /// bottom), or `None` if every cell is filled.
    ///
    /// The scan order is part of the interface: it fixes the order in which
    /// the solver branches, which keeps solving deterministic.
    pub fn find_next_empty(&self) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(row, values)| {
            values
                .iter()
                .position(|&value| value == 0)
                .map(|column| (row, column))
        })
    }

    /// Return the first cell in row-major order whose value duplicates a
    /// digit appearing earlier in its row, column, or block, or `None` if
    /// the board satisfies the distinctness invariant.
    pub fn find_conflict(&self) -> Option<(usize, usize)> {
        let mut row_seen = [0u16; SIDE_LENGTH];
        let mut column_seen = [0u16; SIDE_LENGTH];
        let mut block_seen = [0u16; SIDE_LENGTH];

        for (row, values) in self.cells.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                if value == 0 {
                    continue;
                }

                let bit = digit_bit(value);
                let block = block_index(row, column);

                if (row_seen[row] | column_seen[column] | block_seen[block]) & bit != 0 {
                    return Some((row, column));
                }

                row_seen[row] |= bit;
                column_seen[column] |= bit;
                block_seen[block] |= bit;
            }
        }

        None
    }

    /// Return true if no cell is empty.
    pub fn is_filled(&self) -> bool {
        self.find_next_empty().is_none()
    }

    /// Return true if the board is a complete valid solution: every cell
    /// filled and no duplicate digit in any row, column, or block.
    pub fn is_solved(&self) -> bool {
        self.is_filled() && self.find_conflict().is_none()
    }

    /// Return the cell values in row-major order.
    pub fn cells(&self) -> &[[u8; SIDE_LENGTH]; SIDE_LENGTH] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Index of the block containing the given cell. Blocks are numbered `0`
/// through `8` in row-major order, so the block spans rows
/// `[3 * (row / 3), 3 * (row / 3) + 3)` and the matching column range.
fn block_index(row: usize, column: usize) -> usize {
    (row / BLOCK_SIDE_LENGTH) * BLOCK_SIDE_LENGTH + column / BLOCK_SIDE_LENGTH
}

fn digit_bit(digit: u8) -> u16 {
    1 << (digit - 1)
}

/// Error produced when parsing a [`Board`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// The input did not contain exactly one character per cell.
    #[error("board text must be exactly 81 characters, found {length}")]
    WrongLength {
        /// The number of characters in the input.
        length: usize,
    },
    /// The input contained a character other than `0`-`9` or `.`.
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The position of the offending character in the input.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse a board from 81 characters in row-major order, where `1`
    /// through `9` are placed digits and `0` or `.` is an empty cell.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let length = input.chars().count();
        if length != CELL_COUNT {
            return Err(ParseBoardError::WrongLength { length });
        }

        let mut board = Board::empty();
        for (index, character) in input.chars().enumerate() {
            let value = match character.to_digit(10) {
                Some(value) => value as u8,
                None if character == '.' => 0,
                None => return Err(ParseBoardError::InvalidCharacter { character, index }),
            };

            if value != 0 {
                board.set(index / SIDE_LENGTH, index % SIDE_LENGTH, value);
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Format the board as 81 characters in row-major order with `0` for
    /// empty cells, the exact inverse of the [`FromStr`] implementation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for values in &self.cells {
            for &value in values {
                write!(f, "{}", char::from(b'0' + value))?;
            }
        }

        Ok(())
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl TryFrom<String> for Board {
    type Error = ParseBoardError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        input.parse()
    }
}
