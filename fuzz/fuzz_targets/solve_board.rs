#![no_main]

use backtrack_sudoku::{Board, SolveError, Solver, SIDE_LENGTH};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct BoardInput {
    cells: [[u8; SIDE_LENGTH]; SIDE_LENGTH],
}

impl<'a> arbitrary::Arbitrary<'a> for BoardInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let raw = u.arbitrary::<[u8; 81]>()?;

        let mut cells = [[0; SIDE_LENGTH]; SIDE_LENGTH];
        for (index, byte) in raw.into_iter().enumerate() {
            cells[index / SIDE_LENGTH][index % SIDE_LENGTH] = byte % 10;
        }

        Ok(BoardInput { cells })
    }
}

fuzz_target!(|data: BoardInput| {
    let original = Board::new(data.cells);
    let mut board = original.clone();

    match Solver::new().solve(&mut board) {
        // Success must yield a complete valid grid extending the givens.
        Ok(()) => {
            assert!(board.is_solved());
            for row in 0..SIDE_LENGTH {
                for column in 0..SIDE_LENGTH {
                    if original.get(row, column) != 0 {
                        assert_eq!(board.get(row, column), original.get(row, column));
                    }
                }
            }
        }
        // Failure must hand the board back untouched.
        Err(SolveError::Unsolvable) => assert_eq!(board, original),
        Err(SolveError::Inconsistent { row, column }) => {
            assert_ne!(original.get(row, column), 0);
            assert_eq!(board, original);
        }
    }
});
