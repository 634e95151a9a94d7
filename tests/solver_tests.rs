mod common;

use backtrack_sudoku::{Board, SolveError, Solver};
use common::{assert_givens_preserved, assert_solved_invariants};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

#[test]
fn single_sudoku_test() {
    env_logger::init();

    let sudoku_input =
        "006008047000607200304009060003100005010020480740005009020930600081000034905006170";
    let expected_solved_sudoku =
        "296318547158647293374259861863194725519723486742865319427931658681572934935486172";

    log::debug!(
        "Attempting to solve [{}] into [{}].",
        sudoku_input,
        expected_solved_sudoku
    );

    let mut board: Board = sudoku_input.parse().unwrap();
    Solver::new().solve(&mut board).unwrap();

    assert_eq!(board.to_string(), expected_solved_sudoku);
}

#[test]
fn classic_puzzle_has_the_known_solution() {
    let sudoku_input =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let expected_solved_sudoku =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    let mut board: Board = sudoku_input.parse().unwrap();
    Solver::new().solve(&mut board).unwrap();

    assert_eq!(board.to_string(), expected_solved_sudoku);
}

// Puzzles that solve in well under 100,000 placements each.
const SOLVABLE_PUZZLES: &[&str] = &[
    "006008047000607200304009060003100005010020480740005009020930600081000034905006170",
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
    "000704005020010070000080002090006250600070008053200010400090000030060090200301000",
    "800000000003600000070090200050007000000045700000100030001000068008500010090000400",
];

#[test]
fn batch_solve_soundness() {
    SOLVABLE_PUZZLES.par_iter().for_each(|sudoku_input| {
        let mut board: Board = sudoku_input.parse().unwrap();
        let mut solver = Solver::new();

        solver.solve(&mut board).unwrap();

        assert_solved_invariants(&board);
        assert_givens_preserved(sudoku_input, &board);
    });
}

#[test]
#[ignore]
// A 17-clue board whose top band is nearly empty, which is the worst case
// for the row-major candidate scan: the search makes tens of millions of
// placements. Takes upwards of a minute when not compiled in release mode.
fn sparse_board_backtracks_heavily() {
    let sudoku_input =
        "000000010400000000020000000000050407008000300001090000300400200050100000000806000";

    let mut board: Board = sudoku_input.parse().unwrap();
    Solver::new().solve(&mut board).unwrap();

    assert_solved_invariants(&board);
    assert_givens_preserved(sudoku_input, &board);
}

#[test]
fn empty_board_is_solvable() {
    let mut board = Board::empty();

    Solver::new().solve(&mut board).unwrap();

    assert_solved_invariants(&board);
}

#[test]
fn contradictory_givens_are_distinguished_from_unsolvable() {
    // Two 5s in the top row: rejected up front, with the second of the pair
    // named in the error.
    let mut twin_fives: Board =
        "500050000000000000000000000000000000000000000000000000000000000000000000000000000"
            .parse()
            .unwrap();
    assert_eq!(
        Solver::new().solve(&mut twin_fives),
        Err(SolveError::Inconsistent { row: 0, column: 4 })
    );

    // A consistent board that the search proves has no completion: row 0
    // needs a 9 at (0, 8), but the enclosing block already has one.
    let mut no_candidate: Board =
        "123456780000000000000000900000000000000000000000000000000000000000000000000000000"
            .parse()
            .unwrap();
    let original = no_candidate.clone();
    assert_eq!(
        Solver::new().solve(&mut no_candidate),
        Err(SolveError::Unsolvable)
    );

    // A failed search hands the board back exactly as given.
    assert_eq!(no_candidate, original);
}
