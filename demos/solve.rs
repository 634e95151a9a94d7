//! Run the Sudoku solver on a puzzle given as 81 characters in row-major
//! order, with `0` or `.` for empty cells.
//! Usage:
//!
//! ```bash
//! cargo run --release --example solve 006008047000607200304009060003100005010020480740005009020930600081000034905006170
//! ```

use backtrack_sudoku::{Board, Solver};

fn print_board(board: &Board) {
    for row in board.cells() {
        let line: String = row.iter().map(|&value| char::from(b'0' + value)).collect();
        println!("{}", line);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("puzzle needed");
        std::process::exit(1);
    }

    let mut board: Board = match args[1].parse() {
        Ok(board) => board,
        Err(error) => {
            eprintln!("invalid puzzle: {}", error);
            std::process::exit(1);
        }
    };

    match Solver::new().solve(&mut board) {
        Ok(()) => print_board(&board),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}
