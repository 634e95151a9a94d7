#![no_main]

use backtrack_sudoku::Board;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing untrusted text must reject bad input with an error, never
    // panic. Accepted boards survive a format/parse round trip.
    if let Ok(board) = data.parse::<Board>() {
        let round_trip: Board = board.to_string().parse().unwrap();
        assert_eq!(board, round_trip);
    }
});
