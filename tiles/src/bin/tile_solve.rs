//! Solve an 8-puzzle position and print the action transcript.
//!
//! Usage: `tile_solve [BOARD] [REPORT_PATH]`
//!
//! `BOARD` is a row-major 9-digit string (`0` is the blank); the default
//! is the ten-move demonstration position `142637850`. When `REPORT_PATH`
//! is given, the JSON solve report is written there and its content digest
//! is printed.

use std::process::ExitCode;

use wayfind_tiles::board::TileBoard;
use wayfind_tiles::graph::TileGraph;
use wayfind_tiles::render::{action_transcript, NO_SOLUTION_MESSAGE};
use wayfind_tiles::report::build_report;
use wayfind_tiles::solve::solve;

/// Ten moves to solve.
const DEFAULT_BOARD: &str = "142637850";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let board_arg = args.next().unwrap_or_else(|| DEFAULT_BOARD.to_string());
    let report_path = args.next();

    let board = match TileBoard::parse(&board_arg) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid board {board_arg:?}: {err}");
            return ExitCode::from(2);
        }
    };

    let graph = TileGraph::new(board);
    let outcome = solve(&graph);

    match &outcome.solution {
        Some(path) => println!("{}", action_transcript(path)),
        None => println!("{NO_SOLUTION_MESSAGE}"),
    }

    if let Some(path) = report_path {
        let report = build_report(&board, &outcome).expect("report serialization");
        if let Err(err) = std::fs::write(&path, &report.bytes) {
            eprintln!("cannot write report to {path}: {err}");
            return ExitCode::from(3);
        }
        println!("report_digest={}", report.digest);
    }

    ExitCode::SUCCESS
}
