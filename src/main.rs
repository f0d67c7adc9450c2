//! n-puzzle solver CLI.
//!
//! Reads a puzzle file (dimension line followed by n rows of tile labels,
//! 0 for the blank) and either solves it with A* or just reports whether it
//! is solvable.

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use npuzzle::{parse_board, solver, Board, Solver};

/// Solves sliding-tile puzzles with A* search.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle file and print the shortest move sequence.
    Solve { file: PathBuf },
    /// Report solvability without searching (inversion parity only).
    Check { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Solve { file } => run_solve(&file),
        Command::Check { file } => run_check(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Reads and parses a puzzle file.
fn load_board(path: &Path) -> Result<Board, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_board(&text)?)
}

/// Solves the puzzle and prints the move count and board sequence.
fn run_solve(path: &Path) -> Result<(), Box<dyn Error>> {
    let board = load_board(path)?;
    let solver = Solver::new(board);
    print!("{}", render_solution(&solver));
    Ok(())
}

/// Prints solvability only; never runs the search.
fn run_check(path: &Path) -> Result<(), Box<dyn Error>> {
    let board = load_board(path)?;
    if solver::is_solvable(&board) {
        println!("Solvable");
    } else {
        println!("No solution possible");
    }
    Ok(())
}

/// Formats a solved puzzle as the move count followed by every board from
/// the initial configuration to the goal.
fn render_solution(solver: &Solver) -> String {
    let Some(path) = solver.solution() else {
        return "No solution possible\n".to_string();
    };

    let mut out = format!("Minimum number of moves = {}\n", path.len() - 1);
    for board in path {
        let _ = writeln!(out, "{board}");
    }
    out
}
