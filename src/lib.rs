//! Raffler library crate
//!
//! This crate provides the core functionality for the `raffler` CLI. It is
//! organized into small modules: `loader` (participant list loading), `draw`
//! (shuffle and winner selection), and `error` (the shared failure taxonomy).
//! The binary `src/main.rs` calls `raffler_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod draw;
pub mod error;
pub mod loader;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use rand::thread_rng;

use crate::error::RaffleError;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  raffler participants.txt 3")]
struct Cli {
    /// Path to text file with one participant name per line
    input: PathBuf,

    /// Number of random winners to select
    winners: usize,

    /// Print the loaded participant list (with indices) before the draw
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    debug: bool,
}

/// Run the Raffler CLI.
///
/// This function is the high-level entrypoint used by the `raffler` binary.
/// It parses CLI arguments and runs the draw pipeline: load the participant
/// file, validate the requested winner count against the pool, shuffle, and
/// print the winners in selection order. Errors are printed to stderr and
/// cause the process to exit with a non-zero code.
///
/// Example:
///
/// ```no_run
/// raffler_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    if let Err(e) = execute(&cli) {
        eprintln!("error: {}", e);
        if let RaffleError::InsufficientParticipants { .. } = e {
            eprintln!("reduce the number of winners or add more participants to the file");
        }
        std::process::exit(1);
    }
}

/// Load, validate, draw, and print. All validation happens before any output
/// (including the `--debug` listing), so failure paths produce no partial
/// output.
fn execute(cli: &Cli) -> Result<(), RaffleError> {
    let participants = loader::load_participants(&cli.input)?;
    let pool_size = participants.len();

    if pool_size == 0 {
        return Err(RaffleError::EmptyPool {
            path: cli.input.display().to_string(),
        });
    }
    if cli.winners == 0 {
        return Err(RaffleError::InvalidWinnerCount);
    }
    if cli.winners > pool_size {
        return Err(RaffleError::InsufficientParticipants {
            requested: cli.winners,
            available: pool_size,
        });
    }

    if cli.debug {
        println!("debug: loaded {} participants:", pool_size);
        for (i, name) in participants.iter().enumerate() {
            println!("  [{}] '{}'", i, name);
        }
        println!();
    }

    let mut rng = thread_rng();
    let winners = draw::draw_winners(&mut rng, participants, cli.winners)?;

    println!(
        "🎉 Randomly selected {} winner(s) from {} participants:",
        winners.len(),
        pool_size
    );
    println!();
    for (rank, name) in winners.iter().enumerate() {
        println!("  {}. {}", rank + 1, name);
    }
    println!();
    Ok(())
}
