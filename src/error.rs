//! Failure taxonomy for the draw pipeline.
//!
//! Every failure is terminal for the invocation: the CLI reports it once on
//! stderr and exits non-zero. Variants carry enough context (file path,
//! requested vs. available counts) for the user to self-correct.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RaffleError {
    /// The input file could not be opened.
    #[error("could not open file '{path}': {source}")]
    SourceUnavailable { path: String, source: io::Error },

    /// Reading from the input file failed mid-stream (for example, the file
    /// is not valid UTF-8). Lines are never silently dropped or truncated.
    #[error("could not read file '{path}': {source}")]
    SourceRead { path: String, source: io::Error },

    /// The input file contains no non-empty lines.
    #[error("the file '{path}' contains no valid participant names")]
    EmptyPool { path: String },

    /// The requested winner count is zero.
    #[error("number of winners must be a positive integer")]
    InvalidWinnerCount,

    /// More winners were requested than participants are available.
    #[error("cannot select {requested} winners from only {available} participants")]
    InsufficientParticipants { requested: usize, available: usize },
}
