//! Participant list loading.
//!
//! Reads a newline-delimited text source into an ordered list of participant
//! names: trailing `\n`/`\r` bytes are stripped (Unix and Windows files yield
//! identical names), lines that are empty after stripping are dropped, and
//! the original order is preserved. Duplicate names are kept as separate
//! entries, each occupying its own slot in the draw.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::RaffleError;

/// Read participant names from `reader`, one per line.
///
/// Read errors propagate; a line is never silently dropped or truncated.
pub fn read_participants<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut participants = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim_end_matches(['\n', '\r']);
        if name.is_empty() {
            continue;
        }
        participants.push(name.to_string());
    }
    Ok(participants)
}

/// Load the participant list from the file at `path`.
///
/// The file handle is released on every exit path. The returned list may be
/// empty; callers decide whether that is an error.
pub fn load_participants(path: &Path) -> Result<Vec<String>, RaffleError> {
    let file = File::open(path).map_err(|e| RaffleError::SourceUnavailable {
        path: path.display().to_string(),
        source: e,
    })?;
    read_participants(BufReader::new(file)).map_err(|e| RaffleError::SourceRead {
        path: path.display().to_string(),
        source: e,
    })
}
