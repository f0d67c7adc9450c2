//! Puzzle text format.
//!
//! A puzzle file holds the dimension on its first line followed by n rows of
//! n whitespace-separated tile labels, with 0 for the blank:
//!
//! ```text
//! 3
//!  0  1  3
//!  4  2  5
//!  7  8  6
//! ```
//!
//! Blank lines are ignored. Parsing only turns text into rows of integers;
//! all structural validation (squareness, dimension range, permutation)
//! happens in [`Board::new`].

use thiserror::Error;

use crate::board::{Board, BoardError};

/// Failures turning puzzle text into a board.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A line could not be read as the numbers it should hold.
    #[error("line {line}: {reason}")]
    Syntax { line: usize, reason: String },
    /// The numbers parsed but do not form a valid board.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses puzzle text into a validated board.
pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (line, header) = lines.next().ok_or_else(|| ParseError::Syntax {
        line: 1,
        reason: "empty input, expected a dimension line".into(),
    })?;
    let n: usize = header.trim().parse().map_err(|_| ParseError::Syntax {
        line,
        reason: format!("expected a dimension, found {:?}", header.trim()),
    })?;

    // anchor missing-row errors to the last line with content, not a
    // trailing blank line
    let last_line = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .last()
        .map_or(1, |(idx, _)| idx + 1);
    let mut rows = Vec::with_capacity(n);
    for row in 0..n {
        let (line, row_text) = lines.next().ok_or_else(|| ParseError::Syntax {
            line: last_line,
            reason: format!("expected {n} rows of tiles, found {row}"),
        })?;
        let row = row_text
            .split_whitespace()
            .map(|token| {
                token.parse::<u8>().map_err(|_| ParseError::Syntax {
                    line,
                    reason: format!("expected a tile label, found {token:?}"),
                })
            })
            .collect::<Result<Vec<u8>, ParseError>>()?;
        rows.push(row);
    }

    Ok(Board::new(rows)?)
}
