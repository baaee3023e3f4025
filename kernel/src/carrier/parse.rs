//! Board-file boundary: `parse_board(text) -> Board`.
//!
//! # Format
//!
//! ```text
//! R C          <- two non-negative integers
//! O O X O      <- R rows of exactly C symbols from `O X 1 2`
//! 1 O O 2         (whitespace between symbols is ignored)
//! ```
//!
//! Exactly one `1` and one `2` across the grid. Trailing blank lines are
//! ignored; any other extra line is a row-count mismatch.
//!
//! Validation is fail-closed and ordered: rows are checked top to bottom,
//! left to right, and the first broken rule is reported. No partial `Board`
//! is ever produced.

use std::fmt;

use crate::carrier::board::Board;
use crate::carrier::cell::{Cell, Coord};

/// Typed board-file format failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input is empty; no dimension line.
    MissingHeader,
    /// Line 1 is not exactly two non-negative integers.
    InvalidHeader { detail: String },
    /// A row's symbol count differs from the declared column count.
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The number of rows differs from the declared row count.
    RowCountMismatch { expected: usize, actual: usize },
    /// A symbol outside `O X 1 2`.
    DisallowedSymbol { row: usize, col: usize, symbol: char },
    /// More than one `1`.
    DuplicateStart { first: Coord, second: Coord },
    /// More than one `2`.
    DuplicateEnd { first: Coord, second: Coord },
    /// No `1` anywhere.
    MissingStart,
    /// No `2` anywhere.
    MissingEnd,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "missing row/column count line"),
            Self::InvalidHeader { detail } => write!(f, "invalid row/column count line: {detail}"),
            Self::RowLengthMismatch {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} symbols; row lengths must match the specified number of columns ({expected})"
            ),
            Self::RowCountMismatch { expected, actual } => write!(
                f,
                "found {actual} rows; column lengths must match the specified number of rows ({expected})"
            ),
            Self::DisallowedSymbol { row, col, symbol } => write!(
                f,
                "disallowed symbol '{symbol}' at row {row}, col {col}; only allowed symbols are: {}",
                Cell::INPUT_SYMBOLS
            ),
            Self::DuplicateStart { first, second } => write!(
                f,
                "duplicate start points at {first} and {second}; file may only have 1 starting point"
            ),
            Self::DuplicateEnd { first, second } => write!(
                f,
                "duplicate end points at {first} and {second}; file may only have 1 ending point"
            ),
            Self::MissingStart => write!(f, "file must contain a starting point (1)"),
            Self::MissingEnd => write!(f, "file must contain an ending point (2)"),
        }
    }
}

impl std::error::Error for FormatError {}

fn parse_dimension(token: &str, name: &str) -> Result<usize, FormatError> {
    let value: usize = token.parse().map_err(|_| FormatError::InvalidHeader {
        detail: format!("{name} count {token:?} is not a non-negative integer"),
    })?;
    if i32::try_from(value).is_err() {
        return Err(FormatError::InvalidHeader {
            detail: format!("{name} count {value} is too large"),
        });
    }
    Ok(value)
}

fn parse_header(line: &str) -> Result<(usize, usize), FormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [rows, cols] = tokens.as_slice() else {
        return Err(FormatError::InvalidHeader {
            detail: format!("expected 2 integers, found {} tokens", tokens.len()),
        });
    };
    let rows = parse_dimension(rows, "row")?;
    let cols = parse_dimension(cols, "column")?;
    if rows.checked_mul(cols).is_none() {
        return Err(FormatError::InvalidHeader {
            detail: format!("{rows}x{cols} board is too large"),
        });
    }
    Ok((rows, cols))
}

/// Parse and validate board-file text.
///
/// # Errors
///
/// Returns the [`FormatError`] for the first rule broken.
pub fn parse_board(text: &str) -> Result<Board, FormatError> {
    let mut lines = text.lines().skip_while(|l| l.trim().is_empty());
    let header = lines.next().ok_or(FormatError::MissingHeader)?;
    let (rows, cols) = parse_header(header)?;

    let mut body: Vec<&str> = lines.collect();
    while body.last().is_some_and(|l| l.trim().is_empty()) {
        body.pop();
    }

    // Every cell is at least one byte of input, so the text length caps the
    // buffer whatever the header claims.
    let mut cells = Vec::with_capacity(rows.saturating_mul(cols).min(text.len()));
    let mut start: Option<Coord> = None;
    let mut end: Option<Coord> = None;

    for (r, line) in body.iter().enumerate() {
        if r >= rows {
            return Err(FormatError::RowCountMismatch {
                expected: rows,
                actual: body.len(),
            });
        }
        let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != cols {
            return Err(FormatError::RowLengthMismatch {
                row: r,
                expected: cols,
                actual: symbols.len(),
            });
        }
        for (c, &symbol) in symbols.iter().enumerate() {
            let cell = Cell::from_input_symbol(symbol).ok_or(FormatError::DisallowedSymbol {
                row: r,
                col: c,
                symbol,
            })?;
            // Both bounded by i32::MAX in parse_dimension.
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let at = Coord::new(r as i32, c as i32);
            match cell {
                Cell::Start => {
                    if let Some(first) = start {
                        return Err(FormatError::DuplicateStart { first, second: at });
                    }
                    start = Some(at);
                }
                Cell::End => {
                    if let Some(first) = end {
                        return Err(FormatError::DuplicateEnd { first, second: at });
                    }
                    end = Some(at);
                }
                _ => {}
            }
            cells.push(cell);
        }
    }

    if body.len() != rows {
        return Err(FormatError::RowCountMismatch {
            expected: rows,
            actual: body.len(),
        });
    }

    let start = start.ok_or(FormatError::MissingStart)?;
    let end = end.ok_or(FormatError::MissingEnd)?;

    Ok(Board::from_validated(rows, cols, cells, start, end))
}
