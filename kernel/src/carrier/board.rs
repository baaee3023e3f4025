//! `Board`: the immutable circuit board a trace is routed across.
//!
//! # Layout
//!
//! Cells are stored row-major in a flat `Vec<Cell>` of `rows * cols`
//! entries. Terminal coordinates are resolved once at construction.
//!
//! # Copy-on-write
//!
//! A `Board` is never mutated after construction. [`Board::trace`] returns a
//! **new** board with one extra `T`; the receiver is left untouched. Every
//! search branch therefore owns its snapshot outright, and no undo
//! bookkeeping exists anywhere.

use std::fmt;

use crate::carrier::cell::{Cell, Coord};
use crate::carrier::parse::{parse_board, FormatError};

/// Attempted to trace a position that is not open.
///
/// Raised by [`Board::trace`]. Inside the search loop this is an invariant
/// violation: the driver only traces coordinates it has confirmed open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupiedPosition {
    /// The rejected coordinate.
    pub at: Coord,
    /// What occupies it (`None` when the coordinate is off the board).
    pub found: Option<Cell>,
}

impl fmt::Display for OccupiedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Some(cell) => write!(
                f,
                "occupied position: row {}, col {} contains '{cell}'",
                self.at.row, self.at.col
            ),
            None => write!(
                f,
                "occupied position: row {}, col {} is off the board",
                self.at.row, self.at.col
            ),
        }
    }
}

impl std::error::Error for OccupiedPosition {}

/// A 2D circuit board with exactly one start and one end terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Coord,
    end: Coord,
}

impl Board {
    /// Parse and validate board-file text.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] naming the first rule the text breaks.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        parse_board(text)
    }

    /// Assemble a board from already-validated parts.
    ///
    /// Callers outside `carrier` go through [`Board::parse`].
    pub(crate) fn from_validated(
        rows: usize,
        cols: usize,
        cells: Vec<Cell>,
        start: Coord,
        end: Coord,
    ) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self {
            rows,
            cols,
            cells,
            start,
            end,
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Start terminal (`1`).
    #[must_use]
    pub const fn start(&self) -> Coord {
        self.start
    }

    /// End terminal (`2`).
    #[must_use]
    pub const fn end(&self) -> Coord {
        self.end
    }

    /// `(start, end)`, fixed for the board's lifetime.
    #[must_use]
    pub const fn terminal_positions(&self) -> (Coord, Coord) {
        (self.start, self.end)
    }

    fn index(&self, at: Coord) -> Option<usize> {
        let row = usize::try_from(at.row).ok()?;
        let col = usize::try_from(at.col).ok()?;
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Cell at `at`, or `None` when off the board.
    #[must_use]
    pub fn cell_at(&self, at: Coord) -> Option<Cell> {
        self.index(at).map(|i| self.cells[i])
    }

    /// True only for an in-bounds `O` cell. Never panics.
    #[must_use]
    pub fn is_open(&self, at: Coord) -> bool {
        self.cell_at(at).is_some_and(Cell::is_open)
    }

    /// Return a new board with `at` marked as trace.
    ///
    /// # Errors
    ///
    /// Returns [`OccupiedPosition`] if `at` is off the board or not open.
    pub fn trace(&self, at: Coord) -> Result<Self, OccupiedPosition> {
        match self.index(at) {
            Some(i) if self.cells[i].is_open() => {
                let mut next = self.clone();
                next.cells[i] = Cell::Trace;
                Ok(next)
            }
            Some(i) => Err(OccupiedPosition {
                at,
                found: Some(self.cells[i]),
            }),
            None => Err(OccupiedPosition { at, found: None }),
        }
    }

    /// Number of traced cells.
    #[must_use]
    pub fn trace_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Trace).count()
    }

    /// Coordinates of every traced cell, row-major.
    #[must_use]
    pub fn traced_cells(&self) -> Vec<Coord> {
        self.coords()
            .filter(|&c| self.cell_at(c) == Some(Cell::Trace))
            .collect()
    }

    /// All coordinates, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| coord_of(r, c)))
    }

    /// Raw cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One rendered line per row: symbols separated by single spaces.
    #[must_use]
    pub fn render_rows(&self) -> Vec<String> {
        if self.cols == 0 {
            return vec![String::new(); self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|row| {
                let mut line = String::with_capacity(row.len() * 2);
                for (i, cell) in row.iter().enumerate() {
                    if i > 0 {
                        line.push(' ');
                    }
                    line.push(cell.to_symbol());
                }
                line
            })
            .collect()
    }

    /// The grid as text: one line per row, each terminated by `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols * 2 + 1));
        for line in self.render_rows() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Dimensions are capped at `i32::MAX` by the parser, so the casts are lossless.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn coord_of(row: usize, col: usize) -> Coord {
    Coord::new(row as i32, col as i32)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
