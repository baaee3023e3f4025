//! `Cell` and `Coord`: the value types a board is made of.
//!
//! # Symbols
//!
//! | Cell    | Symbol | In input files |
//! |---------|--------|----------------|
//! | Open    | `O`    | yes            |
//! | Blocked | `X`    | yes            |
//! | Start   | `1`    | yes (exactly one) |
//! | End     | `2`    | yes (exactly one) |
//! | Trace   | `T`    | no             |
//!
//! The canonical representation of a cell is its symbol byte. Rendering and
//! hashing both go through [`Cell::to_symbol`].

use std::fmt;

/// Contents of one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Cell {
    /// Free position a trace may pass through.
    Open = b'O',
    /// Occupied, unavailable position.
    Blocked = b'X',
    /// First terminal; traces leave from here.
    Start = b'1',
    /// Second terminal; traces arrive here.
    End = b'2',
    /// Part of a trace.
    Trace = b'T',
}

impl Cell {
    /// Symbols accepted in board input files.
    pub const INPUT_SYMBOLS: &'static str = "OX12";

    /// Convert from a symbol. Returns `None` for unrecognized symbols.
    ///
    /// Accepts `T`; input validation rejects it separately via
    /// [`Cell::from_input_symbol`].
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'O' => Some(Self::Open),
            'X' => Some(Self::Blocked),
            '1' => Some(Self::Start),
            '2' => Some(Self::End),
            'T' => Some(Self::Trace),
            _ => None,
        }
    }

    /// Convert from a symbol allowed in input files (`T` is not).
    #[must_use]
    pub const fn from_input_symbol(c: char) -> Option<Self> {
        match Self::from_symbol(c) {
            Some(Self::Trace) | None => None,
            other => other,
        }
    }

    /// The display symbol.
    #[must_use]
    pub const fn to_symbol(self) -> char {
        self as u8 as char
    }

    /// The symbol as a raw byte (hashing form).
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Whether a trace may be placed here.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_symbol())
    }
}

/// A `(row, col)` board position.
///
/// Signed so that the neighbors of edge cells are representable; such
/// coordinates are simply out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by `(d_row, d_col)`.
    #[must_use]
    pub const fn shift(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The four axis-aligned neighbors in fixed order: down, right, up, left.
    ///
    /// The order determines path enumeration order, never which paths exist.
    #[must_use]
    pub const fn orthogonal_neighbors(self) -> [Self; 4] {
        [
            self.shift(1, 0),
            self.shift(0, 1),
            self.shift(-1, 0),
            self.shift(0, -1),
        ]
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if `other` shares an edge with `self`.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
