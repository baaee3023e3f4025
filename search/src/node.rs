//! `PathState`: one node of the search tree.

use tracer_kernel::carrier::board::{Board, OccupiedPosition};
use tracer_kernel::carrier::cell::Coord;

/// An immutable partial trace.
///
/// Owns its board snapshot outright: the snapshot already carries every
/// traced cell of this path, so no two states ever share a mutable grid.
/// The head is the most recently traced cell; `len` counts traced cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    board: Board,
    head: Coord,
    len: u32,
}

impl PathState {
    /// Start a path on an open neighbor of the start terminal (length 1).
    ///
    /// # Errors
    ///
    /// Returns [`OccupiedPosition`] if `target` is not open on `board`.
    pub fn seed(board: &Board, target: Coord) -> Result<Self, OccupiedPosition> {
        Ok(Self {
            board: board.trace(target)?,
            head: target,
            len: 1,
        })
    }

    /// Extend this path by one open neighbor (length + 1).
    ///
    /// # Errors
    ///
    /// Returns [`OccupiedPosition`] if `target` is not open on this state's board.
    pub fn extend(&self, target: Coord) -> Result<Self, OccupiedPosition> {
        Ok(Self {
            board: self.board.trace(target)?,
            head: target,
            len: self.len + 1,
        })
    }

    /// True when the trace has reached the end terminal.
    ///
    /// The terminal itself is never open, so a trace reaches it from an
    /// orthogonal neighbor: the head touching the end terminal completes
    /// the connection.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.head.is_adjacent(self.board.end())
    }

    /// The four axis-aligned cells around the head: down, right, up, left.
    #[must_use]
    pub fn neighbors(&self) -> [Coord; 4] {
        self.head.orthogonal_neighbors()
    }

    /// Whether `at` is open on this state's own snapshot.
    #[must_use]
    pub fn is_open_at(&self, at: Coord) -> bool {
        self.board.is_open(at)
    }

    /// The owned snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the state, keeping only its snapshot.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Most recently traced cell.
    #[must_use]
    pub fn head(&self) -> Coord {
        self.head
    }

    /// Number of traced cells.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        self.len
    }
}
