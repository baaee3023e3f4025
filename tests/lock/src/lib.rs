//! Shared helpers for the cross-crate lock tests.
//!
//! The reference enumerator here shares no code with `tracer_search`: it
//! walks simple paths recursively over a plain `Vec<bool>` visited mask, so
//! agreement between the two is evidence rather than tautology.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracer_kernel::carrier::board::Board;
use tracer_kernel::carrier::cell::Coord;

/// Small boards exercised by the agreement tests. Every entry is a full
/// board file (header included).
pub const BOARD_CORPUS: &[&str] = &[
    "1 3\n1 O 2\n",
    "1 2\n1 2\n",
    "1 3\n1 X 2\n",
    "3 3\nO O O\nO X O\n1 O 2\n",
    "3 3\nO O O\nO O O\n1 X 2\n",
    "3 3\n1 O O\nO X O\nO O 2\n",
    "3 3\n1 O O\nO O O\nO O 2\n",
    "4 4\n1 O O O\nO X X O\nO O O O\nX O O 2\n",
    "4 5\nO O O O O\nO X X X O\n1 X O X 2\nO O O O O\n",
    "3 5\nO O O O O\n1 X O X 2\nO O X O O\n",
    "5 5\n1 O O O O\nO X O X O\nO O O O O\nO X O X O\nO O O O 2\n",
    "2 5\n1 O X O 2\nO O X O O\n",
];

/// Parse a board, panicking with the input on failure.
///
/// # Panics
///
/// Panics if `text` is not a valid board.
#[must_use]
pub fn board(text: &str) -> Board {
    Board::parse(text).unwrap_or_else(|e| panic!("invalid test board {text:?}: {e}"))
}

/// Write `text` to `dir/name` and return the path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_board(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path)
        .unwrap_or_else(|e| panic!("create {}: {e}", path.display()));
    f.write_all(text.as_bytes())
        .unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
    path
}

/// Every shortest trace of `board` as its sorted cell list, the whole
/// collection sorted. Empty when no route exists.
#[must_use]
pub fn reference_shortest(board: &Board) -> Vec<Vec<Coord>> {
    let mut walker = Walker {
        board,
        visited: vec![false; board.rows() * board.cols()],
        path: Vec::new(),
        best: None,
        found: Vec::new(),
    };
    for at in board.start().orthogonal_neighbors() {
        walker.visit(at);
    }
    let mut found: Vec<Vec<Coord>> = walker
        .found
        .into_iter()
        .map(|mut cells| {
            cells.sort();
            cells
        })
        .collect();
    found.sort();
    found
}

/// Sorted cell lists of a search result, in the same shape as
/// [`reference_shortest`].
#[must_use]
pub fn result_cells(result: &tracer_search::search::SearchResult) -> Vec<Vec<Coord>> {
    let mut out: Vec<Vec<Coord>> = result
        .boards()
        .map(|b| {
            let mut cells = b.traced_cells();
            cells.sort();
            cells
        })
        .collect();
    out.sort();
    out
}

struct Walker<'a> {
    board: &'a Board,
    visited: Vec<bool>,
    path: Vec<Coord>,
    best: Option<usize>,
    found: Vec<Vec<Coord>>,
}

impl Walker<'_> {
    fn index(&self, at: Coord) -> Option<usize> {
        let row = usize::try_from(at.row).ok()?;
        let col = usize::try_from(at.col).ok()?;
        (row < self.board.rows() && col < self.board.cols()).then_some(row * self.board.cols() + col)
    }

    fn visit(&mut self, at: Coord) {
        let Some(idx) = self.index(at) else { return };
        if self.visited[idx] || !self.board.is_open(at) {
            return;
        }
        if self.best.is_some_and(|b| self.path.len() + 1 > b) {
            return;
        }

        self.visited[idx] = true;
        self.path.push(at);

        if at.is_adjacent(self.board.end()) {
            let len = self.path.len();
            match self.best {
                Some(b) if len > b => {}
                Some(b) if len == b => self.found.push(self.path.clone()),
                _ => {
                    self.best = Some(len);
                    self.found = vec![self.path.clone()];
                }
            }
        } else {
            for next in at.orthogonal_neighbors() {
                self.visit(next);
            }
        }

        self.path.pop();
        self.visited[idx] = false;
    }
}
