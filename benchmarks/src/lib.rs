//! Shared board builders for the tracer benchmark suites.

use tracer_kernel::carrier::board::Board;

/// An all-open `rows x cols` board with `1` in the bottom-left corner and
/// `2` in the bottom-right.
///
/// # Panics
///
/// Panics if `cols < 2`; benchmark setup failures are fatal.
#[must_use]
pub fn open_board(rows: usize, cols: usize) -> Board {
    walled_board(rows, cols, &[])
}

/// An open board with `X` at each `(row, col)` in `walls`, terminals as in
/// [`open_board`].
///
/// # Panics
///
/// Panics if the generated text is not a valid board.
#[must_use]
pub fn walled_board(rows: usize, cols: usize, walls: &[(usize, usize)]) -> Board {
    let mut text = format!("{rows} {cols}\n");
    for r in 0..rows {
        let line: Vec<&str> = (0..cols)
            .map(|c| {
                if r + 1 == rows && c == 0 {
                    "1"
                } else if r + 1 == rows && c + 1 == cols {
                    "2"
                } else if walls.contains(&(r, c)) {
                    "X"
                } else {
                    "O"
                }
            })
            .collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    Board::parse(&text).unwrap_or_else(|e| panic!("benchmark board invalid: {e}"))
}

/// A bottom row split by a wall column that leaves only the top row open,
/// forcing every route over the top.
#[must_use]
pub fn detour_board(rows: usize, cols: usize) -> Board {
    let mid = cols / 2;
    let walls: Vec<(usize, usize)> = (1..rows).map(|r| (r, mid)).collect();
    walled_board(rows, cols, &walls)
}

/// Named boards used by the discipline comparison.
#[must_use]
pub fn sample_boards() -> Vec<(&'static str, Board)> {
    vec![
        ("open_3x4", open_board(3, 4)),
        ("open_4x4", open_board(4, 4)),
        ("detour_4x5", detour_board(4, 5)),
        ("detour_5x5", detour_board(5, 5)),
    ]
}
