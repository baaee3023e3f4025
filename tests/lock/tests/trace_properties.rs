//! Structural properties of every traced board in a Best-Path Set.

use lock_tests::{board, BOARD_CORPUS};
use tracer_kernel::carrier::board::Board;
use tracer_kernel::carrier::cell::{Cell, Coord};
use tracer_search::frontier::FrontierDiscipline;
use tracer_search::search::search;

/// Order the traced cells of `traced` into a chain from a start-adjacent
/// cell to an end-adjacent cell, or `None` if they do not form one.
fn chain(traced: &Board) -> Option<Vec<Coord>> {
    let cells = traced.traced_cells();
    let first = *cells
        .iter()
        .find(|c| c.is_adjacent(traced.start()))?;
    let mut ordered = vec![first];
    while ordered.len() < cells.len() {
        let head = *ordered.last()?;
        let next = cells
            .iter()
            .copied()
            .filter(|c| c.is_adjacent(head) && !ordered.contains(c))
            .collect::<Vec<_>>();
        if next.len() != 1 {
            return None;
        }
        ordered.push(next[0]);
    }
    Some(ordered)
}

#[test]
fn traces_form_a_connected_route() {
    for text in BOARD_CORPUS {
        let input = board(text);
        for d in [FrontierDiscipline::Stack, FrontierDiscipline::Queue] {
            for traced in search(&input, d).boards() {
                let route = chain(traced)
                    .unwrap_or_else(|| panic!("{text:?}: trace is not a simple chain\n{traced}"));
                let head = route.last().copied().unwrap();
                assert!(head.is_adjacent(traced.end()), "{text:?}: route ends away from 2");
            }
        }
    }
}

#[test]
fn trace_count_equals_length() {
    for text in BOARD_CORPUS {
        let input = board(text);
        let result = search(&input, FrontierDiscipline::Queue);
        for path in &result.best_paths {
            assert_eq!(path.board().trace_count(), path.len() as usize);
        }
    }
}

#[test]
fn only_open_cells_change() {
    for text in BOARD_CORPUS {
        let input = board(text);
        for traced in search(&input, FrontierDiscipline::Stack).boards() {
            assert_eq!(traced.rows(), input.rows());
            assert_eq!(traced.cols(), input.cols());
            for (before, after) in input.cells().iter().zip(traced.cells()) {
                match after {
                    Cell::Trace => assert_eq!(*before, Cell::Open, "{text:?}"),
                    other => assert_eq!(before, other, "{text:?}"),
                }
            }
        }
    }
}

#[test]
fn input_board_is_never_mutated() {
    for text in BOARD_CORPUS {
        let input = board(text);
        let snapshot = input.clone();
        let _ = search(&input, FrontierDiscipline::Stack);
        let _ = search(&input, FrontierDiscipline::Queue);
        assert_eq!(input, snapshot);
        assert_eq!(input.trace_count(), 0);
    }
}
