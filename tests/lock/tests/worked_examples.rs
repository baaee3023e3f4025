//! Hand-checked boards with known answers.

use lock_tests::board;
use tracer_search::frontier::FrontierDiscipline;
use tracer_search::search::search;

const BOTH: [FrontierDiscipline; 2] = [FrontierDiscipline::Stack, FrontierDiscipline::Queue];

#[test]
fn single_gap_row() {
    let b = board("1 3\n1 O 2\n");
    for d in BOTH {
        let result = search(&b, d);
        assert_eq!(result.best_length(), Some(1));
        let rendered: Vec<String> = result.boards().map(|b| b.render()).collect();
        assert_eq!(rendered, vec!["1 T 2\n".to_string()]);
    }
}

#[test]
fn blocked_row_has_no_route() {
    let b = board("1 3\n1 X 2\n");
    for d in BOTH {
        let result = search(&b, d);
        assert!(!result.is_route_found());
        assert!(result.best_paths.is_empty());
    }
}

#[test]
fn center_wall_takes_short_way_under() {
    // The cell between the terminals is open, so the route under the
    // wall is a single cell; the way over the top is never tied.
    let b = board("3 3\nO O O\nO X O\n1 O 2\n");
    for d in BOTH {
        let result = search(&b, d);
        assert_eq!(result.best_length(), Some(1), "{d}");
        let rendered: Vec<String> = result.boards().map(|b| b.render()).collect();
        assert_eq!(rendered, vec!["O O O\nO X O\n1 T 2\n".to_string()], "{d}");
    }
}

#[test]
fn blocked_gap_forces_route_over_the_top() {
    let b = board("3 3\nO O O\nO O O\n1 X 2\n");
    for d in BOTH {
        let result = search(&b, d);
        assert_eq!(result.best_length(), Some(3), "{d}");
        let rendered: Vec<String> = result.boards().map(|b| b.render()).collect();
        assert_eq!(rendered, vec!["O O O\nT T T\n1 X 2\n".to_string()], "{d}");
    }
}

#[test]
fn open_square_has_six_shortest_routes() {
    let b = board("3 3\n1 O O\nO O O\nO O 2\n");
    for d in BOTH {
        let result = search(&b, d);
        assert_eq!(result.best_length(), Some(3), "{d}");
        assert_eq!(result.best_paths.len(), 6, "{d}");
    }
}

#[test]
fn adjacent_terminals_still_need_a_traced_cell() {
    // Terminals touching does not count as a route: every path traces at
    // least one cell, and a 1x2 board has none to trace.
    let b = board("1 2\n1 2\n");
    for d in BOTH {
        assert!(!search(&b, d).is_route_found());
    }
}
