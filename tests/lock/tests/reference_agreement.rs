//! Search results agree with an independent brute-force enumerator.
//!
//! For every board in the corpus and every policy, the Best-Path Set must
//! equal the set of all minimum-length simple routes.

use lock_tests::{board, reference_shortest, result_cells, BOARD_CORPUS};
use tracer_search::frontier::FrontierDiscipline;
use tracer_search::policy::SearchPolicy;
use tracer_search::search::search_with_policy;

fn policies() -> Vec<SearchPolicy> {
    let mut out = Vec::new();
    for d in [FrontierDiscipline::Stack, FrontierDiscipline::Queue] {
        out.push(SearchPolicy::with_discipline(d));
        out.push(SearchPolicy::with_discipline(d).pruned(true));
    }
    out
}

#[test]
fn every_policy_matches_reference() {
    for text in BOARD_CORPUS {
        let b = board(text);
        let expected = reference_shortest(&b);
        for policy in policies() {
            let result = search_with_policy(&b, &policy);
            assert_eq!(
                result_cells(&result),
                expected,
                "board {text:?} under {policy:?}"
            );
        }
    }
}

#[test]
fn best_length_matches_reference() {
    for text in BOARD_CORPUS {
        let b = board(text);
        let expected = reference_shortest(&b)
            .first()
            .map(|cells| u32::try_from(cells.len()).unwrap());
        for policy in policies() {
            let result = search_with_policy(&b, &policy);
            assert_eq!(result.best_length(), expected, "board {text:?} under {policy:?}");
            assert_eq!(result.is_route_found(), expected.is_some());
        }
    }
}

#[test]
fn stack_and_queue_produce_identical_fingerprints() {
    for text in BOARD_CORPUS {
        let b = board(text);
        let stack = search_with_policy(&b, &SearchPolicy::with_discipline(FrontierDiscipline::Stack));
        let queue = search_with_policy(&b, &SearchPolicy::with_discipline(FrontierDiscipline::Queue));
        assert_eq!(stack.fingerprints(), queue.fingerprints(), "board {text:?}");
    }
}

#[test]
fn pruning_never_does_more_work() {
    for text in BOARD_CORPUS {
        let b = board(text);
        for d in [FrontierDiscipline::Stack, FrontierDiscipline::Queue] {
            let full = search_with_policy(&b, &SearchPolicy::with_discipline(d));
            let pruned = search_with_policy(&b, &SearchPolicy::with_discipline(d).pruned(true));
            assert!(
                pruned.stats.states_created <= full.stats.states_created,
                "board {text:?} with {d}: pruned created {} > full {}",
                pruned.stats.states_created,
                full.stats.states_created
            );
            assert_eq!(full.stats.pruned_dominated, 0);
        }
    }
}
