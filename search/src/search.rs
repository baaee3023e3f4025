//! Search entry point and retrieve/classify/expand loop.
//!
//! # States
//!
//! ```text
//! seed ─→ exploring (frontier non-empty) ─→ done (frontier empty)
//! ```
//!
//! Each retrieved state is either complete (compared against the Best-Path
//! Set) or expandable (up to four successors stored back). The loop has no
//! I/O and no failure path; an empty result means no route exists.

use std::cmp::Ordering;

use tracer_kernel::carrier::board::Board;
use tracer_kernel::proof::hash::board_fingerprint;

use crate::frontier::{Frontier, FrontierDiscipline};
use crate::node::PathState;
use crate::policy::SearchPolicy;

/// Work counters for one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Discipline the frontier used.
    pub discipline: FrontierDiscipline,
    /// States seeded from the start terminal.
    pub seeds: u64,
    /// States retrieved from the frontier.
    pub retrievals: u64,
    /// States constructed (seeds included).
    pub states_created: u64,
    /// Complete states retrieved.
    pub completed_paths: u64,
    /// Times the Best-Path Set was replaced by a strictly shorter path.
    pub improvements: u64,
    /// Complete states discarded as strictly longer than the best.
    pub discarded_longer: u64,
    /// Incomplete states not expanded under `prune_dominated`.
    pub pruned_dominated: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// Outcome of a search: the Best-Path Set plus counters.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Complete shortest paths, in discovery order.
    pub best_paths: Vec<PathState>,
    /// Work performed.
    pub stats: SearchStats,
}

impl SearchResult {
    /// Shared length of every best path, or `None` when no route exists.
    #[must_use]
    pub fn best_length(&self) -> Option<u32> {
        self.best_paths.first().map(PathState::len)
    }

    /// Returns `true` if at least one route was found.
    #[must_use]
    pub fn is_route_found(&self) -> bool {
        !self.best_paths.is_empty()
    }

    /// Traced boards of the best paths, in discovery order.
    pub fn boards(&self) -> impl Iterator<Item = &Board> + '_ {
        self.best_paths.iter().map(PathState::board)
    }

    /// Consume the result, keeping only the traced boards.
    #[must_use]
    pub fn into_boards(self) -> Vec<Board> {
        self.best_paths
            .into_iter()
            .map(PathState::into_board)
            .collect()
    }

    /// Sorted board fingerprints of the best paths.
    ///
    /// Order-free view of the result: two runs found the same traced-cell
    /// configurations exactly when these vectors are equal.
    #[must_use]
    pub fn fingerprints(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .boards()
            .map(|b| board_fingerprint(b).as_str().to_string())
            .collect();
        out.sort();
        out
    }
}

/// Running set of completed paths tied at the minimum length.
#[derive(Debug, Default)]
struct BestPaths {
    paths: Vec<PathState>,
}

impl BestPaths {
    fn length(&self) -> Option<u32> {
        self.paths.first().map(PathState::len)
    }

    /// Offer a complete path. Returns how it compared to the current best.
    fn offer(&mut self, path: PathState) -> Ordering {
        let order = self
            .length()
            .map_or(Ordering::Equal, |best| path.len().cmp(&best));
        match order {
            Ordering::Equal => self.paths.push(path),
            Ordering::Less => {
                self.paths.clear();
                self.paths.push(path);
            }
            Ordering::Greater => {}
        }
        order
    }
}

/// Enumerate all shortest traces with the given frontier discipline.
///
/// Exhaustive: no pruning, the frontier runs dry before returning.
#[must_use]
pub fn search(board: &Board, discipline: FrontierDiscipline) -> SearchResult {
    search_with_policy(board, &SearchPolicy::with_discipline(discipline))
}

/// Enumerate all shortest traces under `policy`.
///
/// Always runs to frontier exhaustion. A start terminal with no open
/// neighbor, or no connecting route at all, yields an empty Best-Path Set.
///
/// # Panics
///
/// Panics only if tracing a cell this loop has just confirmed open fails,
/// which would mean the board broke its own `is_open` contract.
#[must_use]
pub fn search_with_policy(board: &Board, policy: &SearchPolicy) -> SearchResult {
    let mut frontier = policy.discipline.frontier();
    let mut best = BestPaths::default();
    let mut stats = SearchStats {
        discipline: policy.discipline,
        ..SearchStats::default()
    };

    // Seed from the start terminal
    let start = board.start();
    for at in start.orthogonal_neighbors() {
        if !board.is_open(at) {
            continue;
        }
        match PathState::seed(board, at) {
            Ok(state) => {
                frontier.store(state);
                stats.seeds += 1;
                stats.states_created += 1;
            }
            Err(err) => unreachable!("seeding confirmed-open cell {at} failed: {err}"),
        }
    }
    tracing::debug!(
        discipline = %policy.discipline,
        %start,
        end = %board.end(),
        seeds = stats.seeds,
        "search seeded"
    );

    // Main search loop
    while let Some(state) = frontier.retrieve() {
        stats.retrievals += 1;

        if state.is_complete() {
            stats.completed_paths += 1;
            let len = state.len();
            match best.offer(state) {
                Ordering::Less => {
                    stats.improvements += 1;
                    tracing::debug!(len, retrievals = stats.retrievals, "new best length");
                }
                Ordering::Greater => stats.discarded_longer += 1,
                Ordering::Equal => {}
            }
            continue;
        }

        if policy.prune_dominated && best.length().is_some_and(|b| state.len() >= b) {
            stats.pruned_dominated += 1;
            continue;
        }

        expand(&state, frontier.as_mut(), &mut stats);
    }

    stats.frontier_high_water = u64::try_from(frontier.high_water()).unwrap_or(u64::MAX);
    tracing::debug!(
        discipline = %policy.discipline,
        best_len = ?best.length(),
        best_count = best.paths.len(),
        retrievals = stats.retrievals,
        high_water = stats.frontier_high_water,
        "search finished"
    );

    SearchResult {
        best_paths: best.paths,
        stats,
    }
}

/// Store a successor for each neighbor open on `state`'s own snapshot.
fn expand(state: &PathState, frontier: &mut dyn Frontier, stats: &mut SearchStats) {
    for at in state.neighbors() {
        if !state.is_open_at(at) {
            continue;
        }
        match state.extend(at) {
            Ok(next) => {
                frontier.store(next);
                stats.states_created += 1;
            }
            Err(err) => unreachable!("extending to confirmed-open cell {at} failed: {err}"),
        }
    }
}
