//! Result rendering: console text and the JSON run report.
//!
//! # Report layout
//!
//! ```text
//! {
//!   "source": "board.dat" | null,
//!   "board": { "rows", "cols", "start": [r, c], "end": [r, c], "grid": [...] },
//!   "discipline": "stack" | "queue",
//!   "best_length": n | null,
//!   "path_count": n,
//!   "paths": [ { "index", "length", "fingerprint", "cells": [[r, c], ...], "grid": [...] } ],
//!   "stats": { ... },
//!   "report_digest": "sha256:..."
//! }
//! ```
//!
//! `report_digest` is `canonical_hash(DOMAIN_REPORT, compact JSON of every
//! other field)`. `serde_json` objects keep keys sorted, so the digest is
//! stable across runs of the same input.

use tracer_kernel::carrier::cell::Coord;
use tracer_kernel::proof::hash::{board_fingerprint, canonical_hash, DOMAIN_REPORT};
use tracer_search::search::SearchStats;

use crate::runner::{RunError, TraceRun};

/// Every best path as its grid, each followed by a blank line, in
/// discovery order. Empty when no route exists.
#[must_use]
pub fn render_console(run: &TraceRun) -> String {
    let mut out = String::new();
    for board in run.result.boards() {
        out.push_str(&board.render());
        out.push('\n');
    }
    out
}

fn coord_json(c: Coord) -> serde_json::Value {
    serde_json::json!([c.row, c.col])
}

fn stats_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "completed_paths": s.completed_paths,
        "discarded_longer": s.discarded_longer,
        "frontier_high_water": s.frontier_high_water,
        "improvements": s.improvements,
        "pruned_dominated": s.pruned_dominated,
        "retrievals": s.retrievals,
        "seeds": s.seeds,
        "states_created": s.states_created,
    })
}

/// Build the JSON report for a finished run, digest included.
///
/// # Errors
///
/// Returns [`RunError::Report`] if the report body cannot be serialized for
/// hashing.
pub fn report_json(run: &TraceRun) -> Result<serde_json::Value, RunError> {
    let result = &run.result;
    let paths: Vec<serde_json::Value> = result
        .best_paths
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let board = p.board();
            serde_json::json!({
                "cells": board.traced_cells().into_iter().map(coord_json).collect::<Vec<_>>(),
                "fingerprint": board_fingerprint(board).as_str(),
                "grid": board.render_rows(),
                "index": i,
                "length": p.len(),
            })
        })
        .collect();

    let mut report = serde_json::json!({
        "best_length": result.best_length(),
        "board": {
            "cols": run.board.cols(),
            "end": coord_json(run.board.end()),
            "grid": run.board.render_rows(),
            "rows": run.board.rows(),
            "start": coord_json(run.board.start()),
        },
        "discipline": result.stats.discipline.as_str(),
        "path_count": result.best_paths.len(),
        "paths": paths,
        "source": run.source.as_ref().map(|p| p.display().to_string()),
        "stats": stats_json(&result.stats),
    });

    let body = serde_json::to_vec(&report).map_err(|e| RunError::Report {
        detail: e.to_string(),
    })?;
    let digest = canonical_hash(DOMAIN_REPORT, &body);
    report["report_digest"] = serde_json::Value::String(digest.as_str().to_string());
    Ok(report)
}
