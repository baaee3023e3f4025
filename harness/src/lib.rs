//! Tracer Harness: input-level orchestration around the search.
//!
//! The harness loads a board file, runs the search under an explicit
//! [`runner::RunConfig`], and packages the result for output. It does NOT
//! implement search logic; it delegates to `tracer_search`.
//!
//! # Entry points
//!
//! - [`load::load_board`]: read and validate one board file
//! - [`runner::run_file`] / [`runner::run_batch`]: load + search, per input
//! - [`runner::render_output`]: console grids or the JSON report

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod load;
pub mod report;
pub mod runner;
