//! Tracer Search: frontier-driven enumeration of all shortest traces.
//!
//! This crate provides the search layer for the circuit tracer. It depends
//! only on `tracer_kernel`; the harness sits above it.
//!
//! # Crate dependency graph
//!
//! ```text
//! tracer_kernel  ←  tracer_search  ←  tracer_harness
//! (board model)     (paths, frontier)  (load, render, report)
//! ```
//!
//! # Key types
//!
//! - [`PathState`]: immutable partial trace owning its board snapshot
//! - [`Frontier`]: store/retrieve capability, LIFO or FIFO
//! - [`FrontierDiscipline`]: stack (depth-first) or queue (breadth-first)
//! - [`SearchPolicy`]: discipline plus optional dominated-state pruning
//! - [`SearchResult`]: the Best-Path Set and work counters

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;

pub use frontier::{Frontier, FrontierDiscipline, QueueFrontier, StackFrontier};
pub use node::PathState;
pub use policy::SearchPolicy;
pub use search::{search, search_with_policy, SearchResult, SearchStats};
