//! Tracer Kernel: the board model underneath the circuit tracer.
//!
//! # API Surface
//!
//! - [`carrier::board::Board`] -- immutable grid of cells with two terminals
//! - [`carrier::parse::parse_board`] -- validate board-file text into a `Board`
//! - [`proof::hash::board_fingerprint`] -- content hash of a board snapshot
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `proof`
//!
//! One-way only. `proof` hashes carrier values; `carrier` depends on
//! nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;
