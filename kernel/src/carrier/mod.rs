//! Carrier module: cells, coordinates, boards, and the board-file boundary.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod board;
pub mod cell;
pub mod parse;
