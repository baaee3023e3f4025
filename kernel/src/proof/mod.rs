//! Proof module: content hashing of board snapshots.
//!
//! Depends on `carrier`. Nothing depends on `proof` within the kernel.

pub mod hash;
