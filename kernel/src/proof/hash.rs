//! Content hashing with domain separation.
//!
//! Algorithm: SHA-256. Every hash is prefixed with a null-terminated domain
//! tag so that identical bytes hashed for different purposes never collide.
//!
//! **Exactly one place defines canonical hashing**: [`canonical_hash`].

use sha2::{Digest, Sha256};

use crate::carrier::board::Board;

/// A `sha256:<hex>` digest string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Domain prefix for board snapshot fingerprints.
pub const DOMAIN_BOARD: &[u8] = b"TRACER::BOARD::V1\0";

/// Domain prefix for run report digests.
pub const DOMAIN_REPORT: &[u8] = b"TRACER::REPORT::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(format!("sha256:{}", hex::encode(hasher.finalize())))
}

/// Fingerprint of a board snapshot.
///
/// Hash input: `rows (u32 le) || cols (u32 le) || cell symbols (row-major)`.
/// Two snapshots share a fingerprint exactly when they have the same
/// dimensions and cells, which for snapshots of one input board means the
/// same traced-cell configuration.
#[must_use]
pub fn board_fingerprint(board: &Board) -> ContentHash {
    let mut data = Vec::with_capacity(8 + board.cells().len());
    // Dimensions are bounded by i32::MAX at parse time.
    for dim in [board.rows(), board.cols()] {
        data.extend_from_slice(&u32::try_from(dim).unwrap_or(u32::MAX).to_le_bytes());
    }
    data.extend(board.cells().iter().map(|c| c.to_byte()));
    canonical_hash(DOMAIN_BOARD, &data)
}
