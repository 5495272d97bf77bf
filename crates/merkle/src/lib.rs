//! Binary Merkle commitments over opaque leaf byte-strings.
//!
//! Digests are Keccak-256 truncated to 20 bytes, domain-separated by a
//! one-byte prefix. Sibling pairs are ordered lexicographically before
//! hashing, so proof verification never needs to know left from right.

mod hash;
mod proof;
mod tree;

pub use hash::{hash_leaf, hash_node, null_hash};
pub use proof::MerkleProof;
pub use tree::MerkleTree;

use thiserror::Error;

/// 20-byte truncated Keccak-256 digest.
pub type Hash20 = [u8; 20];

/// Digest size in bytes.
pub const HASH_LEN: usize = 20;

#[derive(Debug, Error)]
pub enum MerkleError {
    #[error("proof length {0} is not a multiple of {HASH_LEN}")]
    BadProofLength(usize),

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, MerkleError>;
