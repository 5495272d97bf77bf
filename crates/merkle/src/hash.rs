//! Domain-separated hashing primitive

use sha3::{Digest, Keccak256};

use crate::Hash20;

const DOMAIN_LEAF: u8 = 0x00;
const DOMAIN_NODE: u8 = 0x01;
const DOMAIN_NULL: u8 = 0x02;

fn keccak20(data: &[u8]) -> Hash20 {
    let full = Keccak256::digest(data);
    let mut out = [0u8; 20];
    out.copy_from_slice(&full[..20]);
    out
}

/// Leaf hash: H(0x00 || leaf_bytes)
pub fn hash_leaf(leaf: &[u8]) -> Hash20 {
    let mut data = Vec::with_capacity(1 + leaf.len());
    data.push(DOMAIN_LEAF);
    data.extend_from_slice(leaf);
    keccak20(&data)
}

/// Internal node hash: H(0x01 || min(l,r) || max(l,r))
///
/// Children are ordered by raw digest bytes, not by tree position.
pub fn hash_node(left: Hash20, right: Hash20) -> Hash20 {
    let (lo, hi) = if left <= right { (left, right) } else { (right, left) };
    let mut data = [0u8; 41];
    data[0] = DOMAIN_NODE;
    data[1..21].copy_from_slice(&lo);
    data[21..].copy_from_slice(&hi);
    keccak20(&data)
}

/// Padding hash for leaf slots past the real leaf count: H(0x02)
pub fn null_hash() -> Hash20 {
    keccak20(&[DOMAIN_NULL])
}
