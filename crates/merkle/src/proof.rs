use serde::{Deserialize, Serialize};

use crate::hash::{hash_leaf, hash_node};
use crate::{Hash20, MerkleError, Result, HASH_LEN};

/// Compact inclusion proof: sibling digests from leaf level to root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    siblings: Vec<Hash20>,
}

impl MerkleProof {
    pub fn new(siblings: Vec<Hash20>) -> Self {
        Self { siblings }
    }

    pub fn siblings(&self) -> &[Hash20] {
        &self.siblings
    }

    /// Number of sibling digests; equals the tree depth.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Re-derive the root from `leaf` and check it against `root`.
    ///
    /// Each step combines with the sibling-ordered node hash, so the
    /// verifier never tracks left/right position.
    pub fn verify(&self, root: Hash20, leaf: &[u8]) -> bool {
        let mut current = hash_leaf(leaf);
        for sibling in &self.siblings {
            current = hash_node(current, *sibling);
        }
        current == root
    }

    /// Wire format: raw concatenated 20-byte digests, bottom-to-top.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.siblings.len() * HASH_LEN);
        for sibling in &self.siblings {
            out.extend_from_slice(sibling);
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % HASH_LEN != 0 {
            return Err(MerkleError::BadProofLength(bytes.len()));
        }
        let siblings = bytes
            .chunks_exact(HASH_LEN)
            .map(|chunk| {
                let mut digest = [0u8; HASH_LEN];
                digest.copy_from_slice(chunk);
                digest
            })
            .collect();
        Ok(Self { siblings })
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(s)?)
    }
}
