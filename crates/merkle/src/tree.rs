use std::collections::HashMap;

use crate::hash::{hash_leaf, hash_node, null_hash};
use crate::proof::MerkleProof;
use crate::Hash20;

/// Dense array-backed complete binary hash tree.
///
/// Node `i` has children `2i` and `2i + 1`; the root lives at index 1 and
/// leaves occupy `[2^depth, 2^(depth+1))`. Built once from a finalized leaf
/// list and never mutated.
pub struct MerkleTree {
    depth: usize,
    leaf_count: usize,
    nodes: Vec<Hash20>,
    // raw leaf bytes -> tree index, for O(1) proof lookup
    indices: HashMap<Vec<u8>, usize>,
}

impl MerkleTree {
    /// Build a tree over `leaves` in the order given. Insertion order fixes
    /// each leaf's index; leaves themselves are never sorted.
    ///
    /// An empty leaf list yields a depth-0 tree whose root is the padding
    /// hash, so `prove` is total and always returns `None` for it.
    pub fn new<L: AsRef<[u8]>>(leaves: &[L]) -> Self {
        let leaf_count = leaves.len();
        let depth = ceil_log2(leaf_count.max(1));
        let base = 1usize << depth;
        let slots = base << 1;

        let mut nodes = vec![[0u8; 20]; slots];
        let mut indices = HashMap::with_capacity(leaf_count);

        for (i, leaf) in leaves.iter().enumerate() {
            nodes[base + i] = hash_leaf(leaf.as_ref());
            indices.insert(leaf.as_ref().to_vec(), base + i);
        }

        let padding = null_hash();
        for slot in nodes.iter_mut().take(slots).skip(base + leaf_count) {
            *slot = padding;
        }

        // internal levels bottom-up; index 0 stays unused
        for i in (1..base).rev() {
            nodes[i] = hash_node(nodes[2 * i], nodes[2 * i + 1]);
        }

        Self { depth, leaf_count, nodes, indices }
    }

    pub fn root(&self) -> Hash20 {
        self.nodes[1]
    }

    pub fn root_hex(&self) -> String {
        hex::encode(self.root())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Inclusion proof for `leaf`, or `None` if the leaf was never part of
    /// the tree. Non-membership is a normal negative result, not an error.
    ///
    /// The proof holds exactly `depth` sibling digests, bottom-to-top.
    pub fn prove(&self, leaf: &[u8]) -> Option<MerkleProof> {
        let mut index = *self.indices.get(leaf)?;
        let mut siblings = Vec::with_capacity(self.depth);
        while index > 1 {
            siblings.push(self.nodes[index ^ 1]);
            index >>= 1;
        }
        Some(MerkleProof::new(siblings))
    }
}

fn ceil_log2(n: usize) -> usize {
    let mut depth = 0;
    while (1usize << depth) < n {
        depth += 1;
    }
    depth
}
