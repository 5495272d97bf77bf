use merkle::{Hash20, MerkleProof, MerkleTree};

use crate::ClaimInfo;

/// A finalized airdrop: every claim committed into one Merkle tree.
///
/// Built once from the complete claim list, then used to extract the root
/// (published on-chain) and per-claim proofs (stored off-chain, served per
/// claimant). Never mutated.
pub struct Distribution {
    claims: Vec<ClaimInfo>,
    tree: MerkleTree,
}

impl Distribution {
    pub fn new(claims: Vec<ClaimInfo>) -> Self {
        let leaves: Vec<Vec<u8>> = claims.iter().map(ClaimInfo::to_leaf).collect();
        let tree = MerkleTree::new(&leaves);
        Self { claims, tree }
    }

    pub fn claims(&self) -> &[ClaimInfo] {
        &self.claims
    }

    pub fn root(&self) -> Hash20 {
        self.tree.root()
    }

    pub fn root_hex(&self) -> String {
        self.tree.root_hex()
    }

    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// Inclusion proof for `claim`, or `None` if it is not part of this
    /// distribution.
    pub fn proof(&self, claim: &ClaimInfo) -> Option<MerkleProof> {
        self.tree.prove(&claim.to_leaf())
    }

    /// Proofs for every claim, in claim order. Used when exporting the full
    /// proof table to storage after finalization.
    ///
    /// Every claim leaf is in its own tree, so this yields one entry per
    /// claim; the lookup stays fallible only to keep the surface panic-free.
    pub fn all_proofs(&self) -> Vec<(ClaimInfo, MerkleProof)> {
        self.claims
            .iter()
            .filter_map(|claim| {
                let proof = self.tree.prove(&claim.to_leaf())?;
                Some((claim.clone(), proof))
            })
            .collect()
    }
}
