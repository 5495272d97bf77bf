use serde::{Deserialize, Serialize};

/// Closed set of supported signing ecosystems.
///
/// The numeric tag is the first byte of every leaf and part of the wire
/// format shared with the on-chain verifier; variants must never be
/// reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ecosystem {
    Discord = 0,
    Solana = 1,
    Evm = 2,
    Sui = 3,
    Aptos = 4,
    Cosmwasm = 5,
}

/// Ecosystem-native identity payload of a claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identity {
    Discord { username: String },
    Solana { pubkey: [u8; 32] },
    Evm { address: [u8; 20] },
    Sui { address: [u8; 32] },
    Aptos { address: [u8; 32] },
    Cosmwasm { address: String },
}

impl Identity {
    pub fn ecosystem(&self) -> Ecosystem {
        match self {
            Identity::Discord { .. } => Ecosystem::Discord,
            Identity::Solana { .. } => Ecosystem::Solana,
            Identity::Evm { .. } => Ecosystem::Evm,
            Identity::Sui { .. } => Ecosystem::Sui,
            Identity::Aptos { .. } => Ecosystem::Aptos,
            Identity::Cosmwasm { .. } => Ecosystem::Cosmwasm,
        }
    }
}

/// One claim record: who may claim, and how much.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInfo {
    pub identity: Identity,
    pub amount: u64,
}

impl ClaimInfo {
    pub fn new(identity: Identity, amount: u64) -> Self {
        Self { identity, amount }
    }

    /// Canonical leaf bytes: `tag u8 || identity payload || amount u64 LE`.
    ///
    /// String payloads carry a u32 LE length prefix; fixed-size payloads are
    /// raw. This serialized form IS the Merkle leaf, so the layout is frozen.
    pub fn to_leaf(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(64);
        out.push(self.identity.ecosystem() as u8);
        match &self.identity {
            Identity::Discord { username } => push_string(&mut out, username),
            Identity::Solana { pubkey } => out.extend_from_slice(pubkey),
            Identity::Evm { address } => out.extend_from_slice(address),
            Identity::Sui { address } => out.extend_from_slice(address),
            Identity::Aptos { address } => out.extend_from_slice(address),
            Identity::Cosmwasm { address } => push_string(&mut out, address),
        }
        out.extend_from_slice(&self.amount.to_le_bytes());
        out
    }
}

fn push_string(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u32).to_le_bytes());
    out.extend_from_slice(s.as_bytes());
}
