//! Cross-ecosystem signature normalization.
//!
//! Each supported signing ecosystem has its own wire format and its own
//! "full message" reconstruction rule. The per-ecosystem normalizers in this
//! crate turn a wallet's raw signing response into one canonical
//! [`SignedMessage`] whose fields match, byte for byte, what the on-chain
//! signature-verification instruction expects.
//!
//! Failure taxonomy: `Ok(None)` is the normal negative path (wallet not
//! connected, user declined signing); `Err` means malformed input or a
//! cryptographic inconsistency and must not be treated as a soft miss.

pub mod aptos;
pub mod cosmos;
pub mod discord;
pub mod evm;
pub mod recovery;
pub mod solana;
pub mod sui;

pub use aptos::{normalize_aptos, AptosSignResponse, WalletValue};
pub use cosmos::{normalize_cosmos, CosmosSignResponse};
pub use discord::{attest_discord, attestation_message};
pub use evm::{derive_address, normalize_evm, personal_message, EvmSignResponse};
pub use recovery::{decompress_pubkey, find_recovery_id};
pub use solana::{normalize_solana, SolanaSignResponse};
pub use sui::{intent_digest, normalize_sui, SuiSignResponse};

use ed25519_dalek::{Signature as Ed25519Signature, Verifier as _, VerifyingKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical signed-message record shared by every ecosystem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    /// Raw public key in ecosystem-native encoding: 20-byte EVM-style
    /// address, 32-byte ed25519 key, or 65-byte uncompressed secp256k1
    /// point.
    pub public_key: Vec<u8>,
    /// Raw 64-byte signature (compact secp256k1 or ed25519).
    pub signature: Vec<u8>,
    /// Present only for secp256k1 signatures where the verifier recovers
    /// the public key on-chain.
    pub recovery_id: Option<u8>,
    /// The exact bytes (or digest, per ecosystem convention) the verifier
    /// reconstructs and checks against the signature.
    pub full_message: Vec<u8>,
}

impl SignedMessage {
    /// Check an ed25519 record against its embedded 32-byte public key.
    pub fn verify_ed25519(&self) -> Result<()> {
        let pk: [u8; 32] = self.public_key.as_slice().try_into().map_err(|_| {
            SignatureError::BadPublicKeyLength { expected: 32, found: self.public_key.len() }
        })?;
        let sig: [u8; 64] = self.signature.as_slice().try_into().map_err(|_| {
            SignatureError::BadSignatureLength { expected: 64, found: self.signature.len() }
        })?;
        let vk = VerifyingKey::from_bytes(&pk).map_err(|_| SignatureError::BadPublicKey)?;
        vk.verify(&self.full_message, &Ed25519Signature::from_bytes(&sig))
            .map_err(|_| SignatureError::VerifyFailed)
    }
}

/// Raw signing response from any supported wallet ecosystem.
///
/// Discord is absent on purpose: its record is a server-side attestation
/// (see [`discord::attest_discord`]), not a wallet response.
#[derive(Clone, Debug)]
pub enum WalletSignResponse {
    Evm(EvmSignResponse),
    Cosmos(CosmosSignResponse),
    Aptos(AptosSignResponse),
    Sui(SuiSignResponse),
    Solana(SolanaSignResponse),
}

/// Dispatch to the ecosystem's normalizer. Adding a variant forces every
/// call site through this exhaustive match.
pub fn normalize(response: &WalletSignResponse) -> Result<Option<SignedMessage>> {
    match response {
        WalletSignResponse::Evm(r) => normalize_evm(r),
        WalletSignResponse::Cosmos(r) => normalize_cosmos(r),
        WalletSignResponse::Aptos(r) => normalize_aptos(r),
        WalletSignResponse::Sui(r) => normalize_sui(r),
        WalletSignResponse::Solana(r) => normalize_solana(r),
    }
}

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("signature length {found} bytes, expected {expected}")]
    BadSignatureLength { expected: usize, found: usize },

    #[error("public key length {found} bytes, expected {expected}")]
    BadPublicKeyLength { expected: usize, found: usize },

    #[error("malformed secp256k1 public key")]
    BadPublicKey,

    #[error("recovery id {0} is out of range")]
    BadRecoveryId(u8),

    #[error("address is {found} hex chars, expected {expected}")]
    BadAddressLength { expected: usize, found: usize },

    #[error("bech32 address {0:?} has no prefix separator")]
    MalformedAddress(String),

    #[error("multisig responses are not supported")]
    MultisigUnsupported,

    #[error("unsupported signature scheme flag {0:#04x}")]
    UnsupportedScheme(u8),

    #[error("recovered signer does not match the claimed address")]
    AddressMismatch,

    // Exhausting all four candidates means the signature/pubkey pair is
    // inconsistent; this must surface loudly, never as a soft miss.
    #[error("no recovery id in 0..4 reproduces the signer public key")]
    RecoveryIdNotFound,

    #[error("signature verification failed")]
    VerifyFailed,

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("ecdsa error: {0}")]
    Ecdsa(#[from] k256::ecdsa::Error),
}

pub type Result<T> = std::result::Result<T, SignatureError>;
