//! Cosmos-family (amino ADR-36) normalization.
//!
//! Wallets sign a canonical `sign/MsgSignData` sign-doc wrapping the payload
//! and the signer's bech32 address. Amino wallets never report a recovery
//! id, so it is brute-forced against the known public key. Injective is the
//! odd one out: it hashes with Keccak-256 and derives an EVM-style address,
//! where every other chain hashes with SHA-256 and keeps the uncompressed
//! point.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

use crate::evm::derive_address;
use crate::recovery::{decompress_pubkey, find_recovery_id};
use crate::{Result, SignatureError, SignedMessage};

const INJECTIVE_PREFIX: &str = "inj";

/// Raw amino sign response. `pub_key` and `signature` are base64 as wallets
/// emit them, absent when the wallet is disconnected or the user declined.
#[derive(Clone, Debug)]
pub struct CosmosSignResponse {
    /// Signer's bech32 address.
    pub address: String,
    /// 33-byte compressed secp256k1 key, base64.
    pub pub_key: Option<String>,
    /// 64-byte compact signature, base64.
    pub signature: Option<String>,
    pub payload: String,
}

/// Canonical ADR-36 sign-doc bytes for `payload` signed by `address`.
///
/// Sorted keys and no whitespace; `serde_json`'s map is a `BTreeMap`, so
/// serializing gives the canonical ordering directly.
pub fn sign_doc(address: &str, payload: &str) -> Vec<u8> {
    let doc = serde_json::json!({
        "account_number": "0",
        "chain_id": "",
        "fee": { "amount": [], "gas": "0" },
        "memo": "",
        "msgs": [{
            "type": "sign/MsgSignData",
            "value": {
                "data": BASE64.encode(payload.as_bytes()),
                "signer": address,
            },
        }],
        "sequence": "0",
    });
    doc.to_string().into_bytes()
}

/// Chain identifier: bech32 text before the first `1` separator.
pub fn chain_prefix(address: &str) -> Result<&str> {
    address
        .split_once('1')
        .map(|(prefix, _)| prefix)
        .filter(|prefix| !prefix.is_empty())
        .ok_or_else(|| SignatureError::MalformedAddress(address.to_string()))
}

pub fn normalize_cosmos(response: &CosmosSignResponse) -> Result<Option<SignedMessage>> {
    let (Some(pub_key), Some(signature)) = (&response.pub_key, &response.signature) else {
        return Ok(None);
    };

    let prefix = chain_prefix(&response.address)?;
    let injective = prefix == INJECTIVE_PREFIX;

    let compressed = BASE64.decode(pub_key)?;
    let uncompressed = decompress_pubkey(&compressed)?;

    let sig = BASE64.decode(signature)?;
    if sig.len() != 64 {
        return Err(SignatureError::BadSignatureLength { expected: 64, found: sig.len() });
    }

    let full_message = sign_doc(&response.address, &response.payload);
    let prehash: [u8; 32] = if injective {
        Keccak256::digest(&full_message).into()
    } else {
        Sha256::digest(&full_message).into()
    };

    let recovery_id = find_recovery_id(&sig, &prehash, &uncompressed)?;

    let public_key = if injective {
        derive_address(&uncompressed).to_vec()
    } else {
        uncompressed.to_vec()
    };

    Ok(Some(SignedMessage {
        public_key,
        signature: sig,
        recovery_id: Some(recovery_id),
        full_message,
    }))
}
