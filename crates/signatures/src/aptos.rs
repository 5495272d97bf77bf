//! Aptos wallet-standard normalization (single-signer ed25519 only).

use crate::{Result, SignatureError, SignedMessage};

/// A wallet response field that is either a plain hex string or, for
/// multisig accounts, a vector of them.
#[derive(Clone, Debug)]
pub enum WalletValue {
    Hex(String),
    Multi(Vec<String>),
}

/// Raw `signMessage` response. `public_key` and `signature` are absent when
/// the wallet is disconnected or the user declined.
#[derive(Clone, Debug)]
pub struct AptosSignResponse {
    pub public_key: Option<WalletValue>,
    pub signature: Option<WalletValue>,
    pub payload: String,
    pub nonce: String,
}

/// The wallet-standard wrapping that Aptos wallets actually sign.
pub fn wrapped_message(payload: &str, nonce: &str) -> Vec<u8> {
    format!("APTOS\nmessage: {payload}\nnonce: {nonce}").into_bytes()
}

/// Multisig responses are rejected outright: this flow supports a single
/// ed25519 signer, and a silently wrong record would produce an invalid
/// claim transaction.
pub fn normalize_aptos(response: &AptosSignResponse) -> Result<Option<SignedMessage>> {
    let (Some(public_key), Some(signature)) = (&response.public_key, &response.signature) else {
        return Ok(None);
    };

    let public_key = decode_single(public_key, 32)?;
    let signature = decode_single(signature, 64)?;

    Ok(Some(SignedMessage {
        public_key,
        signature,
        recovery_id: None,
        full_message: wrapped_message(&response.payload, &response.nonce),
    }))
}

fn decode_single(value: &WalletValue, expected: usize) -> Result<Vec<u8>> {
    let hex_str = match value {
        WalletValue::Hex(s) => s,
        WalletValue::Multi(_) => return Err(SignatureError::MultisigUnsupported),
    };
    let bytes = hex::decode(hex_str.strip_prefix("0x").unwrap_or(hex_str))?;
    if bytes.len() != expected {
        return Err(match expected {
            32 => SignatureError::BadPublicKeyLength { expected, found: bytes.len() },
            _ => SignatureError::BadSignatureLength { expected, found: bytes.len() },
        });
    }
    Ok(bytes)
}
