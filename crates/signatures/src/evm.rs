//! EVM `personal_sign` normalization.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};

use crate::{Result, SignatureError, SignedMessage};

const PERSONAL_SIGN_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Raw `personal_sign` response. `address` and `signature` are absent when
/// the wallet is disconnected or the user declined.
#[derive(Clone, Debug)]
pub struct EvmSignResponse {
    /// Claimed signer address, `0x`-prefixed hex in any letter case.
    pub address: Option<String>,
    /// `0x`-prefixed 65-byte `r || s || v` hex.
    pub signature: Option<String>,
    pub payload: String,
}

/// The exact bytes an EVM verifier hashes for `personal_sign`:
/// prefix, decimal byte length, then the payload itself.
pub fn personal_message(payload: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(PERSONAL_SIGN_PREFIX.len() + 20 + payload.len());
    out.extend_from_slice(PERSONAL_SIGN_PREFIX);
    out.extend_from_slice(payload.len().to_string().as_bytes());
    out.extend_from_slice(payload.as_bytes());
    out
}

/// EVM address of an uncompressed secp256k1 point: keccak256(x || y)[12..].
pub fn derive_address(uncompressed: &[u8; 65]) -> [u8; 20] {
    let digest = Keccak256::digest(&uncompressed[1..]);
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest[12..]);
    out
}

/// Split the 65-byte signature, normalize the legacy `v` convention, and
/// check the claimed address against the key recovered from the signature.
pub fn normalize_evm(response: &EvmSignResponse) -> Result<Option<SignedMessage>> {
    let (Some(address), Some(signature)) = (&response.address, &response.signature) else {
        return Ok(None);
    };

    let raw = hex::decode(signature.strip_prefix("0x").unwrap_or(signature))?;
    if raw.len() != 65 {
        return Err(SignatureError::BadSignatureLength { expected: 65, found: raw.len() });
    }
    let (compact, v) = raw.split_at(64);
    let recovery_id = normalize_v(v[0]);

    let full_message = personal_message(&response.payload);
    let prehash: [u8; 32] = Keccak256::digest(&full_message).into();

    let sig = Signature::from_slice(compact)?;
    let recid = RecoveryId::from_byte(recovery_id)
        .ok_or(SignatureError::BadRecoveryId(recovery_id))?;
    let recovered = VerifyingKey::recover_from_prehash(&prehash, &sig, recid)?;
    let point = recovered.to_encoded_point(false);
    let mut uncompressed = [0u8; 65];
    uncompressed.copy_from_slice(point.as_bytes());

    let derived = derive_address(&uncompressed);
    let claimed = parse_address(address)?;
    if derived != claimed {
        return Err(SignatureError::AddressMismatch);
    }

    Ok(Some(SignedMessage {
        public_key: derived.to_vec(),
        signature: compact.to_vec(),
        recovery_id: Some(recovery_id),
        full_message,
    }))
}

/// Legacy Ethereum convention puts the recovery id at `v = 27 + id`;
/// already-normalized wallets send 0 or 1 and pass through unchanged.
fn normalize_v(v: u8) -> u8 {
    if (27..30).contains(&v) {
        v - 27
    } else {
        v
    }
}

fn parse_address(s: &str) -> Result<[u8; 20]> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    if stripped.len() != 40 {
        return Err(SignatureError::BadAddressLength {
            expected: 40,
            found: stripped.len(),
        });
    }
    let mut out = [0u8; 20];
    hex::decode_to_slice(stripped, &mut out)?;
    Ok(out)
}
