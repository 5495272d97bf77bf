//! secp256k1 public-key recovery helpers.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;

use crate::{Result, SignatureError};

/// Expand a 33-byte SEC1 compressed secp256k1 key to the 65-byte
/// uncompressed point (0x04 || x || y).
pub fn decompress_pubkey(compressed: &[u8]) -> Result<[u8; 65]> {
    if compressed.len() != 33 {
        return Err(SignatureError::BadPublicKeyLength {
            expected: 33,
            found: compressed.len(),
        });
    }
    let key = PublicKey::from_sec1_bytes(compressed).map_err(|_| SignatureError::BadPublicKey)?;
    let point = key.to_encoded_point(false);
    let mut out = [0u8; 65];
    out.copy_from_slice(point.as_bytes());
    Ok(out)
}

/// Brute-force search for the recovery id of a compact signature.
///
/// Wallets in the Cosmos family do not report a recovery id, but the
/// on-chain secp256k1 instruction needs one. Try every candidate in 0..4 and
/// accept the first whose recovered point equals `expected` byte for byte.
///
/// For a valid signature over `prehash` by the holder of `expected` exactly
/// one candidate matches; exhausting all four signals a corrupted or
/// mismatched signature/pubkey pair and is returned as a hard error.
pub fn find_recovery_id(signature: &[u8], prehash: &[u8; 32], expected: &[u8; 65]) -> Result<u8> {
    let sig = Signature::from_slice(signature)?;
    for candidate in 0..4u8 {
        let Some(recid) = RecoveryId::from_byte(candidate) else {
            continue;
        };
        let Ok(recovered) = VerifyingKey::recover_from_prehash(prehash, &sig, recid) else {
            continue;
        };
        if recovered.to_encoded_point(false).as_bytes() == expected {
            return Ok(candidate);
        }
    }
    Err(SignatureError::RecoveryIdNotFound)
}
