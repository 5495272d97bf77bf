//! Solana ed25519 normalization. The wallet signs the raw UTF-8 payload
//! bytes directly, so there is nothing to wrap; the signature is verified
//! here rather than deferred, since the input carries no other structure to
//! check.

use ed25519_dalek::{Signature, Verifier as _, VerifyingKey};

use crate::{Result, SignatureError, SignedMessage};

/// Raw wallet response. Fields are absent when the wallet is disconnected
/// or the user declined.
#[derive(Clone, Debug)]
pub struct SolanaSignResponse {
    pub pubkey: Option<[u8; 32]>,
    pub signature: Option<Vec<u8>>,
    pub payload: String,
}

pub fn normalize_solana(response: &SolanaSignResponse) -> Result<Option<SignedMessage>> {
    let (Some(pubkey), Some(signature)) = (&response.pubkey, &response.signature) else {
        return Ok(None);
    };

    let sig: [u8; 64] = signature.as_slice().try_into().map_err(|_| {
        SignatureError::BadSignatureLength { expected: 64, found: signature.len() }
    })?;

    let vk = VerifyingKey::from_bytes(pubkey).map_err(|_| SignatureError::BadPublicKey)?;
    vk.verify(response.payload.as_bytes(), &Signature::from_bytes(&sig))
        .map_err(|_| SignatureError::VerifyFailed)?;

    Ok(Some(SignedMessage {
        public_key: pubkey.to_vec(),
        signature: sig.to_vec(),
        recovery_id: None,
        full_message: response.payload.as_bytes().to_vec(),
    }))
}
