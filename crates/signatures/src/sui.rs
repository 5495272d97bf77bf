//! Sui intent-scoped personal-message normalization.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::{Result, SignatureError, SignedMessage};

type Blake2b256 = Blake2b<U32>;

const SCHEME_ED25519: u8 = 0x00;
// intent = scope: PersonalMessage, version: V0, app: Sui
const INTENT_PERSONAL_MESSAGE: [u8; 3] = [0x03, 0x00, 0x00];
// flag(1) || signature(64) || ed25519 pubkey(32)
const BLOB_LEN: usize = 97;

/// Raw wallet response: one base64 blob, absent when the user declined.
#[derive(Clone, Debug)]
pub struct SuiSignResponse {
    pub signature: Option<String>,
    pub payload: Vec<u8>,
}

/// What a Sui verifier checks the signature against: the Blake2b-256 digest
/// of the intent-wrapped, length-prefixed payload.
pub fn intent_digest(payload: &[u8]) -> [u8; 32] {
    let mut wrapped = Vec::with_capacity(3 + 10 + payload.len());
    wrapped.extend_from_slice(&INTENT_PERSONAL_MESSAGE);
    push_uleb128(&mut wrapped, payload.len() as u64);
    wrapped.extend_from_slice(payload);
    Blake2b256::digest(&wrapped).into()
}

/// Split the wallet blob at its fixed offsets. Only the ed25519 scheme flag
/// is accepted.
pub fn normalize_sui(response: &SuiSignResponse) -> Result<Option<SignedMessage>> {
    let Some(blob_b64) = &response.signature else {
        return Ok(None);
    };

    let blob = BASE64.decode(blob_b64)?;
    if blob.len() != BLOB_LEN {
        return Err(SignatureError::BadSignatureLength { expected: BLOB_LEN, found: blob.len() });
    }
    if blob[0] != SCHEME_ED25519 {
        return Err(SignatureError::UnsupportedScheme(blob[0]));
    }

    Ok(Some(SignedMessage {
        public_key: blob[65..].to_vec(),
        signature: blob[1..65].to_vec(),
        recovery_id: None,
        full_message: intent_digest(&response.payload).to_vec(),
    }))
}

fn push_uleb128(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if value == 0 {
            break;
        }
    }
}
