//! Discord attestation by the dispenser guard.
//!
//! Discord identities have no wallet, so the signer here is not the
//! claimant: the backend, having verified the user's OAuth session, signs a
//! canonical (username, claimant pubkey) record with the server-held guard
//! key. The resulting record proves server-attested identity.

use ed25519_dalek::{Signer as _, SigningKey};

use crate::SignedMessage;

const ATTEST_DOMAIN: &[u8] = b"DISPENSER_GUARD_ATTEST";

/// Canonical attestation bytes:
/// domain || u32 LE len(username) || username || claimant pubkey.
pub fn attestation_message(username: &str, claimant: &[u8; 32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ATTEST_DOMAIN.len() + 4 + username.len() + 32);
    out.extend_from_slice(ATTEST_DOMAIN);
    out.extend_from_slice(&(username.len() as u32).to_le_bytes());
    out.extend_from_slice(username.as_bytes());
    out.extend_from_slice(claimant);
    out
}

/// Sign the attestation record with the guard key. Infallible: the inputs
/// are already canonical and ed25519 signing cannot fail.
pub fn attest_discord(guard: &SigningKey, username: &str, claimant: &[u8; 32]) -> SignedMessage {
    let full_message = attestation_message(username, claimant);
    let signature = guard.sign(&full_message);

    SignedMessage {
        public_key: guard.verifying_key().to_bytes().to_vec(),
        signature: signature.to_bytes().to_vec(),
        recovery_id: None,
        full_message,
    }
}
