//! Address parsing with canonical byte output.
//!
//! Hex decoding is case-insensitive, so an EVM address supplied as
//! `0xAbC...` and `0xabc...` produces the same 20 raw bytes and therefore
//! the same leaf. Canonicalization is structural, not a caller obligation.

use crate::{ClaimsError, Result};

fn parse_fixed_hex<const N: usize>(s: &str) -> Result<[u8; N]> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    if stripped.len() != N * 2 {
        return Err(ClaimsError::BadAddressLength {
            expected: N,
            found: stripped.len() / 2,
        });
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(stripped, &mut out)?;
    Ok(out)
}

/// Parse a `0x`-prefixed EVM address in any letter case.
pub fn parse_evm_address(s: &str) -> Result<[u8; 20]> {
    parse_fixed_hex(s)
}

/// Parse a `0x`-prefixed 32-byte Sui address.
pub fn parse_sui_address(s: &str) -> Result<[u8; 32]> {
    parse_fixed_hex(s)
}

/// Parse a `0x`-prefixed 32-byte Aptos account address.
pub fn parse_aptos_address(s: &str) -> Result<[u8; 32]> {
    parse_fixed_hex(s)
}
