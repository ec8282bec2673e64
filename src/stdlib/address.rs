//! Algorand address encoding
//!
//! An address is the unpadded RFC 4648 base32 encoding of a 32-byte public
//! key followed by the last 4 bytes of its SHA-512/256 digest.

use data_encoding::BASE32_NOPAD;
use sha2::{Digest, Sha512_256};

use crate::error::SessionError;

pub const ADDRESS_LENGTH: usize = 58;
const PUBLIC_KEY_LENGTH: usize = 32;
const CHECKSUM_LENGTH: usize = 4;

fn checksum(public_key: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = Sha512_256::digest(public_key);
    let mut out = [0u8; CHECKSUM_LENGTH];
    out.copy_from_slice(&digest[digest.len() - CHECKSUM_LENGTH..]);
    out
}

/// Encode a public key as an Algorand address
pub fn encode_address(public_key: &[u8; PUBLIC_KEY_LENGTH]) -> String {
    let mut bytes = Vec::with_capacity(PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH);
    bytes.extend_from_slice(public_key);
    bytes.extend_from_slice(&checksum(public_key));
    BASE32_NOPAD.encode(&bytes)
}

/// Decode an Algorand address into its public key, verifying the checksum
pub fn decode_address(address: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], SessionError> {
    if address.len() != ADDRESS_LENGTH {
        return Err(SessionError::invalid_address(format!(
            "{} (expected {} characters, got {})",
            address,
            ADDRESS_LENGTH,
            address.len()
        )));
    }

    let bytes = BASE32_NOPAD
        .decode(address.as_bytes())
        .map_err(|e| SessionError::invalid_address(format!("{} ({})", address, e)))?;
    if bytes.len() != PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH {
        return Err(SessionError::invalid_address(format!(
            "{} (expected {} bytes, got {})",
            address,
            PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH,
            bytes.len()
        )));
    }

    let (key, sum) = bytes.split_at(PUBLIC_KEY_LENGTH);
    if checksum(key) != sum {
        return Err(SessionError::invalid_address(format!(
            "{} (checksum mismatch)",
            address
        )));
    }

    let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
    public_key.copy_from_slice(key);

    // Trailing pad bits must be zero
    if encode_address(&public_key) != address {
        return Err(SessionError::invalid_address(format!(
            "{} (non-canonical encoding)",
            address
        )));
    }

    Ok(public_key)
}

/// Normalize user-supplied address text (trim, uppercase) and validate it
pub fn format_address(raw: &str) -> Result<String, SessionError> {
    let address = raw.trim().to_uppercase();
    decode_address(&address)?;
    Ok(address)
}
