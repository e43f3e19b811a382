use alloy::hex;
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::{constants::ADDRESS_PREFIX_LEN, error::AirdropError};

/// An address and the claim identifier derived for it.
///
/// Serializes as a two-element array, `[address, claim_id]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimPair {
    pub address: String,
    pub claim_id: String,
}

impl ClaimPair {
    pub fn new(address: impl Into<String>, claim_id: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            claim_id: claim_id.into(),
        }
    }
}

impl Serialize for ClaimPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.address, &self.claim_id).serialize(serializer)
    }
}

/// Drops the first [`ADDRESS_PREFIX_LEN`] characters. Shorter inputs yield `""`.
pub fn strip_address_prefix(address: &str) -> &str {
    address
        .char_indices()
        .nth(ADDRESS_PREFIX_LEN)
        .map_or("", |(idx, _)| &address[idx..])
}

/// Like [`hex::decode`] but without accepting a leading `0x`/`0X`.
pub fn decode_hex_strict(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let bytes = input.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        return Err(hex::FromHexError::InvalidHexCharacter {
            c: bytes[1] as char,
            index: 1,
        });
    }

    hex::decode(input)
}

/// SHA-256 over the bytes of `salt_hex ++ address_body`, as 64 lowercase hex chars.
pub fn derive_claim_id(salt_hex: &str, address: &str) -> Result<String, AirdropError> {
    let preimage_hex = format!("{salt_hex}{}", strip_address_prefix(address));
    let preimage = decode_hex_strict(&preimage_hex)
        .map_err(|e| AirdropError::malformed_hex(format!("address {address:?}"), e))?;

    Ok(hex::encode(Sha256::digest(&preimage)))
}

/// Derives one pair per address, keeping the input order.
pub fn derive_claim_pairs(
    salt: &[u8],
    addresses: &[String],
) -> Result<Vec<ClaimPair>, AirdropError> {
    let salt_hex = hex::encode(salt);

    addresses
        .iter()
        .map(|address| {
            let claim_id = derive_claim_id(&salt_hex, address)?;
            Ok(ClaimPair::new(address.as_str(), claim_id))
        })
        .collect()
}
