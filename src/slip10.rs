//! Hardened-only SLIP-0010 derivation over the ed25519 curve.

use crate::key_error::KeyError;
use hmac::{Hmac, Mac, NewMac};
use sha2::Sha512;
use std::fmt;
use zeroize::Zeroize;

type HmacSha512 = Hmac<Sha512>;

/// HMAC key used to turn a seed into the master extended key.
const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// Indices at or above this value denote hardened children.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// A (key, chain code) pair threaded through each derivation step.
pub struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl ExtendedKey {
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    fn from_hmac(mac: HmacSha512) -> ExtendedKey {
        let mut output = mac.finalize().into_bytes();

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);
        output[..].zeroize();

        ExtendedKey { key, chain_code }
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.key[..].zeroize();
        self.chain_code[..].zeroize();
    }
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExtendedKey(..)")
    }
}

/// Returns the master extended key for `seed`.
pub fn master_key(seed: &[u8]) -> ExtendedKey {
    let mut mac = HmacSha512::new_from_slice(ED25519_CURVE).expect("HMAC can take key of any size");
    mac.update(seed);

    ExtendedKey::from_hmac(mac)
}

/// Derives the hardened child at `index`.
///
/// # Arguments
///
/// `parent` - the extended key to derive from.
///
/// `index` - child index with the hardened offset already applied.
///
pub fn derive_child_hardened(parent: &ExtendedKey, index: u32) -> Result<ExtendedKey, KeyError> {
    if index < HARDENED_OFFSET {
        return Err(KeyError::InvalidDerivationIndex(index));
    }

    let mut mac =
        HmacSha512::new_from_slice(&parent.chain_code).expect("HMAC can take key of any size");
    mac.update(&[0x00]);
    mac.update(&parent.key);
    mac.update(&index.to_be_bytes());

    Ok(ExtendedKey::from_hmac(mac))
}
