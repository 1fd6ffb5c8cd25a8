use crate::key_error::KeyError;
use crate::muxed_account::MuxedAccount;
use crate::strkey::{self, VersionByte};
use ed25519_dalek::{Signature, Verifier, PUBLIC_KEY_LENGTH};
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::Hash;
use std::hash::Hasher;
use std::str::FromStr;

/// An account public key, displayed as its `G...` address.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PublicKey(ed25519_dalek::PublicKey);

impl Hash for PublicKey {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.0.as_bytes().hash(state)
    }
}

impl PublicKey {
    /// Returns a public key.
    ///
    /// # Arguments
    ///
    /// * `data` - the 32-byte compressed point.
    ///
    pub fn from_bytes(data: &[u8]) -> Result<PublicKey, KeyError> {
        if data.len() != PUBLIC_KEY_LENGTH {
            return Err(KeyError::Length(data.len()));
        }

        let public_key = ed25519_dalek::PublicKey::from_bytes(data).map_err(KeyError::Signature)?;

        Ok(PublicKey(public_key))
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0.to_bytes()
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.0.as_bytes()
    }

    /// Verify a signature on a message with this public key.
    ///
    /// Malformed signatures verify as `false`; this never errors.
    ///
    /// # Arguments
    ///
    /// `message` - slice &[u8]
    ///
    /// `signature` - slice &[u8], 64 bytes when well formed
    ///
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let signature = if let Ok(signature) = Signature::try_from(signature) {
            signature
        } else {
            return false;
        };

        self.0.verify(message, &signature).is_ok()
    }

    /// Returns the muxed `M...` account of this key with the given id.
    pub fn to_muxed(&self, id: u64) -> MuxedAccount {
        MuxedAccount::new(*self, id)
    }

    pub(crate) fn from_dalek(public_key: ed25519_dalek::PublicKey) -> PublicKey {
        PublicKey(public_key)
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&strkey::encode(VersionByte::Ed25519PublicKey, self.0.as_bytes()))
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    /// Parses a `G...` address.
    fn from_str(text: &str) -> Result<Self, KeyError> {
        let payload = strkey::decode_check(VersionByte::Ed25519PublicKey, text)?;

        PublicKey::from_bytes(&payload)
    }
}
