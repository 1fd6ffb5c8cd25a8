use crate::key_error::KeyError;
use crate::public_key::PublicKey;
use crate::strkey::{self, VersionByte};
use ed25519_dalek::{Keypair, SecretKey, Signer, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};
use rand_core::{CryptoRng, RngCore};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use zeroize::Zeroize;

/// An ed25519 signing keypair for an account.
///
/// Displays as the `S...` secret seed; the public half is computed once on
/// construction.
pub struct PrivateKey {
    keypair: Keypair,
}

impl PrivateKey {
    /// Returns the keypair whose secret is the raw 32-byte ed25519 seed.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> PrivateKey {
        let secret_key = SecretKey::from_bytes(seed).expect("ed25519 secret keys are 32 bytes");

        PrivateKey {
            keypair: Keypair {
                public: (&secret_key).into(),
                secret: secret_key,
            },
        }
    }

    /// Returns a random keypair drawn from the thread-local CSPRNG.
    pub fn generate() -> PrivateKey {
        PrivateKey::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R>(rng: &mut R) -> PrivateKey
    where
        R: RngCore + CryptoRng,
    {
        let mut seed = [0u8; SECRET_KEY_LENGTH];
        rng.fill_bytes(&mut seed);

        let private_key = PrivateKey::from_seed(&seed);
        seed[..].zeroize();

        private_key
    }

    /// Accepts a bare 32-byte seed or a 64-byte `seed || public key` pair.
    pub fn from_bytes(data: &[u8]) -> Result<PrivateKey, KeyError> {
        let secret_key = match data.len() {
            32 | 64 => SecretKey::from_bytes(&data[..SECRET_KEY_LENGTH])?,

            _ => {
                return Err(KeyError::Length(data.len()));
            }
        };

        let private_key = PrivateKey {
            keypair: Keypair {
                public: (&secret_key).into(),
                secret: secret_key,
            },
        };

        if data.len() == 64
            && data[SECRET_KEY_LENGTH..] != private_key.keypair.public.as_bytes()[..]
        {
            return Err(KeyError::PublicKeyMismatch);
        }

        Ok(private_key)
    }

    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.keypair.secret.to_bytes()
    }

    /// Returns the deterministic RFC 8032 signature of `message`.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.keypair.sign(message).to_bytes()
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_dalek(self.keypair.public)
    }
}

impl Clone for PrivateKey {
    fn clone(&self) -> Self {
        let mut seed = self.to_bytes();
        let private_key = PrivateKey::from_seed(&seed);
        seed[..].zeroize();

        private_key
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.keypair.secret.as_bytes() == other.keypair.secret.as_bytes()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key().to_string())
            .finish()
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&strkey::encode(
            VersionByte::Ed25519SecretSeed,
            self.keypair.secret.as_bytes(),
        ))
    }
}

impl FromStr for PrivateKey {
    type Err = KeyError;

    /// Parses an `S...` secret seed.
    fn from_str(text: &str) -> Result<Self, KeyError> {
        let mut seed = strkey::decode_check(VersionByte::Ed25519SecretSeed, text)?;
        let private_key = PrivateKey::from_seed(&seed);
        seed[..].zeroize();

        Ok(private_key)
    }
}
