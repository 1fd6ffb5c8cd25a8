use crate::bad_mnemonic_error::BadMnemonicError;
use crate::derive::{self, DerivationPath, PI_ACCOUNT_PATH};
use crate::entropy;
use crate::key_error::KeyError;
use crate::mnemonic_error::MnemonicError;
use crate::private_key::PrivateKey;
use bip39::{Language, Mnemonic as Bip39Mnemonic};
use hmac::Hmac;
use rand_core::{CryptoRng, RngCore};
use sha2::Sha512;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

const PBKDF2_ROUNDS: u32 = 2048;

/// A BIP-39 mnemonic phrase over the English word list.
///
/// Every value of this type has passed checksum validation.
#[derive(Clone, Eq, PartialEq)]
pub struct Mnemonic {
    words: Bip39Mnemonic,
}

/// The 64-byte PBKDF2 output of a mnemonic and passphrase.
pub struct Seed([u8; 64]);

impl Seed {
    pub fn from_bytes(bytes: [u8; 64]) -> Seed {
        Seed(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.0[..].zeroize();
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

impl Mnemonic {
    /// Returns a new random mnemonic over `entropy_bits` bits of entropy drawn
    /// from `rng`.
    ///
    /// # Arguments
    ///
    /// `rng` - cryptographically secure random source.
    ///
    /// `entropy_bits` - 128, 160, 192, 224 or 256.
    ///
    pub fn generate_with<R>(rng: &mut R, entropy_bits: usize) -> Result<Mnemonic, MnemonicError>
    where
        R: RngCore + CryptoRng,
    {
        let entropy = entropy::random(rng, entropy_bits)?;

        Mnemonic::from_entropy(&entropy)
    }

    /// Returns a new random mnemonic using the thread-local CSPRNG.
    pub fn generate(entropy_bits: usize) -> Result<Mnemonic, MnemonicError> {
        Mnemonic::generate_with(&mut rand::thread_rng(), entropy_bits)
    }

    /// Returns a new random 12-word mnemonic.
    pub fn generate_12() -> Result<Mnemonic, MnemonicError> {
        Mnemonic::generate(128)
    }

    /// Returns a new random 24-word mnemonic.
    pub fn generate_24() -> Result<Mnemonic, MnemonicError> {
        Mnemonic::generate(256)
    }

    /// Encodes raw entropy, appending its SHA-256 checksum bits.
    pub fn from_entropy(entropy: &[u8]) -> Result<Mnemonic, MnemonicError> {
        entropy::check_length(entropy.len() * 8)?;

        let words = Bip39Mnemonic::from_entropy_in(Language::English, entropy)
            .map_err(|_| MnemonicError::InvalidEntropyLength(entropy.len() * 8))?;

        Ok(Mnemonic { words })
    }

    pub fn word_count(&self) -> usize {
        self.words.word_count()
    }

    /// Returns the entropy the phrase encodes, without checksum bits.
    pub fn to_entropy(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.words.to_entropy())
    }

    /// Stretches the phrase and `passphrase` into a 64-byte seed.
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        let password = Zeroizing::new(self.words.to_string().nfkd().collect::<String>());
        let salt = Zeroizing::new(
            format!("mnemonic{}", passphrase)
                .nfkd()
                .collect::<String>(),
        );

        let mut seed = [0u8; 64];
        pbkdf2::pbkdf2::<HmacSha512>(
            password.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
            &mut seed,
        );

        Seed(seed)
    }

    /// Recovers the account key at `m/44'/314159'/0'`.
    pub fn to_private_key(&self, passphrase: &str) -> Result<PrivateKey, KeyError> {
        self.to_private_key_at(passphrase, &PI_ACCOUNT_PATH)
    }

    pub fn to_private_key_at(
        &self,
        passphrase: &str,
        path: &DerivationPath,
    ) -> Result<PrivateKey, KeyError> {
        let seed = self.to_seed(passphrase);
        let derived = derive::derive_path(seed.as_bytes(), path)?;

        Ok(PrivateKey::from_seed(derived.key()))
    }
}

/// Checks that `phrase` is a well-formed mnemonic with a matching checksum.
pub fn validate(phrase: &str) -> Result<(), MnemonicError> {
    Mnemonic::from_str(phrase).map(|_| ())
}

/// NFKD, lowercase, single spaces between words.
fn normalize(phrase: &str) -> String {
    phrase
        .nfkd()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

impl FromStr for Mnemonic {
    type Err = MnemonicError;

    fn from_str(phrase: &str) -> Result<Self, MnemonicError> {
        let normalized = Zeroizing::new(normalize(phrase));

        let words = Bip39Mnemonic::parse_in_normalized(Language::English, &normalized).map_err(
            |error| match error {
                bip39::Error::BadWordCount(count) => BadMnemonicError::BadLength(count),
                bip39::Error::UnknownWord(index) => BadMnemonicError::UnknownWord {
                    index,
                    word: normalized
                        .split(' ')
                        .nth(index)
                        .unwrap_or_default()
                        .to_string(),
                },
                _ => BadMnemonicError::ChecksumMismatch,
            },
        )?;

        Ok(Mnemonic { words })
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .finish()
    }
}

impl Display for Mnemonic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.words)
    }
}
