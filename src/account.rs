use crate::derive::{DerivationPath, PI_ACCOUNT_PATH};
use crate::key_error::KeyError;
use crate::mnemonic::Mnemonic;
use crate::private_key::PrivateKey;
use crate::public_key::PublicKey;
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use zeroize::Zeroize;

/// The textual keys of an account recovered from a mnemonic.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AccountKeys {
    /// Derivation path the keys were taken from, e.g. `m/44'/314159'/0'`.
    pub path: String,
    /// `G...` address.
    pub public_key: String,
    /// `S...` secret seed.
    pub secret_seed: String,
}

impl AccountKeys {
    pub fn from_private_key(path: &DerivationPath, private_key: &PrivateKey) -> AccountKeys {
        AccountKeys {
            path: path.to_string(),
            public_key: private_key.public_key().to_string(),
            secret_seed: private_key.to_string(),
        }
    }

    /// Parses the secret seed back into a keypair.
    pub fn private_key(&self) -> Result<PrivateKey, KeyError> {
        PrivateKey::from_str(&self.secret_seed)
    }

    pub fn address(&self) -> Result<PublicKey, KeyError> {
        PublicKey::from_str(&self.public_key)
    }
}

impl fmt::Debug for AccountKeys {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountKeys")
            .field("path", &self.path)
            .field("public_key", &self.public_key)
            .finish()
    }
}

impl Drop for AccountKeys {
    fn drop(&mut self) {
        self.secret_seed.zeroize();
    }
}

/// Recovers the account at `m/44'/314159'/0'` from a mnemonic phrase.
///
/// # Arguments
///
/// `phrase` - space separated words from the BIP-39 English list.
///
/// `passphrase` - optional BIP-39 passphrase; wallets of this network leave it empty.
///
pub fn derive_account(phrase: &str, passphrase: &str) -> Result<AccountKeys, KeyError> {
    derive_account_at(phrase, passphrase, &PI_ACCOUNT_PATH)
}

pub fn derive_account_at(
    phrase: &str,
    passphrase: &str,
    path: &DerivationPath,
) -> Result<AccountKeys, KeyError> {
    let mnemonic = Mnemonic::from_str(phrase)?;
    let private_key = mnemonic.to_private_key_at(passphrase, path)?;

    Ok(AccountKeys::from_private_key(path, &private_key))
}
