mod account;
mod bad_mnemonic_error;
pub mod derive;
pub mod entropy;
mod key_error;
mod mnemonic;
mod mnemonic_error;
mod muxed_account;
mod private_key;
mod public_key;
pub mod slip10;
pub mod strkey;
mod strkey_error;
pub mod vanity;

pub use account::{derive_account, derive_account_at, AccountKeys};
pub use bad_mnemonic_error::BadMnemonicError;
pub use derive::{DerivationPath, PI_ACCOUNT_PATH, PI_COIN_TYPE};
pub use key_error::KeyError;
pub use mnemonic::{validate as validate_mnemonic, Mnemonic, Seed};
pub use mnemonic_error::MnemonicError;
pub use muxed_account::MuxedAccount;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use strkey::VersionByte;
pub use strkey_error::StrKeyError;
