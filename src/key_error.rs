use crate::mnemonic_error::MnemonicError;
use crate::strkey_error::StrKeyError;
use ed25519_dalek::SignatureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("derivation index {0} is not hardened; ed25519 only supports hardened derivation")]
    InvalidDerivationIndex(u32),

    #[error("invalid derivation path: {0:?}")]
    InvalidDerivationPath(String),

    #[error("invalid key length: {0} bytes")]
    Length(usize),

    #[error("public key half does not belong to the secret seed")]
    PublicKeyMismatch,

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    StrKey(#[from] StrKeyError),

    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),

    #[error("muxed account id is {0} bytes long; at most 8 bytes fit")]
    MuxedIdTooLong(usize),

    #[error("muxed account id must be alphanumeric: {0:?}")]
    InvalidMuxedId(String),

    #[error("vanity suffix contains characters outside the base32 alphabet: {0:?}")]
    InvalidSuffix(String),
}
