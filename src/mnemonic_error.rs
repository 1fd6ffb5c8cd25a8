use crate::bad_mnemonic_error::BadMnemonicError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("unsupported entropy length {0} bits; expected one of 128, 160, 192, 224 or 256")]
    InvalidEntropyLength(usize),

    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(#[from] BadMnemonicError),
}
