use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BadMnemonicError {
    #[error("checksum bits in mnemonic did not match the rest of the mnemonic")]
    ChecksumMismatch,

    #[error("unsupported phrase length {0}; only 12, 15, 18, 21 and 24 words are supported")]
    BadLength(usize),

    #[error("word not found in word list: index - {index:?}, word - {word:?}")]
    UnknownWord { index: usize, word: String },
}
