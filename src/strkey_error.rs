use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrKeyError {
    #[error("strkey is not valid unpadded base32: {0}")]
    InvalidEncoding(#[from] data_encoding::DecodeError),

    #[error("invalid strkey length: {0} characters")]
    InvalidLength(usize),

    #[error("strkey checksum mismatch: expected {expected:#06x}, found {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("unknown strkey version byte: {0:#04x}")]
    InvalidVersionByte(u8),

    #[error("unexpected strkey version: expected {expected:?}, found {actual:?}")]
    UnexpectedVersion {
        expected: crate::strkey::VersionByte,
        actual: crate::strkey::VersionByte,
    },
}
