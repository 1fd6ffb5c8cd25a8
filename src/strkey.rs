use crate::strkey_error::StrKeyError;
use data_encoding::BASE32_NOPAD;
use std::convert::TryFrom;

/// Generator polynomial of the CRC16-XMODEM checksum appended to every strkey.
pub const CRC16_XMODEM_POLY: u16 = 0x1021;

/// Length of an ed25519 key payload.
pub const PAYLOAD_LENGTH: usize = 32;

/// Raw length of a decoded key strkey: version byte, payload and checksum.
pub const DECODED_LENGTH: usize = 1 + PAYLOAD_LENGTH + CHECKSUM_LENGTH;

/// Length of the textual form of a key strkey.
pub const ENCODED_LENGTH: usize = 56;

const CHECKSUM_LENGTH: usize = 2;

/// The registered strkey version bytes.
///
/// The top five bits of the version byte become the first base32 character
/// of the encoded string, which is why public keys start with `G`, secret
/// seeds with `S` and muxed accounts with `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VersionByte {
    Ed25519PublicKey = 6 << 3,
    Ed25519SecretSeed = 18 << 3,
    MuxedAccount = 12 << 3,
}

impl VersionByte {
    /// The leading character of every string encoded with this version.
    pub fn prefix(self) -> char {
        match self {
            VersionByte::Ed25519PublicKey => 'G',
            VersionByte::Ed25519SecretSeed => 'S',
            VersionByte::MuxedAccount => 'M',
        }
    }

    /// Number of payload bytes carried between the version byte and the checksum.
    pub fn payload_length(self) -> usize {
        match self {
            VersionByte::MuxedAccount => PAYLOAD_LENGTH + 8,
            _ => PAYLOAD_LENGTH,
        }
    }
}

impl From<VersionByte> for u8 {
    fn from(version: VersionByte) -> u8 {
        version as u8
    }
}

impl TryFrom<u8> for VersionByte {
    type Error = StrKeyError;

    fn try_from(byte: u8) -> Result<Self, StrKeyError> {
        match byte {
            b if b == VersionByte::Ed25519PublicKey as u8 => Ok(VersionByte::Ed25519PublicKey),
            b if b == VersionByte::Ed25519SecretSeed as u8 => Ok(VersionByte::Ed25519SecretSeed),
            b if b == VersionByte::MuxedAccount as u8 => Ok(VersionByte::MuxedAccount),
            b => Err(StrKeyError::InvalidVersionByte(b)),
        }
    }
}

/// CRC16-XMODEM: polynomial 0x1021, zero initial value, no reflection, no final XOR.
pub fn crc16_xmodem(data: &[u8]) -> u16 {
    data.iter().fold(0u16, |crc, &byte| {
        (0..8).fold(crc ^ (u16::from(byte) << 8), |crc, _| {
            if crc & 0x8000 != 0 {
                (crc << 1) ^ CRC16_XMODEM_POLY
            } else {
                crc << 1
            }
        })
    })
}

/// Returns the strkey text for a 32-byte key payload.
///
/// # Arguments
///
/// `version` - role of the payload; selects the leading character.
///
/// `payload` - raw key bytes.
///
pub fn encode(version: VersionByte, payload: &[u8; PAYLOAD_LENGTH]) -> String {
    encode_raw(version, payload)
}

pub(crate) fn encode_raw(version: VersionByte, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LENGTH);
    data.push(u8::from(version));
    data.extend_from_slice(payload);

    // little-endian, unlike the checksum arithmetic itself
    let checksum = crc16_xmodem(&data);
    data.extend_from_slice(&checksum.to_le_bytes());

    BASE32_NOPAD.encode(&data)
}

/// Decodes a key strkey into its version byte and 32-byte payload.
pub fn decode(text: &str) -> Result<(VersionByte, [u8; PAYLOAD_LENGTH]), StrKeyError> {
    let (version, body) = decode_raw(text, DECODED_LENGTH)?;

    let mut payload = [0u8; PAYLOAD_LENGTH];
    payload.copy_from_slice(&body);

    Ok((version, payload))
}

/// Decodes a key strkey, requiring it to carry the `expected` version byte.
pub fn decode_check(
    expected: VersionByte,
    text: &str,
) -> Result<[u8; PAYLOAD_LENGTH], StrKeyError> {
    let (actual, payload) = decode(text)?;

    if actual != expected {
        return Err(StrKeyError::UnexpectedVersion { expected, actual });
    }

    Ok(payload)
}

/// Decodes `text`, expecting exactly `expected_length` raw bytes, and returns
/// the version together with the payload between version byte and checksum.
///
/// Text of the wrong length fails with `InvalidLength` before any character
/// is looked at, so only right-sized text can fail with `InvalidEncoding`.
pub(crate) fn decode_raw(
    text: &str,
    expected_length: usize,
) -> Result<(VersionByte, Vec<u8>), StrKeyError> {
    if text.len() != BASE32_NOPAD.encode_len(expected_length) {
        return Err(StrKeyError::InvalidLength(text.len()));
    }

    let data = BASE32_NOPAD.decode(text.as_bytes())?;

    let (body, checksum) = data.split_at(data.len() - CHECKSUM_LENGTH);
    let expected = crc16_xmodem(body);
    let actual = u16::from_le_bytes([checksum[0], checksum[1]]);

    if expected != actual {
        return Err(StrKeyError::ChecksumMismatch { expected, actual });
    }

    let version = VersionByte::try_from(body[0])?;

    if 1 + version.payload_length() + CHECKSUM_LENGTH != expected_length {
        return Err(StrKeyError::InvalidLength(text.len()));
    }

    Ok((version, body[1..].to_vec()))
}

pub fn is_valid_ed25519_public_key(text: &str) -> bool {
    decode_check(VersionByte::Ed25519PublicKey, text).is_ok()
}

pub fn is_valid_ed25519_secret_seed(text: &str) -> bool {
    decode_check(VersionByte::Ed25519SecretSeed, text).is_ok()
}
