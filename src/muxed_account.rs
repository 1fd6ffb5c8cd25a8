//! Multiplexed (`M...`) account addresses.
//!
//! A muxed address is an account public key paired with a 64-bit id, letting
//! one account hand out many distinguishable payment addresses. Ids are often
//! short alphanumeric labels packed big-endian into the u64.

use crate::key_error::KeyError;
use crate::public_key::PublicKey;
use crate::strkey::{self, VersionByte, PAYLOAD_LENGTH};
use crate::strkey_error::StrKeyError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const ID_LENGTH: usize = 8;

/// Raw length of a decoded muxed strkey.
const DECODED_LENGTH: usize = 1 + PAYLOAD_LENGTH + ID_LENGTH + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MuxedAccount {
    public_key: PublicKey,
    id: u64,
}

impl MuxedAccount {
    pub fn new(public_key: PublicKey, id: u64) -> MuxedAccount {
        MuxedAccount { public_key, id }
    }

    /// Packs an alphanumeric label of at most 8 UTF-8 bytes into the id.
    ///
    /// The label bytes fill the id from its most significant byte; unused
    /// low bytes stay zero.
    pub fn from_text_id(public_key: PublicKey, text: &str) -> Result<MuxedAccount, KeyError> {
        if text.is_empty() || !text.chars().all(char::is_alphanumeric) {
            return Err(KeyError::InvalidMuxedId(text.to_string()));
        }

        let bytes = text.as_bytes();
        if bytes.len() > ID_LENGTH {
            return Err(KeyError::MuxedIdTooLong(bytes.len()));
        }

        let mut id = [0u8; ID_LENGTH];
        id[..bytes.len()].copy_from_slice(bytes);

        Ok(MuxedAccount::new(public_key, u64::from_be_bytes(id)))
    }

    /// The base account.
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Recovers a label packed by `from_text_id`.
    ///
    /// Returns `None` when the id holds no bytes or they are not UTF-8.
    pub fn text_id(&self) -> Option<String> {
        let bytes = self.id.to_be_bytes();
        let end = bytes.iter().rposition(|&byte| byte != 0)? + 1;

        String::from_utf8(bytes[..end].to_vec()).ok()
    }
}

impl Display for MuxedAccount {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut payload = Vec::with_capacity(PAYLOAD_LENGTH + ID_LENGTH);
        payload.extend_from_slice(self.public_key.as_bytes());
        payload.extend_from_slice(&self.id.to_be_bytes());

        f.write_str(&strkey::encode_raw(VersionByte::MuxedAccount, &payload))
    }
}

impl FromStr for MuxedAccount {
    type Err = KeyError;

    fn from_str(text: &str) -> Result<Self, KeyError> {
        let (version, payload) = strkey::decode_raw(text, DECODED_LENGTH)?;

        if version != VersionByte::MuxedAccount {
            return Err(StrKeyError::UnexpectedVersion {
                expected: VersionByte::MuxedAccount,
                actual: version,
            }
            .into());
        }

        let (key, id) = payload.split_at(PAYLOAD_LENGTH);
        let mut id_bytes = [0u8; ID_LENGTH];
        id_bytes.copy_from_slice(id);

        Ok(MuxedAccount::new(
            PublicKey::from_bytes(key)?,
            u64::from_be_bytes(id_bytes),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUXED_STR: &str = "MDFNWH6ZFJVHJDLBMNOUT35X4EEKQVJAO3ZDL4NL7VQJLC4PJOQFWYTVOJXHA2IAABRQ4";
    const BASE_STR: &str = "GDFNWH6ZFJVHJDLBMNOUT35X4EEKQVJAO3ZDL4NL7VQJLC4PJOQFWJ75";
    const RFC_PUBLIC_KEY_STR: &str = "GDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRVHUR";

    #[test]
    fn test_demux() -> Result<(), KeyError> {
        let muxed = MuxedAccount::from_str(MUXED_STR)?;

        assert_eq!(muxed.public_key().to_string(), BASE_STR);
        assert_eq!(muxed.id(), 7094702606649982976);
        assert_eq!(muxed.text_id().as_deref(), Some("burnpi"));
        assert_eq!(muxed.to_string(), MUXED_STR);

        Ok(())
    }

    #[test]
    fn test_mux_text_id() -> Result<(), KeyError> {
        let public_key = PublicKey::from_str(BASE_STR)?;
        let muxed = MuxedAccount::from_text_id(public_key, "burnpi")?;

        assert_eq!(muxed.to_string(), MUXED_STR);
        assert!(muxed.to_string().starts_with(VersionByte::MuxedAccount.prefix()));

        let public_key = PublicKey::from_str(RFC_PUBLIC_KEY_STR)?;
        let muxed = MuxedAccount::from_text_id(public_key, "pi123")?;
        assert_eq!(muxed.id(), 8100059496476311552);
        assert_eq!(
            muxed.to_string(),
            "MDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRU4DJGEZDGAAAACCVM"
        );

        Ok(())
    }

    #[test]
    fn test_numeric_id() -> Result<(), KeyError> {
        let public_key = PublicKey::from_str(RFC_PUBLIC_KEY_STR)?;
        let muxed = public_key.to_muxed(0);

        assert_eq!(
            muxed.to_string(),
            "MDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRUAAAAAAAAAAAAAV6W"
        );
        assert_eq!(muxed.text_id(), None);

        for id in [1, 42, u64::MAX].iter() {
            let muxed = public_key.to_muxed(*id);
            assert_eq!(MuxedAccount::from_str(&muxed.to_string())?, muxed);
        }

        Ok(())
    }

    #[test]
    fn test_text_id_validation() -> Result<(), KeyError> {
        let public_key = PublicKey::from_str(RFC_PUBLIC_KEY_STR)?;

        match MuxedAccount::from_text_id(public_key, "toolongid") {
            Err(KeyError::MuxedIdTooLong(9)) => {}
            other => panic!("{:?}", other),
        }
        for text in ["", "pi-123", "pi 12"].iter() {
            match MuxedAccount::from_text_id(public_key, text) {
                Err(KeyError::InvalidMuxedId(_)) => {}
                other => panic!("{:?} accepted: {:?}", text, other),
            }
        }

        Ok(())
    }

    #[test]
    fn test_non_utf8_id() -> Result<(), KeyError> {
        let public_key = PublicKey::from_str(RFC_PUBLIC_KEY_STR)?;

        assert_eq!(public_key.to_muxed(0xff00_0000_0000_0000).text_id(), None);

        Ok(())
    }

    #[test]
    fn test_rejects_plain_accounts_and_tampering() {
        match MuxedAccount::from_str(BASE_STR) {
            Err(KeyError::StrKey(StrKeyError::InvalidLength(56))) => {}
            other => panic!("{:?}", other),
        }
        match MuxedAccount::from_str(&MUXED_STR[..68]) {
            Err(KeyError::StrKey(StrKeyError::InvalidLength(68))) => {}
            other => panic!("{:?}", other),
        }

        let mut tampered: Vec<char> = MUXED_STR.chars().collect();
        tampered[10] = if tampered[10] == 'A' { 'B' } else { 'A' };
        let tampered: String = tampered.into_iter().collect();
        match MuxedAccount::from_str(&tampered) {
            Err(KeyError::StrKey(StrKeyError::ChecksumMismatch { .. })) => {}
            other => panic!("{:?}", other),
        }
    }
}
