use crate::key_error::KeyError;
use crate::slip10::{self, ExtendedKey, HARDENED_OFFSET};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// BIP-44 purpose field.
pub const PURPOSE: u32 = 44;

/// SLIP-0044 coin type registered for the Pi Network.
pub const PI_COIN_TYPE: u32 = 314159;

/// `m/44'/314159'/0'`, the only path wallets of this network use.
pub const PI_ACCOUNT_PATH: DerivationPath = DerivationPath {
    indices: [
        PURPOSE | HARDENED_OFFSET,
        PI_COIN_TYPE | HARDENED_OFFSET,
        HARDENED_OFFSET,
    ],
};

/// A fully hardened `purpose'/coin_type'/account'` derivation path.
///
/// Indices are stored with the hardened offset applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: [u32; 3],
}

impl DerivationPath {
    /// Returns the account path `m/44'/<coin_type>'/<account>'`.
    pub fn bip44(coin_type: u32, account: u32) -> Result<DerivationPath, KeyError> {
        DerivationPath::from_indices([
            harden(PURPOSE)?,
            harden(coin_type)?,
            harden(account)?,
        ])
    }

    /// Builds a path from raw indices, each of which must already be hardened.
    pub fn from_indices(indices: [u32; 3]) -> Result<DerivationPath, KeyError> {
        if let Some(index) = indices.iter().find(|&&index| index < HARDENED_OFFSET) {
            return Err(KeyError::InvalidDerivationIndex(*index));
        }

        Ok(DerivationPath { indices })
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn coin_type(&self) -> u32 {
        self.indices[1] - HARDENED_OFFSET
    }

    pub fn account(&self) -> u32 {
        self.indices[2] - HARDENED_OFFSET
    }
}

impl Default for DerivationPath {
    fn default() -> Self {
        PI_ACCOUNT_PATH
    }
}

fn harden(index: u32) -> Result<u32, KeyError> {
    if index >= HARDENED_OFFSET {
        return Err(KeyError::InvalidDerivationIndex(index));
    }

    Ok(index | HARDENED_OFFSET)
}

impl Display for DerivationPath {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{}'", index - HARDENED_OFFSET)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = KeyError;

    /// Parses `m/44'/314159'/0'`; `h` and `H` are accepted as hardened markers too.
    fn from_str(text: &str) -> Result<Self, KeyError> {
        let invalid = || KeyError::InvalidDerivationPath(text.to_string());

        let mut segments = text.trim().split('/');
        if segments.next() != Some("m") {
            return Err(invalid());
        }

        let mut indices = [0u32; 3];
        let mut count = 0;

        for segment in segments {
            if count == indices.len() {
                return Err(invalid());
            }

            let (digits, hardened) =
                match segment.strip_suffix(|c| c == '\'' || c == 'h' || c == 'H') {
                    Some(digits) => (digits, true),
                    None => (segment, false),
                };

            let index: u32 = digits.parse().map_err(|_| invalid())?;
            if index >= HARDENED_OFFSET {
                return Err(invalid());
            }
            if !hardened {
                return Err(KeyError::InvalidDerivationIndex(index));
            }

            indices[count] = index | HARDENED_OFFSET;
            count += 1;
        }

        if count != indices.len() {
            return Err(invalid());
        }

        DerivationPath::from_indices(indices)
    }
}

/// Walks `path` from the master key of `seed` and returns the final extended key.
pub fn derive_path(seed: &[u8], path: &DerivationPath) -> Result<ExtendedKey, KeyError> {
    let mut key = slip10::master_key(seed);

    for &index in path.indices() {
        key = slip10::derive_child_hardened(&key, index)?;
    }

    Ok(key)
}
