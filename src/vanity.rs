//! Search for wallets whose address ends in a chosen suffix.
//!
//! Every attempt runs the full mnemonic pipeline, so each extra suffix
//! character multiplies the expected work by 32. Searches are bounded and
//! single-threaded; run several with independent generators to use more cores.

use crate::account::AccountKeys;
use crate::derive::PI_ACCOUNT_PATH;
use crate::key_error::KeyError;
use crate::mnemonic::Mnemonic;
use rand_core::{CryptoRng, RngCore};
use std::fmt;

const BASE32_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Entropy of the mnemonics tried during a search.
const SEARCH_ENTROPY_BITS: usize = 256;

pub struct VanityMatch {
    pub mnemonic: Mnemonic,
    pub keys: AccountKeys,
    /// Number of mnemonics tried, including the match.
    pub attempts: u64,
}

impl fmt::Debug for VanityMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VanityMatch")
            .field("public_key", &self.keys.public_key)
            .field("attempts", &self.attempts)
            .finish()
    }
}

/// Returns the suffix uppercased, or `InvalidSuffix` when it is empty or holds
/// characters an address can never contain.
pub fn normalize_suffix(suffix: &str) -> Result<String, KeyError> {
    let normalized = suffix.trim().to_uppercase();

    if normalized.is_empty() || !normalized.chars().all(|c| BASE32_ALPHABET.contains(c)) {
        return Err(KeyError::InvalidSuffix(suffix.to_string()));
    }

    Ok(normalized)
}

/// Generates 24-word mnemonics from `rng` until the account derived at
/// `m/44'/314159'/0'` has an address ending in `suffix`.
///
/// # Arguments
///
/// `rng` - cryptographically secure source for the candidate mnemonics.
///
/// `suffix` - base32 characters, case-insensitive.
///
/// `max_attempts` - upper bound on candidates; `Ok(None)` once exhausted.
///
pub fn search_suffix<R>(
    rng: &mut R,
    suffix: &str,
    max_attempts: u64,
) -> Result<Option<VanityMatch>, KeyError>
where
    R: RngCore + CryptoRng,
{
    let suffix = normalize_suffix(suffix)?;

    for attempt in 1..=max_attempts {
        let mnemonic = Mnemonic::generate_with(rng, SEARCH_ENTROPY_BITS)?;
        let private_key = mnemonic.to_private_key("")?;
        let keys = AccountKeys::from_private_key(&PI_ACCOUNT_PATH, &private_key);

        if keys.public_key.ends_with(&suffix) {
            return Ok(Some(VanityMatch {
                mnemonic,
                keys,
                attempts: attempt,
            }));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::derive_account;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_normalize_suffix() -> Result<(), KeyError> {
        assert_eq!(normalize_suffix("pi")?, "PI");
        assert_eq!(normalize_suffix(" Xyz7 ")?, "XYZ7");

        for suffix in ["", "  ", "P1", "Pi0", "PI-", "π"].iter() {
            match normalize_suffix(suffix) {
                Err(KeyError::InvalidSuffix(_)) => {}
                other => panic!("{:?} accepted: {:?}", suffix, other),
            }
        }

        Ok(())
    }

    #[test]
    fn test_search_single_character() -> Result<(), KeyError> {
        let mut rng = StdRng::seed_from_u64(314159);

        let found = search_suffix(&mut rng, "p", 2000)?
            .expect("one in 32 addresses matches");

        assert!(found.keys.public_key.ends_with('P'));
        assert!(found.attempts >= 1);
        assert_eq!(found.mnemonic.word_count(), 24);
        assert_eq!(derive_account(&found.mnemonic.to_string(), "")?, found.keys);

        let debug = format!("{:?}", found);
        assert!(debug.contains(&found.keys.public_key));
        assert!(!debug.contains(&found.keys.secret_seed));
        assert!(!debug.contains(&found.mnemonic.to_string()));

        Ok(())
    }

    #[test]
    fn test_search_is_bounded() -> Result<(), KeyError> {
        let mut rng = StdRng::seed_from_u64(1);

        assert!(search_suffix(&mut rng, "A", 0)?.is_none());
        assert!(search_suffix(&mut rng, "PIPIPIPI", 2)?.is_none());

        Ok(())
    }

    #[test]
    fn test_search_rejects_invalid_suffix() {
        let mut rng = StdRng::seed_from_u64(1);

        match search_suffix(&mut rng, "PI0", 10) {
            Err(KeyError::InvalidSuffix(suffix)) => assert_eq!(suffix, "PI0"),
            other => panic!("{:?}", other),
        }
    }
}
