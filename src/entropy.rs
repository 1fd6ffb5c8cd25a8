use crate::mnemonic_error::MnemonicError;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Entropy sizes, in bits, that map onto 12, 15, 18, 21 and 24 words.
pub const SUPPORTED_ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Returns the number of checksum bits appended to `entropy_bits` of entropy.
pub fn checksum_bits(entropy_bits: usize) -> usize {
    entropy_bits / 32
}

/// Returns the number of words a mnemonic over `entropy_bits` of entropy has.
pub fn word_count(entropy_bits: usize) -> usize {
    (entropy_bits + checksum_bits(entropy_bits)) / 11
}

pub fn check_length(entropy_bits: usize) -> Result<(), MnemonicError> {
    if SUPPORTED_ENTROPY_BITS.contains(&entropy_bits) {
        Ok(())
    } else {
        Err(MnemonicError::InvalidEntropyLength(entropy_bits))
    }
}

/// Returns `entropy_bits` bits of entropy drawn from `rng`.
///
/// # Arguments
///
/// `rng` - cryptographically secure source.
///
/// `entropy_bits` - one of `SUPPORTED_ENTROPY_BITS`.
///
pub fn random<R>(rng: &mut R, entropy_bits: usize) -> Result<Zeroizing<Vec<u8>>, MnemonicError>
where
    R: RngCore + CryptoRng,
{
    check_length(entropy_bits)?;

    let mut entropy = Zeroizing::new(vec![0u8; entropy_bits / 8]);
    rng.fill_bytes(&mut entropy[..]);

    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_word_count() {
        let counts: Vec<usize> = SUPPORTED_ENTROPY_BITS
            .iter()
            .map(|&bits| word_count(bits))
            .collect();

        assert_eq!(counts, vec![12, 15, 18, 21, 24]);
        assert_eq!(checksum_bits(128), 4);
        assert_eq!(checksum_bits(256), 8);
    }

    #[test]
    fn test_check_length() {
        for bits in SUPPORTED_ENTROPY_BITS.iter() {
            assert_eq!(check_length(*bits), Ok(()));
        }

        for bits in [0, 64, 127, 129, 136, 512].iter() {
            assert_eq!(
                check_length(*bits),
                Err(MnemonicError::InvalidEntropyLength(*bits))
            );
        }
    }

    #[test]
    fn test_random() -> Result<(), MnemonicError> {
        let mut rng = StdRng::seed_from_u64(7);
        let first = random(&mut rng, 128)?;
        let second = random(&mut rng, 256)?;

        assert_eq!(first.len(), 16);
        assert_eq!(second.len(), 32);
        assert_ne!(&first[..], &second[..16]);

        let mut replay = StdRng::seed_from_u64(7);
        assert_eq!(&*random(&mut replay, 128)?, &*first);

        Ok(())
    }

    #[test]
    fn test_random_rejects_unsupported_length() {
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(
            random(&mut rng, 100).map(|_| ()),
            Err(MnemonicError::InvalidEntropyLength(100))
        );
    }
}
