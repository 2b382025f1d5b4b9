use num_bigint::BigUint;

#[cfg(feature = "fuzzing")]
use arbitrary::Arbitrary;

/// A share used to reconstruct the secret: one point `(index, value)` on the secret polynomial.
///
/// Shares are produced by [`SecretSharer::create_shares`](crate::SecretSharer::create_shares)
/// with indices `1..=n`, but can also be assembled by hand from values received out of band.
/// Index uniqueness is checked when recovering, not here.
///
/// Usage example:
/// ```
/// use bigsss::{CreationParameters, SecretSharer, Share};
/// use num_bigint::BigUint;
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
///
/// let params = CreationParameters::builder()
///     .required_share_count(2)
///     .total_share_count(3)
///     .prime(7u32)
///     .build()
///     .unwrap();
/// let mut sharer = SecretSharer::new(ChaCha8Rng::from_seed([0x90; 32]));
/// let shares = sharer.create_shares(&BigUint::from(5u32), &params).unwrap();
///
/// // Hand out index and value, then rebuild the share later on
/// let (index, value) = (shares[0].index(), shares[0].value().clone());
/// assert_eq!(Share::new(index, value), shares[0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzzing", derive(Arbitrary))]
pub struct Share {
    /// The x coordinate of the share.
    pub(crate) index: u32,
    /// The y coordinate of the share, reduced modulo the prime.
    pub(crate) value: BigUint,
}

impl Share {
    pub fn new(index: u32, value: BigUint) -> Self {
        Share { index, value }
    }

    /// The evaluation point of this share. Never zero for shares created by this crate.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Splits the share into its `(index, value)` parts.
    pub fn into_parts(self) -> (u32, BigUint) {
        (self.index, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::Share;
    use num_bigint::BigUint;

    #[test]
    fn share_accessors_work() {
        let share = Share::new(3, BigUint::from(42u32));
        assert_eq!(share.index(), 3);
        assert_eq!(share.value(), &BigUint::from(42u32));
        assert_eq!(share.into_parts(), (3, BigUint::from(42u32)));
    }

    #[test]
    fn shares_compare_by_index_and_value() {
        let a = Share::new(1, BigUint::from(2u32));
        assert_eq!(a, Share::new(1, BigUint::from(2u32)));
        assert_ne!(a, Share::new(1, BigUint::from(3u32)));
        assert_ne!(a, Share::new(2, BigUint::from(2u32)));
    }
}
