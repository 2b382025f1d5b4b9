//! [Shamir's Secret Sharing](https://en.wikipedia.org/wiki/Shamir%27s_Secret_Sharing) over
//! arbitrary-precision prime fields.
//!
//! A secret integer `s < p` is split into `n` shares, any `k` of which recover `s` while
//! fewer reveal nothing about it. Shares are points `(i, f(i))` for `i = 1..=n` on a random
//! polynomial `f` of degree `k - 1` over Z/pZ with `f(0) = s`.
//!
//! # Usage
//!
//! ```
//! use bigsss::{CreationParameters, SecretSharer};
//! use num_bigint::BigUint;
//! use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};
//!
//! let prime = BigUint::parse_bytes(b"1298074214633706835075030044421213", 10).unwrap();
//! let secret = BigUint::parse_bytes(b"1298074214633706835075030044377087", 10).unwrap();
//!
//! // Require 3 out of 5 shares
//! let creation = CreationParameters::builder()
//!     .required_share_count(3)
//!     .total_share_count(5)
//!     .prime(prime)
//!     .build()
//!     .unwrap();
//!
//! // The randomness source is always supplied by the caller
//! let mut sharer = SecretSharer::new(ChaCha20Rng::from_entropy());
//! let shares = sharer.create_shares(&secret, &creation).unwrap();
//! assert_eq!(shares.len(), 5);
//!
//! // Recover the original secret from any 3 of them!
//! let subset = [Some(shares[4].clone()), Some(shares[0].clone()), Some(shares[2].clone())];
//! let recovered = sharer
//!     .recover_secret(&subset, &creation.recovery_parameters())
//!     .unwrap();
//! assert_eq!(recovered, secret);
//! ```
//!
//! # Caller obligations
//!
//! - The prime is assumed to be prime. Primality is never verified.
//! - [`RecoveryParameters`] must carry the same threshold and prime as the
//!   [`CreationParameters`] the shares were made with. A mismatch goes undetected and
//!   produces a wrong secret.
//! - Shares carry no integrity protection, serialization or scheme fingerprint.
//!
//! # Errors
//!
//! Every [`Error`] belongs to one of two [`ErrorKind`]s: `InvalidArgument` for missing or
//! malformed inputs (an unset builder field, an empty share slot), and `IllegalState` for
//! inputs that are present but unusable (a secret not below the prime, duplicate share
//! indices, too few shares).
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod field;
mod math;
mod params;
mod share;

use alloc::vec::Vec;
use hashbrown::HashSet;
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

pub use error::{Error, ErrorKind, Result};
pub use params::{
    CreationParameters, CreationParametersBuilder, RecoveryParameters, RecoveryParametersBuilder,
};
pub use share::Share;

/// Creates shares and recovers secrets, drawing polynomial coefficients from an injected
/// cryptographically secure random number generator.
///
/// The sharer keeps no state between calls besides its generator. Recovery only needs `&self`,
/// so a single sharer can recover concurrently from several threads when `R: Sync`.
///
/// Usage example:
/// ```
/// # use bigsss::{CreationParameters, SecretSharer, Share};
/// # use num_bigint::BigUint;
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// let params = CreationParameters::builder()
///     .required_share_count(2)
///     .total_share_count(2)
///     .prime(7u32)
///     .build()
///     .unwrap();
/// let mut sharer = SecretSharer::new(ChaCha8Rng::from_seed([0x90; 32]));
/// let shares = sharer.create_shares(&BigUint::from(5u32), &params).unwrap();
/// assert_eq!(shares.iter().map(Share::index).collect::<Vec<_>>(), vec![1, 2]);
///
/// let shares: Vec<Option<Share>> = shares.into_iter().map(Some).collect();
/// let secret = sharer.recover_secret(&shares, &params.recovery_parameters()).unwrap();
/// assert_eq!(secret, BigUint::from(5u32));
/// ```
pub struct SecretSharer<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> SecretSharer<R> {
    pub fn new(rng: R) -> Self {
        SecretSharer { rng }
    }

    /// Gives back the random number generator.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Splits `secret` into `n` shares with indices `1..=n`, returned in index order.
    ///
    /// The secret must be strictly less than the prime. Larger secrets are rejected with
    /// [`Error::SecretOutOfRange`], never reduced.
    ///
    /// Example:
    /// ```
    /// # use bigsss::{CreationParameters, ErrorKind, SecretSharer};
    /// # use num_bigint::BigUint;
    /// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
    /// # let mut sharer = SecretSharer::new(ChaCha8Rng::from_seed([0x90; 32]));
    /// let params = CreationParameters::builder()
    ///     .required_share_count(2)
    ///     .total_share_count(3)
    ///     .prime(5u32)
    ///     .build()
    ///     .unwrap();
    /// let err = sharer.create_shares(&BigUint::from(5u32), &params).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::IllegalState);
    /// ```
    pub fn create_shares(
        &mut self,
        secret: &BigUint,
        params: &CreationParameters,
    ) -> Result<Vec<Share>> {
        let prime = params.prime();
        if secret >= prime {
            return Err(Error::SecretOutOfRange);
        }

        let k = params.required_share_count();
        let n = params.total_share_count();
        debug!("creating {} shares with threshold {}", n, k);

        // The polynomial goes out of scope as soon as the shares are evaluated.
        let poly = math::random_polynomial(secret, k, prime, &mut self.rng);
        let shares: Vec<Share> = math::get_evaluator(poly, prime.clone()).take(n).collect();

        Ok(shares)
    }

    /// Given an iterable collection of shares, recovers the original secret by interpolating
    /// the share polynomial at zero.
    ///
    /// Every slot must hold `Some(share)`: an empty slot is reported as
    /// [`Error::MissingShare`]. Duplicate indices are rejected with
    /// [`Error::DuplicateShareIndex`] and never deduplicated. Fewer distinct shares than the
    /// threshold give [`Error::NotEnoughShares`]. Index differences with no inverse modulo the
    /// prime, which only happens when the prime is composite, give
    /// [`Error::NonInvertibleIndices`].
    ///
    /// Example:
    /// ```
    /// # use bigsss::{CreationParameters, Error, SecretSharer, Share};
    /// # use num_bigint::BigUint;
    /// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
    /// # let mut sharer = SecretSharer::new(ChaCha8Rng::from_seed([0x90; 32]));
    /// # let params = CreationParameters::builder()
    /// #     .required_share_count(3)
    /// #     .total_share_count(4)
    /// #     .prime(257u32)
    /// #     .build()
    /// #     .unwrap();
    /// # let recovery = params.recovery_parameters();
    /// let mut shares: Vec<Option<Share>> = sharer
    ///     .create_shares(&BigUint::from(200u32), &params)
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(Some)
    ///     .collect();
    /// // Secret correctly recovered
    /// assert_eq!(sharer.recover_secret(&shares, &recovery), Ok(BigUint::from(200u32)));
    /// // Drop shares for demonstration purposes
    /// shares.truncate(2);
    /// assert_eq!(
    ///     sharer.recover_secret(&shares, &recovery),
    ///     Err(Error::NotEnoughShares { required: 3, provided: 2 })
    /// );
    /// ```
    pub fn recover_secret<'a, T>(&self, shares: T, params: &RecoveryParameters) -> Result<BigUint>
    where
        T: IntoIterator<Item = &'a Option<Share>>,
    {
        let values = collect_shares(shares, params)?;
        debug!("recovering secret from {} shares", values.len());

        math::interpolate(&values, &BigUint::zero(), params.prime())
            .ok_or(Error::NonInvertibleIndices)
    }

    /// Given an iterable collection of shares, regenerates the share at `index`, e.g. to
    /// replace one that was lost. The regenerated share lies on the same polynomial as the
    /// inputs, so this does not refresh the sharing.
    ///
    /// Index `0` is rejected with [`Error::InvalidShareIndex`] because its value is the secret.
    ///
    /// Example:
    /// ```
    /// # use bigsss::{CreationParameters, SecretSharer, Share};
    /// # use num_bigint::BigUint;
    /// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
    /// # let mut sharer = SecretSharer::new(ChaCha8Rng::from_seed([0x90; 32]));
    /// # let params = CreationParameters::builder()
    /// #     .required_share_count(2)
    /// #     .total_share_count(3)
    /// #     .prime(257u32)
    /// #     .build()
    /// #     .unwrap();
    /// let shares = sharer.create_shares(&BigUint::from(42u32), &params).unwrap();
    /// // Share 2 got lost; rebuild it from shares 1 and 3
    /// let known = [Some(shares[0].clone()), Some(shares[2].clone())];
    /// let rebuilt = sharer
    ///     .recover_share(&known, 2, &params.recovery_parameters())
    ///     .unwrap();
    /// assert_eq!(rebuilt, shares[1]);
    /// ```
    pub fn recover_share<'a, T>(
        &self,
        shares: T,
        index: u32,
        params: &RecoveryParameters,
    ) -> Result<Share>
    where
        T: IntoIterator<Item = &'a Option<Share>>,
    {
        if index == 0 {
            return Err(Error::InvalidShareIndex { index });
        }

        let values = collect_shares(shares, params)?;
        debug!("regenerating share {} from {} shares", index, values.len());

        let value = math::interpolate(&values, &BigUint::from(index), params.prime())
            .ok_or(Error::NonInvertibleIndices)?;
        Ok(Share::new(index, value))
    }
}

// Gathers the shares for interpolation. Empty slots are checked before anything else is
// inspected, then indices are checked for zero, duplicates and the threshold.
fn collect_shares<'a, T>(shares: T, params: &RecoveryParameters) -> Result<Vec<Share>>
where
    T: IntoIterator<Item = &'a Option<Share>>,
{
    let values = shares
        .into_iter()
        .enumerate()
        .map(|(position, share)| share.clone().ok_or(Error::MissingShare { position }))
        .collect::<Result<Vec<Share>>>()?;

    let prime = params.prime();
    let mut keys: HashSet<BigUint> = HashSet::with_capacity(values.len());

    for share in &values {
        trace!("checking share {}", share.index);
        let point = BigUint::from(share.index) % prime;
        if point.is_zero() {
            return Err(Error::InvalidShareIndex { index: share.index });
        }
        if !keys.insert(point) {
            return Err(Error::DuplicateShareIndex { index: share.index });
        }
    }

    let required = params.required_share_count();
    if values.len() < required {
        return Err(Error::NotEnoughShares {
            required,
            provided: values.len(),
        });
    }

    Ok(values)
}
