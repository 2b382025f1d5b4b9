use num_bigint::BigUint;

use crate::error::{Error, Result};

/// Parameters for splitting a secret: threshold `k`, share count `n` and prime modulus `p`.
///
/// `p` is assumed to be prime; this is never checked. It must exceed both the secret and `n`.
///
/// Usage example:
/// ```
/// use bigsss::CreationParameters;
///
/// let params = CreationParameters::builder()
///     .required_share_count(3)
///     .total_share_count(5)
///     .prime(257u32)
///     .build()
///     .unwrap();
/// assert_eq!(params.required_share_count(), 3);
///
/// // Missing fields are rejected
/// assert!(CreationParameters::builder().required_share_count(3).build().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreationParameters {
    required_share_count: usize,
    total_share_count: usize,
    prime: BigUint,
}

/// Parameters for recovering a secret: threshold `k` and prime modulus `p`.
///
/// Both must match the [`CreationParameters`] the shares were made with. A mismatch is
/// not detected and yields a wrong secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveryParameters {
    required_share_count: usize,
    prime: BigUint,
}

#[derive(Clone, Debug, Default)]
pub struct CreationParametersBuilder {
    required_share_count: Option<usize>,
    total_share_count: Option<usize>,
    prime: Option<BigUint>,
}

#[derive(Clone, Debug, Default)]
pub struct RecoveryParametersBuilder {
    required_share_count: Option<usize>,
    prime: Option<BigUint>,
}

fn check_threshold(required_share_count: usize) -> Result<()> {
    if required_share_count == 0 {
        return Err(Error::InvalidParameter(
            "required share count must be at least 1",
        ));
    }
    Ok(())
}

fn check_prime(prime: &BigUint) -> Result<()> {
    if *prime < BigUint::from(2u32) {
        return Err(Error::InvalidParameter("prime must be at least 2"));
    }
    Ok(())
}

impl CreationParameters {
    pub fn builder() -> CreationParametersBuilder {
        CreationParametersBuilder::default()
    }

    pub fn required_share_count(&self) -> usize {
        self.required_share_count
    }

    pub fn total_share_count(&self) -> usize {
        self.total_share_count
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// The recovery parameters matching these creation parameters.
    pub fn recovery_parameters(&self) -> RecoveryParameters {
        RecoveryParameters {
            required_share_count: self.required_share_count,
            prime: self.prime.clone(),
        }
    }
}

impl CreationParametersBuilder {
    pub fn required_share_count(mut self, k: usize) -> Self {
        self.required_share_count = Some(k);
        self
    }

    pub fn total_share_count(mut self, n: usize) -> Self {
        self.total_share_count = Some(n);
        self
    }

    pub fn prime(mut self, prime: impl Into<BigUint>) -> Self {
        self.prime = Some(prime.into());
        self
    }

    pub fn build(self) -> Result<CreationParameters> {
        let required_share_count = self
            .required_share_count
            .ok_or(Error::MissingParameter("required_share_count"))?;
        let total_share_count = self
            .total_share_count
            .ok_or(Error::MissingParameter("total_share_count"))?;
        let prime = self.prime.ok_or(Error::MissingParameter("prime"))?;

        check_threshold(required_share_count)?;
        check_prime(&prime)?;
        if total_share_count < required_share_count {
            return Err(Error::InvalidParameter(
                "total share count must be at least the required share count",
            ));
        }
        if u32::try_from(total_share_count).is_err() {
            return Err(Error::InvalidParameter("total share count must fit in a u32"));
        }
        // Indices 1..=n must be distinct non-zero field elements.
        if prime <= BigUint::from(total_share_count) {
            return Err(Error::InvalidParameter(
                "prime must be greater than the total share count",
            ));
        }

        Ok(CreationParameters {
            required_share_count,
            total_share_count,
            prime,
        })
    }
}

impl RecoveryParameters {
    pub fn builder() -> RecoveryParametersBuilder {
        RecoveryParametersBuilder::default()
    }

    pub fn required_share_count(&self) -> usize {
        self.required_share_count
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }
}

impl RecoveryParametersBuilder {
    pub fn required_share_count(mut self, k: usize) -> Self {
        self.required_share_count = Some(k);
        self
    }

    pub fn prime(mut self, prime: impl Into<BigUint>) -> Self {
        self.prime = Some(prime.into());
        self
    }

    pub fn build(self) -> Result<RecoveryParameters> {
        let required_share_count = self
            .required_share_count
            .ok_or(Error::MissingParameter("required_share_count"))?;
        let prime = self.prime.ok_or(Error::MissingParameter("prime"))?;

        check_threshold(required_share_count)?;
        check_prime(&prime)?;

        Ok(RecoveryParameters {
            required_share_count,
            prime,
        })
    }
}
