#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use bigsss::{CreationParameters, SecretSharer};
use num_bigint::BigUint;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub threshold: u8,
    pub n_shares: u8,
    pub prime: u64,
    pub secret: BigUint,
    pub seed: [u8; 32],
}

fuzz_target!(|params: Parameters| {
    let Ok(creation) = CreationParameters::builder()
        .required_share_count(params.threshold as usize)
        .total_share_count(params.n_shares as usize)
        .prime(params.prime)
        .build()
    else {
        return;
    };

    let mut sharer = SecretSharer::new(ChaCha8Rng::from_seed(params.seed));
    if let Ok(shares) = sharer.create_shares(&params.secret, &creation) {
        assert_eq!(shares.len(), creation.total_share_count());
    }
});
