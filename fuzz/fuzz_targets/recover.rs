#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use bigsss::{RecoveryParameters, SecretSharer, Share};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub threshold: u8,
    pub prime: u64,
    pub shares: Vec<Option<Share>>,
}

fuzz_target!(|params: Parameters| {
    let Ok(recovery) = RecoveryParameters::builder()
        .required_share_count(params.threshold as usize)
        .prime(params.prime)
        .build()
    else {
        return;
    };

    let sharer = SecretSharer::new(ChaCha8Rng::from_seed([0; 32]));
    let _secret = sharer.recover_secret(&params.shares, &recovery);
});
