use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use bigsss::{CreationParameters, SecretSharer, Share};
use num_bigint::BigUint;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

const PRIME: &[u8] = b"1298074214633706835075030044421213";
const SECRET: &[u8] = b"1298074214633706835075030044377087";

fn params() -> CreationParameters {
    CreationParameters::builder()
        .required_share_count(10)
        .total_share_count(100)
        .prime(BigUint::parse_bytes(PRIME, 10).unwrap())
        .build()
        .unwrap()
}

fn create(c: &mut Criterion) {
    let params = params();
    let secret = BigUint::parse_bytes(SECRET, 10).unwrap();
    let mut sharer = SecretSharer::new(ChaCha8Rng::from_seed([0x90; 32]));

    c.bench_function("create_shares", |b| {
        b.iter(|| sharer.create_shares(black_box(&secret), black_box(&params)))
    });
}

fn recover(c: &mut Criterion) {
    let params = params();
    let recovery = params.recovery_parameters();
    let secret = BigUint::parse_bytes(SECRET, 10).unwrap();
    let mut sharer = SecretSharer::new(ChaCha8Rng::from_seed([0x90; 32]));
    let shares = sharer
        .create_shares(&secret, &params)
        .unwrap()
        .into_iter()
        .take(10)
        .map(Some)
        .collect::<Vec<Option<Share>>>();

    c.bench_function("recover_secret", |b| {
        b.iter(|| sharer.recover_secret(black_box(&shares), black_box(&recovery)))
    });
    c.bench_function("recover_share", |b| {
        b.iter(|| sharer.recover_share(black_box(&shares), black_box(42), black_box(&recovery)))
    });
}

criterion_group!(benches, create, recover);
criterion_main!(benches);
