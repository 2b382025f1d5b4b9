// A module which contains necessary algorithms to compute Shamir's shares and recover secrets

use alloc::vec::Vec;

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;

use super::field;
use super::share::Share;

// Finds the value at `x` of the polynomial passing through `shares`, using
// [Lagrange interpolation](https://en.wikipedia.org/wiki/Lagrange_polynomial) over Z/pZ.
// With `x = 0` this is the secret. Returns `None` if two shares sit on the same point modulo `p`.
pub fn interpolate(shares: &[Share], x: &BigUint, p: &BigUint) -> Option<BigUint> {
    let xs: Vec<BigUint> = shares.iter().map(|s| BigUint::from(s.index)).collect();

    shares
        .iter()
        .enumerate()
        .try_fold(BigUint::zero(), |acc, (i, s_i)| {
            let basis = field::lagrange_basis(&xs, i, x, p)?;
            Some((acc + field::mod_mul(&s_i.value, &basis, p)) % p)
        })
}

// Generates `k` polynomial coefficients, being the last one `secret` and the others drawn uniformly from `[0, p)`.
// Coefficient degrees go from higher to lower in the returned vector order.
pub fn random_polynomial<R: rand::Rng + ?Sized>(
    secret: &BigUint,
    k: usize,
    p: &BigUint,
    rng: &mut R,
) -> Vec<BigUint> {
    let mut poly = Vec::with_capacity(k);

    for _ in 1..k {
        poly.push(rng.gen_biguint_below(p));
    }
    poly.push(secret.clone());

    poly
}

// Evaluates `poly` at `x` with Horner's rule, reducing after every step.
pub fn evaluate(poly: &[BigUint], x: &BigUint, p: &BigUint) -> BigUint {
    poly.iter()
        .fold(BigUint::zero(), |acc, c| (acc * x + c) % p)
}

// Returns an iterator over the points of `poly`.
// Each item is a share `(x, f(x))`, starting at `x = 1`; `x = 0` would be the secret itself.
pub fn get_evaluator(poly: Vec<BigUint>, p: BigUint) -> impl Iterator<Item = Share> {
    (1..=u32::MAX).map(move |x| Share {
        index: x,
        value: evaluate(&poly, &BigUint::from(x), &p),
    })
}
