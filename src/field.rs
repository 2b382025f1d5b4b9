// Arithmetic over the prime field Z/pZ. Every helper returns a value reduced into [0, p).

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Returns `(a - b) mod p` without ever going negative.
pub fn mod_sub(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a % p) + p - (b % p)) % p
}

/// Returns `(a * b) mod p`.
pub fn mod_mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// Finds the multiplicative inverse of `a` modulo `p` using the extended Euclidean algorithm.
/// Returns `None` when `a` and `p` are not coprime, which for a prime `p` means `a ≡ 0`.
pub fn mod_inverse(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let modulus = BigInt::from(p.clone());
    let (mut old_r, mut r) = (BigInt::from(a % p), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = core::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }

    let inverse = ((old_s % &modulus) + &modulus) % &modulus;
    Some(inverse.magnitude().clone())
}

/// Evaluates the `i`th Lagrange basis polynomial of the sample points `xs` at `x`:
/// `L_i(x) = prod_{j != i} (x - x_j) / (x_i - x_j) mod p`.
///
/// Returns `None` if two sample points coincide modulo `p`.
pub fn lagrange_basis(xs: &[BigUint], i: usize, x: &BigUint, p: &BigUint) -> Option<BigUint> {
    let mut numerator = BigUint::one();
    let mut denominator = BigUint::one();

    for (j, x_j) in xs.iter().enumerate() {
        if i == j {
            continue;
        }
        numerator = mod_mul(&numerator, &mod_sub(x, x_j, p), p);
        denominator = mod_mul(&denominator, &mod_sub(&xs[i], x_j, p), p);
    }

    mod_inverse(&denominator, p).map(|inv| mod_mul(&numerator, &inv, p))
}

#[cfg(test)]
mod tests {
    use super::{lagrange_basis, mod_inverse, mod_sub};
    use alloc::vec;
    use num_bigint::BigUint;
    use rstest::rstest;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[rstest]
    #[case(10, 3, 17, 7)]
    #[case(3, 10, 17, 10)]
    #[case(0, 1, 7, 6)]
    #[case(20, 3, 17, 0)]
    fn mod_sub_works(#[case] a: u64, #[case] b: u64, #[case] p: u64, #[case] expected: u64) {
        assert_eq!(mod_sub(&big(a), &big(b), &big(p)), big(expected));
    }

    #[rstest]
    #[case(3, 7, 5)]
    #[case(1, 7, 1)]
    #[case(6, 7, 6)]
    #[case(2, 17, 9)]
    fn mod_inverse_works(#[case] a: u64, #[case] p: u64, #[case] expected: u64) {
        assert_eq!(mod_inverse(&big(a), &big(p)), Some(big(expected)));
    }

    #[test]
    fn mod_inverse_of_zero_is_none() {
        assert_eq!(mod_inverse(&big(0), &big(7)), None);
        assert_eq!(mod_inverse(&big(14), &big(7)), None);
    }

    #[test]
    fn mod_inverse_large_prime() {
        let p = BigUint::parse_bytes(b"1298074214633706835075030044421213", 10).unwrap();
        let a = BigUint::parse_bytes(b"987654321987654321", 10).unwrap();
        let inv = mod_inverse(&a, &p).unwrap();
        assert_eq!((a * inv) % &p, big(1));
    }

    #[test]
    fn lagrange_basis_sums_to_one() {
        let p = big(13);
        let xs = vec![big(1), big(2), big(5)];
        let sum = (0..xs.len())
            .map(|i| lagrange_basis(&xs, i, &big(0), &p).unwrap())
            .fold(big(0), |acc, l| (acc + l) % &p);
        assert_eq!(sum, big(1));
    }

    #[test]
    fn lagrange_basis_rejects_coincident_points() {
        let p = big(7);
        let xs = vec![big(1), big(8)];
        assert_eq!(lagrange_basis(&xs, 0, &big(0), &p), None);
    }
}
