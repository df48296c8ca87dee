//! Threshold secret sharing over a prime field
//!
//! Secrets are split with a degree-1 polynomial `s + a*x` evaluated at the
//! device indices 1, 2 and 3, so any two shares determine the secret.
//! Reconstruction is Lagrange interpolation at x = 0 and works with two or
//! three consistent points. Modular inverses use Fermat exponentiation,
//! which is valid because both component moduli are prime.

use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

/// Evaluation points for the three device shares.
pub const DEVICE_XS: [u8; 3] = [1, 2, 3];

/// `(a - b) mod modulus` for operands already reduced below `modulus`.
fn sub_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    ((a + modulus) - b) % modulus
}

/// Modular inverse of a nonzero element of the prime field.
fn mod_inv(a: &BigUint, modulus: &BigUint) -> BigUint {
    a.modpow(&(modulus - 2u32), modulus)
}

/// Evaluates the interpolating polynomial through `points` at x = 0.
///
/// Preconditions (enforced by `ShareSet` upstream): at least two points,
/// x coordinates distinct and nonzero. y values are reduced modulo the
/// field before use.
#[must_use]
pub fn interpolate_at_zero(points: &[(u8, BigUint)], modulus: &BigUint) -> BigUint {
    let mut secret = BigUint::from(0u8);
    for (j, (xj, yj)) in points.iter().enumerate() {
        let xj = BigUint::from(*xj);
        let mut basis = BigUint::from(1u8);
        for (m, (xm, _)) in points.iter().enumerate() {
            if m == j {
                continue;
            }
            let xm = BigUint::from(*xm);
            // (0 - x_m) / (x_j - x_m)
            let numerator = (modulus - &xm) % modulus;
            let denominator = sub_mod(&xj, &xm, modulus);
            basis = basis * numerator % modulus * mod_inv(&denominator, modulus) % modulus;
        }
        secret = (secret + yj % modulus * basis) % modulus;
    }
    secret
}

/// Splits `secret` into three shares at x = 1, 2, 3 with threshold two.
///
/// The caller guarantees `secret < modulus`.
pub fn split<R: Rng + ?Sized>(
    secret: &BigUint,
    modulus: &BigUint,
    rng: &mut R,
) -> [(u8, BigUint); 3] {
    let coefficient = rng.gen_biguint_below(modulus);
    DEVICE_XS.map(|x| (x, (secret + &coefficient * x) % modulus))
}
