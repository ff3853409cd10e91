// src/inverse.rs
//! Modular matrix inversion
//!
//! `D = det(E)⁻¹ · adj(E) mod m`, computed entirely over the integers.
//! The key is reduced mod `m` first: determinant and adjugate are polynomials
//! in the entries, so this preserves both residues while keeping the exact
//! intermediates as small as possible. Elimination itself runs on `BigInt`,
//! so no block size or modulus can overflow it.

use num_bigint::BigInt;

use crate::error::CipherError;
use crate::matrix::{residue, Matrix};

/// Extended Euclid: returns `(g, x, y)` with `a·x + b·y = g = gcd(a, b)`.
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i128, 0i128);
    let (mut old_t, mut t) = (0i128, 1i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }
    if old_r < 0 {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Multiplicative inverse of `value` mod `modulus`, in `[0, modulus)`.
///
/// Returns `None` when `gcd(value mod m, m) != 1`.
pub fn mod_inverse(value: i128, modulus: u32) -> Option<i128> {
    let m = i128::from(modulus);
    if m < 2 {
        return None;
    }
    let (g, x, _) = extended_gcd(value.rem_euclid(m), m);
    (g == 1).then(|| x.rem_euclid(m))
}

/// Inverse of `matrix` modulo `modulus`.
///
/// # Errors
/// [`CipherError::KeyNotInvertible`] if the determinant is not coprime with the modulus
pub fn modular_inverse(matrix: &Matrix, modulus: u32) -> Result<Matrix, CipherError> {
    let m = i128::from(modulus);
    let reduced = matrix.reduce_mod(modulus);
    let det_mod = residue(&reduced.determinant(), &BigInt::from(modulus));

    let det_inv = mod_inverse(i128::from(det_mod), modulus).ok_or(
        CipherError::KeyNotInvertible {
            determinant: det_mod,
            modulus,
        },
    )?;

    // adjugate_mod entries and det_inv are both below 2^32
    let data = reduced
        .adjugate_mod(modulus)
        .as_slice()
        .iter()
        .map(|&v| (det_inv * i128::from(v)).rem_euclid(m) as i64)
        .collect();
    let inverse = Matrix::new(matrix.size(), data)?;

    tracing::trace!(
        size = matrix.size(),
        modulus,
        "computed modular matrix inverse"
    );
    Ok(inverse)
}
