// src/matrix.rs
//! Square integer matrices with exact arithmetic
//!
//! Entries are stored row-major as `i64`. Determinants and cofactors are
//! computed with fraction-free (Bareiss) elimination over arbitrary-precision
//! integers, so every intermediate value is exact for any block size.

use std::fmt;

use num_bigint::{BigInt, Sign};

use crate::consts::KEY_SEPARATOR;
use crate::error::CipherError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Build a `size × size` matrix from row-major `values`.
    ///
    /// # Errors
    /// [`CipherError::DimensionMismatch`] if `values.len() != size * size`
    /// or `size == 0`.
    pub fn new(size: usize, values: Vec<i64>) -> Result<Self, CipherError> {
        let expected = size.checked_mul(size).ok_or(CipherError::ArithmeticOverflow)?;
        if size == 0 || values.len() != expected {
            return Err(CipherError::DimensionMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(Self { size, data: values })
    }

    pub fn identity(size: usize) -> Self {
        let mut data = vec![0; size * size];
        for i in 0..size {
            data[i * size + i] = 1;
        }
        Self { size, data }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.size + col]
    }

    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Every entry reduced into `[0, modulus)`
    pub fn reduce_mod(&self, modulus: u32) -> Self {
        let m = i64::from(modulus);
        Self {
            size: self.size,
            data: self.data.iter().map(|v| v.rem_euclid(m)).collect(),
        }
    }

    /// `(self · v) mod modulus`, returned as a fresh vector with entries in `[0, modulus)`.
    pub fn mul_vec_mod(&self, v: &[i64], modulus: u32) -> Result<Vec<i64>, CipherError> {
        if v.len() != self.size {
            return Err(CipherError::DimensionMismatch {
                expected: self.size,
                found: v.len(),
            });
        }
        let m = i128::from(modulus);
        let reduced: Vec<i128> = v.iter().map(|&x| i128::from(x).rem_euclid(m)).collect();
        Ok((0..self.size)
            .map(|r| {
                let acc = self
                    .row(r)
                    .iter()
                    .zip(&reduced)
                    .fold(0i128, |acc, (&a, &b)| {
                        (acc + i128::from(a).rem_euclid(m) * b).rem_euclid(m)
                    });
                // acc < modulus <= u32::MAX
                acc as i64
            })
            .collect())
    }

    /// `(self · other) mod modulus`
    pub fn mul_mod(&self, other: &Matrix, modulus: u32) -> Result<Matrix, CipherError> {
        if other.size != self.size {
            return Err(CipherError::DimensionMismatch {
                expected: self.size,
                found: other.size,
            });
        }
        let n = self.size;
        let m = i128::from(modulus);
        let mut data = Vec::with_capacity(n * n);
        for r in 0..n {
            for c in 0..n {
                let acc = (0..n).fold(0i128, |acc, k| {
                    let a = i128::from(self.get(r, k)).rem_euclid(m);
                    let b = i128::from(other.get(k, c)).rem_euclid(m);
                    (acc + a * b).rem_euclid(m)
                });
                data.push(acc as i64);
            }
        }
        Ok(Matrix { size: n, data })
    }

    pub fn is_identity_mod(&self, modulus: u32) -> bool {
        let m = i64::from(modulus);
        (0..self.size).all(|r| {
            (0..self.size).all(|c| {
                let expected = if r == c { 1 % m } else { 0 };
                self.get(r, c).rem_euclid(m) == expected
            })
        })
    }

    /// Exact determinant.
    pub fn determinant(&self) -> BigInt {
        bareiss_determinant(self.widened(), self.size)
    }

    /// `(-1)^(row+col) · det(minor)` with `row` and `col` removed, exact.
    pub fn cofactor(&self, row: usize, col: usize) -> BigInt {
        let minor = bareiss_determinant(self.minor_widened(row, col), self.size - 1);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Transpose of the cofactor matrix, exact, row-major.
    pub fn adjugate(&self) -> Vec<BigInt> {
        let n = self.size;
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| self.cofactor(j, i))
            .collect()
    }

    /// Adjugate with every entry reduced into `[0, modulus)`
    pub fn adjugate_mod(&self, modulus: u32) -> Matrix {
        let m = BigInt::from(modulus);
        Matrix {
            size: self.size,
            data: self.adjugate().iter().map(|v| residue(v, &m)).collect(),
        }
    }

    /// Comma-separated row-major form, accepted back by [`crate::key::parse_key`]
    pub fn to_key_spec(&self) -> String {
        self.data
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(&KEY_SEPARATOR.to_string())
    }

    fn widened(&self) -> Vec<BigInt> {
        self.data.iter().map(|&v| BigInt::from(v)).collect()
    }

    fn minor_widened(&self, skip_row: usize, skip_col: usize) -> Vec<BigInt> {
        let n = self.size;
        let mut out = Vec::with_capacity((n - 1) * (n - 1));
        for r in (0..n).filter(|&r| r != skip_row) {
            for c in (0..n).filter(|&c| c != skip_col) {
                out.push(BigInt::from(self.get(r, c)));
            }
        }
        out
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{:?}", self.row(r))?;
        }
        Ok(())
    }
}

/// `value mod m` in `[0, m)` for a positive `m` no larger than `u32::MAX`.
pub(crate) fn residue(value: &BigInt, m: &BigInt) -> i64 {
    let r = value % m;
    let r = if r.sign() == Sign::Minus { r + m } else { r };
    // 0 <= r < m fits in a single 32-bit digit
    let (_, digits) = r.to_u32_digits();
    i64::from(digits.first().copied().unwrap_or(0))
}

/// Fraction-free Gaussian elimination on a row-major `n × n` buffer.
///
/// Every division is exact (Sylvester's identity), so the result is the
/// integer determinant. An empty matrix has determinant 1.
fn bareiss_determinant(mut a: Vec<BigInt>, n: usize) -> BigInt {
    if n == 0 {
        return BigInt::from(1);
    }
    let mut negate = false;
    let mut prev = BigInt::from(1);

    for k in 0..n - 1 {
        if a[k * n + k].sign() == Sign::NoSign {
            match (k + 1..n).find(|&i| a[i * n + k].sign() != Sign::NoSign) {
                Some(i) => {
                    for j in 0..n {
                        a.swap(k * n + j, i * n + j);
                    }
                    negate = !negate;
                }
                None => return BigInt::from(0),
            }
        }
        let pivot = a[k * n + k].clone();
        for i in k + 1..n {
            for j in k + 1..n {
                let num = &a[i * n + j] * &pivot - &a[i * n + k] * &a[k * n + j];
                a[i * n + j] = num / &prev;
            }
        }
        prev = pivot;
    }

    let det = a.swap_remove(n * n - 1);
    if negate {
        -det
    } else {
        det
    }
}
