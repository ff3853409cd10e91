// src/key.rs
//! Key parsing, validation and generation
//!
//! A key specification is a comma-separated list of integers whose count is a
//! perfect square `n²`; the values fill an `n × n` matrix row by row. Values
//! are not range-checked here; they are reduced under the modulus later.

use rand::Rng;

use crate::consts::{KEY_SEPARATOR, MAX_KEYGEN_ATTEMPTS};
use crate::error::CipherError;
use crate::inverse::modular_inverse;
use crate::matrix::Matrix;

/// Parse `"3,5,1,4,5,6,7,5,2"` into a square matrix.
///
/// Whitespace around each token is ignored.
///
/// # Errors
/// - [`CipherError::InvalidKeyFormat`] for any token that is not an `i64`
/// - [`CipherError::KeyNotSquare`] if the token count is not a perfect square
pub fn parse_key(spec: &str) -> Result<Matrix, CipherError> {
    let values = spec
        .split(KEY_SEPARATOR)
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|_| CipherError::InvalidKeyFormat {
                    token: token.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    key_from_values(values)
}

/// Lay out `values` as a square matrix.
pub fn key_from_values(values: Vec<i64>) -> Result<Matrix, CipherError> {
    let len = values.len();
    let size = exact_sqrt(len).ok_or(CipherError::KeyNotSquare { len })?;
    Matrix::new(size, values)
}

/// Draw uniformly random `block_size × block_size` keys until one is
/// invertible mod `modulus`.
///
/// # Errors
/// - [`CipherError::KeyNotSquare`] for `block_size == 0`
/// - [`CipherError::KeyGenerationFailed`] if no draw was invertible
pub fn generate_key<R: Rng + ?Sized>(
    rng: &mut R,
    block_size: usize,
    modulus: u32,
) -> Result<Matrix, CipherError> {
    if block_size == 0 {
        return Err(CipherError::KeyNotSquare { len: 0 });
    }
    if modulus < 2 {
        return Err(CipherError::InvalidAlphabet {
            reason: format!("modulus must be at least 2, got {modulus}"),
        });
    }
    let len = block_size
        .checked_mul(block_size)
        .ok_or(CipherError::ArithmeticOverflow)?;

    for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
        let values = (0..len)
            .map(|_| i64::from(rng.random_range(0..modulus)))
            .collect();
        let candidate = Matrix::new(block_size, values)?;
        match modular_inverse(&candidate, modulus) {
            Ok(_) => {
                tracing::debug!(block_size, modulus, attempt, "generated invertible key");
                return Ok(candidate);
            }
            Err(CipherError::KeyNotInvertible { .. }) => continue,
            Err(other) => return Err(other),
        }
    }
    Err(CipherError::KeyGenerationFailed {
        attempts: MAX_KEYGEN_ATTEMPTS,
    })
}

fn exact_sqrt(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let mut root = (len as f64).sqrt() as usize;
    // correct float rounding in either direction
    while root.saturating_mul(root) > len {
        root -= 1;
    }
    while (root + 1).saturating_mul(root + 1) <= len {
        root += 1;
    }
    (root * root == len).then_some(root)
}
