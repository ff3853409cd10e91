// src/cipher.rs
//! Block-wise Hill cipher over a configurable alphabet
//!
//! Ciphertext layout: `_<pad_len>_<body>` where `pad_len` is decimal with no
//! leading zeros and `body` is a whole number of blocks.

use tracing::{debug, trace};

use crate::aliases::KeyMaterial;
use crate::alphabet::Alphabet;
use crate::codec::Codec;
use crate::consts::HEADER_DELIMITER;
use crate::error::CipherError;
use crate::inverse::modular_inverse;
use crate::key::parse_key;
use crate::matrix::Matrix;
use crate::padding::{pad, unpad};

pub type Result<T> = std::result::Result<T, CipherError>;

/// A ready-to-use cipher: key matrix `E`, its inverse `D`, and the codec.
///
/// Immutable after construction; `encrypt`/`decrypt` take `&self` and keep
/// all buffers local, so one instance can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillCipher {
    codec: Codec,
    encryption: Matrix,
    decryption: Matrix,
}

impl HillCipher {
    /// Cipher over the 128-character ASCII alphabet.
    pub fn new(key_spec: &str, start_index: i64) -> Result<Self> {
        Self::with_alphabet(key_spec, start_index, Alphabet::ascii())
    }

    pub fn with_alphabet(key_spec: &str, start_index: i64, alphabet: Alphabet) -> Result<Self> {
        Self::from_matrix(parse_key(key_spec)?, start_index, alphabet)
    }

    pub fn from_key_material(
        key: &KeyMaterial,
        start_index: i64,
        alphabet: Alphabet,
    ) -> Result<Self> {
        Self::with_alphabet(key.expose_secret(), start_index, alphabet)
    }

    /// Build from an already parsed key; fails if the key has no inverse mod
    /// the alphabet size.
    pub fn from_matrix(encryption: Matrix, start_index: i64, alphabet: Alphabet) -> Result<Self> {
        let decryption = modular_inverse(&encryption, alphabet.size())?;
        debug!(
            block_size = encryption.size(),
            modulus = alphabet.size(),
            start_index,
            "cipher ready"
        );
        Ok(Self {
            codec: Codec::new(alphabet, start_index),
            encryption,
            decryption,
        })
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.encryption.size()
    }

    #[inline]
    pub fn modulus(&self) -> u32 {
        self.codec.alphabet().size()
    }

    #[inline]
    pub fn start_index(&self) -> i64 {
        self.codec.offset()
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.codec.alphabet()
    }

    pub fn encryption_matrix(&self) -> &Matrix {
        &self.encryption
    }

    pub fn decryption_matrix(&self) -> &Matrix {
        &self.decryption
    }

    /// Encrypt `plaintext` into `_<pad_len>_<body>`.
    ///
    /// # Errors
    /// [`CipherError::UnknownCharacter`] if `plaintext` leaves the alphabet.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let (padded, pad_len) = pad(plaintext, self.block_size(), self.alphabet().pad_char());
        let numbers = self.codec.text_to_numbers(&padded)?;
        let encrypted = self.apply(&self.encryption, &numbers)?;
        let body = self.codec.numbers_to_text(&encrypted);
        trace!(
            plaintext_chars = numbers.len() - pad_len,
            pad_len,
            "encrypted"
        );
        Ok(format!(
            "{HEADER_DELIMITER}{pad_len}{HEADER_DELIMITER}{body}"
        ))
    }

    /// Reverse [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    /// - [`CipherError::MalformedCiphertext`] for a missing or invalid header,
    ///   or when the stripped tail is not all pad characters
    /// - [`CipherError::UnknownCharacter`] if the body leaves the alphabet
    /// - [`CipherError::InvalidBlockAlignment`] if the body is not whole blocks
    /// - [`CipherError::PaddingOutOfRange`] if the pad length exceeds the body
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let (pad_len, body) = split_header(ciphertext)?;
        let n = self.block_size();
        if pad_len == 0 || pad_len > n {
            return Err(CipherError::malformed(format!(
                "pad length {pad_len} outside 1..={n}"
            )));
        }
        let numbers = self.codec.text_to_numbers(body)?;
        if !numbers.len().is_multiple_of(n) {
            return Err(CipherError::InvalidBlockAlignment {
                len: numbers.len(),
                block_size: n,
            });
        }
        let decrypted = self.apply(&self.decryption, &numbers)?;
        let padded = self.codec.numbers_to_text(&decrypted);
        let plaintext = unpad(&padded, pad_len)?;
        let pad_char = self.alphabet().pad_char();
        if padded[plaintext.len()..].chars().any(|c| c != pad_char) {
            return Err(CipherError::malformed(
                "stripped padding does not match the pad character",
            ));
        }
        trace!(ciphertext_chars = numbers.len(), pad_len, "decrypted");
        Ok(plaintext.to_owned())
    }

    fn apply(&self, matrix: &Matrix, numbers: &[i64]) -> Result<Vec<i64>> {
        let mut out = Vec::with_capacity(numbers.len());
        for block in numbers.chunks_exact(matrix.size()) {
            out.extend(matrix.mul_vec_mod(block, self.modulus())?);
        }
        Ok(out)
    }
}

/// Split `_<digits>_<body>` into the pad length and the body.
fn split_header(ciphertext: &str) -> Result<(usize, &str)> {
    let rest = ciphertext
        .strip_prefix(HEADER_DELIMITER)
        .ok_or_else(|| CipherError::malformed("missing header"))?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(digits_end);
    if digits.is_empty() {
        return Err(CipherError::malformed("missing pad length"));
    }
    let body = tail
        .strip_prefix(HEADER_DELIMITER)
        .ok_or_else(|| CipherError::malformed("unterminated header"))?;
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(CipherError::malformed("pad length has leading zeros"));
    }
    let pad_len = digits
        .parse::<usize>()
        .map_err(|_| CipherError::malformed("pad length too large"))?;
    Ok((pad_len, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header() {
        assert_eq!(split_header("_1_abc").unwrap(), (1, "abc"));
        assert_eq!(split_header("_12__x_").unwrap(), (12, "_x_"));
        assert_eq!(split_header("_3_").unwrap(), (3, ""));
    }

    #[test]
    fn test_split_header_rejects() {
        for bad in [
            "",
            "no-header-here",
            "1_abc",
            "__abc",
            "_1abc",
            "_x_abc",
            "_01_abc",
            "_99999999999999999999999_abc",
        ] {
            assert!(
                matches!(
                    split_header(bad),
                    Err(CipherError::MalformedCiphertext { .. })
                ),
                "accepted {bad:?}"
            );
        }
    }
}
