// src/codec.rs
//! Character ↔ number mapping
//!
//! `char_to_num(c) = index(c) + offset` and
//! `num_to_char(v) = alphabet[(v - offset) mod size]`. The reverse direction
//! is total: any integer maps to some character via Euclidean remainder.
//!
//! Only `offset mod size` affects the arithmetic, so the codec works with
//! that residue and keeps the configured offset for reporting.

use crate::alphabet::Alphabet;
use crate::error::CipherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
    offset: i64,
    shift: i64,
}

impl Codec {
    pub fn new(alphabet: Alphabet, offset: i64) -> Self {
        let shift = offset.rem_euclid(i64::from(alphabet.size()));
        Self {
            alphabet,
            offset,
            shift,
        }
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Numeric code for `c`; `position` is only used for error reporting.
    pub fn char_to_num(&self, c: char, position: usize) -> Result<i64, CipherError> {
        let idx = self
            .alphabet
            .index_of(c)
            .ok_or(CipherError::UnknownCharacter {
                character: c,
                position,
            })?;
        // both terms are below 2^32
        Ok(i64::from(idx) + self.shift)
    }

    pub fn num_to_char(&self, value: i64) -> char {
        let shifted = i128::from(value) - i128::from(self.shift);
        let idx = shifted.rem_euclid(i128::from(self.alphabet.size())) as u32;
        // idx < size, so the lookup cannot miss
        self.alphabet
            .char_at(idx)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    pub fn text_to_numbers(&self, text: &str) -> Result<Vec<i64>, CipherError> {
        text.chars()
            .enumerate()
            .map(|(pos, c)| self.char_to_num(c, pos))
            .collect()
    }

    pub fn numbers_to_text(&self, numbers: &[i64]) -> String {
        numbers.iter().map(|&v| self.num_to_char(v)).collect()
    }
}
