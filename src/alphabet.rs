// src/alphabet.rs
//! Character sets the cipher operates over
//!
//! An alphabet is a contiguous run of Unicode scalar values. Its length is the
//! modulus for all matrix arithmetic and its last character is the pad char.

use crate::consts::{DEFAULT_ALPHABET_SIZE, DEFAULT_FIRST_CODE_POINT};
use crate::error::CipherError;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    first: u32,
    size: u32,
}

impl Alphabet {
    /// Build an alphabet of `size` characters starting at `first_code_point`.
    ///
    /// # Errors
    /// [`CipherError::InvalidAlphabet`] when `size < 2`, the range runs past
    /// `char::MAX`, or it touches the surrogate block.
    pub fn contiguous(first_code_point: u32, size: u32) -> Result<Self, CipherError> {
        if size < 2 {
            return Err(CipherError::InvalidAlphabet {
                reason: format!("size must be at least 2, got {size}"),
            });
        }
        let last = first_code_point
            .checked_add(size - 1)
            .filter(|&last| last <= char::MAX as u32)
            .ok_or_else(|| CipherError::InvalidAlphabet {
                reason: format!("range starting at {first_code_point:#x} with {size} characters exceeds char::MAX"),
            })?;
        if first_code_point <= SURROGATE_END && last >= SURROGATE_START {
            return Err(CipherError::InvalidAlphabet {
                reason: format!(
                    "range {first_code_point:#x}..={last:#x} overlaps the surrogate block"
                ),
            });
        }
        Ok(Self {
            first: first_code_point,
            size,
        })
    }

    /// The 128 ASCII code points, `'\0'..='\x7f'`
    pub const fn ascii() -> Self {
        Self {
            first: DEFAULT_FIRST_CODE_POINT,
            size: DEFAULT_ALPHABET_SIZE,
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn first_code_point(&self) -> u32 {
        self.first
    }

    /// Position of `c` in the alphabet, if present
    #[inline]
    pub fn index_of(&self, c: char) -> Option<u32> {
        (c as u32)
            .checked_sub(self.first)
            .filter(|&idx| idx < self.size)
    }

    /// Character at `index`, if in range
    pub fn char_at(&self, index: u32) -> Option<char> {
        if index >= self.size {
            return None;
        }
        char::from_u32(self.first + index)
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// Filler appended by the padder: the last character of the alphabet
    pub fn pad_char(&self) -> char {
        // Construction guarantees the whole range is valid scalar values
        char::from_u32(self.first + self.size - 1).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        (0..self.size).filter_map(move |i| self.char_at(i))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ascii()
    }
}
