// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Errors raised while building a cipher or transforming text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid key format: {token:?} is not an integer")]
    InvalidKeyFormat { token: String },

    #[error("Key has {len} elements; the length must be a perfect square (1, 4, 9, 16, ...)")]
    KeyNotSquare { len: usize },

    #[error("Key is not invertible modulo {modulus}: determinant {determinant} shares a factor with the modulus")]
    KeyNotInvertible { determinant: i64, modulus: u32 },

    #[error("Character {character:?} at position {position} is not in the alphabet")]
    UnknownCharacter { character: char, position: usize },

    #[error("Malformed ciphertext: {reason}")]
    MalformedCiphertext { reason: String },

    #[error("Ciphertext body of {len} characters is not a multiple of the block size {block_size}")]
    InvalidBlockAlignment { len: usize, block_size: usize },

    #[error("Padding length {pad_len} exceeds text length {len}")]
    PaddingOutOfRange { pad_len: usize, len: usize },

    #[error("Invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Integer overflow in matrix dimensions")]
    ArithmeticOverflow,

    #[error("No invertible key found after {attempts} attempts")]
    KeyGenerationFailed { attempts: u32 },
}

impl CipherError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        CipherError::MalformedCiphertext {
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value {value:?} for environment variable {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Cipher construction failed: {0}")]
    Cipher(#[from] CipherError),
}
