// src/lib.rs
//! cyphergrid: a generalized Hill cipher
//!
//! Features:
//! - Square integer key matrices of any block size
//! - Exact modular inversion (Bareiss determinant + adjugate, no floats)
//! - Any contiguous Unicode range as the alphabet, with a start-index offset
//! - Self-describing padding: ciphertext is `_<pad_len>_<blocks>`
//!
//! ```
//! use cyphergrid::HillCipher;
//!
//! let cipher = HillCipher::new("3,5,1,4,5,6,7,5,2", 3).unwrap();
//! let ciphertext = cipher.encrypt("Use a").unwrap();
//! assert!(ciphertext.starts_with("_1_"));
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "Use a");
//! ```
//!
//! The Hill cipher falls to known-plaintext attacks. This crate reproduces
//! its mechanics; it is not a way to protect data.

pub mod aliases;
pub mod alphabet;
pub mod cipher;
pub mod codec;
pub mod config;
pub mod consts;
pub mod error;
pub mod inverse;
pub mod key;
pub mod matrix;
pub mod padding;

// Re-export everything users need at the crate root
pub use aliases::KeyMaterial;
pub use alphabet::Alphabet;
pub use cipher::{HillCipher, Result as CipherResult};
pub use codec::Codec;
pub use config::load as load_config;
pub use error::{CipherError, ConfigError};
pub use inverse::modular_inverse;
pub use key::{generate_key, parse_key};
pub use matrix::Matrix;
pub use padding::{pad, unpad};
