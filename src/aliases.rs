// src/aliases.rs
//! Secret-holding wrappers for key material
//!
//! Key material is zeroized on drop and never shows up in `Debug` output.

use std::fmt;

use zeroize::Zeroizing;

/// Comma-separated key specification, e.g. "3,5,1,4,5,6,7,5,2"
#[derive(Clone)]
pub struct KeyMaterial(Zeroizing<String>);

impl KeyMaterial {
    pub fn new(spec: String) -> Self {
        Self(Zeroizing::new(spec))
    }

    #[inline]
    pub fn expose_secret(&self) -> &String {
        &self.0
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}
