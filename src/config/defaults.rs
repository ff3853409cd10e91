// src/config/defaults.rs
use crate::aliases::KeyMaterial;
use crate::config::app::{AlphabetSettings, KeySettings};
use crate::consts::{
    DEFAULT_ALPHABET_SIZE, DEFAULT_FIRST_CODE_POINT, DEFAULT_KEY, DEFAULT_START_INDEX,
};

pub fn default_key_material() -> KeyMaterial {
    KeyMaterial::new(DEFAULT_KEY.to_owned())
}

pub fn default_start_index() -> i64 {
    DEFAULT_START_INDEX
}

pub fn default_first_code_point() -> u32 {
    DEFAULT_FIRST_CODE_POINT
}

pub fn default_alphabet_size() -> u32 {
    DEFAULT_ALPHABET_SIZE
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            matrix: default_key_material(),
            start_index: default_start_index(),
        }
    }
}

impl Default for AlphabetSettings {
    fn default() -> Self {
        Self {
            first_code_point: default_first_code_point(),
            size: default_alphabet_size(),
        }
    }
}
