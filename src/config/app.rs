// src/config/app.rs
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use super::defaults::*;
use crate::aliases::KeyMaterial;
use crate::alphabet::Alphabet;
use crate::cipher::HillCipher;
use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, KEY_ENV, START_INDEX_ENV};
use crate::error::{CipherError, ConfigError};

#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub key: KeySettings,
    #[serde(default)]
    pub alphabet: AlphabetSettings,
}

#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeySettings {
    /// Comma-separated key specification
    #[serde(
        default = "default_key_material",
        deserialize_with = "deserialize_key_material"
    )]
    pub matrix: KeyMaterial,
    #[serde(default = "default_start_index")]
    pub start_index: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlphabetSettings {
    #[serde(default = "default_first_code_point")]
    pub first_code_point: u32,
    #[serde(default = "default_alphabet_size")]
    pub size: u32,
}

fn deserialize_key_material<'de, D>(deserializer: D) -> Result<KeyMaterial, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(KeyMaterial::new)
}

// Never print key material
impl fmt::Debug for KeySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySettings")
            .field("matrix", &"[REDACTED]")
            .field("start_index", &self.start_index)
            .finish()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("key", &self.key)
            .field("alphabet", &self.alphabet)
            .finish()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Overlay `CYPHERGRID_KEY` / `CYPHERGRID_START_INDEX` as returned by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(KEY_ENV) {
            self.key.matrix = KeyMaterial::new(key);
        }
        if let Some(raw) = lookup(START_INDEX_ENV) {
            self.key.start_index =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnv {
                        var: START_INDEX_ENV,
                        value: raw.clone(),
                    })?;
        }
        Ok(())
    }

    pub fn alphabet(&self) -> Result<Alphabet, CipherError> {
        Alphabet::contiguous(self.alphabet.first_code_point, self.alphabet.size)
    }

    pub fn build_cipher(&self) -> Result<HillCipher, ConfigError> {
        let alphabet = self.alphabet()?;
        Ok(HillCipher::from_key_material(
            &self.key.matrix,
            self.key.start_index,
            alphabet,
        )?)
    }
}

/// Load config at runtime, falling back to defaults if the file is missing
pub fn load() -> Result<Config, ConfigError> {
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        debug!(path = %config_path, "loading config");
        Config::from_path(&config_path)?
    } else {
        warn!(path = %config_path, "config file not found, using built-in defaults");
        Config::default()
    };

    conf.apply_overrides(|var| std::env::var(var).ok())?;
    Ok(conf)
}
