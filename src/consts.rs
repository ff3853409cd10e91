// src/consts.rs
//! Shared constants: alphabet, framing, defaults

/// First code point of the default alphabet (NUL)
pub const DEFAULT_FIRST_CODE_POINT: u32 = 0;

/// Size of the default alphabet: the 128 ASCII code points
pub const DEFAULT_ALPHABET_SIZE: u32 = 128;

/// Fallback key: a 3×3 matrix with determinant 95, invertible mod 128
pub const DEFAULT_KEY: &str = "3,5,1,4,5,6,7,5,2";

/// Fallback start index (offset added to every character code)
pub const DEFAULT_START_INDEX: i64 = 3;

/// Delimiter around the pad length in the ciphertext header: `_<pad_len>_`
pub const HEADER_DELIMITER: char = '_';

/// Separator between key elements in a key specification
pub const KEY_SEPARATOR: char = ',';

/// Upper bound on random draws when generating an invertible key
// At least ~29% of random matrices are invertible mod 2^k
pub const MAX_KEYGEN_ATTEMPTS: u32 = 1_000;

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "CYPHERGRID_CONFIG";

/// Config file used when `CYPHERGRID_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "cyphergrid.toml";

/// Environment override for the key specification
pub const KEY_ENV: &str = "CYPHERGRID_KEY";

/// Environment override for the start index
pub const START_INDEX_ENV: &str = "CYPHERGRID_START_INDEX";
