// src/padding.rs
//! Block padding
//!
//! `pad` always appends between 1 and `block_size` pad characters, so an
//! already aligned text gains a full extra block and the pad length is never 0.

use crate::error::CipherError;

/// Pad `text` to a multiple of `block_size` with `pad_char`.
///
/// Returns the padded text and the number of characters appended, always in
/// `1..=block_size`. Lengths are counted in characters, not bytes.
pub fn pad(text: &str, block_size: usize, pad_char: char) -> (String, usize) {
    debug_assert!(block_size > 0);
    let len = text.chars().count();
    let pad_len = block_size - len % block_size;
    let mut padded = String::with_capacity(text.len() + pad_len * pad_char.len_utf8());
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(pad_char, pad_len));
    (padded, pad_len)
}

/// Strip the trailing `pad_len` characters from `text`.
///
/// # Errors
/// [`CipherError::PaddingOutOfRange`] if `pad_len` exceeds the text length.
pub fn unpad(text: &str, pad_len: usize) -> Result<&str, CipherError> {
    let len = text.chars().count();
    if pad_len > len {
        return Err(CipherError::PaddingOutOfRange { pad_len, len });
    }
    let cut = text
        .char_indices()
        .nth(len - pad_len)
        .map_or(text.len(), |(idx, _)| idx);
    Ok(&text[..cut])
}
