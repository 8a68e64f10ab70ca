//! Single byte text encoding.
//!
//! The font API measures and draws byte strings where every byte is one
//! character code. Rust strings are mapped code point by code point.

/// Substitute for characters that don't fit into one byte.
pub const REPLACEMENT_CHARACTER: u8 = b'?';

/// Maps every `char` up to U+00FF to its byte and everything wider to `?`.
pub fn encode_single_byte(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(REPLACEMENT_CHARACTER))
        .collect()
}
