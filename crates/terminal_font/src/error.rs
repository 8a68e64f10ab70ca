//! Error types for font registration, selection and configuration

use thiserror::Error;

use crate::FontTier;

pub type FontResult<T> = std::result::Result<T, FontError>;

#[derive(Debug, Error)]
pub enum FontError {
    // === Registry ===
    #[error("Font registry full ({capacity} fonts)")]
    RegistryFull { capacity: usize },

    #[error("Font index {index} out of range (0..{count})")]
    IndexOutOfRange { index: usize, count: usize },

    // === Descriptor validation ===
    #[error("Glyph table is empty")]
    EmptyGlyphTable,

    #[error("Glyph height must be greater than 0")]
    ZeroHeight,

    #[error("Glyph width must be greater than 0")]
    ZeroWidth,

    #[error("Invalid character range {first}..={last}")]
    InvalidRange { first: u8, last: u8 },

    #[error("Width table has {actual} entries, expected {expected}")]
    WidthTableMismatch { expected: usize, actual: usize },

    #[error("Glyph table too short: expected {expected} bytes, got {actual}")]
    GlyphTableTooShort { expected: usize, actual: usize },

    // === Built-in tiers ===
    #[error("Font tier {0} is not linked into this build")]
    TierUnavailable(FontTier),

    #[error("Invalid maximum font size: {0} (valid: 0..=4)")]
    InvalidMaxFontSize(u8),

    // === Configuration ===
    #[error("Invalid font configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for FontError {
    fn from(err: toml::de::Error) -> Self {
        FontError::Config(err.to_string())
    }
}
