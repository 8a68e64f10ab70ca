//! Built-in terminal font tiers.
//!
//! Each tier is a fixed width font addressing 32..=255. Only 32..=127 carry
//! glyphs: the cells of 128..=255 are present so extended codes index
//! safely, but they are blank. The 8x12, 12x16 and 16x24 tables are scaled
//! up from the 6x8 glyphs.
//!
//! The cargo features `font-6x8` .. `font-16x24` decide which tables are
//! linked in; every tier pulls in the smaller ones.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{FontDescriptor, FontError, FontResult};

#[cfg(feature = "font-6x8")]
pub const TERMINAL_6X8: &[u8] = include_bytes!("../data/fonts/Terminal6x8e.bin");
#[cfg(feature = "font-8x12")]
pub const TERMINAL_8X12: &[u8] = include_bytes!("../data/fonts/Terminal8x12e.bin");
#[cfg(feature = "font-12x16")]
pub const TERMINAL_12X16: &[u8] = include_bytes!("../data/fonts/Terminal12x16e.bin");
#[cfg(feature = "font-16x24")]
pub const TERMINAL_16X24: &[u8] = include_bytes!("../data/fonts/Terminal16x24e.bin");

/// Number of built-in tiers.
pub const TIER_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontTier {
    Terminal6x8,
    Terminal8x12,
    Terminal12x16,
    Terminal16x24,
}

impl FontTier {
    pub const ALL: [FontTier; TIER_COUNT] = [
        FontTier::Terminal6x8,
        FontTier::Terminal8x12,
        FontTier::Terminal12x16,
        FontTier::Terminal16x24,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontTier::Terminal6x8 => "Terminal 6x8",
            FontTier::Terminal8x12 => "Terminal 8x12",
            FontTier::Terminal12x16 => "Terminal 12x16",
            FontTier::Terminal16x24 => "Terminal 16x24",
        }
    }

    /// Nominal glyph cell as (width, height).
    pub fn cell_size(self) -> (u8, u8) {
        match self {
            FontTier::Terminal6x8 => (6, 8),
            FontTier::Terminal8x12 => (8, 12),
            FontTier::Terminal12x16 => (12, 16),
            FontTier::Terminal16x24 => (16, 24),
        }
    }

    #[allow(unreachable_patterns)]
    fn table(self) -> Option<&'static [u8]> {
        match self {
            #[cfg(feature = "font-6x8")]
            FontTier::Terminal6x8 => Some(TERMINAL_6X8),
            #[cfg(feature = "font-8x12")]
            FontTier::Terminal8x12 => Some(TERMINAL_8X12),
            #[cfg(feature = "font-12x16")]
            FontTier::Terminal12x16 => Some(TERMINAL_12X16),
            #[cfg(feature = "font-16x24")]
            FontTier::Terminal16x24 => Some(TERMINAL_16X24),
            _ => None,
        }
    }

    /// Whether the table of this tier is part of the build.
    pub fn is_linked(self) -> bool {
        self.table().is_some()
    }

    /// Descriptor of this tier.
    ///
    /// # Errors
    ///
    /// Returns `TierUnavailable` if the tier's feature is disabled.
    pub fn descriptor(self) -> FontResult<FontDescriptor<'static>> {
        let Some(table) = self.table() else {
            return Err(FontError::TierUnavailable(self));
        };
        let (width, height) = self.cell_size();
        Ok(FontDescriptor::fixed(self.name(), width, height, table))
    }
}

impl Display for FontTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Largest built-in tier to seed, as a tier count: 0 seeds none, 4 all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MaxFontSize(u8);

impl MaxFontSize {
    pub const NONE: MaxFontSize = MaxFontSize(0);
    pub const ALL: MaxFontSize = MaxFontSize(TIER_COUNT as u8);

    /// # Errors
    ///
    /// Returns `InvalidMaxFontSize` for values above 4.
    pub fn new(size: u8) -> FontResult<Self> {
        if size as usize > TIER_COUNT {
            return Err(FontError::InvalidMaxFontSize(size));
        }
        Ok(MaxFontSize(size))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Tiers up to this size that are linked into the build.
    pub fn tiers(self) -> impl Iterator<Item = FontTier> {
        FontTier::ALL.into_iter().take(self.0 as usize).filter(|tier| tier.is_linked())
    }
}

impl TryFrom<u8> for MaxFontSize {
    type Error = FontError;

    fn try_from(value: u8) -> FontResult<Self> {
        MaxFontSize::new(value)
    }
}

impl From<MaxFontSize> for u8 {
    fn from(value: MaxFontSize) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tier_descriptors() {
        for tier in FontTier::ALL {
            let Ok(font) = tier.descriptor() else {
                assert!(!tier.is_linked());
                continue;
            };
            let (width, height) = tier.cell_size();
            assert_eq!(font.nominal_width(), width);
            assert_eq!(font.height(), height);
            assert_eq!(font.first(), 32);
            assert_eq!(font.last(), 255);
            assert!(font.validate().is_ok(), "{tier} does not validate");
            assert_eq!(font.table().len(), font.required_table_len());
        }
    }

    #[cfg(feature = "font-6x8")]
    #[test]
    fn test_small_glyphs() {
        let font = FontTier::Terminal6x8.descriptor().unwrap();
        assert_eq!(font.glyph_bytes(b'A'), &[0x7C, 0x12, 0x11, 0x12, 0x7C, 0x00]);
        assert_eq!(font.glyph_bytes(b'0'), &[0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00]);
        assert!(font.glyph_bytes(b' ').iter().all(|b| *b == 0));
    }

    #[test]
    fn test_extended_cells_are_blank() {
        for tier in FontTier::ALL.into_iter().filter(|tier| tier.is_linked()) {
            let font = tier.descriptor().unwrap();
            for ch in 128..=255u8 {
                let glyph = font.glyph_bytes(ch);
                assert_eq!(glyph.len(), font.glyph_len(ch));
                assert!(glyph.iter().all(|b| *b == 0), "{tier} has ink at {ch}");
            }
            assert!(font.glyph_bytes(b'A').iter().any(|b| *b != 0), "{tier} has no 'A'");
        }
    }

    #[test]
    fn test_max_font_size() {
        assert!(MaxFontSize::new(4).is_ok());
        assert!(matches!(MaxFontSize::new(5), Err(FontError::InvalidMaxFontSize(5))));
        assert_eq!(MaxFontSize::NONE.tiers().count(), 0);
        let linked = FontTier::ALL.iter().filter(|t| t.is_linked()).count();
        assert_eq!(MaxFontSize::ALL.tiers().count(), linked);
    }
}
