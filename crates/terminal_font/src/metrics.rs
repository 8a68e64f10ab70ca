//! Pixel extents of characters and strings.
//!
//! Horizontal spacing belongs to each character: a character is as wide as
//! its glyph plus `spacing_x`, and a string is the plain sum of its
//! characters, trailing gap included. Heights work the same way with
//! `spacing_y`. Without an active font every extent is 0.

use crate::{FontDescriptor, SpacingPolicy};

/// Character code asking for the nominal width.
pub const NOMINAL_CHARACTER: u8 = 0x00;

#[derive(Debug, Clone, Copy)]
pub struct FontMetrics<'r, 'a> {
    font: Option<&'r FontDescriptor<'a>>,
    spacing: SpacingPolicy,
}

impl<'r, 'a> FontMetrics<'r, 'a> {
    pub fn new(font: Option<&'r FontDescriptor<'a>>, spacing: SpacingPolicy) -> Self {
        Self { font, spacing }
    }

    /// Width of `ch` including horizontal spacing.
    ///
    /// `NOMINAL_CHARACTER` yields the general width of the font. Characters
    /// the font does not cover measure at the general width too, they render
    /// as blank cells.
    pub fn character_width(&self, ch: u8) -> u16 {
        let Some(font) = self.font else {
            return 0;
        };
        let width = if ch == NOMINAL_CHARACTER {
            font.nominal_width()
        } else {
            font.glyph_width(ch).unwrap_or(font.nominal_width())
        };
        u16::from(width) + u16::from(self.spacing.spacing_x())
    }

    /// Line height including vertical spacing.
    pub fn character_height(&self) -> u16 {
        self.font
            .map_or(0, |font| u16::from(font.height()) + u16::from(self.spacing.spacing_y()))
    }

    /// Sum of the character widths of `text`, saturating at `u16::MAX`.
    pub fn string_width(&self, text: impl AsRef<[u8]>) -> u16 {
        text.as_ref()
            .iter()
            .fold(0u16, |width, ch| width.saturating_add(self.character_width(*ch)))
    }

    /// Number of leading characters of `text` that fit into `pixels`.
    ///
    /// Stops at the first character that would overflow the budget. The
    /// running total saturates at `u16::MAX` like [`Self::string_width`], so
    /// a string always fits into its own width.
    pub fn fit_length(&self, text: impl AsRef<[u8]>, pixels: u16) -> usize {
        if self.font.is_none() {
            return 0;
        }
        let mut used = 0u16;
        let mut count = 0;
        for ch in text.as_ref() {
            used = used.saturating_add(self.character_width(*ch));
            if used > pixels {
                break;
            }
            count += 1;
        }
        count
    }

    pub fn font(&self) -> Option<&'r FontDescriptor<'a>> {
        self.font
    }

    pub fn spacing(&self) -> SpacingPolicy {
        self.spacing
    }
}
