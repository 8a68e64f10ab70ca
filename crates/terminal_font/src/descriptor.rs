//! Bitmap font descriptors.
//!
//! A descriptor points at an immutable glyph table and carries the metadata
//! needed to index into it. Glyphs are stored column by column: every column
//! takes `ceil(height / 8)` bytes, one byte per 8 vertical pixels, and the
//! columns of a glyph follow each other. The descriptor never reinterprets
//! those bytes, it only computes where a glyph starts and how long it is.

use bitflags::bitflags;

use crate::{FontError, FontResult};

/// First character code a font may cover.
pub const FIRST_CHARACTER: u8 = 32;
/// Last character code a font may cover.
pub const LAST_CHARACTER: u8 = 255;
/// Last character code of the 7 bit range.
const LAST_ASCII: u8 = 127;

bitflags! {
    /// Font category reported by `font_kind()`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FontKind: u8 {
        /// Every character has its own width.
        const PROPORTIONAL = 0x01;
        /// Covers codes above 127.
        const EXTENDED = 0x02;
        /// Registered at runtime with `add_font`.
        const CUSTOM = 0x04;
    }
}

/// Glyph widths of a font, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphWidths<'a> {
    /// All glyphs share one width.
    Fixed(u8),
    /// One entry per character code from `first` to `last`.
    Proportional(&'a [u8]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontDescriptor<'a> {
    name: &'a str,
    first: u8,
    last: u8,
    height: u8,
    nominal_width: u8,
    max_width: u8,
    widths: GlyphWidths<'a>,
    kind: FontKind,
    table: &'a [u8],
}

impl<'a> FontDescriptor<'a> {
    /// Creates a fixed width font covering 32..=255.
    pub const fn fixed(name: &'a str, width: u8, height: u8, table: &'a [u8]) -> Self {
        Self {
            name,
            first: FIRST_CHARACTER,
            last: LAST_CHARACTER,
            height,
            nominal_width: width,
            max_width: width,
            widths: GlyphWidths::Fixed(width),
            kind: FontKind::EXTENDED,
            table,
        }
    }

    /// Creates a proportional font covering 32..=255.
    ///
    /// `nominal_width` is the indicative width reported for character `0`,
    /// `widths` holds one entry per character code.
    pub fn proportional(name: &'a str, nominal_width: u8, height: u8, widths: &'a [u8], table: &'a [u8]) -> Self {
        Self {
            name,
            first: FIRST_CHARACTER,
            last: LAST_CHARACTER,
            height,
            nominal_width,
            max_width: widths.iter().copied().max().unwrap_or(0),
            widths: GlyphWidths::Proportional(widths),
            kind: FontKind::PROPORTIONAL | FontKind::EXTENDED,
            table,
        }
    }

    /// Restricts the covered character codes to `first..=last`.
    pub fn with_range(mut self, first: u8, last: u8) -> Self {
        self.first = first;
        self.last = last;
        self.kind.set(FontKind::EXTENDED, last > LAST_ASCII);
        self
    }

    pub(crate) fn into_custom(mut self) -> Self {
        self.kind |= FontKind::CUSTOM;
        self
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn first(&self) -> u8 {
        self.first
    }

    pub fn last(&self) -> u8 {
        self.last
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// General width; indicative only for proportional fonts.
    pub fn nominal_width(&self) -> u8 {
        self.nominal_width
    }

    pub fn max_width(&self) -> u8 {
        self.max_width
    }

    pub fn widths(&self) -> GlyphWidths<'a> {
        self.widths
    }

    pub fn kind(&self) -> FontKind {
        self.kind
    }

    pub fn is_proportional(&self) -> bool {
        matches!(self.widths, GlyphWidths::Proportional(_))
    }

    pub fn table(&self) -> &'a [u8] {
        self.table
    }

    /// Number of character codes covered.
    pub fn char_count(&self) -> usize {
        if self.last < self.first {
            0
        } else {
            (self.last - self.first) as usize + 1
        }
    }

    #[inline]
    pub fn contains(&self, ch: u8) -> bool {
        ch >= self.first && ch <= self.last
    }

    /// Bytes per glyph column, one per started block of 8 rows.
    #[inline]
    pub fn bytes_per_column(&self) -> usize {
        (self.height as usize).div_ceil(8)
    }

    /// Width of `ch` in pixels, `None` when `ch` is not covered.
    pub fn glyph_width(&self, ch: u8) -> Option<u8> {
        if !self.contains(ch) {
            return None;
        }
        match self.widths {
            GlyphWidths::Fixed(width) => Some(width),
            GlyphWidths::Proportional(widths) => widths.get((ch - self.first) as usize).copied(),
        }
    }

    /// Length of the glyph of `ch` in bytes, 0 when `ch` is not covered.
    pub fn glyph_len(&self, ch: u8) -> usize {
        self.glyph_width(ch).map_or(0, |width| width as usize * self.bytes_per_column())
    }

    /// Offset of the glyph of `ch` inside the table.
    ///
    /// Constant time for fixed width fonts. Proportional fonts sum the widths
    /// of every preceding glyph, so callers scanning a glyph byte by byte
    /// should take [`Self::glyph_bytes`] once and index the slice.
    pub fn glyph_offset(&self, ch: u8) -> Option<usize> {
        if !self.contains(ch) {
            return None;
        }
        let position = (ch - self.first) as usize;
        let offset = match self.widths {
            GlyphWidths::Fixed(width) => position * width as usize * self.bytes_per_column(),
            GlyphWidths::Proportional(widths) => {
                let columns: usize = widths.iter().take(position).map(|w| *w as usize).sum();
                columns * self.bytes_per_column()
            }
        };
        Some(offset)
    }

    /// Raw bytes of the glyph of `ch`; empty when `ch` is not covered.
    pub fn glyph_bytes(&self, ch: u8) -> &'a [u8] {
        let Some(offset) = self.glyph_offset(ch) else {
            return &[];
        };
        let end = offset + self.glyph_len(ch);
        self.table.get(offset..end).unwrap_or(&[])
    }

    /// Byte `index` of the glyph of `ch`, 0 outside the glyph or the font.
    /// Locates the glyph on every call, see [`Self::glyph_offset`].
    #[inline]
    pub fn glyph_byte(&self, ch: u8, index: usize) -> u8 {
        self.glyph_bytes(ch).get(index).copied().unwrap_or(0)
    }

    /// Table length needed to hold every covered glyph.
    pub fn required_table_len(&self) -> usize {
        let columns = match self.widths {
            GlyphWidths::Fixed(width) => self.char_count() * width as usize,
            GlyphWidths::Proportional(widths) => widths.iter().map(|w| *w as usize).sum(),
        };
        columns * self.bytes_per_column()
    }

    /// Checks the descriptor can be indexed safely.
    ///
    /// # Errors
    ///
    /// Returns the first failed check: empty table, zero height or width,
    /// a range outside 32..=255, a width table of the wrong length or a
    /// glyph table too short for the declared glyphs.
    pub fn validate(&self) -> FontResult<()> {
        if self.table.is_empty() {
            return Err(FontError::EmptyGlyphTable);
        }
        if self.height == 0 {
            return Err(FontError::ZeroHeight);
        }
        if self.first < FIRST_CHARACTER || self.last < self.first {
            return Err(FontError::InvalidRange {
                first: self.first,
                last: self.last,
            });
        }
        match self.widths {
            GlyphWidths::Fixed(0) => return Err(FontError::ZeroWidth),
            GlyphWidths::Fixed(_) => {}
            GlyphWidths::Proportional(widths) => {
                if widths.len() != self.char_count() {
                    return Err(FontError::WidthTableMismatch {
                        expected: self.char_count(),
                        actual: widths.len(),
                    });
                }
                if self.nominal_width == 0 || self.max_width == 0 {
                    return Err(FontError::ZeroWidth);
                }
            }
        }
        let expected = self.required_table_len();
        if self.table.len() < expected {
            return Err(FontError::GlyphTableTooShort {
                expected,
                actual: self.table.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // '!' and '"' of a 3x8 font
    const TINY: [u8; 6] = [0x00, 0x5F, 0x00, 0x07, 0x00, 0x07];

    #[test]
    fn test_fixed_offsets() {
        let font = FontDescriptor::fixed("tiny", 3, 8, &TINY).with_range(33, 34);
        assert_eq!(font.char_count(), 2);
        assert_eq!(font.glyph_offset(33), Some(0));
        assert_eq!(font.glyph_offset(34), Some(3));
        assert_eq!(font.glyph_bytes(33), &[0x00, 0x5F, 0x00]);
        assert_eq!(font.glyph_byte(34, 2), 0x07);
        assert!(font.validate().is_ok());
        assert!(!font.kind().contains(FontKind::EXTENDED));
    }

    #[test]
    fn test_out_of_range_is_blank() {
        let font = FontDescriptor::fixed("tiny", 3, 8, &TINY).with_range(33, 34);
        assert_eq!(font.glyph_offset(32), None);
        assert!(font.glyph_bytes(35).is_empty());
        assert_eq!(font.glyph_byte(0, 0), 0);
        assert_eq!(font.glyph_byte(33, 3), 0);
        assert_eq!(font.glyph_len(200), 0);
    }

    #[test]
    fn test_bytes_per_column() {
        let table = [0u8; 1];
        assert_eq!(FontDescriptor::fixed("a", 1, 8, &table).bytes_per_column(), 1);
        assert_eq!(FontDescriptor::fixed("b", 1, 12, &table).bytes_per_column(), 2);
        assert_eq!(FontDescriptor::fixed("c", 1, 16, &table).bytes_per_column(), 2);
        assert_eq!(FontDescriptor::fixed("d", 1, 24, &table).bytes_per_column(), 3);
    }

    #[test]
    fn test_proportional_offsets() {
        let widths = [1, 3, 2];
        let table = [0x11, 0x21, 0x22, 0x23, 0x31, 0x32];
        let font = FontDescriptor::proportional("prop", 2, 8, &widths, &table).with_range(32, 34);
        assert!(font.is_proportional());
        assert!(font.kind().contains(FontKind::PROPORTIONAL));
        assert_eq!(font.max_width(), 3);
        assert_eq!(font.glyph_offset(34), Some(4));
        assert_eq!(font.glyph_bytes(33), &[0x21, 0x22, 0x23]);
        assert_eq!(font.glyph_byte(34, 1), 0x32);
        assert!(font.validate().is_ok());
    }

    #[test]
    fn test_proportional_last_glyph() {
        let widths: Vec<u8> = (0..224u8).map(|i| i % 7 + 1).collect();
        let columns: usize = widths.iter().map(|w| *w as usize).sum();
        let mut table = vec![0u8; columns * 2];
        let last_width = widths[223] as usize;
        table[(columns - last_width) * 2] = 0xAB;
        let font = FontDescriptor::proportional("prop", 4, 16, &widths, &table);
        assert!(font.validate().is_ok());
        assert_eq!(font.glyph_offset(255), Some((columns - last_width) * 2));
        assert_eq!(font.glyph_bytes(255).len(), last_width * 2);
        assert_eq!(font.glyph_bytes(255)[0], 0xAB);
        assert_eq!(font.glyph_byte(255, 0), 0xAB);
    }

    #[test]
    fn test_validate_rejects() {
        assert!(matches!(
            FontDescriptor::fixed("empty", 6, 8, &[]).validate(),
            Err(FontError::EmptyGlyphTable)
        ));
        assert!(matches!(FontDescriptor::fixed("h", 3, 0, &TINY).validate(), Err(FontError::ZeroHeight)));
        assert!(matches!(FontDescriptor::fixed("w", 0, 8, &TINY).validate(), Err(FontError::ZeroWidth)));
        assert!(matches!(
            FontDescriptor::fixed("r", 3, 8, &TINY).with_range(10, 11).validate(),
            Err(FontError::InvalidRange { first: 10, last: 11 })
        ));
        assert!(matches!(
            FontDescriptor::fixed("short", 3, 8, &TINY).validate(),
            Err(FontError::GlyphTableTooShort { expected: 672, actual: 6 })
        ));
        let widths = [1, 2];
        assert!(matches!(
            FontDescriptor::proportional("p", 1, 8, &widths, &TINY).with_range(32, 34).validate(),
            Err(FontError::WidthTableMismatch { expected: 3, actual: 2 })
        ));
    }
}
