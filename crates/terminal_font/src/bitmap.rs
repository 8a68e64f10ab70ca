//! Raw glyph access for renderers.

use std::fmt::Display;

use crate::FontDescriptor;

/// Bounds checked access to the glyph bytes of the active font.
///
/// Every query is total: characters the font does not cover, indices past
/// the glyph and a missing font all read as blank (0), so a renderer can
/// scan without checking bounds itself.
#[derive(Debug, Clone, Copy)]
pub struct BitmapAccessor<'r, 'a> {
    font: Option<&'r FontDescriptor<'a>>,
}

impl<'r, 'a> BitmapAccessor<'r, 'a> {
    pub fn new(font: Option<&'r FontDescriptor<'a>>) -> Self {
        Self { font }
    }

    /// Byte `index` of the glyph of `ch`.
    #[inline]
    pub fn glyph_byte(&self, ch: u8, index: usize) -> u8 {
        self.font.map_or(0, |font| font.glyph_byte(ch, index))
    }

    /// Number of bytes in the glyph of `ch`.
    pub fn glyph_len(&self, ch: u8) -> usize {
        self.font.map_or(0, |font| font.glyph_len(ch))
    }

    /// Bytes per glyph column.
    pub fn bytes_per_column(&self) -> usize {
        self.font.map_or(0, FontDescriptor::bytes_per_column)
    }

    pub fn preview(&self, ch: u8) -> Option<GlyphPreview<'a>> {
        self.font.map(|font| GlyphPreview::new(font, ch))
    }
}

/// Text rendering of a glyph for logs and diagnostics.
///
/// Reads the table the way the built-in fonts are laid out: column major,
/// least significant bit on top.
#[derive(Debug, Clone, Copy)]
pub struct GlyphPreview<'a> {
    bytes: &'a [u8],
    width: usize,
    height: usize,
    bytes_per_column: usize,
}

impl<'a> GlyphPreview<'a> {
    pub fn new(font: &FontDescriptor<'a>, ch: u8) -> Self {
        Self {
            bytes: font.glyph_bytes(ch),
            width: font.glyph_width(ch).unwrap_or(0) as usize,
            height: font.height() as usize,
            bytes_per_column: font.bytes_per_column(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `false` outside the glyph.
    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.bytes.get(x * self.bytes_per_column + y / 8).copied().unwrap_or(0);
        byte & (1 << (y % 8)) != 0
    }
}

impl Display for GlyphPreview<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", if self.get_pixel(x, y) { '#' } else { '-' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
