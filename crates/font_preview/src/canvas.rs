//! Off-screen pixel buffer standing in for a display.

use std::fmt::Display;

use terminal_font::GlyphSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    /// Never drawn.
    Background,
    /// Overwritten by an opaque glyph cell.
    Paper,
    Ink,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::Background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Pixel {
        if x >= self.width || y >= self.height {
            return Pixel::Background;
        }
        self.pixels[y * self.width + x]
    }

    fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = pixel;
        }
    }

    /// Draws `text` with its top left corner at (`x`, `y`).
    ///
    /// Glyph columns are read byte by byte, least significant bit on top;
    /// padding bits below the font height are ignored. Opaque text paints
    /// the whole character cell, spacing included; transparent text only
    /// sets ink pixels. Returns the x position after the last character.
    pub fn draw_text<S: GlyphSource>(&mut self, source: &S, x: usize, y: usize, text: &[u8]) -> usize {
        let solid = source.spacing().is_solid();
        let bytes_per_column = source.bytes_per_column();
        let glyph_height = source.glyph_height();
        let cell_height = source.character_height() as usize;

        let mut pen_x = x;
        for &ch in text {
            let cell_width = source.character_width(ch) as usize;
            let columns = source.glyph_columns(ch);
            let glyph = source.glyph_bytes(ch);
            for column in 0..cell_width {
                for row in 0..cell_height {
                    let ink = column < columns
                        && row < glyph_height
                        && glyph.get(column * bytes_per_column + row / 8).is_some_and(|byte| byte & (1 << (row % 8)) != 0);
                    if ink {
                        self.set_pixel(pen_x + column, y + row, Pixel::Ink);
                    } else if solid {
                        self.set_pixel(pen_x + column, y + row, Pixel::Paper);
                    }
                }
            }
            pen_x += cell_width;
        }
        pen_x
    }
}

impl Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = match self.get_pixel(x, y) {
                    Pixel::Background => '·',
                    Pixel::Paper => ' ',
                    Pixel::Ink => '█',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
