/// Default gap between two characters, in pixels.
pub const DEFAULT_SPACING: u8 = 1;

/// Inter-character spacing and opacity.
///
/// Spacing is folded into the character metrics; the solid flag is only
/// stored here and honoured by the renderer: opaque text overwrites the
/// background pixels of a glyph, transparent text leaves them untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacingPolicy {
    spacing_x: u8,
    spacing_y: u8,
    solid: bool,
}

impl Default for SpacingPolicy {
    fn default() -> Self {
        Self {
            spacing_x: DEFAULT_SPACING,
            spacing_y: DEFAULT_SPACING,
            solid: true,
        }
    }
}

impl SpacingPolicy {
    pub fn new(spacing_x: u8, spacing_y: u8, solid: bool) -> Self {
        Self { spacing_x, spacing_y, solid }
    }

    /// Pixels added after every character.
    pub fn spacing_x(&self) -> u8 {
        self.spacing_x
    }

    /// Pixels added below every line.
    pub fn spacing_y(&self) -> u8 {
        self.spacing_y
    }

    pub fn is_solid(&self) -> bool {
        self.solid
    }

    pub fn set_horizontal_spacing(&mut self, pixels: u8) {
        self.spacing_x = pixels;
    }

    pub fn set_vertical_spacing(&mut self, pixels: u8) {
        self.spacing_y = pixels;
    }

    pub fn set_solid(&mut self, solid: bool) {
        self.solid = solid;
    }
}
