//! The font service a display driver owns.
//!
//! `FontService` bundles the registry and the spacing policy behind one
//! interface. A renderer either holds it directly or is written against the
//! `GlyphSource` trait.

use crate::{
    BitmapAccessor, FontConfig, FontDescriptor, FontKind, FontMetrics, FontRegistry, FontResult, MaxFontSize, SpacingPolicy, MAX_FONTS,
};

/// What a renderer needs to lay out and draw text.
pub trait GlyphSource {
    /// Width of `ch` including horizontal spacing, see [`FontMetrics::character_width`].
    fn character_width(&self, ch: u8) -> u16;

    /// Line height including vertical spacing.
    fn character_height(&self) -> u16;

    /// Number of bitmap columns of `ch`, spacing excluded.
    fn glyph_columns(&self, ch: u8) -> usize;

    /// Rows of the font bitmap, spacing excluded. Bits of the last column
    /// byte past this height are padding.
    fn glyph_height(&self) -> usize;

    fn bytes_per_column(&self) -> usize;

    /// Byte `index` of the glyph of `ch`, 0 when out of range.
    fn glyph_byte(&self, ch: u8, index: usize) -> u8;

    /// All bytes of the glyph of `ch`, empty when `ch` is not covered.
    fn glyph_bytes(&self, ch: u8) -> &[u8];

    fn spacing(&self) -> SpacingPolicy;
}

#[derive(Debug, Clone, Default)]
pub struct FontService<'a, const N: usize = MAX_FONTS> {
    registry: FontRegistry<'a, N>,
    spacing: SpacingPolicy,
}

impl<'a, const N: usize> FontService<'a, N> {
    /// Service without fonts and with default spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Service seeded with the built-in tiers up to `max_font_size`.
    pub fn with_built_in(max_font_size: MaxFontSize) -> Self {
        Self {
            registry: FontRegistry::with_built_in(max_font_size),
            spacing: SpacingPolicy::default(),
        }
    }

    /// Seeds the built-in tiers, applies the spacing settings and selects
    /// `default_font`. An unknown default font falls back to the first one.
    pub fn from_config(config: &FontConfig) -> Self {
        let mut service = Self {
            registry: FontRegistry::with_built_in(config.max_font_size),
            spacing: config.spacing(),
        };
        if config.default_font != 0 && service.select_font(config.default_font).is_err() {
            log::warn!("default font {} unavailable, using font 0", config.default_font);
        }
        service
    }

    /// Re-seeds the registry; spacing settings are kept.
    pub fn initialize(&mut self, max_font_size: MaxFontSize) {
        self.registry.initialize(max_font_size);
    }

    // === Selection ===

    /// # Errors
    ///
    /// Returns `IndexOutOfRange` and keeps the active font if `index` is not
    /// registered.
    pub fn select_font(&mut self, index: usize) -> FontResult<()> {
        self.registry.select_font(index)
    }

    pub fn select_font_clamped(&mut self, index: usize) -> Option<usize> {
        self.registry.select_font_clamped(index)
    }

    /// # Errors
    ///
    /// Returns `RegistryFull` or the descriptor's validation error.
    pub fn add_font(&mut self, font: FontDescriptor<'a>) -> FontResult<usize> {
        self.registry.add_font(font)
    }

    pub fn font_count(&self) -> usize {
        self.registry.font_count()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.registry.active_index()
    }

    pub fn active_descriptor(&self) -> Option<&FontDescriptor<'a>> {
        self.registry.active_descriptor()
    }

    pub fn registry(&self) -> &FontRegistry<'a, N> {
        &self.registry
    }

    // === Layout ===

    pub fn metrics(&self) -> FontMetrics<'_, 'a> {
        FontMetrics::new(self.active_descriptor(), self.spacing)
    }

    pub fn character_width(&self, ch: u8) -> u16 {
        self.metrics().character_width(ch)
    }

    pub fn character_height(&self) -> u16 {
        self.metrics().character_height()
    }

    pub fn string_width(&self, text: impl AsRef<[u8]>) -> u16 {
        self.metrics().string_width(text)
    }

    pub fn fit_length(&self, text: impl AsRef<[u8]>, pixels: u16) -> usize {
        self.metrics().fit_length(text, pixels)
    }

    // === Pixel data ===

    pub fn bitmap(&self) -> BitmapAccessor<'_, 'a> {
        BitmapAccessor::new(self.active_descriptor())
    }

    pub fn glyph_byte(&self, ch: u8, index: usize) -> u8 {
        self.bitmap().glyph_byte(ch, index)
    }

    // === Presentation flags ===

    pub fn set_horizontal_spacing(&mut self, pixels: u8) {
        self.spacing.set_horizontal_spacing(pixels);
    }

    pub fn set_vertical_spacing(&mut self, pixels: u8) {
        self.spacing.set_vertical_spacing(pixels);
    }

    pub fn set_solid(&mut self, solid: bool) {
        self.spacing.set_solid(solid);
    }

    pub fn is_solid(&self) -> bool {
        self.spacing.is_solid()
    }

    // === Metadata ===

    /// Kind of the active font, empty without one.
    pub fn font_kind(&self) -> FontKind {
        self.active_descriptor().map_or(FontKind::empty(), FontDescriptor::kind)
    }

    /// Widest glyph of the active font, 0 without one.
    pub fn max_glyph_width(&self) -> u8 {
        self.active_descriptor().map_or(0, FontDescriptor::max_width)
    }
}

impl<const N: usize> GlyphSource for FontService<'_, N> {
    fn character_width(&self, ch: u8) -> u16 {
        FontService::character_width(self, ch)
    }

    fn character_height(&self) -> u16 {
        FontService::character_height(self)
    }

    fn glyph_columns(&self, ch: u8) -> usize {
        self.active_descriptor()
            .and_then(|font| font.glyph_width(ch))
            .map_or(0, usize::from)
    }

    fn glyph_height(&self) -> usize {
        self.active_descriptor().map_or(0, |font| usize::from(font.height()))
    }

    fn bytes_per_column(&self) -> usize {
        self.bitmap().bytes_per_column()
    }

    fn glyph_byte(&self, ch: u8, index: usize) -> u8 {
        FontService::glyph_byte(self, ch, index)
    }

    fn glyph_bytes(&self, ch: u8) -> &[u8] {
        self.active_descriptor().map_or(&[][..], |font| font.glyph_bytes(ch))
    }

    fn spacing(&self) -> SpacingPolicy {
        self.spacing
    }
}
