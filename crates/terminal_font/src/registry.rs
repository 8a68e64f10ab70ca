//! Registry of available fonts and the active one.

use crate::{FontDescriptor, FontError, FontResult, MaxFontSize, TIER_COUNT};

/// Default registry capacity: every built-in tier plus one custom font.
pub const MAX_FONTS: usize = TIER_COUNT + 1;

/// Fixed capacity font registry.
///
/// Fonts keep their insertion index for the lifetime of the registry, there
/// is no removal. Once a font exists the active index always points at a
/// registered font.
#[derive(Debug, Clone)]
pub struct FontRegistry<'a, const N: usize = MAX_FONTS> {
    fonts: [Option<FontDescriptor<'a>>; N],
    count: usize,
    active: Option<usize>,
}

impl<const N: usize> Default for FontRegistry<'_, N> {
    fn default() -> Self {
        Self {
            fonts: [None; N],
            count: 0,
            active: None,
        }
    }
}

impl<'a, const N: usize> FontRegistry<'a, N> {
    /// Creates an empty registry with no active font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in tiers up to `max_font_size`.
    pub fn with_built_in(max_font_size: MaxFontSize) -> Self {
        let mut registry = Self::new();
        registry.initialize(max_font_size);
        registry
    }

    /// Resets the registry to the built-in tiers up to `max_font_size`.
    ///
    /// The first font becomes active; with no tier the registry stays
    /// without an active font.
    pub fn initialize(&mut self, max_font_size: MaxFontSize) {
        *self = Self::default();
        for tier in max_font_size.tiers() {
            let Ok(font) = tier.descriptor() else {
                continue;
            };
            if self.count >= N {
                log::warn!("font registry full, built-in tier {tier} skipped");
                break;
            }
            self.fonts[self.count] = Some(font);
            self.count += 1;
        }
        self.active = if self.count > 0 { Some(0) } else { None };
        log::debug!("font registry initialized with {} built-in fonts", self.count);
    }

    /// Makes font `index` the active one.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= font_count()`; the active font
    /// is left unchanged.
    pub fn select_font(&mut self, index: usize) -> FontResult<()> {
        if index >= self.count {
            log::warn!("font {index} not selected, {} fonts available", self.count);
            return Err(FontError::IndexOutOfRange { index, count: self.count });
        }
        self.active = Some(index);
        log::debug!("font {index} selected");
        Ok(())
    }

    /// Selects `index`, clamped to the last registered font.
    ///
    /// Returns the index actually selected, `None` if the registry is empty.
    pub fn select_font_clamped(&mut self, index: usize) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let index = index.min(self.count - 1);
        self.active = Some(index);
        Some(index)
    }

    /// Appends a custom font and returns its index.
    ///
    /// The new font only becomes active if no font was active before.
    ///
    /// # Errors
    ///
    /// Returns `RegistryFull` when the capacity is exhausted, or the
    /// validation error of the descriptor.
    pub fn add_font(&mut self, font: FontDescriptor<'a>) -> FontResult<usize> {
        if self.count >= N {
            log::warn!("font '{}' rejected, registry full", font.name());
            return Err(FontError::RegistryFull { capacity: N });
        }
        if let Err(err) = font.validate() {
            log::warn!("font '{}' rejected: {err}", font.name());
            return Err(err);
        }
        let index = self.count;
        self.fonts[index] = Some(font.into_custom());
        self.count += 1;
        if self.active.is_none() {
            self.active = Some(index);
        }
        log::debug!("font '{}' added as {index}", font.name());
        Ok(index)
    }

    /// Number of registered fonts; valid indices are `0..font_count()`.
    pub fn font_count(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_descriptor(&self) -> Option<&FontDescriptor<'a>> {
        self.active.and_then(|index| self.descriptor(index))
    }

    pub fn descriptor(&self, index: usize) -> Option<&FontDescriptor<'a>> {
        self.fonts.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontDescriptor<'a>> {
        self.fonts[..self.count].iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FontKind;
    use pretty_assertions::assert_eq;

    static CUSTOM: [u8; 224 * 10 * 2] = [0xAA; 224 * 10 * 2];

    fn custom() -> FontDescriptor<'static> {
        FontDescriptor::fixed("custom", 10, 16, &CUSTOM)
    }

    #[test]
    fn test_empty_registry() {
        let registry: FontRegistry = FontRegistry::new();
        assert_eq!(registry.font_count(), 0);
        assert_eq!(registry.active_index(), None);
        assert!(registry.active_descriptor().is_none());
    }

    #[test]
    fn test_add_font_on_empty_registry_activates_it() {
        let mut registry: FontRegistry = FontRegistry::with_built_in(MaxFontSize::NONE);
        assert_eq!(registry.add_font(custom()).unwrap(), 0);
        assert_eq!(registry.active_index(), Some(0));
        assert!(registry.active_descriptor().unwrap().kind().contains(FontKind::CUSTOM));
    }

    #[test]
    fn test_capacity() {
        let mut registry: FontRegistry<'_, 2> = FontRegistry::new();
        assert_eq!(registry.add_font(custom()).unwrap(), 0);
        assert_eq!(registry.add_font(custom()).unwrap(), 1);
        assert!(matches!(registry.add_font(custom()), Err(FontError::RegistryFull { capacity: 2 })));
        assert_eq!(registry.font_count(), 2);
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn test_invalid_font_is_not_registered() {
        let mut registry: FontRegistry = FontRegistry::new();
        let font = FontDescriptor::fixed("broken", 10, 0, &CUSTOM);
        assert!(matches!(registry.add_font(font), Err(FontError::ZeroHeight)));
        assert_eq!(registry.font_count(), 0);
        assert_eq!(registry.active_index(), None);
    }

    #[test]
    fn test_select_out_of_range_keeps_active_font() {
        let mut registry: FontRegistry = FontRegistry::new();
        registry.add_font(custom()).unwrap();
        registry.add_font(custom()).unwrap();
        registry.select_font(1).unwrap();

        let result = registry.select_font(7);
        assert!(matches!(result, Err(FontError::IndexOutOfRange { index: 7, count: 2 })));
        assert_eq!(registry.active_index(), Some(1));
    }

    #[test]
    fn test_select_clamped() {
        let mut registry: FontRegistry = FontRegistry::new();
        assert_eq!(registry.select_font_clamped(3), None);
        registry.add_font(custom()).unwrap();
        registry.add_font(custom()).unwrap();
        assert_eq!(registry.select_font_clamped(9), Some(1));
        assert_eq!(registry.select_font_clamped(0), Some(0));
    }

    #[test]
    fn test_small_capacity_truncates_built_in() {
        let registry: FontRegistry<'_, 1> = FontRegistry::with_built_in(MaxFontSize::ALL);
        assert!(registry.font_count() <= 1);
    }
}
