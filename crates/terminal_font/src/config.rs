use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{FontResult, MaxFontSize, SpacingPolicy, DEFAULT_SPACING};

/// Runtime font settings, usually read from a `fonts.toml`.
///
/// ```toml
/// max_font_size = 2
/// spacing_x = 1
/// spacing_y = 2
/// solid = false
/// default_font = 1
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FontConfig {
    #[serde(default = "default_max_font_size")]
    pub max_font_size: MaxFontSize,
    #[serde(default = "default_spacing")]
    pub spacing_x: u8,
    #[serde(default = "default_spacing")]
    pub spacing_y: u8,
    #[serde(default = "default_solid")]
    pub solid: bool,
    #[serde(default)]
    pub default_font: usize,
}

fn default_max_font_size() -> MaxFontSize {
    MaxFontSize::ALL
}

fn default_spacing() -> u8 {
    DEFAULT_SPACING
}

fn default_solid() -> bool {
    true
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            max_font_size: default_max_font_size(),
            spacing_x: DEFAULT_SPACING,
            spacing_y: DEFAULT_SPACING,
            solid: true,
            default_font: 0,
        }
    }
}

impl FontConfig {
    /// # Errors
    ///
    /// Returns `Config` if `txt` is not valid TOML or a value is out of range.
    pub fn from_toml_str(txt: &str) -> FontResult<Self> {
        Ok(toml::from_str(txt)?)
    }

    /// # Errors
    ///
    /// Returns `Io` if the file can't be read, `Config` if it doesn't parse.
    pub fn load(path: &Path) -> FontResult<Self> {
        let txt = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&txt)?;
        log::debug!("font configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn spacing(&self) -> SpacingPolicy {
        SpacingPolicy::new(self.spacing_x, self.spacing_y, self.solid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FontError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(FontConfig::from_toml_str("").unwrap(), FontConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let config = FontConfig::from_toml_str("max_font_size = 2\nspacing_x = 3\nsolid = false\ndefault_font = 1\n").unwrap();
        assert_eq!(config.max_font_size.get(), 2);
        assert_eq!(config.spacing(), SpacingPolicy::new(3, 1, false));
        assert_eq!(config.default_font, 1);
    }

    #[test]
    fn test_reject_invalid_max_font_size() {
        let result = FontConfig::from_toml_str("max_font_size = 9");
        assert!(matches!(result, Err(FontError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = FontConfig::load(Path::new("does/not/exist/fonts.toml"));
        assert!(matches!(result, Err(FontError::Io(_))));
    }
}
