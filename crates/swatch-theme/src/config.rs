//! Theme overrides loaded from JSON.
//!
//! A config names a builtin base and overrides any subset of slots and
//! scales:
//!
//! ```json
//! {
//!   "base": "dark",
//!   "name": "dusk",
//!   "colors": { "primary": [262.1, 83.3, 57.8], "ring": [262.1, 83.3, 57.8] },
//!   "radius": { "md": 6 }
//! }
//! ```
//!
//! Every overridden color is range-checked, so a typo like `[210, 400, 98]`
//! is reported instead of silently producing white.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use swatch_color::Hsl;
use tracing::debug;

use crate::builtin::builtin_theme;
use crate::error::{Result, ThemeError};
use crate::palette::Slot;
use crate::theme::{Radius, Spacing, Theme};

fn default_base() -> String {
    "default".to_owned()
}

/// Deserialized theme config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Builtin theme to start from.
    #[serde(default = "default_base")]
    pub base: String,
    /// Name for the resulting theme; defaults to the base name.
    #[serde(default)]
    pub name: Option<String>,
    /// Slot name → `[h, s, l]`.
    #[serde(default)]
    pub colors: BTreeMap<String, Hsl>,
    #[serde(default)]
    pub radius: Option<Radius>,
    #[serde(default)]
    pub spacing: Option<Spacing>,
}

impl ThemeConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Json`] if the text is not a valid config.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Io`] if the file cannot be read, [`ThemeError::Json`]
    /// if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_owned(),
            source,
        })?;
        debug!(path = %path.display(), "loaded theme config");
        Self::from_json(&text)
    }

    /// Resolve the base theme and apply overrides.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownBase`], [`ThemeError::UnknownSlot`], or
    /// [`ThemeError::InvalidColor`] for an out-of-range override.
    pub fn into_theme(self) -> Result<Theme> {
        let mut theme = builtin_theme(&self.base)
            .ok_or_else(|| ThemeError::UnknownBase { name: self.base.clone() })?;

        for (name, color) in self.colors {
            let slot: Slot = name.parse()?;
            color.try_to_rgb().map_err(|source| ThemeError::InvalidColor {
                slot: name.clone(),
                source,
            })?;
            debug!(%slot, %color, "override");
            theme.palette.set(slot, color);
        }
        if let Some(radius) = self.radius {
            theme.radius = radius;
        }
        if let Some(spacing) = self.spacing {
            theme.spacing = spacing;
        }
        if let Some(name) = self.name {
            theme.name = name;
        }
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_object_is_default_theme() {
        let theme = ThemeConfig::from_json("{}").unwrap().into_theme().unwrap();
        assert_eq!(theme, Theme::light());
    }

    #[test]
    fn overrides_apply_on_top_of_base() {
        let json = r#"{
            "base": "dark",
            "name": "dusk",
            "colors": { "primary": [262.1, 83.3, 57.8], "muted-foreground": [0, 0, 50] },
            "radius": { "md": 6 }
        }"#;
        let theme = ThemeConfig::from_json(json).unwrap().into_theme().unwrap();

        assert_eq!(theme.name, "dusk");
        assert!(theme.is_dark);
        assert_eq!(theme.palette.get(Slot::Primary), Hsl::new(262.1, 83.3, 57.8));
        assert_eq!(theme.color(Slot::MutedForeground), "#7f7f7f");
        assert_eq!(theme.radius, Radius { sm: 6, md: 6, lg: 12 });
        assert_eq!(theme.spacing, Spacing::default());
        assert_eq!(theme.color(Slot::Background), Theme::dark().color(Slot::Background));
    }

    #[test]
    fn unknown_base_is_reported() {
        let err = ThemeConfig::from_json(r#"{ "base": "sepia" }"#)
            .unwrap()
            .into_theme()
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownBase { ref name } if name == "sepia"));
        assert!(err.to_string().contains("light"));
    }

    #[test]
    fn unknown_slot_is_reported() {
        let err = ThemeConfig::from_json(r#"{ "colors": { "sidebar": [0, 0, 0] } }"#)
            .unwrap()
            .into_theme()
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownSlot { .. }));
    }

    #[test]
    fn out_of_range_color_is_reported() {
        let err = ThemeConfig::from_json(r#"{ "colors": { "ring": [210, 400, 98] } }"#)
            .unwrap()
            .into_theme()
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { ref slot, .. } if slot == "ring"));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            ThemeConfig::from_json(r#"{ "colors": { "ring": "blue" } }"#),
            Err(ThemeError::Json(_))
        ));
        assert!(matches!(
            ThemeConfig::from_json(r#"{ "colour": {} }"#),
            Err(ThemeError::Json(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("swatch-theme-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(br#"{ "base": "dark", "spacing": { "xl": 40 } }"#).unwrap();
        drop(file);

        let theme = ThemeConfig::load(&path).unwrap().into_theme().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(theme.name, "dark");
        assert_eq!(theme.spacing.xl, 40);
        assert_eq!(theme.spacing.md, 16);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ThemeConfig::load("/nonexistent/swatch/theme.json").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = ThemeConfig {
            base: "light".to_owned(),
            name: None,
            colors: BTreeMap::from([("ring".to_owned(), Hsl::new(1.0, 2.0, 3.0))]),
            radius: None,
            spacing: None,
        };
        let text = serde_json::to_string(&config).unwrap();
        assert!(text.contains(r#""ring":[1.0,2.0,3.0]"#), "{text}");
        assert_eq!(ThemeConfig::from_json(&text).unwrap(), config);
    }
}
