//! Theme assembly: a palette plus the pixel scales widgets are laid out with.
//!
//! Colors stay in HSL inside the theme and are flattened to hex strings on
//! request, so overriding a slot never leaves a stale hex value behind.

use serde::{Deserialize, Serialize};
use swatch_color::{Hsl, Rgb};

use crate::error::Result;
use crate::palette::{Palette, Slot};

// ---------------------------------------------------------------------------
// Scales
// ---------------------------------------------------------------------------

/// Corner radii in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Radius {
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
}

impl Default for Radius {
    fn default() -> Self {
        Self { sm: 6, md: 8, lg: 12 }
    }
}

/// Spacing steps in pixels, multiples of a 4px base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4,
            sm: 8,
            md: 16,
            lg: 24,
            xl: 32,
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Toolkit-level color roles (window, text, buttons, selection) and the
/// palette slot each one is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Window,
    WindowText,
    Base,
    AlternateBase,
    Text,
    Button,
    ButtonText,
    Highlight,
    HighlightedText,
}

impl Role {
    pub const ALL: [Self; 9] = [
        Self::Window,
        Self::WindowText,
        Self::Base,
        Self::AlternateBase,
        Self::Text,
        Self::Button,
        Self::ButtonText,
        Self::Highlight,
        Self::HighlightedText,
    ];

    /// Snake-case name (`window_text`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::WindowText => "window_text",
            Self::Base => "base",
            Self::AlternateBase => "alternate_base",
            Self::Text => "text",
            Self::Button => "button",
            Self::ButtonText => "button_text",
            Self::Highlight => "highlight",
            Self::HighlightedText => "highlighted_text",
        }
    }

    #[must_use]
    pub const fn slot(self) -> Slot {
        match self {
            Self::Window | Self::Base => Slot::Background,
            Self::WindowText | Self::Text => Slot::Foreground,
            Self::AlternateBase => Slot::Secondary,
            Self::Button | Self::Highlight => Slot::Primary,
            Self::ButtonText | Self::HighlightedText => Slot::PrimaryForeground,
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A complete named theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Name of this theme (e.g., "light", "dark").
    pub name: String,
    /// Whether surfaces are dark and text is light.
    pub is_dark: bool,
    pub palette: Palette,
    pub radius: Radius,
    pub spacing: Spacing,
}

impl Theme {
    /// Slate light theme.
    #[must_use]
    pub fn light() -> Self {
        let ink = Hsl::new(222.2, 84.0, 4.9);
        let paper = Hsl::new(0.0, 0.0, 100.0);
        let navy = Hsl::new(222.2, 47.4, 11.2);
        let snow = Hsl::new(210.0, 40.0, 98.0);
        let mist = Hsl::new(210.0, 40.0, 96.1);
        let line = Hsl::new(214.3, 31.8, 91.4);
        Self::with_palette(
            "light",
            false,
            Palette::from_array([
                paper,                        // background
                ink,                          // foreground
                paper,                        // card
                ink,                          // card_foreground
                paper,                        // popover
                ink,                          // popover_foreground
                navy,                         // primary
                snow,                         // primary_foreground
                mist,                         // secondary
                navy,                         // secondary_foreground
                mist,                         // muted
                Hsl::new(215.4, 16.3, 46.9),  // muted_foreground
                mist,                         // accent
                navy,                         // accent_foreground
                Hsl::new(0.0, 84.2, 60.2),    // destructive
                snow,                         // destructive_foreground
                line,                         // border
                line,                         // input
                ink,                          // ring
            ]),
        )
    }

    /// Slate dark theme.
    #[must_use]
    pub fn dark() -> Self {
        let ink = Hsl::new(222.2, 84.0, 4.9);
        let snow = Hsl::new(210.0, 40.0, 98.0);
        let navy = Hsl::new(222.2, 47.4, 11.2);
        let slate = Hsl::new(217.2, 32.6, 17.5);
        Self::with_palette(
            "dark",
            true,
            Palette::from_array([
                ink,                          // background
                snow,                         // foreground
                ink,                          // card
                snow,                         // card_foreground
                ink,                          // popover
                snow,                         // popover_foreground
                snow,                         // primary
                navy,                         // primary_foreground
                slate,                        // secondary
                snow,                         // secondary_foreground
                slate,                        // muted
                Hsl::new(215.0, 20.2, 65.1),  // muted_foreground
                slate,                        // accent
                snow,                         // accent_foreground
                Hsl::new(0.0, 62.8, 30.6),    // destructive
                snow,                         // destructive_foreground
                slate,                        // border
                slate,                        // input
                Hsl::new(212.7, 26.8, 83.9),  // ring
            ]),
        )
    }

    /// A theme with default radius and spacing scales.
    #[must_use]
    pub fn with_palette(name: impl Into<String>, is_dark: bool, palette: Palette) -> Self {
        Self {
            name: name.into(),
            is_dark,
            palette,
            radius: Radius::default(),
            spacing: Spacing::default(),
        }
    }

    /// The slot's color as `#rrggbb`.
    #[must_use]
    pub fn color(&self, slot: Slot) -> String {
        self.palette.hex(slot)
    }

    /// Look up a slot by its config name and return its hex color.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownSlot`](crate::ThemeError::UnknownSlot) if `name`
    /// is not a palette slot.
    pub fn color_named(&self, name: &str) -> Result<String> {
        Ok(self.color(name.parse()?))
    }

    #[must_use]
    pub fn rgb(&self, slot: Slot) -> Rgb {
        self.palette.rgb(slot)
    }

    /// The hex color backing a toolkit [`Role`].
    #[must_use]
    pub fn role_color(&self, role: Role) -> String {
        self.color(role.slot())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
