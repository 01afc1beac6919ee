//! Named palette slots and the HSL values that fill them.
//!
//! A [`Palette`] is a fixed table: every [`Slot`] always has a color, so
//! lookups by slot cannot fail. Lookups by *name* go through
//! [`Slot::from_str`] and surface unknown names as errors.

use std::fmt;
use std::str::FromStr;

use swatch_color::{Hsl, Rgb};

use crate::error::ThemeError;

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// A semantic color role in a theme palette.
///
/// Foreground slots pair with the surface of the same name: text drawn on
/// `primary` uses `primary_foreground`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
}

impl Slot {
    /// Number of slots in a palette.
    pub const COUNT: usize = 19;

    /// Every slot, in palette order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Background,
        Self::Foreground,
        Self::Card,
        Self::CardForeground,
        Self::Popover,
        Self::PopoverForeground,
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Muted,
        Self::MutedForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Destructive,
        Self::DestructiveForeground,
        Self::Border,
        Self::Input,
        Self::Ring,
    ];

    /// The `snake_case` name used in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "card_foreground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popover_foreground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary_foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary_foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted_foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent_foreground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructive_foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = ThemeError;

    /// Accepts `snake_case` or `kebab-case` (`muted-foreground`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|slot| slot.name() == normalized)
            .ok_or_else(|| ThemeError::UnknownSlot { name: s.to_owned() })
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// One HSL color per [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [Hsl; Slot::COUNT],
}

impl Palette {
    /// Build a palette from colors listed in [`Slot::ALL`] order.
    #[must_use]
    pub const fn from_array(colors: [Hsl; Slot::COUNT]) -> Self {
        Self { colors }
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, slot: Slot) -> Hsl {
        self.colors[slot.index()]
    }

    #[inline]
    pub const fn set(&mut self, slot: Slot, color: Hsl) {
        self.colors[slot.index()] = color;
    }

    /// The slot's color as `#rrggbb`.
    #[must_use]
    pub fn hex(&self, slot: Slot) -> String {
        self.get(slot).to_hex()
    }

    #[must_use]
    pub fn rgb(&self, slot: Slot) -> Rgb {
        self.get(slot).to_rgb()
    }

    /// Iterate `(slot, color)` pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Hsl)> + '_ {
        Slot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
