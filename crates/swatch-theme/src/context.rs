//! The active theme, owned by whoever renders with it.
//!
//! There is no process-wide "current theme". A host creates a
//! [`ThemeContext`], hands `&ThemeContext` to whatever draws, and calls
//! [`ThemeContext::switch`] when the user changes themes. Two contexts
//! never observe each other, which keeps tests and multi-window hosts
//! isolated.

use tracing::{debug, info};

use crate::palette::Slot;
use crate::theme::{Role, Theme};

/// A theme plus its rendered stylesheet, kept in sync.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    theme: Theme,
    stylesheet: String,
    generation: u64,
}

impl ThemeContext {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let stylesheet = theme.stylesheet().render();
        debug!(theme = %theme.name, bytes = stylesheet.len(), "theme context created");
        Self {
            theme,
            stylesheet,
            generation: 0,
        }
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The rendered stylesheet for the active theme.
    #[must_use]
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Incremented on every switch. Hosts compare it to decide whether to
    /// re-apply styles.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn color(&self, slot: Slot) -> String {
        self.theme.color(slot)
    }

    #[must_use]
    pub fn role_color(&self, role: Role) -> String {
        self.theme.role_color(role)
    }

    /// Every toolkit role with its hex color, in [`Role::ALL`] order.
    #[must_use]
    pub fn roles(&self) -> Vec<(Role, String)> {
        Role::ALL
            .into_iter()
            .map(|role| (role, self.role_color(role)))
            .collect()
    }

    /// Replace the active theme and re-render its stylesheet. Returns the
    /// previous theme.
    pub fn switch(&mut self, theme: Theme) -> Theme {
        let stylesheet = theme.stylesheet().render();
        info!(from = %self.theme.name, to = %theme.name, "switching theme");
        self.stylesheet = stylesheet;
        self.generation += 1;
        std::mem::replace(&mut self.theme, theme)
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
