//! Named preset themes: ready-to-use configurations.

use crate::theme::Theme;

/// Look up a builtin theme by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Theme> {
    match name {
        "default" | "light" => Some(Theme::light()),
        "dark" => Some(Theme::dark()),
        _ => None,
    }
}

/// List all available builtin theme names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "light", "dark"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            let theme = builtin_theme(name);
            assert!(theme.is_some(), "Builtin '{name}' failed to resolve");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_theme("nonexistent").is_none());
    }

    #[test]
    fn default_is_light() {
        let a = builtin_theme("default").unwrap();
        let b = builtin_theme("light").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn light_and_dark_are_distinct() {
        let light = builtin_theme("light").unwrap();
        let dark = builtin_theme("dark").unwrap();
        assert_ne!(light.palette, dark.palette);
        assert!(dark.is_dark);
    }
}
