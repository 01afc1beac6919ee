//! Stylesheet generation: palette slots rendered into QSS/CSS rule text.
//!
//! A [`Stylesheet`] is an ordered list of [`Rule`]s. Rendering is
//! deterministic: rules print in insertion order, declarations in the order
//! they were added, so the same theme always yields byte-identical text.
//!
//! ```text
//! QPushButton:hover {
//!     opacity: 0.9;
//! }
//! ```

use std::fmt::{self, Write};

use crate::palette::Slot;
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// PseudoState
// ---------------------------------------------------------------------------

bitflags::bitflags! {
    /// Interaction states a rule applies to, rendered as `:state` suffixes.
    ///
    /// ```
    /// use swatch_theme::stylesheet::PseudoState;
    ///
    /// let state = PseudoState::CHECKED | PseudoState::HOVER;
    /// assert_eq!(state.selector_suffix(), ":hover:checked");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct PseudoState: u8 {
        const HOVER    = 1 << 0;
        const PRESSED  = 1 << 1;
        const DISABLED = 1 << 2;
        const FOCUS    = 1 << 3;
        const CHECKED  = 1 << 4;
        const SELECTED = 1 << 5;
    }
}

impl PseudoState {
    /// `:hover:pressed...` in flag order; empty for no flags.
    #[must_use]
    pub fn selector_suffix(self) -> String {
        self.iter_names()
            .fold(String::new(), |mut out, (name, _)| {
                out.push(':');
                out.push_str(&name.to_ascii_lowercase());
                out
            })
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// One selector block: `selector:state { property: value; ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub state: PseudoState,
    pub declarations: Vec<(String, String)>,
}

impl Rule {
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            state: PseudoState::empty(),
            declarations: Vec::new(),
        }
    }

    /// Restrict the rule to an interaction state.
    #[must_use]
    pub fn on(mut self, state: PseudoState) -> Self {
        self.state = state;
        self
    }

    /// Append a declaration.
    #[must_use]
    pub fn decl(mut self, property: impl Into<String>, value: impl fmt::Display) -> Self {
        self.declarations.push((property.into(), value.to_string()));
        self
    }

    /// Full selector including the state suffix.
    #[must_use]
    pub fn full_selector(&self) -> String {
        format!("{}{}", self.selector, self.state.selector_suffix())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.full_selector())?;
        for (property, value) in &self.declarations {
            writeln!(f, "    {property}: {value};")?;
        }
        f.write_char('}')
    }
}

// ---------------------------------------------------------------------------
// Stylesheet
// ---------------------------------------------------------------------------

/// An ordered collection of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn push(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Find the first rule whose full selector matches.
    #[must_use]
    pub fn rule(&self, full_selector: &str) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|rule| rule.full_selector() == full_selector)
    }

    /// Render to text. Rules are separated by a blank line; output ends
    /// with a newline unless empty.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

impl FromIterator<Rule> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Theme → Stylesheet
// ---------------------------------------------------------------------------

const FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \
                           \"Helvetica Neue\", Arial, sans-serif";

impl Theme {
    /// The base rule set for a whole application: surfaces, buttons, text
    /// inputs, check boxes, tabs, and progress bars.
    #[must_use]
    pub fn stylesheet(&self) -> Stylesheet {
        let c = |slot: Slot| self.color(slot);
        let r = self.radius;
        let sp = self.spacing;
        let padding = format!("{}px {}px", sp.sm, sp.md);

        [
            Rule::new("QWidget")
                .decl("background-color", c(Slot::Background))
                .decl("color", c(Slot::Foreground))
                .decl("font-family", FONT_FAMILY)
                .decl("font-size", "14px"),
            // ── Buttons ───────────────────────────────────────────
            Rule::new("QPushButton")
                .decl("border", format!("1px solid {}", c(Slot::Border)))
                .decl("border-radius", format!("{}px", r.md))
                .decl("padding", &padding)
                .decl("background-color", c(Slot::Primary))
                .decl("color", c(Slot::PrimaryForeground)),
            Rule::new("QPushButton").on(PseudoState::HOVER).decl("opacity", 0.9),
            Rule::new("QPushButton").on(PseudoState::PRESSED).decl("opacity", 0.8),
            Rule::new("QPushButton").on(PseudoState::DISABLED).decl("opacity", 0.5),
            // ── Text input ────────────────────────────────────────
            Rule::new("QLineEdit")
                .decl("border", format!("1px solid {}", c(Slot::Input)))
                .decl("border-radius", format!("{}px", r.md))
                .decl("padding", &padding)
                .decl("background-color", c(Slot::Background))
                .decl("color", c(Slot::Foreground)),
            Rule::new("QLineEdit")
                .on(PseudoState::FOCUS)
                .decl("border", format!("2px solid {}", c(Slot::Ring))),
            // ── Check boxes ───────────────────────────────────────
            Rule::new("QCheckBox")
                .decl("spacing", format!("{}px", sp.sm))
                .decl("color", c(Slot::Foreground)),
            Rule::new("QCheckBox::indicator")
                .decl("width", "16px")
                .decl("height", "16px")
                .decl("border", format!("1px solid {}", c(Slot::Border)))
                .decl("border-radius", "4px")
                .decl("background-color", c(Slot::Background)),
            Rule::new("QCheckBox::indicator")
                .on(PseudoState::CHECKED)
                .decl("background-color", c(Slot::Primary))
                .decl("border-color", c(Slot::Primary)),
            // ── Tabs ──────────────────────────────────────────────
            Rule::new("QTabWidget::pane")
                .decl("border", format!("1px solid {}", c(Slot::Border)))
                .decl("border-radius", format!("{}px", r.md))
                .decl("background-color", c(Slot::Card)),
            Rule::new("QTabBar::tab")
                .decl("background-color", "transparent")
                .decl("color", c(Slot::MutedForeground))
                .decl("padding", &padding)
                .decl("border-bottom", "2px solid transparent"),
            Rule::new("QTabBar::tab")
                .on(PseudoState::SELECTED)
                .decl("color", c(Slot::Foreground))
                .decl("border-bottom", format!("2px solid {}", c(Slot::Primary))),
            Rule::new("QTabBar::tab")
                .on(PseudoState::HOVER)
                .decl("color", c(Slot::Foreground)),
            // ── Progress ──────────────────────────────────────────
            Rule::new("QProgressBar")
                .decl("border", "none")
                .decl("border-radius", format!("{}px", r.lg))
                .decl("background-color", c(Slot::Secondary))
                .decl("text-align", "center")
                .decl("height", "8px"),
            Rule::new("QProgressBar::chunk")
                .decl("background-color", c(Slot::Primary))
                .decl("border-radius", format!("{}px", r.lg)),
        ]
        .into_iter()
        .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
