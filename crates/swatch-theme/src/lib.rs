//! # swatch-theme: palette themes and stylesheet generation
//!
//! Themes are authored as HSL palettes and flattened to hex at the edges.
//!
//! # Architecture
//!
//! ```text
//! builtin.rs / config.rs:  pick a base theme, apply JSON overrides
//!     │
//!     ▼
//! theme.rs:      Theme = Palette (19 HSL slots) + radius + spacing scales
//!     │
//!     ▼
//! stylesheet.rs: Theme → ordered Rules → QSS/CSS text
//!     │
//!     ▼
//! context.rs:    ThemeContext owns the active theme and its stylesheet
//! ```
//!
//! Nothing here is global. A host owns its [`ThemeContext`] and passes it
//! to whatever draws.

pub mod builtin;
pub mod config;
pub mod context;
pub mod error;
pub mod palette;
pub mod stylesheet;
pub mod theme;

pub use builtin::{builtin_names, builtin_theme};
pub use config::ThemeConfig;
pub use context::ThemeContext;
pub use error::{Result, ThemeError};
pub use palette::{Palette, Slot};
pub use stylesheet::{PseudoState, Rule, Stylesheet};
pub use theme::{Radius, Role, Spacing, Theme};
