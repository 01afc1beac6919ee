//! Theme lookup and config errors.

use std::io;
use std::path::PathBuf;

use swatch_color::ColorError;

/// Everything that can fail while looking up or loading a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown palette slot: {name:?}")]
    UnknownSlot { name: String },

    #[error("unknown base theme: {name:?} (expected one of: {})", crate::builtin::builtin_names().join(", "))]
    UnknownBase { name: String },

    #[error("invalid color for slot `{slot}`")]
    InvalidColor {
        slot: String,
        #[source]
        source: ColorError,
    },

    #[error("could not read theme config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed theme config")]
    Json(#[from] serde_json::Error),
}

/// Result alias for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
