//! Error types for the retro desktop.

use std::io;

/// Errors produced by the retro desktop crates.
///
/// Ordinary misuse (closing a window that is not open, moving a missing
/// window) is never an error. These variants only cover loading input from
/// outside the process.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    #[error("config error: {0}")]
    Config(String),

    #[error("script error: {0}")]
    Script(String),

    #[error("unknown application: {0}")]
    UnknownApp(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DesktopError>;
