//! Commands applied to a [`Desktop`](crate::Desktop), and scripts of them.

use std::path::Path;

use retro_types::error::{DesktopError, Result};
use retro_types::input::{HitTarget, InputEvent, Key};
use serde::{Deserialize, Serialize};

/// One unit of work for the desktop's apply loop.
///
/// Every pointer, keyboard, timer, and UI-button callback becomes one of
/// these, and they are applied strictly in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    /// Launch an application, or focus it if already open.
    Open { id: String },
    Close { id: String },
    Minimize { id: String },
    Restore { id: String },
    Focus { id: String },
    /// Taskbar button: restore if minimized, else focus.
    TaskbarClick { id: String },
    /// Start button.
    ToggleStartMenu,
    CloseStartMenu,
    /// Start menu entry: open the application and close the menu.
    StartMenuSelect { id: String },
    PointerDown { x: i32, y: i32, target: HitTarget },
    PointerMove { x: i32, y: i32 },
    PointerUp,
    /// Host surface lost focus. Clears any drag or resize.
    Blur,
    KeyDown { key: Key },
    /// Wall-clock time passed.
    Elapse { ms: u64 },
    /// Snake window's Start / New Game button.
    StartGame,
    /// Snake window's Pause button.
    TogglePause,
}

impl Command {
    /// Translate an input event. `Quit` has no command.
    pub fn from_input(event: &InputEvent) -> Option<Self> {
        Some(match event {
            InputEvent::PointerDown { x, y, target } => Self::PointerDown {
                x: *x,
                y: *y,
                target: target.clone(),
            },
            InputEvent::PointerMove { x, y } => Self::PointerMove { x: *x, y: *y },
            InputEvent::PointerUp => Self::PointerUp,
            InputEvent::KeyDown { key } => Self::KeyDown { key: *key },
            InputEvent::FocusLost => Self::Blur,
            InputEvent::Quit => return None,
        })
    }
}

/// An ordered list of commands loaded from JSON or TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Script {
    /// Parse a JSON script: either `{"commands": [...]}` or a bare array.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        let script = if value.is_array() {
            Self {
                commands: serde_json::from_value(value)?,
            }
        } else {
            serde_json::from_value(value)?
        };
        Ok(script)
    }

    /// Parse a TOML script made of `[[commands]]` tables.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a script, picking the format from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("toml") => Self::from_toml_str(&text),
            other => Err(DesktopError::Script(format!(
                "unsupported script extension {other:?} for {}",
                path.display()
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
