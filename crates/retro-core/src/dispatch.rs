//! Keyboard routing.
//!
//! Keys reach a game only while its window is the active window and is not
//! minimized. The focus gate is read from the window manager and never
//! written here.

use std::collections::HashMap;

use retro_snake::Direction;
use retro_types::input::Key;
use retro_wm::WindowManager;

use crate::session::GameSession;

/// Where a key event went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRoute {
    /// Delivered to the game in window `window_id`; `accepted` is whether
    /// the game queued the direction.
    Steered { window_id: String, accepted: bool },
    /// No focused game, or not a steering key.
    Ignored,
}

/// Arrow keys map to the four unit directions; nothing else steers.
pub fn key_direction(key: Key) -> Option<Direction> {
    match key {
        Key::ArrowUp => Some(Direction::Up),
        Key::ArrowDown => Some(Direction::Down),
        Key::ArrowLeft => Some(Direction::Left),
        Key::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

/// Route `key` to the game owned by the active window, if there is one.
pub fn dispatch_key(
    key: Key,
    wm: &WindowManager,
    sessions: &mut HashMap<String, GameSession>,
) -> KeyRoute {
    let Some(dir) = key_direction(key) else {
        return KeyRoute::Ignored;
    };
    let Some(active) = wm.active_window() else {
        return KeyRoute::Ignored;
    };
    // An explicit focus can leave a minimized window active.
    if wm.get(active).is_none_or(|w| w.minimized) {
        return KeyRoute::Ignored;
    }
    let Some(session) = sessions.get_mut(active) else {
        return KeyRoute::Ignored;
    };
    KeyRoute::Steered {
        window_id: active.to_string(),
        accepted: session.steer(dir),
    }
}
