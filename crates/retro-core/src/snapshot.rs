//! Read-only views of desktop state for a renderer.

use retro_snake::GameSnapshot;
use retro_types::geometry::{Point, Rect};
use serde::Serialize;

use crate::startmenu::StartMenuItem;
use crate::taskbar::TaskbarEntry;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesktopSnapshot {
    /// Desktop icons in catalog order.
    pub icons: Vec<IconView>,
    /// Open windows, bottom to top. Minimized windows are included and
    /// flagged; the renderer skips them.
    pub windows: Vec<WindowView>,
    /// Focused window id.
    pub active: Option<String>,
    pub taskbar: Vec<TaskbarEntry>,
    pub start_menu_open: bool,
    /// Menu rows while the menu is open, otherwise empty.
    pub start_menu: Vec<StartMenuItem>,
    /// Game state for each window hosting a game, in z-order.
    pub games: Vec<GameView>,
}

impl DesktopSnapshot {
    /// Windows that should actually be drawn, bottom to top.
    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowView> {
        self.windows.iter().filter(|w| !w.minimized)
    }

    pub fn window(&self, id: &str) -> Option<&WindowView> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn game(&self, window_id: &str) -> Option<&GameSnapshot> {
        self.games
            .iter()
            .find(|g| g.window_id == window_id)
            .map(|g| &g.game)
    }
}

/// A desktop icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconView {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub position: Point,
}

/// A window as drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowView {
    pub id: String,
    pub title: String,
    pub icon: String,
    /// Outer bounds including the title bar.
    pub bounds: Rect,
    /// Region the application's content is drawn into.
    pub content: Rect,
    pub minimized: bool,
    pub maximized: bool,
    pub focused: bool,
}

/// Game state attached to its window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub window_id: String,
    pub game: GameSnapshot,
}
