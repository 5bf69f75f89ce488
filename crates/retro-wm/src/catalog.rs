//! Application catalog: the static list of launchable applications.

use retro_types::geometry::Point;
use serde::Serialize;

/// A launchable application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Launchable {
    /// Stable id, also used as the window id.
    pub id: String,
    /// Name shown under the desktop icon, in the title bar, and in menus.
    pub name: String,
    /// Icon glyph.
    pub icon: String,
    /// Where the desktop icon sits.
    pub desktop_position: Point,
}

impl Launchable {
    pub fn new(id: &str, name: &str, icon: &str, x: i32, y: i32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            desktop_position: Point::new(x, y),
        }
    }
}

/// Ordered set of launchables, looked up by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Launchable>,
}

impl Catalog {
    /// Id of the application that hosts the snake game.
    pub const SNAKE: &'static str = "snake";

    pub fn new(entries: Vec<Launchable>) -> Self {
        let catalog = Self { entries };
        debug_assert!(
            catalog
                .entries
                .iter()
                .enumerate()
                .all(|(i, a)| catalog.entries[..i].iter().all(|b| b.id != a.id)),
            "duplicate id in catalog"
        );
        catalog
    }

    /// The classic desktop: two columns of icons.
    pub fn classic() -> Self {
        Self::new(vec![
            Launchable::new("notepad", "Notepad", "📝", 50, 50),
            Launchable::new("calculator", "Calculator", "🧮", 50, 140),
            Launchable::new("paint", "Paint", "🎨", 50, 230),
            Launchable::new("files", "Files", "📁", 50, 320),
            Launchable::new("music", "Music Player", "🎵", 150, 50),
            Launchable::new("browser", "Browser", "🌐", 150, 140),
            Launchable::new(Self::SNAKE, "Snake Game", "🐍", 150, 230),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&Launchable> {
        self.entries.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Launchable> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
