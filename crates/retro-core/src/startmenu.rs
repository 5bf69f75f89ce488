//! Start menu: a popup listing every application plus two fixed entries.

use retro_wm::Catalog;
use serde::Serialize;

/// What a start menu entry does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartMenuAction {
    /// Open the application with this id.
    Launch(String),
    /// Fixed entries (Settings, Shut Down) that do nothing.
    None,
}

/// A single row in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartMenuItem {
    pub label: String,
    pub icon: String,
    pub action: StartMenuAction,
}

/// Runtime state for the start menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartMenu {
    open: bool,
}

impl StartMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Start button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click on the row for `id`. The menu closes whatever was picked;
    /// ids the catalog does not know resolve to [`StartMenuAction::None`].
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> StartMenuAction {
        self.open = false;
        match catalog.get(id) {
            Some(app) => StartMenuAction::Launch(app.id.clone()),
            None => StartMenuAction::None,
        }
    }

    /// One launch row per application, then Settings and Shut Down.
    pub fn items(catalog: &Catalog) -> Vec<StartMenuItem> {
        let mut items: Vec<StartMenuItem> = catalog
            .iter()
            .map(|app| StartMenuItem {
                label: app.name.clone(),
                icon: app.icon.clone(),
                action: StartMenuAction::Launch(app.id.clone()),
            })
            .collect();
        items.push(StartMenuItem {
            label: "Settings".to_string(),
            icon: "⚙️".to_string(),
            action: StartMenuAction::None,
        });
        items.push(StartMenuItem {
            label: "Shut Down".to_string(),
            icon: "🔌".to_string(),
            action: StartMenuAction::None,
        });
        items
    }
}
