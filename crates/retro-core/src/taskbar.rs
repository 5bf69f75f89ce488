//! Taskbar model: one button per open window.

use retro_wm::WindowManager;
use serde::Serialize;

/// How a taskbar button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskbarState {
    Minimized,
    Active,
    Inactive,
}

/// One taskbar button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskbarEntry {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub state: TaskbarState,
}

/// Buttons for every open window, in open order.
pub fn entries(wm: &WindowManager) -> Vec<TaskbarEntry> {
    wm.windows()
        .iter()
        .map(|w| TaskbarEntry {
            id: w.id.clone(),
            title: w.title.clone(),
            icon: w.icon.clone(),
            state: if w.minimized {
                TaskbarState::Minimized
            } else if wm.is_focused(&w.id) {
                TaskbarState::Active
            } else {
                TaskbarState::Inactive
            },
        })
        .collect()
}

/// A click on the button for `id`: restore a minimized window, otherwise
/// focus it. Returns whether the window exists.
pub fn click(wm: &mut WindowManager, id: &str) -> bool {
    let Some(minimized) = wm.get(id).map(|w| w.minimized) else {
        return false;
    };
    if minimized { wm.restore(id) } else { wm.focus(id) }
}
