//! Window records.

use retro_types::geometry::Rect;
use serde::Serialize;

/// One open application window.
///
/// Focus is not stored here. A window is focused when its id equals the
/// manager's active id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    /// Application id. At most one window per id is open.
    pub id: String,
    /// Title bar text.
    pub title: String,
    /// Icon glyph shown in the title bar and taskbar.
    pub icon: String,
    /// Outer bounds including the title bar.
    pub bounds: Rect,
    /// Hidden from the desktop but still listed in the taskbar.
    pub minimized: bool,
    /// Reserved. No operation sets this yet.
    pub maximized: bool,
}

impl Window {
    /// The area below the title bar that application content fills.
    pub fn content_area(&self, title_bar_height: i32) -> Rect {
        self.bounds.below(title_bar_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_area_excludes_title_bar() {
        let w = Window {
            id: "notepad".into(),
            title: "Notepad".into(),
            icon: "N".into(),
            bounds: Rect::new(120, 140, 400, 300),
            minimized: false,
            maximized: false,
        };
        assert_eq!(w.content_area(32), Rect::new(120, 172, 400, 268));
    }
}
