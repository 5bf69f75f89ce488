//! Window manager: open set, focus, z-order, and geometry updates.
//!
//! Every operation tolerates ids that are not open. Closing twice, moving a
//! window that was closed mid-drag, or focusing a stale id all do nothing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use retro_types::config::WmConfig;
use retro_types::geometry::{Rect, ResizeEdges};

use crate::catalog::Launchable;
use crate::geometry::{SizeLimits, resize_rect};
use crate::window::Window;

/// Owns all open windows and the single active window id.
#[derive(Debug, Clone)]
pub struct WindowManager {
    /// Open windows in open order. Later entries stack above earlier ones.
    windows: Vec<Window>,
    /// Focused window, always drawn on top.
    active: Option<String>,
    config: WmConfig,
    rng: ChaCha8Rng,
}

impl WindowManager {
    /// Create a manager that places new windows using `rng`.
    pub fn new(config: WmConfig, rng: ChaCha8Rng) -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            config,
            rng,
        }
    }

    /// Create a manager with a deterministic placement sequence.
    pub fn with_seed(config: WmConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    // -- Lifecycle ------------------------------------------------------------

    /// Open `app`, or focus its window if one is already open.
    ///
    /// A second open never creates a second window and never touches the
    /// existing window's geometry or minimized flag.
    pub fn open(&mut self, app: &Launchable) -> &Window {
        if let Some(idx) = self.index_of(&app.id) {
            log::debug!("Window '{}' already open, focusing", app.id);
            self.active = Some(app.id.clone());
            return &self.windows[idx];
        }

        let x = self.rng.gen_range(self.config.spawn_x_range());
        let y = self.rng.gen_range(self.config.spawn_y_range());
        let window = Window {
            id: app.id.clone(),
            title: app.name.clone(),
            icon: app.icon.clone(),
            bounds: Rect::new(x, y, self.config.default_width, self.config.default_height),
            minimized: false,
            maximized: false,
        };
        log::info!("Opened window '{}' at ({x}, {y})", app.id);
        self.windows.push(window);
        self.active = Some(app.id.clone());
        self.debug_check_invariants();

        let last = self.windows.len() - 1;
        &self.windows[last]
    }

    /// Close the window with `id`. Returns whether a window was removed.
    pub fn close(&mut self, id: &str) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        self.windows.remove(idx);
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        log::info!("Closed window '{id}'");
        true
    }

    /// Minimize the window with `id`.
    ///
    /// Clears the active id whichever window held it, so after any minimize
    /// no window is focused.
    pub fn minimize(&mut self, id: &str) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.minimized = true;
        self.active = None;
        log::debug!("Minimized window '{id}'");
        true
    }

    /// Un-minimize the window with `id` and focus it.
    pub fn restore(&mut self, id: &str) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.minimized = false;
        self.active = Some(id.to_string());
        log::debug!("Restored window '{id}'");
        true
    }

    /// Make `id` the active window. Nothing else changes, including the
    /// minimized flag.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        if self.active.as_deref() != Some(id) {
            log::debug!("Focused window '{id}'");
            self.active = Some(id.to_string());
        }
        true
    }

    // -- Geometry -------------------------------------------------------------

    /// Translate the window by `(dx, dy)`. No clamping to the screen.
    pub fn move_by(&mut self, id: &str, dx: i32, dy: i32) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.bounds = window.bounds.translated(dx, dy);
        true
    }

    /// Resize the window along `edges` by `(dx, dy)`.
    pub fn resize_by(&mut self, id: &str, dx: i32, dy: i32, edges: ResizeEdges) -> bool {
        let limits = SizeLimits::from(&self.config);
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.bounds = resize_rect(window.bounds, dx, dy, edges, limits);
        true
    }

    // -- Queries --------------------------------------------------------------

    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// The active window id, if any.
    pub fn active_window(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Open windows in open order (the taskbar order).
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Open windows bottom to top. Open order, with the active window lifted
    /// to the end. Minimized windows are included; the renderer skips them.
    pub fn z_order(&self) -> Vec<&Window> {
        let mut order: Vec<&Window> = self
            .windows
            .iter()
            .filter(|w| !self.is_focused(&w.id))
            .collect();
        if let Some(active) = self.active.as_deref().and_then(|id| self.get(id)) {
            order.push(active);
        }
        order
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            self.windows
                .iter()
                .enumerate()
                .all(|(i, a)| self.windows[..i].iter().all(|b| b.id != a.id)),
            "duplicate window id in open set"
        );
        debug_assert!(
            self.active.as_deref().is_none_or(|id| self.is_open(id)),
            "active id refers to a closed window"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn wm() -> WindowManager {
        WindowManager::with_seed(WmConfig::default(), 7)
    }

    fn app(id: &str) -> Launchable {
        Catalog::classic().get(id).cloned().unwrap()
    }

    #[test]
    fn open_places_inside_spawn_region() {
        let mut wm = wm();
        for id in ["notepad", "paint", "files", "music", "browser", "snake"] {
            let w = wm.open(&app(id)).clone();
            assert!((100..300).contains(&w.bounds.x), "x = {}", w.bounds.x);
            assert!((100..250).contains(&w.bounds.y), "y = {}", w.bounds.y);
            assert_eq!((w.bounds.width, w.bounds.height), (400, 300));
            assert!(!w.minimized);
            assert!(!w.maximized);
        }
    }

    #[test]
    fn open_focuses_new_window() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        assert_eq!(wm.active_window(), Some("notepad"));
        wm.open(&app("paint"));
        assert_eq!(wm.active_window(), Some("paint"));
        assert!(!wm.is_focused("notepad"));
    }

    #[test]
    fn open_twice_only_refocuses() {
        let mut wm = wm();
        let first = wm.open(&app("notepad")).clone();
        wm.open(&app("paint"));
        let second = wm.open(&app("notepad")).clone();
        assert_eq!(first, second);
        assert_eq!(wm.window_count(), 2);
        assert_eq!(wm.active_window(), Some("notepad"));
    }

    #[test]
    fn open_existing_minimized_keeps_it_minimized() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        wm.minimize("notepad");
        wm.open(&app("notepad"));
        assert!(wm.get("notepad").unwrap().minimized);
        assert_eq!(wm.active_window(), Some("notepad"));
    }

    #[test]
    fn same_seed_same_placement() {
        let mut a = wm();
        let mut b = wm();
        assert_eq!(a.open(&app("notepad")).bounds, b.open(&app("notepad")).bounds);
    }

    #[test]
    fn close_active_clears_focus() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        assert!(wm.close("notepad"));
        assert_eq!(wm.active_window(), None);
        assert_eq!(wm.window_count(), 0);
    }

    #[test]
    fn close_inactive_keeps_focus() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        wm.open(&app("paint"));
        assert!(wm.close("notepad"));
        assert_eq!(wm.active_window(), Some("paint"));
    }

    #[test]
    fn close_twice_is_noop() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        wm.open(&app("paint"));
        assert!(wm.close("notepad"));
        let after_once: Vec<Window> = wm.windows().to_vec();
        let active_once = wm.active_window().map(str::to_string);
        assert!(!wm.close("notepad"));
        assert_eq!(wm.windows(), after_once.as_slice());
        assert_eq!(wm.active_window().map(str::to_string), active_once);
    }

    #[test]
    fn minimize_clears_focus_globally() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        wm.open(&app("paint"));
        assert_eq!(wm.active_window(), Some("paint"));
        assert!(wm.minimize("notepad"));
        assert!(wm.get("notepad").unwrap().minimized);
        assert_eq!(wm.active_window(), None);
    }

    #[test]
    fn minimize_missing_is_noop() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        assert!(!wm.minimize("paint"));
        assert_eq!(wm.active_window(), Some("notepad"));
    }

    #[test]
    fn restore_unminimizes_and_focuses() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        wm.minimize("notepad");
        assert!(wm.restore("notepad"));
        assert!(!wm.get("notepad").unwrap().minimized);
        assert_eq!(wm.active_window(), Some("notepad"));
        assert!(!wm.restore("paint"));
    }

    #[test]
    fn focus_only_changes_active_id() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        wm.open(&app("paint"));
        let before: Vec<Window> = wm.windows().to_vec();
        assert!(wm.focus("notepad"));
        assert_eq!(wm.windows(), before.as_slice());
        assert_eq!(wm.active_window(), Some("notepad"));
    }

    #[test]
    fn focus_minimized_does_not_restore() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        wm.minimize("notepad");
        assert!(wm.focus("notepad"));
        assert!(wm.get("notepad").unwrap().minimized);
    }

    #[test]
    fn focus_missing_is_noop() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        assert!(!wm.focus("paint"));
        assert_eq!(wm.active_window(), Some("notepad"));
    }

    #[test]
    fn move_by_is_unclamped() {
        let mut wm = wm();
        let start = wm.open(&app("notepad")).bounds;
        assert!(wm.move_by("notepad", -5000, 7000));
        let b = wm.get("notepad").unwrap().bounds;
        assert_eq!(b, start.translated(-5000, 7000));
    }

    #[test]
    fn move_and_resize_missing_are_noops() {
        let mut wm = wm();
        assert!(!wm.move_by("notepad", 1, 1));
        assert!(!wm.resize_by("notepad", 1, 1, ResizeEdges::RIGHT));
    }

    #[test]
    fn resize_by_uses_config_limits() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        wm.resize_by("notepad", -1000, -1000, ResizeEdges::BOTTOM_RIGHT);
        let b = wm.get("notepad").unwrap().bounds;
        assert_eq!((b.width, b.height), (200, 150));
    }

    #[test]
    fn z_order_lifts_active_to_top() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        wm.open(&app("paint"));
        wm.open(&app("files"));
        wm.focus("notepad");
        let ids: Vec<&str> = wm.z_order().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["paint", "files", "notepad"]);
    }

    #[test]
    fn z_order_without_focus_is_open_order() {
        let mut wm = wm();
        wm.open(&app("notepad"));
        wm.open(&app("paint"));
        wm.minimize("paint");
        let ids: Vec<&str> = wm.z_order().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["notepad", "paint"]);
    }
}
