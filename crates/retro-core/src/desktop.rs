//! The desktop: one owner for all mutable UI state, driven by a command
//! queue.
//!
//! Commands are applied one at a time on the caller's thread, so there is
//! never concurrent mutation and nothing needs locking.

use std::collections::{HashMap, VecDeque};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use retro_types::config::DesktopConfig;
use retro_types::error::{DesktopError, Result};
use retro_types::geometry::Point;
use retro_types::input::{HitTarget, InputEvent, WindowControl};
use retro_wm::{Catalog, PointerController, PointerOutcome, Window, WindowManager};

use crate::command::Command;
use crate::dispatch::{self, KeyRoute};
use crate::session::GameSession;
use crate::snapshot::{DesktopSnapshot, GameView, IconView, WindowView};
use crate::startmenu::{StartMenu, StartMenuAction};
use crate::taskbar;

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// All desktop state.
#[derive(Debug)]
pub struct Desktop {
    config: DesktopConfig,
    catalog: Catalog,
    wm: WindowManager,
    pointer: PointerController,
    start_menu: StartMenu,
    /// Game sessions keyed by the id of the window that owns them.
    sessions: HashMap<String, GameSession>,
    /// Source for per-session generators.
    rng: ChaCha8Rng,
    queue: VecDeque<Command>,
}

impl Desktop {
    /// Build a desktop. Window placement and food placement are seeded from
    /// `config.seed` when present.
    ///
    /// Fails with [`DesktopError::Config`] if the configuration is
    /// inconsistent, e.g. an empty spawn range or grid.
    pub fn new(config: DesktopConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, catalog))
    }

    /// Default configuration with a fixed seed and the classic catalog.
    pub fn with_seed(seed: u64) -> Self {
        let config = DesktopConfig {
            seed: Some(seed),
            ..DesktopConfig::default()
        };
        debug_assert!(config.validate().is_ok());
        Self::build(config, Catalog::classic())
    }

    fn build(config: DesktopConfig, catalog: Catalog) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let wm_rng = ChaCha8Rng::seed_from_u64(rng.next_u64());
        let wm = WindowManager::new(config.wm.clone(), wm_rng);
        log::debug!("Desktop created with {} applications", catalog.len());
        Self {
            config,
            catalog,
            wm,
            pointer: PointerController::new(),
            start_menu: StartMenu::new(),
            sessions: HashMap::new(),
            rng,
            queue: VecDeque::new(),
        }
    }

    // -- Queue ----------------------------------------------------------------

    /// Queue a command for the next [`Desktop::run_pending`].
    pub fn push(&mut self, cmd: Command) {
        self.queue.push_back(cmd);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Apply every queued command in order. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Some(cmd) = self.queue.pop_front() {
            self.apply(cmd);
            ran += 1;
        }
        ran
    }

    /// Translate and apply a host input event immediately.
    pub fn handle_input(&mut self, event: &InputEvent) -> InputResult {
        match Command::from_input(event) {
            Some(cmd) => {
                self.apply(cmd);
                InputResult::Continue
            },
            None => InputResult::Quit,
        }
    }

    /// Apply one command.
    pub fn apply(&mut self, cmd: Command) {
        log::trace!("Applying {cmd:?}");
        match cmd {
            Command::Open { id } => {
                if let Err(e) = self.launch(&id) {
                    log::warn!("Open ignored: {e}");
                }
            },
            Command::Close { id } => self.close(&id),
            Command::Minimize { id } => {
                self.wm.minimize(&id);
            },
            Command::Restore { id } => {
                self.wm.restore(&id);
            },
            Command::Focus { id } => {
                self.wm.focus(&id);
            },
            Command::TaskbarClick { id } => {
                taskbar::click(&mut self.wm, &id);
            },
            Command::ToggleStartMenu => self.start_menu.toggle(),
            Command::CloseStartMenu => self.start_menu.close(),
            Command::StartMenuSelect { id } => match self.start_menu.select(&self.catalog, &id) {
                StartMenuAction::Launch(app) => {
                    if let Err(e) = self.launch(&app) {
                        log::warn!("Start menu selection ignored: {e}");
                    }
                },
                StartMenuAction::None => log::debug!("Start menu entry '{id}' has no action"),
            },
            Command::PointerDown { x, y, target } => self.pointer_down(Point::new(x, y), &target),
            Command::PointerMove { x, y } => {
                self.pointer.pointer_move(&mut self.wm, Point::new(x, y));
            },
            Command::PointerUp => self.pointer.pointer_up(),
            Command::Blur => self.pointer.clear_all(),
            Command::KeyDown { key } => {
                if let KeyRoute::Steered {
                    window_id,
                    accepted,
                } = dispatch::dispatch_key(key, &self.wm, &mut self.sessions)
                {
                    log::trace!("Key {key:?} to '{window_id}' accepted={accepted}");
                }
            },
            Command::Elapse { ms } => {
                for session in self.sessions.values_mut() {
                    session.elapse(ms);
                }
            },
            Command::StartGame => match self.sessions.get_mut(Catalog::SNAKE) {
                Some(session) => session.start(),
                None => log::debug!("Start ignored: no game window open"),
            },
            Command::TogglePause => {
                if let Some(session) = self.sessions.get_mut(Catalog::SNAKE) {
                    session.toggle_pause();
                }
            },
        }
    }

    // -- Operations -----------------------------------------------------------

    /// Open an application by id, or focus it if it is already open.
    ///
    /// Opening the game application creates a fresh game session.
    pub fn launch(&mut self, id: &str) -> Result<&Window> {
        let app = self
            .catalog
            .get(id)
            .ok_or_else(|| DesktopError::UnknownApp(id.to_string()))?;
        let newly_opened = !self.wm.is_open(id);
        self.wm.open(app);

        if newly_opened && id == Catalog::SNAKE {
            let rng = ChaCha8Rng::seed_from_u64(self.rng.next_u64());
            self.sessions
                .insert(id.to_string(), GameSession::new(self.config.game.clone(), rng));
            log::debug!("Game session created for '{id}'");
        }

        self.wm
            .get(id)
            .ok_or_else(|| DesktopError::UnknownApp(id.to_string()))
    }

    /// Close a window and discard any game it owns.
    pub fn close(&mut self, id: &str) {
        self.wm.close(id);
        if self.sessions.remove(id).is_some() {
            log::debug!("Game session for '{id}' discarded");
        }
    }

    fn pointer_down(&mut self, pos: Point, target: &HitTarget) {
        // Any click anywhere dismisses the start menu.
        self.start_menu.close();
        match self.pointer.pointer_down(&mut self.wm, pos, target) {
            PointerOutcome::Control(id, WindowControl::Minimize) => {
                self.wm.minimize(&id);
            },
            PointerOutcome::Control(id, WindowControl::Close) => self.close(&id),
            _ => {},
        }
    }

    // -- Queries --------------------------------------------------------------

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn wm(&self) -> &WindowManager {
        &self.wm
    }

    pub fn pointer(&self) -> &PointerController {
        &self.pointer
    }

    pub fn start_menu(&self) -> &StartMenu {
        &self.start_menu
    }

    pub fn session(&self, window_id: &str) -> Option<&GameSession> {
        self.sessions.get(window_id)
    }

    /// Mutable session access for test setups.
    #[cfg(any(test, feature = "test-support"))]
    pub fn session_mut(&mut self, window_id: &str) -> Option<&mut GameSession> {
        self.sessions.get_mut(window_id)
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        let title_bar = self.config.wm.title_bar_height;
        let z = self.wm.z_order();
        let windows: Vec<WindowView> = z
            .iter()
            .map(|w| WindowView {
                id: w.id.clone(),
                title: w.title.clone(),
                icon: w.icon.clone(),
                bounds: w.bounds,
                content: w.content_area(title_bar),
                minimized: w.minimized,
                maximized: w.maximized,
                focused: self.wm.is_focused(&w.id),
            })
            .collect();
        let games = z
            .iter()
            .filter_map(|w| {
                self.sessions.get(&w.id).map(|s| GameView {
                    window_id: w.id.clone(),
                    game: s.game().snapshot(),
                })
            })
            .collect();

        DesktopSnapshot {
            icons: self
                .catalog
                .iter()
                .map(|app| IconView {
                    id: app.id.clone(),
                    name: app.name.clone(),
                    icon: app.icon.clone(),
                    position: app.desktop_position,
                })
                .collect(),
            windows,
            active: self.wm.active_window().map(str::to_string),
            taskbar: taskbar::entries(&self.wm),
            start_menu_open: self.start_menu.is_open(),
            start_menu: if self.start_menu.is_open() {
                StartMenu::items(&self.catalog)
            } else {
                Vec::new()
            },
            games,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retro_snake::Phase;
    use retro_types::input::WindowPart;

    #[test]
    fn unknown_app_is_error_from_launch() {
        let mut d = Desktop::with_seed(1);
        let err = d.launch("solitaire").unwrap_err();
        assert!(matches!(err, DesktopError::UnknownApp(_)));
        assert_eq!(d.wm().window_count(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = DesktopConfig::default();
        config.wm.spawn_x = [300, 300];
        let err = Desktop::new(config, Catalog::classic()).unwrap_err();
        assert!(matches!(err, DesktopError::Config(_)));

        let mut config = DesktopConfig::default();
        config.game.grid_width = 0;
        assert!(Desktop::new(config, Catalog::classic()).is_err());

        let config = DesktopConfig {
            seed: Some(3),
            ..DesktopConfig::default()
        };
        let d = Desktop::new(config, Catalog::classic()).unwrap();
        assert_eq!(d.config().seed, Some(3));
    }

    #[test]
    fn unknown_app_command_is_ignored() {
        let mut d = Desktop::with_seed(1);
        d.apply(Command::Open {
            id: "solitaire".into(),
        });
        assert_eq!(d.wm().window_count(), 0);
    }

    #[test]
    fn opening_game_creates_idle_session() {
        let mut d = Desktop::with_seed(1);
        d.launch("snake").unwrap();
        assert_eq!(d.session("snake").unwrap().game().phase(), Phase::Idle);
        assert!(d.session("notepad").is_none());
    }

    #[test]
    fn reopening_game_keeps_session() {
        let mut d = Desktop::with_seed(1);
        d.launch("snake").unwrap();
        d.apply(Command::StartGame);
        d.apply(Command::Elapse { ms: 150 });
        d.launch("snake").unwrap();
        let game = d.session("snake").unwrap().game();
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.head().x, 8);
    }

    #[test]
    fn closing_game_discards_session() {
        let mut d = Desktop::with_seed(1);
        d.launch("snake").unwrap();
        d.apply(Command::StartGame);
        d.close("snake");
        assert!(d.session("snake").is_none());
        d.launch("snake").unwrap();
        assert_eq!(d.session("snake").unwrap().game().phase(), Phase::Idle);
    }

    #[test]
    fn start_without_window_is_noop() {
        let mut d = Desktop::with_seed(1);
        d.apply(Command::StartGame);
        d.apply(Command::TogglePause);
        assert!(d.session("snake").is_none());
    }

    #[test]
    fn control_buttons_minimize_and_close() {
        let mut d = Desktop::with_seed(1);
        d.launch("notepad").unwrap();
        d.launch("paint").unwrap();
        d.apply(Command::PointerDown {
            x: 0,
            y: 0,
            target: HitTarget::window(
                "notepad",
                WindowPart::Control {
                    control: WindowControl::Minimize,
                },
            ),
        });
        assert!(d.wm().get("notepad").unwrap().minimized);
        assert_eq!(d.wm().active_window(), None);

        d.apply(Command::PointerDown {
            x: 0,
            y: 0,
            target: HitTarget::window(
                "paint",
                WindowPart::Control {
                    control: WindowControl::Close,
                },
            ),
        });
        assert!(!d.wm().is_open("paint"));
        assert!(d.pointer().is_idle());
    }

    #[test]
    fn pointer_down_closes_start_menu() {
        let mut d = Desktop::with_seed(1);
        d.apply(Command::ToggleStartMenu);
        assert!(d.start_menu().is_open());
        d.apply(Command::PointerDown {
            x: 400,
            y: 400,
            target: HitTarget::Desktop,
        });
        assert!(!d.start_menu().is_open());
    }

    #[test]
    fn start_menu_select_opens_and_closes() {
        let mut d = Desktop::with_seed(1);
        d.apply(Command::ToggleStartMenu);
        d.apply(Command::StartMenuSelect { id: "files".into() });
        assert!(d.wm().is_open("files"));
        assert!(!d.start_menu().is_open());
    }

    #[test]
    fn start_menu_rows_only_while_open() {
        let mut d = Desktop::with_seed(1);
        assert!(d.snapshot().start_menu.is_empty());
        d.apply(Command::ToggleStartMenu);
        let s = d.snapshot();
        assert_eq!(s.start_menu.len(), 9);
        assert_eq!(s.start_menu[8].label, "Shut Down");

        d.apply(Command::StartMenuSelect {
            id: "shutdown".into(),
        });
        assert!(!d.start_menu().is_open());
        assert_eq!(d.wm().window_count(), 0);
        assert!(d.snapshot().start_menu.is_empty());
    }

    #[test]
    fn quit_event_stops() {
        let mut d = Desktop::with_seed(1);
        assert_eq!(d.handle_input(&InputEvent::Quit), InputResult::Quit);
        assert_eq!(
            d.handle_input(&InputEvent::PointerUp),
            InputResult::Continue
        );
    }

    #[test]
    fn queue_runs_in_order() {
        let mut d = Desktop::with_seed(1);
        d.push(Command::Open { id: "notepad".into() });
        d.push(Command::Close { id: "notepad".into() });
        d.push(Command::Open { id: "paint".into() });
        assert_eq!(d.pending(), 3);
        assert_eq!(d.run_pending(), 3);
        assert_eq!(d.pending(), 0);
        assert!(!d.wm().is_open("notepad"));
        assert_eq!(d.wm().active_window(), Some("paint"));
    }

    #[test]
    fn same_seed_same_desktop() {
        let mut a = Desktop::with_seed(99);
        let mut b = Desktop::with_seed(99);
        for d in [&mut a, &mut b] {
            d.launch("notepad").unwrap();
            d.launch("snake").unwrap();
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn snapshot_content_area_and_focus() {
        let mut d = Desktop::with_seed(4);
        d.launch("notepad").unwrap();
        d.launch("snake").unwrap();
        let s = d.snapshot();
        assert_eq!(s.windows.len(), 2);
        let top = s.windows.last().unwrap();
        assert_eq!(top.id, "snake");
        assert!(top.focused);
        assert_eq!(top.content, top.bounds.below(32));
        assert_eq!(s.active.as_deref(), Some("snake"));
        assert_eq!(s.icons.len(), 7);
        assert!(s.game("snake").is_some());
        assert!(s.game("notepad").is_none());
    }
}
