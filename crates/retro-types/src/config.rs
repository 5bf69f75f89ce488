//! Desktop configuration.
//!
//! Every field has a default matching the classic desktop, so an empty TOML
//! document is a valid configuration.

use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, Result};

/// Top-level configuration for a desktop instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Window manager geometry settings.
    pub wm: WmConfig,
    /// Snake game settings.
    pub game: GameConfig,
    /// Seed for window placement and food placement. `None` draws from OS
    /// entropy.
    pub seed: Option<u64>,
}

/// Window geometry rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WmConfig {
    /// Smallest width a resize may produce.
    pub min_width: i32,
    /// Smallest height a resize may produce.
    pub min_height: i32,
    /// Width of a freshly opened window.
    pub default_width: i32,
    /// Height of a freshly opened window.
    pub default_height: i32,
    /// Half-open range for a new window's x coordinate.
    pub spawn_x: [i32; 2],
    /// Half-open range for a new window's y coordinate.
    pub spawn_y: [i32; 2],
    /// Height of the title bar; the content area is what remains below it.
    pub title_bar_height: i32,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            min_width: 200,
            min_height: 150,
            default_width: 400,
            default_height: 300,
            spawn_x: [100, 300],
            spawn_y: [100, 250],
            title_bar_height: 32,
        }
    }
}

impl WmConfig {
    pub fn spawn_x_range(&self) -> Range<i32> {
        self.spawn_x[0]..self.spawn_x[1]
    }

    pub fn spawn_y_range(&self) -> Range<i32> {
        self.spawn_y[0]..self.spawn_y[1]
    }
}

/// Snake game rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid columns.
    pub grid_width: i32,
    /// Grid rows.
    pub grid_height: i32,
    /// Milliseconds between simulation ticks.
    pub tick_ms: u64,
    /// Score added per food eaten.
    pub food_reward: u32,
    /// Head cell at the start of every game.
    pub start_head: [i32; 2],
    /// Food cell at the start of every game.
    pub start_food: [i32; 2],
    /// Heading at the start of every game (unit vector).
    pub start_direction: [i32; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 15,
            grid_height: 12,
            tick_ms: 150,
            food_reward: 10,
            start_head: [7, 6],
            start_food: [10, 8],
            start_direction: [1, 0],
        }
    }
}

impl GameConfig {
    /// Total number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        (self.grid_width.max(0) as usize) * (self.grid_height.max(0) as usize)
    }

    fn in_grid(&self, [x, y]: [i32; 2]) -> bool {
        (0..self.grid_width).contains(&x) && (0..self.grid_height).contains(&y)
    }
}

impl DesktopConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings the window manager or game cannot honour.
    pub fn validate(&self) -> Result<()> {
        let wm = &self.wm;
        if wm.min_width <= 0 || wm.min_height <= 0 {
            return Err(DesktopError::Config(
                "minimum window size must be positive".into(),
            ));
        }
        if wm.default_width < wm.min_width || wm.default_height < wm.min_height {
            return Err(DesktopError::Config(format!(
                "default size {}x{} is below minimum {}x{}",
                wm.default_width, wm.default_height, wm.min_width, wm.min_height
            )));
        }
        if wm.spawn_x_range().is_empty() || wm.spawn_y_range().is_empty() {
            return Err(DesktopError::Config("spawn range is empty".into()));
        }
        if wm.title_bar_height < 0 {
            return Err(DesktopError::Config(
                "title bar height must not be negative".into(),
            ));
        }

        let game = &self.game;
        if game.grid_width <= 0 || game.grid_height <= 0 {
            return Err(DesktopError::Config("game grid is empty".into()));
        }
        if game.tick_ms == 0 {
            return Err(DesktopError::Config("tick_ms must be non-zero".into()));
        }
        if !game.in_grid(game.start_head) || !game.in_grid(game.start_food) {
            return Err(DesktopError::Config(
                "start head and food must lie inside the grid".into(),
            ));
        }
        if game.start_head == game.start_food {
            return Err(DesktopError::Config(
                "start food must not overlap the snake".into(),
            ));
        }
        let [dx, dy] = game.start_direction;
        if dx.abs() + dy.abs() != 1 {
            return Err(DesktopError::Config(
                "start direction must be a unit axis vector".into(),
            ));
        }
        Ok(())
    }
}
