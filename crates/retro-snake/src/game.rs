//! Snake game state machine.
//!
//! Phases: `Idle -> Running <-> Paused`, and `Running -> GameOver` on a
//! wall or self collision. Only [`SnakeGame::start`] leaves `Idle` or
//! `GameOver`.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use retro_types::config::GameConfig;
use serde::Serialize;

use crate::direction::Direction;

/// A grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in direction `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<[i32; 2]> for Cell {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Never started.
    Idle,
    Running,
    Paused,
    /// Collided. Frozen until the next start.
    GameOver,
}

/// Result of one [`SnakeGame::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed.
    Skipped,
    /// Moved one cell.
    Moved,
    /// Moved onto the food and grew.
    Ate,
    /// Hit a wall or itself.
    Collided,
}

/// Read-only view for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub phase: Phase,
    pub score: u32,
    pub grid_width: i32,
    pub grid_height: i32,
}

/// One game instance.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    config: GameConfig,
    rng: ChaCha8Rng,
    /// Head at the front.
    snake: VecDeque<Cell>,
    food: Cell,
    direction: Direction,
    pending: Option<Direction>,
    phase: Phase,
    score: u32,
}

impl SnakeGame {
    /// A fresh game in `Idle`, laid out per `config`.
    pub fn new(config: GameConfig, rng: ChaCha8Rng) -> Self {
        let mut game = Self {
            rng,
            snake: VecDeque::new(),
            food: Cell::from(config.start_food),
            direction: Direction::Right,
            pending: None,
            phase: Phase::Idle,
            score: 0,
            config,
        };
        game.reset_board();
        game
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn reset_board(&mut self) {
        self.snake.clear();
        self.snake.push_back(Cell::from(self.config.start_head));
        self.food = Cell::from(self.config.start_food);
        let [dx, dy] = self.config.start_direction;
        self.direction = Direction::from_delta(dx, dy).unwrap_or(Direction::Right);
        self.pending = None;
        self.score = 0;
    }

    // -- Transitions ----------------------------------------------------------

    /// Start a new game from any phase: reset the board and run.
    pub fn start(&mut self) {
        self.reset_board();
        self.phase = Phase::Running;
        log::debug!("Snake game started");
    }

    /// Flip between `Running` and `Paused`. Returns whether the phase
    /// changed; `Idle` and `GameOver` are left alone.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Idle | Phase::GameOver => return false,
        };
        log::debug!("Snake game now {:?}", self.phase);
        true
    }

    /// Queue a direction change for the next tick.
    ///
    /// Accepted only while running and only onto the other axis, which
    /// rules out both 180-degree reversals and repeats of the current
    /// heading. A later accepted intent overwrites an earlier one.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if self.phase != Phase::Running || dir.axis() == self.direction.axis() {
            return false;
        }
        self.pending = Some(dir);
        true
    }

    /// Advance the simulation one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Skipped;
        }

        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }

        let new_head = self.head().step(self.direction);
        if !self.in_bounds(new_head) || self.snake.contains(&new_head) {
            self.phase = Phase::GameOver;
            log::info!("Snake game over, score {}", self.score);
            return TickOutcome::Collided;
        }

        self.snake.push_front(new_head);
        let outcome = if new_head == self.food {
            self.score += self.config.food_reward;
            self.place_food();
            TickOutcome::Ate
        } else {
            self.snake.pop_back();
            TickOutcome::Moved
        };
        self.debug_check_invariants();
        outcome
    }

    /// Move the food to a uniformly random empty cell.
    ///
    /// If the snake covers the whole grid there is nowhere to put it, so the
    /// game ends instead of searching forever.
    fn place_food(&mut self) {
        if self.snake.len() >= self.config.cell_count() {
            self.phase = Phase::GameOver;
            log::info!("Snake fills the grid, score {}", self.score);
            return;
        }
        loop {
            let candidate = Cell::new(
                self.rng.gen_range(0..self.config.grid_width),
                self.rng.gen_range(0..self.config.grid_height),
            );
            if !self.snake.contains(&candidate) {
                self.food = candidate;
                return;
            }
        }
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.config.grid_width).contains(&cell.x) && (0..self.config.grid_height).contains(&cell.y)
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            self.phase == Phase::GameOver || !self.snake.contains(&self.food),
            "food spawned inside the snake"
        );
        debug_assert!(
            self.snake
                .iter()
                .enumerate()
                .all(|(i, a)| self.snake.iter().take(i).all(|b| a != b)),
            "snake overlaps itself"
        );
    }

    // -- Queries --------------------------------------------------------------

    pub fn head(&self) -> Cell {
        // The snake is never empty: reset_board seeds one cell and tick only
        // ever pushes before it pops.
        self.snake[0]
    }

    /// Segments, head first.
    pub fn snake(&self) -> impl Iterator<Item = Cell> + '_ {
        self.snake.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake: self.snake.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            phase: self.phase,
            score: self.score,
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
        }
    }

    // -- Test hooks -----------------------------------------------------------

    /// Replace the body (head first) and heading, and mark the game running.
    /// An empty body is ignored; the snake always has a head.
    #[cfg(any(test, feature = "test-support"))]
    pub fn debug_set_snake(&mut self, head_first: &[Cell], direction: Direction) {
        if head_first.is_empty() {
            return;
        }
        self.snake = head_first.iter().copied().collect();
        self.direction = direction;
        self.pending = None;
        self.phase = Phase::Running;
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn debug_set_food(&mut self, food: Cell) {
        self.food = food;
    }
}
