//! A running snake game bound to its window.

use rand_chacha::ChaCha8Rng;
use retro_snake::{Direction, Phase, SnakeGame, TickOutcome, TickTimer};
use retro_types::config::GameConfig;

/// Game plus its tick timer. Dropping the session drops both, so a closed
/// window leaves no timer behind.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: SnakeGame,
    timer: TickTimer,
}

impl GameSession {
    pub fn new(config: GameConfig, rng: ChaCha8Rng) -> Self {
        let timer = TickTimer::new(config.tick_ms);
        Self {
            game: SnakeGame::new(config, rng),
            timer,
        }
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }

    /// Mutable access for test setups.
    #[cfg(any(test, feature = "test-support"))]
    pub fn game_mut(&mut self) -> &mut SnakeGame {
        &mut self.game
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Start or restart the game with a fresh timer.
    pub fn start(&mut self) {
        self.game.start();
        self.timer.reset();
    }

    /// Pause or resume. The timer restarts on every phase change.
    pub fn toggle_pause(&mut self) -> bool {
        let changed = self.game.toggle_pause();
        if changed {
            self.timer.reset();
        }
        changed
    }

    pub fn steer(&mut self, dir: Direction) -> bool {
        self.game.steer(dir)
    }

    /// Let `ms` milliseconds pass. Returns the number of ticks run.
    ///
    /// Outside `Running` the timer does not accumulate. A collision stops the
    /// remaining due ticks and resets the timer.
    pub fn elapse(&mut self, ms: u64) -> u64 {
        if self.game.phase() != Phase::Running {
            return 0;
        }
        let due = self.timer.advance(ms);
        let mut ran = 0;
        for _ in 0..due {
            ran += 1;
            if self.game.tick() == TickOutcome::Collided || self.game.phase() != Phase::Running {
                self.timer.reset();
                break;
            }
        }
        ran
    }
}
