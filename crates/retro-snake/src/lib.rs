//! Grid snake game.
//!
//! [`SnakeGame`] is a deterministic state machine: direction intents are
//! buffered and applied at the next [`SnakeGame::tick`], and ticks only run
//! while the game is [`Phase::Running`]. [`TickTimer`] turns elapsed
//! wall-clock time into a count of due ticks.

pub mod direction;
pub mod game;
pub mod ticker;

pub use direction::{Axis, Direction};
pub use game::{Cell, GameSnapshot, Phase, SnakeGame, TickOutcome};
pub use ticker::TickTimer;
