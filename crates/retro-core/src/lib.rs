//! Retro desktop runtime.
//!
//! Ties the window manager, pointer controller, and snake sessions together
//! behind a single-threaded command queue. Hosts push [`Command`]s (or raw
//! [`input::InputEvent`]s), drain them with [`Desktop::run_pending`], and
//! draw from [`Desktop::snapshot`].

// Re-exports from the component crates.
pub use retro_snake as snake;
pub use retro_types::config;
pub use retro_types::error;
pub use retro_types::geometry;
pub use retro_types::input;
pub use retro_wm as wm;

pub mod command;
pub mod desktop;
pub mod dispatch;
pub mod session;
pub mod snapshot;
pub mod startmenu;
pub mod taskbar;

pub use command::{Command, Script};
pub use desktop::{Desktop, InputResult};
pub use snapshot::DesktopSnapshot;
