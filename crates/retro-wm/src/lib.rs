//! Window manager for the retro desktop.
//!
//! Owns the set of open windows, their geometry and flags, focus, and
//! z-order. Pointer gestures reach the manager through
//! [`interaction::PointerController`], which turns a down/move/up stream into
//! incremental drag or resize deltas.

pub mod catalog;
pub mod geometry;
pub mod interaction;
pub mod manager;
pub mod window;

pub use catalog::{Catalog, Launchable};
pub use interaction::{PointerController, PointerOutcome};
pub use manager::WindowManager;
pub use window::Window;
