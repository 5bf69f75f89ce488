//! Foundation types for the retro desktop.
//!
//! Platform-agnostic types shared by every crate in the workspace: geometry,
//! input events and hit-test targets, configuration, and the error type.
//! The window manager and the game never see raw platform input; a host maps
//! its native events to [`input::InputEvent`] first.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
