//! Platform-agnostic input event types.
//!
//! Every host maps its native input to these enums. Hit testing happens on
//! the host side: a pointer-down arrives already classified by what it
//! landed on, so the core never walks a rendering tree.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, ResizeEdges};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer pressed at an absolute position over `target`.
    PointerDown { x: i32, y: i32, target: HitTarget },
    /// Pointer moved to an absolute position.
    PointerMove { x: i32, y: i32 },
    /// Pointer released.
    PointerUp,
    /// Key pressed.
    KeyDown { key: Key },
    /// The host surface lost focus; any in-flight gesture is abandoned.
    FocusLost,
    /// User requested quit.
    Quit,
}

impl InputEvent {
    /// Pointer position for pointer-down and pointer-move events.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { x, y, .. } | Self::PointerMove { x, y } => Some(Point::new(*x, *y)),
            _ => None,
        }
    }
}

/// Keys the desktop cares about. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Space,
    Other,
}

/// What a pointer-down landed on, as classified by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "on", rename_all = "snake_case")]
pub enum HitTarget {
    /// Bare desktop (wallpaper, icons, taskbar background).
    Desktop,
    /// Some part of an open window.
    Window { id: String, part: WindowPart },
}

impl HitTarget {
    /// Convenience constructor for a window hit.
    pub fn window(id: impl Into<String>, part: WindowPart) -> Self {
        Self::Window {
            id: id.into(),
            part,
        }
    }
}

/// Region of a window that received a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowPart {
    /// Title bar, excluding the control buttons.
    TitleBar,
    /// One of the title-bar control buttons.
    Control { control: WindowControl },
    /// A resize handle on an edge or corner.
    Handle { edges: ResizeEdges },
    /// Anywhere else inside the window.
    Body,
}

/// Title-bar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowControl {
    Minimize,
    Close,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_down_position() {
        let e = InputEvent::PointerDown {
            x: 10,
            y: 20,
            target: HitTarget::Desktop,
        };
        assert_eq!(e.position(), Some(Point::new(10, 20)));
    }

    #[test]
    fn pointer_move_negative_coords() {
        let e = InputEvent::PointerMove { x: -10, y: -20 };
        assert_eq!(e.position(), Some(Point::new(-10, -20)));
    }

    #[test]
    fn non_pointer_events_have_no_position() {
        assert_eq!(InputEvent::PointerUp.position(), None);
        assert_eq!(
            InputEvent::KeyDown {
                key: Key::ArrowUp
            }
            .position(),
            None
        );
        assert_eq!(InputEvent::FocusLost.position(), None);
    }

    #[test]
    fn hit_target_window_constructor() {
        let t = HitTarget::window("notepad", WindowPart::TitleBar);
        assert_eq!(
            t,
            HitTarget::Window {
                id: "notepad".to_string(),
                part: WindowPart::TitleBar,
            }
        );
    }

    #[test]
    fn handle_hit_from_json() {
        let json = r#"{"on":"window","id":"paint","part":{"kind":"handle","edges":"bottom-right"}}"#;
        let t: HitTarget = serde_json::from_str(json).unwrap();
        assert_eq!(
            t,
            HitTarget::window(
                "paint",
                WindowPart::Handle {
                    edges: ResizeEdges::BOTTOM_RIGHT
                }
            )
        );
    }

    #[test]
    fn control_hit_from_json() {
        let json = r#"{"on":"window","id":"files","part":{"kind":"control","control":"close"}}"#;
        let t: HitTarget = serde_json::from_str(json).unwrap();
        assert_eq!(
            t,
            HitTarget::window(
                "files",
                WindowPart::Control {
                    control: WindowControl::Close
                }
            )
        );
    }

    #[test]
    fn key_event_from_json() {
        let e: InputEvent = serde_json::from_str(r#"{"type":"key_down","key":"ArrowLeft"}"#).unwrap();
        assert_eq!(
            e,
            InputEvent::KeyDown {
                key: Key::ArrowLeft
            }
        );
    }

    #[test]
    fn all_event_variants_distinct() {
        let events = [
            InputEvent::PointerDown {
                x: 0,
                y: 0,
                target: HitTarget::Desktop,
            },
            InputEvent::PointerMove { x: 0, y: 0 },
            InputEvent::PointerUp,
            InputEvent::KeyDown { key: Key::Space },
            InputEvent::FocusLost,
            InputEvent::Quit,
        ];
        for (i, a) in events.iter().enumerate() {
            for (j, b) in events.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "variants {i} and {j} should differ");
                }
            }
        }
    }
}
