//! Pointer interaction: turns a down/move/up stream into drag or resize.
//!
//! At most one session exists at a time. A pointer-down on a resize handle
//! only ever starts a resize; the title bar only ever starts a drag. Each
//! move applies the delta since the previous move, not since the gesture
//! began, so an irregular event stream cannot make the window drift.

use retro_types::geometry::{Point, ResizeEdges};
use retro_types::input::{HitTarget, WindowControl, WindowPart};

use crate::manager::WindowManager;

/// An in-progress title-bar drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: String,
    pub last: Point,
}

/// An in-progress edge or corner resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: String,
    pub edges: ResizeEdges,
    pub last: Point,
}

/// What a pointer-down did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Landed on the bare desktop.
    Desktop,
    /// Focused a window without starting a session.
    Focused(String),
    /// Focused a window and started dragging it.
    DragStarted(String),
    /// Focused a window and started resizing it.
    ResizeStarted(String, ResizeEdges),
    /// Hit a title-bar button. The caller runs the control; focus is left
    /// alone.
    Control(String, WindowControl),
    /// Target window is not open.
    Ignored,
}

/// Pointer gesture state. Holds at most one of drag or resize.
#[derive(Debug, Clone, Default)]
pub struct PointerController {
    drag: Option<DragSession>,
    resize: Option<ResizeSession>,
}

impl PointerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer-down at `pos` over `target`.
    ///
    /// Any session left over from a missed pointer-up is dropped first.
    pub fn pointer_down(
        &mut self,
        wm: &mut WindowManager,
        pos: Point,
        target: &HitTarget,
    ) -> PointerOutcome {
        self.clear_all();

        let HitTarget::Window { id, part } = target else {
            return PointerOutcome::Desktop;
        };
        if !wm.is_open(id) {
            log::debug!("Pointer-down on stale window '{id}' ignored");
            return PointerOutcome::Ignored;
        }

        match *part {
            WindowPart::Control { control } => PointerOutcome::Control(id.clone(), control),
            WindowPart::Handle { edges } => {
                wm.focus(id);
                self.resize = Some(ResizeSession {
                    window_id: id.clone(),
                    edges,
                    last: pos,
                });
                log::debug!("Resize started on '{id}' ({edges})");
                PointerOutcome::ResizeStarted(id.clone(), edges)
            },
            WindowPart::TitleBar => {
                wm.focus(id);
                self.drag = Some(DragSession {
                    window_id: id.clone(),
                    last: pos,
                });
                log::debug!("Drag started on '{id}'");
                PointerOutcome::DragStarted(id.clone())
            },
            WindowPart::Body => {
                wm.focus(id);
                PointerOutcome::Focused(id.clone())
            },
        }
    }

    /// Handle a pointer-move to `pos`. Returns whether a window changed.
    ///
    /// With no session this does nothing. If the session's window has been
    /// closed the move is dropped, but the last position still advances.
    pub fn pointer_move(&mut self, wm: &mut WindowManager, pos: Point) -> bool {
        if let Some(drag) = self.drag.as_mut() {
            let (dx, dy) = pos.delta_from(drag.last);
            drag.last = pos;
            return wm.move_by(&drag.window_id, dx, dy);
        }
        if let Some(resize) = self.resize.as_mut() {
            let (dx, dy) = pos.delta_from(resize.last);
            resize.last = pos;
            return wm.resize_by(&resize.window_id, dx, dy, resize.edges);
        }
        false
    }

    /// Handle a pointer-up: end whichever session is active.
    pub fn pointer_up(&mut self) {
        self.clear_all();
    }

    /// Drop both sessions. Call on any global deactivation (host window
    /// blur) so a missed pointer-up cannot leave a window stuck to the
    /// pointer.
    pub fn clear_all(&mut self) {
        if let Some(drag) = self.drag.take() {
            log::debug!("Drag ended on '{}'", drag.window_id);
        }
        if let Some(resize) = self.resize.take() {
            log::debug!("Resize ended on '{}'", resize.window_id);
        }
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn resize_session(&self) -> Option<&ResizeSession> {
        self.resize.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.drag.is_none() && self.resize.is_none()
    }
}
