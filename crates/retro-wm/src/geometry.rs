//! Resize engine: new window bounds from a resize delta.

use retro_types::config::WmConfig;
use retro_types::geometry::{Rect, ResizeEdges};

/// Lower bounds on window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    pub min_width: i32,
    pub min_height: i32,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_width: 200,
            min_height: 150,
        }
    }
}

impl From<&WmConfig> for SizeLimits {
    fn from(config: &WmConfig) -> Self {
        Self {
            min_width: config.min_width,
            min_height: config.min_height,
        }
    }
}

/// Apply a resize delta `(dx, dy)` to `rect` along `edges`.
///
/// Dragging the left or top edge keeps the opposite edge still by shifting
/// the origin, but only while the new size is strictly above the minimum.
/// Once clamped, the origin stays where it was so a window held at minimum
/// size cannot creep across the screen.
pub fn resize_rect(rect: Rect, dx: i32, dy: i32, edges: ResizeEdges, limits: SizeLimits) -> Rect {
    let mut out = rect;

    if edges.right {
        out.width = rect.width.saturating_add(dx).max(limits.min_width);
    }
    if edges.left {
        let width_change = dx.saturating_neg();
        out.width = rect.width.saturating_add(width_change).max(limits.min_width);
        if out.width > limits.min_width {
            // Shift by the width actually gained so the right edge holds
            // even when the size saturated.
            out.x = rect.x.saturating_sub(out.width.saturating_sub(rect.width));
        }
    }
    if edges.bottom {
        out.height = rect.height.saturating_add(dy).max(limits.min_height);
    }
    if edges.top {
        let height_change = dy.saturating_neg();
        out.height = rect.height.saturating_add(height_change).max(limits.min_height);
        if out.height > limits.min_height {
            out.y = rect.y.saturating_sub(out.height.saturating_sub(rect.height));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Rect = Rect::new(100, 100, 300, 200);

    fn resize(dx: i32, dy: i32, edges: ResizeEdges) -> Rect {
        resize_rect(START, dx, dy, edges, SizeLimits::default())
    }

    #[test]
    fn left_grow_shifts_origin() {
        let r = resize(-50, 0, ResizeEdges::LEFT);
        assert_eq!(r.width, 350);
        assert_eq!(r.x, 50);
    }

    #[test]
    fn left_shrink_past_minimum_keeps_origin() {
        let r = resize(200, 0, ResizeEdges::LEFT);
        assert_eq!(r.width, 200);
        assert_eq!(r.x, 100);
    }

    #[test]
    fn left_shrink_above_minimum_moves_origin() {
        let r = resize(60, 0, ResizeEdges::LEFT);
        assert_eq!(r.width, 240);
        assert_eq!(r.x, 160);
    }

    #[test]
    fn left_shrink_landing_exactly_on_minimum_keeps_origin() {
        let r = resize(100, 0, ResizeEdges::LEFT);
        assert_eq!(r.width, 200);
        assert_eq!(r.x, 100);
    }

    #[test]
    fn right_edge_never_moves_origin() {
        let r = resize(-500, 0, ResizeEdges::RIGHT);
        assert_eq!(r, Rect::new(100, 100, 200, 200));
        let r = resize(40, 0, ResizeEdges::RIGHT);
        assert_eq!(r, Rect::new(100, 100, 340, 200));
    }

    #[test]
    fn top_grow_shifts_origin() {
        let r = resize(0, -30, ResizeEdges::TOP);
        assert_eq!(r, Rect::new(100, 70, 300, 230));
    }

    #[test]
    fn top_shrink_clamps_without_moving() {
        let r = resize(0, 120, ResizeEdges::TOP);
        assert_eq!(r, Rect::new(100, 100, 300, 150));
    }

    #[test]
    fn bottom_edge_clamps() {
        let r = resize(0, -100, ResizeEdges::BOTTOM);
        assert_eq!(r.height, 150);
        assert_eq!(r.y, 100);
    }

    #[test]
    fn corner_axes_are_independent() {
        let r = resize(25, -10, ResizeEdges::BOTTOM_RIGHT);
        assert_eq!(r, Rect::new(100, 100, 325, 190));

        let r = resize(-20, -20, ResizeEdges::TOP_LEFT);
        assert_eq!(r, Rect::new(80, 80, 320, 220));

        // Horizontal clamps while vertical still compensates.
        let r = resize(500, -20, ResizeEdges::TOP_LEFT);
        assert_eq!(r, Rect::new(100, 80, 200, 220));
    }

    #[test]
    fn vertical_handle_ignores_dx() {
        let r = resize(77, 10, ResizeEdges::BOTTOM);
        assert_eq!(r.width, 300);
        assert_eq!(r.x, 100);
    }

    #[test]
    fn empty_edges_is_identity() {
        assert_eq!(resize(50, 50, ResizeEdges::default()), START);
    }

    #[test]
    fn extreme_deltas_saturate() {
        let r = resize(i32::MIN, 0, ResizeEdges::LEFT);
        assert_eq!(r.width, i32::MAX);
        assert_eq!(r.x + r.width, START.x + START.width);
        assert!(r.x < START.x);

        let r = resize(i32::MAX, i32::MAX, ResizeEdges::BOTTOM_RIGHT);
        assert_eq!((r.width, r.height), (i32::MAX, i32::MAX));
        assert_eq!((r.x, r.y), (START.x, START.y));

        let r = resize(i32::MAX, i32::MAX, ResizeEdges::TOP_LEFT);
        assert_eq!(r, Rect::new(100, 100, 200, 150));
    }

    #[test]
    fn custom_limits() {
        let limits = SizeLimits {
            min_width: 50,
            min_height: 40,
        };
        let r = resize_rect(START, 260, 0, ResizeEdges::LEFT, limits);
        assert_eq!(r.width, 50);
        assert_eq!(r.x, 100);
    }
}
