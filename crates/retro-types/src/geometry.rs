//! Screen-space geometry: points, rectangles, and resize edge sets.
//!
//! Coordinates are signed and unbounded. Windows may sit partially or fully
//! off-screen, so nothing here clamps to a viewport.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A position in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`, saturating at the `i32` range.
    pub fn delta_from(self, origin: Point) -> (i32, i32) {
        (self.x.saturating_sub(origin.x), self.y.saturating_sub(origin.y))
    }
}

/// An axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same size, shifted by `(dx, dy)`. The origin saturates rather than
    /// wrapping to the far side of the coordinate space.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    /// Whether `p` lies inside (right and bottom edges exclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.x < self.x.saturating_add(self.width)
            && p.y >= self.y
            && p.y < self.y.saturating_add(self.height)
    }

    /// The region below a title bar of height `title_bar`.
    ///
    /// The height never goes negative even if the title bar is taller than
    /// the rectangle.
    pub fn below(&self, title_bar: i32) -> Self {
        Self {
            x: self.x,
            y: self.y.saturating_add(title_bar),
            width: self.width,
            height: self.height.saturating_sub(title_bar).max(0),
        }
    }
}

/// The set of window edges a resize handle drags.
///
/// Edge handles set one flag, corner handles set two. Horizontal and
/// vertical flags are applied independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResizeEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ResizeEdges {
    pub const TOP: Self = Self::edges(true, false, false, false);
    pub const BOTTOM: Self = Self::edges(false, true, false, false);
    pub const LEFT: Self = Self::edges(false, false, true, false);
    pub const RIGHT: Self = Self::edges(false, false, false, true);
    pub const TOP_LEFT: Self = Self::edges(true, false, true, false);
    pub const TOP_RIGHT: Self = Self::edges(true, false, false, true);
    pub const BOTTOM_LEFT: Self = Self::edges(false, true, true, false);
    pub const BOTTOM_RIGHT: Self = Self::edges(false, true, false, true);

    /// All eight handles a window exposes.
    pub const HANDLES: [Self; 8] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
        Self::TOP,
        Self::BOTTOM,
        Self::LEFT,
        Self::RIGHT,
    ];

    const fn edges(top: bool, bottom: bool, left: bool, right: bool) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// True if no edge is selected.
    pub fn is_empty(&self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }

    /// Handle name, e.g. `"top-left"` or `"right"`.
    pub fn name(&self) -> String {
        let vertical = if self.top {
            Some("top")
        } else if self.bottom {
            Some("bottom")
        } else {
            None
        };
        let horizontal = if self.left {
            Some("left")
        } else if self.right {
            Some("right")
        } else {
            None
        };
        match (vertical, horizontal) {
            (Some(v), Some(h)) => format!("{v}-{h}"),
            (Some(v), None) => v.to_string(),
            (None, Some(h)) => h.to_string(),
            (None, None) => "none".to_string(),
        }
    }
}

impl fmt::Display for ResizeEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for ResizeEdges {
    type Err = String;

    /// Parse a handle name. Parts are joined by `-` and may come in any
    /// order, so `"left-bottom"` and `"bottom-left"` are equal. `"none"` is
    /// the empty set, matching [`ResizeEdges::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut edges = ResizeEdges::default();
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(edges);
        }
        for part in s.split('-') {
            match part.trim().to_ascii_lowercase().as_str() {
                "top" | "n" => edges.top = true,
                "bottom" | "s" => edges.bottom = true,
                "left" | "w" => edges.left = true,
                "right" | "e" => edges.right = true,
                other => return Err(format!("unknown resize edge '{other}' in '{s}'")),
            }
        }
        if (edges.top && edges.bottom) || (edges.left && edges.right) {
            return Err(format!("opposite edges in resize handle '{s}'"));
        }
        Ok(edges)
    }
}

impl TryFrom<String> for ResizeEdges {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResizeEdges> for String {
    fn from(edges: ResizeEdges) -> Self {
        edges.name()
    }
}
