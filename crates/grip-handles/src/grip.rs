#![forbid(unsafe_code)]

//! Handle identities and their presentation.
//!
//! Eight positions: four edges and four corners. A corner is the composition
//! of one horizontally-moving edge (left/right) and one vertically-moving edge
//! (top/bottom); dragging it runs both edge routines.

use grip_core::geometry::{Axis, Dimension};
use grip_render::Cursor;
use serde::{Deserialize, Serialize};

/// CSS class shared by the left and right handles.
pub const VERTICAL_HANDLE_CLASS: &str = "vertical-drag-handle";
/// CSS class shared by the top and bottom handles.
pub const HORIZONTAL_HANDLE_CLASS: &str = "horizontal-drag-handle";
/// CSS class shared by all corner handles.
pub const CORNER_HANDLE_CLASS: &str = "corner-drag-handle";

/// Handles are hit targets only.
pub const HANDLE_FILL_OPACITY: f32 = 0.0;

/// Which way a handle bar runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Runs top-to-bottom (left and right handles).
    Vertical,
    /// Runs left-to-right (top and bottom handles).
    Horizontal,
}

impl Orientation {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Vertical => VERTICAL_HANDLE_CLASS,
            Self::Horizontal => HORIZONTAL_HANDLE_CLASS,
        }
    }
}

/// One side of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    /// Creation order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// Index into per-edge arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Top => 1,
            Self::Right => 2,
            Self::Bottom => 3,
        }
    }

    /// Left or top edge for `axis`.
    #[must_use]
    pub const fn leading(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::Left,
            Axis::Y => Self::Top,
        }
    }

    /// Right or bottom edge for `axis`.
    #[must_use]
    pub const fn trailing(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::Right,
            Axis::Y => Self::Bottom,
        }
    }

    /// Axis the edge moves along when dragged.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Top | Self::Bottom => Axis::Y,
        }
    }

    #[must_use]
    pub const fn is_leading(self) -> bool {
        matches!(self, Self::Left | Self::Top)
    }

    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Left | Self::Right => Orientation::Vertical,
            Self::Top | Self::Bottom => Orientation::Horizontal,
        }
    }

    /// The two bars whose length follows `dimension`.
    #[must_use]
    pub const fn spanning(dimension: Dimension) -> [Self; 2] {
        match dimension {
            Dimension::Width => [Self::Top, Self::Bottom],
            Dimension::Height => [Self::Left, Self::Right],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }

    /// Shape id, e.g. `dragleft`.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Left => "dragleft",
            Self::Top => "dragtop",
            Self::Right => "dragright",
            Self::Bottom => "dragbottom",
        }
    }

    #[must_use]
    pub const fn cursor(self) -> Cursor {
        match self.orientation() {
            Orientation::Vertical => Cursor::EwResize,
            Orientation::Horizontal => Cursor::NsResize,
        }
    }

    #[must_use]
    pub const fn fill(self) -> &'static str {
        match self.orientation() {
            Orientation::Vertical => "lightgreen",
            Orientation::Horizontal => "lightblue",
        }
    }
}

/// One corner of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Creation order (clockwise from top-left).
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomRight => 2,
            Self::BottomLeft => 3,
        }
    }

    /// The left/right edge meeting at this corner.
    #[must_use]
    pub const fn horizontal_edge(self) -> Edge {
        match self {
            Self::TopLeft | Self::BottomLeft => Edge::Left,
            Self::TopRight | Self::BottomRight => Edge::Right,
        }
    }

    /// The top/bottom edge meeting at this corner.
    #[must_use]
    pub const fn vertical_edge(self) -> Edge {
        match self {
            Self::TopLeft | Self::TopRight => Edge::Top,
            Self::BottomLeft | Self::BottomRight => Edge::Bottom,
        }
    }

    /// Shape id, e.g. `dragtopleft`.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::TopLeft => "dragtopleft",
            Self::TopRight => "dragtopright",
            Self::BottomRight => "dragbottomright",
            Self::BottomLeft => "dragbottomleft",
        }
    }

    /// Class list: the shared corner class plus both side names.
    #[must_use]
    pub fn class(self) -> String {
        format!(
            "{CORNER_HANDLE_CLASS} {} {}",
            self.vertical_edge().as_str(),
            self.horizontal_edge().as_str()
        )
    }

    #[must_use]
    pub const fn cursor(self) -> Cursor {
        match self {
            Self::TopLeft | Self::BottomRight => Cursor::NwseResize,
            Self::TopRight | Self::BottomLeft => Cursor::NeswResize,
        }
    }
}

/// Any of the eight handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlePosition {
    Left,
    Top,
    Right,
    Bottom,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl HandlePosition {
    pub const ALL: [Self; 8] = [
        Self::Left,
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    #[must_use]
    pub const fn as_edge(self) -> Option<Edge> {
        match self {
            Self::Left => Some(Edge::Left),
            Self::Top => Some(Edge::Top),
            Self::Right => Some(Edge::Right),
            Self::Bottom => Some(Edge::Bottom),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_corner(self) -> Option<Corner> {
        match self {
            Self::TopLeft => Some(Corner::TopLeft),
            Self::TopRight => Some(Corner::TopRight),
            Self::BottomRight => Some(Corner::BottomRight),
            Self::BottomLeft => Some(Corner::BottomLeft),
            _ => None,
        }
    }

    /// Edge driving horizontal resizing, if any.
    #[must_use]
    pub const fn horizontal_edge(self) -> Option<Edge> {
        match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => Some(Edge::Left),
            Self::Right | Self::TopRight | Self::BottomRight => Some(Edge::Right),
            Self::Top | Self::Bottom => None,
        }
    }

    /// Edge driving vertical resizing, if any.
    #[must_use]
    pub const fn vertical_edge(self) -> Option<Edge> {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Some(Edge::Top),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(Edge::Bottom),
            Self::Left | Self::Right => None,
        }
    }

    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Left => Edge::Left.element_id(),
            Self::Top => Edge::Top.element_id(),
            Self::Right => Edge::Right.element_id(),
            Self::Bottom => Edge::Bottom.element_id(),
            Self::TopLeft => Corner::TopLeft.element_id(),
            Self::TopRight => Corner::TopRight.element_id(),
            Self::BottomRight => Corner::BottomRight.element_id(),
            Self::BottomLeft => Corner::BottomLeft.element_id(),
        }
    }
}

impl From<Edge> for HandlePosition {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Left => Self::Left,
            Edge::Top => Self::Top,
            Edge::Right => Self::Right,
            Edge::Bottom => Self::Bottom,
        }
    }
}

impl From<Corner> for HandlePosition {
    fn from(corner: Corner) -> Self {
        match corner {
            Corner::TopLeft => Self::TopLeft,
            Corner::TopRight => Self::TopRight,
            Corner::BottomRight => Self::BottomRight,
            Corner::BottomLeft => Self::BottomLeft,
        }
    }
}
