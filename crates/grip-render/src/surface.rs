#![forbid(unsafe_code)]

//! The drawing-surface contract used by overlays.
//!
//! A [`Surface`] is a retained tree of nodes: host **elements** (boxes with
//! inline `left/top/width/height` style), **overlays** (a sized layer stacked
//! on an element), **groups**, and **rects**. Callers address nodes by
//! [`NodeId`] and never hold references into the tree, so the same code runs
//! against an in-memory [`Scene`](crate::scene::Scene) or a host-backed
//! implementation.
//!
//! Two kinds of geometry are exposed and they are deliberately distinct:
//! attributes ([`Surface::attr`]) are the values last written, while
//! [`Surface::bounding_rect`] is what the backend actually rendered, in
//! absolute coordinates. Resize code reads the latter when it must not drift
//! from layout rounding.

use std::fmt;

use grip_core::geometry::{Axis, Dimension, PxRect, PxSize};

/// Stable identifier for surface nodes.
///
/// `0` is reserved/invalid so IDs are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a node ID, rejecting 0.
    #[must_use]
    pub const fn new(raw: u32) -> Option<Self> {
        if raw == 0 { None } else { Some(Self(raw)) }
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Id for a zero-based arena slot. Saturates at `u32::MAX`.
    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index + 1).unwrap_or(u32::MAX))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Numeric shape attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    X,
    Y,
    Width,
    Height,
}

impl Attr {
    /// Position attribute for `axis`.
    #[must_use]
    pub const fn position(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
        }
    }

    /// Size attribute for `dimension`.
    #[must_use]
    pub const fn extent(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Width => Self::Width,
            Dimension::Height => Self::Height,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// Inline pixel style properties of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Left,
    Top,
    Width,
    Height,
}

impl StyleProp {
    /// Offset property for `axis` (`left` or `top`).
    #[must_use]
    pub const fn position(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::Left,
            Axis::Y => Self::Top,
        }
    }

    /// Size property for `dimension`.
    #[must_use]
    pub const fn extent(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Width => Self::Width,
            Dimension::Height => Self::Height,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// Pointer cursor shown while hovering a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    #[default]
    Default,
    EwResize,
    NsResize,
    NwseResize,
    NeswResize,
}

impl Cursor {
    /// CSS `cursor` keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::EwResize => "ew-resize",
            Self::NsResize => "ns-resize",
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
        }
    }
}

/// Everything needed to create a rect shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    /// Element id (unique within its overlay).
    pub id: String,
    /// Space-separated CSS classes.
    pub class: String,
    /// Position relative to the parent, and size.
    pub rect: PxRect,
    pub fill: &'static str,
    pub fill_opacity: f32,
    pub cursor: Cursor,
    pub z_index: i32,
}

impl ShapeSpec {
    /// Start a rect spec with default presentation.
    #[must_use]
    pub fn rect(id: impl Into<String>, rect: PxRect) -> Self {
        Self {
            id: id.into(),
            class: String::new(),
            rect,
            fill: "none",
            fill_opacity: 1.0,
            cursor: Cursor::Default,
            z_index: 0,
        }
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    #[must_use]
    pub fn fill(mut self, fill: &'static str) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn fill_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = opacity;
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// True if `class` appears in the class list.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }
}

/// Errors reported by surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// The node does not exist (never created, or removed).
    UnknownNode(NodeId),
    /// Inline style was written to something that is not an element.
    NotAnElement(NodeId),
    /// The node kind does not carry this attribute.
    UnsupportedAttr { node: NodeId, attr: Attr },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(node) => write!(f, "unknown surface node {node}"),
            Self::NotAnElement(node) => write!(f, "node {node} is not an element"),
            Self::UnsupportedAttr { node, attr } => {
                write!(f, "node {node} has no '{}' attribute", attr.as_str())
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// A retained drawing surface.
pub trait Surface {
    /// Find a direct child of `parent` created with `marker`.
    fn find_child(&self, parent: NodeId, marker: &str) -> Result<Option<NodeId>, SurfaceError>;

    /// Stack a new overlay of `size` on `parent`, identified by `marker`.
    fn append_overlay(
        &mut self,
        parent: NodeId,
        marker: &str,
        size: PxSize,
    ) -> Result<NodeId, SurfaceError>;

    /// Append an empty group under `parent`.
    fn append_group(&mut self, parent: NodeId) -> Result<NodeId, SurfaceError>;

    /// Append a rect shape under `parent`.
    fn append_rect(&mut self, parent: NodeId, spec: ShapeSpec) -> Result<NodeId, SurfaceError>;

    /// Remove `node` and its whole subtree.
    fn remove(&mut self, node: NodeId) -> Result<(), SurfaceError>;

    /// Read a numeric attribute as last written.
    fn attr(&self, node: NodeId, attr: Attr) -> Result<f64, SurfaceError>;

    /// Write a numeric attribute.
    fn set_attr(&mut self, node: NodeId, attr: Attr, value: f64) -> Result<(), SurfaceError>;

    /// Rendered bounds in absolute coordinates.
    fn bounding_rect(&self, node: NodeId) -> Result<PxRect, SurfaceError>;

    /// Rendered `offsetLeft/offsetTop/offsetWidth/offsetHeight` of an element.
    fn offset_box(&self, element: NodeId) -> Result<PxRect, SurfaceError>;

    /// Write one inline pixel style property of an element.
    fn set_style_px(
        &mut self,
        element: NodeId,
        prop: StyleProp,
        px: f64,
    ) -> Result<(), SurfaceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_rejects_zero() {
        assert!(NodeId::new(0).is_none());
        assert_eq!(NodeId::new(7).map(NodeId::get), Some(7));
        assert_eq!(NodeId::new(7).map(|id| id.to_string()).as_deref(), Some("#7"));
    }

    #[test]
    fn attr_and_style_map_axes() {
        assert_eq!(Attr::position(Axis::Y), Attr::Y);
        assert_eq!(Attr::extent(Dimension::Width), Attr::Width);
        assert_eq!(StyleProp::position(Axis::X), StyleProp::Left);
        assert_eq!(StyleProp::extent(Dimension::Height).as_str(), "height");
    }

    #[test]
    fn shape_spec_builder_and_classes() {
        let spec = ShapeSpec::rect("dragtopleft", PxRect::new(0.0, 0.0, 9.0, 9.0))
            .class("corner-drag-handle top left")
            .fill("red")
            .fill_opacity(0.0)
            .cursor(Cursor::NwseResize)
            .z_index(3);
        assert!(spec.has_class("top"));
        assert!(!spec.has_class("corner"));
        assert_eq!(spec.cursor.as_css(), "nwse-resize");
        assert_eq!(spec.z_index, 3);
    }

    #[test]
    fn errors_display() {
        let node = NodeId::new(3).expect("non-zero");
        assert_eq!(
            SurfaceError::UnsupportedAttr {
                node,
                attr: Attr::Width
            }
            .to_string(),
            "node #3 has no 'width' attribute"
        );
        assert_eq!(
            SurfaceError::UnknownNode(node).to_string(),
            "unknown surface node #3"
        );
    }
}
