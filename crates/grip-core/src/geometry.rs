#![forbid(unsafe_code)]

//! Pixel-space geometric primitives.
//!
//! All coordinates are CSS pixels as `f64`, origin at the top-left, with `y`
//! growing downward. Values are never rounded implicitly; surfaces that snap
//! to device pixels do so when reporting bounding rectangles.

use serde::{Deserialize, Serialize};

/// A point (or a 2D delta) in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PxPoint {
    pub x: f64,
    pub y: f64,
}

impl PxPoint {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Build a point that is `value` along `axis` and zero on the other axis.
    #[inline]
    #[must_use]
    pub const fn on_axis(axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Self::new(value, 0.0),
            Axis::Y => Self::new(0.0, value),
        }
    }

    /// Translate by a delta.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for PxPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PxSize {
    pub width: f64,
    pub height: f64,
}

impl PxSize {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size along `dimension`.
    #[inline]
    #[must_use]
    pub const fn get(self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    /// True when either side is zero or negative.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PxRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PxRect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(size: PxSize) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    #[must_use]
    pub const fn from_origin_size(origin: PxPoint, size: PxSize) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    #[must_use]
    pub const fn origin(&self) -> PxPoint {
        PxPoint::new(self.x, self.y)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }

    /// Left edge (alias for x).
    #[inline]
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Near edge along `axis` (left or top).
    #[inline]
    #[must_use]
    pub const fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Far edge along `axis` (right or bottom).
    #[inline]
    #[must_use]
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.right(),
            Axis::Y => self.bottom(),
        }
    }

    /// Extent along `dimension`.
    #[inline]
    #[must_use]
    pub const fn extent(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    /// Check if the rectangle has zero area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Move the rectangle by a delta, keeping its size.
    #[inline]
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Snap each edge to the nearest whole pixel, halves rounding up.
    ///
    /// Width and height are derived from the snapped edges, so two rectangles
    /// that share an edge still share it after snapping, and moving a
    /// rectangle by whole pixels never changes its snapped size.
    #[must_use]
    pub fn round_edges(&self) -> Self {
        let left = snap(self.left());
        let top = snap(self.top());
        let right = snap(self.right());
        let bottom = snap(self.bottom());
        Self::new(left, top, right - left, bottom - top)
    }

    /// The smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x, bottom - y)
    }
}

fn snap(value: f64) -> f64 {
    let whole = value.floor();
    if value - whole >= 0.5 { whole + 1.0 } else { whole }
}

/// Coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The dimension measured along this axis.
    #[inline]
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::X => Dimension::Width,
            Self::Y => Dimension::Height,
        }
    }

}

/// Rectangle dimension ("width" or "height").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    /// The axis this dimension is measured along.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Width => Axis::X,
            Self::Height => Axis::Y,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Dimension, PxPoint, PxRect, PxSize};

    #[test]
    fn rect_edges() {
        let rect = PxRect::new(10.0, 20.0, 200.0, 150.0);
        assert_eq!(rect.right(), 210.0);
        assert_eq!(rect.bottom(), 170.0);
        assert_eq!(rect.start(Axis::Y), 20.0);
        assert_eq!(rect.end(Axis::X), 210.0);
        assert_eq!(rect.extent(Dimension::Height), 150.0);
    }

    #[test]
    fn rect_round_edges_keeps_shared_edges() {
        let a = PxRect::new(0.4, 0.0, 10.2, 5.0);
        let b = PxRect::new(10.6, 0.0, 3.0, 5.0);
        let (ra, rb) = (a.round_edges(), b.round_edges());
        assert_eq!(ra.right(), rb.left());
        assert_eq!(ra, PxRect::new(0.0, 0.0, 11.0, 5.0));
    }

    #[test]
    fn rect_round_edges_rounds_halves_up() {
        let negative = PxRect::new(-0.5, -1.5, 1.0, 1.0).round_edges();
        assert_eq!(negative, PxRect::new(0.0, -1.0, 1.0, 1.0));
        let positive = PxRect::new(12.5, 0.0, 3.0, 1.0).round_edges();
        assert_eq!(positive, PxRect::new(13.0, 0.0, 3.0, 1.0));
    }

    #[test]
    fn rect_union_covers_both() {
        let a = PxRect::new(0.0, 0.0, 4.0, 4.0);
        let b = PxRect::new(2.0, 2.0, 4.0, 4.0);
        assert_eq!(a.union(&b), PxRect::new(0.0, 0.0, 6.0, 6.0));
    }

    #[test]
    fn size_accessors() {
        let size = PxSize::new(200.0, 150.0);
        assert_eq!(size.get(Dimension::Height), 150.0);
        assert!(PxSize::new(0.0, 3.0).is_empty());
    }

    #[test]
    fn axis_dimension_pairs() {
        assert_eq!(Axis::X.dimension(), Dimension::Width);
        assert_eq!(Dimension::Height.axis(), Axis::Y);
        assert_eq!(PxPoint::on_axis(Axis::Y, 3.0), PxPoint::new(0.0, 3.0));
        assert_eq!(PxPoint::new(1.0, 2.0).along(Axis::Y), 2.0);
    }

    #[test]
    fn size_serializes_plain_fields() {
        let json = serde_json::to_string(&PxSize::new(100.0, 80.0)).expect("serialize");
        assert_eq!(json, r#"{"width":100.0,"height":80.0}"#);
    }
}
