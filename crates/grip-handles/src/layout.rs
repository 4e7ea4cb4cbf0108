#![forbid(unsafe_code)]

//! Pure handle geometry.
//!
//! Everything here is arithmetic on plain values; the surface-facing code in
//! [`handle_set`](crate::handle_set) reads live geometry and feeds it through
//! these functions.
//!
//! With handle width `h` and overlay size `W x H`:
//!
//! ```text
//!  (0,0) ┌──┬──────── top ────────┬──┐ (W-h,0)
//!        ├──┘                     └──┤
//!        │l                         r│   left/right: x = 0 | W-h, y = h, H-2h tall
//!        │                           │   top/bottom: x = h, y = 0 | H-h, W-2h wide
//!        ├──┐                     ┌──┤
//! (0,H-h)└──┴────── bottom ───────┴──┘ (W-h,H-h)
//! ```

use grip_core::geometry::{PxPoint, PxRect, PxSize};

use crate::grip::{Corner, Edge};

/// Bar rectangle for `edge` on an overlay of `size`.
#[must_use]
pub fn edge_rect(edge: Edge, size: PxSize, handle_width: f64) -> PxRect {
    let h = handle_width;
    match edge {
        Edge::Left => PxRect::new(0.0, h, h, size.height - 2.0 * h),
        Edge::Right => PxRect::new(size.width - h, h, h, size.height - 2.0 * h),
        Edge::Top => PxRect::new(h, 0.0, size.width - 2.0 * h, h),
        Edge::Bottom => PxRect::new(h, size.height - h, size.width - 2.0 * h, h),
    }
}

/// Top-left of the square for `corner` on an overlay of `size`.
#[must_use]
pub fn corner_origin(corner: Corner, size: PxSize, handle_width: f64) -> PxPoint {
    let far_x = size.width - handle_width;
    let far_y = size.height - handle_width;
    match corner {
        Corner::TopLeft => PxPoint::new(0.0, 0.0),
        Corner::TopRight => PxPoint::new(far_x, 0.0),
        Corner::BottomRight => PxPoint::new(far_x, far_y),
        Corner::BottomLeft => PxPoint::new(0.0, far_y),
    }
}

/// How an offset changes the overlay dimension it is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Positive offsets grow the dimension (right/bottom deltas).
    Add,
    /// Positive offsets shrink the dimension (left/top positions).
    Subtract,
}

impl Operator {
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
        }
    }
}

/// Clamp `offset` so that `op(current, offset)` never drops below `minimum`.
///
/// When the anticipated dimension would be too small, the returned offset
/// lands it exactly on `minimum`.
#[must_use]
pub fn enforce_min_dist_to_parallel_bar(offset: f64, current: f64, minimum: f64, op: Operator) -> f64 {
    let anticipated = op.apply(current, offset);
    if anticipated < minimum {
        let difference = minimum - anticipated;
        return op.apply(offset, difference);
    }
    offset
}

/// Whether a trailing-edge step must be discarded because the pointer is on
/// the wrong side of the handle for the direction of travel.
///
/// `offset` is the signed offset about to be committed (negative grows),
/// `pointer` the event coordinate and `handle` the handle's committed
/// coordinate, both in overlay space.
#[must_use]
pub fn pointer_fallen_behind(offset: f64, pointer: f64, handle: f64) -> bool {
    let crossed_min_size = offset < 0.0 && pointer < handle;
    let exited_coordinate_space = offset > 0.0 && pointer > handle;
    crossed_min_size || exited_coordinate_space
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 9.0;

    #[test]
    fn edge_rects_inset_by_handle_width() {
        let size = PxSize::new(200.0, 150.0);
        assert_eq!(edge_rect(Edge::Left, size, H), PxRect::new(0.0, 9.0, 9.0, 132.0));
        assert_eq!(edge_rect(Edge::Right, size, H), PxRect::new(191.0, 9.0, 9.0, 132.0));
        assert_eq!(edge_rect(Edge::Top, size, H), PxRect::new(9.0, 0.0, 182.0, 9.0));
        assert_eq!(edge_rect(Edge::Bottom, size, H), PxRect::new(9.0, 141.0, 182.0, 9.0));
    }

    #[test]
    fn corners_pin_to_overlay_corners() {
        let size = PxSize::new(200.0, 150.0);
        assert_eq!(corner_origin(Corner::TopLeft, size, H), PxPoint::new(0.0, 0.0));
        assert_eq!(corner_origin(Corner::TopRight, size, H), PxPoint::new(191.0, 0.0));
        assert_eq!(corner_origin(Corner::BottomRight, size, H), PxPoint::new(191.0, 141.0));
        assert_eq!(corner_origin(Corner::BottomLeft, size, H), PxPoint::new(0.0, 141.0));
    }

    #[test]
    fn min_dist_subtract_clamps_to_minimum() {
        // width 200, min 100, left handle dragged 150px inward
        assert_eq!(
            enforce_min_dist_to_parallel_bar(150.0, 200.0, 100.0, Operator::Subtract),
            100.0
        );
        assert_eq!(
            enforce_min_dist_to_parallel_bar(40.0, 200.0, 100.0, Operator::Subtract),
            40.0
        );
        // growing is never clamped
        assert_eq!(
            enforce_min_dist_to_parallel_bar(-30.0, 200.0, 100.0, Operator::Subtract),
            -30.0
        );
    }

    #[test]
    fn min_dist_add_clamps_to_minimum() {
        assert_eq!(
            enforce_min_dist_to_parallel_bar(-150.0, 200.0, 100.0, Operator::Add),
            -100.0
        );
        assert_eq!(
            enforce_min_dist_to_parallel_bar(-10.0, 200.0, 100.0, Operator::Add),
            -10.0
        );
        assert_eq!(
            enforce_min_dist_to_parallel_bar(25.0, 200.0, 100.0, Operator::Add),
            25.0
        );
    }

    #[test]
    fn min_dist_at_minimum_yields_zero_shrink() {
        assert_eq!(
            enforce_min_dist_to_parallel_bar(5.0, 100.0, 100.0, Operator::Subtract),
            0.0
        );
        assert_eq!(
            enforce_min_dist_to_parallel_bar(-5.0, 100.0, 100.0, Operator::Add),
            0.0
        );
    }

    #[test]
    fn min_dist_grows_undersized_dimension_to_minimum() {
        assert_eq!(
            enforce_min_dist_to_parallel_bar(0.0, 80.0, 100.0, Operator::Subtract),
            -20.0
        );
    }

    #[test]
    fn overshoot_guard() {
        // growing while the pointer trails the handle
        assert!(pointer_fallen_behind(-3.0, 180.0, 191.0));
        assert!(!pointer_fallen_behind(-3.0, 195.0, 191.0));
        // shrinking while the pointer is beyond the handle
        assert!(pointer_fallen_behind(4.0, 199.0, 191.0));
        assert!(!pointer_fallen_behind(4.0, 185.0, 191.0));
        // no movement is never an overshoot
        assert!(!pointer_fallen_behind(0.0, 0.0, 191.0));
    }
}
