#![forbid(unsafe_code)]

//! Boundary clamps: keep a dragged handle inside whatever region the host
//! allows.
//!
//! A clamp sees the handle's rendered rectangle (absolute coordinates) and
//! the proposed deltas, and returns the deltas it permits. The handle code
//! only ever reads the component for the axis it is moving.

use grip_core::geometry::{PxPoint, PxRect};

/// Restricts proposed handle movement.
pub trait BoundaryClamp {
    fn clamp(&self, handle: PxRect, dx: f64, dy: f64) -> PxPoint;
}

impl<F> BoundaryClamp for F
where
    F: Fn(PxRect, f64, f64) -> PxPoint,
{
    fn clamp(&self, handle: PxRect, dx: f64, dy: f64) -> PxPoint {
        self(handle, dx, dy)
    }
}

/// Allows any movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl BoundaryClamp for Unbounded {
    fn clamp(&self, _handle: PxRect, dx: f64, dy: f64) -> PxPoint {
        PxPoint::new(dx, dy)
    }
}

/// Keeps the moved handle inside a viewport rectangle.
///
/// Far edges (right/bottom) are corrected first, then near edges, so a
/// handle larger than the viewport ends up aligned to its top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportClamp {
    pub viewport: PxRect,
}

impl ViewportClamp {
    #[must_use]
    pub const fn new(viewport: PxRect) -> Self {
        Self { viewport }
    }
}

fn clamp_delta(start: f64, end: f64, min: f64, max: f64, delta: f64) -> f64 {
    let mut delta = delta;
    let overflow = end + delta - max;
    if overflow > 0.0 {
        delta -= overflow;
    }
    let underflow = min - (start + delta);
    if underflow > 0.0 {
        delta += underflow;
    }
    delta
}

impl BoundaryClamp for ViewportClamp {
    fn clamp(&self, handle: PxRect, dx: f64, dy: f64) -> PxPoint {
        let vp = &self.viewport;
        PxPoint::new(
            clamp_delta(handle.left(), handle.right(), vp.left(), vp.right(), dx),
            clamp_delta(handle.top(), handle.bottom(), vp.top(), vp.bottom(), dy),
        )
    }
}
