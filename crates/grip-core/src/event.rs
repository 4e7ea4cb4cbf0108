#![forbid(unsafe_code)]

//! Pointer drag events.
//!
//! A [`DragEvent`] carries both the absolute pointer position (in the
//! coordinate space of the dragged shape's parent) and the delta since the
//! previous event of the same drag. Consumers pick whichever suits them:
//! leading edges resize from the absolute position, trailing edges from the
//! delta.
//!
//! [`DragTracker`] derives these events from raw pointer samples.
//!
//! # Invariants
//! 1. A drag sequence is `begin` → zero or more `update` → `end`.
//! 2. `update` before `begin` (or after `end`) yields nothing.
//! 3. The first event after `begin` reports the delta from the press position.

use crate::geometry::{Axis, PxPoint};

/// One pointer-drag step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragEvent {
    /// Pointer x in parent coordinates.
    pub x: f64,
    /// Pointer y in parent coordinates.
    pub y: f64,
    /// Horizontal movement since the previous event.
    pub dx: f64,
    /// Vertical movement since the previous event.
    pub dy: f64,
}

impl DragEvent {
    #[must_use]
    pub const fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self { x, y, dx, dy }
    }

    /// Pointer position.
    #[must_use]
    pub const fn position(&self) -> PxPoint {
        PxPoint::new(self.x, self.y)
    }

    /// Movement since the previous event.
    #[must_use]
    pub const fn delta(&self) -> PxPoint {
        PxPoint::new(self.dx, self.dy)
    }

    /// Absolute pointer coordinate along `axis`.
    #[must_use]
    pub const fn coordinate(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Relative movement along `axis`.
    #[must_use]
    pub const fn delta_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
        }
    }
}

/// Tracks an in-progress drag and turns pointer samples into [`DragEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    start: Option<PxPoint>,
    last: Option<PxPoint>,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the tracker at the press position. Any previous drag is discarded.
    pub fn begin(&mut self, pointer: PxPoint) {
        self.start = Some(pointer);
        self.last = Some(pointer);
    }

    /// Feed a pointer sample. Returns `None` when no drag is active.
    pub fn update(&mut self, pointer: PxPoint) -> Option<DragEvent> {
        let last = self.last?;
        self.last = Some(pointer);
        Some(DragEvent::new(
            pointer.x,
            pointer.y,
            pointer.x - last.x,
            pointer.y - last.y,
        ))
    }

    /// Finish the drag, returning `(start, end)` if one was active.
    pub fn end(&mut self) -> Option<(PxPoint, PxPoint)> {
        let start = self.start.take()?;
        let end = self.last.take().unwrap_or(start);
        Some((start, end))
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }
}
