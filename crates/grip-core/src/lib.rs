#![forbid(unsafe_code)]

//! Core: pixel geometry, drag events, and logging.
//!
//! # Role in GripKit
//! `grip-core` holds the vocabulary shared by every other crate: rectangles
//! and points in pixel space, the axis/dimension pair used to write
//! axis-generic resize code once, and the drag events fed to handles.
//!
//! # How it fits in the system
//! `grip-render` describes surfaces in these coordinates and `grip-handles`
//! consumes [`event::DragEvent`]s to resize containers on those surfaces.

pub mod event;
pub mod geometry;
pub mod logging;

pub use event::{DragEvent, DragTracker};
pub use geometry::{Axis, Dimension, PxPoint, PxRect, PxSize};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
