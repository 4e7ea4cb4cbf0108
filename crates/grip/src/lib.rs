#![forbid(unsafe_code)]

//! GripKit public facade crate.
//!
//! Re-exports the types most hosts need from the internal crates and offers
//! a prelude. A typical integration:
//!
//! ```
//! use grip::prelude::*;
//!
//! let mut scene = Scene::new();
//! let panel = scene.add_element(None, PxRect::new(10.0, 10.0, 200.0, 150.0))?;
//!
//! let mut resizer = ResizeHandleController::new().min_width(120.0);
//! resizer.attach(&mut scene, panel)?;
//!
//! let left = resizer.handle_set(panel).map(|set| set.node(HandlePosition::Left));
//! if let Some(left) = left {
//!     let step = resizer.drag(&mut scene, left, &DragEvent::new(30.0, 60.0, 30.0, 0.0))?;
//!     assert_eq!(step.horizontal, Some(30.0));
//! }
//! assert_eq!(scene.offset_box(panel)?.width, 170.0);
//! # Ok::<(), grip::Error>(())
//! ```

mod error;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use grip_core::{Axis, Dimension, DragEvent, DragTracker, PxPoint, PxRect, PxSize};

#[cfg(feature = "tracing-json")]
pub use grip_core::logging::init_json_logging;

// --- Render re-exports -----------------------------------------------------

pub use grip_render::{
    Attr, Cursor, NodeId, PixelSnap, Scene, ShapeSpec, StyleProp, Surface, SurfaceError,
};

// --- Handle re-exports -----------------------------------------------------

pub use grip_handles::{
    BoundaryClamp, Corner, Edge, HANDLES_MARKER, HandleBinding, HandleConfig, HandlePosition,
    HandleSet, ResizeDirection, ResizeError, ResizeHandleController, Unbounded, ViewportClamp,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DragEvent, DragTracker, Error, HandleConfig, HandlePosition, PxPoint, PxRect, PxSize,
        ResizeDirection, ResizeHandleController, Result, Scene, Surface, ViewportClamp,
    };

    pub use crate::{core, handles, render};
}

pub use grip_core as core;
pub use grip_handles as handles;
pub use grip_render as render;
