#![forbid(unsafe_code)]

//! Render surface: the shapes overlays draw and the geometry they read back.
//!
//! # Role in GripKit
//! `grip-render` is the boundary to whatever actually draws pixels. The
//! [`Surface`] trait covers exactly what overlay code needs (create shapes,
//! get/set numeric attributes, query rendered bounds, write inline element
//! style) and nothing about how drawing happens.
//!
//! [`Scene`] is the bundled implementation: a retained in-memory tree used by
//! headless hosts and by every test in the workspace.

pub mod scene;
pub mod surface;

pub use scene::{PixelSnap, Scene};
pub use surface::{Attr, Cursor, NodeId, ShapeSpec, StyleProp, Surface, SurfaceError};
