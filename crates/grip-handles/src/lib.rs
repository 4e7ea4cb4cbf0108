#![forbid(unsafe_code)]

//! Resize handles for rendered containers.
//!
//! # Role in GripKit
//! `grip-handles` overlays eight draggable handles (four edge bars, four
//! corner squares) on a container and turns drag events on them into
//! container resizes, keeping the overlay in sync with the container and
//! never letting a drag shrink it below a configured minimum.
//!
//! # How it fits in the system
//! Everything goes through [`grip_render::Surface`]; the crate never draws.
//! [`ResizeHandleController`] is the entry point: attach it to containers,
//! forward pointer drags on handle nodes, and observe each step through
//! [`ResizeDirection`] callbacks.

pub mod clamp;
pub mod config;
pub mod controller;
pub mod direction;
pub mod error;
pub mod grip;
pub mod handle_set;
pub mod layout;

pub use clamp::{BoundaryClamp, Unbounded, ViewportClamp};
pub use config::{HANDLES_MARKER, HandleConfig};
pub use controller::{HandleBinding, ResizeCallback, ResizeHandleController};
pub use direction::ResizeDirection;
pub use error::{ResizeError, Result};
pub use grip::{Corner, Edge, HandlePosition, Orientation};
pub use handle_set::HandleSet;
