#![forbid(unsafe_code)]

//! Handle configuration.
//!
//! A [`HandleConfig`] is copied into each handle set when it is built, so
//! edits only affect containers attached afterwards.

use grip_core::geometry::{Dimension, PxSize};
use serde::{Deserialize, Serialize};

/// Marker identifying a container's handle overlay.
pub const HANDLES_MARKER: &str = "dragHandles";

/// Default thickness of edge bars and side of corner squares.
pub const DEFAULT_HANDLE_WIDTH_PX: f64 = 9.0;

/// Default stacking order of handle shapes.
pub const DEFAULT_Z_INDEX: i32 = 3;

/// Default minimum container width and height.
pub const DEFAULT_MIN_DIMENSION_PX: f64 = 100.0;

/// Tunables for handle layout and resize limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HandleConfig {
    /// Thickness of edge bars and side of corner squares.
    pub handle_width_px: f64,
    pub z_index: i32,
    /// The container never shrinks below this through a drag.
    pub min_dimensions_px: PxSize,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            handle_width_px: DEFAULT_HANDLE_WIDTH_PX,
            z_index: DEFAULT_Z_INDEX,
            min_dimensions_px: PxSize::new(DEFAULT_MIN_DIMENSION_PX, DEFAULT_MIN_DIMENSION_PX),
        }
    }
}

impl HandleConfig {
    #[must_use]
    pub fn handle_width(mut self, px: f64) -> Self {
        self.handle_width_px = px;
        self
    }

    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    #[must_use]
    pub fn min_width(mut self, px: f64) -> Self {
        self.min_dimensions_px.width = px;
        self
    }

    #[must_use]
    pub fn min_height(mut self, px: f64) -> Self {
        self.min_dimensions_px.height = px;
        self
    }

    /// Minimum along `dimension`.
    #[must_use]
    pub const fn min_dimension(&self, dimension: Dimension) -> f64 {
        self.min_dimensions_px.get(dimension)
    }
}
