#![forbid(unsafe_code)]

//! Per-step resize report delivered to observers.

use serde::{Deserialize, Serialize};

/// Which axes moved during one drag step, and by how much.
///
/// `None` means the axis did not move. `Some(offset)` carries the committed
/// signed offset: for left/top it is the distance the near edge moved inward,
/// for right/bottom it is the negated growth.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResizeDirection {
    pub horizontal: Option<f64>,
    pub vertical: Option<f64>,
}

impl ResizeDirection {
    /// Nothing moved.
    pub const NONE: Self = Self {
        horizontal: None,
        vertical: None,
    };

    #[must_use]
    pub const fn new(horizontal: Option<f64>, vertical: Option<f64>) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    #[must_use]
    pub const fn horizontal_only(offset: Option<f64>) -> Self {
        Self::new(offset, None)
    }

    #[must_use]
    pub const fn vertical_only(offset: Option<f64>) -> Self {
        Self::new(None, offset)
    }

    #[must_use]
    pub const fn moved_horizontally(&self) -> bool {
        self.horizontal.is_some()
    }

    #[must_use]
    pub const fn moved_vertically(&self) -> bool {
        self.vertical.is_some()
    }

    /// True if either axis moved.
    #[must_use]
    pub const fn is_resize(&self) -> bool {
        self.moved_horizontally() || self.moved_vertically()
    }
}
