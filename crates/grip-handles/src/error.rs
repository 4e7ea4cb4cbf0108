#![forbid(unsafe_code)]

//! Resize errors.
//!
//! Geometry never fails: minimum sizes clamp and overshooting steps are
//! dropped. What can fail is the surface underneath (a container removed
//! behind the controller's back) or a host dispatching a drag for a node the
//! controller never bound.

use std::fmt;

use grip_render::{NodeId, SurfaceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeError {
    /// The surface rejected an operation.
    Surface(SurfaceError),
    /// A drag was dispatched for a node that is not a bound handle.
    NotAHandle(NodeId),
    /// The container has no handles attached by this controller.
    NotAttached(NodeId),
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "surface: {err}"),
            Self::NotAHandle(node) => write!(f, "node {node} is not a resize handle"),
            Self::NotAttached(node) => write!(f, "container {node} has no resize handles"),
        }
    }
}

impl std::error::Error for ResizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::NotAHandle(_) | Self::NotAttached(_) => None,
        }
    }
}

impl From<SurfaceError> for ResizeError {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

/// Standard result type for handle operations.
pub type Result<T> = std::result::Result<T, ResizeError>;
