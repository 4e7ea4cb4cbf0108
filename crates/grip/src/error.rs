#![forbid(unsafe_code)]

//! Top-level error type.

use std::fmt;

use grip_handles::ResizeError;
use grip_render::{NodeId, SurfaceError};

/// Errors surfaced by the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The surface rejected an operation.
    Surface(SurfaceError),
    /// A drag was routed to something that is not an attached handle.
    Resize(ResizeError),
}

impl Error {
    /// Node the error refers to.
    #[must_use]
    pub fn node(&self) -> NodeId {
        match self {
            Self::Surface(
                SurfaceError::UnknownNode(node)
                | SurfaceError::NotAnElement(node)
                | SurfaceError::UnsupportedAttr { node, .. },
            ) => *node,
            Self::Resize(ResizeError::Surface(err)) => Self::Surface(*err).node(),
            Self::Resize(ResizeError::NotAHandle(node) | ResizeError::NotAttached(node)) => *node,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "{err}"),
            Self::Resize(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::Resize(err) => Some(err),
        }
    }
}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

impl From<ResizeError> for Error {
    fn from(err: ResizeError) -> Self {
        match err {
            ResizeError::Surface(inner) => Self::Surface(inner),
            other => Self::Resize(other),
        }
    }
}

/// Standard result type for GripKit APIs.
pub type Result<T> = std::result::Result<T, Error>;
