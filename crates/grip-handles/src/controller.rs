#![forbid(unsafe_code)]

//! Resize controller: attaches handle sets to containers and routes drags.
//!
//! The controller owns the configuration applied to new attachments, the
//! boundary clamp, and the resize observers. Handle sets are keyed by
//! container; each handle node is bound back to its container and
//! position, so a host only has to forward `(node, event)` pairs from its
//! pointer layer.
//!
//! # Invariants
//! 1. A container carries at most one overlay: [`ResizeHandleController::attach`]
//!    is a no-op when a [`HANDLES_MARKER`] child already exists.
//! 2. Every drag step that reaches a handle notifies each observer exactly
//!    once, in registration order, whether or not anything moved.
//! 3. A failed step (surface error) notifies nobody.

use std::fmt;

use grip_core::event::DragEvent;
use grip_render::{NodeId, Surface};
use rustc_hash::FxHashMap;

use crate::clamp::{BoundaryClamp, Unbounded};
use crate::config::{HANDLES_MARKER, HandleConfig};
use crate::direction::ResizeDirection;
use crate::error::{ResizeError, Result};
use crate::grip::HandlePosition;
use crate::handle_set::HandleSet;

/// Observer invoked after each drag step.
pub type ResizeCallback = Box<dyn FnMut(ResizeDirection)>;

/// Where a handle node lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleBinding {
    pub container: NodeId,
    pub position: HandlePosition,
}

/// Attaches resize handles and applies drags to them.
pub struct ResizeHandleController {
    config: HandleConfig,
    clamp: Box<dyn BoundaryClamp>,
    callbacks: Vec<ResizeCallback>,
    sets: FxHashMap<NodeId, HandleSet>,
    bindings: FxHashMap<NodeId, HandleBinding>,
}

impl Default for ResizeHandleController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResizeHandleController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeHandleController")
            .field("config", &self.config)
            .field("callbacks", &self.callbacks.len())
            .field("attached", &self.sets.len())
            .finish_non_exhaustive()
    }
}

impl ResizeHandleController {
    /// Default configuration, no observers, unbounded movement.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HandleConfig::default())
    }

    #[must_use]
    pub fn with_config(config: HandleConfig) -> Self {
        Self {
            config,
            clamp: Box::new(Unbounded),
            callbacks: Vec::new(),
            sets: FxHashMap::default(),
            bindings: FxHashMap::default(),
        }
    }

    /// Register an observer for every subsequent drag step.
    #[must_use]
    pub fn add_callback_to_resize<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ResizeDirection) + 'static,
    {
        self.callbacks.push(Box::new(callback));
        self
    }

    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.config = self.config.z_index(z_index);
        self
    }

    #[must_use]
    pub fn min_width(mut self, px: f64) -> Self {
        self.config = self.config.min_width(px);
        self
    }

    #[must_use]
    pub fn min_height(mut self, px: f64) -> Self {
        self.config = self.config.min_height(px);
        self
    }

    #[must_use]
    pub fn handle_width(mut self, px: f64) -> Self {
        self.config = self.config.handle_width(px);
        self
    }

    /// Replace the boundary clamp consulted on every drag.
    #[must_use]
    pub fn boundary_clamp<C>(mut self, clamp: C) -> Self
    where
        C: BoundaryClamp + 'static,
    {
        self.clamp = Box::new(clamp);
        self
    }

    /// Configuration applied to containers attached from now on.
    #[must_use]
    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Attach handles to `container`.
    ///
    /// Returns `Ok(false)` without touching the surface if the container
    /// already has a handle overlay, whoever built it. If a set recorded for
    /// `container` has lost its overlay, its handles are unbound and a fresh
    /// set is built.
    pub fn attach<S: Surface + ?Sized>(&mut self, surface: &mut S, container: NodeId) -> Result<bool> {
        if let Some(existing) = surface.find_child(container, HANDLES_MARKER)? {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "handles.attach.skip",
                container = container.get(),
                overlay = existing.get()
            );
            #[cfg(not(feature = "tracing"))]
            let _ = existing;
            return Ok(false);
        }

        // overlay removed behind our back; forget its handles before rebuilding
        if let Some(stale) = self.sets.remove(&container) {
            for (_, node) in stale.handles() {
                self.bindings.remove(&node);
            }
        }

        let set = HandleSet::build(surface, container, self.config)?;
        for (position, node) in set.handles() {
            self.bindings.insert(node, HandleBinding { container, position });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "handles.attach",
            container = container.get(),
            overlay = set.overlay().get(),
            handle_width = set.config().handle_width_px,
            z_index = set.config().z_index
        );
        self.sets.insert(container, set);
        Ok(true)
    }

    /// Remove the handles from `container`. Returns `Ok(false)` if this
    /// controller never attached to it.
    pub fn detach<S: Surface + ?Sized>(&mut self, surface: &mut S, container: NodeId) -> Result<bool> {
        let Some(set) = self.sets.remove(&container) else {
            return Ok(false);
        };
        for (_, node) in set.handles() {
            self.bindings.remove(&node);
        }
        set.remove(surface)?;
        Ok(true)
    }

    #[must_use]
    pub fn is_attached(&self, container: NodeId) -> bool {
        self.sets.contains_key(&container)
    }

    #[must_use]
    pub fn handle_set(&self, container: NodeId) -> Option<&HandleSet> {
        self.sets.get(&container)
    }

    /// Container and position for a handle node.
    #[must_use]
    pub fn handle_at(&self, node: NodeId) -> Option<HandleBinding> {
        self.bindings.get(&node).copied()
    }

    /// Apply one drag event delivered to `handle`.
    pub fn drag<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        handle: NodeId,
        event: &DragEvent,
    ) -> Result<ResizeDirection> {
        let binding = self.handle_at(handle).ok_or(ResizeError::NotAHandle(handle))?;
        self.drag_position(surface, binding.container, binding.position, event)
    }

    /// Apply one drag event to the handle at `position` on `container`.
    pub fn drag_position<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        container: NodeId,
        position: HandlePosition,
        event: &DragEvent,
    ) -> Result<ResizeDirection> {
        let set = self
            .sets
            .get(&container)
            .ok_or(ResizeError::NotAttached(container))?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "handles.drag",
            container = container.get(),
            handle = position.element_id(),
            x = event.x,
            y = event.y,
            dx = event.dx,
            dy = event.dy
        )
        .entered();

        let direction = set.drag(surface, self.clamp.as_ref(), position, event)?;
        self.notify(direction);
        Ok(direction)
    }

    fn notify(&mut self, direction: ResizeDirection) {
        for callback in &mut self.callbacks {
            callback(direction);
        }
    }
}
