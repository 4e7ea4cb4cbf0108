#![forbid(unsafe_code)]

//! The per-container handle overlay and its drag routines.
//!
//! # Invariants
//! After [`HandleSet::build`] and after every drag step:
//! 1. The overlay's width/height equal the container's rendered size, so the
//!    overlay also renders at exactly the container's size. On a snapping
//!    surface this is the snapped size, not the inline style value.
//! 2. Corner squares sit exactly on the overlay corners
//!    (`(0,0)`, `(W-h,0)`, `(W-h,H-h)`, `(0,H-h)`).
//! 3. Each edge bar is `h` thick and spans its side minus `h` at both ends.
//! 4. Neither container dimension is driven below the configured minimum,
//!    neither the inline value nor the rendered one.
//!
//! # Offsets
//! Leading edges (left/top) take the pointer's absolute coordinate in overlay
//! space as their offset: the overlay origin is the container's near edge, so
//! a pointer at `x = 5` means "move the left edge 5px inward". Trailing edges
//! (right/bottom) take the pointer delta and negate it, so in both cases a
//! positive offset shrinks the container. Because trailing edges integrate
//! deltas, they can drift ahead of the pointer once a minimum-size clamp has
//! swallowed part of a move; the overshoot guard drops such steps until the
//! pointer catches up with the handle again.
//!
//! # Live geometry
//! Every step starts from the container's rendered box and ends by copying
//! the container's new rendered size into the overlay. The minimum-size
//! check reads the overlay, which therefore measures the same rendered
//! extent the container write subtracts from. Bars and corners are laid out
//! from the overlay size, so surface rounding never accumulates into drift.

use grip_core::event::DragEvent;
use grip_core::geometry::{Axis, Dimension, PxPoint, PxRect, PxSize};
use grip_render::{Attr, NodeId, ShapeSpec, StyleProp, Surface, SurfaceError};

use crate::clamp::BoundaryClamp;
use crate::config::{HANDLES_MARKER, HandleConfig};
use crate::direction::ResizeDirection;
use crate::grip::{Corner, Edge, HANDLE_FILL_OPACITY, HandlePosition};
use crate::layout::{self, Operator};

/// The eight handles of one container plus the overlay holding them.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleSet {
    container: NodeId,
    overlay: NodeId,
    group: NodeId,
    edges: [NodeId; 4],
    corners: [NodeId; 4],
    config: HandleConfig,
}

impl HandleSet {
    /// Build the overlay and all handles on `container`, sized to its
    /// current rendered bounds.
    ///
    /// Does not check for an existing overlay; callers handle idempotency.
    pub fn build<S: Surface + ?Sized>(
        surface: &mut S,
        container: NodeId,
        config: HandleConfig,
    ) -> Result<Self, SurfaceError> {
        let size = surface.bounding_rect(container)?.size();
        let overlay = surface.append_overlay(container, HANDLES_MARKER, size)?;
        let group = surface.append_group(overlay)?;
        let h = config.handle_width_px;

        let mut edges = [group; 4];
        for edge in Edge::ALL {
            let spec = ShapeSpec::rect(edge.element_id(), layout::edge_rect(edge, size, h))
                .class(edge.orientation().class())
                .fill(edge.fill())
                .fill_opacity(HANDLE_FILL_OPACITY)
                .z_index(config.z_index)
                .cursor(edge.cursor());
            edges[edge.index()] = surface.append_rect(group, spec)?;
        }

        let mut corners = [group; 4];
        for corner in Corner::ALL {
            let origin = layout::corner_origin(corner, size, h);
            let spec = ShapeSpec::rect(
                corner.element_id(),
                PxRect::new(origin.x, origin.y, h, h),
            )
            .class(corner.class())
            .fill("red")
            .fill_opacity(HANDLE_FILL_OPACITY)
            .z_index(config.z_index)
            .cursor(corner.cursor());
            corners[corner.index()] = surface.append_rect(group, spec)?;
        }

        let set = Self {
            container,
            overlay,
            group,
            edges,
            corners,
            config,
        };
        set.pin_corners(surface)?;
        Ok(set)
    }

    /// The container this set resizes.
    #[must_use]
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// The overlay node (marker [`HANDLES_MARKER`]).
    #[must_use]
    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    #[must_use]
    pub fn group(&self) -> NodeId {
        self.group
    }

    #[must_use]
    pub fn edge(&self, edge: Edge) -> NodeId {
        self.edges[edge.index()]
    }

    #[must_use]
    pub fn corner(&self, corner: Corner) -> NodeId {
        self.corners[corner.index()]
    }

    /// Node for any handle position.
    #[must_use]
    pub fn node(&self, position: HandlePosition) -> NodeId {
        match position {
            HandlePosition::Left => self.edge(Edge::Left),
            HandlePosition::Top => self.edge(Edge::Top),
            HandlePosition::Right => self.edge(Edge::Right),
            HandlePosition::Bottom => self.edge(Edge::Bottom),
            HandlePosition::TopLeft => self.corner(Corner::TopLeft),
            HandlePosition::TopRight => self.corner(Corner::TopRight),
            HandlePosition::BottomRight => self.corner(Corner::BottomRight),
            HandlePosition::BottomLeft => self.corner(Corner::BottomLeft),
        }
    }

    /// All eight handles with their positions.
    pub fn handles(&self) -> impl Iterator<Item = (HandlePosition, NodeId)> + '_ {
        HandlePosition::ALL
            .into_iter()
            .map(|position| (position, self.node(position)))
    }

    /// Configuration captured when the set was built.
    #[must_use]
    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    /// Overlay size as last written.
    pub fn size<S: Surface + ?Sized>(&self, surface: &S) -> Result<PxSize, SurfaceError> {
        Ok(PxSize::new(
            surface.attr(self.overlay, Attr::Width)?,
            surface.attr(self.overlay, Attr::Height)?,
        ))
    }

    /// Run the drag routine(s) for `position`.
    ///
    /// Corners run the horizontal edge first, then the vertical one, each
    /// committing its own mutation.
    pub fn drag<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        clamp: &dyn BoundaryClamp,
        position: HandlePosition,
        event: &DragEvent,
    ) -> Result<ResizeDirection, SurfaceError> {
        let horizontal = match position.horizontal_edge() {
            Some(edge) => self.drag_edge(surface, clamp, edge, event)?,
            None => None,
        };
        let vertical = match position.vertical_edge() {
            Some(edge) => self.drag_edge(surface, clamp, edge, event)?,
            None => None,
        };
        Ok(ResizeDirection::new(horizontal, vertical))
    }

    /// Drag one edge. Returns the committed offset if anything moved.
    pub fn drag_edge<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        clamp: &dyn BoundaryClamp,
        edge: Edge,
        event: &DragEvent,
    ) -> Result<Option<f64>, SurfaceError> {
        if edge.is_leading() {
            self.drag_leading(surface, clamp, edge.axis(), event)
        } else {
            self.drag_trailing(surface, clamp, edge.axis(), event)
        }
    }

    pub fn drag_left<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        clamp: &dyn BoundaryClamp,
        event: &DragEvent,
    ) -> Result<Option<f64>, SurfaceError> {
        self.drag_leading(surface, clamp, Axis::X, event)
    }

    pub fn drag_top<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        clamp: &dyn BoundaryClamp,
        event: &DragEvent,
    ) -> Result<Option<f64>, SurfaceError> {
        self.drag_leading(surface, clamp, Axis::Y, event)
    }

    pub fn drag_right<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        clamp: &dyn BoundaryClamp,
        event: &DragEvent,
    ) -> Result<Option<f64>, SurfaceError> {
        self.drag_trailing(surface, clamp, Axis::X, event)
    }

    pub fn drag_bottom<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        clamp: &dyn BoundaryClamp,
        event: &DragEvent,
    ) -> Result<Option<f64>, SurfaceError> {
        self.drag_trailing(surface, clamp, Axis::Y, event)
    }

    /// Left/top: offset from the absolute pointer coordinate; moves the
    /// container's near edge and shrinks it by the same amount.
    fn drag_leading<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        clamp: &dyn BoundaryClamp,
        axis: Axis,
        event: &DragEvent,
    ) -> Result<Option<f64>, SurfaceError> {
        let dimension = axis.dimension();
        let handle_rect = surface.bounding_rect(self.edge(Edge::leading(axis)))?;
        let requested = event.coordinate(axis);
        let proposed = clamp_along(clamp, handle_rect, axis, requested);
        let offset = self.enforce_min_size(surface, proposed, dimension, Operator::Subtract)?;

        let container_box = surface.offset_box(self.container)?;
        surface.set_style_px(
            self.container,
            StyleProp::position(axis),
            container_box.start(axis) + offset,
        )?;
        surface.set_style_px(
            self.container,
            StyleProp::extent(dimension),
            container_box.extent(dimension) - offset,
        )?;

        let changed =
            self.resize_and_relocate_handles(surface, Edge::trailing(axis), offset, dimension)?;
        Ok(changed.then_some(offset))
    }

    /// Right/bottom: offset from the pointer delta, guarded against the
    /// handle running ahead of the pointer.
    fn drag_trailing<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        clamp: &dyn BoundaryClamp,
        axis: Axis,
        event: &DragEvent,
    ) -> Result<Option<f64>, SurfaceError> {
        let dimension = axis.dimension();
        let edge = Edge::trailing(axis);
        let handle = self.edge(edge);
        let handle_rect = surface.bounding_rect(handle)?;
        let proposed = clamp_along(clamp, handle_rect, axis, event.delta_along(axis));
        let offset = -self.enforce_min_size(surface, proposed, dimension, Operator::Add)?;

        let pointer = event.coordinate(axis);
        let handle_coord = surface.attr(handle, Attr::position(axis))?;
        if layout::pointer_fallen_behind(offset, pointer, handle_coord) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "handles.overshoot",
                edge = edge.as_str(),
                offset,
                pointer,
                handle = handle_coord
            );
            return Ok(None);
        }

        let container_box = surface.offset_box(self.container)?;
        surface.set_style_px(
            self.container,
            StyleProp::extent(dimension),
            container_box.extent(dimension) - offset,
        )?;

        let changed = self.resize_and_relocate_handles(surface, edge, offset, dimension)?;
        Ok(changed.then_some(offset))
    }

    fn enforce_min_size<S: Surface + ?Sized>(
        &self,
        surface: &S,
        proposed: f64,
        dimension: Dimension,
        op: Operator,
    ) -> Result<f64, SurfaceError> {
        let current = surface.attr(self.overlay, Attr::extent(dimension))?;
        let minimum = self.config.min_dimension(dimension);
        let offset = layout::enforce_min_dist_to_parallel_bar(proposed, current, minimum, op);
        #[cfg(feature = "tracing")]
        Self::log_min_clamp(dimension, proposed, offset, minimum);
        Ok(offset)
    }

    #[cfg(feature = "tracing")]
    fn log_min_clamp(dimension: Dimension, proposed: f64, offset: f64, minimum: f64) {
        if offset != proposed {
            tracing::debug!(
                message = "handles.min_clamp",
                dimension = dimension.as_str(),
                proposed,
                offset,
                minimum
            );
        }
    }

    /// Apply a committed `offset` along `dimension` to the handle layout.
    ///
    /// The overlay takes the container's rendered extent, re-read after the
    /// container was written. The trailing bar `handle` then moves to the new
    /// far side, the bars spanning `dimension` take the new length and the
    /// corners are re-pinned. On an exact surface this shifts the previous
    /// layout by `offset`. Returns `offset != 0`.
    pub fn resize_and_relocate_handles<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        handle: Edge,
        offset: f64,
        dimension: Dimension,
    ) -> Result<bool, SurfaceError> {
        let extent = Attr::extent(dimension);
        let rendered = surface.offset_box(self.container)?.extent(dimension);
        surface.set_attr(self.overlay, extent, rendered)?;

        let size = self.size(surface)?;
        let h = self.config.handle_width_px;
        let axis = dimension.axis();
        let moved = layout::edge_rect(handle, size, h).start(axis);
        surface.set_attr(self.edge(handle), Attr::position(axis), moved)?;

        for bar in Edge::spanning(dimension) {
            let length = layout::edge_rect(bar, size, h).extent(dimension);
            surface.set_attr(self.edge(bar), extent, length)?;
        }

        self.pin_corners(surface)?;
        Ok(offset != 0.0)
    }

    /// Re-pin the corner squares to the overlay's current corners.
    pub fn pin_corners<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        let size = self.size(surface)?;
        for corner in Corner::ALL {
            let PxPoint { x, y } =
                layout::corner_origin(corner, size, self.config.handle_width_px);
            let node = self.corner(corner);
            surface.set_attr(node, Attr::X, x)?;
            surface.set_attr(node, Attr::Y, y)?;
        }
        Ok(())
    }

    /// Remove the overlay and every handle from the surface.
    pub fn remove<S: Surface + ?Sized>(self, surface: &mut S) -> Result<(), SurfaceError> {
        surface.remove(self.overlay)
    }
}

fn clamp_along(clamp: &dyn BoundaryClamp, handle: PxRect, axis: Axis, value: f64) -> f64 {
    let proposed = PxPoint::on_axis(axis, value);
    clamp.clamp(handle, proposed.x, proposed.y).along(axis)
}
