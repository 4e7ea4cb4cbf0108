#![forbid(unsafe_code)]

//! In-memory retained [`Surface`].
//!
//! `Scene` is what headless hosts and tests render into. It keeps a flat
//! arena of nodes addressed by [`NodeId`]; removed slots are tombstoned and
//! never reused, so a stale id always reports [`SurfaceError::UnknownNode`].
//!
//! # Coordinates
//! Elements are positioned by their inline `left/top` relative to the parent
//! element (or the page for roots). Overlays and rects are positioned by their
//! `x/y` attributes relative to their parent's frame. Groups add no offset and
//! report the union of their children as bounds.
//!
//! [`PixelSnap::Round`] makes rendered geometry (bounding rects and offset
//! boxes) snap to whole pixels while attributes keep the exact values written,
//! which is how browsers behave and what resize code must tolerate. Both are
//! derived from the same snapped edges: an element's offset box always has
//! the size of its bounding rect, and its offset is measured between the
//! snapped edges of the element and its parent.

use grip_core::geometry::{PxPoint, PxRect, PxSize};
use smallvec::SmallVec;

use crate::surface::{Attr, NodeId, ShapeSpec, StyleProp, Surface, SurfaceError};

/// How rendered geometry is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelSnap {
    /// Report exact fractional geometry.
    #[default]
    Exact,
    /// Round rendered edges to whole pixels.
    Round,
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element { style: PxRect },
    Overlay { marker: String, rect: PxRect },
    Group,
    Rect(ShapeSpec),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 8]>,
    kind: NodeKind,
}

/// Arena-backed scene tree.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Option<Node>>,
    snap: PixelSnap,
}

impl Scene {
    /// Create an empty scene with exact geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixel snapping policy.
    #[must_use]
    pub fn with_pixel_snap(mut self, snap: PixelSnap) -> Self {
        self.snap = snap;
        self
    }

    #[must_use]
    pub fn pixel_snap(&self) -> PixelSnap {
        self.snap
    }

    /// Add a host element with inline `style` box.
    ///
    /// `parent` must be an element when given; `None` creates a page root.
    pub fn add_element(
        &mut self,
        parent: Option<NodeId>,
        style: PxRect,
    ) -> Result<NodeId, SurfaceError> {
        if let Some(parent) = parent
            && !matches!(self.node(parent)?.kind, NodeKind::Element { .. })
        {
            return Err(SurfaceError::NotAnElement(parent));
        }
        Ok(self.alloc(parent, NodeKind::Element { style }))
    }

    /// Creation spec (with live attributes) of a rect node.
    #[must_use]
    pub fn shape(&self, node: NodeId) -> Option<&ShapeSpec> {
        match &self.node(node).ok()?.kind {
            NodeKind::Rect(spec) => Some(spec),
            _ => None,
        }
    }

    /// Children of `node` in insertion order (empty for unknown nodes).
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map_or(&[][..], |n| n.children.as_slice())
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).ok()?.parent
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_ok()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rect descendants of `node` carrying `class`, in tree order.
    #[must_use]
    pub fn select_by_class(&self, node: NodeId, class: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_by_class(node, class, &mut out);
        out
    }

    fn collect_by_class(&self, node: NodeId, class: &str, out: &mut Vec<NodeId>) {
        for &child in self.children(node) {
            if self.shape(child).is_some_and(|spec| spec.has_class(class)) {
                out.push(child);
            }
            self.collect_by_class(child, class, out);
        }
    }

    fn alloc(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Some(Node {
            parent,
            children: SmallVec::new(),
            kind,
        }));
        if let Some(parent) = parent
            && let Some(Some(parent_node)) = self.nodes.get_mut(parent.index())
        {
            parent_node.children.push(id);
        }
        id
    }

    fn append_child(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId, SurfaceError> {
        self.node(parent)?;
        Ok(self.alloc(Some(parent), kind))
    }

    fn node(&self, id: NodeId) -> Result<&Node, SurfaceError> {
        self.nodes
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(SurfaceError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SurfaceError> {
        self.nodes
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(SurfaceError::UnknownNode(id))
    }

    /// Origin of the coordinate frame `id` establishes for its children.
    fn frame_origin(&self, id: NodeId) -> Result<PxPoint, SurfaceError> {
        let node = self.node(id)?;
        let base = match node.parent {
            Some(parent) => self.frame_origin(parent)?,
            None => PxPoint::ORIGIN,
        };
        Ok(match &node.kind {
            NodeKind::Element { style } => base.offset(style.x, style.y),
            NodeKind::Overlay { rect, .. } => base.offset(rect.x, rect.y),
            NodeKind::Rect(spec) => base.offset(spec.rect.x, spec.rect.y),
            NodeKind::Group => base,
        })
    }

    fn exact_bounds(&self, id: NodeId) -> Result<PxRect, SurfaceError> {
        let node = self.node(id)?;
        let origin = self.frame_origin(id)?;
        let size = match &node.kind {
            NodeKind::Element { style } => style.size(),
            NodeKind::Overlay { rect, .. } => rect.size(),
            NodeKind::Rect(spec) => spec.rect.size(),
            NodeKind::Group => {
                let mut bounds: Option<PxRect> = None;
                for &child in &node.children {
                    let child_bounds = self.exact_bounds(child)?;
                    bounds = Some(bounds.map_or(child_bounds, |b| b.union(&child_bounds)));
                }
                return Ok(bounds.unwrap_or(PxRect::from_origin_size(origin, PxSize::default())));
            }
        };
        Ok(PxRect::from_origin_size(origin, size))
    }

    fn snap_rect(&self, rect: PxRect) -> PxRect {
        match self.snap {
            PixelSnap::Exact => rect,
            PixelSnap::Round => rect.round_edges(),
        }
    }

    fn positioned_rect_mut(&mut self, id: NodeId, attr: Attr) -> Result<&mut PxRect, SurfaceError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Overlay { rect, .. } => Ok(rect),
            NodeKind::Rect(spec) => Ok(&mut spec.rect),
            NodeKind::Element { .. } | NodeKind::Group => {
                Err(SurfaceError::UnsupportedAttr { node: id, attr })
            }
        }
    }
}

fn attr_of(rect: &PxRect, attr: Attr) -> f64 {
    match attr {
        Attr::X => rect.x,
        Attr::Y => rect.y,
        Attr::Width => rect.width,
        Attr::Height => rect.height,
    }
}

fn attr_of_mut(rect: &mut PxRect, attr: Attr) -> &mut f64 {
    match attr {
        Attr::X => &mut rect.x,
        Attr::Y => &mut rect.y,
        Attr::Width => &mut rect.width,
        Attr::Height => &mut rect.height,
    }
}

impl Surface for Scene {
    fn find_child(&self, parent: NodeId, marker: &str) -> Result<Option<NodeId>, SurfaceError> {
        let node = self.node(parent)?;
        Ok(node.children.iter().copied().find(|&child| {
            self.node(child).is_ok_and(|n| match &n.kind {
                NodeKind::Overlay { marker: m, .. } => m == marker,
                NodeKind::Rect(spec) => spec.id == marker,
                NodeKind::Element { .. } | NodeKind::Group => false,
            })
        }))
    }

    fn append_overlay(
        &mut self,
        parent: NodeId,
        marker: &str,
        size: PxSize,
    ) -> Result<NodeId, SurfaceError> {
        self.append_child(
            parent,
            NodeKind::Overlay {
                marker: marker.to_owned(),
                rect: PxRect::from_size(size),
            },
        )
    }

    fn append_group(&mut self, parent: NodeId) -> Result<NodeId, SurfaceError> {
        self.append_child(parent, NodeKind::Group)
    }

    fn append_rect(&mut self, parent: NodeId, spec: ShapeSpec) -> Result<NodeId, SurfaceError> {
        self.append_child(parent, NodeKind::Rect(spec))
    }

    fn remove(&mut self, node: NodeId) -> Result<(), SurfaceError> {
        let parent = self.node(node)?.parent;
        if let Some(parent) = parent
            && let Ok(parent_node) = self.node_mut(parent)
        {
            parent_node.children.retain(|child| *child != node);
        }

        let mut stack = vec![node];
        let mut removed = 0usize;
        while let Some(id) = stack.pop() {
            if let Some(slot) = self.nodes.get_mut(id.index())
                && let Some(dead) = slot.take()
            {
                removed += 1;
                stack.extend(dead.children);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(message = "scene.remove", node = node.get(), removed);
        let _ = removed;
        Ok(())
    }

    fn attr(&self, node: NodeId, attr: Attr) -> Result<f64, SurfaceError> {
        match &self.node(node)?.kind {
            NodeKind::Overlay { rect, .. } => Ok(attr_of(rect, attr)),
            NodeKind::Rect(spec) => Ok(attr_of(&spec.rect, attr)),
            NodeKind::Element { .. } | NodeKind::Group => {
                Err(SurfaceError::UnsupportedAttr { node, attr })
            }
        }
    }

    fn set_attr(&mut self, node: NodeId, attr: Attr, value: f64) -> Result<(), SurfaceError> {
        *attr_of_mut(self.positioned_rect_mut(node, attr)?, attr) = value;
        Ok(())
    }

    fn bounding_rect(&self, node: NodeId) -> Result<PxRect, SurfaceError> {
        Ok(self.snap_rect(self.exact_bounds(node)?))
    }

    fn offset_box(&self, element: NodeId) -> Result<PxRect, SurfaceError> {
        let node = self.node(element)?;
        let NodeKind::Element { style } = &node.kind else {
            return Err(SurfaceError::NotAnElement(element));
        };
        match self.snap {
            PixelSnap::Exact => Ok(*style),
            PixelSnap::Round => {
                let rendered = self.bounding_rect(element)?;
                let parent = match node.parent {
                    Some(parent) => self.bounding_rect(parent)?.origin(),
                    None => PxPoint::ORIGIN,
                };
                Ok(rendered.translate(-parent.x, -parent.y))
            }
        }
    }

    fn set_style_px(
        &mut self,
        element: NodeId,
        prop: StyleProp,
        px: f64,
    ) -> Result<(), SurfaceError> {
        match &mut self.node_mut(element)?.kind {
            NodeKind::Element { style } => {
                match prop {
                    StyleProp::Left => style.x = px,
                    StyleProp::Top => style.y = px,
                    StyleProp::Width => style.width = px,
                    StyleProp::Height => style.height = px,
                }
                Ok(())
            }
            _ => Err(SurfaceError::NotAnElement(element)),
        }
    }
}
