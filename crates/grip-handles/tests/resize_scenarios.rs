//! End-to-end resize scenarios driven through the controller.
//!
//! Pointer coordinates are overlay-local, as a host would deliver them.

use std::cell::RefCell;
use std::rc::Rc;

use grip_core::{DragEvent, DragTracker, PxPoint, PxRect};
use grip_handles::{
    Corner, Edge, HANDLES_MARKER, HandlePosition, ResizeDirection, ResizeHandleController,
    ViewportClamp,
};
use grip_render::{Attr, NodeId, PixelSnap, Scene, Surface};

fn container(scene: &mut Scene) -> NodeId {
    scene
        .add_element(None, PxRect::new(10.0, 10.0, 200.0, 150.0))
        .expect("container")
}

fn handle(controller: &ResizeHandleController, container: NodeId, position: HandlePosition) -> NodeId {
    controller
        .handle_set(container)
        .expect("attached")
        .node(position)
}

#[test]
fn left_drag_clamps_at_minimum_width() {
    let mut scene = Scene::new();
    let target = container(&mut scene);
    let mut controller = ResizeHandleController::new().min_width(100.0).handle_width(9.0);
    controller.attach(&mut scene, target).expect("attach");
    let left = handle(&controller, target, HandlePosition::Left);
    let right = handle(&controller, target, HandlePosition::Right);
    let right_before = scene.bounding_rect(right).expect("right bounds");

    let direction = controller
        .drag(&mut scene, left, &DragEvent::new(150.0, 70.0, 150.0, 0.0))
        .expect("drag");

    assert_eq!(direction, ResizeDirection::horizontal_only(Some(100.0)));
    assert_eq!(
        scene.offset_box(target),
        Ok(PxRect::new(110.0, 10.0, 100.0, 150.0))
    );
    // the right bar moved back inside the shrunken overlay but stays put on screen
    assert_eq!(scene.attr(right, Attr::X), Ok(91.0));
    assert_eq!(scene.bounding_rect(right), Ok(right_before));
}

#[test]
fn second_attach_adds_nothing() {
    let mut scene = Scene::new();
    let target = container(&mut scene);
    let mut controller = ResizeHandleController::new();
    assert_eq!(controller.attach(&mut scene, target), Ok(true));
    let overlay = scene
        .find_child(target, HANDLES_MARKER)
        .expect("lookup")
        .expect("overlay");
    let group = scene.children(overlay)[0];
    let handles = scene.children(group).len();

    assert_eq!(controller.attach(&mut scene, target), Ok(false));
    assert_eq!(scene.children(target), &[overlay]);
    assert_eq!(scene.children(group).len(), handles);
    assert_eq!(handles, 8);
}

#[test]
fn handles_are_selectable_by_class() {
    let mut scene = Scene::new();
    let target = container(&mut scene);
    let mut controller = ResizeHandleController::new();
    controller.attach(&mut scene, target).expect("attach");
    assert_eq!(scene.select_by_class(target, "vertical-drag-handle").len(), 2);
    assert_eq!(scene.select_by_class(target, "horizontal-drag-handle").len(), 2);
    assert_eq!(scene.select_by_class(target, "corner-drag-handle").len(), 4);
}

#[test]
fn callbacks_report_directions() {
    let mut scene = Scene::new();
    let target = container(&mut scene);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut controller =
        ResizeHandleController::new().add_callback_to_resize(move |dir| sink.borrow_mut().push(dir));
    controller.attach(&mut scene, target).expect("attach");

    let left = handle(&controller, target, HandlePosition::Left);
    controller
        .drag(&mut scene, left, &DragEvent::new(5.0, 70.0, 5.0, 0.0))
        .expect("left");
    let top_left = handle(&controller, target, HandlePosition::TopLeft);
    controller
        .drag(&mut scene, top_left, &DragEvent::new(5.0, 3.0, 5.0, 3.0))
        .expect("corner");

    let seen = seen.borrow();
    assert_eq!(seen[0], ResizeDirection::new(Some(5.0), None));
    assert_eq!(seen[1], ResizeDirection::new(Some(5.0), Some(3.0)));
    assert_eq!(
        scene.offset_box(target),
        Ok(PxRect::new(20.0, 13.0, 190.0, 147.0))
    );
}

#[test]
fn tracked_pointer_grows_bottom_right() {
    let mut scene = Scene::new();
    let target = container(&mut scene);
    let mut controller = ResizeHandleController::new();
    controller.attach(&mut scene, target).expect("attach");
    let corner = handle(&controller, target, HandlePosition::BottomRight);

    let mut tracker = DragTracker::new();
    tracker.begin(PxPoint::new(195.0, 145.0));
    for step in 1..=4 {
        let pointer = PxPoint::new(195.0 + 5.0 * f64::from(step), 145.0 + 2.0 * f64::from(step));
        let event = tracker.update(pointer).expect("dragging");
        let direction = controller.drag(&mut scene, corner, &event).expect("drag");
        assert_eq!(direction, ResizeDirection::new(Some(-5.0), Some(-2.0)));
    }
    assert!(tracker.end().is_some());

    assert_eq!(
        scene.offset_box(target),
        Ok(PxRect::new(10.0, 10.0, 220.0, 158.0))
    );
    let set = controller.handle_set(target).expect("set");
    assert_eq!(scene.attr(set.corner(Corner::BottomRight), Attr::X), Ok(211.0));
    assert_eq!(scene.attr(set.corner(Corner::BottomRight), Attr::Y), Ok(149.0));
    assert_eq!(scene.attr(set.edge(Edge::Top), Attr::Width), Ok(202.0));
    assert_eq!(scene.attr(set.edge(Edge::Left), Attr::Height), Ok(140.0));
}

#[test]
fn right_overshoot_leaves_width_alone() {
    let mut scene = Scene::new();
    let target = container(&mut scene);
    let mut controller = ResizeHandleController::new();
    controller.attach(&mut scene, target).expect("attach");
    let right = handle(&controller, target, HandlePosition::Right);

    // shrink until the minimum swallows the rest of the move
    let clamped = controller
        .drag(&mut scene, right, &DragEvent::new(60.0, 70.0, -140.0, 0.0))
        .expect("shrink");
    assert_eq!(clamped.horizontal, Some(100.0));
    assert_eq!(scene.attr(right, Attr::X), Ok(91.0));

    // pointer is still left of the handle while moving right: discarded
    let direction = controller
        .drag(&mut scene, right, &DragEvent::new(70.0, 70.0, 10.0, 0.0))
        .expect("overshoot");
    assert_eq!(direction, ResizeDirection::NONE);
    assert_eq!(scene.offset_box(target).map(|b| b.width), Ok(100.0));

    // once the pointer passes the handle, growth resumes
    let direction = controller
        .drag(&mut scene, right, &DragEvent::new(95.0, 70.0, 4.0, 0.0))
        .expect("resume");
    assert_eq!(direction.horizontal, Some(-4.0));
    assert_eq!(scene.offset_box(target).map(|b| b.width), Ok(104.0));
}

#[test]
fn viewport_clamp_stops_growth_at_viewport_edge() {
    let mut scene = Scene::new();
    let target = container(&mut scene);
    let mut controller = ResizeHandleController::new()
        .boundary_clamp(ViewportClamp::new(PxRect::new(0.0, 0.0, 230.0, 400.0)));
    controller.attach(&mut scene, target).expect("attach");
    let right = handle(&controller, target, HandlePosition::Right);

    // right bar spans x 201..210 on screen; only 20px remain
    let direction = controller
        .drag(&mut scene, right, &DragEvent::new(250.0, 70.0, 50.0, 0.0))
        .expect("drag");
    assert_eq!(direction.horizontal, Some(-20.0));
    assert_eq!(scene.offset_box(target).map(|b| b.right()), Ok(230.0));
}

#[test]
fn rounding_surface_feeds_back_rendered_sizes() {
    let mut scene = Scene::new().with_pixel_snap(PixelSnap::Round);
    let target = container(&mut scene);
    let mut controller = ResizeHandleController::new();
    controller.attach(&mut scene, target).expect("attach");
    let left = handle(&controller, target, HandlePosition::Left);

    controller
        .drag(&mut scene, left, &DragEvent::new(2.4, 70.0, 2.4, 0.0))
        .expect("drag");
    let set = controller.handle_set(target).expect("set");
    // inline box 12.4..210 renders as 12..210
    assert_eq!(scene.offset_box(target).map(|b| b.width), Ok(198.0));
    assert_eq!(scene.attr(set.overlay(), Attr::Width), Ok(198.0));
    assert_eq!(
        scene.bounding_rect(set.overlay()).map(|r| r.size()),
        scene.bounding_rect(target).map(|r| r.size())
    );
    assert_eq!(scene.attr(set.edge(Edge::Right), Attr::X), Ok(189.0));
}

#[test]
fn detach_removes_overlay() {
    let mut scene = Scene::new();
    let target = container(&mut scene);
    let mut controller = ResizeHandleController::new();
    controller.attach(&mut scene, target).expect("attach");
    assert_eq!(controller.detach(&mut scene, target), Ok(true));
    assert_eq!(scene.find_child(target, HANDLES_MARKER), Ok(None));
    assert_eq!(scene.len(), 1);
}
