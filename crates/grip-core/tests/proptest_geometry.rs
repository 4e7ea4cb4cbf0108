//! Property tests for pixel geometry and drag tracking.

use grip_core::{Axis, DragTracker, PxPoint, PxRect};
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = PxRect> {
    (-500i32..500, -500i32..500, 0i32..400, 0i32..400).prop_map(|(x, y, w, h)| {
        PxRect::new(f64::from(x), f64::from(y), f64::from(w), f64::from(h))
    })
}

fn point_strategy() -> impl Strategy<Value = PxPoint> {
    (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| PxPoint::new(f64::from(x), f64::from(y)))
}

proptest! {
    #[test]
    fn union_covers_both(a in rect_strategy(), b in rect_strategy()) {
        let u = a.union(&b);
        prop_assert!(u.left() <= a.left().min(b.left()));
        prop_assert!(u.top() <= a.top().min(b.top()));
        prop_assert!(u.right() >= a.right().max(b.right()));
        prop_assert!(u.bottom() >= a.bottom().max(b.bottom()));
    }

    #[test]
    fn axis_accessors_agree(r in rect_strategy()) {
        for axis in [Axis::X, Axis::Y] {
            prop_assert_eq!(r.end(axis) - r.start(axis), r.extent(axis.dimension()));
        }
    }

    #[test]
    fn rounding_moves_edges_at_most_half_pixel(
        r in rect_strategy(),
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let shifted = r.translate(fx, fy);
        let snapped = shifted.round_edges();
        prop_assert!((snapped.left() - shifted.left()).abs() <= 0.5);
        prop_assert!((snapped.top() - shifted.top()).abs() <= 0.5);
        prop_assert!((snapped.right() - shifted.right()).abs() <= 0.5);
        prop_assert!((snapped.bottom() - shifted.bottom()).abs() <= 0.5);
    }

    #[test]
    fn whole_pixel_moves_keep_snapped_size(
        r in rect_strategy(),
        halves in 0i32..2,
        dx in -300i32..300,
        dy in -300i32..300,
    ) {
        let fractional = r.translate(f64::from(halves) * 0.5, 0.25);
        let moved = fractional.translate(f64::from(dx), f64::from(dy));
        prop_assert_eq!(moved.round_edges().size(), fractional.round_edges().size());
    }

    #[test]
    fn tracker_deltas_sum_to_displacement(
        start in point_strategy(),
        samples in prop::collection::vec(point_strategy(), 1..30),
    ) {
        let mut tracker = DragTracker::new();
        tracker.begin(start);
        let (mut sum_x, mut sum_y) = (0.0, 0.0);
        for sample in &samples {
            let event = tracker.update(*sample).expect("active drag");
            prop_assert_eq!(event.position(), *sample);
            sum_x += event.dx;
            sum_y += event.dy;
        }
        let (begin, end) = tracker.end().expect("active drag");
        prop_assert_eq!(begin, start);
        prop_assert_eq!(end.x - begin.x, sum_x);
        prop_assert_eq!(end.y - begin.y, sum_y);
        prop_assert!(!tracker.is_dragging());
    }
}
