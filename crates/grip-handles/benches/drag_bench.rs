//! Benchmarks for handle attachment and drag steps.
//!
//! Run with: cargo bench -p grip-handles

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use grip_core::{DragEvent, PxRect};
use grip_handles::{HandlePosition, ResizeHandleController, ViewportClamp};
use grip_render::{NodeId, Scene};
use std::hint::black_box;

fn scene_with_containers(n: u32) -> (Scene, Vec<NodeId>) {
    let mut scene = Scene::new();
    let page = scene
        .add_element(None, PxRect::new(0.0, 0.0, 4000.0, 4000.0))
        .expect("page");
    let containers = (0..n)
        .map(|i| {
            let offset = f64::from(i) * 10.0;
            scene
                .add_element(Some(page), PxRect::new(offset, offset, 300.0, 200.0))
                .expect("container")
        })
        .collect();
    (scene, containers)
}

fn bench_attach(c: &mut Criterion) {
    let mut group = c.benchmark_group("handles/attach");
    for n in [1u32, 16, 128] {
        group.bench_with_input(BenchmarkId::new("containers", n), &n, |b, &n| {
            b.iter_batched(
                || scene_with_containers(n),
                |(mut scene, containers)| {
                    let mut controller = ResizeHandleController::new();
                    for container in containers {
                        controller.attach(&mut scene, container).expect("attach");
                    }
                    black_box(controller)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("handles/drag");
    for position in [
        HandlePosition::Left,
        HandlePosition::Right,
        HandlePosition::BottomRight,
    ] {
        group.bench_function(BenchmarkId::new("oscillate", position.element_id()), |b| {
            let (mut scene, containers) = scene_with_containers(1);
            let container = containers[0];
            let mut controller = ResizeHandleController::new()
                .boundary_clamp(ViewportClamp::new(PxRect::new(0.0, 0.0, 4000.0, 4000.0)));
            controller.attach(&mut scene, container).expect("attach");
            let handle = controller
                .handle_set(container)
                .expect("set")
                .node(position);
            let grow = DragEvent::new(400.0, 300.0, 4.0, 4.0);
            let shrink = DragEvent::new(0.0, 0.0, -4.0, -4.0);
            b.iter(|| {
                black_box(controller.drag(&mut scene, handle, &grow).expect("grow"));
                black_box(controller.drag(&mut scene, handle, &shrink).expect("shrink"));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_attach, bench_drag);
criterion_main!(benches);
