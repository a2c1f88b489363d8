use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use vestibule::animation::{CameraTransition, EasingFunction, InertiaEngine};
use vestibule::camera::{CameraTransform, MotionTargets};
use vestibule::input::{InputCapabilities, WheelEvent};
use vestibule::options::InputOptions;
use vestibule::runtime::MemoryScene;
use vestibule::scheduler::ManualScheduler;
use vestibule::{Options, WalkController};
use web_time::Instant;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicOut;
    c.bench_function("cubic_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn integration_benchmark(c: &mut Criterion) {
    let targets = MotionTargets {
        position: Vec3::new(0.4, 1.6, -500.0),
        rotation: Vec3::new(0.1, 0.5, 0.0),
    };
    c.bench_function("ease_toward", |b| {
        let mut transform = CameraTransform::new(Vec3::new(0.0, 1.6, 300.0), Vec3::ZERO);
        b.iter(|| {
            transform.ease_toward(black_box(&targets), 0.05);
            black_box(transform)
        })
    });
}

fn inertia_benchmark(c: &mut Criterion) {
    let options = InputOptions::default();
    c.bench_function("inertia_decay_to_rest", |b| {
        let start = Instant::now();
        b.iter(|| {
            let mut inertia = InertiaEngine::new(&options);
            inertia.start(black_box(1.5), start);
            let mut total = 0.0;
            while let Some(px) = inertia.step(start) {
                total += px;
            }
            black_box(total)
        })
    });
}

fn transition_benchmark(c: &mut Criterion) {
    let start = Instant::now();
    let transition = CameraTransition::new(
        "bench",
        CameraTransform::new(Vec3::new(0.0, 1.6, 300.0), Vec3::ZERO),
        CameraTransform::new(Vec3::new(0.0, 4.0, -350.0), Vec3::new(-0.3, 3.1, 0.0)),
        Duration::from_millis(600),
        EasingFunction::CubicOut,
        start,
    );
    c.bench_function("transition_sample", |b| {
        b.iter(|| black_box(transition.sample(black_box(start + Duration::from_millis(250)))))
    });
}

fn frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_frame");

    for facing in [0_usize, 8, 64] {
        let mut options = Options::default();
        options.camera.facing_objects =
            (0..facing).map(|i| format!("sign_{i}")).collect();
        let mut scene = MemoryScene::new().with_object("front_door", Vec3::ZERO);
        for i in 0..facing {
            scene.add_object(&format!("sign_{i}"), Vec3::new(i as f32, 0.0, -100.0));
        }
        let mut controller = WalkController::new(
            options,
            InputCapabilities::desktop(),
            (1280.0, 720.0),
            Box::new(ManualScheduler::new()),
        )
        .unwrap();
        controller.initialize(&mut scene).unwrap();

        group.bench_function(format!("{facing}_facing_objects"), |b| {
            let mut now = Instant::now();
            b.iter(|| {
                now += Duration::from_millis(16);
                let _ = controller.on_wheel(&WheelEvent {
                    delta_y: 1.0,
                    timestamp: now,
                });
                if let Some(handle) = controller.pending_frame() {
                    let _ = black_box(controller.on_frame(handle, now, &mut scene));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    integration_benchmark,
    inertia_benchmark,
    transition_benchmark,
    frame_benchmark,
);
criterion_main!(benches);
