use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swipekit::{PointerSample, SwipeEvent, SwipeOptions, Swiper};
use swipekit_testing::{SwipeRobot, TestHost};

const SLIDE_COUNT_SAMPLES: &[usize] = &[3, 16, 64];

fn continuous_swiper(slide_count: usize) -> (TestHost, Swiper<TestHost>) {
    let host = TestHost::new();
    let slides = host.make_slides(slide_count);
    let swiper = Swiper::new(
        host.clone(),
        slides,
        SwipeOptions::new().continuous(true),
    )
    .expect("slides provided");
    (host, swiper)
}

fn bench_step_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_transition");
    for &slide_count in SLIDE_COUNT_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("slides", slide_count),
            &slide_count,
            |b, &slide_count| {
                let (host, swiper) = continuous_swiper(slide_count);
                b.iter(|| {
                    swiper.next();
                    host.clear_transforms();
                    black_box(swiper.current_index());
                });
            },
        );
    }
    group.finish();
}

fn bench_far_jump(c: &mut Criterion) {
    let mut group = c.benchmark_group("far_jump");
    for &slide_count in SLIDE_COUNT_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("slides", slide_count),
            &slide_count,
            |b, &slide_count| {
                let host = TestHost::new();
                let slides = host.make_slides(slide_count);
                let swiper = Swiper::new(
                    host.clone(),
                    slides,
                    SwipeOptions::new().continuous(false),
                )
                .expect("slides provided");
                let far = slide_count as isize - 1;

                // Each round trip parks every intermediate slide twice.
                b.iter(|| {
                    swiper.goto(far, None);
                    swiper.goto(0, None);
                    host.clear_transforms();
                    black_box(swiper.current_index());
                });
            },
        );
    }
    group.finish();
}

fn bench_drag_tracking(c: &mut Criterion) {
    c.bench_function("drag_tracking", |b| {
        let (host, swiper) = continuous_swiper(16);
        swiper.handle_event(SwipeEvent::PointerDown(PointerSample::single(200.0, 200.0)));

        b.iter(|| {
            for step in 1..=32u32 {
                let x = 200.0 - step as f32;
                let response =
                    swiper.handle_event(SwipeEvent::PointerMove(PointerSample::single(x, 200.0)));
                black_box(response);
            }
            host.clear_transforms();
        });
    });
}

fn bench_swipe_commit(c: &mut Criterion) {
    c.bench_function("swipe_commit", |b| {
        let robot = SwipeRobot::new(16, SwipeOptions::new().continuous(true));
        b.iter(|| {
            robot.swipe_left(120.0, 150);
            robot.settle();
            robot.host().clear_transforms();
            black_box(robot.index());
        });
    });
}

criterion_group!(
    transition,
    bench_step_transition,
    bench_far_jump,
    bench_drag_tracking,
    bench_swipe_commit
);
criterion_main!(transition);
