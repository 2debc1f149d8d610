// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for driving the gesture controller with synthetic input streams.

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fancy_scaler::{
    EmissionMode, FrameSize, ScalerConfig, SizingPolicy, SourceSize, SurfaceKind, ViewportModel,
    ZoomAnchorPolicy,
};
use fancy_scaler_gesture::{GestureController, ScaleSpans, Surface};
use kurbo::{Affine, Point, Vec2};

#[derive(Default)]
struct Sink {
    last: Option<Affine>,
}

impl Surface for Sink {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Texture
    }

    fn apply_transform(&mut self, transform: Affine) {
        self.last = Some(transform);
    }
}

fn ready(config: ScalerConfig) -> (Rc<RefCell<Sink>>, GestureController<Sink>) {
    let surface = Rc::new(RefCell::new(Sink::default()));
    let mut controller = GestureController::new(&surface, config).unwrap();
    controller.on_frame_size_changed(1080, 1920).unwrap();
    controller
        .set_source_size(640, 480, SizingPolicy::default())
        .unwrap();
    (surface, controller)
}

fn spans(step: u32, focus: Point) -> ScaleSpans {
    // Alternate spreading and pinching so the scale never saturates.
    let phase = f64::from(step % 40);
    let previous = 200.0 + phase * 5.0;
    let current = if (step / 40) % 2 == 0 {
        previous + 5.0
    } else {
        previous - 5.0
    };
    ScaleSpans {
        current_span: current,
        current_span_x: current,
        current_span_y: current,
        previous_span: previous,
        previous_span_x: previous,
        previous_span_y: previous,
        focus,
    }
}

fn bench_pinch_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/pinch_stream");
    for &(name, anchor) in &[
        ("center", ZoomAnchorPolicy::Center),
        ("live_focus", ZoomAnchorPolicy::LiveFocus),
        ("initial_focus", ZoomAnchorPolicy::InitialFocus),
    ] {
        for &steps in &[16_u32, 256] {
            group.bench_with_input(BenchmarkId::new(name, steps), &steps, |b, &steps| {
                b.iter_batched(
                    || ready(ScalerConfig::default().with_zoom_anchor(anchor)),
                    |(surface, mut controller)| {
                        controller.on_pointer_down();
                        controller.on_scale_begin(Point::new(540.0, 960.0));
                        for step in 0..steps {
                            controller.on_scale(spans(step, Point::new(540.0, 960.0)));
                        }
                        controller.on_scale_end();
                        controller.on_pointer_up();
                        black_box(surface.borrow().last);
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_pan_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/pan_stream");
    for &steps in &[16_u32, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter_batched(
                || {
                    let (surface, mut controller) = ready(ScalerConfig::default());
                    controller.on_pointer_down();
                    controller.on_double_tap(Point::new(540.0, 960.0));
                    controller.on_pointer_up();
                    (surface, controller)
                },
                |(surface, mut controller)| {
                    controller.on_pointer_down();
                    for step in 0..steps {
                        let dir = if step % 64 < 32 { 1.0 } else { -1.0 };
                        controller.on_scroll(Vec2::new(3.0 * dir, 5.0 * dir));
                    }
                    controller.on_pointer_up();
                    black_box(surface.borrow().last);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_emission_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/emission");
    for &(name, mode) in &[
        ("immediate", EmissionMode::Immediate),
        ("deferred", EmissionMode::Deferred),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || ready(ScalerConfig::default().with_emission(mode)),
                |(surface, mut controller)| {
                    controller.on_pointer_down();
                    for step in 0..64_u32 {
                        controller.on_scale(spans(step, Point::new(100.0, 100.0)));
                        if step % 4 == 3 {
                            controller.on_render_tick();
                        }
                    }
                    black_box(surface.borrow().last);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_model_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("model/rebuild");
    let frames = [(320_u32, 480_u32), (1080, 1920), (1920, 1080), (2560, 1440)];
    group.bench_function("frame_changes", |b| {
        b.iter(|| {
            let mut model = ViewportModel::new();
            model.set_source(SourceSize::new(640, 480).unwrap(), SizingPolicy::default());
            for &(w, h) in &frames {
                model.set_frame_size(FrameSize::new(w, h).unwrap());
                black_box(model.transform());
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_pinch_stream,
    bench_pan_stream,
    bench_emission_mode,
    bench_model_rebuild
);
criterion_main!(benches);
