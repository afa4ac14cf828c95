// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Rectangle, Size};
use iced_loupe::media::sample_image;
use iced_loupe::ui::zoomable::canvas::{pointer_message, ZoomCanvas};
use iced_loupe::ui::zoomable::{compose, Message, PointerPosition, ZoomOptions, ZoomState};
use std::hint::black_box;

fn overlay_geometry_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_geometry");

    let thumbnail = Rectangle::new(Point::ORIGIN, Size::new(400.0, 400.0));
    let canvas_size = Size::new(820.0, 400.0);
    let pixel_options = ZoomOptions::new(sample_image(), "sample")
        .width(400.0)
        .height(400.0)
        .magnification(3.0);
    let relative_options = pixel_options.clone().width("50%").height("100%");

    let mut state = ZoomState::new();
    state.update(Message::ImageLoaded);
    state.update(Message::PointerEntered(PointerPosition::CENTER));

    group.bench_function("pointer_sample", |b| {
        b.iter(|| {
            let cursor = Point::new(black_box(123.0), black_box(321.0));
            black_box(pointer_message(&state, Some(cursor), thumbnail))
        });
    });

    group.bench_function("compose_pixels", |b| {
        b.iter(|| black_box(compose(black_box(&state), &pixel_options)));
    });

    group.bench_function("compose_and_layout_relative", |b| {
        b.iter(|| {
            let canvas = ZoomCanvas {
                options: &relative_options,
                state: black_box(&state),
                overlays: compose(black_box(&state), &relative_options),
                scale: relative_options.magnification,
            };
            black_box(canvas.layout(canvas_size))
        });
    });

    group.finish();
}

criterion_group!(benches, overlay_geometry_benchmark);
criterion_main!(benches);
