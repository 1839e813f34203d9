/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tint_benches::{random_image, BENCH_SIZE};
use tint_image::traits::OperationsTrait;
use tint_imageprocs::color_correct::ColorCorrect;
use tint_imageprocs::color_matrix::ColorMatrix;
use tint_imageprocs::compress::Compress;
use tint_imageprocs::convolve::Convolve;
use tint_imageprocs::flip::{Flip, FlipDirection};
use tint_imageprocs::histogram::HistogramVisualization;
use tint_imageprocs::levels::LevelsAdjust;

fn bench_inner<T: OperationsTrait>(c: &mut Criterion, name: &str, operation: T) {
    let image = random_image(BENCH_SIZE);

    let mut group = c.benchmark_group(name);

    group.throughput(Throughput::Elements((BENCH_SIZE * BENCH_SIZE) as u64));

    group.bench_function("tint", |b| {
        b.iter(|| {
            let im = operation.execute(&image).unwrap();
            black_box(im);
        })
    });
}

fn bench_blur(c: &mut Criterion) {
    bench_inner(c, "imageprocs: blur", Convolve::blur());
}

fn bench_sharpen(c: &mut Criterion) {
    bench_inner(c, "imageprocs: sharpen", Convolve::sharpen());
}

fn bench_sepia(c: &mut Criterion) {
    bench_inner(c, "imageprocs: sepia", ColorMatrix::sepia());
}

fn bench_levels(c: &mut Criterion) {
    bench_inner(c, "imageprocs: levels-adjust", LevelsAdjust::new(20, 100, 230));
}

fn bench_color_correct(c: &mut Criterion) {
    bench_inner(c, "imageprocs: color-correct", ColorCorrect::new());
}

fn bench_histogram(c: &mut Criterion) {
    bench_inner(c, "imageprocs: histogram", HistogramVisualization::new());
}

fn bench_compress(c: &mut Criterion) {
    bench_inner(c, "imageprocs: compress 50", Compress::new(50.0));
}

fn bench_flip_horizontal(c: &mut Criterion) {
    bench_inner(c, "imageprocs: flip-horizontal", Flip::new(FlipDirection::Horizontal));
}

fn bench_flip_vertical(c: &mut Criterion) {
    bench_inner(c, "imageprocs: flip-vertical", Flip::new(FlipDirection::Vertical));
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=bench_blur,bench_sharpen,bench_sepia,bench_levels,bench_color_correct,bench_histogram,bench_compress,bench_flip_horizontal,bench_flip_vertical);

criterion_main!(benches);
