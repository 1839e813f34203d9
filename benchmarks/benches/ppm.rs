/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tint_benches::{random_image, BENCH_SIZE};
use tint_ppm::{PPMDecoder, PPMEncoder, PPMVersions};

fn encode(version: PPMVersions) -> Vec<u8> {
    let pixels = random_image(BENCH_SIZE).to_interleaved_u8();
    let mut out = Vec::new();

    PPMEncoder::new(&mut out)
        .encode(BENCH_SIZE, BENCH_SIZE, version, &pixels)
        .unwrap();
    out
}

fn bench_decode(c: &mut Criterion, name: &str, version: PPMVersions) {
    let data = encode(version);

    let mut group = c.benchmark_group(name);

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("tint-ppm", |b| {
        b.iter(|| {
            let pixels = PPMDecoder::new(&data).decode().unwrap();
            black_box(pixels);
        })
    });
}

fn decode_p6(c: &mut Criterion) {
    bench_decode(c, "ppm: decode binary", PPMVersions::P6);
}

fn decode_p3(c: &mut Criterion) {
    bench_decode(c, "ppm: decode ascii", PPMVersions::P3);
}

criterion_group!(benches, decode_p6, decode_p3);
criterion_main!(benches);
