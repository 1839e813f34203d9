/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use tint_image::image::Image;

/// Width and height of the images the benchmarks run on
pub const BENCH_SIZE: usize = 512;

/// Create a square image filled with noise
pub fn random_image(size: usize) -> Image {
    let mut pixels = vec![0_u8; size * size * 3];
    nanorand::WyRand::new_seed(0x7469_6e74).fill(&mut pixels);

    Image::from_interleaved_u8(&pixels, size, size).unwrap()
}
