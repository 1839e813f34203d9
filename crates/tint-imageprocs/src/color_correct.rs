/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Histogram based color correction
//!
//! Each channel's most frequent value (its peak) is moved onto the
//! average peak of the three channels by adding a constant offset to that
//! channel. Values 0 and 255 are treated as clipped and never count
//! towards a peak.
use tint_core::channel::{ChannelKind, NUM_CHANNELS};
use tint_core::log::debug;
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

use crate::brighten::brighten;
use crate::histogram::{image_histogram, peak, HISTOGRAM_BINS};

/// Align the histogram peaks of the three channels
#[derive(Default, Copy, Clone, Debug)]
pub struct ColorCorrect;

impl ColorCorrect {
    #[must_use]
    pub fn new() -> ColorCorrect {
        ColorCorrect
    }
}

impl OperationsTrait for ColorCorrect {
    fn name(&self) -> &'static str {
        "Color correct"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let offsets = color_correct_offsets(image);

        let mut output = image.clone();

        for (plane, offset) in output.planes_mut().into_iter().zip(offsets) {
            brighten(plane, offset);
        }
        Ok(output)
    }
}

/// Offsets to add to each channel
///
/// A channel with nothing strictly between 0 and 255 has no peak, it gets
/// an offset of zero and is left out of the average.
#[must_use]
pub fn color_correct_offsets(image: &Image) -> [i32; NUM_CHANNELS] {
    let histogram = image_histogram(image);

    let peaks = histogram
        .each_ref()
        .map(|counts| peak(counts, 1..HISTOGRAM_BINS - 1));

    let found = peaks.iter().flatten().copied().collect::<Vec<usize>>();

    if found.is_empty() {
        return [0; NUM_CHANNELS];
    }
    let target = found.iter().sum::<usize>() / found.len();

    let mut offsets = [0; NUM_CHANNELS];

    for ((offset, peak), kind) in offsets.iter_mut().zip(peaks).zip(ChannelKind::ALL) {
        if let Some(peak) = peak {
            debug!("{kind} peak at {peak}, moving to {target}");

            *offset = target as i32 - peak as i32;
        }
    }
    offsets
}
