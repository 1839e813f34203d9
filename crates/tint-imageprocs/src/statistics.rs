/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Summary statistics of an image
//!
//! Used by the `info` command to describe an image without saving it.
use tint_core::channel::{ChannelKind, NUM_CHANNELS};
use tint_image::image::Image;

use crate::histogram::{image_histogram, peak, HISTOGRAM_BINS};

/// Statistics of one channel
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct ChannelStatistics {
    pub channel: ChannelKind,
    pub min:     i32,
    pub max:     i32,
    pub mean:    f64,
    /// Most frequent value, ties go to the lowest one
    pub mode:    usize
}

/// Statistics of a whole image
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct ImageStatistics {
    pub width:    usize,
    pub height:   usize,
    pub channels: [ChannelStatistics; NUM_CHANNELS]
}

/// Gather min, max, mean and mode of every channel
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn statistics(image: &Image) -> ImageStatistics {
    let histogram = image_histogram(image);
    let pixels = (image.width() * image.height()) as f64;

    let channels = std::array::from_fn(|i| {
        let data = image.channels_ref()[i].data();

        ChannelStatistics {
            channel: ChannelKind::ALL[i],
            min:     data.iter().copied().min().unwrap_or(0),
            max:     data.iter().copied().max().unwrap_or(0),
            mean:    data.iter().map(|x| f64::from(*x)).sum::<f64>() / pixels,
            mode:    peak(&histogram[i], 0..HISTOGRAM_BINS).unwrap_or(0)
        }
    });

    ImageStatistics {
        width: image.width(),
        height: image.height(),
        channels
    }
}
