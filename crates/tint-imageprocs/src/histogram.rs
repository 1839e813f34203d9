/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate channel histogram statistics
//!
//! An image histogram is a graph that shows the number of pixels in an image at each intensity value
//!
//! [`ChannelHistogram`] gathers the counts, [`HistogramVisualization`]
//! renders them into a new image with one curve per channel.
use std::cell::{BorrowError, Ref, RefCell};

use tint_core::channel::NUM_CHANNELS;
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

/// Number of bins, one per 8-bit value
pub const HISTOGRAM_BINS: usize = 256;

/// Side of the square canvas the visualization draws into
pub const CANVAS_SIZE: usize = 256;

/// Spacing between grid lines of the visualization
const GRID_SPACING: usize = 32;

const BACKGROUND: [i32; 3] = [255, 255, 255];
const GRID_COLOR: [i32; 3] = [200, 200, 200];
const CURVE_COLORS: [[i32; 3]; NUM_CHANNELS] = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];

/// A channel histogram instance
///
/// Histogram statistics can be fetched via  `.histogram()`  after calling `execute`
///
/// The operation hands back an unchanged copy of its input, the counts are
/// the useful output.
///
/// # Example
/// ```rust
/// use tint_image::image::Image;
/// use tint_image::traits::OperationsTrait;
/// use tint_imageprocs::histogram::ChannelHistogram;
///
/// let image = Image::fill([100, 0, 255], 10, 10).unwrap();
/// let histogram = ChannelHistogram::new();
/// histogram.execute(&image).unwrap();
/// let values = histogram.histogram().unwrap();
/// // r had 100 items
/// assert_eq!(values[0][100], 100);
/// assert_eq!(values[2][255], 100);
/// ```
pub struct ChannelHistogram {
    histogram: RefCell<[[u32; HISTOGRAM_BINS]; NUM_CHANNELS]>
}

impl ChannelHistogram {
    /// Create a new channel histogram
    #[must_use]
    pub fn new() -> ChannelHistogram {
        ChannelHistogram {
            histogram: RefCell::new([[0; HISTOGRAM_BINS]; NUM_CHANNELS])
        }
    }

    /// Returns the histogram after a single pass on an image
    ///
    /// # Returns
    /// - Ok(reference): A reference to the underlying result
    /// - Err(BorrowError): Indicates this filter has borrowed the reference
    pub fn histogram(&self) -> Result<Ref<'_, [[u32; HISTOGRAM_BINS]; NUM_CHANNELS]>, BorrowError> {
        self.histogram.try_borrow()
    }
}

impl Default for ChannelHistogram {
    fn default() -> Self {
        ChannelHistogram::new()
    }
}

impl OperationsTrait for ChannelHistogram {
    fn name(&self) -> &'static str {
        "Channel Histogram"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        *self.histogram.borrow_mut() = image_histogram(image);

        Ok(image.clone())
    }
}

/// Render the histogram of an image as a line graph
///
/// The output is always a 256x256 image with a white background, a light
/// grey grid and a red, green and blue curve. Curves are scaled so the
/// largest count of any channel reaches the top row.
#[derive(Default, Copy, Clone, Debug)]
pub struct HistogramVisualization;

impl HistogramVisualization {
    #[must_use]
    pub fn new() -> HistogramVisualization {
        HistogramVisualization
    }
}

impl OperationsTrait for HistogramVisualization {
    fn name(&self) -> &'static str {
        "Histogram visualization"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let histogram = image_histogram(image);

        let mut canvas = Image::fill(BACKGROUND, CANVAS_SIZE, CANVAS_SIZE)?;

        for i in (0..CANVAS_SIZE).step_by(GRID_SPACING) {
            for j in 0..CANVAS_SIZE {
                canvas.set_pixel(i, j, GRID_COLOR);
                canvas.set_pixel(j, i, GRID_COLOR);
            }
        }

        let max_count = histogram
            .iter()
            .flat_map(|x| x.iter())
            .copied()
            .max()
            .unwrap_or(0)
            .max(1);

        let top = (CANVAS_SIZE - 1) as f64;

        for (counts, color) in histogram.iter().zip(CURVE_COLORS) {
            // row of the curve for each bin, zero counts sit on the bottom row
            let points = counts
                .iter()
                .map(|c| {
                    let height = (f64::from(*c) * top / f64::from(max_count)).round();
                    (CANVAS_SIZE - 1) - height as usize
                })
                .collect::<Vec<usize>>();

            for (x, pair) in points.windows(2).enumerate() {
                draw_line(&mut canvas, (x, pair[0]), (x + 1, pair[1]), color);
            }
        }
        Ok(canvas)
    }
}

/// Count the occurrences of each value in one channel
///
/// Samples outside `[0,255]` are counted in the nearest end bin.
#[must_use]
pub fn histogram(data: &[i32]) -> [u32; HISTOGRAM_BINS] {
    let mut counts = [0_u32; HISTOGRAM_BINS];

    for value in data {
        counts[(*value).clamp(0, 255) as usize] += 1;
    }
    counts
}

/// Histogram of every channel, in red, green, blue order
#[must_use]
pub fn image_histogram(image: &Image) -> [[u32; HISTOGRAM_BINS]; NUM_CHANNELS] {
    image.channels_ref().each_ref().map(|c| histogram(c.data()))
}

/// Return the bin with the highest count, ties go to the lowest bin
///
/// Only bins in `range` are considered, `None` if they are all empty
#[must_use]
pub fn peak(histogram: &[u32; HISTOGRAM_BINS], range: std::ops::Range<usize>) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;

    for i in range {
        let count = histogram[i];

        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((i, count));
        }
    }
    best.map(|(i, _)| i)
}

/// Bresenham line between two points of the canvas, inclusive
fn draw_line(canvas: &mut Image, from: (usize, usize), to: (usize, usize), color: [i32; 3]) {
    let (mut x0, mut y0) = (from.0 as isize, from.1 as isize);
    let (x1, y1) = (to.0 as isize, to.1 as isize);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        canvas.set_pixel(x0 as usize, y0 as usize, color);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;

        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
