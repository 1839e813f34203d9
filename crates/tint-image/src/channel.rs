/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single image plane
//!
//! A channel is a row-major matrix of `i32` samples. Samples are signed
//! and wider than a byte so that intermediate results can leave `[0,255]`
//! before an operation clamps them.
use core::slice::ChunksExact;

use crate::errors::ImageErrors;

/// Largest value a sample holds after clamping
pub const MAX_VALUE: i32 = 255;

/// A row-major matrix of samples
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    width:  usize,
    height: usize,
    data:   Vec<i32>
}

impl Channel {
    /// Create a channel filled with zeroes
    ///
    /// # Errors
    /// If either `width` or `height` is zero
    pub fn new(width: usize, height: usize) -> Result<Channel, ImageErrors> {
        Channel::fill(0, width, height)
    }

    /// Create a channel where every sample is `value`
    ///
    /// # Errors
    /// If either `width` or `height` is zero
    pub fn fill(value: i32, width: usize, height: usize) -> Result<Channel, ImageErrors> {
        if width == 0 || height == 0 {
            return Err(ImageErrors::ZeroDimensions);
        }
        Ok(Channel {
            width,
            height,
            data: vec![value; width * height]
        })
    }

    /// Wrap existing row-major samples
    ///
    /// # Errors
    /// - Zero width or height
    /// - `data.len()` not equal to `width * height`
    pub fn from_vec(data: Vec<i32>, width: usize, height: usize) -> Result<Channel, ImageErrors> {
        if width == 0 || height == 0 {
            return Err(ImageErrors::ZeroDimensions);
        }
        if data.len() != width * height {
            return Err(ImageErrors::ChannelLengthMisMatch(width * height, data.len()));
        }
        Ok(Channel {
            width,
            height,
            data
        })
    }

    /// Build a channel from a list of rows, mostly useful in tests
    ///
    /// # Errors
    /// Empty input or rows of differing lengths
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Channel, ImageErrors> {
        let height = rows.len();
        let width = rows.first().map_or(0, |x| x.as_ref().len());

        let mut data = Vec::with_capacity(width * height);

        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(ImageErrors::ChannelLengthMisMatch(width, row.len()));
            }
            data.extend_from_slice(row);
        }
        Channel::from_vec(data, width, height)
    }

    /// Return (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Sample at column `x`, row `y`
    ///
    /// # Panics
    /// If the coordinate is outside the channel
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        assert!(x < self.width, "x {x} out of bounds for width {}", self.width);
        self.data[y * self.width + x]
    }

    /// Set the sample at column `x`, row `y`
    ///
    /// # Panics
    /// If the coordinate is outside the channel
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: i32) {
        assert!(x < self.width, "x {x} out of bounds for width {}", self.width);
        self.data[y * self.width + x] = value;
    }

    /// Raw row-major samples
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Raw row-major samples, mutable
    ///
    /// The length of the slice is fixed, so dimensions cannot change
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Iterate over rows
    pub fn rows(&self) -> ChunksExact<'_, i32> {
        self.data.chunks_exact(self.width)
    }

    /// Clamp every sample into `[0,255]`
    pub fn clamp(&mut self) {
        clamp_samples(&mut self.data);
    }

    /// Return true if every sample lies in `[0,255]`
    pub fn is_clamped(&self) -> bool {
        self.data.iter().all(|x| (0..=MAX_VALUE).contains(x))
    }
}

/// Clamp samples into `[0,255]` in place
pub fn clamp_samples(samples: &mut [i32]) {
    samples
        .iter_mut()
        .for_each(|x| *x = (*x).clamp(0, MAX_VALUE));
}

#[cfg(test)]
mod tests {
    use super::Channel;
    use crate::errors::ImageErrors;

    #[test]
    fn from_rows_is_row_major() {
        let channel = Channel::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();

        assert_eq!(channel.dimensions(), (3, 2));
        assert_eq!(channel.get(2, 0), 3);
        assert_eq!(channel.get(0, 1), 4);
        assert_eq!(channel.rows().nth(1).unwrap(), &[4, 5, 6]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows: Vec<Vec<i32>> = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            Channel::from_rows(&rows),
            Err(ImageErrors::ChannelLengthMisMatch(2, 1))
        ));
    }

    #[test]
    fn zero_sized_channels_are_rejected() {
        assert!(matches!(Channel::new(0, 4), Err(ImageErrors::ZeroDimensions)));
        assert!(matches!(
            Channel::from_vec(vec![], 3, 0),
            Err(ImageErrors::ZeroDimensions)
        ));
    }

    #[test]
    fn clamp_saturates_both_ends() {
        let mut channel = Channel::from_rows(&[[-40, 0, 128, 255, 900]]).unwrap();
        assert!(!channel.is_clamped());

        channel.clamp();
        assert_eq!(channel.data(), &[0, 0, 128, 255, 255]);
        assert!(channel.is_clamped());
    }
}
