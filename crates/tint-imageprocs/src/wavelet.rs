/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Orthonormal Haar wavelet transform on square power of two matrices
//!
//! The forward transform works on the top left `s x s` block for
//! `s = n, n/2, .., 2`, transforming every row and then every column of the
//! block. The inverse undoes it with `s = 2, 4, .., n`, columns first.
use std::f64::consts::SQRT_2;

/// Square matrix of transform coefficients, row major
#[derive(Clone, Debug, PartialEq)]
pub struct Coefficients {
    size:   usize,
    data:   Vec<f64>,
    centre: f64
}

impl Coefficients {
    /// Copy `samples` of `width x height` into the top left corner of the
    /// smallest power of two square holding them, the rest is zero
    #[must_use]
    pub fn from_samples(samples: &[i32], width: usize, height: usize) -> Coefficients {
        Coefficients::with_centre(samples, width, height, 0.0)
    }

    /// Like [`from_samples`](Self::from_samples) but with the mean of
    /// `samples` subtracted first
    ///
    /// The padding then stands for the mean instead of black, and
    /// [`to_samples`](Self::to_samples) adds the mean back.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centred(samples: &[i32], width: usize, height: usize) -> Coefficients {
        let sum = samples.iter().map(|x| f64::from(*x)).sum::<f64>();
        let mean = sum / (samples.len().max(1) as f64);

        Coefficients::with_centre(samples, width, height, mean)
    }

    fn with_centre(samples: &[i32], width: usize, height: usize, centre: f64) -> Coefficients {
        let size = width.max(height).max(1).next_power_of_two();

        let mut data = vec![0.0; size * size];

        for (out_row, in_row) in data.chunks_exact_mut(size).zip(samples.chunks_exact(width)) {
            for (out, sample) in out_row.iter_mut().zip(in_row) {
                *out = f64::from(*sample) - centre;
            }
        }
        Coefficients { size, data, centre }
    }

    /// Value subtracted from every sample before the transform
    pub const fn centre(&self) -> f64 {
        self.centre
    }

    /// Side of the padded square
    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Crop to `width x height`, rounding to the nearest integer
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_samples(&self, width: usize, height: usize) -> Vec<i32> {
        self.data
            .chunks_exact(self.size)
            .take(height)
            .flat_map(|row| row[..width].iter().map(|x| (x + self.centre).round() as i32))
            .collect()
    }

    /// Apply the forward 2D transform in place
    pub fn forward(&mut self) {
        let mut tmp = vec![0.0; self.size];
        let mut column = vec![0.0; self.size];

        let mut s = self.size;

        while s > 1 {
            for row in self.data.chunks_exact_mut(self.size).take(s) {
                haar_step(&mut row[..s], &mut tmp[..s]);
            }
            for x in 0..s {
                self.gather_column(x, &mut column[..s]);
                haar_step(&mut column[..s], &mut tmp[..s]);
                self.scatter_column(x, &column[..s]);
            }
            s /= 2;
        }
    }

    /// Apply the inverse 2D transform in place
    pub fn inverse(&mut self) {
        let mut tmp = vec![0.0; self.size];
        let mut column = vec![0.0; self.size];

        let mut s = 2;

        while s <= self.size {
            for x in 0..s {
                self.gather_column(x, &mut column[..s]);
                inverse_haar_step(&mut column[..s], &mut tmp[..s]);
                self.scatter_column(x, &column[..s]);
            }
            for row in self.data.chunks_exact_mut(self.size).take(s) {
                inverse_haar_step(&mut row[..s], &mut tmp[..s]);
            }
            s *= 2;
        }
    }

    fn gather_column(&self, x: usize, column: &mut [f64]) {
        for (y, value) in column.iter_mut().enumerate() {
            *value = self.data[y * self.size + x];
        }
    }

    fn scatter_column(&mut self, x: usize, column: &[f64]) {
        for (y, value) in column.iter().enumerate() {
            self.data[y * self.size + x] = *value;
        }
    }
}

/// One level of the 1D transform
///
/// Pairwise averages go to the first half of `signal`, differences to
/// the second half. `signal.len()` must be even.
pub fn haar_step(signal: &mut [f64], tmp: &mut [f64]) {
    let half = signal.len() / 2;

    for (i, pair) in signal.chunks_exact(2).enumerate() {
        tmp[i] = (pair[0] + pair[1]) / SQRT_2;
        tmp[half + i] = (pair[0] - pair[1]) / SQRT_2;
    }
    signal.copy_from_slice(&tmp[..signal.len()]);
}

/// Undo [`haar_step`]
pub fn inverse_haar_step(signal: &mut [f64], tmp: &mut [f64]) {
    let half = signal.len() / 2;

    for i in 0..half {
        let (low, high) = (signal[i], signal[half + i]);

        tmp[2 * i] = (low + high) / SQRT_2;
        tmp[2 * i + 1] = (low - high) / SQRT_2;
    }
    signal.copy_from_slice(&tmp[..signal.len()]);
}
