/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Lossy compression by Haar wavelet thresholding
//!
//! Every channel is centred on its mean, zero padded to a power of two
//! square and transformed, then the smallest coefficients are dropped and
//! the image reconstructed. Since the padding sits at the mean, a 100%
//! compression leaves a flat image at the mean of the original channel
//! whatever its dimensions.
//!
//! The cut off is picked over the *distinct* non-zero magnitudes of all
//! three channels, DC terms excluded: with `k = floor(count * percent / 100)`
//! distinct values, every coefficient whose magnitude is at most the `k`-th
//! smallest one is zeroed. DC terms are never zeroed.
use tint_core::channel::NUM_CHANNELS;
use tint_core::log::debug;
use tint_image::channel::Channel;
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

use crate::utils::check_percentage;
use crate::wavelet::Coefficients;

/// Haar wavelet compression
///
/// # Example
/// ```
/// use tint_image::image::Image;
/// use tint_image::traits::OperationsTrait;
/// use tint_imageprocs::compress::Compress;
///
/// let image = Image::from_fn(8, 8, |x, y, pix| {
///     pix[0] = (x * 30) as i32;
///     pix[1] = (y * 30) as i32;
///     pix[2] = 77;
/// })
/// .unwrap();
/// let same = Compress::new(0.0).execute(&image).unwrap();
/// assert_eq!(same, image);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Compress {
    percentage: f64
}

impl Compress {
    /// Create a compression dropping `percentage` percent of the distinct
    /// coefficient magnitudes
    #[must_use]
    pub fn new(percentage: f64) -> Compress {
        Compress { percentage }
    }
}

impl OperationsTrait for Compress {
    fn name(&self) -> &'static str {
        "Compress"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        check_percentage("compression percentage", self.percentage)?;

        let (width, height) = image.dimensions();

        let mut coefficients = image.channels_ref().each_ref().map(|c| {
            let mut coefficients = Coefficients::centred(c.data(), width, height);
            coefficients.forward();
            coefficients
        });

        let threshold = compression_threshold(&coefficients, self.percentage);

        debug!("Compression threshold {threshold}");

        for c in &mut coefficients {
            apply_threshold(c.data_mut(), threshold);
            c.inverse();
        }
        let [r, g, b] = coefficients;

        Image::new(
            Channel::from_vec(r.to_samples(width, height), width, height)?,
            Channel::from_vec(g.to_samples(width, height), width, height)?,
            Channel::from_vec(b.to_samples(width, height), width, height)?
        )
    }
}

/// Magnitude at or below which coefficients are dropped
///
/// DC terms, the first coefficient of each channel, do not take part.
/// Zero when `percentage` selects no distinct magnitude.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn compression_threshold(coefficients: &[Coefficients; NUM_CHANNELS], percentage: f64) -> f64 {
    let mut magnitudes = coefficients
        .iter()
        .flat_map(|c| c.data().iter().skip(1))
        .map(|x| x.abs())
        .filter(|x| *x != 0.0)
        .collect::<Vec<f64>>();

    magnitudes.sort_unstable_by(f64::total_cmp);
    magnitudes.dedup();

    let k = ((magnitudes.len() as f64) * percentage / 100.0).floor() as usize;

    match k.min(magnitudes.len()) {
        0 => 0.0,
        k => magnitudes[k - 1]
    }
}

/// Zero every coefficient with magnitude `<= threshold`, except the DC term
pub fn apply_threshold(coefficients: &mut [f64], threshold: f64) {
    for c in coefficients.iter_mut().skip(1) {
        if c.abs() <= threshold {
            *c = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use tint_image::errors::ImageErrors;
    use tint_image::image::Image;
    use tint_image::traits::OperationsTrait;

    use crate::compress::{apply_threshold, Compress};

    fn random_image(width: usize, height: usize) -> Image {
        let mut pixels = vec![0_u8; width * height * 3];
        nanorand::WyRand::new().fill(&mut pixels);
        Image::from_interleaved_u8(&pixels, width, height).unwrap()
    }

    #[test]
    fn zero_percent_keeps_the_image() {
        let image = random_image(23, 11);
        let out = Compress::new(0.0).execute(&image).unwrap();

        for (a, b) in image.channels_ref().iter().zip(out.channels_ref()) {
            for (x, y) in a.data().iter().zip(b.data()) {
                assert!((x - y).abs() <= 1);
            }
        }
    }

    #[test]
    fn full_compression_is_flat() {
        let image = random_image(16, 16);
        let out = Compress::new(100.0).execute(&image).unwrap();

        for (source, channel) in image.channels_ref().iter().zip(out.channels_ref()) {
            let first = channel.data()[0];
            assert!(channel.data().iter().all(|x| *x == first));

            let mean = source.data().iter().sum::<i32>() as f64 / 256.0;
            assert!((f64::from(first) - mean).abs() <= 1.0);
        }
    }

    #[test]
    fn full_compression_keeps_the_mean_of_odd_sizes() {
        let flat = Image::fill([200, 100, 50], 5, 9).unwrap();
        assert_eq!(Compress::new(100.0).execute(&flat).unwrap(), flat);

        let small = Image::fill([200, 100, 50], 3, 3).unwrap();
        assert_eq!(Compress::new(100.0).execute(&small).unwrap(), small);

        let image = random_image(7, 3);
        let out = Compress::new(100.0).execute(&image).unwrap();

        for (source, channel) in image.channels_ref().iter().zip(out.channels_ref()) {
            let mean = source.data().iter().sum::<i32>() as f64 / 21.0;

            assert!(channel.data().iter().all(|x| f64::from(*x) == mean.round()));
        }
    }

    #[test]
    fn more_compression_is_never_closer() {
        let image = random_image(32, 32);

        let error = |p: f64| {
            let out = Compress::new(p).execute(&image).unwrap();
            image
                .channels_ref()
                .iter()
                .zip(out.channels_ref())
                .flat_map(|(a, b)| a.data().iter().zip(b.data()).map(|(x, y)| (x - y).abs()))
                .sum::<i32>()
        };
        assert!(error(10.0) <= error(90.0));
    }

    #[test]
    fn rejects_bad_percentages() {
        let image = random_image(4, 4);

        for p in [-1.0, 100.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Compress::new(p).execute(&image),
                Err(ImageErrors::OutOfRange(..))
            ));
        }
    }

    #[test]
    fn threshold_keeps_dc() {
        let mut c = [5.0, -1.0, 2.0, 1.0, -3.0];
        apply_threshold(&mut c, 2.0);

        assert_eq!(c, [5.0, 0.0, 0.0, 0.0, -3.0]);
    }

    #[test]
    fn output_keeps_dimensions() {
        let image = random_image(5, 9);
        let out = Compress::new(50.0).execute(&image).unwrap();

        assert_eq!(out.dimensions(), (5, 9));
        assert!(out.is_clamped());
    }
}
