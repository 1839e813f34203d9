/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 2D convolution on images
//!
//! This filter supports 3x3 and 5x5 kernels.
//!
//! Only interior pixels, those whose whole neighbourhood lies inside the
//! image, are computed. Pixels closer than the kernel radius to an edge
//! are left at zero, and an image smaller than the kernel comes out black.
//!
//! The intermediate calculations are carried in `f64` and truncated
//! towards zero.
use tint_image::channel::Channel;
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

use crate::utils::truncate;

#[rustfmt::skip]
const BLUR_3X3: [f64; 9] = [
    1. / 16., 1. / 8., 1. / 16.,
    1. / 8.,  1. / 4., 1. / 8.,
    1. / 16., 1. / 8., 1. / 16.
];

#[rustfmt::skip]
const SHARPEN_5X5: [f64; 25] = [
    -1. / 8., -1. / 8., -1. / 8., -1. / 8., -1. / 8.,
    -1. / 8.,  1. / 4.,  1. / 4.,  1. / 4., -1. / 8.,
    -1. / 8.,  1. / 4.,  1.0,      1. / 4., -1. / 8.,
    -1. / 8.,  1. / 4.,  1. / 4.,  1. / 4., -1. / 8.,
    -1. / 8., -1. / 8., -1. / 8., -1. / 8., -1. / 8.
];

/// Convolve an image
///
/// # Example
/// - Blur an image
///
/// ```
/// use tint_image::errors::ImageErrors;
/// use tint_image::image::Image;
/// use tint_image::traits::OperationsTrait;
/// use tint_imageprocs::convolve::Convolve;
///
/// let image = Image::fill([160, 80, 16], 5, 5)?;
/// let blurred = Convolve::blur().execute(&image)?;
/// // interior keeps the flat color, the border is zero
/// assert_eq!(blurred.pixel(2, 2), [160, 80, 16]);
/// assert_eq!(blurred.pixel(0, 2), [0, 0, 0]);
/// # Ok::<(), ImageErrors>(())
/// ```
#[derive(Clone, Debug)]
pub struct Convolve {
    name:    &'static str,
    weights: Vec<f64>
}

impl Convolve {
    /// Create a new convolve matrix, this supports 3x3 and 5x5 matrices
    ///
    /// The operation will return an error if the weights length isn't 9(3x3) or 25(5x5)
    #[must_use]
    pub fn new(weights: Vec<f64>) -> Convolve {
        Convolve {
            name: "2D convolution",
            weights
        }
    }

    /// 3x3 gaussian blur
    #[must_use]
    pub fn blur() -> Convolve {
        Convolve {
            name:    "Blur",
            weights: BLUR_3X3.to_vec()
        }
    }

    /// 5x5 sharpen
    #[must_use]
    pub fn sharpen() -> Convolve {
        Convolve {
            name:    "Sharpen",
            weights: SHARPEN_5X5.to_vec()
        }
    }
}

impl OperationsTrait for Convolve {
    fn name(&self) -> &'static str {
        self.name
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = image.dimensions();

        let mut out = Vec::with_capacity(3);

        for channel in image.channels_ref() {
            let mut out_channel = Channel::new(width, height)?;

            convolve(
                channel.data(),
                out_channel.data_mut(),
                width,
                height,
                &self.weights
            )?;
            out.push(out_channel);
        }
        let [r, g, b]: [Channel; 3] = out
            .try_into()
            .map_err(|_| ImageErrors::GenericStr("Convolution lost a channel"))?;

        Image::new(r, g, b)
    }
}

/// Selects a convolve matrix
///
/// `out_channel` must be zeroed by the caller, border pixels are not written
///
/// # Errors
/// If `weights` is not a 3x3 or 5x5 matrix
pub fn convolve(
    in_channel: &[i32], out_channel: &mut [i32], width: usize, height: usize, weights: &[f64]
) -> Result<(), &'static str> {
    if let Ok(weights) = <&[f64; 9]>::try_from(weights) {
        spatial_nxn::<1, 9>(in_channel, out_channel, width, height, weights);
    } else if let Ok(weights) = <&[f64; 25]>::try_from(weights) {
        spatial_nxn::<2, 25>(in_channel, out_channel, width, height, weights);
    } else {
        return Err("Not implemented, only works for 3x3 and 5x5 arrays");
    }
    Ok(())
}

/// Apply a square kernel of `2 * RADIUS + 1` sides to every interior pixel
fn spatial_nxn<const RADIUS: usize, const OUT_SIZE: usize>(
    in_channel: &[i32], out_channel: &mut [i32], width: usize, height: usize,
    weights: &[f64; OUT_SIZE]
) {
    let radius_size = (2 * RADIUS) + 1;

    assert_eq!(width * height, in_channel.len());
    assert_eq!(radius_size * radius_size, OUT_SIZE);

    let mut local_storage = [0_i32; OUT_SIZE];

    for y in RADIUS..height.saturating_sub(RADIUS) {
        for x in RADIUS..width.saturating_sub(RADIUS) {
            let iy = y - RADIUS;
            let ix = x - RADIUS;

            let mut i = 0;

            for ky in 0..radius_size {
                let start = (iy + ky) * width + ix;

                local_storage[i..i + radius_size]
                    .copy_from_slice(&in_channel[start..start + radius_size]);

                i += radius_size;
            }

            let sum = local_storage
                .iter()
                .zip(weights)
                .map(|(x, weight)| f64::from(*x) * weight)
                .sum::<f64>();

            out_channel[y * width + x] = truncate(sum);
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use tint_image::image::Image;
    use tint_image::traits::OperationsTrait;

    use crate::convolve::{convolve, Convolve};

    #[test]
    fn border_is_left_black() {
        let image = Image::fill([200, 200, 200], 6, 5).unwrap();

        let out = Convolve::sharpen().execute(&image).unwrap();

        for y in 0..5 {
            for x in 0..6 {
                let interior = (2..4).contains(&x) && y == 2;
                let expected = if interior { [200; 3] } else { [0; 3] };

                assert_eq!(out.pixel(x, y), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn small_images_become_black() {
        let image = Image::fill([90, 12, 255], 2, 7).unwrap();

        let out = Convolve::blur().execute(&image).unwrap();
        assert_eq!(out, Image::fill([0, 0, 0], 2, 7).unwrap());
    }

    #[test]
    fn blur_weights_neighbours() {
        #[rustfmt::skip]
        let input = [
            0, 0,  0,
            0, 16, 0,
            0, 0,  32
        ];
        let mut out = [0; 9];

        convolve(&input, &mut out, 3, 3, &super::BLUR_3X3).unwrap();
        // 16/4 + 32/16
        assert_eq!(out[4], 6);
        assert_eq!(out.iter().filter(|x| **x != 0).count(), 1);
    }

    #[test]
    fn rejects_unknown_kernel_size() {
        let mut out = [0; 4];
        assert!(convolve(&[1, 2, 3, 4], &mut out, 2, 2, &[1.0; 16]).is_err());
    }

    #[test]
    fn sharpen_is_clamped() {
        let mut pixels = vec![0_u8; 20 * 20 * 3];
        nanorand::WyRand::new().fill(&mut pixels);

        let image = Image::from_interleaved_u8(&pixels, 20, 20).unwrap();
        assert!(Convolve::sharpen().execute(&image).unwrap().is_clamped());
    }
}
