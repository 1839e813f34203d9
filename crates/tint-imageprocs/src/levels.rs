/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Levels adjustment
//!
//! Remap samples through the quadratic curve that sends the black point to
//! 0, the mid point to 128 and the white point to 255.
//!
//! The curve is evaluated once per possible sample into a lookup table,
//! samples are then replaced by their table entry.
use tint_core::log::trace;
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

use crate::utils::truncate;

/// Levels adjustment operation
///
/// # Example
/// ```
/// use tint_image::image::Image;
/// use tint_image::traits::OperationsTrait;
/// use tint_imageprocs::levels::LevelsAdjust;
///
/// let image = Image::fill([20, 100, 240], 3, 3).unwrap();
/// // stretch the range 20..240 to 0..255
/// let out = LevelsAdjust::new(20, 130, 240).execute(&image).unwrap();
/// assert_eq!(out.pixel(1, 1)[0], 0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct LevelsAdjust {
    black: i32,
    mid:   i32,
    white: i32
}

impl LevelsAdjust {
    /// Create a new levels adjustment
    ///
    /// The control points are validated when the operation runs, they must
    /// satisfy `0 <= black < mid < white <= 255`
    #[must_use]
    pub fn new(black: i32, mid: i32, white: i32) -> LevelsAdjust {
        LevelsAdjust { black, mid, white }
    }
}

impl OperationsTrait for LevelsAdjust {
    fn name(&self) -> &'static str {
        "Levels adjust"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let coefficients = fit_quadratic(self.black, self.mid, self.white)?;

        trace!(
            "Levels curve a={} b={} c={}",
            coefficients[0],
            coefficients[1],
            coefficients[2]
        );
        let lut = levels_lut(coefficients);

        let mut output = image.clone();

        for plane in output.planes_mut() {
            levels(plane, &lut);
        }
        Ok(output)
    }
}

/// Return `[a, b, c]` of `y = a x^2 + b x + c` through
/// `(black, 0)`, `(mid, 128)` and `(white, 255)`
///
/// # Errors
/// [`ImageErrors::OutOfRange`] if the points are not strictly increasing
/// values in `[0,255]`
pub fn fit_quadratic(black: i32, mid: i32, white: i32) -> Result<[f64; 3], ImageErrors> {
    if !(0 <= black && black < mid && mid < white && white <= 255) {
        return Err(ImageErrors::OutOfRange(
            "levels",
            format!(
                "expected 0 <= black < mid < white <= 255 but found {black}, {mid}, {white}"
            )
        ));
    }
    let xs = [f64::from(black), f64::from(mid), f64::from(white)];
    let ys = [0.0, 128.0, 255.0];

    let matrix = xs.map(|x| [x * x, x, 1.0]);
    let det = determinant(&matrix);

    // Cramer's rule, swap each column for the targets in turn
    let mut coefficients = [0.0; 3];

    for (column, coefficient) in coefficients.iter_mut().enumerate() {
        let mut replaced = matrix;

        for (row, y) in replaced.iter_mut().zip(ys) {
            row[column] = y;
        }
        *coefficient = determinant(&replaced) / det;
    }
    Ok(coefficients)
}

fn determinant(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Evaluate the curve for every 8-bit value, truncating towards zero
#[must_use]
pub fn levels_lut(coefficients: [f64; 3]) -> [i32; 256] {
    let [a, b, c] = coefficients;
    let mut lut = [0; 256];

    for (x, value) in lut.iter_mut().enumerate() {
        let x = x as f64;
        *value = truncate(a * x * x + b * x + c);
    }
    lut
}

/// Map every sample through `lut`
pub fn levels(channel: &mut [i32], lut: &[i32; 256]) {
    for px in channel {
        *px = lut[(*px).clamp(0, 255) as usize];
    }
}
