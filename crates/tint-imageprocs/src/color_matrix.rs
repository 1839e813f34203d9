/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Apply a 3x3 color matrix to every pixel
//!
//! The output pixel is `M * [r, g, b]`, each result truncated towards zero
//! and later clamped into `[0,255]`.
//!
//! - Greyscale uses the luma weights on every row
//!
//! ```text
//! [[0.2126, 0.7152, 0.0722],
//!  [0.2126, 0.7152, 0.0722],
//!  [0.2126, 0.7152, 0.0722]]
//! ```
//!
//! - Sepia
//!
//! ```text
//! [[0.393, 0.769, 0.189],
//!  [0.349, 0.686, 0.168],
//!  [0.272, 0.534, 0.131]]
//! ```
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

use crate::utils::truncate;

const GREYSCALE: [[f64; 3]; 3] = [
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722]
];

const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131]
];

/// A color matrix filter
///
/// # Example
/// ```rust
/// use tint_image::errors::ImageErrors;
/// use tint_image::image::Image;
/// use tint_image::traits::OperationsTrait;
/// use tint_imageprocs::color_matrix::ColorMatrix;
///
/// let image = Image::fill([200, 100, 50], 4, 4)?;
/// let sepia = ColorMatrix::sepia().execute(&image)?;
/// assert_eq!(sepia.pixel(0, 0), [164, 146, 114]);
/// # Ok::<(), ImageErrors>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ColorMatrix {
    name:   &'static str,
    matrix: [[f64; 3]; 3]
}

impl ColorMatrix {
    /// Create a new color matrix from rows
    #[must_use]
    pub fn new(matrix: [[f64; 3]; 3]) -> ColorMatrix {
        ColorMatrix {
            name: "Color matrix",
            matrix
        }
    }

    #[must_use]
    pub fn greyscale() -> ColorMatrix {
        ColorMatrix {
            name:   "Greyscale",
            matrix: GREYSCALE
        }
    }

    #[must_use]
    pub fn sepia() -> ColorMatrix {
        ColorMatrix {
            name:   "Sepia",
            matrix: SEPIA
        }
    }
}

impl OperationsTrait for ColorMatrix {
    fn name(&self) -> &'static str {
        self.name
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut output = image.clone();
        let [r, g, b] = output.planes_mut();

        color_matrix(r, g, b, &self.matrix);

        Ok(output)
    }
}

/// Multiply every `[r, g, b]` triple by `matrix` in place
pub fn color_matrix(c1: &mut [i32], c2: &mut [i32], c3: &mut [i32], matrix: &[[f64; 3]; 3]) {
    for ((r, g), b) in c1.iter_mut().zip(c2.iter_mut()).zip(c3.iter_mut()) {
        let pix = [f64::from(*r), f64::from(*g), f64::from(*b)];

        let [new_r, new_g, new_b] = matrix.map(|row| {
            truncate(row[0] * pix[0] + row[1] * pix[1] + row[2] * pix[2])
        });

        *r = new_r;
        *g = new_g;
        *b = new_b;
    }
}
