/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Apply an operation to the left part of an image only
//!
//! With a percentage `p`, columns `x < floor(width * p / 100)` come from the
//! transformed image and the rest from the source, giving a before/after
//! preview along a vertical line.
use tint_core::log::trace;
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

use crate::utils::check_percentage;

/// Split view of another operation
///
/// The wrapped operation always runs on the whole image, so its errors
/// surface even when the split column is zero.
///
/// # Example
/// ```
/// use tint_image::image::Image;
/// use tint_image::traits::OperationsTrait;
/// use tint_imageprocs::brighten::Brighten;
/// use tint_imageprocs::split::SplitView;
///
/// let image = Image::fill([100, 100, 100], 10, 2).unwrap();
/// let brighten = Brighten::new(50);
/// let out = SplitView::new(&brighten, 30.0).execute(&image).unwrap();
///
/// assert_eq!(out.pixel(2, 0), [150, 150, 150]);
/// assert_eq!(out.pixel(3, 0), [100, 100, 100]);
/// ```
pub struct SplitView<'a> {
    operation:  &'a dyn OperationsTrait,
    percentage: f64
}

impl<'a> SplitView<'a> {
    #[must_use]
    pub fn new(operation: &'a dyn OperationsTrait, percentage: f64) -> SplitView<'a> {
        SplitView {
            operation,
            percentage
        }
    }
}

impl<'a> OperationsTrait for SplitView<'a> {
    fn name(&self) -> &'static str {
        "Split view"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        check_percentage("split percentage", self.percentage)?;

        let column = split_column(image.width(), self.percentage);

        trace!("Splitting `{}` at column {column}", self.operation.name());

        let transformed = self.operation.execute(image)?;

        image.check_same_dimensions(&transformed)?;

        let mut output = image.clone();

        for (out, new) in output.planes_mut().into_iter().zip(transformed.channels_ref()) {
            for (out_row, new_row) in out
                .chunks_exact_mut(image.width())
                .zip(new.data().chunks_exact(image.width()))
            {
                out_row[..column].copy_from_slice(&new_row[..column]);
            }
        }
        Ok(output)
    }
}

/// First column left untouched for a split at `percentage`
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn split_column(width: usize, percentage: f64) -> usize {
    let column = ((width as f64) * percentage / 100.0).floor() as usize;
    column.min(width)
}
