/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Brighten or darken an image by a constant
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

/// Add a signed constant to every sample of every channel
///
/// Results saturate at 0 and 255 rather than wrapping.
///
/// # Example
/// ```
/// use tint_image::image::Image;
/// use tint_image::traits::OperationsTrait;
/// use tint_imageprocs::brighten::Brighten;
///
/// let image = Image::fill([10, 128, 250], 2, 2).unwrap();
/// let darker = Brighten::new(-20).execute(&image).unwrap();
/// assert_eq!(darker.pixel(1, 1), [0, 108, 230]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Brighten {
    value: i32
}

impl Brighten {
    #[must_use]
    pub fn new(value: i32) -> Brighten {
        Brighten { value }
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut output = image.clone();

        for plane in output.planes_mut() {
            brighten(plane, self.value);
        }
        Ok(output)
    }
}

/// Add `value` to every sample, the caller clamps
pub fn brighten(channel: &mut [i32], value: i32) {
    channel
        .iter_mut()
        .for_each(|x| *x = x.saturating_add(value));
}
