/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Split an image into per channel images and join them back
use tint_core::channel::ChannelKind;
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

use crate::extract::ExtractChannel;

/// Split an image into its red, green and blue renditions
///
/// Each returned image is the output of [`ExtractChannel`] for that channel.
///
/// # Errors
/// Propagates errors from the extraction, which cannot fail for a valid image
pub fn rgb_split(image: &Image) -> Result<[Image; 3], ImageErrors> {
    Ok([
        ExtractChannel::new(ChannelKind::Red).execute(image)?,
        ExtractChannel::new(ChannelKind::Green).execute(image)?,
        ExtractChannel::new(ChannelKind::Blue).execute(image)?
    ])
}

/// Build an image taking red from `red`, green from `green`
/// and blue from `blue`
///
/// # Errors
/// [`ImageErrors::DimensionsMisMatch`] if the three images disagree on size
pub fn rgb_combine(red: &Image, green: &Image, blue: &Image) -> Result<Image, ImageErrors> {
    RgbCombine::new(green, blue).execute(red)
}

/// Combine operation, the image it executes on supplies the red channel
pub struct RgbCombine<'a> {
    green: &'a Image,
    blue:  &'a Image
}

impl<'a> RgbCombine<'a> {
    #[must_use]
    pub fn new(green: &'a Image, blue: &'a Image) -> RgbCombine<'a> {
        RgbCombine { green, blue }
    }
}

impl<'a> OperationsTrait for RgbCombine<'a> {
    fn name(&self) -> &'static str {
        "RGB combine"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        image.check_same_dimensions(self.green)?;
        image.check_same_dimensions(self.blue)?;

        Image::new(
            image.channel(ChannelKind::Red).clone(),
            self.green.channel(ChannelKind::Green).clone(),
            self.blue.channel(ChannelKind::Blue).clone()
        )
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use tint_image::errors::ImageErrors;
    use tint_image::image::Image;

    use crate::rgb::{rgb_combine, rgb_split};

    #[test]
    fn split_then_combine_is_identity() {
        let (w, h) = (9, 5);
        let mut pixels = vec![0_u8; w * h * 3];
        nanorand::WyRand::new().fill(&mut pixels);
        let image = Image::from_interleaved_u8(&pixels, w, h).unwrap();

        let [r, g, b] = rgb_split(&image).unwrap();
        assert_eq!(r.pixel(3, 2)[1], image.pixel(3, 2)[0]);

        assert_eq!(rgb_combine(&r, &g, &b).unwrap(), image);
    }

    #[test]
    fn combine_rejects_mismatched_sizes() {
        let a = Image::fill([1, 2, 3], 4, 4).unwrap();
        let b = Image::fill([1, 2, 3], 4, 5).unwrap();

        assert!(matches!(
            rgb_combine(&a, &a, &b),
            Err(ImageErrors::DimensionsMisMatch((4, 4), (4, 5)))
        ));
    }
}
