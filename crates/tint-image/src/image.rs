/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - three separated channels
//!     - red, green and blue
//!         - of `i32` samples in `[0,255]`
//!             - with the same width and height
//!
//! And that's how we represent images.
//!
//! Width and height are always at least one, every constructor checks this
//! so operations never see a degenerate image.
use tint_core::channel::{ChannelKind, NUM_CHANNELS};

use crate::channel::{Channel, MAX_VALUE};
use crate::errors::ImageErrors;

/// Represents a single image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    channels: [Channel; NUM_CHANNELS]
}

impl Image {
    /// Create an image from three channels
    ///
    /// # Errors
    /// If the channels do not share the same dimensions
    pub fn new(red: Channel, green: Channel, blue: Channel) -> Result<Image, ImageErrors> {
        let dims = red.dimensions();

        for other in [&green, &blue] {
            if other.dimensions() != dims {
                return Err(ImageErrors::DimensionsMisMatch(dims, other.dimensions()));
            }
        }
        Ok(Image {
            channels: [red, green, blue]
        })
    }

    /// Create an image with a static color in it
    ///
    /// # Errors
    /// If width or height is zero
    pub fn fill(pixel: [i32; NUM_CHANNELS], width: usize, height: usize) -> Result<Image, ImageErrors> {
        Image::new(
            Channel::fill(pixel[0], width, height)?,
            Channel::fill(pixel[1], width, height)?,
            Channel::fill(pixel[2], width, height)?
        )
    }

    /// Create an image from a function
    ///
    /// The function receives the column (`x`), the row (`y`) and a
    /// mutable pixel initialized to zero which it should fill with
    /// the red, green and blue values for that coordinate.
    ///
    /// # Example
    /// ```
    /// use tint_image::image::Image;
    /// // a horizontal gradient
    /// let image = Image::from_fn(256, 10, |x, _, pix| {
    ///     *pix = [x as i32; 3];
    /// }).unwrap();
    /// assert_eq!(image.pixel(255, 3), [255, 255, 255]);
    /// ```
    ///
    /// # Errors
    /// If width or height is zero
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Result<Image, ImageErrors>
    where
        F: FnMut(usize, usize, &mut [i32; NUM_CHANNELS])
    {
        let mut image = Image::fill([0; NUM_CHANNELS], width, height)?;

        for y in 0..height {
            for x in 0..width {
                let mut pixel = [0; NUM_CHANNELS];
                func(x, y, &mut pixel);
                image.set_pixel(x, y, pixel);
            }
        }
        Ok(image)
    }

    /// Create an image from interleaved `RGBRGB...` bytes
    ///
    /// # Errors
    /// - Zero width or height
    /// - `data.len()` not equal to `width * height * 3`
    pub fn from_interleaved_u8(data: &[u8], width: usize, height: usize) -> Result<Image, ImageErrors> {
        if width == 0 || height == 0 {
            return Err(ImageErrors::ZeroDimensions);
        }
        let expected = width * height * NUM_CHANNELS;

        if data.len() != expected {
            return Err(ImageErrors::ChannelLengthMisMatch(expected, data.len()));
        }
        let mut r = Vec::with_capacity(width * height);
        let mut g = Vec::with_capacity(width * height);
        let mut b = Vec::with_capacity(width * height);

        for pix in data.chunks_exact(NUM_CHANNELS) {
            r.push(i32::from(pix[0]));
            g.push(i32::from(pix[1]));
            b.push(i32::from(pix[2]));
        }
        Image::new(
            Channel::from_vec(r, width, height)?,
            Channel::from_vec(g, width, height)?,
            Channel::from_vec(b, width, height)?
        )
    }

    /// Convert image to interleaved `RGBRGB...` bytes
    ///
    /// Samples outside `[0,255]` are clamped on the way out.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_interleaved_u8(&self) -> Vec<u8> {
        let [r, g, b] = &self.channels;

        let mut out = Vec::with_capacity(r.data().len() * NUM_CHANNELS);

        for ((r, g), b) in r.data().iter().zip(g.data()).zip(b.data()) {
            out.push((*r).clamp(0, MAX_VALUE) as u8);
            out.push((*g).clamp(0, MAX_VALUE) as u8);
            out.push((*b).clamp(0, MAX_VALUE) as u8);
        }
        out
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.channels[0].dimensions()
    }

    pub const fn width(&self) -> usize {
        self.channels[0].width()
    }

    pub const fn height(&self) -> usize {
        self.channels[0].height()
    }

    /// Return a reference to a single channel
    pub fn channel(&self, kind: ChannelKind) -> &Channel {
        &self.channels[kind.index()]
    }

    /// Return a reference to the underlying channels in red, green, blue order
    pub fn channels_ref(&self) -> &[Channel; NUM_CHANNELS] {
        &self.channels
    }

    /// Return mutable views into the samples of every channel
    ///
    /// Only samples can change, dimensions stay fixed
    pub fn planes_mut(&mut self) -> [&mut [i32]; NUM_CHANNELS] {
        let [r, g, b] = &mut self.channels;
        [r.data_mut(), g.data_mut(), b.data_mut()]
    }

    /// Mutable view into the samples of one channel
    pub fn plane_mut(&mut self, kind: ChannelKind) -> &mut [i32] {
        self.channels[kind.index()].data_mut()
    }

    /// Consume the image returning its channels
    pub fn into_channels(self) -> [Channel; NUM_CHANNELS] {
        self.channels
    }

    /// Return the red, green and blue values at column `x`, row `y`
    ///
    /// # Panics
    /// If the coordinate is outside the image
    pub fn pixel(&self, x: usize, y: usize) -> [i32; NUM_CHANNELS] {
        let [r, g, b] = &self.channels;
        [r.get(x, y), g.get(x, y), b.get(x, y)]
    }

    /// Set the pixel at column `x`, row `y`
    ///
    /// # Panics
    /// If the coordinate is outside the image
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: [i32; NUM_CHANNELS]) {
        for (channel, value) in self.channels.iter_mut().zip(pixel) {
            channel.set(x, y, value);
        }
    }

    /// Clamp every sample of every channel into `[0,255]`
    pub fn clamp(&mut self) {
        self.channels.iter_mut().for_each(Channel::clamp);
    }

    /// Return true if every sample lies in `[0,255]`
    pub fn is_clamped(&self) -> bool {
        self.channels.iter().all(Channel::is_clamped)
    }

    /// Confirm `other` has the same width and height as this image
    ///
    /// # Errors
    /// [`ImageErrors::DimensionsMisMatch`] carrying (this, other) dimensions
    pub fn check_same_dimensions(&self, other: &Image) -> Result<(), ImageErrors> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(ImageErrors::DimensionsMisMatch(
                self.dimensions(),
                other.dimensions()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use tint_core::channel::ChannelKind;

    use crate::channel::Channel;
    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn mismatched_channels_are_rejected() {
        let r = Channel::new(2, 2).unwrap();
        let g = Channel::new(2, 3).unwrap();
        let b = Channel::new(2, 2).unwrap();

        assert!(matches!(
            Image::new(r, g, b),
            Err(ImageErrors::DimensionsMisMatch((2, 2), (2, 3)))
        ));
    }

    #[test]
    fn interleaved_bytes_survive_planar_storage() {
        let (w, h) = (31, 17);
        let mut pixels = vec![0_u8; w * h * 3];
        nanorand::WyRand::new().fill(&mut pixels);

        let image = Image::from_interleaved_u8(&pixels, w, h).unwrap();

        assert_eq!(image.dimensions(), (w, h));
        assert_eq!(image.to_interleaved_u8(), pixels);
        assert_eq!(
            image.pixel(4, 2),
            [
                i32::from(pixels[(2 * w + 4) * 3]),
                i32::from(pixels[(2 * w + 4) * 3 + 1]),
                i32::from(pixels[(2 * w + 4) * 3 + 2])
            ]
        );
    }

    #[test]
    fn short_interleaved_buffer_is_an_error() {
        assert!(Image::from_interleaved_u8(&[1, 2, 3, 4], 2, 1).is_err());
        assert!(matches!(
            Image::from_interleaved_u8(&[], 0, 1),
            Err(ImageErrors::ZeroDimensions)
        ));
    }

    #[test]
    fn from_fn_visits_columns_then_rows() {
        let image = Image::from_fn(3, 2, |x, y, pix| {
            pix[0] = i32::try_from(x).unwrap();
            pix[1] = i32::try_from(y).unwrap();
        })
        .unwrap();

        assert_eq!(image.pixel(2, 1), [2, 1, 0]);
        assert_eq!(image.channel(ChannelKind::Green).data(), &[0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn planes_mut_then_clamp() {
        let mut image = Image::fill([10, 20, 30], 2, 2).unwrap();

        for plane in image.planes_mut() {
            plane.iter_mut().for_each(|x| *x *= 20);
        }
        assert!(!image.is_clamped());
        image.clamp();
        assert_eq!(image.pixel(1, 1), [200, 255, 255]);
    }
}
