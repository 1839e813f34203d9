/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip filter: mirror an image around one of its midlines.
//!
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlipDirection {
    /// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Horizontal,

    /// Flip the image vertically, reflecting rows around the central x-axis
    ///
    /// ```text
    ///
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    ///
    Vertical
}

/// Flip an image to a certain direction
pub struct Flip {
    flip_direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(flip_direction: FlipDirection) -> Flip {
        Self { flip_direction }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        match self.flip_direction {
            FlipDirection::Horizontal => "Horizontal flip",
            FlipDirection::Vertical => "Vertical flip"
        }
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let width = image.width();
        let mut output = image.clone();

        for plane in output.planes_mut() {
            match self.flip_direction {
                FlipDirection::Horizontal => flop(plane, width),
                FlipDirection::Vertical => vertical_flip(plane, width)
            }
        }
        Ok(output)
    }
}

/// Flip an image on the vertical axis
///
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
///
pub fn vertical_flip<T: Copy + Default>(channel: &mut [T], width: usize) {
    // Simply split the image in half
    // on one end read from the start to the halfway point
    // on the other end read from the end to the halfway point
    //
    // With an odd number of rows the middle row lands in `bottom`
    // and is never visited, which is what we want.
    let rows = channel.len() / width;

    let (top, bottom) = channel.split_at_mut((rows / 2) * width);

    let mut stride = vec![T::default(); width];
    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        stride.copy_from_slice(t);
        t.copy_from_slice(b);
        b.copy_from_slice(&stride);
    }
}

/// Flop an image
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
///
pub fn flop<T: Copy>(in_out_image: &mut [T], width: usize) {
    assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );

    for width_chunks in in_out_image.chunks_exact_mut(width) {
        width_chunks.reverse();
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use tint_image::image::Image;
    use tint_image::traits::OperationsTrait;

    use crate::flip::{flop, vertical_flip, Flip, FlipDirection};

    fn random_image(width: usize, height: usize) -> Image {
        let mut pixels = vec![0_u8; width * height * 3];
        nanorand::WyRand::new().fill(&mut pixels);
        Image::from_interleaved_u8(&pixels, width, height).unwrap()
    }

    #[test]
    fn flips_are_involutions() {
        for (w, h) in [(1, 1), (1, 7), (7, 1), (4, 4), (13, 6), (6, 13)] {
            let image = random_image(w, h);

            for direction in [FlipDirection::Horizontal, FlipDirection::Vertical] {
                let flip = Flip::new(direction);
                let twice = flip.execute(&flip.execute(&image).unwrap()).unwrap();
                assert_eq!(twice, image, "{direction:?} {w}x{h}");
            }
        }
    }

    #[test]
    fn flop_reverses_rows() {
        let mut data = [1, 2, 3, 4, 5, 6];
        flop(&mut data, 3);
        assert_eq!(data, [3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn vertical_flip_keeps_middle_row() {
        let mut data = [1, 2, 3, 4, 5, 6];
        vertical_flip(&mut data, 2);
        assert_eq!(data, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn flip_leaves_source_untouched() {
        let image = random_image(5, 3);
        let copy = image.clone();
        let flipped = Flip::new(FlipDirection::Horizontal)
            .execute(&image)
            .unwrap();

        assert_eq!(image, copy);
        assert_eq!(flipped.pixel(0, 1), image.pixel(4, 1));
    }
}
