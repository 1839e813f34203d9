/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by image operations
use tint_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// This encapsulates an image operation.
///
/// An operation reads a source image and produces a new one, the source
/// is left untouched. Implementors provide [`execute_impl`](Self::execute_impl),
/// callers use [`execute`](Self::execute) which adds logging and the
/// final clamp into `[0,255]`.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Produce the un-clamped output of this operation
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors>;

    /// Execute the operation on `image` returning a new clamped image
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    ///
    /// # Example
    /// ```
    /// use tint_image::errors::ImageErrors;
    /// use tint_image::image::Image;
    /// use tint_image::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn name(&self) -> &'static str {
    ///         "Invert"
    ///     }
    ///     fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
    ///         let mut out = image.clone();
    ///         for plane in out.planes_mut() {
    ///             plane.iter_mut().for_each(|x| *x = 255 - *x);
    ///         }
    ///         Ok(out)
    ///     }
    /// }
    /// let image = Image::fill([0, 100, 255], 4, 4)?;
    /// assert_eq!(Invert.execute(&image)?.pixel(0, 0), [255, 155, 0]);
    /// # Ok::<(), ImageErrors>(())
    /// ```
    fn execute(&self, image: &Image) -> Result<Image, ImageErrors> {
        let start = std::time::Instant::now();

        trace!("Running {}", self.name());

        let mut output = self.execute_impl(image)?;
        output.clamp();

        trace!(
            "Finished running `{}` in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        Ok(output)
    }
}

impl<T: OperationsTrait + ?Sized> OperationsTrait for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        (**self).execute_impl(image)
    }
}

impl<T: OperationsTrait + ?Sized> OperationsTrait for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        (**self).execute_impl(image)
    }
}
