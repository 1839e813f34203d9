/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Single value renditions of a pixel
//!
//! Each component reduces the three samples of a pixel to one value and
//! writes it into all three output channels.
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

use crate::utils::truncate;

/// How to reduce a pixel to a single value
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ComponentKind {
    /// `max(r, g, b)`
    Value,
    /// `floor((r + g + b) / 3)`
    Intensity,
    /// `floor(0.2126r + 0.7152g + 0.0722b)`
    Luma
}

/// Replace every pixel by one of its derived components
#[derive(Copy, Clone, Debug)]
pub struct Component {
    kind: ComponentKind
}

impl Component {
    #[must_use]
    pub fn new(kind: ComponentKind) -> Component {
        Component { kind }
    }
}

impl OperationsTrait for Component {
    fn name(&self) -> &'static str {
        match self.kind {
            ComponentKind::Value => "Value component",
            ComponentKind::Intensity => "Intensity component",
            ComponentKind::Luma => "Luma component"
        }
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let [r, g, b] = image.channels_ref();

        let mut output = image.clone();
        let [out_r, out_g, out_b] = output.planes_mut();

        let component = match self.kind {
            ComponentKind::Value => value,
            ComponentKind::Intensity => intensity,
            ComponentKind::Luma => luma
        };

        for (i, ((x, y), z)) in r.data().iter().zip(g.data()).zip(b.data()).enumerate() {
            let v = component(*x, *y, *z);

            out_r[i] = v;
            out_g[i] = v;
            out_b[i] = v;
        }
        Ok(output)
    }
}

#[inline]
pub fn value(r: i32, g: i32, b: i32) -> i32 {
    r.max(g).max(b)
}

#[inline]
pub fn intensity(r: i32, g: i32, b: i32) -> i32 {
    (r + g + b).div_euclid(3)
}

#[inline]
pub fn luma(r: i32, g: i32, b: i32) -> i32 {
    truncate((0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)).floor())
}
