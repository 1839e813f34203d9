/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Apply an operation only where a mask allows it
//!
//! The mask is an image of the same size as the source, only its red
//! channel is read. Pixels where the mask's red value is `0` take the
//! transformed value, every other pixel keeps the source value.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use tint_core::channel::ChannelKind;
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

use crate::brighten::Brighten;
use crate::color_matrix::ColorMatrix;
use crate::components::{Component, ComponentKind};
use crate::convolve::Convolve;
use crate::extract::ExtractChannel;

/// Operations that can run under a mask
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MaskableOperation {
    Red,
    Green,
    Blue,
    Value,
    Intensity,
    Luma,
    Blur,
    Sharpen,
    Sepia,
    Greyscale,
    Brighten(i32)
}

impl MaskableOperation {
    /// Build the operation this variant names
    #[must_use]
    pub fn operation(self) -> Box<dyn OperationsTrait> {
        match self {
            MaskableOperation::Red => Box::new(ExtractChannel::new(ChannelKind::Red)),
            MaskableOperation::Green => Box::new(ExtractChannel::new(ChannelKind::Green)),
            MaskableOperation::Blue => Box::new(ExtractChannel::new(ChannelKind::Blue)),
            MaskableOperation::Value => Box::new(Component::new(ComponentKind::Value)),
            MaskableOperation::Intensity => Box::new(Component::new(ComponentKind::Intensity)),
            MaskableOperation::Luma => Box::new(Component::new(ComponentKind::Luma)),
            MaskableOperation::Blur => Box::new(Convolve::blur()),
            MaskableOperation::Sharpen => Box::new(Convolve::sharpen()),
            MaskableOperation::Sepia => Box::new(ColorMatrix::sepia()),
            MaskableOperation::Greyscale => Box::new(ColorMatrix::greyscale()),
            MaskableOperation::Brighten(value) => Box::new(Brighten::new(value))
        }
    }

    /// Script name of the operation
    #[must_use]
    pub const fn command_name(self) -> &'static str {
        match self {
            MaskableOperation::Red => "red-component",
            MaskableOperation::Green => "green-component",
            MaskableOperation::Blue => "blue-component",
            MaskableOperation::Value => "value-component",
            MaskableOperation::Intensity => "intensity-component",
            MaskableOperation::Luma => "luma-component",
            MaskableOperation::Blur => "blur",
            MaskableOperation::Sharpen => "sharpen",
            MaskableOperation::Sepia => "sepia",
            MaskableOperation::Greyscale => "greyscale",
            MaskableOperation::Brighten(_) => "brighten"
        }
    }
}

impl Display for MaskableOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command_name())
    }
}

/// Parses every name except `brighten`, whose delta cannot come from a name
impl FromStr for MaskableOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "red-component" => MaskableOperation::Red,
            "green-component" => MaskableOperation::Green,
            "blue-component" => MaskableOperation::Blue,
            "value-component" => MaskableOperation::Value,
            "intensity-component" => MaskableOperation::Intensity,
            "luma-component" => MaskableOperation::Luma,
            "blur" => MaskableOperation::Blur,
            "sharpen" => MaskableOperation::Sharpen,
            "sepia" => MaskableOperation::Sepia,
            "greyscale" => MaskableOperation::Greyscale,
            _ => return Err(format!("Unknown maskable operation {s}"))
        };
        Ok(op)
    }
}

/// Run an operation and keep its output only where the mask is black
pub struct MaskedOperation<'a> {
    operation: MaskableOperation,
    mask:      &'a Image
}

impl<'a> MaskedOperation<'a> {
    #[must_use]
    pub fn new(operation: MaskableOperation, mask: &'a Image) -> MaskedOperation<'a> {
        MaskedOperation { operation, mask }
    }
}

impl<'a> OperationsTrait for MaskedOperation<'a> {
    fn name(&self) -> &'static str {
        "Masked operation"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        image.check_same_dimensions(self.mask)?;

        let transformed = self.operation.operation().execute(image)?;

        let mut output = image.clone();
        let selector = self.mask.channel(ChannelKind::Red).data();

        for (out, new) in output.planes_mut().into_iter().zip(transformed.channels_ref()) {
            apply_mask(out, new.data(), selector);
        }
        Ok(output)
    }
}

/// Copy `new` into `out` wherever `mask` is zero
pub fn apply_mask(out: &mut [i32], new: &[i32], mask: &[i32]) {
    for ((out, new), mask) in out.iter_mut().zip(new).zip(mask) {
        if *mask == 0 {
            *out = *new;
        }
    }
}
