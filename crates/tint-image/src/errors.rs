/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

/// All possible image errors that can occur.
///
/// Every failure is synchronous and signals invalid input, retrying the
/// same call with the same arguments will fail the same way.
pub enum ImageErrors {
    /// A named image was requested but is not present
    NoSuchImage(String),
    /// Two images that must agree on (width, height) do not
    DimensionsMisMatch((usize, usize), (usize, usize)),
    /// A scalar parameter is outside of its valid range,
    /// the first item names the parameter
    OutOfRange(&'static str, String),
    /// Width or height is zero
    ZeroDimensions,
    /// Channel storage does not match width * height
    ChannelLengthMisMatch(usize, usize),
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchImage(name) => {
                writeln!(f, "No image named `{}` has been loaded", name)
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {}x{} but found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::OutOfRange(parameter, reason) => {
                writeln!(f, "Parameter `{}` out of range: {}", parameter, reason)
            }
            Self::ZeroDimensions => {
                writeln!(f, "Image width and height must be at least 1")
            }
            Self::ChannelLengthMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Channel length mismatch, expected {} samples but found {}",
                    expected, found
                )
            }
            Self::GenericStr(err) => {
                writeln!(f, "{}", err)
            }
            Self::GenericString(err) => {
                writeln!(f, "{}", err)
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}
