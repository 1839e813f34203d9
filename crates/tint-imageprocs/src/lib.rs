/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `tint-image`
//!
//! Every routine comes in two layers, a free function working on raw
//! channel samples and a struct implementing `OperationsTrait` that applies
//! it to an [`Image`](tint_image::image::Image).
//!
//! # Example
//! - Brighten an image by 20 and flip it
//! ```
//! use tint_image::image::Image;
//! use tint_image::traits::OperationsTrait;
//! use tint_imageprocs::brighten::Brighten;
//! use tint_imageprocs::flip::{Flip, FlipDirection};
//!
//! let image = Image::fill([100, 120, 250], 10, 10).unwrap();
//! let brighter = Brighten::new(20).execute(&image).unwrap();
//! let flipped = Flip::new(FlipDirection::Vertical).execute(&brighter).unwrap();
//!
//! assert_eq!(flipped.pixel(0, 0), [120, 140, 255]);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::wildcard_imports
)]

pub mod brighten;
pub mod color_correct;
pub mod color_matrix;
pub mod components;
pub mod compress;
pub mod convolve;
pub mod extract;
pub mod flip;
pub mod histogram;
pub mod levels;
pub mod mask;
pub mod rgb;
pub mod split;
pub mod statistics;
mod utils;
pub mod wavelet;
