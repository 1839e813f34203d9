/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image type shared by the tint crates
//!
//! An [`Image`](crate::image::Image) is three planar integer channels,
//! red, green and blue, of identical dimensions.
//!
//! Operations are structs implementing [`OperationsTrait`](crate::traits::OperationsTrait),
//! they take an image by reference and hand back a freshly allocated one, the
//! source is never modified.
//!
//! Codecs live in their own crates and talk to this one through
//! [`Image::from_interleaved_u8`](crate::image::Image::from_interleaved_u8) and
//! [`Image::to_interleaved_u8`](crate::image::Image::to_interleaved_u8).
#![allow(clippy::redundant_field_names, clippy::uninlined_format_args)]

pub mod channel;
pub mod errors;
pub mod image;
mod serde;
pub mod traits;
