/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap decoder and encoder
//!
//! Supports the two RGB flavours of the format with 8-bit samples
//!
//! - `P3`: ASCII samples separated by whitespace
//! - `P6`: binary samples
//!
//! Headers may carry `#` comments. Files with a maximum value below 255
//! are rescaled so decoded samples always span `[0,255]`.
//!
//! # Example
//! ```
//! use tint_ppm::{PPMDecoder, PPMEncoder, PPMVersions};
//!
//! let pixels = [255, 0, 0, 0, 255, 0];
//! let mut encoded = vec![];
//! PPMEncoder::new(&mut encoded)
//!     .encode(2, 1, PPMVersions::P3, &pixels)
//!     .unwrap();
//!
//! let mut decoder = PPMDecoder::new(&encoded);
//! assert_eq!(decoder.decode().unwrap(), pixels);
//! assert_eq!(decoder.dimensions(), Some((2, 1)));
//! ```
#![forbid(unsafe_code)]

pub use decoder::*;
pub use encoder::*;

mod decoder;
mod encoder;
