/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use tint_core::bytestream::ByteReader;
use tint_core::log::{info, warn};
use tint_core::options::DecoderOptions;

/// Number of samples per pixel, PPM is always RGB
const COMPONENTS: usize = 3;

/// An instance of a PPM decoder
///
/// The decoder can currently decode P3 and P6 formats
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       usize,
    version:         u8,
    decoded_headers: bool,
    reader:          ByteReader<'a>,
    options:         DecoderOptions
}

/// Errors that can occur when decoding a PPM file
pub enum PPMDecodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    InvalidHeader(String),
    UnsupportedImpl(String),
    LargeDimensions(usize, usize),
    /// The stream ended before every sample was read
    /// (expected, found)
    InsufficientData(usize, usize)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(val) => {
                writeln!(f, "{val}")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::UnsupportedImpl(val) => {
                writeln!(f, "Unsupported, reason: {val}")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::InsufficientData(expected, found) => {
                writeln!(
                    f,
                    "Insufficient data, expected {expected} samples but found {found}"
                )
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data:PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use tint_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    ///
    /// # Example
    /// ```
    /// use tint_core::options::DecoderOptions;
    /// use tint_ppm::PPMDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P3 2 1 255 0 0 0 0 0 0");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 255,
            version: 0,
            decoded_headers: false,
            reader: ByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Return Err on Error otherwise return nothing,
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.reader.has(3) {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 3 bytes in header but stream has {len}");

            return Err(PPMDecodeErrors::Generic(msg));
        }
        let p = self.reader.get_u8();
        let version = self.reader.get_u8();

        if p != b'P' {
            let msg = format!("Expected P as first PPM byte but got '{}' ", p as char);

            return Err(PPMDecodeErrors::Generic(msg));
        }

        if version != b'3' && version != b'6' {
            let msg = format!(
                "Unsupported PPM version `{}`, supported versions are 3 and 6",
                version as char
            );

            return Err(PPMDecodeErrors::UnsupportedImpl(msg));
        }
        self.version = version;

        // skip whitespace
        skip_spaces(&mut self.reader);
        // read width
        self.width = self.get_integer("width")?;

        if self.width > self.options.max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.max_width(),
                self.width
            ));
        }
        skip_spaces(&mut self.reader);

        self.height = self.get_integer("height")?;

        if self.height > self.options.max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.max_height(),
                self.height
            ));
        }
        if self.width == 0 || self.height == 0 {
            let msg = format!("Zero sized image {}x{}", self.width, self.height);
            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }

        info!("Width: {}, height: {}", self.width, self.height);

        skip_spaces(&mut self.reader);
        // read max value
        self.max_value = self.get_integer("maximum value")?;

        if self.max_value == 0 || self.max_value > 255 {
            let msg = format!(
                "Maximum value {} unsupported, expected a value in 1..=255",
                self.max_value
            );
            return Err(PPMDecodeErrors::UnsupportedImpl(msg));
        }

        if self.version == b'6' {
            // exactly one whitespace separates the header from binary samples
            if !self.reader.get_u8().is_ascii_whitespace() {
                return Err(PPMDecodeErrors::InvalidHeader(
                    "Expected a whitespace after the maximum value".to_string()
                ));
            }
        }

        info!("Version: P{}, maximum value: {}", self.version as char, self.max_value);
        self.decoded_headers = true;

        Ok(())
    }

    /// Read an ASCII decimal, `what` names the field in errors
    fn get_integer(&mut self, what: &str) -> Result<usize, PPMDecodeErrors> {
        let mut value = 0_usize;
        let mut digits = 0;

        while !self.reader.eof() {
            let byte = self.reader.get_u8();

            if byte.is_ascii_digit() {
                value = value
                    .checked_mul(10)
                    .and_then(|x| x.checked_add(usize::from(byte - b'0')))
                    .ok_or_else(|| {
                        PPMDecodeErrors::InvalidHeader(format!("{what} does not fit in usize"))
                    })?;
                digits += 1;
            } else {
                // rewind to the previous byte
                self.reader.rewind(1);
                break;
            }
        }
        if digits == 0 {
            let found = self.reader.peek_u8();
            let msg = format!("Expected {what} but found '{}'", found as char);

            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        Ok(value)
    }

    /// Return image dimensions as (width, height) or none if headers
    /// are not decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the maximum sample value declared in the header
    pub const fn max_value(&self) -> Option<usize> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Decode a ppm encoded file and return interleaved RGB bytes
    ///
    /// Samples are rescaled to `[0,255]` when the maximum value is lower.
    pub fn decode(&mut self) -> Result<Vec<u8>, PPMDecodeErrors> {
        self.read_headers()?;

        let size = self.width * self.height * COMPONENTS;

        let mut data = match self.version {
            b'3' => self.decode_ascii(size)?,
            _ => self.decode_binary(size)?
        };

        if self.max_value != 255 {
            let max = self.max_value;

            data.iter_mut().for_each(|x| *x = scale_to_u8(*x, max));
        }
        Ok(data)
    }

    fn decode_binary(&mut self, size: usize) -> Result<Vec<u8>, PPMDecodeErrors> {
        let bytes = self.reader.remaining_bytes();

        if bytes.len() < size {
            return Err(PPMDecodeErrors::InsufficientData(size, bytes.len()));
        }
        if bytes.len() > size {
            warn!("{} trailing bytes after pixel data", bytes.len() - size);
        }
        self.reader.skip(size);

        let data = bytes[..size].to_vec();
        self.check_samples(&data)?;

        Ok(data)
    }

    fn decode_ascii(&mut self, size: usize) -> Result<Vec<u8>, PPMDecodeErrors> {
        let mut data = Vec::with_capacity(ascii_capacity(size, self.reader.remaining()));

        for i in 0..size {
            skip_spaces(&mut self.reader);

            if self.reader.eof() {
                return Err(PPMDecodeErrors::InsufficientData(size, i));
            }
            let value = self.get_integer("sample")?;

            data.push(u8::try_from(value).unwrap_or(u8::MAX));

            if value > self.max_value {
                self.sample_out_of_range(value)?;
            }
        }
        Ok(data)
    }

    fn check_samples(&self, data: &[u8]) -> Result<(), PPMDecodeErrors> {
        match data.iter().find(|x| usize::from(**x) > self.max_value) {
            Some(value) => self.sample_out_of_range(usize::from(*value)),
            None => Ok(())
        }
    }

    /// Out of range samples fail in strict mode, otherwise they are clamped
    /// by the rescale
    fn sample_out_of_range(&self, value: usize) -> Result<(), PPMDecodeErrors> {
        let msg = format!("Sample {value} larger than maximum value {}", self.max_value);

        if self.options.strict_mode() {
            return Err(PPMDecodeErrors::Generic(msg));
        }
        warn!("{msg}");
        Ok(())
    }
}

/// Map `value` in `[0,max]` onto `[0,255]`, rounding to nearest
fn scale_to_u8(value: u8, max: usize) -> u8 {
    let value = usize::from(value).min(max);
    u8::try_from((value * 255 + max / 2) / max).unwrap_or(u8::MAX)
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ByteReader) {
    while !byte_stream.eof() {
        let mut byte = byte_stream.get_u8();

        if byte == b'#' {
            // comment
            // skip the whole comment
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            byte_stream.rewind(1);
            break;
        }
    }
}

/// Samples worth reserving for an ASCII body
///
/// Every sample takes at least one byte of input, so a header promising
/// more than what is left is not trusted.
pub(crate) fn ascii_capacity(size: usize, remaining: usize) -> usize {
    size.min(remaining)
}

#[cfg(test)]
mod tests {
    use tint_core::options::DecoderOptions;

    use crate::decoder::{ascii_capacity, scale_to_u8, PPMDecodeErrors, PPMDecoder};

    #[test]
    fn large_ascii_headers_with_short_bodies() {
        assert_eq!(ascii_capacity(16384 * 16384 * 3, 6), 6);
        assert_eq!(ascii_capacity(12, 100), 12);

        let data = b"P3\n16384 16384\n255\n1 2 3\n";

        assert!(matches!(
            PPMDecoder::new(data).decode(),
            Err(PPMDecodeErrors::InsufficientData(size, 3)) if size == 16384 * 16384 * 3
        ));
    }

    #[test]
    fn ascii_with_comments() {
        let data = b"P3\n# a comment\n2 2 # trailing\n255\n\
            123 45 67   12 200 150\n\
            255 255 0   128 128 125\n";

        let mut decoder = PPMDecoder::new(data);
        let pixels = decoder.decode().unwrap();

        assert_eq!(decoder.dimensions(), Some((2, 2)));
        assert_eq!(
            pixels,
            [123, 45, 67, 12, 200, 150, 255, 255, 0, 128, 128, 125]
        );
    }

    #[test]
    fn binary_may_start_with_whitespace_bytes() {
        let mut data = b"P6 1 2 255\n".to_vec();
        data.extend_from_slice(&[b' ', b'\n', 9, 10, 11, 12]);

        let pixels = PPMDecoder::new(&data).decode().unwrap();
        assert_eq!(pixels, [b' ', b'\n', 9, 10, 11, 12]);
    }

    #[test]
    fn low_max_value_is_rescaled() {
        let mut decoder = PPMDecoder::new(b"P3 1 1 15 0 15 7");

        assert_eq!(decoder.decode().unwrap(), [0, 255, 119]);
        assert_eq!(decoder.max_value(), Some(15));
        assert_eq!(scale_to_u8(1, 1), 255);
    }

    #[test]
    fn truncated_streams_fail() {
        assert!(matches!(
            PPMDecoder::new(b"P6 2 2 255\n\x01\x02").decode(),
            Err(PPMDecodeErrors::InsufficientData(12, 2))
        ));
        assert!(matches!(
            PPMDecoder::new(b"P3 1 1 255 1 2").decode(),
            Err(PPMDecodeErrors::InsufficientData(3, 2))
        ));
    }

    #[test]
    fn bad_headers_fail() {
        for data in [
            &b"P5 1 1 255 0"[..],
            b"P3 0 1 255",
            b"P3 1 1 65535 0 0 0",
            b"P3 x 1 255",
            b"Q3"
        ] {
            assert!(PPMDecoder::new(data).decode().is_err(), "{data:?}");
        }
    }

    #[test]
    fn out_of_range_samples() {
        let data = b"P3 1 1 100 0 50 200";

        assert!(PPMDecoder::new(data).decode().is_err());

        let options = DecoderOptions::default().set_strict_mode(false);
        let pixels = PPMDecoder::new_with_options(options, data)
            .decode()
            .unwrap();
        assert_eq!(pixels, [0, 128, 255]);
    }

    #[test]
    fn dimension_limits() {
        let options = DecoderOptions::default().set_max_height(1);

        assert!(matches!(
            PPMDecoder::new_with_options(options, b"P6 1 2 255\n\0\0\0\0\0\0").decode(),
            Err(PPMDecodeErrors::LargeDimensions(1, 2))
        ));
    }
}
