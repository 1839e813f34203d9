/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::{Error, Write};
use std::str::FromStr;

/// Samples written per line of a P3 file, keeps lines under 70 characters
const ASCII_SAMPLES_PER_LINE: usize = 12;

/// Errors occurring during encoding
pub enum PPMErrors {
    Static(&'static str),
    IOErrors(io::Error)
}

impl From<io::Error> for PPMErrors {
    fn from(err: Error) -> Self {
        PPMErrors::IOErrors(err)
    }
}

impl Debug for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PPMErrors::IOErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMErrors {}

/// Flavour of PPM file to write
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PPMVersions {
    /// ASCII samples
    P3,
    /// Binary samples
    #[default]
    P6
}

impl Display for PPMVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P3 => write!(f, "P3"),
            Self::P6 => write!(f, "P6")
        }
    }
}

impl FromStr for PPMVersions {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "P3" => Ok(PPMVersions::P3),
            "P6" => Ok(PPMVersions::P6),
            _ => Err(format!("Unknown PPM version {s}, expected P3 or P6"))
        }
    }
}

/// A PPM encoder
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    /// Write headers for P3 and P6 formats
    fn write_headers(
        &mut self, version: PPMVersions, width: usize, height: usize, max_val: usize
    ) -> Result<(), PPMErrors> {
        let header = format!("{version}\n{width} {height}\n{max_val}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode interleaved RGB `data` as an 8 bit PPM file
    ///
    /// Recommended version is P6, P3 files are about four times larger
    pub fn encode(
        &mut self, width: usize, height: usize, version: PPMVersions, data: &[u8]
    ) -> Result<(), PPMErrors> {
        if width == 0 || height == 0 {
            return Err(PPMErrors::Static("Cannot encode a zero sized image"));
        }
        if width * height * 3 != data.len() {
            return Err(PPMErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        self.write_headers(version, width, height, 255)?;

        match version {
            PPMVersions::P6 => {
                self.writer.write_all(data)?;
            }
            PPMVersions::P3 => {
                let mut line = String::with_capacity(ASCII_SAMPLES_PER_LINE * 4);

                for chunk in data.chunks(ASCII_SAMPLES_PER_LINE) {
                    line.clear();

                    for (i, sample) in chunk.iter().enumerate() {
                        if i != 0 {
                            line.push(' ');
                        }
                        line.push_str(&sample.to_string());
                    }
                    line.push('\n');
                    self.writer.write_all(line.as_bytes())?;
                }
            }
        }
        self.writer.flush()?;

        Ok(())
    }
}
