/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors raised while running script commands
use std::fmt::{Debug, Display, Formatter};

use tint_image::errors::ImageErrors;
use tint_ppm::{PPMDecodeErrors, PPMErrors};

/// All errors possible when running a command
pub enum CommandErrors {
    /// A transform or registry failure
    ImageErrors(ImageErrors),
    PPMDecodeErrors(PPMDecodeErrors),
    PPMEncodeErrors(PPMErrors),
    IoErrors(std::io::Error),
    /// The command name is not known
    UnknownCommand(String),
    /// The command is known but its arguments are wrong
    /// (command, reason)
    InvalidArguments(&'static str, String),
    /// Only PPM files can be read and written
    UnsupportedFormat(String),
    /// `run` commands nested deeper than the limit
    RecursionLimit(usize),
    /// A failure annotated with the script line it came from
    AtLine(usize, Box<CommandErrors>)
}

impl Debug for CommandErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageErrors(err) => writeln!(f, "{err:?}"),
            Self::PPMDecodeErrors(err) => writeln!(f, "{err:?}"),
            Self::PPMEncodeErrors(err) => writeln!(f, "{err:?}"),
            Self::IoErrors(err) => writeln!(f, "{err}"),
            Self::UnknownCommand(name) => writeln!(f, "Unknown command `{name}`"),
            Self::InvalidArguments(command, reason) => {
                writeln!(f, "Invalid arguments for `{command}`: {reason}")
            }
            Self::UnsupportedFormat(file) => {
                writeln!(f, "Unsupported image format for {file}, only .ppm is supported")
            }
            Self::RecursionLimit(limit) => {
                writeln!(f, "Scripts nested more than {limit} levels deep")
            }
            Self::AtLine(line, err) => write!(f, "line {line}: {err:?}")
        }
    }
}

impl Display for CommandErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CommandErrors {}

impl From<ImageErrors> for CommandErrors {
    fn from(value: ImageErrors) -> Self {
        Self::ImageErrors(value)
    }
}

impl From<PPMDecodeErrors> for CommandErrors {
    fn from(value: PPMDecodeErrors) -> Self {
        Self::PPMDecodeErrors(value)
    }
}

impl From<PPMErrors> for CommandErrors {
    fn from(value: PPMErrors) -> Self {
        Self::PPMEncodeErrors(value)
    }
}

impl From<std::io::Error> for CommandErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<serde_json::Error> for CommandErrors {
    fn from(value: serde_json::Error) -> Self {
        Self::IoErrors(value.into())
    }
}
