/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use tint_ppm::PPMVersions;

/// PPM flavour written by `save`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IPPMVersion {
    P3,
    P6
}

impl IPPMVersion {
    pub const fn to_ppm_version(self) -> PPMVersions {
        match self {
            IPPMVersion::P3 => PPMVersions::P3,
            IPPMVersion::P6 => PPMVersions::P6
        }
    }
}

impl ValueEnum for IPPMVersion {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::P3, Self::P6]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::P3 => PossibleValue::new("p3").help("ASCII samples"),
            Self::P6 => PossibleValue::new("p6").help("Binary samples")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("tint")
        .about("Run image editing scripts")
        .long_about("Run image editing scripts.\nCommands are read from a script file or, without one, from standard input one line at a time.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("file")
            .short('f')
            .long("file")
            .help("Script file to run")
            .value_parser(value_parser!(std::path::PathBuf)))
        .arg(Arg::new("keep-going")
            .long("keep-going")
            .short('k')
            .action(ArgAction::SetTrue)
            .help("Log failing commands and continue with the next one"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the running commands"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images to load")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images to load")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat recoverable decoding problems as errors"))
        .arg(Arg::new("ppm-version")
            .long("ppm-version")
            .help_heading("ADVANCED")
            .help("PPM flavour used when saving")
            .value_parser(value_parser!(IPPMVersion))
            .default_value("p6"))
}

#[test]
fn verify_cmd() {
    create_cmd_args().debug_assert();
}
