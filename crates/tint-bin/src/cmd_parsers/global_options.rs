/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use tint_core::options::DecoderOptions;
use tint_ppm::PPMVersions;

use crate::cmd_args::IPPMVersion;

/// Session wide options
#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub max_width:   usize,
    pub max_height:  usize,
    pub strict_mode: bool,
    pub keep_going:  bool,
    pub ppm_version: PPMVersions,
    pub script:      Option<PathBuf>
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        let defaults = DecoderOptions::new_cmd();

        CmdOptions {
            max_width:   defaults.max_width(),
            max_height:  defaults.max_height(),
            strict_mode: defaults.strict_mode(),
            keep_going:  false,
            ppm_version: PPMVersions::P6,
            script:      None
        }
    }

    /// Options handed to image decoders
    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::new_cmd()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .set_strict_mode(self.strict_mode)
    }
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions::new()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    if let Some(version) = options.get_one::<IPPMVersion>("ppm-version") {
        cmd_options.ppm_version = version.to_ppm_version();
    }

    if options.value_source("strict") == Some(ValueSource::CommandLine) {
        info!("Enabling strict mode");
        cmd_options.strict_mode = true;
    }
    if options.value_source("keep-going") == Some(ValueSource::CommandLine) {
        info!("Continuing past failing commands");
        cmd_options.keep_going = true;
    }
    cmd_options.script = options.get_one::<PathBuf>("file").cloned();

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
