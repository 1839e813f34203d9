/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line front end
//!
//! Reads a script of image commands, one per line, either from a file or
//! interactively from standard input, and runs them against a registry of
//! named images.
use std::io::{stdin, stdout, IsTerminal};
use std::process::exit;

use log::{error, info};

use crate::cmd_parsers::global_options::CmdOptions;
pub use crate::commands::Command;
pub use crate::errors::CommandErrors;
pub use crate::interpreter::{Flow, Interpreter};
pub use crate::registry::Registry;

mod cmd_args;
pub mod cmd_parsers;
mod commands;
mod errors;
pub mod file_io;
mod interpreter;
mod registry;
pub mod serde;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let matches = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&matches);

    let options = cmd_parsers::global_options::parse_options(&matches);

    if let Err(reason) = run(options) {
        println!();
        error!(" Could not complete script, reason {reason:?}");

        println!();
        exit(-1);
    }
}

/// Run the script named in `options`, or an interactive session
///
/// # Errors
/// The first failing command when `keep_going` is off
pub fn run(options: CmdOptions) -> Result<(), CommandErrors> {
    let script = options.script.clone();
    let mut interpreter = Interpreter::new(options);

    match script {
        Some(path) => {
            info!("Running script {path:?}");
            interpreter.run_file(&path)?;
        }
        None => {
            let input = stdin();
            let prompt = input.is_terminal();

            if prompt {
                println!("tint {}, type `quit` to leave", env!("CARGO_PKG_VERSION"));
            }
            interpreter.run_interactive(input.lock(), stdout(), prompt)?;
        }
    }
    Ok(())
}
