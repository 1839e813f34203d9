/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Script commands and their parser
//!
//! A script line is a command name followed by whitespace separated
//! arguments. Everything from a token starting with `#` to the end of the
//! line is a comment.
//!
//! Transform commands share one argument shape
//!
//! ```text
//! <name> source [mask] dest [split <percentage>]
//! ```
use std::path::PathBuf;
use std::str::FromStr;

use tint_imageprocs::flip::FlipDirection;
use tint_imageprocs::mask::MaskableOperation;

use crate::errors::CommandErrors;

/// A parsed script command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Load {
        path: PathBuf,
        name: String
    },
    Save {
        path: PathBuf,
        name: String
    },
    /// Any operation that can run under a mask and in a split view
    Transform {
        operation: MaskableOperation,
        source:    String,
        mask:      Option<String>,
        dest:      String,
        split:     Option<f64>
    },
    Flip {
        direction: FlipDirection,
        source:    String,
        dest:      String
    },
    RgbSplit {
        source: String,
        red:    String,
        green:  String,
        blue:   String
    },
    RgbCombine {
        dest:  String,
        red:   String,
        green: String,
        blue:  String
    },
    Compress {
        percentage: f64,
        source:     String,
        dest:       String
    },
    Histogram {
        source: String,
        dest:   String
    },
    ColorCorrect {
        source: String,
        dest:   String,
        split:  Option<f64>
    },
    LevelsAdjust {
        black:  i32,
        mid:    i32,
        white:  i32,
        source: String,
        dest:   String,
        split:  Option<f64>
    },
    Info {
        name: String
    },
    Run {
        path: PathBuf
    },
    Quit
}

impl Command {
    /// Parse one script line, `None` for blank lines and comments
    ///
    /// # Errors
    /// Unknown commands and malformed arguments
    pub fn parse(line: &str) -> Result<Option<Command>, CommandErrors> {
        let tokens = line
            .split_whitespace()
            .take_while(|x| !x.starts_with('#'))
            .collect::<Vec<&str>>();

        let Some((name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match *name {
            "load" => {
                let [path, name] = exact::<2>("load", args)?;
                Command::Load {
                    path: PathBuf::from(path),
                    name: name.to_string()
                }
            }
            "save" => {
                let [path, name] = exact::<2>("save", args)?;
                Command::Save {
                    path: PathBuf::from(path),
                    name: name.to_string()
                }
            }
            "horizontal-flip" | "vertical-flip" => {
                let direction = if *name == "horizontal-flip" {
                    FlipDirection::Horizontal
                } else {
                    FlipDirection::Vertical
                };
                let [source, dest] = exact::<2>("flip", args)?;
                Command::Flip {
                    direction,
                    source: source.to_string(),
                    dest: dest.to_string()
                }
            }
            "brighten" => {
                let Some((delta, rest)) = args.split_first() else {
                    return Err(invalid("brighten", "missing brightness delta"));
                };
                let delta = number::<i32>("brighten", "delta", delta)?;

                transform(MaskableOperation::Brighten(delta), "brighten", rest)?
            }
            "rgb-split" => {
                let [source, red, green, blue] = exact::<4>("rgb-split", args)?;
                Command::RgbSplit {
                    source: source.to_string(),
                    red:    red.to_string(),
                    green:  green.to_string(),
                    blue:   blue.to_string()
                }
            }
            "rgb-combine" => {
                let [dest, red, green, blue] = exact::<4>("rgb-combine", args)?;
                Command::RgbCombine {
                    dest:  dest.to_string(),
                    red:   red.to_string(),
                    green: green.to_string(),
                    blue:  blue.to_string()
                }
            }
            "compress" => {
                let [percentage, source, dest] = exact::<3>("compress", args)?;
                Command::Compress {
                    percentage: number::<f64>("compress", "percentage", percentage)?,
                    source:     source.to_string(),
                    dest:       dest.to_string()
                }
            }
            "histogram" => {
                let [source, dest] = exact::<2>("histogram", args)?;
                Command::Histogram {
                    source: source.to_string(),
                    dest:   dest.to_string()
                }
            }
            "color-correct" => {
                let (rest, split) = split_suffix("color-correct", args)?;
                let [source, dest] = exact::<2>("color-correct", rest)?;
                Command::ColorCorrect {
                    source: source.to_string(),
                    dest: dest.to_string(),
                    split
                }
            }
            "levels-adjust" => {
                let (rest, split) = split_suffix("levels-adjust", args)?;
                let [black, mid, white, source, dest] = exact::<5>("levels-adjust", rest)?;
                Command::LevelsAdjust {
                    black: number::<i32>("levels-adjust", "black", black)?,
                    mid: number::<i32>("levels-adjust", "mid", mid)?,
                    white: number::<i32>("levels-adjust", "white", white)?,
                    source: source.to_string(),
                    dest: dest.to_string(),
                    split
                }
            }
            "info" => {
                let [name] = exact::<1>("info", args)?;
                Command::Info {
                    name: name.to_string()
                }
            }
            "run" => {
                let [path] = exact::<1>("run", args)?;
                Command::Run {
                    path: PathBuf::from(path)
                }
            }
            "quit" | "exit" => {
                exact::<0>("quit", args)?;
                Command::Quit
            }
            other => match MaskableOperation::from_str(other) {
                Ok(operation) => transform(operation, operation.command_name(), args)?,
                Err(_) => return Err(CommandErrors::UnknownCommand(other.to_string()))
            }
        };
        Ok(Some(command))
    }
}

/// Parse `source [mask] dest [split p]`
fn transform(
    operation: MaskableOperation, command: &'static str, args: &[&str]
) -> Result<Command, CommandErrors> {
    let (rest, split) = split_suffix(command, args)?;

    let (source, mask, dest) = match rest {
        [source, dest] => (source, None, dest),
        [source, mask, dest] => (source, Some(mask.to_string()), dest),
        _ => {
            return Err(invalid(
                command,
                format!("expected `source [mask] dest [split p]` but found {args:?}")
            ))
        }
    };
    Ok(Command::Transform {
        operation,
        source: source.to_string(),
        mask,
        dest: dest.to_string(),
        split
    })
}

/// Strip a trailing `split <percentage>`
fn split_suffix<'a, 'b>(
    command: &'static str, args: &'a [&'b str]
) -> Result<(&'a [&'b str], Option<f64>), CommandErrors> {
    match args {
        [rest @ .., "split", value] => {
            Ok((rest, Some(number::<f64>(command, "split", value)?)))
        }
        [.., "split"] => Err(invalid(command, "missing split percentage")),
        _ => Ok((args, None))
    }
}

fn exact<'a, const N: usize>(
    command: &'static str, args: &[&'a str]
) -> Result<[&'a str; N], CommandErrors> {
    <[&str; N]>::try_from(args).map_err(|_| {
        invalid(
            command,
            format!("expected {N} arguments but found {}", args.len())
        )
    })
}

fn number<T: FromStr>(command: &'static str, what: &str, value: &str) -> Result<T, CommandErrors> {
    value
        .parse::<T>()
        .map_err(|_| invalid(command, format!("`{value}` is not a valid {what}")))
}

fn invalid(command: &'static str, reason: impl Into<String>) -> CommandErrors {
    CommandErrors::InvalidArguments(command, reason.into())
}
