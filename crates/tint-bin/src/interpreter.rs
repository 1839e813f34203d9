/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Runs parsed commands against a registry of images
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, error, info};
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;
use tint_imageprocs::color_correct::ColorCorrect;
use tint_imageprocs::compress::Compress;
use tint_imageprocs::flip::Flip;
use tint_imageprocs::histogram::HistogramVisualization;
use tint_imageprocs::levels::LevelsAdjust;
use tint_imageprocs::mask::MaskedOperation;
use tint_imageprocs::rgb::{rgb_combine, rgb_split};
use tint_imageprocs::split::SplitView;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::commands::Command;
use crate::errors::CommandErrors;
use crate::file_io::{load_image, save_image};
use crate::registry::Registry;
use crate::serde::InfoReport;

/// How deep `run` commands may nest
pub const MAX_SCRIPT_DEPTH: usize = 16;

/// What the session should do after a command
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit
}

/// A scripting session
pub struct Interpreter {
    registry: Registry,
    options:  CmdOptions,
    depth:    usize
}

impl Interpreter {
    pub fn new(options: CmdOptions) -> Interpreter {
        Interpreter {
            registry: Registry::new(),
            options,
            depth: 0
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn options(&self) -> &CmdOptions {
        &self.options
    }

    /// Parse and run a single line
    ///
    /// # Errors
    /// Parse failures and command failures
    pub fn run_line(&mut self, line: &str) -> Result<Flow, CommandErrors> {
        match Command::parse(line)? {
            Some(command) => self.execute(&command),
            None => Ok(Flow::Continue)
        }
    }

    /// Run every line of `reader` until the end or a `quit`
    ///
    /// Failing lines abort the script unless `keep_going` is set, in which
    /// case they are logged and skipped.
    ///
    /// # Errors
    /// The first failure, tagged with its line number
    pub fn run_script<R: BufRead>(&mut self, reader: R) -> Result<Flow, CommandErrors> {
        for (number, line) in reader.lines().enumerate() {
            let line = line?;

            match self.run_line(&line) {
                Ok(Flow::Quit) => return Ok(Flow::Quit),
                Ok(Flow::Continue) => {}
                Err(err) => {
                    let err = CommandErrors::AtLine(number + 1, Box::new(err));

                    if !self.options.keep_going {
                        return Err(err);
                    }
                    error!("{err:?}");
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Run the script stored in `path`
    ///
    /// # Errors
    /// Unreadable files and failing commands
    pub fn run_file(&mut self, path: &Path) -> Result<Flow, CommandErrors> {
        if self.depth >= MAX_SCRIPT_DEPTH {
            return Err(CommandErrors::RecursionLimit(MAX_SCRIPT_DEPTH));
        }
        let reader = BufReader::new(File::open(path)?);

        self.depth += 1;
        let result = self.run_script(reader);
        self.depth -= 1;

        result
    }

    /// Read commands until `quit` or the end of input
    ///
    /// Failing commands are always logged and skipped here.
    ///
    /// # Errors
    /// Only failures to read input or write the prompt
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self, mut reader: R, mut prompt_out: W, prompt: bool
    ) -> Result<(), CommandErrors> {
        let mut line = String::new();

        loop {
            if prompt {
                write!(prompt_out, "> ")?;
                prompt_out.flush()?;
            }
            line.clear();

            if reader.read_line(&mut line)? == 0 {
                return Ok(());
            }
            match self.run_line(&line) {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) => error!("{err:?}")
            }
        }
    }

    /// Run one command
    ///
    /// # Errors
    /// Missing images, invalid parameters and I/O failures
    pub fn execute(&mut self, command: &Command) -> Result<Flow, CommandErrors> {
        debug!("Executing {command:?}");

        match command {
            Command::Load { path, name } => {
                let image = load_image(path, self.options.decoder_options())?;
                self.registry.insert(name, image);
            }
            Command::Save { path, name } => {
                let image = self.registry.get(name)?;
                save_image(path, image, self.options.ppm_version)?;
                info!("Saved `{name}` to {}", path.display());
            }
            Command::Transform {
                operation,
                source,
                mask,
                dest,
                split
            } => {
                let image = self.registry.get(source)?;

                let output = match mask {
                    Some(mask) => {
                        let masked = MaskedOperation::new(*operation, self.registry.get(mask)?);
                        apply(&masked, *split, image)?
                    }
                    None => apply(&operation.operation(), *split, image)?
                };
                self.registry.insert(dest, output);
            }
            Command::Flip {
                direction,
                source,
                dest
            } => {
                let output = Flip::new(*direction).execute(self.registry.get(source)?)?;
                self.registry.insert(dest, output);
            }
            Command::RgbSplit {
                source,
                red,
                green,
                blue
            } => {
                let [r, g, b] = rgb_split(self.registry.get(source)?)?;

                self.registry.insert(red, r);
                self.registry.insert(green, g);
                self.registry.insert(blue, b);
            }
            Command::RgbCombine {
                dest,
                red,
                green,
                blue
            } => {
                let output = rgb_combine(
                    self.registry.get(red)?,
                    self.registry.get(green)?,
                    self.registry.get(blue)?
                )?;
                self.registry.insert(dest, output);
            }
            Command::Compress {
                percentage,
                source,
                dest
            } => {
                let output = Compress::new(*percentage).execute(self.registry.get(source)?)?;
                self.registry.insert(dest, output);
            }
            Command::Histogram { source, dest } => {
                let output = HistogramVisualization::new().execute(self.registry.get(source)?)?;
                self.registry.insert(dest, output);
            }
            Command::ColorCorrect {
                source,
                dest,
                split
            } => {
                let output = apply(&ColorCorrect::new(), *split, self.registry.get(source)?)?;
                self.registry.insert(dest, output);
            }
            Command::LevelsAdjust {
                black,
                mid,
                white,
                source,
                dest,
                split
            } => {
                let levels = LevelsAdjust::new(*black, *mid, *white);
                let output = apply(&levels, *split, self.registry.get(source)?)?;
                self.registry.insert(dest, output);
            }
            Command::Info { name } => {
                let report = InfoReport::new(name, self.registry.get(name)?);
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Command::Run { path } => {
                return self.run_file(path);
            }
            Command::Quit => return Ok(Flow::Quit)
        }
        Ok(Flow::Continue)
    }
}

/// Run `operation`, through a split view when a percentage is given
fn apply(
    operation: &dyn OperationsTrait, split: Option<f64>, image: &Image
) -> Result<Image, CommandErrors> {
    let output = match split {
        Some(percentage) => SplitView::new(operation, percentage).execute(image)?,
        None => operation.execute(image)?
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tint_image::channel::Channel;
    use tint_image::errors::ImageErrors;
    use tint_image::image::Image;

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::errors::CommandErrors;
    use crate::interpreter::{Flow, Interpreter, MAX_SCRIPT_DEPTH};

    fn session() -> Interpreter {
        let mut interpreter = Interpreter::new(CmdOptions::new());

        let image = Image::new(
            Channel::from_rows(&[[123, 12], [255, 128]]).unwrap(),
            Channel::from_rows(&[[45, 200], [255, 128]]).unwrap(),
            Channel::from_rows(&[[67, 150], [0, 125]]).unwrap()
        )
        .unwrap();
        interpreter.registry_mut().insert("koala", image);
        interpreter
    }

    #[test]
    fn transforms_store_results() {
        let mut s = session();

        s.run_line("red-component koala red").unwrap();
        s.run_line("brighten 20 koala bright").unwrap();
        s.run_line("horizontal-flip koala flipped").unwrap();

        let red = s.registry().get("red").unwrap();
        assert_eq!(red.pixel(0, 1), [255, 255, 255]);

        assert_eq!(s.registry().get("bright").unwrap().pixel(1, 1), [148, 148, 145]);
        assert_eq!(s.registry().get("flipped").unwrap().pixel(0, 0), [12, 200, 150]);
    }

    #[test]
    fn masked_and_split() {
        let mut s = session();

        let mask = Image::new(
            Channel::from_rows(&[[0, 9], [9, 0]]).unwrap(),
            Channel::fill(0, 2, 2).unwrap(),
            Channel::fill(0, 2, 2).unwrap()
        )
        .unwrap();
        s.registry_mut().insert("mask", mask);

        s.run_line("red-component koala mask masked").unwrap();
        s.run_line("greyscale koala grey split 50").unwrap();

        let masked = s.registry().get("masked").unwrap();
        assert_eq!(masked.pixel(0, 0), [123, 123, 123]);
        assert_eq!(masked.pixel(1, 0), [12, 200, 150]);

        let grey = s.registry().get("grey").unwrap();
        assert_eq!(grey.pixel(1, 0), [12, 200, 150]);
        assert_eq!(grey.pixel(0, 0)[0], grey.pixel(0, 0)[1]);
    }

    #[test]
    fn rgb_round_trip() {
        let mut s = session();

        s.run_line("rgb-split koala r g b").unwrap();
        s.run_line("rgb-combine joined r g b").unwrap();

        assert_eq!(s.registry().get("joined").unwrap(), s.registry().get("koala").unwrap());
    }

    #[test]
    fn missing_images_fail() {
        let mut s = session();

        assert!(matches!(
            s.run_line("sepia panda out"),
            Err(CommandErrors::ImageErrors(ImageErrors::NoSuchImage(name))) if name == "panda"
        ));
        assert!(!s.registry().contains("out"));
    }

    #[test]
    fn script_errors_stop_unless_keep_going() {
        let script = "blur koala a\nlevels-adjust 100 100 100 koala b\nsharpen koala c\n";

        let mut s = session();
        let err = s.run_script(Cursor::new(script)).unwrap_err();
        assert!(matches!(err, CommandErrors::AtLine(2, _)));
        assert!(s.registry().contains("a"));
        assert!(!s.registry().contains("c"));

        let mut s = session();
        s.options.keep_going = true;
        assert_eq!(s.run_script(Cursor::new(script)).unwrap(), Flow::Continue);
        assert!(s.registry().contains("c"));
        assert!(!s.registry().contains("b"));
    }

    #[test]
    fn quit_stops_the_script() {
        let mut s = session();

        let flow = s
            .run_script(Cursor::new("# edit\n\nquit\nblur koala never\n"))
            .unwrap();

        assert_eq!(flow, Flow::Quit);
        assert!(!s.registry().contains("never"));
    }

    #[test]
    fn nested_scripts() {
        let dir = std::env::temp_dir();
        let inner = dir.join(format!("tint-inner-{}.txt", std::process::id()));
        let looping = dir.join(format!("tint-loop-{}.txt", std::process::id()));

        std::fs::write(&inner, "vertical-flip koala v\nquit\n").unwrap();
        std::fs::write(&looping, format!("run {}\n", looping.display())).unwrap();

        let mut s = session();
        let flow = s
            .run_script(Cursor::new(format!("run {}\nblur koala never\n", inner.display())))
            .unwrap();
        let looped = s.run_file(&looping);

        std::fs::remove_file(&inner).unwrap();
        std::fs::remove_file(&looping).unwrap();

        assert_eq!(flow, Flow::Quit);
        assert!(s.registry().contains("v"));
        assert!(!s.registry().contains("never"));

        let mut err = looped.unwrap_err();
        while let CommandErrors::AtLine(_, inner) = err {
            err = *inner;
        }
        assert!(matches!(err, CommandErrors::RecursionLimit(MAX_SCRIPT_DEPTH)));
        assert_eq!(s.depth, 0);
    }

    #[test]
    fn interactive_sessions_survive_errors() {
        let mut s = session();
        let mut prompt = vec![];

        s.run_interactive(
            Cursor::new("bogus\nvertical-flip koala v\nexit\nblur koala b\n"),
            &mut prompt,
            true
        )
        .unwrap();

        assert!(s.registry().contains("v"));
        assert!(!s.registry().contains("b"));
        assert_eq!(prompt, b"> > > ");
    }
}
