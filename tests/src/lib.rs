/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scenario tests running scripts through the whole toolkit
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tint_image::channel::Channel;
use tint_image::image::Image;

#[cfg(test)]
mod ppm;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod scenarios;

/// Expected value of one pixel after a scenario ran
#[derive(Clone, Deserialize, Debug)]
pub struct PixelCheck {
    pub image: String,
    pub x:     usize,
    pub y:     usize,
    pub pixel: [i32; 3]
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:    String,
    pub script:  Vec<String>,
    #[serde(default)]
    pub checks:  Vec<PixelCheck>,
    #[serde(default)]
    pub fails:   bool,
    pub comment: Option<String>
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

/// The 2x2 image used throughout the scenarios
pub fn koala() -> Image {
    Image::new(
        Channel::from_rows(&[[123, 12], [255, 128]]).unwrap(),
        Channel::from_rows(&[[45, 200], [255, 128]]).unwrap(),
        Channel::from_rows(&[[67, 150], [0, 125]]).unwrap()
    )
    .unwrap()
}

/// A unique path under the system temporary directory
pub fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tint-tests-{}-{name}", std::process::id()))
}
