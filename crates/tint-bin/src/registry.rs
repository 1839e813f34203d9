/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::collections::HashMap;

use log::debug;
use tint_image::errors::ImageErrors;
use tint_image::image::Image;

/// Images known to a session, by name
///
/// Storing under an existing name replaces the old image.
#[derive(Default, Debug)]
pub struct Registry {
    images: HashMap<String, Image>
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Store `image` as `name`
    pub fn insert(&mut self, name: &str, image: Image) {
        let (width, height) = image.dimensions();

        if self.images.insert(name.to_string(), image).is_some() {
            debug!("Replaced `{name}` with a {width}x{height} image");
        } else {
            debug!("Stored `{name}`, {width}x{height}");
        }
    }

    /// Look up an image
    ///
    /// # Errors
    /// [`ImageErrors::NoSuchImage`] if nothing is stored under `name`
    pub fn get(&self, name: &str) -> Result<&Image, ImageErrors> {
        self.images
            .get(name)
            .ok_or_else(|| ImageErrors::NoSuchImage(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }
}
