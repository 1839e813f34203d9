/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tint_image::image::Image;
use tint_imageprocs::statistics::{statistics, ImageStatistics};

/// Report printed by the `info` command
pub struct InfoReport<'a> {
    name:       &'a str,
    image:      &'a Image,
    statistics: ImageStatistics
}

impl<'a> InfoReport<'a> {
    pub fn new(name: &'a str, image: &'a Image) -> InfoReport<'a> {
        InfoReport {
            name,
            image,
            statistics: statistics(image)
        }
    }
}

impl<'a> Serialize for InfoReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageInfo", 3)?;

        state.serialize_field("name", self.name)?;
        state.serialize_field("image", self.image)?;
        state.serialize_field("statistics", &self.statistics)?;

        state.end()
    }
}
