/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Extract a single color channel
//!
//! The selected channel is copied into all three output channels so the
//! result still displays, as a greyscale rendition of that channel.
use tint_core::channel::ChannelKind;
use tint_image::errors::ImageErrors;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;

/// Replicate one channel into all three
#[derive(Copy, Clone, Debug)]
pub struct ExtractChannel {
    channel: ChannelKind
}

impl ExtractChannel {
    #[must_use]
    pub fn new(channel: ChannelKind) -> ExtractChannel {
        ExtractChannel { channel }
    }
}

impl OperationsTrait for ExtractChannel {
    fn name(&self) -> &'static str {
        match self.channel {
            ChannelKind::Red => "Red component",
            ChannelKind::Green => "Green component",
            ChannelKind::Blue => "Blue component"
        }
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let source = image.channel(self.channel);

        Image::new(source.clone(), source.clone(), source.clone())
    }
}
