/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel identifiers
//!
//! Images are stored as three separate planes, red, green and blue,
//! this names each plane.

use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// Number of color channels an image carries
pub const NUM_CHANNELS: usize = 3;

/// One of the three color planes of an image
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ChannelKind {
    Red,
    Green,
    Blue
}

impl ChannelKind {
    /// All channels in storage order
    pub const ALL: [ChannelKind; NUM_CHANNELS] =
        [ChannelKind::Red, ChannelKind::Green, ChannelKind::Blue];

    /// Position of this channel inside an image
    pub const fn index(self) -> usize {
        match self {
            ChannelKind::Red => 0,
            ChannelKind::Green => 1,
            ChannelKind::Blue => 2
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ChannelKind::Red => "red",
            ChannelKind::Green => "green",
            ChannelKind::Blue => "blue"
        }
    }
}

impl Display for ChannelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ChannelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" | "r" => Ok(ChannelKind::Red),
            "green" | "g" => Ok(ChannelKind::Green),
            "blue" | "b" => Ok(ChannelKind::Blue),
            _ => Err(format!(
                "Unknown channel `{s}`, accepted values are red, green and blue"
            ))
        }
    }
}

#[test]
fn channel_kind_round_trips_through_names() {
    for kind in ChannelKind::ALL {
        assert_eq!(kind.name().parse::<ChannelKind>(), Ok(kind));
    }
    assert!("alpha".parse::<ChannelKind>().is_err());
}
