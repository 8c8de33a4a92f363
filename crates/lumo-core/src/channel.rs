/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel selection for packed pixels

use crate::color;

/// A single color channel of a packed pixel
///
/// The enumeration is closed, so there is no way to ask for a channel
/// the pixel layout does not carry; selection is by value, not by
/// comparing color objects.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelSelector {
    Red,
    Green,
    Blue
}

impl ChannelSelector {
    /// Extract this channel's byte from a packed pixel
    #[inline]
    #[must_use]
    pub const fn byte_of(self, pixel: u32) -> u8 {
        match self {
            ChannelSelector::Red => color::red(pixel),
            ChannelSelector::Green => color::green(pixel),
            ChannelSelector::Blue => color::blue(pixel)
        }
    }
}

/// All channels a packed pixel carries color in
pub static ALL_CHANNELS: [ChannelSelector; 3] = [
    ChannelSelector::Red,
    ChannelSelector::Green,
    ChannelSelector::Blue
];
