/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lumo_core::channel::ChannelSelector;
use lumo_core::color;
use lumo_raster::errors::RasterErrors;
use lumo_raster::raster::RasterImage;
use lumo_raster::store::ImageStore;

/// Isolate one color channel of the current raster
///
/// Produces a new raster where every pixel replicates the selected
/// channel's byte across red, green and blue, with alpha forced to
/// fully opaque. The store is not touched; the derived raster goes
/// straight to the caller, typically for display.
pub struct ExtractChannel {
    channel: ChannelSelector
}

impl ExtractChannel {
    /// Create a new channel isolation query
    #[must_use]
    pub fn new(channel: ChannelSelector) -> ExtractChannel {
        ExtractChannel { channel }
    }

    /// Produce the single-channel raster from `current`
    ///
    /// # Errors
    /// [`RasterErrors::NotLoaded`] when nothing has been loaded yet
    pub fn extract(&self, store: &ImageStore) -> Result<RasterImage, RasterErrors> {
        let current = store.current()?;
        let (width, height) = current.dimensions();

        let mut out = RasterImage::filled(0, width, height)?;

        isolate_channel(current.pixels(), out.pixels_mut(), self.channel);

        Ok(out)
    }
}

/// Replicate one channel of every source pixel into a gray pixel
pub fn isolate_channel(src: &[u32], out: &mut [u32], channel: ChannelSelector) {
    for (s, o) in src.iter().zip(out.iter_mut()) {
        *o = color::gray(channel.byte_of(*s));
    }
}
