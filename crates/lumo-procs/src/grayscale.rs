/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert the current raster to grayscale
//!
//! Formula for the conversion is given by
//!
//! ```text
//! Luma = 0.299R + 0.587G + 0.114B
//! ```
//!
//! truncated toward zero.
use lumo_core::color;
use lumo_raster::errors::RasterErrors;
use lumo_raster::store::ImageStore;
use lumo_raster::traits::OperationsTrait;

/// Convert the current raster to grayscale, in place
///
/// The luma of every pixel is read from the originally loaded raster,
/// not from the current one, so running the conversion twice produces
/// the same pixels as running it once.
pub struct ToGrayscale;

impl ToGrayscale {
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> ToGrayscale {
        ToGrayscale {}
    }
}

impl OperationsTrait for ToGrayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, store: &mut ImageStore) -> Result<(), RasterErrors> {
        let (original, current) = store.rasters_mut()?;

        grayscale_from(original.pixels(), current.pixels_mut());

        Ok(())
    }
}

/// Weighted luma of a packed pixel
///
/// The `as` cast truncates, it does not round.
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn luma(pixel: u32) -> u8 {
    let r = f32::from(color::red(pixel));
    let g = f32::from(color::green(pixel));
    let b = f32::from(color::blue(pixel));

    (r * 0.299 + g * 0.587 + b * 0.114) as u8
}

/// Write the gray pixel of every source pixel into `dst`
///
/// Output pixels replicate the luma across the color fields with alpha
/// forced to fully opaque.
pub fn grayscale_from(src: &[u32], dst: &mut [u32]) {
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = color::gray(luma(*s));
    }
}
