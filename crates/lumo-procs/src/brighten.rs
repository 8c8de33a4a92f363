/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lumo_core::color;
use lumo_raster::errors::{ArgumentErrors, RasterErrors};
use lumo_raster::store::ImageStore;
use lumo_raster::traits::OperationsTrait;

/// The smallest factor [`BrightnessScale`] accepts
pub const MIN_BRIGHTNESS_FACTOR: f32 = 1.1;

/// Scale the brightness of the current raster
///
/// Every component byte, alpha included, is multiplied by the factor
/// and clamped to `[0, 255]`. The scaled pixels land in a new raster
/// which replaces the current one wholesale.
pub struct BrightnessScale {
    factor: f32
}

impl BrightnessScale {
    /// Create a new brightness scale
    ///
    /// # Arguments
    /// - factor: the per-component multiplier, valid from
    ///   [`MIN_BRIGHTNESS_FACTOR`] upward
    #[must_use]
    pub fn new(factor: f32) -> BrightnessScale {
        BrightnessScale { factor }
    }
}

impl OperationsTrait for BrightnessScale {
    fn name(&self) -> &'static str {
        "Brightness scale"
    }

    fn execute_impl(&self, store: &mut ImageStore) -> Result<(), RasterErrors> {
        // !is_finite also throws out NaN, which compares false below
        if !self.factor.is_finite() || self.factor < MIN_BRIGHTNESS_FACTOR {
            return Err(ArgumentErrors::BrightnessFactor(self.factor).into());
        }

        let mut out = store.current()?.clone();

        scale_components(out.pixels_mut(), self.factor);

        store.replace_current(out)
    }
}

/// Multiply every component of every pixel by `factor`, clamped
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn scale_components(pixels: &mut [u32], factor: f32) {
    let scale = |c: u8| (f32::from(c) * factor).clamp(0., 255.0) as u8;

    for px in pixels.iter_mut() {
        *px = color::pack(
            scale(color::alpha(*px)),
            scale(color::red(*px)),
            scale(color::green(*px)),
            scale(color::blue(*px))
        );
    }
}
