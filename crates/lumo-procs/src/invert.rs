/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lumo_raster::errors::RasterErrors;
use lumo_raster::store::ImageStore;
use lumo_raster::traits::OperationsTrait;

/// Negate the current raster in place
///
/// The formula for negating an 8 bit component
/// is `pixel[x,y] = 255 - pixel[x,y]`, applied to red, green and blue.
/// The alpha byte of every pixel is left as it is.
///
/// Negation is its own inverse.
pub struct Negate;

impl Negate {
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Negate {
        Negate {}
    }
}

impl OperationsTrait for Negate {
    fn name(&self) -> &'static str {
        "Negate"
    }

    fn execute_impl(&self, store: &mut ImageStore) -> Result<(), RasterErrors> {
        negate(store.current_mut()?.pixels_mut());
        Ok(())
    }
}

/// Invert the color bytes of every packed pixel
///
/// `255 - c` is `c ^ 0xFF` for a byte, so the three color fields flip
/// in one xor while the alpha field's mask bits stay zero.
pub fn negate(pixels: &mut [u32]) {
    pixels.iter_mut().for_each(|px| *px ^= 0x00FF_FFFF);
}

#[cfg(test)]
mod tests {
    use lumo_core::color;
    use lumo_raster::raster::RasterImage;
    use lumo_raster::store::ImageStore;
    use lumo_raster::traits::OperationsTrait;

    use super::Negate;

    #[test]
    fn color_bytes_flip_alpha_stays() {
        let mut store = ImageStore::new();
        store.load(RasterImage::filled(color::pack(7, 10, 20, 30), 2, 2).unwrap());

        Negate::new().execute(&mut store).unwrap();

        let px = store.current().unwrap().get(0, 0).unwrap();
        assert_eq!(px, color::pack(7, 245, 235, 225));
    }

    #[test]
    fn negation_is_involutive() {
        use nanorand::Rng;

        let (width, height) = (32, 32);
        let mut pixels = vec![0u32; width * height];
        nanorand::WyRand::new().fill(&mut pixels);

        let loaded = RasterImage::from_pixels(pixels, width, height).unwrap();

        let mut store = ImageStore::new();
        store.load(loaded.clone());

        Negate::new().execute(&mut store).unwrap();
        Negate::new().execute(&mut store).unwrap();

        assert_eq!(store.current().unwrap(), &loaded);
    }
}
