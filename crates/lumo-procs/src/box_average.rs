/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Unweighted box averaging
//!
//! Every output pixel is the mean of the square neighborhood around it
//!
//! ```text
//! pix[x,y] = mean(pix[x+i, y+j])  for i,j in -k..=k, k = size/2
//! ```
//!
//! clipped to the raster, so border and corner pixels average fewer
//! neighbors than interior pixels and the divisor shrinks with them.
use log::warn;
use lumo_core::color;
use lumo_raster::errors::{ArgumentErrors, RasterErrors};
use lumo_raster::raster::RasterImage;
use lumo_raster::store::ImageStore;
use lumo_raster::traits::OperationsTrait;

/// Average the current raster over a square neighborhood
///
/// Reads only a snapshot of the raster as it was when the operation
/// started; the averaged pixels land in a new raster which replaces
/// the current one wholesale, so results never depend on traversal
/// order. Alpha comes out fully opaque.
pub struct BoxAverage {
    kernel_size: usize
}

impl BoxAverage {
    /// Create a new box average
    ///
    /// # Arguments
    /// - kernel_size: the neighborhood edge length, valid from 2 upward
    #[must_use]
    pub fn new(kernel_size: usize) -> BoxAverage {
        BoxAverage { kernel_size }
    }
}

impl OperationsTrait for BoxAverage {
    fn name(&self) -> &'static str {
        "Box average"
    }

    fn execute_impl(&self, store: &mut ImageStore) -> Result<(), RasterErrors> {
        if self.kernel_size <= 1 {
            return Err(ArgumentErrors::KernelSize(self.kernel_size).into());
        }

        let current = store.current()?;
        let (width, height) = current.dimensions();

        let k = self.kernel_size / 2;
        if k >= width - 1 && k >= height - 1 {
            warn!("Box average window covers the whole raster, output will be a flat field");
        }

        let mut out = RasterImage::filled(0, width, height)?;

        box_average(
            current.pixels(),
            out.pixels_mut(),
            width,
            height,
            self.kernel_size
        );

        store.replace_current(out)
    }
}

/// Average each channel over the clipped neighborhood of every pixel
///
/// The divisor is the number of in-bounds neighbors, not the full
/// window area.
#[allow(clippy::cast_possible_truncation)]
pub fn box_average(
    src: &[u32], out: &mut [u32], width: usize, height: usize, kernel_size: usize
) {
    let k = kernel_size / 2;

    for y in 0..height {
        for x in 0..width {
            let x_lo = x.saturating_sub(k);
            let y_lo = y.saturating_sub(k);
            let x_hi = x.saturating_add(k).min(width - 1);
            let y_hi = y.saturating_add(k).min(height - 1);

            let (mut red, mut green, mut blue) = (0_u64, 0_u64, 0_u64);
            // the window always contains (x,y) itself
            let count = ((x_hi - x_lo + 1) * (y_hi - y_lo + 1)) as u64;

            for row in src[y_lo * width..(y_hi + 1) * width].chunks_exact(width) {
                for px in &row[x_lo..=x_hi] {
                    red += u64::from(color::red(*px));
                    green += u64::from(color::green(*px));
                    blue += u64::from(color::blue(*px));
                }
            }

            out[y * width + x] = color::pack(
                color::ALPHA_OPAQUE,
                (red / count) as u8,
                (green / count) as u8,
                (blue / count) as u8
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use lumo_core::color;
    use lumo_raster::errors::RasterErrors;
    use lumo_raster::raster::RasterImage;
    use lumo_raster::store::ImageStore;
    use lumo_raster::traits::OperationsTrait;

    use super::BoxAverage;

    #[test]
    fn kernel_of_one_is_rejected() {
        let pixel = color::pack(255, 4, 5, 6);
        let mut store = ImageStore::new();
        store.load(RasterImage::filled(pixel, 4, 4).unwrap());

        for kernel_size in [0, 1] {
            let result = BoxAverage::new(kernel_size).execute(&mut store);
            assert!(matches!(result, Err(RasterErrors::InvalidArgument(_))));
        }
        assert_eq!(store.current().unwrap().get(2, 2).unwrap(), pixel);
    }

    #[test]
    fn flat_fields_stay_flat() {
        let mut store = ImageStore::new();
        store.load(RasterImage::filled(color::pack(255, 90, 120, 150), 8, 8).unwrap());

        BoxAverage::new(3).execute(&mut store).unwrap();

        let expected = color::pack(255, 90, 120, 150);
        assert!(store
            .current()
            .unwrap()
            .pixels()
            .iter()
            .all(|px| *px == expected));
    }

    #[test]
    fn corners_average_only_in_bounds_neighbors() {
        // red values laid out as
        //   0  10
        //  20  30
        // on a 4x4 raster whose remaining pixels are all 100
        let mut raster = RasterImage::filled(color::pack(255, 100, 100, 100), 4, 4).unwrap();
        raster.set(0, 0, color::pack(255, 0, 0, 0)).unwrap();
        raster.set(1, 0, color::pack(255, 10, 0, 0)).unwrap();
        raster.set(0, 1, color::pack(255, 20, 0, 0)).unwrap();
        raster.set(1, 1, color::pack(255, 30, 0, 0)).unwrap();

        let mut store = ImageStore::new();
        store.load(raster);

        BoxAverage::new(3).execute(&mut store).unwrap();

        // the corner window holds 4 pixels, (0+10+20+30)/4 = 15
        let px = store.current().unwrap().get(0, 0).unwrap();
        assert_eq!(color::red(px), 15);
    }

    #[test]
    fn interior_pixels_use_the_full_window() {
        // center red value stands out on a zero field
        let mut raster = RasterImage::filled(color::pack(255, 0, 0, 0), 5, 5).unwrap();
        raster.set(2, 2, color::pack(255, 90, 0, 0)).unwrap();

        let mut store = ImageStore::new();
        store.load(raster);

        BoxAverage::new(3).execute(&mut store).unwrap();

        // 90 spread over a 9 pixel window truncates to 10
        let px = store.current().unwrap().get(2, 2).unwrap();
        assert_eq!(color::red(px), 10);
    }
}
