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

/// The color painted on rectangle outlines, fully opaque blue
pub const OUTLINE_COLOR: u32 = color::pack(color::ALPHA_OPAQUE, 0, 0, 255);

/// Draw a rectangle outline onto the current raster, in place
///
/// Only the border pixels of the `width x height` region anchored at
/// `(x, y)` are painted, with [`OUTLINE_COLOR`]; the interior and
/// everything outside the region are untouched.
pub struct DrawRectOutline {
    x:      usize,
    y:      usize,
    width:  usize,
    height: usize
}

impl DrawRectOutline {
    /// Create a new rectangle outline
    ///
    /// # Arguments
    /// - x, y: top left corner of the region
    /// - width, height: region extent, both must be non zero and the
    ///   region must lie fully inside the raster
    #[must_use]
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> DrawRectOutline {
        DrawRectOutline {
            x,
            y,
            width,
            height
        }
    }
}

impl OperationsTrait for DrawRectOutline {
    fn name(&self) -> &'static str {
        "Rectangle outline"
    }

    fn execute_impl(&self, store: &mut ImageStore) -> Result<(), RasterErrors> {
        let current = store.current_mut()?;
        let (raster_width, raster_height) = current.dimensions();

        let geometry_error = || {
            RasterErrors::from(ArgumentErrors::RectangleGeometry(
                self.x,
                self.y,
                self.width,
                self.height
            ))
        };

        if self.width == 0 || self.height == 0 {
            return Err(geometry_error());
        }
        // checked adds so a far-out corner can not wrap around
        let x_end = self.x.checked_add(self.width).ok_or_else(geometry_error)?;
        let y_end = self.y.checked_add(self.height).ok_or_else(geometry_error)?;

        if x_end > raster_width || y_end > raster_height {
            return Err(geometry_error());
        }

        draw_outline(
            current.pixels_mut(),
            raster_width,
            self.x,
            self.y,
            self.width,
            self.height
        );

        Ok(())
    }
}

/// Paint the border pixels of a region known to fit the buffer
pub fn draw_outline(
    pixels: &mut [u32], stride: usize, x: usize, y: usize, width: usize, height: usize
) {
    let top = y;
    let bottom = y + height - 1;

    pixels[top * stride + x..top * stride + x + width].fill(OUTLINE_COLOR);
    pixels[bottom * stride + x..bottom * stride + x + width].fill(OUTLINE_COLOR);

    for row in y..y + height {
        pixels[row * stride + x] = OUTLINE_COLOR;
        pixels[row * stride + x + width - 1] = OUTLINE_COLOR;
    }
}

#[cfg(test)]
mod tests {
    use lumo_core::color;
    use lumo_raster::errors::RasterErrors;
    use lumo_raster::raster::RasterImage;
    use lumo_raster::store::ImageStore;
    use lumo_raster::traits::OperationsTrait;

    use super::{DrawRectOutline, OUTLINE_COLOR};

    const FIELD: u32 = color::pack(255, 50, 50, 50);

    fn loaded_store() -> ImageStore {
        let mut store = ImageStore::new();
        store.load(RasterImage::filled(FIELD, 20, 20).unwrap());
        store
    }

    #[test]
    fn only_the_border_is_painted() {
        let mut store = loaded_store();

        DrawRectOutline::new(0, 0, 10, 10)
            .execute(&mut store)
            .unwrap();

        let current = store.current().unwrap();

        for y in 0..20 {
            for x in 0..20 {
                let inside = x < 10 && y < 10;
                let on_border = inside && (x == 0 || x == 9 || y == 0 || y == 9);

                let expected = if on_border { OUTLINE_COLOR } else { FIELD };
                assert_eq!(current.get(x, y).unwrap(), expected, "at ({x},{y})");
            }
        }
    }

    #[test]
    fn single_pixel_region_is_painted_once() {
        let mut store = loaded_store();

        DrawRectOutline::new(5, 5, 1, 1).execute(&mut store).unwrap();

        let current = store.current().unwrap();
        assert_eq!(current.get(5, 5).unwrap(), OUTLINE_COLOR);
        assert_eq!(current.get(6, 5).unwrap(), FIELD);
        assert_eq!(current.get(5, 6).unwrap(), FIELD);
    }

    #[test]
    fn out_of_range_geometry_is_rejected_untouched() {
        let mut store = loaded_store();
        let before = store.current().unwrap().clone();

        for (x, y, width, height) in [
            (15, 0, 10, 5),
            (0, 15, 5, 10),
            (0, 0, 21, 1),
            (0, 0, 0, 5),
            (0, 0, 5, 0),
            (usize::MAX, 0, 2, 2)
        ] {
            let result = DrawRectOutline::new(x, y, width, height).execute(&mut store);
            assert!(matches!(result, Err(RasterErrors::InvalidArgument(_))));
        }

        assert_eq!(store.current().unwrap(), &before);
    }
}
