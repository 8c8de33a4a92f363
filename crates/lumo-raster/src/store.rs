/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The two-raster image store
//!
//! The store owns an immutable `original` raster and a mutable
//! `current` raster derived from it. Every transformation reads from
//! and writes to these two, and `reset` rewinds `current` to the
//! raster that was loaded.
//!
//! Nothing else holds a long-lived mutable alias to either buffer; a
//! presentation layer gets a borrowed read-only view or a copy.
use log::trace;

use crate::errors::RasterErrors;
use crate::raster::RasterImage;
use crate::traits::IntoRaster;

/// Load state of an [`ImageStore`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum StoreState {
    /// The store has been created but holds no rasters
    Unloaded,
    /// The store holds an original and a current raster
    Loaded
}

struct RasterPair {
    original: RasterImage,
    current:  RasterImage
}

/// Owner of the immutable original and the mutable current raster
///
/// Both rasters live and die together; loading replaces the pair,
/// dropping the store drops the pair. The two always have identical
/// dimensions.
#[derive(Default)]
pub struct ImageStore {
    slot: Option<RasterPair>
}

impl ImageStore {
    /// Create an empty store in the [`StoreState::Unloaded`] state
    #[must_use]
    pub const fn new() -> ImageStore {
        ImageStore { slot: None }
    }

    /// Return the load state of this store
    #[must_use]
    pub const fn state(&self) -> StoreState {
        if self.slot.is_some() {
            StoreState::Loaded
        } else {
            StoreState::Unloaded
        }
    }

    /// Return true if a raster has been loaded
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.slot.is_some()
    }

    /// Load a decoded raster, making it the new original
    ///
    /// The current raster becomes an independent clone of it. Loading
    /// on an already loaded store replaces both rasters.
    pub fn load(&mut self, raster: RasterImage) {
        let (width, height) = raster.dimensions();
        trace!("Loaded a {}x{} raster", width, height);

        self.slot = Some(RasterPair {
            current:  raster.clone(),
            original: raster
        });
    }

    /// Load anything that can produce a decoded raster
    ///
    /// # Errors
    /// Decoder failures are propagated unchanged as
    /// [`RasterErrors::DecodeErrors`]
    pub fn load_from<T: IntoRaster>(&mut self, source: T) -> Result<(), RasterErrors> {
        let raster = source.into_raster()?;
        self.load(raster);
        Ok(())
    }

    /// Rewind the current raster to a fresh clone of the original
    ///
    /// # Errors
    /// [`RasterErrors::NotLoaded`] when nothing has been loaded yet
    pub fn reset(&mut self) -> Result<(), RasterErrors> {
        let pair = self.slot.as_mut().ok_or(RasterErrors::NotLoaded)?;

        trace!("Reset current raster to original");
        pair.current = pair.original.clone();
        Ok(())
    }

    /// Read access to the originally loaded raster
    ///
    /// # Errors
    /// [`RasterErrors::NotLoaded`] when nothing has been loaded yet
    pub fn original(&self) -> Result<&RasterImage, RasterErrors> {
        self.slot
            .as_ref()
            .map(|pair| &pair.original)
            .ok_or(RasterErrors::NotLoaded)
    }

    /// Read access to the current raster
    ///
    /// # Errors
    /// [`RasterErrors::NotLoaded`] when nothing has been loaded yet
    pub fn current(&self) -> Result<&RasterImage, RasterErrors> {
        self.slot
            .as_ref()
            .map(|pair| &pair.current)
            .ok_or(RasterErrors::NotLoaded)
    }

    /// Write access to the current raster
    ///
    /// Only `current` is ever handed out mutably; the original stays
    /// read-only for the lifetime of the pair.
    ///
    /// # Errors
    /// [`RasterErrors::NotLoaded`] when nothing has been loaded yet
    pub fn current_mut(&mut self) -> Result<&mut RasterImage, RasterErrors> {
        self.slot
            .as_mut()
            .map(|pair| &mut pair.current)
            .ok_or(RasterErrors::NotLoaded)
    }

    /// Borrow the original read-only and the current mutably, at once
    ///
    /// Operations that derive the current raster from the original
    /// need both sides in one call.
    ///
    /// # Errors
    /// [`RasterErrors::NotLoaded`] when nothing has been loaded yet
    pub fn rasters_mut(&mut self) -> Result<(&RasterImage, &mut RasterImage), RasterErrors> {
        let pair = self.slot.as_mut().ok_or(RasterErrors::NotLoaded)?;

        Ok((&pair.original, &mut pair.current))
    }

    /// Replace the current raster wholesale with a freshly produced one
    ///
    /// # Errors
    /// - [`RasterErrors::NotLoaded`] when nothing has been loaded yet
    /// - [`RasterErrors::DimensionsMisMatch`] when the replacement does
    ///   not match the loaded dimensions; the store is left unchanged
    pub fn replace_current(&mut self, raster: RasterImage) -> Result<(), RasterErrors> {
        let pair = self.slot.as_mut().ok_or(RasterErrors::NotLoaded)?;

        let (width, height) = pair.original.dimensions();
        let expected = width * height;
        let found = raster.pixels().len();

        if raster.dimensions() != (width, height) {
            return Err(RasterErrors::DimensionsMisMatch(expected, found));
        }
        pair.current = raster;
        Ok(())
    }
}
