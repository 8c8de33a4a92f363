/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits for transformations and the codec boundary
use crate::errors::RasterErrors;
use crate::raster::RasterImage;
use crate::store::ImageStore;

/// This encapsulates a store-mutating transformation
///
/// All operations that can be queued on a
/// [`TransformEngine`](crate::engine::TransformEngine) implement this
/// trait. An operation validates its arguments in full before writing
/// anything, so a failing execute leaves both rasters untouched.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on a store known to be loaded
    ///
    /// # Errors
    /// Any operation error is propagated to the caller
    fn execute_impl(&self, store: &mut ImageStore) -> Result<(), RasterErrors>;

    /// Execute the operation, gating on load state first
    ///
    /// # Errors
    /// - [`RasterErrors::NotLoaded`] when nothing has been loaded yet
    /// - Anything `execute_impl` returns
    fn execute(&self, store: &mut ImageStore) -> Result<(), RasterErrors> {
        if !store.is_loaded() {
            return Err(RasterErrors::NotLoaded);
        }
        self.execute_impl(store)
    }
}

/// Encapsulates the decode side of the codec boundary
///
/// The store consumes one already decoded raster per load; anything
/// that can produce such a raster, a decoder wrapper or the raster
/// itself, can be passed to
/// [`ImageStore::load_from`](crate::store::ImageStore::load_from).
pub trait IntoRaster {
    /// Consume self and produce a decoded raster
    ///
    /// # Errors
    /// Decoder failures surface as [`RasterErrors::DecodeErrors`]
    fn into_raster(self) -> Result<RasterImage, RasterErrors>;
}

impl IntoRaster for RasterImage {
    fn into_raster(self) -> Result<RasterImage, RasterErrors> {
        Ok(self)
    }
}
