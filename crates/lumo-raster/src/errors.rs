/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when loading and transforming rasters
//!
//! The library never renders user-facing text; hosts are expected to
//! match on the error kind and translate it themselves. The `Debug`
//! output here exists for developers.
use std::fmt::{Debug, Formatter};

/// All possible raster errors that can occur
///
/// This wraps load-state, bounds, argument and codec-boundary failures.
/// Every failing operation returns one of these without having touched
/// the store.
pub enum RasterErrors {
    /// An operation was attempted before a raster was loaded
    NotLoaded,
    /// A pixel access lay outside the raster: `(x, y, width, height)`
    OutOfBounds(usize, usize, usize, usize),
    /// An argument failed validation before any mutation took place
    InvalidArgument(ArgumentErrors),
    /// A wholesale replacement raster did not match the loaded
    /// dimensions, `(expected, found)` in pixels
    DimensionsMisMatch(usize, usize),
    /// Propagated unchanged from an external codec
    DecodeErrors(String)
}

/// Argument validation failures
///
/// Each variant carries the offending value so a host can report it.
pub enum ArgumentErrors {
    /// Kernel sizes below 2 select no neighborhood to average
    KernelSize(usize),
    /// Brightness factors below the supported minimum
    BrightnessFactor(f32),
    /// A rectangle that is degenerate or exceeds the raster,
    /// `(x, y, width, height)`
    RectangleGeometry(usize, usize, usize, usize),
    /// A pixel buffer whose length does not match `width * height`,
    /// `(expected, found)`
    BufferLength(usize, usize),
    /// A raster dimension of zero, `(width, height)`
    ZeroDimension(usize, usize)
}

impl Debug for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLoaded => {
                writeln!(f, "No raster loaded for which we can execute operations")
            }
            Self::OutOfBounds(x, y, width, height) => {
                writeln!(
                    f,
                    "Coordinate ({x},{y}) lies outside of a {width}x{height} raster"
                )
            }
            Self::InvalidArgument(ref error) => writeln!(f, "{error:?}"),
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::DecodeErrors(ref error) => writeln!(f, "Decoding failed: {error}")
        }
    }
}

impl Debug for ArgumentErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KernelSize(found) => {
                writeln!(f, "Kernel size must be greater than 1 but found {found}")
            }
            Self::BrightnessFactor(found) => {
                writeln!(f, "Brightness factor {found} is below the supported minimum")
            }
            Self::RectangleGeometry(x, y, width, height) => {
                writeln!(
                    f,
                    "Rectangle x={x} y={y} width={width} height={height} is degenerate or exceeds the raster"
                )
            }
            Self::BufferLength(expected, found) => {
                writeln!(f, "Expected a buffer of {expected} pixels but found {found}")
            }
            Self::ZeroDimension(width, height) => {
                writeln!(f, "Raster dimensions {width}x{height} must both be non zero")
            }
        }
    }
}

impl From<ArgumentErrors> for RasterErrors {
    fn from(from: ArgumentErrors) -> Self {
        RasterErrors::InvalidArgument(from)
    }
}

impl From<String> for RasterErrors {
    fn from(s: String) -> RasterErrors {
        RasterErrors::DecodeErrors(s)
    }
}
