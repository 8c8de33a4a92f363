/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel transformation routines for `lumo`
//!
//! This implements the transformations that run against a
//! [`ImageStore`](lumo_raster::store::ImageStore), each as a struct
//! implementing the `OperationsTrait` defined by `lumo-raster`.
//!
//! Every operation validates its arguments in full before writing a
//! single pixel, so a failing call leaves the store byte-for-byte
//! unchanged.
//!
//! # Example
//! - Negate a raster in place
//! ```
//! use lumo_raster::raster::RasterImage;
//! use lumo_raster::store::ImageStore;
//! use lumo_raster::traits::OperationsTrait;
//! use lumo_procs::invert::Negate;
//!
//! let mut store = ImageStore::new();
//! store.load(RasterImage::filled(0xFF10_2030, 100, 100).unwrap());
//! // execute the transformation
//! Negate::new().execute(&mut store).unwrap();
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod box_average;
pub mod brighten;
pub mod extract_channel;
pub mod grayscale;
pub mod invert;
pub mod rect_outline;
