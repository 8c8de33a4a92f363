/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core primitives shared by the lumo family of crates
//!
//! This crate defines the packed ARGB pixel representation and the
//! channel selector used by the raster and the transformation routines.
//!
//! It carries no image logic of its own, only the byte-level layout
//! every other crate agrees on.
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]

pub mod channel;
pub mod color;
