/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the `oki` image crates
//!
//! This crate provides a set of small utilities shared by the
//! decoders and encoders under the `oki` umbrella
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - Colorspace information shared by images
//! - Image decoder options
//!
//! This library is `#[no_std]`, the format crates bring in `alloc`
//! themselves for the buffers they return.
//!
//! # Features
//!  - `std`: Implements `std::error::Error` for the error types and
//!     allows use in contexts that expect it.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod bytestream;
pub mod colorspace;
pub mod options;
