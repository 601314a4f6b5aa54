/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoding and encoding the Quite OK Image format
//!
//! The format stores RGBA images losslessly as a 14 byte header
//! followed by a stream of six byte-oriented opcodes sharing a
//! 64 entry pixel cache between the encoder and the decoder.
//!
//! # Features
//! - Decoding and encoding
//! - `no_std`
//! - Typed errors, no panics on malformed input
//!
//! ## `no_std`
//! You can use `no_std` with the alloc feature to compile for `no_std` endpoints
//!
//! # Example
//! ```
//! use oki_qoi::{Pixel, Raster};
//!
//! let raster = Raster::new(2, 2, vec![Pixel::rgb(255, 0, 0); 4]).unwrap();
//! let bytes = oki_qoi::encode(&raster).unwrap();
//! let decoded = oki_qoi::decode(&bytes).unwrap();
//! assert_eq!(raster.pixels(), decoded.pixels());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use decoder::QoiDecoder;
pub use encoder::QoiEncoder;
pub use errors::{QoiEncodeErrors, QoiErrors};
pub use oki_core;
pub use pixel::{Pixel, PixelCache};
pub use raster::Raster;

mod constants;
mod decoder;
mod encoder;
mod errors;
mod ops;
mod pixel;
mod raster;

use alloc::vec::Vec;

/// Decode a QOI byte buffer into a raster of RGBA pixels
///
/// This is the container level entry point, header byte order
/// handling happens inside it. Use [`QoiDecoder`] directly when
/// decode limits or header-only decoding are needed.
pub fn decode(data: &[u8]) -> Result<Raster, QoiErrors> {
    QoiDecoder::new(data).decode()
}

/// Encode a raster of RGBA pixels into a QOI byte buffer
///
/// The header is written with 4 channels and the sRGB with
/// linear alpha colorspace tag.
pub fn encode(raster: &Raster) -> Result<Vec<u8>, QoiEncodeErrors> {
    QoiEncoder::new(raster).encode()
}
