/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use crate::constants::QOI_PIXELS_MAX;
use crate::errors::QoiEncodeErrors;
use crate::pixel::Pixel;

/// An uncompressed RGBA raster
///
/// Pixels are stored in row-major order and the buffer length is
/// always exactly `width * height`, the constructor rejects
/// anything else. This is the only shape the codec consumes and
/// produces, colorspace conversion or bit depth normalization is
/// up to the caller.
pub struct Raster {
    width:  usize,
    height: usize,
    pixels: Vec<Pixel>
}

impl Raster {
    /// Create a raster after validating its dimensions
    ///
    /// # Errors
    /// - [`ZeroDimension`](QoiEncodeErrors::ZeroDimension): a dimension is zero
    /// - [`TooLargeDimensions`](QoiEncodeErrors::TooLargeDimensions): a dimension
    ///   does not fit the 32 bit header field
    /// - [`TooManyPixels`](QoiEncodeErrors::TooManyPixels): `width * height`
    ///   exceeds the 400 million pixel allocation cap
    /// - [`PixelCountMismatch`](QoiEncodeErrors::PixelCountMismatch): buffer
    ///   length is not `width * height`
    ///
    /// # Example
    /// ```
    /// use oki_qoi::{Pixel, Raster};
    ///
    /// let raster = Raster::new(2, 1, vec![Pixel::rgb(0, 0, 0); 2]).unwrap();
    /// assert_eq!(raster.width(), 2);
    ///
    /// assert!(Raster::new(0, 1, vec![]).is_err());
    /// ```
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Raster, QoiEncodeErrors> {
        if width == 0 || height == 0 {
            return Err(QoiEncodeErrors::ZeroDimension);
        }
        if (width as u64) > u64::from(u32::MAX) {
            return Err(QoiEncodeErrors::TooLargeDimensions(width));
        }
        if (height as u64) > u64::from(u32::MAX) {
            return Err(QoiEncodeErrors::TooLargeDimensions(height));
        }

        let count = (width as u64) * (height as u64);

        if count > QOI_PIXELS_MAX {
            return Err(QoiEncodeErrors::TooManyPixels(count));
        }
        if pixels.len() as u64 != count {
            return Err(QoiEncodeErrors::PixelCountMismatch(
                count as usize,
                pixels.len()
            ));
        }

        Ok(Raster {
            width,
            height,
            pixels
        })
    }

    /// Build a raster whose invariants were already enforced
    /// by the decoder header checks.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<Pixel>) -> Raster {
        debug_assert_eq!(width * height, pixels.len());

        Raster {
            width,
            height,
            pixels
        }
    }

    /// Width of the raster in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the raster in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The pixels in row-major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Consume the raster returning the pixel buffer
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}
