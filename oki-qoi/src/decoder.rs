/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::format;
use alloc::vec::Vec;

use log::{error, trace};
use oki_core::bytestream::ByteReader;
use oki_core::colorspace::ColorSpace;
use oki_core::options::DecoderOptions;

use crate::constants::QOI_PIXELS_MAX;
use crate::errors::QoiErrors;
use crate::ops::Op;
use crate::pixel::{Pixel, PixelCache};
use crate::raster::Raster;

#[allow(non_camel_case_types)]
enum QoiColorspace {
    sRGB,
    // SRGB with Linear alpha
    Linear
}

/// A Quite OK Image decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return the uncompressed pixels
///
/// Additional methods are provided that give more
/// details of the compressed image, width and height
/// are accessible after decoding headers
///
/// [`decode_headers`]:QoiDecoder::decode_headers
/// [`decode`]:QoiDecoder::decode
pub struct QoiDecoder<'a> {
    width:             usize,
    height:            usize,
    colorspace:        ColorSpace,
    colorspace_layout: QoiColorspace,
    decoded_headers:   bool,
    stream:            ByteReader<'a>,
    options:           DecoderOptions
}

impl<'a> QoiDecoder<'a> {
    /// Create a new QOI format decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    ///
    /// # Example
    ///
    /// ```no_run
    /// let mut decoder = oki_qoi::QoiDecoder::new(&[]);
    /// // additional code
    /// ```
    pub fn new(data: &'a [u8]) -> QoiDecoder<'a> {
        QoiDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new QOI format decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    /// - `options`: Decoder options that the decoder should respect
    ///
    /// # Example
    /// ```
    /// use oki_core::options::DecoderOptions;
    /// use oki_qoi::QoiDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = QoiDecoder::new_with_options(&[], options);
    /// ```
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> QoiDecoder<'a> {
        QoiDecoder {
            width: 0,
            height: 0,
            colorspace: ColorSpace::RGBA,
            colorspace_layout: QoiColorspace::sRGB,
            decoded_headers: false,
            stream: ByteReader::new(data),
            options
        }
    }

    /// Decode a QOI header storing needed information into
    /// the decoder instance
    ///
    /// # Returns
    ///
    /// - On success: Nothing
    /// - On error: The error encountered when decoding headers,
    ///     an instance of [QoiErrors]
    ///
    /// [QoiErrors]:crate::errors::QoiErrors
    pub fn decode_headers(&mut self) -> Result<(), QoiErrors> {
        // match magic bytes.
        let magic = self.stream.get_fixed_bytes_or_error::<4>()?;

        if &magic != b"qoif" {
            return Err(QoiErrors::WrongMagicBytes);
        }

        let width = self.stream.get_u32_be_err()? as usize;
        let height = self.stream.get_u32_be_err()? as usize;
        let channels = self.stream.get_u8_err()?;
        let colorspace_layout = self.stream.get_u8_err()?;

        if width == 0 || height == 0 {
            return Err(QoiErrors::ZeroDimension);
        }
        if width > self.options.max_width() {
            let msg = format!(
                "Width {} greater than max configured width {}",
                width,
                self.options.max_width()
            );
            return Err(QoiErrors::Generic(msg));
        }
        if height > self.options.max_height() {
            let msg = format!(
                "Height {} greater than max configured height {}",
                height,
                self.options.max_height()
            );
            return Err(QoiErrors::Generic(msg));
        }

        let pixel_count = (width as u64) * (height as u64);

        if pixel_count > QOI_PIXELS_MAX {
            return Err(QoiErrors::TooManyPixels(pixel_count));
        }

        self.colorspace = match channels {
            3 => ColorSpace::RGB,
            4 => ColorSpace::RGBA,
            _ => return Err(QoiErrors::UnknownChannels(channels))
        };
        self.colorspace_layout = match colorspace_layout {
            0 => QoiColorspace::sRGB,
            1 => QoiColorspace::Linear,
            _ => {
                if self.options.strict_mode() {
                    return Err(QoiErrors::UnknownColorspace(colorspace_layout));
                } else {
                    error!("Unknown/invalid colorspace value {colorspace_layout}, expected 0 or 1");
                    QoiColorspace::sRGB
                }
            }
        };
        self.width = width;
        self.height = height;

        trace!("Image width: {:?}", self.width);
        trace!("Image height: {:?}", self.height);
        trace!("Image colorspace: {:?}", self.colorspace);
        self.decoded_headers = true;

        Ok(())
    }

    /// Decode the bytes of a QOI image, returning the
    /// reconstructed raster or the error encountered during decoding
    ///
    /// The opcode stream must decode to exactly `width * height`
    /// pixels, a stream that ends early, a run that overshoots
    /// the count or bytes left over past the last pixel are all
    /// rejected with no partial result.
    ///
    /// # Returns
    /// - On success: The decoded RGBA raster
    /// - On error: An instance of [QoiErrors] which gives a reason why
    ///   the image could not be decoded
    ///
    /// [QoiErrors]:crate::errors::QoiErrors
    pub fn decode(&mut self) -> Result<Raster, QoiErrors> {
        if !self.decoded_headers {
            self.decode_headers()?;
        }

        let pixel_count = self.width * self.height;

        let mut pixels = Vec::with_capacity(pixel_count);
        let mut cache = PixelCache::new();
        // starting pixel
        let mut px = Pixel::opaque_black();

        while pixels.len() < pixel_count {
            let op = Op::read_from(&mut self.stream)?;

            if let Op::Run(length) = op {
                let length = usize::from(length);
                let left = pixel_count - pixels.len();

                if length > left {
                    return Err(QoiErrors::RunTooLong(length, left));
                }
                // repeats of the previous pixel, no cache store
                for _ in 0..length {
                    pixels.push(px);
                }
                continue;
            }

            px = match op {
                Op::Rgb(r, g, b) => Pixel::rgba(r, g, b, px.a),
                Op::Rgba(r, g, b, a) => Pixel::rgba(r, g, b, a),
                Op::Index(slot) => cache.lookup(slot),
                Op::Diff(dr, dg, db) => Pixel::rgba(
                    px.r.wrapping_add(dr),
                    px.g.wrapping_add(dg),
                    px.b.wrapping_add(db),
                    px.a
                ),
                Op::Luma(dg, drg, dbg) => Pixel::rgba(
                    px.r.wrapping_add(dg).wrapping_add(drg),
                    px.g.wrapping_add(dg),
                    px.b.wrapping_add(dg).wrapping_add(dbg),
                    px.a
                ),
                Op::Run(_) => unreachable!()
            };

            pixels.push(px);
            cache.store(px.hash(), px);
        }

        if !self.stream.eof() {
            return Err(QoiErrors::TrailingBytes(self.stream.remaining()));
        }

        trace!("Finished decoding image");

        Ok(Raster::from_parts(self.width, self.height, pixels))
    }

    /// Returns the QOI colorspace or none if the headers haven't been decoded
    ///
    /// The colorspace is taken from the header channel count and can
    /// either be [RGB] or [RGBA], the decoded raster is RGBA in both cases
    ///
    /// [RGB]: oki_core::colorspace::ColorSpace::RGB
    /// [RGBA]: oki_core::colorspace::ColorSpace::RGBA
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.colorspace)
        } else {
            None
        }
    }

    /// Returns whether the header declared the all-linear colorspace
    /// variant, or none if the headers haven't been decoded
    ///
    /// The encoder only ever writes the sRGB with linear alpha variant.
    pub const fn is_linear(&self) -> Option<bool> {
        if self.decoded_headers {
            Some(matches!(self.colorspace_layout, QoiColorspace::Linear))
        } else {
            None
        }
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oki_qoi::QoiDecoder;
    /// let mut decoder = QoiDecoder::new(&[]);
    ///
    /// decoder.decode_headers().unwrap();
    /// // get dimensions now.
    /// let (w, h) = decoder.dimensions().unwrap();
    /// ```
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }
}
