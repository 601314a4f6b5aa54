/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
/// Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};

use oki_core::bytestream::ByteIoError;

/// Possible errors that may occur during decoding
pub enum QoiErrors {
    /// The image does not start with QOI magic bytes `qoif`
    ///
    /// Indicates that image is not a qoi file
    WrongMagicBytes,
    /// The header contains an invalid channel number
    ///
    /// The only supported values are `3` and `4`
    UnknownChannels(u8),
    /// The header contains an invalid colorspace value
    ///
    /// This should be `0` or `1`
    /// but it can be ignored if strict mode is set to false
    UnknownColorspace(u8),
    /// The header declares a zero width or height
    ZeroDimension,
    /// The header declares more pixels than the decoder
    /// is willing to allocate
    TooManyPixels(u64),
    /// A RUN opcode would produce more pixels than the
    /// header declared
    ///
    /// Arguments are the run length and the pixels still expected
    RunTooLong(usize, usize),
    /// Bytes are left in the stream after the declared pixel
    /// count was reached
    TrailingBytes(usize),
    /// Generic message
    Generic(String),
    /// Generic message that does not need heap allocation
    GenericStatic(&'static str),
    /// An underlying bytestream read failed, e.g. the opcode
    /// stream ended before the declared pixel count was reached
    IoErrors(ByteIoError)
}

impl Debug for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiErrors::WrongMagicBytes => {
                writeln!(f, "Wrong magic bytes, expected `qoif` as image start")
            }
            QoiErrors::UnknownChannels(channel) => {
                writeln!(
                    f,
                    "Unknown channel number {channel}, expected either 3 or 4"
                )
            }
            QoiErrors::UnknownColorspace(colorspace) => {
                writeln!(
                    f,
                    "Unknown colorspace number {colorspace}, expected either 0 or 1"
                )
            }
            QoiErrors::ZeroDimension => {
                writeln!(f, "Width and height must both be greater than zero")
            }
            QoiErrors::TooManyPixels(count) => {
                writeln!(
                    f,
                    "Pixel count {count} is above the configured maximum pixel count"
                )
            }
            QoiErrors::RunTooLong(run, left) => {
                writeln!(
                    f,
                    "Run of length {run} overflows the image, only {left} pixels left"
                )
            }
            QoiErrors::TrailingBytes(count) => {
                writeln!(f, "{count} bytes left in stream after the last pixel")
            }
            QoiErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            QoiErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            QoiErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

impl From<&'static str> for QoiErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

impl From<ByteIoError> for QoiErrors {
    fn from(value: ByteIoError) -> Self {
        QoiErrors::IoErrors(value)
    }
}

/// Errors encountered during encoding
pub enum QoiEncodeErrors {
    /// A raster dimension cannot be encoded into the
    /// 32 bit header field
    TooLargeDimensions(usize),
    /// The raster has a zero width or height
    ZeroDimension,
    /// The raster holds more pixels than the encoder
    /// is willing to work with
    TooManyPixels(u64),
    /// The pixel buffer length does not match `width * height`
    ///
    /// Arguments are the expected and the found pixel count
    PixelCountMismatch(usize, usize),

    IoError(ByteIoError)
}

impl Debug for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimension {found}, QOI can only encode dimensions less than {}",
                    u32::MAX
                )
            }
            QoiEncodeErrors::ZeroDimension => {
                writeln!(f, "Width and height must both be greater than zero")
            }
            QoiEncodeErrors::TooManyPixels(count) => {
                writeln!(
                    f,
                    "Pixel count {count} is above the configured maximum pixel count"
                )
            }
            QoiEncodeErrors::PixelCountMismatch(expected, found) => {
                writeln!(
                    f,
                    "Expected {expected} pixels from the dimensions but the buffer holds {found}"
                )
            }
            QoiEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QoiEncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for QoiErrors {}

impl From<ByteIoError> for QoiEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        Self::IoError(value)
    }
}
