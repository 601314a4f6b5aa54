/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! This module contains two main structs that help in
//! byte reading and byte writing, put here to minimize
//! code reuse between the `oki` format crates.
//!
//! Both operate on borrowed buffers, hence any I/O needed
//! to obtain or persist the bytes is performed once at the
//! boundary by the caller.
use core::fmt::Formatter;

pub use reader::ByteReader;
pub use writer::ByteWriter;

mod reader;
mod writer;

/// Errors that may occur when reading from or writing to
/// a bytestream.
pub enum ByteIoError {
    /// Not enough bytes left in the stream to satisfy a read.
    ///
    /// Arguments are requested length and bytes actually left.
    NotEnoughBytes(usize, usize),
    /// Not enough space left in the buffer to satisfy a write.
    ///
    /// Arguments are requested length and space actually left.
    NotEnoughSpace(usize, usize)
}

impl core::fmt::Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::NotEnoughSpace(expected, found) => {
                writeln!(
                    f,
                    "Not enough space to write {expected} bytes, buffer has {found} left"
                )
            }
        }
    }
}

impl core::fmt::Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}
