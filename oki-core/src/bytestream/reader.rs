/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::ByteIoError;

/// Encapsulates a simple byte reader with support
/// for endian aware reads
pub struct ByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader for the stream
    pub const fn new(stream: &'a [u8]) -> ByteReader<'a> {
        ByteReader { stream, position: 0 }
    }

    /// Return the number of unread bytes in this stream
    ///
    /// # Example
    /// ```
    /// use oki_core::bytestream::ByteReader;
    /// let mut reader = ByteReader::new(&[1, 2, 3]);
    /// reader.get_u8();
    /// assert_eq!(reader.remaining(), 2);
    /// ```
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Return the position of the next read
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Check if the stream can support a read
    /// of `bytes` more bytes
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.stream.len()
    }

    /// Return true when every byte of the stream has been read
    ///
    /// # Example
    /// ```
    /// use oki_core::bytestream::ByteReader;
    /// let mut reader = ByteReader::new(&[1]);
    /// assert!(!reader.eof());
    /// reader.get_u8();
    /// assert!(reader.eof());
    /// ```
    pub const fn eof(&self) -> bool {
        self.remaining() == 0
    }

    /// Read a single byte from the stream, or return `0`
    /// if the stream is exhausted.
    ///
    /// Should be combined with [`has`](Self::has)
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Read a single byte from the stream, erroring out
    /// if the stream is exhausted
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ByteIoError::NotEnoughBytes(1, 0))
        }
    }

    /// Read `u32` as a big endian integer, erroring out if the
    /// stream cannot support a 4 byte read
    pub fn get_u32_be_err(&mut self) -> Result<u32, ByteIoError> {
        let bytes = self.get_fixed_bytes_or_error::<4>()?;
        Ok(u32::from_be_bytes(bytes))
    }

    /// Read `N` bytes from the stream into a fixed size array,
    /// erroring out if the stream cannot support the read
    ///
    /// # Example
    /// ```
    /// use oki_core::bytestream::ByteReader;
    /// let mut reader = ByteReader::new(b"qoif");
    /// let magic = reader.get_fixed_bytes_or_error::<4>().unwrap();
    /// assert_eq!(&magic, b"qoif");
    /// ```
    pub fn get_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store = [0; N];

        match self.stream.get(self.position..self.position + N) {
            Some(bytes) => {
                byte_store.copy_from_slice(bytes);
                self.position += N;

                Ok(byte_store)
            }
            None => Err(ByteIoError::NotEnoughBytes(N, self.remaining()))
        }
    }

    /// Skip `n` bytes ahead of the stream
    pub fn skip(&mut self, bytes: usize) {
        self.position = self.position.saturating_add(bytes);
    }
}
