/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::ByteIoError;

/// Encapsulates a simple byte writer with
/// support for endian aware writes
pub struct ByteWriter<'a> {
    buffer:   &'a mut [u8],
    position: usize
}

impl<'a> ByteWriter<'a> {
    /// Create a new writer for the stream
    pub fn new(data: &'a mut [u8]) -> ByteWriter<'a> {
        ByteWriter {
            buffer:   data,
            position: 0
        }
    }

    /// Return the number of unwritten bytes in this stream
    ///
    /// # Example
    /// ```
    /// use oki_core::bytestream::ByteWriter;
    /// let mut storage = [0; 10];
    ///
    /// let writer = ByteWriter::new(&mut storage);
    /// assert_eq!(writer.bytes_left(), 10); // no bytes were written
    /// ```
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use oki_core::bytestream::ByteWriter;
    /// let mut stream = ByteWriter::new(&mut []);
    /// assert_eq!(stream.position(), 0);
    /// ```
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Check if the byte writer can support
    /// the following write
    ///
    /// # Example
    /// ```
    /// use oki_core::bytestream::ByteWriter;
    /// let mut data = [0; 10];
    /// let mut stream = ByteWriter::new(&mut data);
    /// assert!(stream.has(5));
    /// assert!(!stream.has(100));
    /// ```
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.buffer.len()
    }

    /// Write a single byte into the bytestream or error out
    /// if there is not enough space
    ///
    /// # Example
    /// ```
    /// use oki_core::bytestream::ByteWriter;
    /// let mut buf = [0; 10];
    /// let mut stream = ByteWriter::new(&mut buf);
    /// assert!(stream.write_u8_err(34).is_ok());
    /// ```
    /// No space
    /// ```
    /// use oki_core::bytestream::ByteWriter;
    /// let mut stream = ByteWriter::new(&mut []);
    /// assert!(stream.write_u8_err(32).is_err());
    /// ```
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ByteIoError> {
        match self.buffer.get_mut(self.position) {
            Some(m_byte) => {
                self.position += 1;
                *m_byte = byte;

                Ok(())
            }
            None => Err(ByteIoError::NotEnoughSpace(1, 0))
        }
    }

    /// Write a single byte in the stream or don't write
    /// anything if the buffer is full and cannot support the write
    ///
    /// Should be combined with [`has`](Self::has)
    pub fn write_u8(&mut self, byte: u8) {
        if let Some(m_byte) = self.buffer.get_mut(self.position) {
            self.position += 1;
            *m_byte = byte;
        }
    }

    /// Write `u32` as a big endian integer, erroring out if the
    /// buffer cannot support a 4 byte write
    pub fn write_u32_be_err(&mut self, value: u32) -> Result<(), ByteIoError> {
        self.write_all(&value.to_be_bytes())
    }

    /// Write the whole of `data` into the stream, erroring out
    /// if the buffer cannot fit it
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), ByteIoError> {
        match self.buffer.get_mut(self.position..self.position + data.len()) {
            Some(m_bytes) => {
                m_bytes.copy_from_slice(data);
                self.position += data.len();

                Ok(())
            }
            None => Err(ByteIoError::NotEnoughSpace(data.len(), self.bytes_left()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ByteWriter;

    #[test]
    fn test_big_endian_write() {
        let mut buf = [0; 6];
        let mut writer = ByteWriter::new(&mut buf);

        writer.write_u32_be_err(3).unwrap();
        writer.write_u8_err(0xAB).unwrap();

        assert_eq!(writer.position(), 5);
        assert_eq!(&buf[..5], &[0x00, 0x00, 0x00, 0x03, 0xAB]);
    }

    #[test]
    fn test_overflowing_write_errors() {
        let mut buf = [0; 2];
        let mut writer = ByteWriter::new(&mut buf);

        assert!(writer.write_all(&[1, 2, 3]).is_err());
        // a failed write leaves the buffer untouched
        assert_eq!(writer.position(), 0);
    }
}
