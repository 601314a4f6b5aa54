/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use oki_core::bytestream::{ByteIoError, ByteReader, ByteWriter};

use crate::constants::{
    QOI_MASK_2, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA, QOI_OP_RUN
};

/// The closed opcode alphabet of the format
///
/// Each variant carries its operands in decoded form, the bias
/// applied on the wire (`+2` for DIFF, `+32`/`+8` for LUMA,
/// `-1` for RUN) lives only in [`write_to`](Op::write_to) and
/// [`read_from`](Op::read_from). Deltas are wrapping 8 bit values,
/// not sign extended integers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Op {
    /// Raw red, green and blue, alpha carried over from the
    /// previous pixel. 4 bytes.
    Rgb(u8, u8, u8),
    /// Raw red, green, blue and alpha. 5 bytes.
    Rgba(u8, u8, u8, u8),
    /// Cache slot index, 0..=63. 1 byte.
    Index(u8),
    /// Wrapped channel deltas from the previous pixel, each
    /// within `[-2, 1]`, alpha unchanged. 1 byte.
    Diff(u8, u8, u8),
    /// Green delta within `[-32, 31]` plus red/blue deltas
    /// relative to it within `[-8, 7]`, alpha unchanged. 2 bytes.
    Luma(u8, u8, u8),
    /// Repeat the previous pixel, length 1..=62. 1 byte.
    Run(u8)
}

impl Op {
    /// Serialize the opcode into the stream
    pub fn write_to(self, stream: &mut ByteWriter) -> Result<(), ByteIoError> {
        match self {
            Op::Rgb(r, g, b) => {
                stream.write_u8_err(QOI_OP_RGB)?;
                stream.write_all(&[r, g, b])
            }
            Op::Rgba(r, g, b, a) => {
                stream.write_u8_err(QOI_OP_RGBA)?;
                stream.write_all(&[r, g, b, a])
            }
            Op::Index(slot) => stream.write_u8_err(QOI_OP_INDEX | slot),
            Op::Diff(dr, dg, db) => stream.write_u8_err(
                QOI_OP_DIFF
                    | dr.wrapping_add(2) << 4
                    | dg.wrapping_add(2) << 2
                    | db.wrapping_add(2)
            ),
            Op::Luma(dg, drg, dbg) => {
                stream.write_u8_err(QOI_OP_LUMA | dg.wrapping_add(32))?;
                stream.write_u8_err(drg.wrapping_add(8) << 4 | dbg.wrapping_add(8))
            }
            Op::Run(length) => stream.write_u8_err(QOI_OP_RUN | (length - 1))
        }
    }

    /// Read the next opcode from the stream
    ///
    /// The 8 bit RGB/RGBA tags shadow the longest RUN encodings,
    /// so they are matched before the 2 bit tags.
    pub fn read_from(stream: &mut ByteReader) -> Result<Op, ByteIoError> {
        let chunk = stream.get_u8_err()?;

        if chunk == QOI_OP_RGB {
            let [r, g, b] = stream.get_fixed_bytes_or_error::<3>()?;
            return Ok(Op::Rgb(r, g, b));
        }
        if chunk == QOI_OP_RGBA {
            let [r, g, b, a] = stream.get_fixed_bytes_or_error::<4>()?;
            return Ok(Op::Rgba(r, g, b, a));
        }

        let op = match chunk & QOI_MASK_2 {
            QOI_OP_INDEX => Op::Index(chunk & 0x3f),
            QOI_OP_DIFF => Op::Diff(
                ((chunk >> 4) & 0x03).wrapping_sub(2),
                ((chunk >> 2) & 0x03).wrapping_sub(2),
                (chunk & 0x03).wrapping_sub(2)
            ),
            QOI_OP_LUMA => {
                let b2 = stream.get_u8_err()?;

                Op::Luma(
                    (chunk & 0x3f).wrapping_sub(32),
                    ((b2 >> 4) & 0x0f).wrapping_sub(8),
                    (b2 & 0x0f).wrapping_sub(8)
                )
            }
            QOI_OP_RUN => Op::Run((chunk & 0x3f) + 1),
            _ => unreachable!()
        };

        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use oki_core::bytestream::{ByteReader, ByteWriter};

    use super::Op;

    fn wire_bytes(op: Op) -> ([u8; 5], usize) {
        let mut buf = [0; 5];
        let mut stream = ByteWriter::new(&mut buf);

        op.write_to(&mut stream).unwrap();
        let len = stream.position();

        (buf, len)
    }

    #[test]
    fn test_tag_layout() {
        assert_eq!(wire_bytes(Op::Index(53)), ([0x35, 0, 0, 0, 0], 1));
        assert_eq!(wire_bytes(Op::Run(62)), ([0xFD, 0, 0, 0, 0], 1));
        // dr = -2, dg = 0, db = 1
        assert_eq!(
            wire_bytes(Op::Diff(0xFE, 0, 1)),
            ([0x40 | 0b00_10_11, 0, 0, 0, 0], 1)
        );
        // dg = -10, drg = 0, dbg = 0
        assert_eq!(
            wire_bytes(Op::Luma(0xF6, 0, 0)),
            ([0x80 | 22, 0x88, 0, 0, 0], 2)
        );
        assert_eq!(wire_bytes(Op::Rgb(1, 2, 3)), ([0xFE, 1, 2, 3, 0], 4));
        assert_eq!(wire_bytes(Op::Rgba(1, 2, 3, 4)), ([0xFF, 1, 2, 3, 4], 5));
    }

    #[test]
    fn test_wire_round_trip() {
        let ops = [
            Op::Rgb(12, 0, 255),
            Op::Rgba(9, 8, 7, 6),
            Op::Index(0),
            Op::Index(63),
            Op::Diff(0xFE, 0xFF, 1),
            Op::Luma(0xE0, 0xF8, 7),
            Op::Run(1),
            Op::Run(62)
        ];

        for op in ops {
            let (buf, len) = wire_bytes(op);
            let mut reader = ByteReader::new(&buf[..len]);

            assert_eq!(Op::read_from(&mut reader).unwrap(), op);
            assert!(reader.eof());
        }
    }

    #[test]
    fn test_truncated_operand_errors() {
        let mut reader = ByteReader::new(&[0xFF, 1, 2]);
        assert!(Op::read_from(&mut reader).is_err());

        let mut reader = ByteReader::new(&[0x80]);
        assert!(Op::read_from(&mut reader).is_err());
    }
}
