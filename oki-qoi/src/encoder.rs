/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use oki_core::bytestream::ByteWriter;

use crate::constants::{QOI_HEADER_SIZE, QOI_MAGIC, QOI_MAX_RUN};
use crate::errors::QoiEncodeErrors;
use crate::ops::Op;
use crate::pixel::{Pixel, PixelCache};
use crate::raster::Raster;

/// A Quite OK Image encoder
///
/// Consumes a validated [`Raster`] and produces the 14 byte header
/// followed by the opcode stream. The header is always written with
/// 4 channels and the sRGB with linear alpha colorspace tag.
///
/// Encoding is deterministic, the same raster always yields byte
/// identical output.
///
/// # Example
/// - Encode a 100 by 100 image
///
/// ```
/// use oki_qoi::{Pixel, QoiEncoder, QoiEncodeErrors, Raster};
///
/// const W: usize = 100;
/// const H: usize = 100;
///
/// fn main() -> Result<(), QoiEncodeErrors> {
///     let pixels = (0..W * H).map(|i| Pixel::rgb(i as u8, 0, 0)).collect();
///     let raster = Raster::new(W, H, pixels)?;
///     let bytes = QoiEncoder::new(&raster).encode()?;
///     // write bytes, or do something
///     Ok(())
/// }
/// ```
pub struct QoiEncoder<'a> {
    raster: &'a Raster
}

impl<'a> QoiEncoder<'a> {
    /// Create a new encoder which will encode the raster
    pub const fn new(raster: &'a Raster) -> QoiEncoder<'a> {
        QoiEncoder { raster }
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    ///
    /// Worst case is every pixel taking a 5 byte RGBA opcode.
    fn max_size(&self) -> usize {
        self.raster.width() * self.raster.height() * 5 + QOI_HEADER_SIZE
    }

    fn encode_headers(&self, writer: &mut ByteWriter) -> Result<(), QoiEncodeErrors> {
        // qoif
        writer.write_all(&QOI_MAGIC.to_be_bytes())?;

        // dimensions were confirmed to fit at raster construction
        writer.write_u32_be_err(self.raster.width() as u32)?;
        writer.write_u32_be_err(self.raster.height() as u32)?;
        // channels, the codec always works on RGBA
        writer.write_u8_err(4)?;
        // colorspace, sRGB with linear alpha
        writer.write_u8_err(0)?;

        Ok(())
    }

    /// Encode the raster, returning the compressed bytes or the
    /// error encountered during encoding
    ///
    /// Either the whole stream is produced or an error is returned,
    /// there is no partial output.
    pub fn encode(&self) -> Result<Vec<u8>, QoiEncodeErrors> {
        let mut encoded_data = vec![0; self.max_size()];

        let mut stream = ByteWriter::new(&mut encoded_data);

        self.encode_headers(&mut stream)?;

        let mut cache = PixelCache::new();
        // starting pixel
        let mut px_prev = Pixel::opaque_black();

        let mut run: u8 = 0;

        for &px in self.raster.pixels() {
            // a pixel equal to its predecessor always extends the run,
            // even when it would also be a cache hit
            if px == px_prev {
                run += 1;

                if run == QOI_MAX_RUN {
                    Op::Run(run).write_to(&mut stream)?;
                    run = 0;
                }
                continue;
            }

            if run > 0 {
                Op::Run(run).write_to(&mut stream)?;
                run = 0;
            }

            let slot = px.hash();

            if cache.lookup(slot) == px {
                Op::Index(slot).write_to(&mut stream)?;
            } else {
                cache.store(slot, px);

                let op = if px.a == px_prev.a {
                    let vr = px.r.wrapping_sub(px_prev.r);
                    let vg = px.g.wrapping_sub(px_prev.g);
                    let vb = px.b.wrapping_sub(px_prev.b);

                    let vg_r = vr.wrapping_sub(vg);
                    let vg_b = vb.wrapping_sub(vg);

                    if !(2..=253).contains(&vr)
                        && !(2..=253).contains(&vg)
                        && !(2..=253).contains(&vb)
                    {
                        Op::Diff(vr, vg, vb)
                    } else if !(8..=247).contains(&vg_r)
                        && !(32..=223).contains(&vg)
                        && !(8..=247).contains(&vg_b)
                    {
                        Op::Luma(vg, vg_r, vg_b)
                    } else {
                        Op::Rgb(px.r, px.g, px.b)
                    }
                } else {
                    Op::Rgba(px.r, px.g, px.b, px.a)
                };

                op.write_to(&mut stream)?;
            }

            px_prev = px;
        }
        if run > 0 {
            Op::Run(run).write_to(&mut stream)?;
        }
        // done
        let len = stream.position();
        // reduce the length to be the expected value
        encoded_data.truncate(len);

        Ok(encoded_data)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{Pixel, QoiDecoder, QoiEncoder, Raster};

    #[test]
    fn test_qoi_encode_decode_rgba() {
        const W: usize = 100;
        const H: usize = 100;

        let pixels: Vec<Pixel> = (0..W * H)
            .map(|i| Pixel::rgba(i as u8, (i / 3) as u8, (i / 7) as u8, (i % 5) as u8))
            .collect();
        let raster = Raster::new(W, H, pixels).unwrap();

        let encoded = QoiEncoder::new(&raster).encode().unwrap();

        let decoded = QoiDecoder::new(&encoded).decode().unwrap();
        assert_eq!(raster.pixels(), decoded.pixels());
    }

    #[test]
    fn test_qoi_encode_deterministic() {
        const W: usize = 64;
        const H: usize = 32;

        let pixels: Vec<Pixel> = (0..W * H).map(|i| Pixel::rgb(i as u8, i as u8, 0)).collect();
        let raster = Raster::new(W, H, pixels).unwrap();

        let first = QoiEncoder::new(&raster).encode().unwrap();
        let second = QoiEncoder::new(&raster).encode().unwrap();

        assert_eq!(first, second);
    }
}
