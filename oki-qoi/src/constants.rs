/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub const QOI_OP_INDEX: u8 = 0x00;
// 00xxxxxx
pub const QOI_OP_DIFF: u8 = 0x40;
// 01xxxxxx
pub const QOI_OP_LUMA: u8 = 0x80;
// 10xxxxxx
pub const QOI_OP_RUN: u8 = 0xc0;
// 11xxxxxx
pub const QOI_OP_RGB: u8 = 0xfe;
// 11111110
pub const QOI_OP_RGBA: u8 = 0xff; // 11111111

pub const QOI_MASK_2: u8 = 0xc0; // (11)000000

pub const QOI_MAGIC: u32 = u32::from_be_bytes(*b"qoif");
pub const QOI_HEADER_SIZE: usize = 14;
/// Longest run a single RUN opcode can carry, lengths 63 and 64
/// would collide with the RGB and RGBA opcode bytes.
pub const QOI_MAX_RUN: u8 = 62;
/// Refuse to allocate rasters above this pixel count.
pub const QOI_PIXELS_MAX: u64 = 400_000_000;
