/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// An RGBA pixel with 8 bits per channel
///
/// Interchangeable with a packed 32 bit integer via
/// [`pack`](Pixel::pack) and [`unpack`](Pixel::unpack), equality is
/// bytewise with no further ordering semantics.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Pixel {
    /// Create a new pixel
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel { r, g, b, a }
    }

    /// Create an RGB pixel with a full (255) alpha channel
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Pixel {
        Pixel::rgba(r, g, b, 255)
    }

    /// The starting value of the previous-pixel register and of
    /// every pixel cache slot
    #[inline]
    pub const fn opaque_black() -> Pixel {
        Pixel::rgba(0, 0, 0, 255)
    }

    /// Hash the pixel's RGBA components into a cache slot index
    ///
    /// The formula is fixed by the format, encoder and decoder must
    /// derive identical slots from identical pixel histories for
    /// INDEX opcodes to be portable.
    #[inline]
    pub const fn hash(self) -> u8 {
        ((self.r as usize * 3
            + self.g as usize * 5
            + self.b as usize * 7
            + self.a as usize * 11)
            % CACHE_SIZE) as u8
    }

    /// Pack the pixel into a 32 bit RGBA integer
    #[inline]
    pub const fn pack(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    /// Unpack a pixel from a 32 bit RGBA integer
    #[inline]
    pub const fn unpack(packed: u32) -> Pixel {
        let [r, g, b, a] = packed.to_be_bytes();
        Pixel { r, g, b, a }
    }
}

impl From<[u8; 4]> for Pixel {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Pixel {
        Pixel { r, g, b, a }
    }
}

impl From<Pixel> for [u8; 4] {
    #[inline]
    fn from(px: Pixel) -> [u8; 4] {
        [px.r, px.g, px.b, px.a]
    }
}

/// Number of slots in the pixel cache
pub const CACHE_SIZE: usize = 64;

/// The running 64 slot pixel cache shared by the encode and
/// decode state machines
///
/// A lossy associative array, a later pixel hashing to an occupied
/// slot silently overwrites it. Each encode or decode invocation
/// owns a fresh instance, the cache is never shared across calls.
pub struct PixelCache {
    slots: [Pixel; CACHE_SIZE]
}

impl PixelCache {
    /// Create a cache with every slot holding opaque black
    pub const fn new() -> PixelCache {
        PixelCache {
            slots: [Pixel::opaque_black(); CACHE_SIZE]
        }
    }

    /// Fill all slots with opaque black again
    pub fn reset(&mut self) {
        self.slots = [Pixel::opaque_black(); CACHE_SIZE];
    }

    /// Read the pixel stored at `slot`
    #[inline]
    pub fn lookup(&self, slot: u8) -> Pixel {
        self.slots[usize::from(slot) & (CACHE_SIZE - 1)]
    }

    /// Store `px` at `slot`, overwriting whatever occupied it
    #[inline]
    pub fn store(&mut self, slot: u8, px: Pixel) {
        self.slots[usize::from(slot) & (CACHE_SIZE - 1)] = px;
    }
}

impl Default for PixelCache {
    fn default() -> PixelCache {
        PixelCache::new()
    }
}
