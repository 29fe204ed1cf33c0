//! Codec for the EBF8 and EBF4 packed-pixel image formats.
//!
//! Both formats carry images for 6-bit RGB framebuffers, where a pixel is a
//! single byte with two fixed marker bits on top:
//!
//! ```plain
//! .- native pixel ----------.
//! |  7  6  5  4  3  2  1  0 |
//! |-------+-----+-----+-----|
//! |  1  1 |  b  |  g  |  r  |
//! `-------------------------`
//! ```
//!
//! - 2-bit marker b11, set on every pixel this codec produces
//! - 2 bits per blue, green, and red channel, quantized from 8-bit color by
//!   dropping the low 6 bits of each channel
//!
//! # EBF8
//!
//! One native pixel byte per pixel, row-major:
//!
//! - 4-byte magic: `EBF8`
//! - u16le width
//! - u16le height
//! - `width * height` native pixel bytes
//!
//! # EBF4
//!
//! Palette-indexed, two pixels per byte:
//!
//! - 4-byte magic: `EBF4`
//! - u16le width
//! - u16le height
//! - 16 palette entries, one native pixel byte each; unused slots hold
//!   [`consts::UNUSED_PALETTE_ENTRY`]
//! - `height * ceil(width / 2)` packed index bytes, two 4-bit palette
//!   indices per byte, high nibble first
//!
//! Scanlines pack independently: when the width is odd, a pad index of
//! [`consts::PAD_INDEX`] is appended after the last pixel of each scanline,
//! so a scanline always packs to `ceil(width / 2)` bytes and no packed byte
//! spans two scanlines. Images with more than 16 distinct quantized colors
//! are not representable as EBF4 and fail to encode with
//! [`encode::EncodeError::PaletteOverflow`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod decode;
#[cfg(feature = "alloc")]
pub mod encode;
pub mod palette;
pub mod utils;

pub use palette::{Palette, PaletteBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInfo {
    pub width: u16,
    pub height: u16,
}

pub mod consts {
    /// Magic bytes of an EBF8 file.
    pub const MAGIC_EBF8: [u8; 4] = *b"EBF8";

    /// Magic bytes of an EBF4 file.
    pub const MAGIC_EBF4: [u8; 4] = *b"EBF4";

    /// Length of the common header: magic, u16le width, u16le height.
    pub const HEADER_LEN: usize = 8;

    /// Number of palette entries in an EBF4 file.
    pub const PALETTE_LEN: usize = 16;

    /// Marker bits [7:6] of every native pixel.
    pub const PIXEL_MARKER: u8 = 0xC0;

    /// Native pixel stored in unused palette slots. Quantized magenta, so a
    /// stray lookup shows up on screen instead of blending in.
    pub const UNUSED_PALETTE_ENTRY: u8 = 0xF3;

    /// Index appended after the last pixel of an odd-width scanline.
    pub const PAD_INDEX: u8 = 15;
}

/// Encoded size of an EBF8 file with the given dimensions.
pub const fn ebf8_encoded_len(width: u16, height: u16) -> usize {
    consts::HEADER_LEN + width as usize * height as usize
}

/// Encoded size of an EBF4 file with the given dimensions.
pub const fn ebf4_encoded_len(width: u16, height: u16) -> usize {
    consts::HEADER_LEN + consts::PALETTE_LEN + packed_row_len(width) * height as usize
}

/// Packed bytes per EBF4 scanline: `ceil(width / 2)`.
pub const fn packed_row_len(width: u16) -> usize {
    (width as usize + 1) / 2
}
