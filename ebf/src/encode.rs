use crate::{
    consts::{MAGIC_EBF4, MAGIC_EBF8, PAD_INDEX},
    ebf4_encoded_len,
    palette::{PaletteBuilder, PaletteOverflowError},
    utils::rgb888_to_rgb222,
};
use alloc::vec::Vec;
use byteorder::{ByteOrder, LittleEndian};
use itertools::Itertools;
use snafu::{ensure, ResultExt, Snafu};

#[cfg(feature = "std")]
mod std_api;
#[cfg(feature = "std")]
pub use std_api::*;

#[derive(Debug, Snafu)]
pub enum EncodeError {
    #[snafu(display(
        "image dimensions {width}x{height} don't match the number of pixels given ({pixel_count})"
    ))]
    InvalidDimensions {
        width: u16,
        height: u16,
        pixel_count: usize,
    },

    #[snafu(display("image is not representable as EBF4: {source}"))]
    PaletteOverflow { source: PaletteOverflowError },

    #[cfg(feature = "std")]
    WriteIo { source: std::io::Error },
}

/// Encodes an RGB888 raster as EBF8, quantizing each pixel.
pub fn ebf8_to_vec(
    width: u16,
    height: u16,
    pixels: &[[u8; 3]],
    w: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    check_dimensions(width, height, pixels.len())?;

    write_header(MAGIC_EBF8, width, height, w);
    w.extend(pixels.iter().map(|&p| rgb888_to_rgb222(p)));

    Ok(())
}

/// Encodes an already-quantized raster as EBF8.
pub fn ebf8_native_to_vec(
    width: u16,
    height: u16,
    pixels: &[u8],
    w: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    check_dimensions(width, height, pixels.len())?;

    write_header(MAGIC_EBF8, width, height, w);
    w.extend_from_slice(pixels);

    Ok(())
}

/// Encodes an RGB888 raster as EBF4, quantizing each pixel first.
pub fn ebf4_to_vec(
    width: u16,
    height: u16,
    pixels: &[[u8; 3]],
    w: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    check_dimensions(width, height, pixels.len())?;

    let native: Vec<u8> = pixels.iter().map(|&p| rgb888_to_rgb222(p)).collect();
    ebf4_native_to_vec(width, height, &native, w)
}

/// Encodes an already-quantized raster as EBF4.
///
/// Builds the palette in first-seen order, then packs two palette indices
/// per byte, scanline by scanline. Odd-width scanlines get a pad index of
/// [`PAD_INDEX`] after the last pixel, so every scanline packs to
/// `ceil(width / 2)` bytes on its own.
pub fn ebf4_native_to_vec(
    width: u16,
    height: u16,
    pixels: &[u8],
    w: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    check_dimensions(width, height, pixels.len())?;

    let builder = PaletteBuilder::scan(pixels).context(PaletteOverflowSnafu)?;

    w.reserve(ebf4_encoded_len(width, height));
    write_header(MAGIC_EBF4, width, height, w);
    w.extend_from_slice(builder.palette().as_bytes());

    if width == 0 {
        return Ok(());
    }
    for row in pixels.chunks_exact(usize::from(width)) {
        pack_row(row, &builder, w);
    }

    Ok(())
}

/// Packs one scanline of palette indices, two per byte, high nibble first.
fn pack_row(row: &[u8], builder: &PaletteBuilder, w: &mut Vec<u8>) {
    let pad = (row.len() % 2 == 1).then_some(PAD_INDEX);
    let indices = row.iter().map(|&pixel| builder.index_of(pixel)).chain(pad);

    w.extend(indices.tuples().map(|(hi, lo)| hi << 4 | lo));
}

fn write_header(magic: [u8; 4], width: u16, height: u16, w: &mut Vec<u8>) {
    let mut dims = [0u8; 4];
    LittleEndian::write_u16(&mut dims[..2], width);
    LittleEndian::write_u16(&mut dims[2..], height);

    w.extend_from_slice(&magic);
    w.extend_from_slice(&dims);
}

fn check_dimensions(width: u16, height: u16, pixel_count: usize) -> Result<(), EncodeError> {
    ensure!(
        usize::from(width) * usize::from(height) == pixel_count,
        InvalidDimensionsSnafu {
            width,
            height,
            pixel_count,
        }
    );

    Ok(())
}
