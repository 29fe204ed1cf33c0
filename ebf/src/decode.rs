use crate::{
    consts::{HEADER_LEN, MAGIC_EBF4, MAGIC_EBF8, PALETTE_LEN},
    ebf4_encoded_len, ebf8_encoded_len, packed_row_len,
    palette::Palette,
    HeaderInfo,
};
use byteorder::{ByteOrder, LittleEndian};
use snafu::{ensure, OptionExt, Snafu};

#[cfg(feature = "alloc")]
mod alloc_api;
#[cfg(feature = "alloc")]
pub use alloc_api::*;

#[derive(Debug, Snafu)]
pub enum DecodeError {
    #[snafu(display("unexpected end of input: need {needed} bytes, {available} available"))]
    UnexpectedEof { needed: usize, available: usize },

    #[snafu(display("invalid magic bytes {found:?}, expected {expected:?}"))]
    InvalidMagic { expected: [u8; 4], found: [u8; 4] },

    #[snafu(display("output buffer too small: need room for {needed} pixels, got {available}"))]
    OutputTooSmall { needed: usize, available: usize },

    #[snafu(display("corrupt palette index {index}"))]
    CorruptIndex { index: u8 },
}

/// Decodes an EBF8 image into a native pixel buffer.
///
/// `output` receives `width * height` native pixel bytes, row-major.
pub fn ebf8_to_slice(data: &[u8], output: &mut [u8]) -> Result<HeaderInfo, DecodeError> {
    let header = parse_header(data, MAGIC_EBF8)?;
    let pixel_count = usize::from(header.width) * usize::from(header.height);

    let needed = ebf8_encoded_len(header.width, header.height);
    ensure!(
        data.len() >= needed,
        UnexpectedEofSnafu {
            needed,
            available: data.len(),
        }
    );
    ensure!(
        output.len() >= pixel_count,
        OutputTooSmallSnafu {
            needed: pixel_count,
            available: output.len(),
        }
    );

    output[..pixel_count].copy_from_slice(&data[HEADER_LEN..needed]);

    Ok(header)
}

/// Decodes an EBF4 image into a native pixel buffer.
///
/// Palette indices are resolved to native pixels; the pad nibble of
/// odd-width scanlines is never interpreted.
pub fn ebf4_to_slice(data: &[u8], output: &mut [u8]) -> Result<HeaderInfo, DecodeError> {
    let header = parse_header(data, MAGIC_EBF4)?;
    let width = usize::from(header.width);
    let pixel_count = width * usize::from(header.height);

    let needed = ebf4_encoded_len(header.width, header.height);
    ensure!(
        data.len() >= needed,
        UnexpectedEofSnafu {
            needed,
            available: data.len(),
        }
    );
    ensure!(
        output.len() >= pixel_count,
        OutputTooSmallSnafu {
            needed: pixel_count,
            available: output.len(),
        }
    );

    if width == 0 {
        return Ok(header);
    }

    let palette = read_palette(data);
    let packed = &data[HEADER_LEN + PALETTE_LEN..needed];
    let row_len = packed_row_len(header.width);

    for (row, out_row) in packed
        .chunks_exact(row_len)
        .zip(output.chunks_exact_mut(width))
    {
        for (x, out) in out_row.iter_mut().enumerate() {
            let index = nibble(row[x / 2], x);
            *out = palette.get(index).context(CorruptIndexSnafu { index })?;
        }
    }

    Ok(header)
}

/// Parses the common 8-byte header. A buffer shorter than the header
/// reports truncation, not a magic mismatch.
fn parse_header(data: &[u8], magic: [u8; 4]) -> Result<HeaderInfo, DecodeError> {
    ensure!(
        data.len() >= HEADER_LEN,
        UnexpectedEofSnafu {
            needed: HEADER_LEN,
            available: data.len(),
        }
    );

    let found = [data[0], data[1], data[2], data[3]];
    ensure!(
        found == magic,
        InvalidMagicSnafu {
            expected: magic,
            found,
        }
    );

    Ok(HeaderInfo {
        width: LittleEndian::read_u16(&data[4..6]),
        height: LittleEndian::read_u16(&data[6..8]),
    })
}

fn read_palette(data: &[u8]) -> Palette {
    let mut entries = [0u8; PALETTE_LEN];
    entries.copy_from_slice(&data[HEADER_LEN..HEADER_LEN + PALETTE_LEN]);

    Palette::from_bytes(entries)
}

/// Extracts the index nibble for column `x` of a packed scanline byte.
#[inline]
const fn nibble(byte: u8, x: usize) -> u8 {
    if x % 2 == 0 {
        byte >> 4
    } else {
        byte & 0x0F
    }
}
