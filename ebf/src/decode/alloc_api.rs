use super::{nibble, parse_header, read_palette, CorruptIndexSnafu, DecodeError, UnexpectedEofSnafu};
use crate::{
    consts::{HEADER_LEN, MAGIC_EBF4, MAGIC_EBF8, PALETTE_LEN},
    ebf4_encoded_len, ebf8_encoded_len, packed_row_len,
    utils::rgb222_to_rgb888,
    HeaderInfo,
};
use alloc::vec::Vec;
use snafu::{ensure, OptionExt};

/// Decodes an EBF8 image, expanding every pixel to RGB888.
pub fn ebf8_to_vec(data: &[u8], w: &mut Vec<[u8; 3]>) -> Result<HeaderInfo, DecodeError> {
    let header = parse_header(data, MAGIC_EBF8)?;

    let needed = ebf8_encoded_len(header.width, header.height);
    ensure!(
        data.len() >= needed,
        UnexpectedEofSnafu {
            needed,
            available: data.len(),
        }
    );

    w.extend(data[HEADER_LEN..needed].iter().map(|&p| rgb222_to_rgb888(p)));

    Ok(header)
}

/// Decodes an EBF4 image, resolving palette indices and expanding every
/// pixel to RGB888.
pub fn ebf4_to_vec(data: &[u8], w: &mut Vec<[u8; 3]>) -> Result<HeaderInfo, DecodeError> {
    let header = parse_header(data, MAGIC_EBF4)?;
    let width = usize::from(header.width);

    let needed = ebf4_encoded_len(header.width, header.height);
    ensure!(
        data.len() >= needed,
        UnexpectedEofSnafu {
            needed,
            available: data.len(),
        }
    );

    if width == 0 {
        return Ok(header);
    }

    let palette = read_palette(data);
    let packed = &data[HEADER_LEN + PALETTE_LEN..needed];
    let row_len = packed_row_len(header.width);

    w.reserve(width * usize::from(header.height));
    for row in packed.chunks_exact(row_len) {
        for x in 0..width {
            let index = nibble(row[x / 2], x);
            let pixel = palette.get(index).context(CorruptIndexSnafu { index })?;
            w.push(rgb222_to_rgb888(pixel));
        }
    }

    Ok(header)
}
