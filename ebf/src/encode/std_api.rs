use super::{ebf4_to_vec, ebf8_to_vec, EncodeError, WriteIoSnafu};
use crate::{ebf4_encoded_len, ebf8_encoded_len};
use snafu::ResultExt;
use std::io::Write;

/// Encodes an RGB888 raster as EBF8 and writes it to `w`.
pub fn write_ebf8<W: Write>(
    width: u16,
    height: u16,
    pixels: &[[u8; 3]],
    mut w: W,
) -> Result<(), EncodeError> {
    let mut buf = Vec::with_capacity(ebf8_encoded_len(width, height));
    ebf8_to_vec(width, height, pixels, &mut buf)?;

    w.write_all(&buf).context(WriteIoSnafu)
}

/// Encodes an RGB888 raster as EBF4 and writes it to `w`.
pub fn write_ebf4<W: Write>(
    width: u16,
    height: u16,
    pixels: &[[u8; 3]],
    mut w: W,
) -> Result<(), EncodeError> {
    let mut buf = Vec::with_capacity(ebf4_encoded_len(width, height));
    ebf4_to_vec(width, height, pixels, &mut buf)?;

    w.write_all(&buf).context(WriteIoSnafu)
}
