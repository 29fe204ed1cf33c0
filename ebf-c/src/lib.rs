use ebf::decode;

/// Decodes an EBF8 image from the given input buffer into the given output
/// buffer, which receives one native pixel byte per pixel, row-major.
///
/// - `input`: Pointer to the encoded file contents
/// - `input_len`: Length of the input buffer, in bytes
/// - `output`: Pointer to the framebuffer
/// - `output_len`: Length of the output buffer, in bytes
///
/// Returns the number of pixels written to the output buffer, or -1 if the
/// input is malformed or the output buffer is too small.
///
/// # Safety
///
/// `input` and `output` must be valid for reads and writes of the given
/// lengths.
#[no_mangle]
pub unsafe extern "C" fn ebf_decode8(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> isize {
    let input = unsafe { core::slice::from_raw_parts(input, input_len) };
    let output = unsafe { core::slice::from_raw_parts_mut(output, output_len) };

    match decode::ebf8_to_slice(input, output) {
        Ok(header) => (usize::from(header.width) * usize::from(header.height)) as isize,
        Err(_) => -1,
    }
}

/// Decodes an EBF4 image from the given input buffer into the given output
/// buffer, which receives one native pixel byte per pixel, row-major.
/// Palette indices are resolved during the decode; the scanline pad nibbles
/// of odd-width images are skipped.
///
/// - `input`: Pointer to the encoded file contents
/// - `input_len`: Length of the input buffer, in bytes
/// - `output`: Pointer to the framebuffer
/// - `output_len`: Length of the output buffer, in bytes
///
/// Returns the number of pixels written to the output buffer, or -1 if the
/// input is malformed or the output buffer is too small.
///
/// # Safety
///
/// `input` and `output` must be valid for reads and writes of the given
/// lengths.
#[no_mangle]
pub unsafe extern "C" fn ebf_decode4(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> isize {
    let input = unsafe { core::slice::from_raw_parts(input, input_len) };
    let output = unsafe { core::slice::from_raw_parts_mut(output, output_len) };

    match decode::ebf4_to_slice(input, output) {
        Ok(header) => (usize::from(header.width) * usize::from(header.height)) as isize,
        Err(_) => -1,
    }
}
