use ebf::decode::{self, DecodeError};

#[test]
fn empty_buffer() {
    let mut out = Vec::new();
    let err = decode::ebf8_to_vec(&[], &mut out).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnexpectedEof {
            needed: 8,
            available: 0,
        }
    ));
}

#[test]
fn magic_only_buffer() {
    let mut out = Vec::new();
    let err = decode::ebf4_to_vec(b"EBF4", &mut out).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnexpectedEof {
            needed: 8,
            available: 4,
        }
    ));
}

#[test]
fn wrong_magic() {
    let data = [b'B', b'M', b'P', b'!', 2, 0, 1, 0, 0xC0, 0xC0];
    let mut out = Vec::new();
    let err = decode::ebf8_to_vec(&data, &mut out).unwrap_err();
    match err {
        DecodeError::InvalidMagic { expected, found } => {
            assert_eq!(expected, *b"EBF8");
            assert_eq!(found, *b"BMP!");
        }
        other => panic!("expected invalid magic, got {other:?}"),
    }
}

#[test]
fn mismatched_format_magic() {
    // valid EBF8 data handed to the EBF4 decoder
    let mut encoded = Vec::new();
    ebf::encode::ebf8_to_vec(1, 1, &[[0, 0, 0]], &mut encoded).unwrap();

    let mut out = Vec::new();
    let err = decode::ebf4_to_vec(&encoded, &mut out).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidMagic { .. }));
}

#[test]
fn truncated_pixel_data() {
    let mut encoded = Vec::new();
    ebf::encode::ebf8_to_vec(3, 2, &[[9, 9, 9]; 6], &mut encoded).unwrap();
    encoded.pop();

    let mut out = Vec::new();
    let err = decode::ebf8_to_vec(&encoded, &mut out).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnexpectedEof {
            needed: 14,
            available: 13,
        }
    ));
}

#[test]
fn truncated_palette() {
    // header declares 1x1 but the palette block is cut short
    let data = [b'E', b'B', b'F', b'4', 1, 0, 1, 0, 0xC0, 0xC1, 0xC2];
    let mut out = Vec::new();
    let err = decode::ebf4_to_vec(&data, &mut out).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnexpectedEof {
            needed: 25,
            available: 11,
        }
    ));
}

#[test]
fn truncated_packed_data() {
    let mut encoded = Vec::new();
    ebf::encode::ebf4_to_vec(2, 2, &[[255, 0, 0]; 4], &mut encoded).unwrap();
    encoded.pop();

    let mut out = Vec::new();
    let err = decode::ebf4_to_vec(&encoded, &mut out).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnexpectedEof {
            needed: 26,
            available: 25,
        }
    ));

    let mut out = [0u8; 4];
    let err = decode::ebf4_to_slice(&encoded, &mut out).unwrap_err();
    assert!(matches!(err, DecodeError::UnexpectedEof { .. }));
}
