//! Integration tests for varnum
//!
//! These tests verify end-to-end functionality and wire compatibility.

use proptest::prelude::*;
use varnum::*;

/// Smallest-width mode of `category` that holds `value`, found by brute
/// force against the layout's numeric range
fn narrowest_by_range(value: i128) -> Mode {
    let category = if value >= 0 {
        Category::UnsignedInteger
    } else {
        Category::SignedInteger
    };

    *modes_of_category(category)
        .iter()
        .find(|mode| {
            let bits = mode.bit_width();
            match category {
                Category::UnsignedInteger => value < (1i128 << bits),
                _ => value >= -(1i128 << (bits - 1)),
            }
        })
        .unwrap()
}

#[test]
fn test_concrete_vectors() {
    assert_eq!(encode(0).unwrap().raw_bytes(), &[5, 0]);
    assert_eq!(encode(-1).unwrap().raw_bytes(), &[0, 0xFF]);
    assert_eq!(encode(300).unwrap().raw_bytes(), &[6, 0x2C, 0x01]);

    let encoded = encode(1.5).unwrap();
    assert_eq!(encoded.signature(), 10);
    assert_eq!(encoded.payload(), &1.5f32.to_le_bytes());
}

#[test]
fn test_signature_table_is_stable() {
    let table = [
        (0, Category::SignedInteger, 8),
        (1, Category::SignedInteger, 16),
        (2, Category::SignedInteger, 24),
        (3, Category::SignedInteger, 32),
        (4, Category::SignedInteger, 64),
        (5, Category::UnsignedInteger, 8),
        (6, Category::UnsignedInteger, 16),
        (7, Category::UnsignedInteger, 24),
        (8, Category::UnsignedInteger, 32),
        (9, Category::UnsignedInteger, 64),
        (10, Category::FloatingPoint, 32),
        (11, Category::FloatingPoint, 64),
    ];

    // Resolve in reverse to make sure lookup does not depend on order
    for &(id, category, bits) in table.iter().rev() {
        let mode = lookup_by_id(id).unwrap();
        assert_eq!(mode.category(), category);
        assert_eq!(mode.bit_width(), bits);
        assert_eq!(get_length(id).unwrap(), (bits / 8) as usize);
    }

    for id in 12..=u8::MAX {
        assert_eq!(lookup_by_id(id), Err(Error::UnknownMode(id)));
    }
}

#[test]
fn test_truncation_safety() {
    assert_eq!(decode(&[]), Err(Error::EmptyInput));
    assert!(matches!(decode(&[5]), Err(Error::TruncatedInput { .. })));

    // Every prefix shorter than the full encoding is rejected
    let full = encode(i64::MIN).unwrap();
    for len in 1..full.len() {
        assert_eq!(
            decode(&full.raw_bytes()[..len]),
            Err(Error::TruncatedInput {
                needed: 9,
                available: len
            })
        );
    }
}

#[test]
fn test_mode_boundaries() {
    let boundaries: [(i128, Mode); 20] = [
        (255, Mode::U8),
        (256, Mode::U16),
        (65_535, Mode::U16),
        (65_536, Mode::U24),
        (16_777_215, Mode::U24),
        (16_777_216, Mode::U32),
        (4_294_967_295, Mode::U32),
        (4_294_967_296, Mode::U64),
        (u64::MAX as i128, Mode::U64),
        (-128, Mode::I8),
        (-129, Mode::I16),
        (-32_768, Mode::I16),
        (-32_769, Mode::I24),
        (-8_388_608, Mode::I24),
        (-8_388_609, Mode::I32),
        (i32::MIN as i128, Mode::I32),
        (i32::MIN as i128 - 1, Mode::I64),
        (i64::MIN as i128, Mode::I64),
        (0, Mode::U8),
        (-1, Mode::I8),
    ];

    for (value, expected) in boundaries {
        let encoded = encode(value).unwrap();
        assert_eq!(encoded.mode(), expected, "value {}", value);
        assert_eq!(encoded.len(), 1 + expected.byte_width());
        assert_eq!(decode(encoded.raw_bytes()).unwrap().value(), Number::Int(value));
    }
}

#[test]
fn test_out_of_range_integers() {
    for value in [1i128 << 64, i128::MAX, i64::MIN as i128 - 1, i128::MIN] {
        assert!(matches!(encode(value), Err(Error::Range { .. })), "{}", value);
    }
}

#[test]
fn test_float_modes() {
    let cases = [
        (0.0, Mode::F32),
        (1.5, Mode::F32),
        (-2.75, Mode::F32),
        (65_536.125, Mode::F32),
        (0.1, Mode::F64),
        (1.0 / 3.0, Mode::F64),
        (1.0e15, Mode::F64),
    ];

    for (value, expected) in cases {
        let encoded = encode(value).unwrap();
        assert_eq!(encoded.mode(), expected, "value {}", value);
        assert_eq!(decode(encoded.raw_bytes()).unwrap().value(), Number::Float(value));
    }
}

#[test]
fn test_float_errors() {
    assert_eq!(encode(f64::NAN), Err(Error::UnsupportedType));
    assert_eq!(encode(f64::NEG_INFINITY), Err(Error::UnsupportedType));
    assert!(matches!(
        encode(1.0e300),
        Err(Error::Range {
            category: Category::FloatingPoint,
            ..
        })
    ));
}

#[test]
fn test_decoded_raw_bytes_are_owned_copy() {
    let mut input = [6u8, 0x2C, 0x01, 0x77];
    let decoded = decode(&input).unwrap();
    input[1] = 0;
    assert_eq!(input[1], 0);

    assert_eq!(decoded.raw_bytes(), &[6, 0x2C, 0x01]);
    assert_eq!(decoded.value(), Number::Int(300));
}

#[test]
fn test_stream_of_numbers() {
    let values: Vec<Number> = vec![
        Number::Int(0),
        Number::Int(-42),
        Number::Int(1 << 40),
        Number::Float(0.5),
        Number::Int(u64::MAX as i128),
        Number::Float(-1.0e-3),
    ];

    let bytes = encode_all(values.iter().copied()).unwrap();
    let decoded: Vec<Number> = NumberCursor::new(&bytes)
        .map(|item| item.unwrap().value())
        .collect();
    assert_eq!(decoded, values);

    let mut buf = [0u8; 64];
    let mut encoder = NumberEncoder::new(&mut buf);
    for value in &values {
        encoder.put(*value).unwrap();
    }
    assert_eq!(encoder.as_slice(), bytes.as_slice());
}

#[test]
fn test_try_decode() {
    assert_eq!(try_decode(&[5, 7]).map(|n| n.value()), Some(Number::Int(7)));
    assert!(try_decode(&[]).is_none());
    assert!(try_decode(&[5]).is_none());
    assert!(try_decode(&[0xEE, 0, 0]).is_none());
}

#[test]
fn test_version_binary_uses_codec_layout() {
    let version: Version = "3.14.15-9+265".parse().unwrap();
    let bytes = version.to_binary();
    assert_eq!(bytes.len(), Version::SIZE);

    // Each field is a plain little-endian i16, the same layout as an I16
    // payload without its signature
    for (i, field) in [3i16, 14, 15, 9, 265].into_iter().enumerate() {
        let mut framed = [Mode::I16.id(), 0, 0];
        framed[1..].copy_from_slice(&bytes[2 * i..2 * i + 2]);
        assert_eq!(decode(&framed).unwrap().value(), Number::Int(field as i128));
    }

    assert_eq!(Version::from_binary(&bytes).unwrap(), version);
    assert_eq!(version.to_string(), "3.14.15-9+265");
}

#[test]
fn test_error_display() {
    let err = encode(1i128 << 70).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no mode for category unsigned integer with >= 71 bits"
    );
}

proptest! {
    #[test]
    fn prop_i64_roundtrip(v in any::<i64>()) {
        let encoded = encode(v).unwrap();
        let decoded = decode(encoded.raw_bytes()).unwrap();
        prop_assert_eq!(decoded.value(), Number::Int(v as i128));
        prop_assert_eq!(decoded.mode(), encoded.mode());
    }

    #[test]
    fn prop_u64_roundtrip(v in any::<u64>()) {
        let encoded = encode(v).unwrap();
        prop_assert_eq!(decode(encoded.raw_bytes()).unwrap().value(), Number::Int(v as i128));
    }

    #[test]
    fn prop_integer_mode_is_minimal(v in any::<i64>()) {
        let mode = encode(v).unwrap().mode();
        prop_assert_eq!(mode, narrowest_by_range(v as i128));
    }

    #[test]
    fn prop_unsigned_mode_is_minimal(v in any::<u64>()) {
        let mode = encode(v).unwrap().mode();
        prop_assert_eq!(mode, narrowest_by_range(v as i128));
    }

    #[test]
    fn prop_float_roundtrip_per_mode(v in -1.0e12f64..1.0e12f64) {
        let encoded = encode(v).unwrap();
        let decoded = decode(encoded.raw_bytes()).unwrap().value();
        let expected = match encoded.mode() {
            Mode::F32 => (v as f32) as f64,
            Mode::F64 => v,
            other => panic!("float encoded as {:?}", other),
        };
        prop_assert_eq!(decoded, Number::Float(expected));
    }

    #[test]
    fn prop_trailing_bytes_ignored(
        v in any::<i64>(),
        extra in proptest::collection::vec(any::<u8>(), 1..16),
    ) {
        let encoded = encode(v).unwrap();
        let mut bytes = encoded.raw_bytes().to_vec();
        bytes.extend_from_slice(&extra);

        let decoded = decode(&bytes).unwrap();
        prop_assert_eq!(decoded.value(), Number::Int(v as i128));
        prop_assert_eq!(decoded.raw_bytes(), encoded.raw_bytes());
    }

    #[test]
    fn prop_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..12)) {
        match decode(&bytes) {
            Ok(decoded) => {
                prop_assert_eq!(decoded.raw_bytes(), &bytes[..decoded.len()]);
                prop_assert_eq!(get_length(bytes[0]).unwrap(), decoded.len() - 1);
            }
            Err(Error::EmptyInput) => prop_assert!(bytes.is_empty()),
            Err(Error::UnknownMode(id)) => prop_assert!(id >= 12),
            Err(Error::TruncatedInput { needed, available }) => {
                prop_assert!(available < needed);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn prop_version_binary_roundtrip(
        major in any::<i16>(),
        minor in any::<i16>(),
        patch in any::<i16>(),
        pre in any::<i16>(),
        build in any::<i16>(),
    ) {
        let version = Version { major, minor, patch, pre, build };
        prop_assert_eq!(Version::from_binary(&version.to_binary()).unwrap(), version);
    }
}
