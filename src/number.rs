//! Numeric values and the encoded form produced by the codec

use crate::mode::Mode;
use crate::MAX_ENCODED_SIZE;

/// A numeric value the codec can carry
///
/// Integers are held as `i128` so that the full `[-2^63, 2^64)` range fits
/// in one variant; out-of-range values are rejected by the mode selector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    /// Integer value
    Int(i128),
    /// Floating-point value
    Float(f64),
}

impl Number {
    /// Returns true for floating-point values
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Integer value as `i64`, if it is an integer in range
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(v) => i64::try_from(v).ok(),
            Number::Float(_) => None,
        }
    }

    /// Integer value as `u64`, if it is a non-negative integer in range
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::Int(v) => u64::try_from(v).ok(),
            Number::Float(_) => None,
        }
    }

    /// Value as `f64`; integers convert with the usual rounding
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(v: $t) -> Self {
                    Number::Int(v as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f32> for Number {
    #[inline]
    fn from(v: f32) -> Self {
        Number::Float(v as f64)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

/// Result of an encode or decode call
///
/// Owns a copy of exactly the bytes it represents: the signature followed by
/// `mode.byte_width()` payload bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedNumber {
    mode: Mode,
    value: Number,
    raw: [u8; MAX_ENCODED_SIZE],
}

impl EncodedNumber {
    /// Build from a mode, its value, and a buffer whose first
    /// `mode.encoded_len()` bytes hold the encoding
    #[inline]
    pub(crate) fn new(mode: Mode, value: Number, raw: [u8; MAX_ENCODED_SIZE]) -> Self {
        Self { mode, value, raw }
    }

    /// Mode used for the encoding
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Numeric value
    #[inline]
    pub fn value(&self) -> Number {
        self.value
    }

    /// Signature byte
    #[inline]
    pub fn signature(&self) -> u8 {
        self.raw[0]
    }

    /// Signature followed by payload
    #[inline]
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw[..self.mode.encoded_len()]
    }

    /// Payload bytes only
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.raw[1..self.mode.encoded_len()]
    }

    /// Total encoded length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.mode.encoded_len()
    }

    /// Always false; an encoded number is at least two bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for EncodedNumber {
    fn as_ref(&self) -> &[u8] {
        self.raw_bytes()
    }
}
