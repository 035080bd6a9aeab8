//! Mode selection: narrowest mode that can hold a value
//!
//! Integers resolve to the unsigned category when non-negative and to the
//! signed category otherwise. Floats always resolve to the floating-point
//! category and are sized with a fraction-bit counting heuristic whose
//! constants are part of the format: changing them would pick different
//! modes for values already on the wire.

use crate::error::{Error, Result};
use crate::mode::{Category, Mode};
use crate::number::Number;

/// Remaining fraction at or below which the float heuristic stops
pub const FRACTION_EPSILON: f64 = 1e-15;

/// Maximum number of fraction bits the float heuristic counts
pub const MAX_FRACTION_BITS: u32 = 52;

const SIGN_MASK: u64 = 1 << 63;
const EXPONENT_BIAS: i32 = 1023;
const MANTISSA_BITS: u32 = 52;

/// Position of the highest set bit plus one; zero for zero
#[inline]
pub const fn bit_length(v: u128) -> u32 {
    u128::BITS - v.leading_zeros()
}

/// Category a value encodes under
#[inline]
pub fn category_of(value: Number) -> Category {
    match value {
        Number::Int(v) if v >= 0 => Category::UnsignedInteger,
        Number::Int(_) => Category::SignedInteger,
        Number::Float(_) => Category::FloatingPoint,
    }
}

/// Bits an integer needs in its category's layout
///
/// Non-negative values need their bit length (at least one bit for zero).
/// Negative values need the bit length of their two's-complement magnitude
/// plus a sign bit, so `-1` needs 1 bit, `-128` needs 8 and `-2^63` needs 64.
#[inline]
pub const fn required_int_bits(v: i128) -> u32 {
    if v == 0 {
        1
    } else if v > 0 {
        bit_length(v as u128)
    } else {
        bit_length(!v as u128) + 1
    }
}

/// Bits a float needs: integer-part bit length, counted fraction bits and
/// one sign bit
///
/// Fails with [`Error::UnsupportedType`] for NaN and infinities.
pub fn required_float_bits(v: f64) -> Result<u32> {
    if !v.is_finite() {
        return Err(Error::UnsupportedType);
    }

    let abs = f64::from_bits(v.to_bits() & !SIGN_MASK);
    let whole = truncate(abs);

    Ok(integer_part_bits(abs) + fraction_bits(abs - whole) + 1)
}

/// Bits a value needs in its category
pub fn required_bits(value: Number) -> Result<u32> {
    match value {
        Number::Int(v) => Ok(required_int_bits(v)),
        Number::Float(v) => required_float_bits(v),
    }
}

/// Smallest mode of `category` with at least `required_bits` bits
pub fn select_mode(category: Category, required_bits: u32) -> Result<Mode> {
    category
        .modes()
        .iter()
        .copied()
        .find(|mode| mode.bit_width() >= required_bits)
        .ok_or(Error::Range {
            category,
            required_bits,
        })
}

/// Narrowest mode that can hold `value`
pub fn select(value: Number) -> Result<Mode> {
    let bits = required_bits(value)?;
    select_mode(category_of(value), bits)
}

/// Bit length of `floor(abs)` for a finite non-negative float
fn integer_part_bits(abs: f64) -> u32 {
    if abs < 1.0 {
        return 0;
    }
    let exponent = ((abs.to_bits() >> MANTISSA_BITS) & 0x7FF) as i32 - EXPONENT_BIAS;
    exponent as u32 + 1
}

/// Integer part of a finite non-negative float
fn truncate(abs: f64) -> f64 {
    // 2^52: every float at or above this is already integral
    if abs >= 4_503_599_627_370_496.0 {
        abs
    } else {
        (abs as u64) as f64
    }
}

fn fraction_bits(mut fraction: f64) -> u32 {
    let mut power = 0.5;
    let mut bits = 0;

    while fraction > FRACTION_EPSILON && bits < MAX_FRACTION_BITS {
        if fraction >= power {
            fraction -= power;
        }
        power /= 2.0;
        bits += 1;
    }

    bits
}
