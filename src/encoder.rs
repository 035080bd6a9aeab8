//! Encoder: value to signature + fixed-width payload
//!
//! Payloads are little-endian. Integer payloads are packed byte by byte so
//! the 3-byte modes need no native 24-bit type. Integer values are reduced
//! to their low 64 bits in two's complement before packing; the selector
//! guarantees the value fits the chosen width, so nothing is lost.

use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::mode::{Category, Mode};
use crate::number::{EncodedNumber, Number};
use crate::select;
use crate::MAX_ENCODED_SIZE;

/// Write the low `out.len()` bytes of `bits` in little-endian order
#[inline]
pub(crate) fn write_le(bits: u64, out: &mut [u8]) {
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (bits >> (8 * i)) as u8;
    }
}

/// Raw payload bits of `value` laid out for `mode`
#[inline]
fn payload_bits(value: Number, mode: Mode) -> u64 {
    match (value, mode) {
        (Number::Float(v), Mode::F32) => (v as f32).to_bits() as u64,
        (Number::Float(v), _) => v.to_bits(),
        // Wrapping reduction to 64 bits; two's complement for negatives
        (Number::Int(v), _) => v as u64,
    }
}

/// Write `value` in `mode`'s layout into `out`, which must hold at least
/// `mode.encoded_len()` bytes
fn write_encoded(value: Number, mode: Mode, out: &mut [u8]) {
    debug_assert_eq!(
        mode.category() == Category::FloatingPoint,
        value.is_float()
    );
    out[0] = mode.id();
    write_le(payload_bits(value, mode), &mut out[1..mode.encoded_len()]);
}

/// Encode a value with the narrowest mode that holds it
///
/// Fails with [`Error::Range`] when no mode is wide enough and with
/// [`Error::UnsupportedType`] for non-finite floats.
pub fn encode(value: impl Into<Number>) -> Result<EncodedNumber> {
    let value = value.into();
    let mode = select::select(value)?;

    let mut raw = [0u8; MAX_ENCODED_SIZE];
    write_encoded(value, mode, &mut raw);

    Ok(EncodedNumber::new(mode, value, raw))
}

/// Encode a value into a caller-provided buffer
///
/// Returns the number of bytes written, or [`Error::ShortBuffer`] if the
/// buffer cannot hold the encoding.
pub fn encode_into(value: impl Into<Number>, buf: &mut [u8]) -> Result<usize> {
    let value = value.into();
    let mode = select::select(value)?;
    let len = mode.encoded_len();

    if buf.len() < len {
        return Err(Error::ShortBuffer);
    }
    write_encoded(value, mode, &mut buf[..len]);

    Ok(len)
}

/// Encode a sequence of values back to back into a new vector
///
/// Read them back with [`NumberCursor`](crate::decoder::NumberCursor).
pub fn encode_all<I>(values: I) -> Result<Vec<u8>>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    let mut out = Vec::new();
    for value in values {
        out.extend_from_slice(encode(value)?.raw_bytes());
    }
    Ok(out)
}

/// Appends encoded numbers back to back into a user-provided buffer
pub struct NumberEncoder<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> NumberEncoder<'a> {
    /// Create new encoder with the given buffer
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Append one number, returning its encoded length
    ///
    /// On error nothing is written and the position is unchanged.
    #[inline]
    pub fn put(&mut self, value: impl Into<Number>) -> Result<usize> {
        let written = encode_into(value, &mut self.buf[self.pos..])?;
        self.pos += written;
        Ok(written)
    }

    /// Get current position in buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining buffer capacity
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Reset encoder for reuse with the same buffer
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Get a slice of the encoded data
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}
