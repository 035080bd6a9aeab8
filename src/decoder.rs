//! Decoder: signature + payload back to a typed value
//!
//! The decoder reads exactly the bytes the signature announces and ignores
//! anything that follows, so a number can be read out of a larger buffer.

use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::number::{EncodedNumber, Number};
use crate::MAX_ENCODED_SIZE;

/// Read `bytes` as a little-endian unsigned integer
#[inline]
pub(crate) fn read_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (b as u64) << (8 * i))
}

/// Sign-extend the low `bits` bits of `raw`
#[inline]
fn sign_extend(raw: u64, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((raw << shift) as i64) >> shift
}

/// Interpret a payload according to `mode`
fn read_value(mode: Mode, payload: &[u8]) -> Number {
    let raw = read_le(payload);
    match mode {
        Mode::I8 | Mode::I16 | Mode::I24 | Mode::I32 | Mode::I64 => {
            Number::Int(sign_extend(raw, mode.bit_width()) as i128)
        }
        Mode::U8 | Mode::U16 | Mode::U24 | Mode::U32 | Mode::U64 => Number::Int(raw as i128),
        Mode::F32 => Number::Float(f32::from_bits(raw as u32) as f64),
        Mode::F64 => Number::Float(f64::from_bits(raw)),
    }
}

/// Payload length announced by a signature byte
///
/// Lets a reader learn how many bytes follow before it has them.
#[inline]
pub fn get_length(signature: u8) -> Result<usize> {
    Ok(Mode::from_id(signature)?.byte_width())
}

/// Decode one number from the front of `bytes`
///
/// Trailing bytes past the announced length are ignored; the returned
/// [`EncodedNumber`] holds only the bytes consumed.
pub fn decode(bytes: &[u8]) -> Result<EncodedNumber> {
    let signature = *bytes.first().ok_or(Error::EmptyInput)?;
    let mode = Mode::from_id(signature)?;

    let needed = mode.encoded_len();
    if bytes.len() < needed {
        return Err(Error::TruncatedInput {
            needed,
            available: bytes.len(),
        });
    }

    let value = read_value(mode, &bytes[1..needed]);

    let mut raw = [0u8; MAX_ENCODED_SIZE];
    raw[..needed].copy_from_slice(&bytes[..needed]);

    Ok(EncodedNumber::new(mode, value, raw))
}

/// Decode one number, mapping any failure to `None`
#[inline]
pub fn try_decode(bytes: &[u8]) -> Option<EncodedNumber> {
    decode(bytes).ok()
}

/// Cursor reading encoded numbers back to back from a borrowed buffer
#[derive(Debug)]
pub struct NumberCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> NumberCursor<'a> {
    /// Create new cursor at the start of `buf`
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Get current read position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining bytes in cursor
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Check if cursor is at end
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Total length of the next number without decoding it
    #[inline]
    pub fn peek_length(&self) -> Result<usize> {
        let signature = *self.buf.get(self.pos).ok_or(Error::EmptyInput)?;
        Ok(1 + get_length(signature)?)
    }

    /// Skip the next number without decoding it
    #[inline]
    pub fn skip_number(&mut self) -> Result<()> {
        let len = self.peek_length()?;
        if len > self.remaining() {
            return Err(Error::TruncatedInput {
                needed: len,
                available: self.remaining(),
            });
        }
        self.pos += len;
        Ok(())
    }

    /// Decode the next number and advance past it
    ///
    /// The position is left unchanged on error.
    #[inline]
    pub fn next_number(&mut self) -> Result<EncodedNumber> {
        let encoded = decode(&self.buf[self.pos..])?;
        self.pos += encoded.len();
        Ok(encoded)
    }
}

impl Iterator for NumberCursor<'_> {
    type Item = Result<EncodedNumber>;

    /// Yields until the buffer is exhausted; after an error the cursor
    /// jumps to the end so iteration stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_at_end() {
            return None;
        }
        let item = self.next_number();
        if item.is_err() {
            self.pos = self.buf.len();
        }
        Some(item)
    }
}
