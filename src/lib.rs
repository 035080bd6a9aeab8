//! varnum: self-describing variable-width binary numbers
//!
//! Each value is written in the narrowest fixed-width representation that
//! holds it, prefixed by a one-byte signature naming that representation.
//! A reader needs nothing but the signature to know how many bytes follow
//! and how to interpret them.
//!
//! # Wire Format
//!
//! ```text
//! +--------------+----------------------------------------------+
//! | Signature u8 | Payload (1, 2, 3, 4 or 8 bytes, little-endian) |
//! +--------------+----------------------------------------------+
//! ```
//!
//! Integer payloads are two's complement, floats are IEEE-754. The payload
//! length is implied by the signature; there is no length prefix and no
//! padding. See [`mode`] for the signature table.
//!
//! # Example
//!
//! ```rust
//! use varnum::*;
//!
//! let encoded = encode(300)?;
//! assert_eq!(encoded.mode(), Mode::U16);
//! assert_eq!(encoded.raw_bytes(), &[6, 0x2C, 0x01]);
//!
//! // Trailing bytes after the number are left alone
//! let decoded = decode(&[6, 0x2C, 0x01, 0xFF])?;
//! assert_eq!(decoded.value(), Number::Int(300));
//! # Ok::<(), varnum::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod mode;
pub mod number;
pub mod select;
pub mod version;

#[cfg(all(feature = "std", test))]
pub mod bench;

// Re-export main types
pub use decoder::{decode, get_length, try_decode, NumberCursor};
pub use encoder::{encode, encode_all, encode_into, NumberEncoder};
pub use error::{Error, Result};
pub use mode::{lookup_by_id, modes_of_category, Category, Mode};
pub use number::{EncodedNumber, Number};
pub use version::Version;

/// Signature size in bytes
pub const SIGNATURE_SIZE: usize = 1;

/// Largest encoded number: signature plus a 64-bit payload
pub const MAX_ENCODED_SIZE: usize = SIGNATURE_SIZE + 8;
