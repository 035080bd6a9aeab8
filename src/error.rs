//! Error types for the varnum codec

use crate::mode::Category;

/// Errors that can occur while encoding or decoding a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Value cannot be sized by the mode selector (NaN or infinite float)
    UnsupportedType,
    /// No mode in the category is wide enough for the value
    Range {
        /// Category the value resolved to
        category: Category,
        /// Bits the value needs
        required_bits: u32,
    },
    /// Signature byte does not name a known mode
    UnknownMode(u8),
    /// Decoder was handed no bytes at all
    EmptyInput,
    /// Fewer bytes than the signature announces
    TruncatedInput {
        /// Bytes required including the signature
        needed: usize,
        /// Bytes actually available
        available: usize,
    },
    /// Output buffer too small for the encoded number
    ShortBuffer,
    /// Version string is not `major.minor.patch[-pre][+build]`
    InvalidVersion,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::UnsupportedType => "value is not a finite integer or floating-point number",
            Error::Range { .. } => "no mode wide enough for value",
            Error::UnknownMode(_) => "unknown mode signature",
            Error::EmptyInput => "empty input",
            Error::TruncatedInput { .. } => "input shorter than announced by signature",
            Error::ShortBuffer => "buffer too small for operation",
            Error::InvalidVersion => "malformed version string",
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Range {
                category,
                required_bits,
            } => write!(
                f,
                "no mode for category {} with >= {} bits",
                category, required_bits
            ),
            Error::UnknownMode(id) => write!(f, "{} (0x{:02X})", self.description(), id),
            Error::TruncatedInput { needed, available } => write!(
                f,
                "{}: need {} bytes, have {}",
                self.description(),
                needed,
                available
            ),
            _ => write!(f, "{}", self.description()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for varnum operations
pub type Result<T> = core::result::Result<T, Error>;
