//! Semantic version value with a fixed 10-byte binary layout
//!
//! ```text
//! +-----------+-----------+-----------+-----------+-----------+
//! | major i16 | minor i16 | patch i16 |  pre i16  | build i16 |
//! +-----------+-----------+-----------+-----------+-----------+
//! ```
//!
//! All fields little-endian. No signature byte: the layout is fixed.

use core::fmt;
use core::str::FromStr;

use crate::decoder::read_le;
use crate::encoder::write_le;
use crate::error::{Error, Result};

/// Semantic version with pre-release and build numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    /// Major version
    pub major: i16,
    /// Minor version
    pub minor: i16,
    /// Patch version
    pub patch: i16,
    /// Pre-release number, 0 for a release
    pub pre: i16,
    /// Build number, 0 if unset
    pub build: i16,
}

impl Version {
    /// Binary size in bytes (fixed)
    pub const SIZE: usize = 10;

    /// Create a release version
    #[inline]
    pub const fn new(major: i16, minor: i16, patch: i16) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: 0,
            build: 0,
        }
    }

    /// Set the pre-release number
    #[inline]
    pub const fn with_pre(mut self, pre: i16) -> Self {
        self.pre = pre;
        self
    }

    /// Set the build number
    #[inline]
    pub const fn with_build(mut self, build: i16) -> Self {
        self.build = build;
        self
    }

    #[inline]
    const fn fields(&self) -> [i16; 5] {
        [self.major, self.minor, self.patch, self.pre, self.build]
    }

    /// Encode to the fixed binary layout
    pub fn to_binary(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        for (chunk, field) in buf.chunks_exact_mut(2).zip(self.fields()) {
            write_le(field as u16 as u64, chunk);
        }
        buf
    }

    /// Decode from the fixed binary layout; trailing bytes are ignored
    pub fn from_binary(buf: &[u8]) -> Result<Self> {
        if buf.len() < Self::SIZE {
            return Err(Error::TruncatedInput {
                needed: Self::SIZE,
                available: buf.len(),
            });
        }

        let field = |i: usize| read_le(&buf[2 * i..2 * i + 2]) as u16 as i16;
        Ok(Self {
            major: field(0),
            minor: field(1),
            patch: field(2),
            pre: field(3),
            build: field(4),
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.pre != 0 {
            write!(f, "-{}", self.pre)?;
        }
        if self.build != 0 {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (rest, build) = match s.split_once('+') {
            Some((rest, build)) => (rest, parse_field(build)?),
            None => (s, 0),
        };
        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, parse_field(pre)?),
            None => (rest, 0),
        };

        let mut parts = core.split('.');
        let major = parse_field(parts.next().unwrap_or(""))?;
        let minor = parse_field(parts.next().ok_or(Error::InvalidVersion)?)?;
        let patch = parse_field(parts.next().ok_or(Error::InvalidVersion)?)?;
        if parts.next().is_some() {
            return Err(Error::InvalidVersion);
        }

        Ok(Self {
            major,
            minor,
            patch,
            pre,
            build,
        })
    }
}

/// Parse one decimal field; signs are not allowed in the text form
fn parse_field(s: &str) -> Result<i16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidVersion);
    }
    s.parse().map_err(|_| Error::InvalidVersion)
}
