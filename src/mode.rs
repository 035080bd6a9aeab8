//! Mode registry: the closed set of fixed-width representations
//!
//! Every encoded number starts with a one-byte signature naming one of the
//! modes below. Signature IDs are part of the wire format and are never
//! reassigned; new modes may only be appended with fresh IDs.
//!
//! | ID | Mode  | Category         | Bits |
//! |----|-------|------------------|------|
//! | 0  | `I8`  | signed integer   | 8    |
//! | 1  | `I16` | signed integer   | 16   |
//! | 2  | `I24` | signed integer   | 24   |
//! | 3  | `I32` | signed integer   | 32   |
//! | 4  | `I64` | signed integer   | 64   |
//! | 5  | `U8`  | unsigned integer | 8    |
//! | 6  | `U16` | unsigned integer | 16   |
//! | 7  | `U24` | unsigned integer | 24   |
//! | 8  | `U32` | unsigned integer | 32   |
//! | 9  | `U64` | unsigned integer | 64   |
//! | 10 | `F32` | floating point   | 32   |
//! | 11 | `F64` | floating point   | 64   |

use crate::error::{Error, Result};

/// Family of layouts a mode belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Category {
    /// Two's-complement signed integer
    SignedInteger = 0,
    /// Unsigned integer
    UnsignedInteger = 1,
    /// IEEE-754 binary floating point
    FloatingPoint = 2,
}

impl Category {
    /// Numeric category code (0, 1 or 2)
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Modes of this category, ascending by bit width
    #[inline]
    pub const fn modes(self) -> &'static [Mode] {
        match self {
            Category::SignedInteger => &SIGNED_MODES,
            Category::UnsignedInteger => &UNSIGNED_MODES,
            Category::FloatingPoint => &FLOAT_MODES,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Category::SignedInteger => "signed integer",
            Category::UnsignedInteger => "unsigned integer",
            Category::FloatingPoint => "floating point",
        };
        f.write_str(name)
    }
}

/// One fixed-width binary representation
///
/// The discriminant is the stable wire signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Mode {
    /// Signed 8-bit integer
    I8 = 0,
    /// Signed 16-bit integer
    I16 = 1,
    /// Signed 24-bit integer (3 payload bytes)
    I24 = 2,
    /// Signed 32-bit integer
    I32 = 3,
    /// Signed 64-bit integer
    I64 = 4,
    /// Unsigned 8-bit integer
    U8 = 5,
    /// Unsigned 16-bit integer
    U16 = 6,
    /// Unsigned 24-bit integer (3 payload bytes)
    U24 = 7,
    /// Unsigned 32-bit integer
    U32 = 8,
    /// Unsigned 64-bit integer
    U64 = 9,
    /// IEEE-754 binary32
    F32 = 10,
    /// IEEE-754 binary64
    F64 = 11,
}

const SIGNED_MODES: [Mode; 5] = [Mode::I8, Mode::I16, Mode::I24, Mode::I32, Mode::I64];
const UNSIGNED_MODES: [Mode; 5] = [Mode::U8, Mode::U16, Mode::U24, Mode::U32, Mode::U64];
const FLOAT_MODES: [Mode; 2] = [Mode::F32, Mode::F64];

impl Mode {
    /// Every registered mode, indexed by signature ID
    pub const ALL: [Mode; 12] = [
        Mode::I8,
        Mode::I16,
        Mode::I24,
        Mode::I32,
        Mode::I64,
        Mode::U8,
        Mode::U16,
        Mode::U24,
        Mode::U32,
        Mode::U64,
        Mode::F32,
        Mode::F64,
    ];

    /// Resolve a signature byte to its mode
    ///
    /// Fails with [`Error::UnknownMode`] for corrupted signatures or IDs from
    /// a newer format revision.
    #[inline]
    pub const fn from_id(id: u8) -> Result<Mode> {
        if (id as usize) < Self::ALL.len() {
            Ok(Self::ALL[id as usize])
        } else {
            Err(Error::UnknownMode(id))
        }
    }

    /// Stable wire signature
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Category of this mode
    #[inline]
    pub const fn category(self) -> Category {
        match self {
            Mode::I8 | Mode::I16 | Mode::I24 | Mode::I32 | Mode::I64 => Category::SignedInteger,
            Mode::U8 | Mode::U16 | Mode::U24 | Mode::U32 | Mode::U64 => Category::UnsignedInteger,
            Mode::F32 | Mode::F64 => Category::FloatingPoint,
        }
    }

    /// Declared bit width
    #[inline]
    pub const fn bit_width(self) -> u32 {
        match self {
            Mode::I8 | Mode::U8 => 8,
            Mode::I16 | Mode::U16 => 16,
            Mode::I24 | Mode::U24 => 24,
            Mode::I32 | Mode::U32 | Mode::F32 => 32,
            Mode::I64 | Mode::U64 | Mode::F64 => 64,
        }
    }

    /// Payload size in bytes, `ceil(bit_width / 8)`
    #[inline]
    pub const fn byte_width(self) -> usize {
        self.bit_width().div_ceil(8) as usize
    }

    /// Total encoded size: signature plus payload
    #[inline]
    pub const fn encoded_len(self) -> usize {
        1 + self.byte_width()
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    #[inline]
    fn try_from(id: u8) -> Result<Self> {
        Mode::from_id(id)
    }
}

impl From<Mode> for u8 {
    #[inline]
    fn from(mode: Mode) -> u8 {
        mode.id()
    }
}

/// Look up a mode by its signature ID
#[inline]
pub const fn lookup_by_id(id: u8) -> Result<Mode> {
    Mode::from_id(id)
}

/// Modes of a category, ascending by bit width
#[inline]
pub const fn modes_of_category(category: Category) -> &'static [Mode] {
    category.modes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable() {
        let expected = [
            (Category::SignedInteger, 8),
            (Category::SignedInteger, 16),
            (Category::SignedInteger, 24),
            (Category::SignedInteger, 32),
            (Category::SignedInteger, 64),
            (Category::UnsignedInteger, 8),
            (Category::UnsignedInteger, 16),
            (Category::UnsignedInteger, 24),
            (Category::UnsignedInteger, 32),
            (Category::UnsignedInteger, 64),
            (Category::FloatingPoint, 32),
            (Category::FloatingPoint, 64),
        ];

        for (id, &(category, bits)) in expected.iter().enumerate() {
            let mode = lookup_by_id(id as u8).unwrap();
            assert_eq!(mode.id(), id as u8);
            assert_eq!(mode.category(), category);
            assert_eq!(mode.bit_width(), bits);
        }
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(Mode::from_id(12), Err(Error::UnknownMode(12)));
        assert_eq!(Mode::try_from(0xFF), Err(Error::UnknownMode(0xFF)));
    }

    #[test]
    fn test_byte_widths() {
        assert_eq!(Mode::U8.byte_width(), 1);
        assert_eq!(Mode::I24.byte_width(), 3);
        assert_eq!(Mode::U24.encoded_len(), 4);
        assert_eq!(Mode::F32.byte_width(), 4);
        assert_eq!(Mode::I64.encoded_len(), 9);
    }

    #[test]
    fn test_category_modes_ordered_and_distinct() {
        for category in [
            Category::SignedInteger,
            Category::UnsignedInteger,
            Category::FloatingPoint,
        ] {
            let modes = modes_of_category(category);
            assert!(!modes.is_empty());
            for pair in modes.windows(2) {
                assert!(pair[0].bit_width() < pair[1].bit_width());
            }
            assert!(modes.iter().all(|m| m.category() == category));
        }

        let total: usize = [
            Category::SignedInteger,
            Category::UnsignedInteger,
            Category::FloatingPoint,
        ]
        .iter()
        .map(|c| c.modes().len())
        .sum();
        assert_eq!(total, Mode::ALL.len());
    }

    #[test]
    fn test_category_codes() {
        assert_eq!(Category::SignedInteger.code(), 0);
        assert_eq!(Category::UnsignedInteger.code(), 1);
        assert_eq!(Category::FloatingPoint.code(), 2);
    }
}
