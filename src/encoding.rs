//! The closed set of element encodings.

use std::fmt;
use std::str::FromStr;

use super::Error;

/// How the elements of an [`Array`] are stored.
///
/// Each encoding is named by a one-character code, which is how a host
/// program usually selects it:
///
/// ```
/// use densearray::Encoding;
/// let e: Encoding = "s".parse().unwrap();
/// assert_eq!(e, Encoding::I16);
/// assert_eq!(e.bit_width(), 16);
/// assert_eq!(Encoding::try_from('b').unwrap(), Encoding::BitBool);
/// assert!("x".parse::<Encoding>().is_err());
/// ```
///
/// [`Array`]: super::Array
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Encoding {
    /// `c`: `i8`.
    I8,
    /// `C`: `u8`.
    U8,
    /// `s`: `i16`.
    I16,
    /// `S`: `u16`.
    U16,
    /// `l`: `isize`, the platform word.
    Long,
    /// `L`: `usize`, the platform word.
    ULong,
    /// `f`: `f32`.
    F32,
    /// `d`: `f64`.
    F64,
    /// `n`: the host's number type, which is `f64`.
    Number,
    /// `B`: one byte per boolean, holding 0 or 1.
    ByteBool,
    /// `b`: eight booleans per byte.
    BitBool,
}

impl Encoding {
    /// Every `Encoding`, in the order of [`CODES`].
    ///
    /// [`CODES`]: Self::CODES
    pub const ALL: &'static [Self] = &[
        Self::I8, Self::U8, Self::I16, Self::U16, Self::Long, Self::ULong,
        Self::F32, Self::F64, Self::Number, Self::ByteBool, Self::BitBool,
    ];

    /// The code character of each of [`ALL`].
    ///
    /// [`ALL`]: Self::ALL
    pub const CODES: &'static [char] = &['c', 'C', 's', 'S', 'l', 'L', 'f', 'd', 'n', 'B', 'b'];

    /// Returns the `Encoding` named by `code`, if any.
    pub fn from_code(code: char) -> Option<Self> {
        Self::CODES.iter().position(|&c| c == code).map(|i| Self::ALL[i])
    }

    /// Returns the character that names `self`.
    pub fn code(self) -> char { Self::CODES[self as usize] }

    /// The number of bits each element occupies in the buffer.
    pub const fn bit_width(self) -> usize {
        match self {
            Self::I8 | Self::U8 | Self::ByteBool => 8,
            Self::I16 | Self::U16 => 16,
            Self::Long => 8 * std::mem::size_of::<isize>(),
            Self::ULong => 8 * std::mem::size_of::<usize>(),
            Self::F32 => 32,
            Self::F64 | Self::Number => 64,
            Self::BitBool => 1,
        }
    }

    /// Returns `true` for [`ByteBool`] and [`BitBool`].
    ///
    /// [`ByteBool`]: Self::ByteBool
    /// [`BitBool`]: Self::BitBool
    pub const fn is_boolean(self) -> bool { matches!(self, Self::ByteBool | Self::BitBool) }

    /// Returns `true` for the unsigned integer encodings.
    pub const fn is_unsigned(self) -> bool { matches!(self, Self::U8 | Self::U16 | Self::ULong) }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.code()) }
}

impl TryFrom<char> for Encoding {
    type Error = Error;

    fn try_from(code: char) -> Result<Self, Error> {
        Self::from_code(code).ok_or_else(|| Error::InvalidEncoding { code: code.to_string() })
    }
}

impl FromStr for Encoding {
    type Err = Error;

    /// Accepts exactly one code character.
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(Error::InvalidEncoding { code: s.to_string() }),
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(Encoding::ALL.len(), Encoding::CODES.len());
        for (i, &e) in Encoding::ALL.iter().enumerate() {
            assert_eq!(e as usize, i);
            assert_eq!(Encoding::from_code(e.code()), Some(e));
            assert_eq!(e.to_string().parse::<Encoding>(), Ok(e));
        }
    }

    #[test]
    fn bad_codes() {
        for s in ["", "x", "cc", "ll", "N"] {
            assert_eq!(s.parse::<Encoding>(), Err(Error::InvalidEncoding { code: s.to_string() }));
        }
    }

    #[test]
    fn widths() {
        assert_eq!(Encoding::I8.bit_width(), 8);
        assert_eq!(Encoding::U16.bit_width(), 16);
        assert_eq!(Encoding::Long.bit_width(), usize::BITS as usize);
        assert_eq!(Encoding::F32.bit_width(), 32);
        assert_eq!(Encoding::Number.bit_width(), 64);
        assert_eq!(Encoding::ByteBool.bit_width(), 8);
        assert_eq!(Encoding::BitBool.bit_width(), 1);
    }

    #[test]
    fn classes() {
        let unsigned: Vec<_> = Encoding::ALL.iter().filter(|e| e.is_unsigned()).collect();
        assert_eq!(unsigned, [&Encoding::U8, &Encoding::U16, &Encoding::ULong]);
        let boolean: Vec<_> = Encoding::ALL.iter().filter(|e| e.is_boolean()).collect();
        assert_eq!(boolean, [&Encoding::ByteBool, &Encoding::BitBool]);
    }
}
