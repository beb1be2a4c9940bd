//! Element values exchanged with the host.

use num_traits::{AsPrimitive};

use super::{Encoding, Error, Result, Scalar};

/// A value supplied by the host, before it is converted to an [`Encoding`].
///
/// Boolean encodings accept only `Bool`. All other encodings accept only
/// `Number`, which is truncated to the width of the encoding.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
}

impl Value {
    fn kind(self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self { Self::Number(n) }
}

macro_rules! impl_value_from {
    ($($ty:ty),*: $conv:ident) => {$(
        impl From<$ty> for Value {
            fn from(n: $ty) -> Self { Self::Number($conv(n)) }
        }
    )*};
}

fn exact<T: Into<f64>>(n: T) -> f64 { n.into() }

// Values beyond 2^53 round to the nearest `f64`.
fn rounded<T: AsPrimitive<f64>>(n: T) -> f64 { n.as_() }

impl_value_from!(i8, u8, i16, u16, i32, u32, f32: exact);
impl_value_from!(i64, u64, isize, usize: rounded);

impl From<bool> for Value {
    fn from(b: bool) -> Self { Self::Bool(b) }
}

// ----------------------------------------------------------------------------

/// An element of an [`Array`], typed according to its [`Encoding`].
///
/// [`Array`]: super::Array
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Element {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    Long(isize),
    ULong(usize),
    F32(f32),
    F64(f64),
    Number(f64),
    Bool(bool),
}

impl Element {
    /// Converts `value` to an element of `encoding`.
    pub fn from_value(encoding: Encoding, value: Value) -> Result<Self> {
        Ok(match (encoding, value) {
            (Encoding::ByteBool | Encoding::BitBool, Value::Bool(b)) => Self::Bool(b),
            (Encoding::I8, Value::Number(n)) => Self::I8(Scalar::from_number(n)),
            (Encoding::U8, Value::Number(n)) => Self::U8(Scalar::from_number(n)),
            (Encoding::I16, Value::Number(n)) => Self::I16(Scalar::from_number(n)),
            (Encoding::U16, Value::Number(n)) => Self::U16(Scalar::from_number(n)),
            (Encoding::Long, Value::Number(n)) => Self::Long(Scalar::from_number(n)),
            (Encoding::ULong, Value::Number(n)) => Self::ULong(Scalar::from_number(n)),
            (Encoding::F32, Value::Number(n)) => Self::F32(Scalar::from_number(n)),
            (Encoding::F64, Value::Number(n)) => Self::F64(n),
            (Encoding::Number, Value::Number(n)) => Self::Number(n),
            (encoding, value) => return Err(Error::ValueMismatch { encoding, found: value.kind() }),
        })
    }

    /// The zero or `false` element of `encoding`.
    pub fn zero(encoding: Encoding) -> Self {
        match encoding {
            Encoding::I8 => Self::I8(0),
            Encoding::U8 => Self::U8(0),
            Encoding::I16 => Self::I16(0),
            Encoding::U16 => Self::U16(0),
            Encoding::Long => Self::Long(0),
            Encoding::ULong => Self::ULong(0),
            Encoding::F32 => Self::F32(0.0),
            Encoding::F64 => Self::F64(0.0),
            Encoding::Number => Self::Number(0.0),
            Encoding::ByteBool | Encoding::BitBool => Self::Bool(false),
        }
    }

    /// Converts `self` back into a host value.
    pub fn to_value(self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(b),
            Self::I8(x) => Value::Number(x.to_number()),
            Self::U8(x) => Value::Number(x.to_number()),
            Self::I16(x) => Value::Number(x.to_number()),
            Self::U16(x) => Value::Number(x.to_number()),
            Self::Long(x) => Value::Number(x.to_number()),
            Self::ULong(x) => Value::Number(x.to_number()),
            Self::F32(x) => Value::Number(x.to_number()),
            Self::F64(x) | Self::Number(x) => Value::Number(x),
        }
    }

    /// Returns the numeric value, or `None` for a boolean.
    pub fn as_number(self) -> Option<f64> {
        match self.to_value() {
            Value::Number(n) => Some(n),
            Value::Bool(_) => None,
        }
    }

    /// Returns the boolean value, or `None` for a number.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion() {
        assert_eq!(Element::from_value(Encoding::I8, 300.into()), Ok(Element::I8(44)));
        assert_eq!(Element::from_value(Encoding::U16, (-1).into()), Ok(Element::U16(u16::MAX)));
        assert_eq!(Element::from_value(Encoding::Number, 2.5.into()), Ok(Element::Number(2.5)));
        assert_eq!(Element::from_value(Encoding::BitBool, true.into()), Ok(Element::Bool(true)));
        assert_eq!(Element::from_value(Encoding::ByteBool, false.into()), Ok(Element::Bool(false)));
    }

    #[test]
    fn host_integers() {
        assert_eq!(Value::from(200u8), Value::Number(200.0));
        assert_eq!(Value::from(-3i64), Value::Number(-3.0));
        assert_eq!(Value::from(7usize), Value::Number(7.0));
        assert_eq!(Value::from(u32::MAX), Value::Number(4294967295.0));
        assert_eq!(Value::from(0.5f32), Value::Number(0.5));
        assert_eq!(Value::from(u64::MAX), Value::Number(18446744073709551616.0));
        assert_eq!(Element::from_value(Encoding::Long, (-9isize).into()), Ok(Element::Long(-9)));
    }

    #[test]
    fn mismatch() {
        assert_eq!(
            Element::from_value(Encoding::BitBool, 1.into()),
            Err(Error::ValueMismatch { encoding: Encoding::BitBool, found: "number" }),
        );
        assert_eq!(
            Element::from_value(Encoding::F32, true.into()),
            Err(Error::ValueMismatch { encoding: Encoding::F32, found: "boolean" }),
        );
    }

    #[test]
    fn zero() {
        for &e in Encoding::ALL {
            let z = Element::zero(e);
            if e.is_boolean() {
                assert_eq!(z.as_bool(), Some(false));
            } else {
                assert_eq!(z.as_number(), Some(0.0));
            }
        }
        assert_eq!(Element::zero(Encoding::Long), Element::Long(0));
    }
}
