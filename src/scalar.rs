//! The numeric element types and their arithmetic.

use std::fmt::{Debug};

use num_traits::{WrappingAdd, WrappingMul, WrappingNeg};

/// Implemented by the Rust type of each numeric [`Encoding`].
///
/// Integer arithmetic wraps at the width of the type. Float arithmetic is
/// IEEE 754.
///
/// [`Encoding`]: super::Encoding
pub trait Scalar: 'static + Debug + Copy + PartialEq {
    /// The number of bytes occupied by `Self` in a buffer.
    const WIDTH: usize = std::mem::size_of::<Self>();

    /// Reads a `Self` from the first [`Self::WIDTH`] bytes of `bytes`.
    fn read(bytes: &[u8]) -> Self;

    /// Writes `self` into the first [`Self::WIDTH`] bytes of `bytes`.
    fn write(self, bytes: &mut [u8]);

    /// Converts a host number to `Self`.
    ///
    /// Integer types truncate towards zero and then wrap; NaN becomes zero.
    fn from_number(n: f64) -> Self;

    /// Converts `self` to a host number, possibly losing precision.
    fn to_number(self) -> f64;

    fn add(self, other: Self) -> Self;
    fn mul(self, other: Self) -> Self;
    fn neg(self) -> Self;
}

macro_rules! impl_scalar_common {
    ($ty:ty) => {
        fn read(bytes: &[u8]) -> Self {
            let mut raw = [0u8; std::mem::size_of::<$ty>()];
            raw.copy_from_slice(&bytes[..Self::WIDTH]);
            <$ty>::from_ne_bytes(raw)
        }

        fn write(self, bytes: &mut [u8]) {
            bytes[..Self::WIDTH].copy_from_slice(&self.to_ne_bytes());
        }

        fn to_number(self) -> f64 { self as f64 }
    };
}

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            impl_scalar_common!($ty);

            // `as` saturates at the bounds of `i128`, which covers every
            // integer encoding, and the second `as` wraps.
            fn from_number(n: f64) -> Self { (n as i128) as $ty }

            #[inline(always)]
            fn add(self, other: Self) -> Self { WrappingAdd::wrapping_add(&self, &other) }
            #[inline(always)]
            fn mul(self, other: Self) -> Self { WrappingMul::wrapping_mul(&self, &other) }
            #[inline(always)]
            fn neg(self) -> Self { WrappingNeg::wrapping_neg(&self) }
        }
    };
}

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            impl_scalar_common!($ty);

            fn from_number(n: f64) -> Self { n as $ty }

            #[inline(always)]
            fn add(self, other: Self) -> Self { self + other }
            #[inline(always)]
            fn mul(self, other: Self) -> Self { self * other }
            #[inline(always)]
            fn neg(self) -> Self { -self }
        }
    };
}

impl_scalar_int!(i8);
impl_scalar_int!(u8);
impl_scalar_int!(i16);
impl_scalar_int!(u16);
impl_scalar_int!(isize);
impl_scalar_int!(usize);
impl_scalar_float!(f32);
impl_scalar_float!(f64);

// ----------------------------------------------------------------------------
