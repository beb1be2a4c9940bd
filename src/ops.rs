//! Generic programming over elementwise operators.
//!
//! For each operator this module contains a type of the same name that cannot
//! be instantiated and that implements [`Binary`] or [`Unary`]. For example,
//! [`BitOr`] corresponds to [`std::ops::BitOr`]. These are passed as type
//! parameters to the kernels that run over an [`Array`]'s buffer.
//!
//! [`Array`]: super::Array

use super::{Scalar};

/// A function that combines two `T`s.
///
/// This trait has no methods that take `self`. It makes sense to implement it
/// for types that cannot be instantiated, such as empty enumerations.
pub trait Binary<T> {
    /// A name for log messages.
    const NAME: &'static str;

    fn call(t: T, u: T) -> T;
}

/// A function that transforms a `T`.
pub trait Unary<T> {
    /// A name for log messages.
    const NAME: &'static str;

    fn call(t: T) -> T;
}

// ----------------------------------------------------------------------------

/// Wrapping or IEEE addition.
pub enum Add {}

impl<T: Scalar> Binary<T> for Add {
    const NAME: &'static str = "add";
    #[inline(always)]
    fn call(t: T, u: T) -> T { t.add(u) }
}

// ----------------------------------------------------------------------------

/// Wrapping or IEEE multiplication.
pub enum Mul {}

impl<T: Scalar> Binary<T> for Mul {
    const NAME: &'static str = "multiply";
    #[inline(always)]
    fn call(t: T, u: T) -> T { t.mul(u) }
}

// ----------------------------------------------------------------------------

/// Wrapping or IEEE negation.
pub enum Neg {}

impl<T: Scalar> Unary<T> for Neg {
    const NAME: &'static str = "negate";
    #[inline(always)]
    fn call(t: T) -> T { t.neg() }
}

// ----------------------------------------------------------------------------

pub enum BitAnd {}

impl<T> Binary<T> for BitAnd where T: std::ops::BitAnd<Output=T> {
    const NAME: &'static str = "band";
    #[inline(always)]
    fn call(t: T, u: T) -> T { t.bitand(u) }
}

// ----------------------------------------------------------------------------

pub enum BitOr {}

impl<T> Binary<T> for BitOr where T: std::ops::BitOr<Output=T> {
    const NAME: &'static str = "bor";
    #[inline(always)]
    fn call(t: T, u: T) -> T { t.bitor(u) }
}

// ----------------------------------------------------------------------------

pub enum BitXor {}

impl<T> Binary<T> for BitXor where T: std::ops::BitXor<Output=T> {
    const NAME: &'static str = "bxor";
    #[inline(always)]
    fn call(t: T, u: T) -> T { t.bitxor(u) }
}

// ----------------------------------------------------------------------------

pub enum Not {}

impl<T> Unary<T> for Not where T: std::ops::Not<Output=T> {
    const NAME: &'static str = "bnot";
    #[inline(always)]
    fn call(t: T) -> T { t.not() }
}

// ----------------------------------------------------------------------------

/// Implemented by the [`Binary`]s that apply to the raw bytes of a buffer,
/// a word at a time.
pub trait BitwiseBinary: Binary<usize> + Binary<u8> {}

impl<B: Binary<usize> + Binary<u8>> BitwiseBinary for B {}

/// Implemented by the [`Unary`]s that apply to the raw bytes of a buffer,
/// a word at a time.
pub trait BitwiseUnary: Unary<usize> + Unary<u8> {}

impl<U: Unary<usize> + Unary<u8>> BitwiseUnary for U {}

/// Implemented by the [`Binary`]s that apply to every numeric [`Encoding`].
///
/// [`Encoding`]: super::Encoding
pub trait NumericBinary:
    Binary<i8> + Binary<u8> + Binary<i16> + Binary<u16> +
    Binary<isize> + Binary<usize> + Binary<f32> + Binary<f64>
{}

impl<B> NumericBinary for B where
    B: Binary<i8> + Binary<u8> + Binary<i16> + Binary<u16>,
    B: Binary<isize> + Binary<usize> + Binary<f32> + Binary<f64>,
{}

/// Implemented by the [`Unary`]s that apply to every signed numeric
/// [`Encoding`].
///
/// [`Encoding`]: super::Encoding
pub trait SignedUnary:
    Unary<i8> + Unary<i16> + Unary<isize> + Unary<f32> + Unary<f64>
{}

impl<U> SignedUnary for U where
    U: Unary<i8> + Unary<i16> + Unary<isize> + Unary<f32> + Unary<f64>,
{}

// ----------------------------------------------------------------------------
