//! Kernels that apply arithmetic to the logical elements of a buffer.

use tracing::{trace};

use super::{Encoding, Error, Result, Scalar};
use super::ops::{Binary, Unary, NumericBinary, SignedUnary};

fn zip_scalars<T: Scalar, B: Binary<T>>(dst: &mut [u8], src: &[u8], length: usize) {
    let dst = dst.chunks_exact_mut(T::WIDTH).take(length);
    for (d, s) in dst.zip(src.chunks_exact(T::WIDTH)) {
        B::call(T::read(d), T::read(s)).write(d);
    }
}

fn map_scalars<T: Scalar, U: Unary<T>>(dst: &mut [u8], length: usize) {
    for d in dst.chunks_exact_mut(T::WIDTH).take(length) {
        U::call(T::read(d)).write(d);
    }
}

/// Sets each of the first `length` elements of `dst` to `B::call(d, s)`
/// where `s` is the corresponding element of `src`.
///
/// Fails without writing anything if `encoding` is boolean.
pub fn zip<B: NumericBinary>(encoding: Encoding, dst: &mut [u8], src: &[u8], length: usize) -> Result<()> {
    let op = <B as Binary<f64>>::NAME;
    trace!(op, %encoding, length, "elementwise");
    match encoding {
        Encoding::I8 => zip_scalars::<i8, B>(dst, src, length),
        Encoding::U8 => zip_scalars::<u8, B>(dst, src, length),
        Encoding::I16 => zip_scalars::<i16, B>(dst, src, length),
        Encoding::U16 => zip_scalars::<u16, B>(dst, src, length),
        Encoding::Long => zip_scalars::<isize, B>(dst, src, length),
        Encoding::ULong => zip_scalars::<usize, B>(dst, src, length),
        Encoding::F32 => zip_scalars::<f32, B>(dst, src, length),
        Encoding::F64 | Encoding::Number => zip_scalars::<f64, B>(dst, src, length),
        Encoding::ByteBool | Encoding::BitBool => {
            return Err(Error::UnsupportedOperation { operation: op, encoding });
        },
    }
    Ok(())
}

/// Sets each of the first `length` elements of `dst` to `U::call(d)`.
///
/// Fails without writing anything if `encoding` is boolean or unsigned.
pub fn map<U: SignedUnary>(encoding: Encoding, dst: &mut [u8], length: usize) -> Result<()> {
    let op = <U as Unary<f64>>::NAME;
    trace!(op, %encoding, length, "elementwise");
    match encoding {
        Encoding::I8 => map_scalars::<i8, U>(dst, length),
        Encoding::I16 => map_scalars::<i16, U>(dst, length),
        Encoding::Long => map_scalars::<isize, U>(dst, length),
        Encoding::F32 => map_scalars::<f32, U>(dst, length),
        Encoding::F64 | Encoding::Number => map_scalars::<f64, U>(dst, length),
        Encoding::U8 | Encoding::U16 | Encoding::ULong | Encoding::ByteBool | Encoding::BitBool => {
            return Err(Error::UnsupportedOperation { operation: op, encoding });
        },
    }
    Ok(())
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::ops::{Add, Mul, Neg};

    fn bytes<T: Scalar>(ts: &[T]) -> Vec<u8> {
        let mut out = vec![0u8; ts.len() * T::WIDTH + 1];
        for (i, &t) in ts.iter().enumerate() { t.write(&mut out[i * T::WIDTH..]); }
        out
    }

    #[test]
    fn add_i8_wraps() {
        let mut a = bytes(&[100i8, -100, 1]);
        let b = bytes(&[100i8, -100, 2]);
        zip::<Add>(Encoding::I8, &mut a, &b, 3).unwrap();
        assert_eq!(a, bytes(&[-56i8, 56, 3]));
    }

    #[test]
    fn multiply_floats() {
        let mut a = bytes(&[1.5f64, -2.0]);
        zip::<Mul>(Encoding::Number, &mut a, &bytes(&[2.0f64, 0.5]), 2).unwrap();
        assert_eq!(a, bytes(&[3.0f64, -1.0]));
    }

    #[test]
    fn guard_byte_untouched() {
        let mut a = bytes(&[1u16, 2]);
        let last = a.len() - 1;
        a[last] = 0x5A;
        zip::<Add>(Encoding::U16, &mut a, &bytes(&[3u16, 4]), 2).unwrap();
        assert_eq!(&a[..last], &bytes(&[4u16, 6])[..last]);
        assert_eq!(a[last], 0x5A);
    }

    #[test]
    fn negate() {
        let mut a = bytes(&[isize::MIN, 7]);
        map::<Neg>(Encoding::Long, &mut a, 2).unwrap();
        assert_eq!(a, bytes(&[isize::MIN, -7]));
    }

    #[test]
    fn rejections() {
        let mut a = vec![1u8; 4];
        for encoding in [Encoding::ByteBool, Encoding::BitBool] {
            assert_eq!(
                zip::<Add>(encoding, &mut a, &[1u8; 4], 2),
                Err(Error::UnsupportedOperation { operation: "add", encoding }),
            );
            assert_eq!(
                zip::<Mul>(encoding, &mut a, &[1u8; 4], 2),
                Err(Error::UnsupportedOperation { operation: "multiply", encoding }),
            );
        }
        for encoding in [Encoding::U8, Encoding::U16, Encoding::ULong, Encoding::ByteBool, Encoding::BitBool] {
            assert_eq!(
                map::<Neg>(encoding, &mut a, 2),
                Err(Error::UnsupportedOperation { operation: "negate", encoding }),
            );
        }
        assert_eq!(a, [1u8; 4]);
    }
}
