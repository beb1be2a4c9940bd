//! Kernels that treat a buffer as an opaque bitset.
//!
//! The bytes are processed a word at a time, and then any remaining bytes one
//! at a time. The result is identical to applying the operator to each byte.

use super::{Scalar, WORD_BYTES};
use super::ops::{Binary, Unary, BitwiseBinary, BitwiseUnary};

/// Sets `dst[i] = B::call(dst[i], src[i])` for every byte.
pub fn zip_bytes<B: BitwiseBinary>(dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len());
    let split = dst.len() - dst.len() % WORD_BYTES;
    let (dst_words, dst_tail) = dst.split_at_mut(split);
    let (src_words, src_tail) = src.split_at(split);
    for (d, s) in dst_words.chunks_exact_mut(WORD_BYTES).zip(src_words.chunks_exact(WORD_BYTES)) {
        <B as Binary<usize>>::call(usize::read(d), usize::read(s)).write(d);
    }
    for (d, &s) in dst_tail.iter_mut().zip(src_tail) {
        *d = <B as Binary<u8>>::call(*d, s);
    }
}

/// Sets `dst[i] = U::call(dst[i])` for every byte.
pub fn map_bytes<U: BitwiseUnary>(dst: &mut [u8]) {
    let split = dst.len() - dst.len() % WORD_BYTES;
    let (dst_words, dst_tail) = dst.split_at_mut(split);
    for d in dst_words.chunks_exact_mut(WORD_BYTES) {
        <U as Unary<usize>>::call(usize::read(d)).write(d);
    }
    for d in dst_tail {
        *d = <U as Unary<u8>>::call(*d);
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::ops::{BitAnd, BitOr, BitXor, Not};

    fn pattern(len: usize, seed: u8) -> Vec<u8> {
        (0..len).map(|i| (i as u8).wrapping_mul(37).wrapping_add(seed)).collect()
    }

    fn assert_zip<B: BitwiseBinary>() {
        for len in [0, 1, WORD_BYTES - 1, WORD_BYTES, WORD_BYTES + 3, 5 * WORD_BYTES + 1] {
            let src = pattern(len, 11);
            let mut dst = pattern(len, 200);
            let expected: Vec<u8> = dst.iter().zip(&src).map(|(&d, &s)| <B as Binary<u8>>::call(d, s)).collect();
            zip_bytes::<B>(&mut dst, &src);
            assert_eq!(dst, expected);
        }
    }

    #[test]
    fn zip_matches_bytewise() {
        assert_zip::<BitAnd>();
        assert_zip::<BitOr>();
        assert_zip::<BitXor>();
    }

    #[test]
    fn map_matches_bytewise() {
        for len in [0, 1, WORD_BYTES, 3 * WORD_BYTES + 2] {
            let mut dst = pattern(len, 5);
            let expected: Vec<u8> = dst.iter().map(|&d| <Not as Unary<u8>>::call(d)).collect();
            map_bytes::<Not>(&mut dst);
            assert_eq!(dst, expected);
            map_bytes::<Not>(&mut dst);
            assert_eq!(dst, pattern(len, 5));
        }
    }
}
