//! The packed byte buffer behind an [`Array`].
//!
//! [`Array`]: super::Array

use tracing::{debug};

use super::{Encoding, Element, Error, Result, Scalar, GUARD_BYTES};

/// Returns the number of bytes needed to hold `length` elements of
/// `encoding`, including [`GUARD_BYTES`], or `None` on overflow.
pub fn byte_len(encoding: Encoding, length: usize) -> Option<usize> {
    let bits = length.checked_mul(encoding.bit_width())?;
    (bits / 8 + usize::from(bits % 8 != 0)).checked_add(GUARD_BYTES)
}

/// An owned, zero-initialised, fixed-length byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Buffer(Box<[u8]>);

impl Buffer {
    /// Allocates `len` zero bytes, reporting failure instead of aborting.
    ///
    /// Stable Rust has no fallible zeroed allocation, so the zeroes are
    /// written eagerly and every page is touched up front, unlike `calloc`.
    pub fn zeroed(len: usize) -> Result<Self> {
        let mut bytes = Self::reserve(len)?;
        bytes.resize(len, 0);
        Ok(Self(bytes.into_boxed_slice()))
    }

    /// Allocates a copy of `self`.
    pub fn try_clone(&self) -> Result<Self> {
        let mut bytes = Self::reserve(self.0.len())?;
        bytes.extend_from_slice(&self.0);
        Ok(Self(bytes.into_boxed_slice()))
    }

    fn reserve(len: usize) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len).map_err(|e| {
            debug!(len, error = %e, "array allocation failed");
            Error::AllocationFailure { bytes: Some(len) }
        })?;
        Ok(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] { &mut self.0 }

    /// Zeroes every byte, including the guard bytes.
    pub fn clear(&mut self) { self.0.fill(0); }

    fn scalar<T: Scalar>(&self, offset: usize) -> T { T::read(&self.0[offset * T::WIDTH..]) }

    fn set_scalar<T: Scalar>(&mut self, offset: usize, t: T) { t.write(&mut self.0[offset * T::WIDTH..]) }

    /// Reads the element at linear offset `offset`.
    pub fn read(&self, encoding: Encoding, offset: usize) -> Element {
        match encoding {
            Encoding::I8 => Element::I8(self.scalar(offset)),
            Encoding::U8 => Element::U8(self.scalar(offset)),
            Encoding::I16 => Element::I16(self.scalar(offset)),
            Encoding::U16 => Element::U16(self.scalar(offset)),
            Encoding::Long => Element::Long(self.scalar(offset)),
            Encoding::ULong => Element::ULong(self.scalar(offset)),
            Encoding::F32 => Element::F32(self.scalar(offset)),
            Encoding::F64 => Element::F64(self.scalar(offset)),
            Encoding::Number => Element::Number(self.scalar(offset)),
            Encoding::ByteBool => Element::Bool(self.0[offset] != 0),
            Encoding::BitBool => Element::Bool(self.0[offset / 8] & (1 << (offset % 8)) != 0),
        }
    }

    /// Writes `element` at linear offset `offset`.
    ///
    /// `element` must have been made for `encoding`, e.g. by
    /// [`Element::from_value()`] or by [`Self::read()`].
    pub fn write(&mut self, encoding: Encoding, offset: usize, element: Element) {
        match element {
            Element::I8(x) => self.set_scalar(offset, x),
            Element::U8(x) => self.set_scalar(offset, x),
            Element::I16(x) => self.set_scalar(offset, x),
            Element::U16(x) => self.set_scalar(offset, x),
            Element::Long(x) => self.set_scalar(offset, x),
            Element::ULong(x) => self.set_scalar(offset, x),
            Element::F32(x) => self.set_scalar(offset, x),
            Element::F64(x) | Element::Number(x) => self.set_scalar(offset, x),
            Element::Bool(b) => if encoding == Encoding::BitBool {
                let mask = 1 << (offset % 8);
                let byte = &mut self.0[offset / 8];
                if b { *byte |= mask; } else { *byte &= !mask; }
            } else {
                self.0[offset] = u8::from(b);
            },
        }
    }
}

// ----------------------------------------------------------------------------
