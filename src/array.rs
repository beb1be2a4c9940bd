use num_traits::{ToPrimitive};
use smallvec::{smallvec};
use tracing::{debug, trace};

use super::{Encoding, Shape, Coords, Element, Value, Error, Result};
use super::buffer::{self, Buffer};
use super::ops::{Binary, Add, Mul, Neg, BitAnd, BitOr, BitXor, Not, BitwiseBinary};
use super::{arith, bitwise};

/// A dense, fixed-shape array of elements of one [`Encoding`].
///
/// The elements are packed into an owned byte buffer in order of increasing
/// [`Shape::linear_offset()`], so the first coordinate varies fastest.
///
/// ```
/// use densearray::{Array, Encoding, Element};
/// let mut a = Array::new(Encoding::I16, &[2, 3]).unwrap();
/// a.set(&[1, 2], -7).unwrap();
/// assert_eq!(a.get(&[1, 2]).unwrap(), Element::I16(-7));
/// assert_eq!(a.get(&[0, 2]).unwrap(), Element::I16(0));
/// ```
///
/// Two arrays are equal if they have the same encoding, the same shape and
/// the same elements. Floating-point elements are compared by bit pattern,
/// so a NaN equals itself but `0.0` differs from `-0.0`. Buffer bytes that
/// hold no element, such as the guard bytes, are ignored.
#[derive(Debug, Clone)]
pub struct Array {
    encoding: Encoding,
    shape: Shape,
    buffer: Buffer,
}

impl Array {
    /// Constructs a zero-initialised `Array`.
    ///
    /// Everything is validated before the buffer is allocated.
    pub fn new(encoding: Encoding, extents: &[isize]) -> Result<Self> {
        let shape = Shape::new(extents)?;
        let bytes = buffer::byte_len(encoding, shape.len())
            .ok_or(Error::AllocationFailure { bytes: None })?;
        let buffer = Buffer::zeroed(bytes)?;
        debug!(%encoding, extents = ?shape.extents(), bytes, "new array");
        Ok(Self {encoding, shape, buffer})
    }

    /// Constructs an `Array` whose encoding is named by a one-character
    /// `code`, as a host program would.
    ///
    /// ```
    /// use densearray::{Array, Error};
    /// assert!(Array::with_code("b", &[4, 4]).is_ok());
    /// assert_eq!(
    ///     Array::with_code("q", &[4]).unwrap_err(),
    ///     Error::InvalidEncoding { code: "q".into() },
    /// );
    /// ```
    pub fn with_code(code: &str, extents: &[isize]) -> Result<Self> {
        Self::new(code.parse()?, extents)
    }

    pub fn encoding(&self) -> Encoding { self.encoding }

    pub fn shape(&self) -> &Shape { &self.shape }

    /// The number of dimensions.
    pub fn ndims(&self) -> usize { self.shape.ndims() }

    /// The total number of elements.
    pub fn len(&self) -> usize { self.shape.len() }

    /// The whole buffer, including its guard bytes.
    pub fn as_bytes(&self) -> &[u8] { self.buffer.as_bytes() }

    /// Returns the address of the buffer, for use by foreign code.
    ///
    /// # Safety
    ///
    /// The pointer is valid for [`as_bytes().len()`] bytes until `self` is
    /// dropped. Anything written through it bypasses every check this type
    /// makes; the caller must not write through it while any reference
    /// obtained from `self` is live.
    ///
    /// [`as_bytes().len()`]: Self::as_bytes()
    pub unsafe fn raw_pointer(&mut self) -> *mut u8 { self.buffer.as_bytes_mut().as_mut_ptr() }

    // ------------------------------------------------------------------------

    /// Returns the element at `coords`.
    ///
    /// Fails with [`Error::ArityMismatch`] or [`Error::IndexOutOfRange`] if
    /// `coords` is not a valid coordinate tuple. The coordinates may be of
    /// any primitive integer type.
    pub fn get<I: ToPrimitive>(&self, coords: &[I]) -> Result<Element> {
        let offset = self.shape.linear_offset(&self.shape.check(coords)?);
        Ok(self.buffer.read(self.encoding, offset))
    }

    /// Replaces the element at `coords`.
    ///
    /// In addition to the checks of [`Self::get()`], fails with
    /// [`Error::ValueMismatch`] if `value` is the wrong kind for the encoding.
    /// Numbers are truncated to fit the encoding as described at
    /// [`Scalar::from_number()`].
    ///
    /// [`Scalar::from_number()`]: super::Scalar::from_number()
    pub fn set<I: ToPrimitive>(&mut self, coords: &[I], value: impl Into<Value>) -> Result<()> {
        let offset = self.shape.linear_offset(&self.shape.check(coords)?);
        let element = Element::from_value(self.encoding, value.into())?;
        self.buffer.write(self.encoding, offset, element);
        Ok(())
    }

    /// Sets every element to `value`.
    ///
    /// ```
    /// use densearray::{Array, Encoding, Element};
    /// let mut a = Array::new(Encoding::BitBool, &[3, 3]).unwrap();
    /// a.fill(true).unwrap();
    /// assert_eq!(a.get(&[2, 1]).unwrap(), Element::Bool(true));
    /// a.clear();
    /// assert_eq!(a.get(&[2, 1]).unwrap(), Element::Bool(false));
    /// ```
    pub fn fill(&mut self, value: impl Into<Value>) -> Result<()> {
        let element = Element::from_value(self.encoding, value.into())?;
        for offset in 0..self.len() {
            self.buffer.write(self.encoding, offset, element);
        }
        Ok(())
    }

    /// Zeroes the entire buffer, so that every element becomes zero or
    /// `false`.
    pub fn clear(&mut self) { self.buffer.clear(); }

    /// Calls `f` with every coordinate tuple and its element, in order of
    /// increasing linear offset.
    pub fn each(&self, mut f: impl FnMut(&[usize], Element)) {
        self.shape.each(|coords| {
            f(coords, self.buffer.read(self.encoding, self.shape.linear_offset(coords)));
        });
    }

    // ------------------------------------------------------------------------

    /// Returns an independent copy of `self`.
    ///
    /// Unlike [`Clone::clone()`], reports allocation failure instead of
    /// aborting.
    pub fn copy(&self) -> Result<Self> {
        let buffer = self.buffer.try_clone()?;
        debug!(encoding = %self.encoding, bytes = buffer.as_bytes().len(), "copy array");
        Ok(Self {encoding: self.encoding, shape: self.shape.clone(), buffer})
    }

    /// Returns a copy of `self` rotated by `shifts`.
    ///
    /// The element at coordinates `c` moves to coordinates
    /// `(c[i] + shifts[i]).rem_euclid(extent[i])`. Shifts may be negative or
    /// larger than the extent.
    ///
    /// ```
    /// use densearray::{Array, Encoding, Element};
    /// let mut a = Array::new(Encoding::U8, &[4]).unwrap();
    /// for i in 0..4 { a.set(&[i], 10 * i as i32).unwrap(); }
    /// let b = a.shift_copy(&[-1]).unwrap();
    /// assert_eq!(b.get(&[0]).unwrap(), Element::U8(10));
    /// assert_eq!(b.get(&[3]).unwrap(), Element::U8(0));
    /// ```
    pub fn shift_copy(&self, shifts: &[isize]) -> Result<Self> {
        let shifts = self.shape.normalize_shifts(shifts)?;
        let mut buffer = Buffer::zeroed(self.buffer.as_bytes().len())?;
        debug!(encoding = %self.encoding, shifts = ?shifts.as_slice(), "shift copy");
        let extents = self.shape.extents();
        let mut dst: Coords = smallvec![0; self.ndims()];
        self.shape.each(|src| {
            for (d, (&c, &s)) in src.iter().zip(&shifts).enumerate() {
                let c = c + s;
                dst[d] = if c >= extents[d] { c - extents[d] } else { c };
            }
            let element = self.buffer.read(self.encoding, self.shape.linear_offset(src));
            buffer.write(self.encoding, self.shape.linear_offset(&dst), element);
        });
        Ok(Self {encoding: self.encoding, shape: self.shape.clone(), buffer})
    }

    // ------------------------------------------------------------------------

    /// Checks that `self` and `other` can be combined elementwise.
    fn check_compatible(&self, other: &Self) -> Result<()> {
        if self.encoding != other.encoding {
            return Err(Error::TypeMismatch { left: self.encoding, right: other.encoding });
        }
        self.shape.check_same(&other.shape)
    }

    fn bitwise<B: BitwiseBinary>(&mut self, other: &Self) -> Result<()> {
        self.check_compatible(other)?;
        let op = <B as Binary<u8>>::NAME;
        trace!(op, encoding = %self.encoding, "bitwise");
        bitwise::zip_bytes::<B>(self.buffer.as_bytes_mut(), other.buffer.as_bytes());
        Ok(())
    }

    /// Inverts every bit of the buffer.
    pub fn bnot(&mut self) {
        trace!(op = "bnot", encoding = %self.encoding, "bitwise");
        bitwise::map_bytes::<Not>(self.buffer.as_bytes_mut());
    }

    /// Sets each bit of the buffer to the OR of itself and the corresponding
    /// bit of `other`.
    ///
    /// For numeric encodings this manipulates the bit patterns of the stored
    /// values, not their numeric meaning.
    pub fn bor(&mut self, other: &Self) -> Result<()> { self.bitwise::<BitOr>(other) }

    /// Like [`Self::bor()`] but computes AND.
    ///
    /// ```
    /// use densearray::{Array, Encoding, Error};
    /// let mut a = Array::new(Encoding::BitBool, &[8]).unwrap();
    /// let b = Array::new(Encoding::ByteBool, &[8]).unwrap();
    /// assert_eq!(
    ///     a.band(&b),
    ///     Err(Error::TypeMismatch { left: Encoding::BitBool, right: Encoding::ByteBool }),
    /// );
    /// ```
    pub fn band(&mut self, other: &Self) -> Result<()> { self.bitwise::<BitAnd>(other) }

    /// Like [`Self::bor()`] but computes XOR.
    pub fn bxor(&mut self, other: &Self) -> Result<()> { self.bitwise::<BitXor>(other) }

    // ------------------------------------------------------------------------

    /// Adds each element of `other` to the corresponding element of `self`.
    ///
    /// Integers wrap on overflow. Fails with [`Error::UnsupportedOperation`]
    /// for boolean encodings.
    pub fn add(&mut self, other: &Self) -> Result<()> {
        self.check_compatible(other)?;
        arith::zip::<Add>(self.encoding, self.buffer.as_bytes_mut(), other.buffer.as_bytes(), self.shape.len())
    }

    /// Multiplies each element of `self` by the corresponding element of
    /// `other`.
    ///
    /// Integers wrap on overflow. Fails with [`Error::UnsupportedOperation`]
    /// for boolean encodings.
    pub fn multiply(&mut self, other: &Self) -> Result<()> {
        self.check_compatible(other)?;
        arith::zip::<Mul>(self.encoding, self.buffer.as_bytes_mut(), other.buffer.as_bytes(), self.shape.len())
    }

    /// Negates every element.
    ///
    /// Fails with [`Error::UnsupportedOperation`] for boolean and unsigned
    /// encodings.
    pub fn negate(&mut self) -> Result<()> {
        arith::map::<Neg>(self.encoding, self.buffer.as_bytes_mut(), self.shape.len())
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        if self.encoding != other.encoding || self.shape != other.shape { return false; }
        if self.encoding.is_boolean() {
            // Only one bit of each element is significant.
            return (0..self.len()).all(|offset| {
                self.buffer.read(self.encoding, offset) == other.buffer.read(self.encoding, offset)
            });
        }
        let n = self.len() * (self.encoding.bit_width() / 8);
        self.as_bytes()[..n] == other.as_bytes()[..n]
    }
}

impl Eq for Array {}

// ----------------------------------------------------------------------------
