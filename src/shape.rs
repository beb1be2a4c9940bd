//! Extents, strides and coordinates.
//!
//! A [`Shape`] maps each coordinate tuple to a linear offset in `0..len()`.
//! The first dimension varies fastest: `stride_0` is 1 and `stride_i` is
//! `stride_{i-1} * extent_{i-1}`.

use num_traits::{ToPrimitive};
use smallvec::{smallvec, SmallVec};

use super::{Error, Result, MAX_DIMS};

/// A coordinate tuple, with one 0-based index per dimension.
///
/// The inline capacity is [`MAX_DIMS`], so a `Coords` never allocates.
pub type Coords = SmallVec<[usize; MAX_DIMS]>;

/// The per-dimension extents of an [`Array`].
///
/// [`Array`]: super::Array
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Shape {
    extents: SmallVec<[usize; MAX_DIMS]>,
    length: usize,
}

impl Shape {
    /// Validates `extents` and constructs a `Shape`.
    ///
    /// ```
    /// use densearray::{Shape, Error};
    /// let s = Shape::new(&[3, 4]).unwrap();
    /// assert_eq!(s.len(), 12);
    /// assert_eq!(s.linear_offset(&[2, 1]), 5);
    /// assert_eq!(Shape::new(&[3, 0]), Err(Error::NonPositiveExtent { dimension: 2, extent: 0 }));
    /// ```
    pub fn new(extents: &[isize]) -> Result<Self> {
        if extents.is_empty() {
            return Err(Error::ArityMismatch { expected: 1, actual: 0 });
        }
        if extents.len() > MAX_DIMS {
            return Err(Error::TooManyDimensions { ndims: extents.len() });
        }
        let mut length: usize = 1;
        let mut checked = SmallVec::new();
        for (d, &extent) in extents.iter().enumerate() {
            if extent <= 0 {
                return Err(Error::NonPositiveExtent { dimension: d + 1, extent });
            }
            let extent = extent as usize;
            length = length.checked_mul(extent).ok_or(Error::AllocationFailure { bytes: None })?;
            checked.push(extent);
        }
        Ok(Self {extents: checked, length})
    }

    /// The number of dimensions.
    pub fn ndims(&self) -> usize { self.extents.len() }

    pub fn extents(&self) -> &[usize] { &self.extents }

    /// The total number of elements, i.e. the product of the extents.
    pub fn len(&self) -> usize { self.length }

    /// Returns the linear offset of `coords`.
    ///
    /// The caller must have checked `coords`, e.g. using [`Self::check()`].
    pub fn linear_offset(&self, coords: &[usize]) -> usize {
        debug_assert_eq!(coords.len(), self.ndims());
        let mut offset = 0;
        let mut stride = 1;
        for (&c, &extent) in coords.iter().zip(&self.extents) {
            debug_assert!(c < extent);
            offset += c * stride;
            stride *= extent;
        }
        offset
    }

    /// The inverse of [`Self::linear_offset()`].
    pub fn coords_of(&self, mut offset: usize) -> Coords {
        debug_assert!(offset < self.length);
        self.extents.iter().map(|&extent| {
            let c = offset % extent;
            offset /= extent;
            c
        }).collect()
    }

    /// Validates a coordinate tuple supplied by a caller.
    ///
    /// Reports [`Error::ArityMismatch`] if there is not exactly one coordinate
    /// per dimension, and [`Error::IndexOutOfRange`] for the first coordinate
    /// outside `0..extent`.
    ///
    /// Any primitive integer type is accepted, so the coordinates passed to
    /// the callback of [`Self::each()`] can be passed straight back in.
    /// Indices that do not fit in an `isize` are reported saturated.
    pub fn check<I: ToPrimitive>(&self, coords: &[I]) -> Result<Coords> {
        if coords.len() != self.ndims() {
            return Err(Error::ArityMismatch { expected: self.ndims(), actual: coords.len() });
        }
        coords.iter().zip(&self.extents).enumerate().map(|(d, (index, &extent))| {
            match index.to_usize() {
                Some(i) if i < extent => Ok(i),
                _ => Err(Error::IndexOutOfRange { dimension: d + 1, index: saturate(index), extent }),
            }
        }).collect()
    }

    /// Reports [`Error::ShapeMismatch`] naming the first dimension in which
    /// `self` and `other` differ.
    pub fn check_same(&self, other: &Self) -> Result<()> {
        let mut extents = self.extents.iter().zip(&other.extents);
        if let Some(d) = extents.position(|(a, b)| a != b) {
            return Err(Error::ShapeMismatch { dimension: d + 1 });
        }
        if self.ndims() != other.ndims() {
            return Err(Error::ShapeMismatch { dimension: self.ndims().min(other.ndims()) + 1 });
        }
        Ok(())
    }

    /// Reduces each of `shifts` modulo the corresponding extent, giving a
    /// non-negative amount less than the extent.
    pub fn normalize_shifts(&self, shifts: &[isize]) -> Result<Coords> {
        if shifts.len() != self.ndims() {
            return Err(Error::ArityMismatch { expected: self.ndims(), actual: shifts.len() });
        }
        // Every extent came from a positive `isize`.
        Ok(shifts.iter().zip(&self.extents).map(|(&shift, &extent)| {
            shift.rem_euclid(extent as isize) as usize
        }).collect())
    }

    /// Calls `f` once for every coordinate tuple, in order of increasing
    /// linear offset.
    ///
    /// The tuples are generated by an odometer: dimension 0 counts up, and
    /// when it reaches its extent it resets to 0 and carries into dimension
    /// 1, and so on. Iteration ends when a carry runs off the last dimension.
    ///
    /// ```
    /// use densearray::Shape;
    /// let mut seen = Vec::new();
    /// Shape::new(&[2, 3]).unwrap().each(|c| seen.push((c[0], c[1])));
    /// assert_eq!(seen, [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
    /// ```
    pub fn each(&self, mut f: impl FnMut(&[usize])) {
        let n = self.ndims();
        let mut coords: Coords = smallvec![0; n];
        loop {
            f(&coords);
            let mut d = 0;
            while d < n && coords[d] + 1 == self.extents[d] {
                coords[d] = 0;
                d += 1;
            }
            if d == n { return; }
            coords[d] += 1;
        }
    }
}

fn saturate(index: &impl ToPrimitive) -> isize {
    match index.to_isize() {
        Some(i) => i,
        None if index.to_i128().map_or(false, |i| i < 0) => isize::MIN,
        None => isize::MAX,
    }
}

// ----------------------------------------------------------------------------
