//! Typed, fixed-shape, N-dimensional dense arrays, meant to be embedded in a
//! host program such as a scripting-language runtime.
//!
//! [`Array`] owns a flat byte buffer holding `len()` elements of one
//! [`Encoding`]. The encodings are a closed set: several fixed-width numeric
//! types, a byte-per-element boolean, and a bit-packed boolean that stores
//! eight elements per byte. Elements are read as typed [`Element`]s and
//! written from host [`Value`]s.
//!
//! The [`Shape`] of an array has between 1 and [`MAX_DIMS`] dimensions. It
//! maps each coordinate tuple to a linear offset, with the first coordinate
//! varying fastest. [`Shape::each()`] enumerates every coordinate tuple using
//! an odometer, so any number of dimensions can be visited without recursion.
//!
//! Besides element access, arrays support:
//! - [`Array::fill()`] and [`Array::clear()`].
//! - Raw bitwise operators [`Array::bnot()`], [`Array::bor()`],
//!   [`Array::band()`] and [`Array::bxor()`], which treat the buffer as an
//!   opaque bitset.
//! - Elementwise arithmetic [`Array::add()`], [`Array::multiply()`] and
//!   [`Array::negate()`], which respect the encoding.
//! - [`Array::copy()`] and the circular shift [`Array::shift_copy()`].
//!
//! Every operation validates its arguments before writing anything, and
//! reports failures as an [`Error`].
//!
//! ```
//! use densearray::{Array, Encoding, Element};
//! let mut a = Array::new(Encoding::F32, &[3]).unwrap();
//! let mut b = Array::new(Encoding::F32, &[3]).unwrap();
//! for i in 0..3 {
//!     a.set(&[i], (i + 1) as f64).unwrap();
//!     b.set(&[i], 10.0 * (i + 1) as f64).unwrap();
//! }
//! a.add(&b).unwrap();
//! assert_eq!(a.get(&[2]).unwrap(), Element::F32(33.0));
//! ```

mod consts;
pub use consts::{MAX_DIMS, GUARD_BYTES, WORD_BYTES};

mod error;
pub use error::{Error, Result};

mod encoding;
pub use encoding::{Encoding};

mod shape;
pub use shape::{Shape, Coords};

mod scalar;
pub use scalar::{Scalar};

mod element;
pub use element::{Element, Value};

mod buffer;

pub mod ops;

mod bitwise;

mod arith;

mod array;
pub use array::{Array};
