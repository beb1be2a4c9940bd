/// The largest number of dimensions an [`Array`] may have.
///
/// [`Array`]: super::Array
pub const MAX_DIMS: usize = 8;

/// Bytes allocated beyond the packed element data.
///
/// No element offset ever maps into these bytes, but the raw bitwise
/// operators and [`Array::clear()`] cover them.
///
/// [`Array::clear()`]: super::Array::clear()
pub const GUARD_BYTES: usize = 1;

/// The chunk size used by the raw bitwise operators.
pub const WORD_BYTES: usize = std::mem::size_of::<usize>();
