use thiserror::Error;

use super::{Encoding, MAX_DIMS};

/// Errors returned by the operations of [`Array`].
///
/// Every error is raised before the operation writes anything, so a failed
/// call leaves its operands exactly as they were.
///
/// Dimensions are numbered from 1 in messages and in the `dimension` fields.
///
/// [`Array`]: super::Array
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The encoding code is not one of [`Encoding::ALL`].
    #[error("bad type character {code:?}")]
    InvalidEncoding { code: String },
    /// More than [`MAX_DIMS`] extents were given.
    #[error("array cannot have more than {} dimensions (got {ndims})", MAX_DIMS)]
    TooManyDimensions { ndims: usize },
    /// An extent was zero or negative.
    #[error("dimension #{dimension} has non-positive size {extent}")]
    NonPositiveExtent { dimension: usize, extent: isize },
    /// The buffer could not be allocated. `bytes` is `None` if its size
    /// overflowed `usize`.
    #[error("cannot allocate memory for array")]
    AllocationFailure { bytes: Option<usize> },
    /// A coordinate or shift tuple had the wrong length.
    #[error("wrong number of arguments: expected {expected}, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
    /// A coordinate lay outside `0..extent`.
    #[error("array index #{dimension} out of range ({index} not in 0..{extent})")]
    IndexOutOfRange { dimension: usize, index: isize, extent: usize },
    /// A binary operation was given arrays of different encodings.
    #[error("arrays must be of same type ({left} vs {right})")]
    TypeMismatch { left: Encoding, right: Encoding },
    /// A binary operation was given arrays of different shapes.
    #[error("array dimension #{dimension} is of different size")]
    ShapeMismatch { dimension: usize },
    /// The operation is not defined for the encoding.
    #[error("cannot {operation} an array of encoding {encoding}")]
    UnsupportedOperation { operation: &'static str, encoding: Encoding },
    /// A value of the wrong kind was stored, e.g. a number into a boolean array.
    #[error("array of encoding {encoding} cannot hold a {found} value")]
    ValueMismatch { encoding: Encoding, found: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::IndexOutOfRange { dimension: 2, index: 5, extent: 4 }.to_string(),
            "array index #2 out of range (5 not in 0..4)",
        );
        assert_eq!(
            Error::TooManyDimensions { ndims: 9 }.to_string(),
            "array cannot have more than 8 dimensions (got 9)",
        );
        assert_eq!(
            Error::TypeMismatch { left: Encoding::I8, right: Encoding::BitBool }.to_string(),
            "arrays must be of same type (c vs b)",
        );
        assert_eq!(
            Error::UnsupportedOperation { operation: "negate", encoding: Encoding::U16 }.to_string(),
            "cannot negate an array of encoding S",
        );
    }
}
