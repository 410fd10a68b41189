//! Errors that abort a connectivity run.

/// Failure of a single run.
///
/// Malformed input is not represented here: a token pair that does not parse as two
/// integers ends the pair stream like end-of-input does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The partition or size array for `len` elements could not be reserved.
    #[error("could not allocate the partition arrays for {len} elements")]
    AllocationFailure { len: usize },
    /// An element of a pair lies outside `0 .. len`.
    #[error("element {element} is out of range for a universe of {len} elements")]
    OutOfRangeElement { element: i128, len: usize },
}

impl Error {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRangeElement {
            element: i128::try_from(index).unwrap_or(i128::MAX),
            len,
        }
    }
}
