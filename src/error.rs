//! Errors reported by the checked operations of [`InplaceVec`](crate::InplaceVec).
//!
//! Only two conditions are recoverable: running out of capacity and an
//! out-of-range [`InplaceVec::at`](crate::InplaceVec::at). Every other misuse
//! is a precondition violation and panics (or is undefined behavior in the
//! `unsafe` unchecked tier).

use core::{error::Error as CoreError, fmt};

/// Errors returned by checked operations on [`InplaceVec`](crate::InplaceVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The operation would grow the vector past its fixed capacity.
    ///
    /// The vector is left exactly as it was before the call.
    CapacityExceeded,
    /// [`InplaceVec::at`](crate::InplaceVec::at) was called with `index >= len`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the vector at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("inplace vector capacity exceeded"),
            Self::OutOfRange { index, len } => {
                write!(f, "InplaceVec::at: index {index} out of range for length {len}")
            }
        }
    }
}

impl CoreError for Error {}
