//! Common functions and types.

use core::ops::{Bound, Range, RangeBounds};
use core::{error, fmt};

/// Converts any generic range into a concrete `Range<usize>` given a length.
///
/// # Errors
///
/// Returns a `RangeError` if the range is invalid.
pub(crate) fn range(range: impl RangeBounds<usize>, len: usize) -> Result<Range<usize>, RangeError> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).ok_or(RangeError::StartOverflows)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).ok_or(RangeError::EndOverflows)?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    if start > end {
        Err(RangeError::StartGreaterThanEnd { start, end })
    } else if end > len {
        Err(RangeError::EndOutOfBounds { end, len })
    } else {
        Ok(Range { start, end })
    }
}

/// Represents errors that can occur on checked sub-range operations.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RangeError {
    /// The start index overflows.
    StartOverflows,
    /// The end index overflows.
    EndOverflows,
    /// The start index is greater than the end index.
    StartGreaterThanEnd {
        /// Requested start index.
        start: usize,
        /// Requested end index.
        end: usize,
    },
    /// The end index is out of bounds.
    EndOutOfBounds {
        /// Requested end index.
        end: usize,
        /// Length of the addressed sequence.
        len: usize,
    },
}

impl error::Error for RangeError {}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::StartOverflows => write!(f, "start index overflows"),
            Self::EndOverflows => write!(f, "end index overflows"),
            Self::StartGreaterThanEnd { start, end } => {
                write!(f, "start index {start} is greater than end index {end}")
            }
            Self::EndOutOfBounds { end, len } => {
                write!(f, "end index {end} is out of bounds for length {len}")
            }
        }
    }
}
