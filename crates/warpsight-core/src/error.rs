//! Error types for core conversions.

use std::error::Error;
use std::fmt;

/// Errors from converting raw values into core types.
///
/// Contract violations inside the algorithms (non-unit steps, centre
/// traversal) panic instead; these errors cover untrusted input such as
/// decoded bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A byte outside `0..8` was decoded as a [`Direction`](crate::Direction).
    InvalidDirection {
        /// The offending byte.
        value: u8,
    },
    /// A displacement is not a single step in one of the 8 directions.
    NonUnitOffset {
        /// X component.
        dx: i32,
        /// Y component.
        dy: i32,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection { value } => {
                write!(f, "invalid direction byte {value} (expected 0..8)")
            }
            Self::NonUnitOffset { dx, dy } => {
                write!(f, "offset ({dx}, {dy}) is not a single step")
            }
        }
    }
}

impl Error for CoreError {}
