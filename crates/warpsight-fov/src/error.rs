//! Errors from view construction and engine configuration.

use std::fmt;

/// Errors detected while configuring the engine or sizing a [`View`](crate::View).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FovError {
    /// A configuration value is out of range.
    InvalidConfig {
        /// Which setting, and why.
        reason: String,
    },
    /// The requested view radius exceeds [`View::MAX_RADIUS`](crate::View::MAX_RADIUS).
    RadiusTooLarge {
        /// Requested radius.
        radius: u32,
        /// Largest supported radius.
        max: u32,
    },
    /// A per-cell buffer does not match the view's cell count.
    BufferLength {
        /// Which buffer.
        name: &'static str,
        /// Cells required by the radius.
        expected: usize,
        /// Cells supplied.
        actual: usize,
    },
}

impl fmt::Display for FovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid fov config: {reason}"),
            Self::RadiusTooLarge { radius, max } => {
                write!(f, "view radius {radius} exceeds maximum {max}")
            }
            Self::BufferLength {
                name,
                expected,
                actual,
            } => write!(f, "{name} has {actual} cells, expected {expected}"),
        }
    }
}

impl std::error::Error for FovError {}
