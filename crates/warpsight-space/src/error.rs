//! Error types for world construction and tile access.

use std::fmt;
use warpsight_core::Location;

/// Errors arising from grid construction, tile access, or portal placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending `(x, y, z)` coordinate.
        coord: (i32, i32, i32),
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A location was not minted by this grid, or is the invalid sentinel.
    ForeignLocation {
        /// The offending handle.
        location: Location,
    },
    /// Attempted to construct a grid with zero tiles.
    EmptySpace,
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Name of the dimension (e.g. "width", "height").
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// The requested tile count does not fit the handle's index space.
    TooManyTiles {
        /// `width * height * layers`.
        requested: u64,
        /// Largest supported tile count.
        max: u64,
    },
    /// A map description could not be parsed.
    InvalidMap {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::ForeignLocation { location } => {
                write!(f, "location {location} does not belong to this grid")
            }
            Self::EmptySpace => write!(f, "space must have at least one tile"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::TooManyTiles { requested, max } => {
                write!(f, "{requested} tiles exceeds maximum {max}")
            }
            Self::InvalidMap { reason } => write!(f, "invalid map: {reason}"),
        }
    }
}

impl std::error::Error for SpaceError {}
