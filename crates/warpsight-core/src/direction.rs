//! Compass directions and eighth-turn rotations.

use crate::error::CoreError;
use std::fmt;

/// One of the 8 compass directions, numbered clockwise from North.
///
/// A `Direction` doubles as a rotation: rotating by `North` is the
/// identity, by `East` a quarter turn clockwise, and so on. Composition
/// of rotations is addition mod 8.
///
/// Unit vectors use a y-up convention: North is `(0, 1)` and East is
/// `(1, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// `(0, 1)`; also the identity rotation.
    #[default]
    North = 0,
    /// `(1, 1)`
    NorthEast = 1,
    /// `(1, 0)`
    East = 2,
    /// `(1, -1)`
    SouthEast = 3,
    /// `(0, -1)`
    South = 4,
    /// `(-1, -1)`
    SouthWest = 5,
    /// `(-1, 0)`
    West = 6,
    /// `(-1, 1)`
    NorthWest = 7,
}

/// Offset-to-direction lookup over a 3x3 neighbourhood.
///
/// Indexed by `(dx + 1) + (dy + 1) * 3`. Index 4 is the centre cell and
/// has no direction.
const NEIGHBOURHOOD: [Option<Direction>; 9] = [
    Some(Direction::SouthWest),
    Some(Direction::South),
    Some(Direction::SouthEast),
    Some(Direction::West),
    None,
    Some(Direction::East),
    Some(Direction::NorthWest),
    Some(Direction::North),
    Some(Direction::NorthEast),
];

impl Direction {
    /// All directions in clockwise order starting at North.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The identity rotation.
    pub const IDENTITY: Direction = Direction::North;

    /// Clockwise eighth-turn index in `0..8`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Direction from an index, wrapping mod 8.
    pub const fn from_index_wrapping(index: u8) -> Self {
        Self::ALL[(index % 8) as usize]
    }

    /// Rotate by another direction taken as a rotation (addition mod 8).
    pub const fn rotate(self, rotation: Direction) -> Self {
        Self::from_index_wrapping(self.index() + rotation.index())
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Self {
        self.rotate(Direction::South)
    }

    /// The inverse rotation: `d.rotate(r).rotate(r.reverse_rotation()) == d`.
    pub const fn reverse_rotation(self) -> Self {
        Self::from_index_wrapping(8 - self.index())
    }

    /// A quarter turn clockwise.
    pub const fn orthogonal(self) -> Self {
        self.rotate(Direction::East)
    }

    /// An eighth turn clockwise.
    pub const fn clockwise(self) -> Self {
        self.rotate(Direction::NorthEast)
    }

    /// An eighth turn counter-clockwise.
    pub const fn counter_clockwise(self) -> Self {
        self.rotate(Direction::NorthWest)
    }

    /// `true` for N, E, S, W.
    pub const fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Unit `(dx, dy)` vector, y up.
    pub const fn to_offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// Direction of a single-step offset.
    ///
    /// Returns `None` for the centre `(0, 0)` and for any offset with a
    /// component outside `-1..=1`.
    pub fn try_from_offset(dx: i32, dy: i32) -> Option<Self> {
        if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) {
            return None;
        }
        NEIGHBOURHOOD[((dx + 1) + (dy + 1) * 3) as usize]
    }

    /// Direction of a single-step offset.
    ///
    /// # Panics
    ///
    /// Panics on the centre `(0, 0)` or a non-unit offset. Both mean the
    /// caller mapped a displacement to a step incorrectly.
    pub fn from_offset(dx: i32, dy: i32) -> Self {
        match Self::try_from_offset(dx, dy) {
            Some(d) => d,
            None => panic!("offset ({dx}, {dy}) is not a single-step direction"),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 8 {
            Ok(Self::from_index_wrapping(value))
        } else {
            Err(CoreError::InvalidDirection { value })
        }
    }
}

impl From<Direction> for u8 {
    fn from(d: Direction) -> Self {
        d.index()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        };
        f.write_str(s)
    }
}
