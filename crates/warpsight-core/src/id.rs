//! Graph-node handles and per-instance world identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Counter for unique [`GridInstanceId`] allocation.
///
/// Starts at 1 so that generation 0 is never handed out and can be used
/// by [`Location::INVALID`].
static GRID_INSTANCE_COUNTER: AtomicU32 = AtomicU32::new(1);

/// Unique per-instance identifier for a world object.
///
/// Allocated from a monotonic atomic counter via [`GridInstanceId::next`].
/// Worlds stamp it into every [`Location`] they hand out as the handle's
/// generation, so a location minted by one world is rejected by another
/// (and by a rebuilt world at the same address).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridInstanceId(u32);

impl GridInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(GRID_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw generation value stamped into locations.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GridInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the world graph.
///
/// `Location` is an opaque, copyable handle into an external world store:
/// an arena `index` plus the `generation` of the world that minted it.
/// It owns no tile data; every property is looked up through a
/// [`WorldQuery`](crate::WorldQuery).
///
/// [`Location::INVALID`] is a first-class sentinel. It appears wherever a
/// traversal leaves the world or a view cell has not been resolved, and
/// is treated as vision-blocking by every consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    index: u32,
    generation: u32,
}

impl Location {
    /// The invalid sentinel.
    pub const INVALID: Location = Location {
        index: u32::MAX,
        generation: 0,
    };

    /// Construct a handle from its raw parts.
    ///
    /// Passing `generation == 0` produces a handle that is never valid.
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Arena index of the node.
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Generation of the world that minted this handle.
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// `false` for the sentinel and any generation-0 handle.
    ///
    /// This is the handle-level validity bit only. Whether the node still
    /// exists is answered by [`WorldQuery::is_valid`](crate::WorldQuery::is_valid).
    pub const fn is_valid(self) -> bool {
        self.generation != 0 && self.index != u32::MAX
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}@{}", self.index, self.generation)
        } else {
            write!(f, "#invalid")
        }
    }
}
