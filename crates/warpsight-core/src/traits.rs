//! The world query capability consumed by traversal and visibility.

use crate::direction::Direction;
use crate::id::Location;

/// Read-only access to the world graph.
///
/// This trait decouples the visibility engine from any particular world
/// store. Tile properties are answered here rather than through the
/// [`Location`] handle itself, so a location stays a plain copyable key.
///
/// Implementations must tolerate [`Location::INVALID`] and foreign or
/// stale handles in every method: missing data is represented, never
/// thrown.
pub trait WorldQuery {
    /// Whether `loc` names a node that exists in this world.
    fn is_valid(&self, loc: Location) -> bool;

    /// Whether the tile at `loc` blocks vision.
    ///
    /// A valid node without backing material should report `true` so it
    /// renders as an opaque boundary.
    fn blocks_vision(&self, loc: Location) -> bool;

    /// The explicit neighbour for `direction`, if `loc` carries a portal
    /// override in that slot.
    ///
    /// The returned direction is the reorientation applied to any further
    /// travel beyond the target.
    fn neighbor_override(&self, loc: Location, direction: Direction)
        -> Option<(Location, Direction)>;

    /// Whether `loc` has a non-empty override record at all.
    ///
    /// Drives recasting: any tile with a record is a portal mouth.
    fn has_neighbor_override_record(&self, loc: Location) -> bool;

    /// The ordinary grid neighbour one step from `loc` in `direction`,
    /// honouring the world's bounds or wrap rules.
    ///
    /// Returns [`Location::INVALID`] when the step leaves the world.
    fn default_grid_step(&self, loc: Location, direction: Direction) -> Location;
}

impl<W: WorldQuery + ?Sized> WorldQuery for &W {
    fn is_valid(&self, loc: Location) -> bool {
        (**self).is_valid(loc)
    }

    fn blocks_vision(&self, loc: Location) -> bool {
        (**self).blocks_vision(loc)
    }

    fn neighbor_override(
        &self,
        loc: Location,
        direction: Direction,
    ) -> Option<(Location, Direction)> {
        (**self).neighbor_override(loc, direction)
    }

    fn has_neighbor_override_record(&self, loc: Location) -> bool {
        (**self).has_neighbor_override_record(loc)
    }

    fn default_grid_step(&self, loc: Location, direction: Direction) -> Location {
        (**self).default_grid_step(loc, direction)
    }
}
