//! Tile classification for the scanner.

use warpsight_core::{Location, WorldQuery};

/// What the scanner needs to know about one resolved tile.
///
/// Invalid locations (off the world, foreign, or the sentinel) behave like
/// walls: they stop vision and are revealed as an opaque boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileClass {
    valid: bool,
    opaque: bool,
    portal: bool,
}

impl TileClass {
    /// Classify `loc` against `world`.
    pub fn of(world: &dyn WorldQuery, loc: Location) -> Self {
        let valid = loc.is_valid() && world.is_valid(loc);
        Self {
            valid,
            opaque: valid && world.blocks_vision(loc),
            portal: valid && world.has_neighbor_override_record(loc),
        }
    }

    /// The location exists.
    pub fn is_valid(self) -> bool {
        self.valid
    }

    /// Valid and its material blocks vision.
    pub fn is_wall(self) -> bool {
        self.valid && self.opaque
    }

    /// Valid and see-through.
    pub fn is_floor(self) -> bool {
        self.valid && !self.opaque
    }

    /// Valid and carries a neighbour-override record (a portal mouth).
    pub fn requires_recast(self) -> bool {
        self.valid && self.portal
    }

    /// Stops the current pass: invalid, wall, or portal mouth.
    ///
    /// Portal mouths split the row on the ordinary walk; vision carries on
    /// through them in a recast instead.
    pub fn blocks_vision(self) -> bool {
        !self.valid || self.is_wall() || self.requires_recast()
    }

    /// Plain floor: the current pass continues past it.
    pub fn allows_vision(self) -> bool {
        self.is_floor() && !self.requires_recast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warpsight_core::Direction;
    use warpsight_space::{EdgeBehavior, Tile, TileGrid};

    #[test]
    fn predicates_by_tile_kind() {
        let mut grid = TileGrid::new(4, 1, 1, EdgeBehavior::Absorb).unwrap();
        let floor = grid.location(0, 0, 0).unwrap();
        let wall = grid.location(1, 0, 0).unwrap();
        let mouth = grid.location(2, 0, 0).unwrap();
        let walled_mouth = grid.location(3, 0, 0).unwrap();
        grid.set_tile(wall, Tile::Wall).unwrap();
        grid.set_tile(walled_mouth, Tile::Wall).unwrap();
        grid.set_portal(mouth, Direction::East, floor, Direction::North).unwrap();
        grid.set_portal(walled_mouth, Direction::West, floor, Direction::North)
            .unwrap();

        let c = TileClass::of(&grid, floor);
        assert!(c.is_floor() && c.allows_vision() && !c.blocks_vision());

        let c = TileClass::of(&grid, wall);
        assert!(c.is_wall() && c.blocks_vision() && !c.requires_recast());

        let c = TileClass::of(&grid, mouth);
        assert!(c.is_floor() && c.requires_recast());
        assert!(c.blocks_vision() && !c.allows_vision());

        let c = TileClass::of(&grid, walled_mouth);
        assert!(c.is_wall() && c.requires_recast() && !c.is_floor());
    }

    #[test]
    fn invalid_blocks_but_is_not_wall() {
        let grid = TileGrid::new(2, 2, 1, EdgeBehavior::Absorb).unwrap();
        let c = TileClass::of(&grid, Location::INVALID);
        assert!(!c.is_valid());
        assert!(!c.is_wall() && !c.is_floor() && !c.requires_recast());
        assert!(c.blocks_vision() && !c.allows_vision());
    }
}
