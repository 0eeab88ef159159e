//! Layered 2D tile grid with 8-connected steps and portal overrides.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d;
use crate::portal::PortalTable;
use warpsight_core::{Direction, GridInstanceId, Location, WorldQuery};

/// What occupies a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Open ground; does not block vision.
    #[default]
    Floor,
    /// Solid material; blocks vision.
    Wall,
    /// A tile with no backing material. The location is valid but the
    /// tile blocks vision, so it renders as an opaque boundary.
    Void,
}

impl Tile {
    /// Whether this tile stops line of sight.
    pub fn blocks_vision(self) -> bool {
        match self {
            Tile::Floor => false,
            Tile::Wall | Tile::Void => true,
        }
    }
}

/// A `width x height x layers` tile world.
///
/// Each tile has coordinate `(x, y, z)` with `y` growing north. A step in
/// one of the 8 directions moves within the tile's layer; portals are the
/// only way between layers or between distant tiles.
///
/// Boundary handling is controlled by [`EdgeBehavior`]:
/// - **Absorb**: stepping off the layer yields [`Location::INVALID`]
/// - **Clamp**: stepping off the layer stays on the boundary tile
/// - **Wrap**: periodic boundary (torus topology)
///
/// Every [`Location`] minted by a grid carries the grid's
/// [`GridInstanceId`]; handles from other grids are rejected.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: u32,
    height: u32,
    layers: u32,
    edge: EdgeBehavior,
    instance_id: GridInstanceId,
    tiles: Vec<Tile>,
    portals: PortalTable,
}

impl TileGrid {
    /// Maximum size of a single dimension: coordinates use `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum total tile count; `u32::MAX` is reserved for the sentinel.
    pub const MAX_TILES: u64 = u32::MAX as u64 - 1;

    /// Create a grid filled with [`Tile::Floor`].
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if any dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if one exceeds `i32::MAX`, or
    /// `Err(SpaceError::TooManyTiles)` if the product does not fit a
    /// location index.
    pub fn new(width: u32, height: u32, layers: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 || layers == 0 {
            return Err(SpaceError::EmptySpace);
        }
        for (name, value) in [("width", width), ("height", height), ("layers", layers)] {
            if value > Self::MAX_DIM {
                return Err(SpaceError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        let requested = width as u64 * height as u64 * layers as u64;
        if requested > Self::MAX_TILES {
            return Err(SpaceError::TooManyTiles {
                requested,
                max: Self::MAX_TILES,
            });
        }
        Ok(Self {
            width,
            height,
            layers,
            edge,
            instance_id: GridInstanceId::next(),
            tiles: vec![Tile::Floor; requested as usize],
            portals: PortalTable::new(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of layers.
    pub fn layers(&self) -> u32 {
        self.layers
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Generation stamped into every location of this grid.
    pub fn instance_id(&self) -> GridInstanceId {
        self.instance_id
    }

    /// The location of `(x, y, z)`.
    pub fn location(&self, x: i32, y: i32, z: i32) -> Result<Location, SpaceError> {
        grid2d::check_bounds(x, y, z, self.width, self.height, self.layers)?;
        Ok(self.location_unchecked(x, y, z))
    }

    fn location_unchecked(&self, x: i32, y: i32, z: i32) -> Location {
        let index = grid2d::flat_index(x, y, z, self.width, self.height);
        Location::new(index as u32, self.instance_id.get())
    }

    /// The `(x, y, z)` coordinate of a location minted by this grid.
    pub fn coords(&self, loc: Location) -> Option<(i32, i32, i32)> {
        self.owns(loc)
            .then(|| grid2d::unflatten(loc.index() as usize, self.width, self.height))
    }

    /// Whether `loc` was minted by this grid.
    pub fn owns(&self, loc: Location) -> bool {
        loc.is_valid()
            && loc.generation() == self.instance_id.get()
            && (loc.index() as usize) < self.tiles.len()
    }

    fn check_owned(&self, loc: Location) -> Result<usize, SpaceError> {
        if self.owns(loc) {
            Ok(loc.index() as usize)
        } else {
            Err(SpaceError::ForeignLocation { location: loc })
        }
    }

    /// The tile at `loc`, or `None` for foreign handles.
    pub fn tile(&self, loc: Location) -> Option<Tile> {
        self.owns(loc).then(|| self.tiles[loc.index() as usize])
    }

    /// Replace the tile at `loc`.
    pub fn set_tile(&mut self, loc: Location, tile: Tile) -> Result<(), SpaceError> {
        let i = self.check_owned(loc)?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Replace the tile at `(x, y, z)`.
    pub fn set_tile_at(&mut self, x: i32, y: i32, z: i32, tile: Tile) -> Result<(), SpaceError> {
        let loc = self.location(x, y, z)?;
        self.set_tile(loc, tile)
    }

    /// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)` on layer `z`.
    pub fn fill_rect(
        &mut self,
        (x0, y0): (i32, i32),
        (x1, y1): (i32, i32),
        z: i32,
        tile: Tile,
    ) -> Result<(), SpaceError> {
        grid2d::check_bounds(x0, y0, z, self.width, self.height, self.layers)?;
        grid2d::check_bounds(x1, y1, z, self.width, self.height, self.layers)?;
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                let i = grid2d::flat_index(x, y, z, self.width, self.height);
                self.tiles[i] = tile;
            }
        }
        Ok(())
    }

    /// Make a step from `from` in world direction `direction` arrive at
    /// `to`, reorienting further travel by `rotation`.
    ///
    /// One-way: nothing is recorded on `to`.
    pub fn set_portal(
        &mut self,
        from: Location,
        direction: Direction,
        to: Location,
        rotation: Direction,
    ) -> Result<(), SpaceError> {
        let i = self.check_owned(from)?;
        self.check_owned(to)?;
        log::trace!("portal {from} --{direction}--> {to} (rotation {rotation})");
        self.portals.set(i as u32, direction, to, rotation);
        Ok(())
    }

    /// Join two tiles so that stepping `out_a` from `a` arrives at `b`,
    /// and stepping `out_b` from `b` arrives back at `a`.
    ///
    /// Rotations are chosen so a traveller keeps walking away from the
    /// mouth they came through: leaving `a` heading `out_a`, they continue
    /// from `b` heading `out_b.reverse()`.
    pub fn set_bidirectional_portal(
        &mut self,
        a: Location,
        out_a: Direction,
        b: Location,
        out_b: Direction,
    ) -> Result<(), SpaceError> {
        let a_to_b = out_b.reverse().rotate(out_a.reverse_rotation());
        let b_to_a = out_a.reverse().rotate(out_b.reverse_rotation());
        self.set_portal(a, out_a, b, a_to_b)?;
        self.set_portal(b, out_b, a, b_to_a)
    }

    /// Remove every override on `loc`.
    pub fn clear_portals(&mut self, loc: Location) -> Result<(), SpaceError> {
        let i = self.check_owned(loc)?;
        self.portals.clear(i as u32);
        Ok(())
    }

    /// The portal table.
    pub fn portals(&self) -> &PortalTable {
        &self.portals
    }
}

impl WorldQuery for TileGrid {
    fn is_valid(&self, loc: Location) -> bool {
        self.owns(loc)
    }

    fn blocks_vision(&self, loc: Location) -> bool {
        self.tile(loc).map_or(true, Tile::blocks_vision)
    }

    fn neighbor_override(&self, loc: Location, direction: Direction) -> Option<(Location, Direction)> {
        if !self.owns(loc) {
            return None;
        }
        self.portals.record(loc.index())?.get(direction)
    }

    fn has_neighbor_override_record(&self, loc: Location) -> bool {
        self.owns(loc) && self.portals.record(loc.index()).is_some()
    }

    fn default_grid_step(&self, loc: Location, direction: Direction) -> Location {
        let Some((x, y, z)) = self.coords(loc) else {
            return Location::INVALID;
        };
        let (dx, dy) = direction.to_offset();
        let nx = grid2d::resolve_axis(x + dx, self.width, self.edge);
        let ny = grid2d::resolve_axis(y + dy, self.height, self.edge);
        match (nx, ny) {
            (Some(nx), Some(ny)) => self.location_unchecked(nx, ny, z),
            _ => Location::INVALID,
        }
    }
}
