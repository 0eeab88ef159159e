//! Spatial edge (boundary) behavior for tile grids.

/// How a tile grid handles steps that leave a layer.
///
/// Only the default grid step is affected. Portal overrides name their
/// targets explicitly and never consult the edge rule.
///
/// # Examples
///
/// ```
/// use warpsight_core::{Direction, Location, WorldQuery};
/// use warpsight_space::{EdgeBehavior, TileGrid};
///
/// // Absorb: stepping off the west edge leaves the world.
/// let absorb = TileGrid::new(4, 4, 1, EdgeBehavior::Absorb).unwrap();
/// let corner = absorb.location(0, 0, 0).unwrap();
/// assert_eq!(absorb.default_grid_step(corner, Direction::West), Location::INVALID);
///
/// // Wrap: the same step lands on the opposite side (torus).
/// let wrap = TileGrid::new(4, 4, 1, EdgeBehavior::Wrap).unwrap();
/// let corner = wrap.location(0, 0, 0).unwrap();
/// let east_edge = wrap.location(3, 0, 0).unwrap();
/// assert_eq!(wrap.default_grid_step(corner, Direction::West), east_edge);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds step maps to the boundary tile (self-loop).
    Clamp,
    /// Out-of-bounds step wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds step yields the invalid sentinel.
    #[default]
    Absorb,
}
