//! Single-step traversal of the world graph.
//!
//! Multi-step movement is always a chain of single steps, never an added
//! displacement: the graph may not be planar, and a portal can sit on any
//! intermediate node.

use crate::direction::Direction;
use crate::error::CoreError;
use crate::id::Location;
use crate::traits::WorldQuery;
use smallvec::SmallVec;

/// Step once from `from` in `direction`, seen through `rotation`.
///
/// The world-frame step is `direction.rotate(rotation)`. If `from` has an
/// override for that step whose target is valid, the stored
/// `(target, reorientation)` pair is returned. Otherwise the ordinary grid
/// neighbour is returned with [`Direction::IDENTITY`].
///
/// The returned direction is the reorientation introduced by this step
/// only; callers accumulate it onto their running rotation with
/// [`Direction::rotate`].
///
/// Stepping from an invalid location yields [`Location::INVALID`].
pub fn traverse(
    world: &dyn WorldQuery,
    from: Location,
    direction: Direction,
    rotation: Direction,
) -> (Location, Direction) {
    if !from.is_valid() || !world.is_valid(from) {
        return (Location::INVALID, Direction::IDENTITY);
    }
    let final_direction = direction.rotate(rotation);
    if world.has_neighbor_override_record(from) {
        if let Some((target, reorientation)) = world.neighbor_override(from, final_direction) {
            if target.is_valid() && world.is_valid(target) {
                return (target, reorientation);
            }
        }
    }
    (
        world.default_grid_step(from, final_direction),
        Direction::IDENTITY,
    )
}

/// Step once by a local `(dx, dy)` offset.
///
/// `(0, 0)` returns `from` unchanged with the identity rotation.
///
/// # Panics
///
/// Panics if the offset is not a single step.
pub fn traverse_offset(
    world: &dyn WorldQuery,
    from: Location,
    dx: i32,
    dy: i32,
    rotation: Direction,
) -> (Location, Direction) {
    if dx == 0 && dy == 0 {
        return (from, Direction::IDENTITY);
    }
    traverse(world, from, Direction::from_offset(dx, dy), rotation)
}

/// Fallible form of [`traverse_offset`] for displacements from untrusted input.
pub fn try_traverse_offset(
    world: &dyn WorldQuery,
    from: Location,
    dx: i32,
    dy: i32,
    rotation: Direction,
) -> Result<(Location, Direction), CoreError> {
    if dx == 0 && dy == 0 {
        return Ok((from, Direction::IDENTITY));
    }
    let direction = Direction::try_from_offset(dx, dy).ok_or(CoreError::NonUnitOffset { dx, dy })?;
    Ok(traverse(world, from, direction, rotation))
}

/// One resolved neighbour of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbour {
    /// Local step direction.
    pub direction: Direction,
    /// Node reached.
    pub location: Location,
    /// Reorientation picked up by the step.
    pub rotation: Direction,
}

/// All valid neighbours of `from`, in clockwise order starting at North.
///
/// Steps that leave the world are omitted. The `SmallVec<[_; 8]>` avoids
/// heap allocation since there are never more than 8.
pub fn neighbours(
    world: &dyn WorldQuery,
    from: Location,
    rotation: Direction,
) -> SmallVec<[Neighbour; 8]> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            let (location, rotation) = traverse(world, from, direction, rotation);
            (location.is_valid() && world.is_valid(location)).then_some(Neighbour {
                direction,
                location,
                rotation,
            })
        })
        .collect()
}
