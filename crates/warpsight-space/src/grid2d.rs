//! Shared helpers for layered 2D grid indexing.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;

/// Check that `(x, y, z)` is inside a `width x height x layers` grid.
pub(crate) fn check_bounds(
    x: i32,
    y: i32,
    z: i32,
    width: u32,
    height: u32,
    layers: u32,
) -> Result<(), SpaceError> {
    if x < 0
        || x >= width as i32
        || y < 0
        || y >= height as i32
        || z < 0
        || z >= layers as i32
    {
        return Err(SpaceError::CoordOutOfBounds {
            coord: (x, y, z),
            bounds: format!("[0, {width}) x [0, {height}) x [0, {layers})"),
        });
    }
    Ok(())
}

/// Layer-major, then row-major flat index of an in-bounds coordinate.
pub(crate) fn flat_index(x: i32, y: i32, z: i32, width: u32, height: u32) -> usize {
    let plane = (width as usize) * (height as usize);
    (z as usize) * plane + (y as usize) * (width as usize) + (x as usize)
}

/// Inverse of [`flat_index`].
pub(crate) fn unflatten(index: usize, width: u32, height: u32) -> (i32, i32, i32) {
    let plane = (width as usize) * (height as usize);
    let z = index / plane;
    let rem = index % plane;
    let y = rem / width as usize;
    let x = rem % width as usize;
    (x as i32, y as i32, z as i32)
}

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(resolved_value)` or `None` for Absorb out-of-bounds.
pub(crate) fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Clamp => Some(val.clamp(0, n - 1)),
        EdgeBehavior::Wrap => Some(((val % n) + n) % n),
    }
}
