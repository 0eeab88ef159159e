//! The observer-centred visibility buffer.
//!
//! A [`View`] is a `(2r+1) x (2r+1)` square of local cells centred on the
//! observer. Each cell records which world [`Location`] it shows, the
//! pass that revealed it (0 = hidden), and the rotation accumulated on
//! the way there. Cells are addressed by local `(x, y)` with
//! `|x|, |y| <= r`; `y` grows north.

use crate::error::FovError;
use warpsight_core::{traverse_offset, Direction, Location, WorldQuery};

/// One revealed cell, as yielded by [`View::visible_cells`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleCell {
    /// Local x.
    pub x: i32,
    /// Local y.
    pub y: i32,
    /// The world location shown.
    pub location: Location,
    /// The pass that revealed it, at least 1.
    pub pass: u8,
    /// Accumulated rotation from the observer's frame.
    pub rotation: Direction,
}

/// Per-observer visibility result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    radius: u32,
    locations: Vec<Location>,
    pass_index: Vec<u8>,
    rotations: Vec<Direction>,
}

impl View {
    /// Largest supported radius.
    pub const MAX_RADIUS: u32 = 4096;

    /// Create a view with every cell hidden and invalid.
    pub fn new(radius: u32) -> Result<Self, FovError> {
        let mut view = Self::default();
        view.set_radius(radius)?;
        Ok(view)
    }

    /// Rebuild a view from its flattened buffers, as persisted.
    pub fn from_parts(
        radius: u32,
        locations: Vec<Location>,
        pass_index: Vec<u8>,
        rotations: Vec<Direction>,
    ) -> Result<Self, FovError> {
        check_radius(radius)?;
        let expected = cell_count(radius);
        for (name, actual) in [
            ("locations", locations.len()),
            ("pass_index", pass_index.len()),
            ("rotations", rotations.len()),
        ] {
            if actual != expected {
                return Err(FovError::BufferLength {
                    name,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self {
            radius,
            locations,
            pass_index,
            rotations,
        })
    }

    /// Resize to `radius`, discarding all contents.
    pub fn set_radius(&mut self, radius: u32) -> Result<(), FovError> {
        check_radius(radius)?;
        self.resize(radius);
        Ok(())
    }

    fn resize(&mut self, radius: u32) {
        let n = cell_count(radius);
        self.radius = radius;
        self.locations = vec![Location::INVALID; n];
        self.pass_index = vec![0; n];
        self.rotations = vec![Direction::IDENTITY; n];
    }

    /// Grow to at least the radius of `other`, which is already in range.
    pub(crate) fn upsize_to_match(&mut self, other: &View) {
        if other.radius > self.radius {
            self.resize(other.radius);
        }
    }

    /// Grow to `radius` if currently smaller; never shrinks.
    ///
    /// Contents are discarded only when the view actually grows.
    pub fn set_radius_only_upsize(&mut self, radius: u32) -> Result<(), FovError> {
        if radius > self.radius {
            self.set_radius(radius)?;
        }
        Ok(())
    }

    /// Hide every cell, then place `location` at the centre at pass 1.
    pub fn reset_at(&mut self, location: Location) {
        self.locations.fill(Location::INVALID);
        self.pass_index.fill(0);
        self.rotations.fill(Direction::IDENTITY);
        self.set_cell(0, 0, location, 1, Direction::IDENTITY);
    }

    /// The view radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Cells per side, `2r + 1`.
    pub fn side(&self) -> usize {
        2 * self.radius as usize + 1
    }

    /// Total cells, `(2r + 1)^2`.
    pub fn cell_count(&self) -> usize {
        self.pass_index.len()
    }

    /// Whether local `(x, y)` lies inside the view.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let r = self.radius as i64;
        (x as i64).abs() <= r && (y as i64).abs() <= r
    }

    /// Flat index of local `(x, y)`: `(x + r) + (y + r) * (2r + 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `|x| > r` or `|y| > r`.
    pub fn idx(&self, x: i32, y: i32) -> usize {
        match self.try_idx(x, y) {
            Some(i) => i,
            None => panic!(
                "local cell ({x}, {y}) outside view of radius {}",
                self.radius
            ),
        }
    }

    /// Flat index of local `(x, y)`, or `None` outside the view.
    pub fn try_idx(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let r = self.radius as i64;
        let side = 2 * r + 1;
        Some(((x as i64 + r) + (y as i64 + r) * side) as usize)
    }

    /// Inverse of [`idx`](Self::idx).
    pub fn local_coords(&self, index: usize) -> (i32, i32) {
        let side = self.side();
        let r = self.radius as i32;
        ((index % side) as i32 - r, (index / side) as i32 - r)
    }

    /// Whether local `(x, y)` has been revealed.
    pub fn visibility_local(&self, x: i32, y: i32) -> bool {
        self.visibility_pass_index(x, y) > 0
    }

    /// The pass that revealed local `(x, y)`, 0 if hidden.
    pub fn visibility_pass_index(&self, x: i32, y: i32) -> u8 {
        self.pass_index[self.idx(x, y)]
    }

    /// The world location shown at local `(x, y)`.
    pub fn location_local(&self, x: i32, y: i32) -> Location {
        self.locations[self.idx(x, y)]
    }

    /// The accumulated rotation at local `(x, y)`.
    pub fn rotation_local(&self, x: i32, y: i32) -> Direction {
        self.rotations[self.idx(x, y)]
    }

    /// [`visibility_local`](Self::visibility_local), or `None` outside the view.
    pub fn try_visibility_local(&self, x: i32, y: i32) -> Option<bool> {
        self.try_idx(x, y).map(|i| self.pass_index[i] > 0)
    }

    /// [`visibility_pass_index`](Self::visibility_pass_index), or `None` outside the view.
    pub fn try_visibility_pass_index(&self, x: i32, y: i32) -> Option<u8> {
        self.try_idx(x, y).map(|i| self.pass_index[i])
    }

    /// [`location_local`](Self::location_local), or `None` outside the view.
    pub fn try_location_local(&self, x: i32, y: i32) -> Option<Location> {
        self.try_idx(x, y).map(|i| self.locations[i])
    }

    /// [`rotation_local`](Self::rotation_local), or `None` outside the view.
    pub fn try_rotation_local(&self, x: i32, y: i32) -> Option<Direction> {
        self.try_idx(x, y).map(|i| self.rotations[i])
    }

    /// Whether a reveal at `pass` may replace local `(x, y)`.
    ///
    /// Hidden cells are always writable; otherwise the lower pass wins and
    /// an equal pass may rewrite.
    pub fn should_overwrite(&self, x: i32, y: i32, pass: u8) -> bool {
        let existing = self.visibility_pass_index(x, y);
        existing == 0 || existing >= pass
    }

    /// Write every field of local `(x, y)`.
    pub fn set_cell(&mut self, x: i32, y: i32, location: Location, pass: u8, rotation: Direction) {
        let i = self.idx(x, y);
        self.locations[i] = location;
        self.pass_index[i] = pass;
        self.rotations[i] = rotation;
    }

    /// Revealed cells in index order.
    pub fn visible_cells(&self) -> impl Iterator<Item = VisibleCell> + '_ {
        self.pass_index
            .iter()
            .enumerate()
            .filter(|&(_, &pass)| pass > 0)
            .map(move |(i, &pass)| {
                let (x, y) = self.local_coords(i);
                VisibleCell {
                    x,
                    y,
                    location: self.locations[i],
                    pass,
                    rotation: self.rotations[i],
                }
            })
    }

    /// Number of revealed cells.
    pub fn revealed_count(&self) -> usize {
        self.pass_index.iter().filter(|&&p| p > 0).count()
    }

    /// Flattened locations in index order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Flattened pass indices in index order.
    pub fn pass_indices(&self) -> &[u8] {
        &self.pass_index
    }

    /// Flattened rotations in index order.
    pub fn rotations(&self) -> &[Direction] {
        &self.rotations
    }

    /// Resolve every cell's world location by one-step walks out from the
    /// centre, ring by ring.
    ///
    /// Each cell is reached from its sensible parent, a cell in an inner
    /// ring at most one step away, using the parent's accumulated
    /// rotation. Pass indices are left untouched.
    pub fn build_local_space(&mut self, world: &dyn WorldQuery) {
        let r = self.radius as i32;
        for ring in 1..=r {
            for x in -ring..=ring {
                self.resolve_from_parent(world, x, ring);
                self.resolve_from_parent(world, x, -ring);
            }
            for y in (-ring + 1)..ring {
                self.resolve_from_parent(world, -ring, y);
                self.resolve_from_parent(world, ring, y);
            }
        }
    }

    fn resolve_from_parent(&mut self, world: &dyn WorldQuery, x: i32, y: i32) {
        let (px, py) = sensible_parent(x, y);
        let parent = self.idx(px, py);
        let parent_rot = self.rotations[parent];
        let (location, delta) =
            traverse_offset(world, self.locations[parent], x - px, y - py, parent_rot);
        let i = self.idx(x, y);
        self.locations[i] = location;
        self.rotations[i] = parent_rot.rotate(delta);
    }
}

impl Default for View {
    /// A radius-0 view: just the hidden centre cell.
    fn default() -> Self {
        Self {
            radius: 0,
            locations: vec![Location::INVALID],
            pass_index: vec![0],
            rotations: vec![Direction::IDENTITY],
        }
    }
}

/// The cell one ring closer to the centre that `(x, y)` is reached from.
///
/// Scales both axes by `(m - 1) / m` where `m = max(|x|, |y|)`, rounding
/// magnitudes up. The result is at most one step from `(x, y)`.
pub fn sensible_parent(x: i32, y: i32) -> (i32, i32) {
    let m = x.abs().max(y.abs());
    if m == 0 {
        return (0, 0);
    }
    let shrink = |a: i32| {
        let mag = (a.abs() * (m - 1) + m - 1) / m;
        mag * a.signum()
    };
    (shrink(x), shrink(y))
}

fn check_radius(radius: u32) -> Result<(), FovError> {
    if radius > View::MAX_RADIUS {
        return Err(FovError::RadiusTooLarge {
            radius,
            max: View::MAX_RADIUS,
        });
    }
    Ok(())
}

fn cell_count(radius: u32) -> usize {
    let side = 2 * radius as usize + 1;
    side * side
}
