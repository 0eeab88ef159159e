//! Quadrant frames and parent resolution.
//!
//! A cell's world identity is never computed from its coordinates. It is
//! found by stepping once from a parent cell in the previous row, whose
//! identity the scratch view already holds for the current pass.

use crate::classify::TileClass;
use crate::config::ParentStrategy;
use crate::row::Row;
use crate::view::View;
use smallvec::SmallVec;
use warpsight_core::{traverse_offset, Direction, Location, WorldQuery};

/// One of the four 90 degree sectors scanned around the observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Rows grow toward +y.
    North,
    /// Rows grow toward +x.
    East,
    /// Rows grow toward -y.
    South,
    /// Rows grow toward -x.
    West,
}

impl Quadrant {
    /// The order in which a calculation visits the quadrants.
    pub const SCAN_ORDER: [Quadrant; 4] = [
        Quadrant::West,
        Quadrant::East,
        Quadrant::North,
        Quadrant::South,
    ];

    /// Map `(col, row)` in this quadrant's frame to local view `(x, y)`.
    pub fn transform(self, col: i32, row: i32) -> (i32, i32) {
        match self {
            Quadrant::North => (col, row),
            Quadrant::South => (col, -row),
            Quadrant::East => (row, col),
            Quadrant::West => (-row, col),
        }
    }

    /// The compass direction the quadrant faces.
    pub fn direction(self) -> Direction {
        match self {
            Quadrant::North => Direction::North,
            Quadrant::East => Direction::East,
            Quadrant::South => Direction::South,
            Quadrant::West => Direction::West,
        }
    }
}

/// Columns of the previous row that lie inside `row`'s arc:
/// `[ceil((d-1) * start), floor((d-1) * end)]`.
///
/// When the arc is narrower than one cell at `d-1` that range is empty,
/// and the single column the arc covers there (by the row rounding) is
/// used instead. Never widen it: a neighbouring column may be the portal
/// mouth that split this row.
fn parent_bounds(row: &Row) -> (i32, i32) {
    let d = row.depth - 1;
    let lo = row.start.mul_ceil(d);
    let hi = row.end.mul_floor(d);
    if lo <= hi {
        return (lo, hi);
    }
    let covered = row.start.mul_round_up(d).min(row.end.mul_round_down(d));
    (covered, covered)
}

/// Parent column by clamping `col` into the previous row's arc, then to
/// within one column of `col`.
pub fn bounding_box_parent(row: &Row, col: i32) -> i32 {
    let (lo, hi) = parent_bounds(row);
    col.clamp(lo, hi).clamp(col - 1, col + 1)
}

/// Parent column preferring the candidate nearest the child's exact
/// centre line, when that choice is ambiguous.
///
/// Only kicks in when at least two columns within one step of `col`
/// (and inside the previous row's arc) hold distinct open floor tiles in
/// `scratch`. Ties go to the smaller absolute column. Otherwise the
/// bounding-box parent is used.
pub fn center_aligned_parent(
    world: &dyn WorldQuery,
    scratch: &View,
    quadrant: Quadrant,
    row: &Row,
    col: i32,
) -> i32 {
    let fallback = bounding_box_parent(row, col);
    let (lo, hi) = parent_bounds(row);
    let parent_depth = row.depth - 1;

    let mut candidates: SmallVec<[(i32, Location); 3]> = SmallVec::new();
    for pc in (col - 1).max(lo)..=(col + 1).min(hi) {
        let (px, py) = quadrant.transform(pc, parent_depth);
        let loc = scratch.location_local(px, py);
        if TileClass::of(world, loc).allows_vision() && candidates.iter().all(|&(_, l)| l != loc) {
            candidates.push((pc, loc));
        }
    }
    if candidates.len() < 2 {
        return fallback;
    }
    // |pc - col * (d-1)/d| scaled by d.
    candidates
        .iter()
        .map(|&(pc, _)| pc)
        .min_by_key(|&pc| ((pc * row.depth - col * parent_depth).abs(), pc.abs()))
        .unwrap_or(fallback)
}

/// Resolve the tile at `(col, row.depth)` by one step from its parent.
///
/// Returns the child location and its accumulated rotation. An invalid
/// parent yields an invalid child.
pub fn resolve_tile(
    world: &dyn WorldQuery,
    scratch: &View,
    quadrant: Quadrant,
    row: &Row,
    col: i32,
    strategy: ParentStrategy,
) -> (Location, Direction) {
    let pcol = match strategy {
        ParentStrategy::BoundingBox => bounding_box_parent(row, col),
        ParentStrategy::CenterAligned => center_aligned_parent(world, scratch, quadrant, row, col),
    };
    let (px, py) = quadrant.transform(pcol, row.depth - 1);
    let (cx, cy) = quadrant.transform(col, row.depth);
    let (dx, dy) = (cx - px, cy - py);
    debug_assert!(
        dx.abs() <= 1 && dy.abs() <= 1,
        "parent ({px}, {py}) is not adjacent to ({cx}, {cy})"
    );

    let parent = scratch.location_local(px, py);
    if !parent.is_valid() {
        return (Location::INVALID, Direction::IDENTITY);
    }
    let parent_rot = scratch.rotation_local(px, py);
    let (location, delta) = traverse_offset(world, parent, dx, dy, parent_rot);
    (location, parent_rot.rotate(delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraction::Fraction;
    use warpsight_space::{EdgeBehavior, Tile, TileGrid};

    // ── Transform ───────────────────────────────────────────────

    #[test]
    fn transform_per_quadrant() {
        assert_eq!(Quadrant::North.transform(-2, 3), (-2, 3));
        assert_eq!(Quadrant::South.transform(-2, 3), (-2, -3));
        assert_eq!(Quadrant::East.transform(-2, 3), (3, -2));
        assert_eq!(Quadrant::West.transform(-2, 3), (-3, -2));
    }

    #[test]
    fn quadrant_axis_matches_direction_offset() {
        for q in Quadrant::SCAN_ORDER {
            assert_eq!(q.transform(0, 1), q.direction().to_offset());
        }
    }

    // ── Bounding box ────────────────────────────────────────────

    #[test]
    fn first_row_parents_are_origin() {
        let row = Row::first();
        for col in -1..=1 {
            assert_eq!(bounding_box_parent(&row, col), 0);
        }
    }

    #[test]
    fn bounding_box_clamps_into_previous_arc() {
        let row = Row::new(1, 4, Fraction::slope(1, 2), Fraction::ONE);
        // Previous row (depth 3): ceil(3/4) = 1 ..= 3.
        assert_eq!(bounding_box_parent(&row, 1), 1);
        assert_eq!(bounding_box_parent(&row, 4), 3);
        assert_eq!(bounding_box_parent(&row, 2), 2);
    }

    #[test]
    fn bounding_box_narrow_arc_snaps_to_covered_column() {
        // Arc narrower than a cell at depth 2: ceil(0.25) = 1 > floor(0.3) = 0.
        let row = Row::new(2, 3, Fraction::new(1, 8), Fraction::new(3, 20));
        assert_eq!(bounding_box_parent(&row, 0), 0);
        assert_eq!(bounding_box_parent(&row, 1), 0);
    }

    #[test]
    fn bounding_box_narrow_arc_skips_splitting_column() {
        // Row split by a blocker at (5, 5): depth 5 covers 25/6..=4.5,
        // which only column 4 rounds into. Column 5 is the blocker.
        let row = Row::new(1, 6, Fraction::slope(3, 3), Fraction::slope(5, 5));
        assert_eq!(parent_bounds(&row), (4, 4));
        assert_eq!(bounding_box_parent(&row, 5), 4);
    }

    // ── Resolution ──────────────────────────────────────────────

    fn scratch_for(grid: &TileGrid, x: i32, y: i32, r: u32) -> View {
        let mut scratch = View::new(r).unwrap();
        scratch.reset_at(grid.location(x, y, 0).unwrap());
        scratch.build_local_space(grid);
        scratch
    }

    #[test]
    fn resolve_on_plain_grid_matches_coordinates() {
        let grid = TileGrid::new(11, 11, 1, EdgeBehavior::Absorb).unwrap();
        let scratch = scratch_for(&grid, 5, 5, 4);
        let row = Row::new(1, 3, Fraction::NEG_ONE, Fraction::ONE);
        for q in Quadrant::SCAN_ORDER {
            for col in row.min_col()..=row.max_col() {
                let (x, y) = q.transform(col, row.depth);
                let (loc, rot) =
                    resolve_tile(&grid, &scratch, q, &row, col, ParentStrategy::BoundingBox);
                assert_eq!(loc, grid.location(5 + x, 5 + y, 0).unwrap());
                assert_eq!(rot, Direction::North);
            }
        }
    }

    #[test]
    fn resolve_from_invalid_parent_is_invalid() {
        let grid = TileGrid::new(3, 3, 1, EdgeBehavior::Absorb).unwrap();
        let scratch = scratch_for(&grid, 0, 1, 3);
        let row = Row::new(1, 3, Fraction::NEG_ONE, Fraction::ONE);
        let (loc, rot) =
            resolve_tile(&grid, &scratch, Quadrant::West, &row, 0, ParentStrategy::BoundingBox);
        assert_eq!(loc, Location::INVALID);
        assert_eq!(rot, Direction::North);
    }

    #[test]
    fn center_aligned_falls_back_without_ambiguity() {
        let mut grid = TileGrid::new(11, 11, 1, EdgeBehavior::Absorb).unwrap();
        // Walls everywhere in the previous row except one column.
        grid.fill_rect((2, 7), (8, 7), 0, Tile::Wall).unwrap();
        grid.set_tile_at(6, 7, 0, Tile::Floor).unwrap();
        let scratch = scratch_for(&grid, 5, 5, 4);
        let row = Row::new(1, 3, Fraction::NEG_ONE, Fraction::ONE);
        for col in -3..=3 {
            assert_eq!(
                center_aligned_parent(&grid, &scratch, Quadrant::North, &row, col),
                bounding_box_parent(&row, col)
            );
        }
    }

    #[test]
    fn center_aligned_prefers_exact_centre_line() {
        let grid = TileGrid::new(11, 11, 1, EdgeBehavior::Absorb).unwrap();
        let scratch = scratch_for(&grid, 5, 5, 4);
        let row = Row::new(1, 3, Fraction::NEG_ONE, Fraction::ONE);
        // Child col 2 at depth 3: centre line crosses depth 2 at 4/3.
        // Candidates 1, 2 (3 is outside the previous arc): 1 is closer.
        assert_eq!(bounding_box_parent(&row, 2), 2);
        assert_eq!(
            center_aligned_parent(&grid, &scratch, Quadrant::North, &row, 2),
            1
        );
        // Child col 0: centre line hits 0 exactly.
        assert_eq!(
            center_aligned_parent(&grid, &scratch, Quadrant::North, &row, 0),
            0
        );
        // Child col -3: only -2 is a candidate in range.
        assert_eq!(
            center_aligned_parent(&grid, &scratch, Quadrant::North, &row, -3),
            -2
        );
    }

    #[test]
    fn center_aligned_tie_prefers_smaller_column() {
        let grid = TileGrid::new(11, 11, 1, EdgeBehavior::Absorb).unwrap();
        let scratch = scratch_for(&grid, 5, 5, 4);
        // Depth 2, child col 1: centre crosses depth 1 at 1/2; 0 and 1 tie.
        let row = Row::new(1, 2, Fraction::NEG_ONE, Fraction::ONE);
        assert_eq!(
            center_aligned_parent(&grid, &scratch, Quadrant::North, &row, 1),
            0
        );
        assert_eq!(
            center_aligned_parent(&grid, &scratch, Quadrant::North, &row, -1),
            0
        );
    }
}
