//! Benchmark profiles and utilities for the Warpsight visibility engine.
//!
//! Provides pre-built tile worlds for benchmarks and examples:
//!
//! - [`open_field`]: no walls, worst case for revealed cells
//! - [`pillar_hall`]: a regular lattice of single-tile pillars, many
//!   narrow shadows and row splits
//! - [`portal_hall`]: scattered walls plus deterministic portal pairs,
//!   exercising recasts
//! - [`scattered_positions`]: deterministic distinct tile placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use warpsight_core::{Direction, Location};
use warpsight_space::{EdgeBehavior, SpaceError, Tile, TileGrid};

/// A benchmark world with its observer.
pub struct Profile {
    /// The world.
    pub grid: TileGrid,
    /// Where the observer stands, always a floor tile.
    pub observer: Location,
}

/// `size x size` floor, observer in the middle.
pub fn open_field(size: u32) -> Result<Profile, SpaceError> {
    let grid = TileGrid::new(size, size, 1, EdgeBehavior::Absorb)?;
    let mid = (size / 2) as i32;
    let observer = grid.location(mid, mid, 0)?;
    Ok(Profile { grid, observer })
}

/// `size x size` floor with a wall every `spacing` tiles on both axes.
///
/// The observer sits midway between pillars so no pillar is adjacent.
pub fn pillar_hall(size: u32, spacing: u32) -> Result<Profile, SpaceError> {
    let mut grid = TileGrid::new(size, size, 1, EdgeBehavior::Absorb)?;
    let step = spacing.max(2) as usize;
    for y in (0..size as i32).step_by(step) {
        for x in (0..size as i32).step_by(step) {
            grid.set_tile_at(x, y, 0, Tile::Wall)?;
        }
    }
    let mid = (size / 2) as i32;
    let offset = (step / 2) as i32;
    let centre = mid - mid % step as i32 + offset;
    let observer = grid.location(centre, centre, 0)?;
    grid.set_tile(observer, Tile::Floor)?;
    Ok(Profile { grid, observer })
}

/// `size x size` floor with `walls` scattered wall tiles and `portals`
/// one-way portals between scattered floor tiles, rotations cycling
/// through all eight directions.
pub fn portal_hall(size: u32, walls: u16, portals: u16, seed: u64) -> Result<Profile, SpaceError> {
    let mut grid = TileGrid::new(size, size, 1, EdgeBehavior::Absorb)?;
    let cell_count = grid.tile_count();
    let mid = (size / 2) as i32;
    let observer = grid.location(mid, mid, 0)?;

    let generation = grid.instance_id().get();
    let placed = scattered_positions(cell_count, walls + 2 * portals + 1, seed);
    let mut spots = placed
        .into_iter()
        .map(|(_, idx)| Location::new(idx as u32, generation))
        .filter(|&loc| loc != observer);

    for loc in spots.by_ref().take(walls as usize) {
        grid.set_tile(loc, Tile::Wall)?;
    }
    for k in 0..portals {
        let (Some(from), Some(to)) = (spots.next(), spots.next()) else {
            break;
        };
        let direction = Direction::from_index_wrapping((k % 8) as u8);
        let rotation = Direction::from_index_wrapping((k * 3 % 8) as u8);
        grid.set_portal(from, direction, to, rotation)?;
    }
    Ok(Profile { grid, observer })
}

/// Generate deterministic distinct positions.
///
/// Places `n` tiles at spread-out flat indices using a simple hash of the
/// seed. Returns `(ordinal, flat_index)` pairs.
pub fn scattered_positions(cell_count: usize, n: u16, seed: u64) -> Vec<(u16, usize)> {
    let n = n.min(cell_count.min(u16::MAX as usize) as u16);
    let mut positions = Vec::with_capacity(n as usize);
    let mut occupied = HashSet::new();

    for i in 0..n {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add((i as u64 + 1).wrapping_mul(1442695040888963407))
            % cell_count as u64) as usize;

        // Linear probe to avoid collisions
        while occupied.contains(&pos) {
            pos = (pos + 1) % cell_count;
        }
        occupied.insert(pos);
        positions.push((i, pos));
    }

    positions
}
