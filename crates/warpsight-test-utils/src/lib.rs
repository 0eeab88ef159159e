//! Test utilities and mock types for Warpsight development.
//!
//! Provides [`MockWorld`], a hand-wired graph implementation of
//! [`WorldQuery`], plus ASCII map fixtures and view renderers in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use warpsight_core::{Direction, Location, WorldQuery};

pub use fixtures::{parse_map, render_passes, render_view, AsciiMap};

/// Generation stamped on every [`MockWorld`] location.
pub const MOCK_GENERATION: u32 = 1;

#[derive(Clone, Debug, Default)]
struct MockNode {
    blocks: bool,
    edges: [Option<Location>; 8],
    overrides: HashMap<Direction, (Location, Direction)>,
}

/// Mock implementation of [`WorldQuery`].
///
/// Nodes are created with [`add_node`](MockWorld::add_node) and wired by
/// hand, so the "grid" can be any graph: corridors that loop back on
/// themselves, dead ends, one-way edges. Overrides are stored separately
/// from plain edges, exactly like portals on a tile grid.
#[derive(Clone, Debug, Default)]
pub struct MockWorld {
    nodes: HashMap<u32, MockNode>,
    next_index: u32,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unconnected node.
    pub fn add_node(&mut self, blocks: bool) -> Location {
        let loc = Location::new(self.next_index, MOCK_GENERATION);
        let node = MockNode {
            blocks,
            ..MockNode::default()
        };
        self.nodes.insert(self.next_index, node);
        self.next_index += 1;
        loc
    }

    pub fn set_blocks(&mut self, loc: Location, blocks: bool) {
        if let Some(node) = self.node_mut(loc) {
            node.blocks = blocks;
        }
    }

    /// One-way plain edge: stepping `direction` from `from` reaches `to`.
    pub fn link(&mut self, from: Location, direction: Direction, to: Location) {
        if let Some(node) = self.node_mut(from) {
            node.edges[direction.index() as usize] = Some(to);
        }
    }

    /// Plain edge both ways: `a --direction--> b` and `b --reverse--> a`.
    pub fn link_both(&mut self, a: Location, direction: Direction, b: Location) {
        self.link(a, direction, b);
        self.link(b, direction.reverse(), a);
    }

    /// Portal slot on `from`.
    pub fn set_override(
        &mut self,
        from: Location,
        direction: Direction,
        target: Location,
        rotation: Direction,
    ) {
        if let Some(node) = self.node_mut(from) {
            node.overrides.insert(direction, (target, rotation));
        }
    }

    /// A `width x height` block of open nodes, 8-connected, returned
    /// row-major from the south-west corner.
    pub fn grid(&mut self, width: usize, height: usize) -> Vec<Location> {
        let cells: Vec<Location> = (0..width * height).map(|_| self.add_node(false)).collect();
        for y in 0..height {
            for x in 0..width {
                let here = cells[y * width + x];
                for d in Direction::ALL {
                    let (dx, dy) = d.to_offset();
                    let (nx, ny) = (x as i64 + dx as i64, y as i64 + dy as i64);
                    if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
                        self.link(here, d, cells[ny as usize * width + nx as usize]);
                    }
                }
            }
        }
        cells
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, loc: Location) -> Option<&MockNode> {
        if loc.generation() != MOCK_GENERATION {
            return None;
        }
        self.nodes.get(&loc.index())
    }

    fn node_mut(&mut self, loc: Location) -> Option<&mut MockNode> {
        if loc.generation() != MOCK_GENERATION {
            return None;
        }
        self.nodes.get_mut(&loc.index())
    }
}

impl WorldQuery for MockWorld {
    fn is_valid(&self, loc: Location) -> bool {
        self.node(loc).is_some()
    }

    fn blocks_vision(&self, loc: Location) -> bool {
        self.node(loc).map_or(true, |n| n.blocks)
    }

    fn neighbor_override(&self, loc: Location, direction: Direction) -> Option<(Location, Direction)> {
        self.node(loc)?.overrides.get(&direction).copied()
    }

    fn has_neighbor_override_record(&self, loc: Location) -> bool {
        self.node(loc).is_some_and(|n| !n.overrides.is_empty())
    }

    fn default_grid_step(&self, loc: Location, direction: Direction) -> Location {
        self.node(loc)
            .and_then(|n| n.edges[direction.index() as usize])
            .unwrap_or(Location::INVALID)
    }
}
