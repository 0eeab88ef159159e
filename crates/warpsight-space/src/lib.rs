//! Tile-grid world backends for Warpsight.
//!
//! This crate provides [`TileGrid`], a bounded 3D stack of 2D tile layers
//! implementing [`WorldQuery`](warpsight_core::WorldQuery), together with
//! the portal table that gives individual tiles explicit, possibly
//! rotating, neighbour overrides.
//!
//! # Edges
//!
//! Stepping past the border of a layer is governed by [`EdgeBehavior`]
//! (absorb into the invalid sentinel, clamp, or wrap).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub(crate) mod grid2d;
pub mod portal;
pub mod tile_grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use portal::{NeighborOverride, PortalTable};
pub use tile_grid::{Tile, TileGrid};
