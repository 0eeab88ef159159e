//! Warpsight: symmetric shadowcasting field of view over graph-shaped tile
//! worlds with rotating portals.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Warpsight sub-crates. For most users, adding `warpsight` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warpsight::prelude::*;
//!
//! // A 20x9 room split by a wall, joined by a portal.
//! let mut grid = TileGrid::new(20, 9, 1, EdgeBehavior::Absorb).unwrap();
//! grid.fill_rect((10, 0), (10, 8), 0, Tile::Wall).unwrap();
//! let mouth = grid.location(4, 6, 0).unwrap();
//! let far_side = grid.location(15, 4, 0).unwrap();
//! grid.set_portal(mouth, Direction::North, far_side, Direction::North).unwrap();
//!
//! let mut caster = Shadowcaster::new(FovConfig::default()).unwrap();
//! let mut view = View::new(5).unwrap();
//! let origin = grid.location(4, 4, 0).unwrap();
//! caster.calculate(&grid, &mut view, origin);
//!
//! // The mouth is seen directly, the far side on the second pass.
//! assert_eq!(view.visibility_pass_index(0, 2), 1);
//! assert_eq!(view.location_local(0, 3), far_side);
//! assert_eq!(view.visibility_pass_index(0, 3), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warpsight-core` | Directions, locations, the world trait, traversal |
//! | [`space`] | `warpsight-space` | Tile-grid world backend and portal table |
//! | [`fov`] | `warpsight-fov` | Views, exact slopes, the shadowcasting engine |
//! | [`codec`] | `warpsight-codec` | Persisted view format, hashing, comparison |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits and traversal (`warpsight-core`).
///
/// Contains [`types::Direction`], [`types::Location`], the
/// [`types::WorldQuery`] trait every world implements, and
/// [`types::traverse`], the single-step portal-aware walk.
pub use warpsight_core as types;

/// Tile-grid world backend (`warpsight-space`).
///
/// [`space::TileGrid`] is a layered grid with configurable
/// [`space::EdgeBehavior`] and a [`space::PortalTable`] of neighbour
/// overrides.
pub use warpsight_space as space;

/// Visibility engine (`warpsight-fov`).
///
/// Configure with [`fov::FovConfig`], compute into a [`fov::View`] with
/// [`fov::Shadowcaster`] or the free function [`fov::calculate`].
pub use warpsight_fov as fov;

/// Persisted views (`warpsight-codec`).
///
/// Store views with [`codec::encode_view`], verify determinism with
/// [`codec::view_hash`] and [`codec::compare_views`].
pub use warpsight_codec as codec;

/// Common imports for typical Warpsight usage.
///
/// ```rust
/// use warpsight::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use warpsight_core::{traverse, Direction, Location, WorldQuery};

    // Errors
    pub use warpsight_codec::CodecError;
    pub use warpsight_core::CoreError;
    pub use warpsight_fov::FovError;
    pub use warpsight_space::SpaceError;

    // Space
    pub use warpsight_space::{EdgeBehavior, Tile, TileGrid};

    // Visibility
    pub use warpsight_fov::{FovConfig, ParentStrategy, ScanStats, Shadowcaster, View};
}
