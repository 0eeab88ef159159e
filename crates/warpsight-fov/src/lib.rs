//! Field of view for graph-shaped tile worlds.
//!
//! Recursive symmetric shadowcasting with exact rational slopes, extended
//! to worlds whose tiles may carry portals: explicit, possibly rotating,
//! neighbour overrides. Vision that reaches a portal mouth continues
//! through it in a *recast* at the next pass, so a [`View`] records for
//! every revealed cell both what is seen there and how many portal hops
//! it took.
//!
//! ```
//! use warpsight_fov::{FovConfig, Shadowcaster, View};
//! use warpsight_space::{EdgeBehavior, TileGrid};
//!
//! let grid = TileGrid::new(16, 16, 1, EdgeBehavior::Absorb).unwrap();
//! let mut caster = Shadowcaster::new(FovConfig::default()).unwrap();
//! let mut view = View::new(5).unwrap();
//! caster.calculate(&grid, &mut view, grid.location(8, 8, 0).unwrap());
//! assert_eq!(view.revealed_count(), view.cell_count());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod config;
pub mod error;
pub mod fraction;
pub mod resolve;
pub mod row;
pub mod scan;
pub mod view;

pub use classify::TileClass;
pub use config::{FovConfig, FovConfigBuilder, ParentStrategy};
pub use error::FovError;
pub use fraction::Fraction;
pub use resolve::Quadrant;
pub use row::Row;
pub use scan::{calculate, ScanStats, Shadowcaster};
pub use view::{sensible_parent, View, VisibleCell};
