//! Core types and traits for the Warpsight visibility engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Warpsight workspace:
//! compass directions, graph-node handles, the world query trait, and
//! single-step graph traversal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;
pub mod traits;
pub mod traverse;

pub use direction::Direction;
pub use error::CoreError;
pub use id::{GridInstanceId, Location};
pub use traits::WorldQuery;
pub use traverse::{neighbours, traverse, traverse_offset, try_traverse_offset, Neighbour};
