//! Persisted view format, hashing and comparison for Warpsight.
//!
//! A [`View`](warpsight_fov::View) is the only state the visibility
//! engine produces, so it is the only thing persisted. Memory systems and
//! determinism checks store and diff views with this crate.
//!
//! - [`encode_view`] / [`decode_view`] write and validate the binary form
//! - [`view_hash`] gives an FNV-1a fingerprint of the persisted fields
//! - [`compare_views`] diffs two views with a hash fast path
//! - All I/O uses a custom binary codec (no serde dependency)
//!
//! # Format
//!
//! ```text
//! [MAGIC "WSVW"] [VERSION u8] [radius u32] [cell_count u32]
//! [locations: (index u32, generation u32) * n]
//! [pass_index: u8 * n] [rotations: u8 * n]
//! ```
//!
//! All integers are little-endian and `n = (2 * radius + 1)^2`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod compare;
pub mod error;
pub mod hash;

pub use codec::{decode_view, encode_view};
pub use compare::{compare_views, CellDivergence, CellState, DivergenceKind, ViewDivergence};
pub use error::CodecError;
pub use hash::view_hash;

/// Magic bytes at the start of every persisted view.
pub const MAGIC: [u8; 4] = *b"WSVW";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
