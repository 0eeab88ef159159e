//! Hashing utilities for view comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of persisted view state.
//! These hashes are not cryptographically secure; they are equality
//! fast paths for determinism checks.

use warpsight_fov::View;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Compute a hash over every persisted field of `view`.
///
/// Folds in the radius, then the location plane, the pass plane and the
/// rotation plane, in that order. Two views hash equal whenever their
/// encodings are byte-identical.
pub fn view_hash(view: &View) -> u64 {
    let mut hash = fnv1a_u32(FNV_OFFSET, view.radius());
    for loc in view.locations() {
        hash = fnv1a_u32(hash, loc.index());
        hash = fnv1a_u32(hash, loc.generation());
    }
    for &pass in view.pass_indices() {
        hash = fnv1a_byte(hash, pass);
    }
    for &rotation in view.rotations() {
        hash = fnv1a_byte(hash, u8::from(rotation));
    }
    hash
}
