//! Binary encode/decode for persisted views.
//!
//! All integers are little-endian. The per-cell arrays are stored as
//! three separate planes in [`View::idx`] order, matching the in-memory
//! layout, so encoding is a straight copy.

use std::io::{self, Read, Write};

use warpsight_core::{Direction, Location};
use warpsight_fov::View;

use crate::error::CodecError;
use crate::{FORMAT_VERSION, MAGIC};

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), CodecError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Fill `buf`, reporting a short read as malformed rather than I/O.
fn read_section(r: &mut dyn Read, buf: &mut [u8], what: &str) -> Result<(), CodecError> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => CodecError::Malformed {
            detail: format!("truncated {what}"),
        },
        _ => CodecError::Io(e),
    })
}

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read, what: &str) -> Result<u8, CodecError> {
    let mut buf = [0u8; 1];
    read_section(r, &mut buf, what)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read, what: &str) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    read_section(r, &mut buf, what)?;
    Ok(u32::from_le_bytes(buf))
}

// ── View encode/decode ──────────────────────────────────────────

/// Encode `view` as `[MAGIC] [VERSION] [radius] [cell_count] [locations]
/// [pass indices] [rotations]`.
pub fn encode_view(w: &mut dyn Write, view: &View) -> Result<(), CodecError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u32_le(w, view.radius())?;
    write_u32_le(w, view.cell_count() as u32)?;

    let mut plane = Vec::with_capacity(view.cell_count() * 8);
    for loc in view.locations() {
        plane.extend_from_slice(&loc.index().to_le_bytes());
        plane.extend_from_slice(&loc.generation().to_le_bytes());
    }
    w.write_all(&plane)?;
    w.write_all(view.pass_indices())?;

    let rotations: Vec<u8> = view.rotations().iter().map(|&d| u8::from(d)).collect();
    w.write_all(&rotations)?;
    Ok(())
}

/// Decode and validate a view.
pub fn decode_view(r: &mut dyn Read) -> Result<View, CodecError> {
    let mut magic = [0u8; 4];
    read_section(r, &mut magic, "header")?;
    if magic != MAGIC {
        return Err(CodecError::InvalidMagic);
    }
    let version = read_u8(r, "header")?;
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion { found: version });
    }

    let radius = read_u32_le(r, "header")?;
    let cell_count = read_u32_le(r, "header")? as usize;
    if radius > View::MAX_RADIUS {
        return Err(CodecError::Malformed {
            detail: format!("radius {radius} exceeds maximum {}", View::MAX_RADIUS),
        });
    }
    let side = 2 * radius as usize + 1;
    if cell_count != side * side {
        return Err(CodecError::Malformed {
            detail: format!("cell count {cell_count} does not match radius {radius}"),
        });
    }

    let mut plane = vec![0u8; cell_count * 8];
    read_section(r, &mut plane, "locations")?;
    let locations: Vec<Location> = plane
        .chunks_exact(8)
        .map(|c| {
            Location::new(
                u32::from_le_bytes([c[0], c[1], c[2], c[3]]),
                u32::from_le_bytes([c[4], c[5], c[6], c[7]]),
            )
        })
        .collect();

    let mut pass_index = vec![0u8; cell_count];
    read_section(r, &mut pass_index, "pass indices")?;

    let mut raw_rotations = vec![0u8; cell_count];
    read_section(r, &mut raw_rotations, "rotations")?;
    let rotations = raw_rotations
        .iter()
        .map(|&b| Direction::try_from(b))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CodecError::Malformed {
            detail: e.to_string(),
        })?;

    View::from_parts(radius, locations, pass_index, rotations).map_err(|e| CodecError::Malformed {
        detail: e.to_string(),
    })
}
