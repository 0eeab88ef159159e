//! ASCII map fixtures and view renderers.
//!
//! Map legend, one character per tile, top line is the highest `y`:
//!
//! - `.` floor
//! - `#` wall
//! - `~` void (valid but opaque, no material)
//! - `@` floor with the observer on it
//! - any ASCII letter: floor, remembered as a named marker so tests can
//!   place portals by name

use std::collections::HashMap;

use warpsight_core::{Location, WorldQuery};
use warpsight_fov::View;
use warpsight_space::{EdgeBehavior, SpaceError, Tile, TileGrid};

/// A parsed single-layer map.
pub struct AsciiMap {
    pub grid: TileGrid,
    pub observer: Option<Location>,
    pub markers: HashMap<char, Location>,
}

impl AsciiMap {
    /// Location of marker `name`.
    ///
    /// # Panics
    ///
    /// Panics if the map has no such marker.
    pub fn marker(&self, name: char) -> Location {
        match self.markers.get(&name) {
            Some(&loc) => loc,
            None => panic!("map has no marker '{name}'"),
        }
    }

    /// The observer's location.
    ///
    /// # Panics
    ///
    /// Panics if the map has no `@`.
    pub fn observer(&self) -> Location {
        match self.observer {
            Some(loc) => loc,
            None => panic!("map has no observer '@'"),
        }
    }
}

/// Parse an ASCII map. Blank lines and surrounding whitespace are ignored.
pub fn parse_map(text: &str, edge: EdgeBehavior) -> Result<AsciiMap, SpaceError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let width = rows.first().map_or(0, |r| r.chars().count());
    if rows.iter().any(|r| r.chars().count() != width) {
        return Err(SpaceError::InvalidMap {
            reason: "rows have different widths".to_string(),
        });
    }
    let mut grid = TileGrid::new(width as u32, rows.len() as u32, 1, edge)?;
    let mut observer = None;
    let mut markers = HashMap::new();

    let height = rows.len() as i32;
    for (line, row) in rows.iter().enumerate() {
        let y = height - 1 - line as i32;
        for (x, ch) in row.chars().enumerate() {
            let loc = grid.location(x as i32, y, 0)?;
            let tile = match ch {
                '.' => Tile::Floor,
                '#' => Tile::Wall,
                '~' => Tile::Void,
                '@' => {
                    if observer.replace(loc).is_some() {
                        return Err(SpaceError::InvalidMap {
                            reason: "more than one observer".to_string(),
                        });
                    }
                    Tile::Floor
                }
                c if c.is_ascii_alphabetic() => {
                    if markers.insert(c, loc).is_some() {
                        return Err(SpaceError::InvalidMap {
                            reason: format!("marker '{c}' used twice"),
                        });
                    }
                    Tile::Floor
                }
                c => {
                    return Err(SpaceError::InvalidMap {
                        reason: format!("unknown tile '{c}' at ({x}, {y})"),
                    })
                }
            };
            grid.set_tile(loc, tile)?;
        }
    }
    Ok(AsciiMap {
        grid,
        observer,
        markers,
    })
}

/// Render pass indices, top line is local `y = r`.
///
/// `@` centre, `.` hidden, otherwise the pass digit (`+` above 9).
pub fn render_passes(view: &View) -> String {
    render_with(view, |x, y| {
        if (x, y) == (0, 0) {
            return '@';
        }
        match view.visibility_pass_index(x, y) {
            0 => '.',
            p @ 1..=9 => char::from(b'0' + p),
            _ => '+',
        }
    })
}

/// Render what is seen, top line is local `y = r`.
///
/// `@` centre, `?` hidden, `%` invalid, `#` opaque, `*` portal mouth,
/// `.` floor.
pub fn render_view(view: &View, world: &dyn WorldQuery) -> String {
    render_with(view, |x, y| {
        if (x, y) == (0, 0) {
            return '@';
        }
        if !view.visibility_local(x, y) {
            return '?';
        }
        let loc = view.location_local(x, y);
        if !world.is_valid(loc) {
            '%'
        } else if world.blocks_vision(loc) {
            '#'
        } else if world.has_neighbor_override_record(loc) {
            '*'
        } else {
            '.'
        }
    })
}

fn render_with(view: &View, mut cell: impl FnMut(i32, i32) -> char) -> String {
    let r = view.radius() as i32;
    let mut out = String::with_capacity(view.side() * (view.side() + 1));
    for y in (-r..=r).rev() {
        for x in -r..=r {
            out.push(cell(x, y));
        }
        out.push('\n');
    }
    out
}
