//! Recursive symmetric shadowcasting through portals.
//!
//! Each quadrant is scanned row by row outward from the observer. A row
//! is split wherever vision is blocked, and every floor portal mouth
//! starts a recast: a narrowed row one pass higher that continues through
//! the portal's wedge of the arc. Cell identities come from the scratch
//! view, which always holds the latest placement at every depth.

use crate::classify::TileClass;
use crate::config::FovConfig;
use crate::error::FovError;
use crate::fraction::Fraction;
use crate::resolve::{resolve_tile, Quadrant};
use crate::row::Row;
use crate::view::View;
use warpsight_core::{Location, WorldQuery};

/// Counters from one calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Rows scanned across all quadrants and passes.
    pub rows_scanned: usize,
    /// Writes into the output view, rewrites included.
    pub cells_written: usize,
    /// Recast rows started through portal mouths.
    pub recasts: usize,
    /// Highest pass that wrote a cell.
    pub deepest_pass: u8,
    /// Branches dropped at the nested scan cap.
    pub truncated_branches: usize,
}

/// Compute what `origin` sees into `view`.
///
/// `view` keeps its radius; `scratch` is grown to match if smaller and
/// is clobbered. Both are reset at `origin` first.
pub fn calculate(
    world: &dyn WorldQuery,
    view: &mut View,
    scratch: &mut View,
    origin: Location,
    config: &FovConfig,
) -> ScanStats {
    scratch.upsize_to_match(view);
    view.reset_at(origin);
    scratch.reset_at(origin);
    if config.build_local_space() {
        view.build_local_space(world);
    }

    let mut scanner = Scanner {
        world,
        radius: view.radius() as i32,
        view: &mut *view,
        scratch: &mut *scratch,
        config,
        stats: ScanStats {
            deepest_pass: 1,
            ..ScanStats::default()
        },
    };
    for quadrant in Quadrant::SCAN_ORDER {
        scanner.scan(quadrant, Row::first(), 0);
    }
    let stats = scanner.stats;

    if stats.truncated_branches > 0 {
        log::warn!(
            "fov from {origin}: {} branches cut at scan depth {}",
            stats.truncated_branches,
            config.max_scan_depth()
        );
    }
    log::debug!(
        "fov from {origin}: radius {}, {} cells revealed, {} rows, {} recasts, deepest pass {}",
        view.radius(),
        view.revealed_count(),
        stats.rows_scanned,
        stats.recasts,
        stats.deepest_pass
    );
    stats
}

struct Scanner<'a> {
    world: &'a dyn WorldQuery,
    view: &'a mut View,
    scratch: &'a mut View,
    config: &'a FovConfig,
    radius: i32,
    stats: ScanStats,
}

impl Scanner<'_> {
    fn scan(&mut self, quadrant: Quadrant, mut row: Row, level: usize) {
        if row.depth > self.radius || row.pass > self.config.max_pass() {
            return;
        }
        if level >= self.config.max_scan_depth() {
            log::trace!("scan cap hit at depth {} pass {}", row.depth, row.pass);
            self.stats.truncated_branches += 1;
            return;
        }
        self.stats.rows_scanned += 1;

        let mut prev: Option<TileClass> = None;
        for col in row.min_col()..=row.max_col() {
            let (x, y) = quadrant.transform(col, row.depth);
            let (location, rotation) = resolve_tile(
                self.world,
                self.scratch,
                quadrant,
                &row,
                col,
                self.config.parent_strategy(),
            );
            self.scratch.set_cell(x, y, location, row.pass, rotation);

            let tile = TileClass::of(self.world, location);
            let opaque = tile.is_wall() || !tile.is_valid();
            if (opaque || row.is_symmetric(col)) && self.view.should_overwrite(x, y, row.pass) {
                self.view.set_cell(x, y, location, row.pass, rotation);
                self.stats.cells_written += 1;
                self.stats.deepest_pass = self.stats.deepest_pass.max(row.pass);
            }

            if let Some(prev) = prev {
                if prev.blocks_vision() && tile.allows_vision() {
                    row.start = Fraction::slope(col, row.depth);
                }
                if prev.allows_vision() && tile.blocks_vision() {
                    let next = Row::new(
                        row.pass,
                        row.depth + 1,
                        row.start,
                        Fraction::slope(col, row.depth),
                    );
                    self.scan(quadrant, next, level + 1);
                }
            }

            if tile.is_floor() && tile.requires_recast() && row.pass < self.config.max_pass() {
                let recast = Row::new(
                    row.pass + 1,
                    row.depth + 1,
                    row.start.max(Fraction::slope(col, row.depth)),
                    row.end.min(Fraction::opposite_slope(col, row.depth)),
                );
                log::trace!(
                    "recast through {location} at ({x}, {y}) into pass {}",
                    recast.pass
                );
                self.stats.recasts += 1;
                self.scan(quadrant, recast, level + 1);
            }

            prev = Some(tile);
        }

        if prev.is_some_and(TileClass::allows_vision) {
            self.scan(quadrant, row.next(), level + 1);
        }
    }
}

/// A visibility engine that owns its scratch buffer.
///
/// One engine serves one caller at a time; give each thread its own.
#[derive(Clone, Debug, Default)]
pub struct Shadowcaster {
    config: FovConfig,
    scratch: View,
}

impl Shadowcaster {
    /// Create an engine, validating `config`.
    pub fn new(config: FovConfig) -> Result<Self, FovError> {
        config.validate()?;
        Ok(Self {
            config,
            scratch: View::default(),
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &FovConfig {
        &self.config
    }

    /// Compute what `origin` sees into `view`. See [`calculate`].
    pub fn calculate(
        &mut self,
        world: &dyn WorldQuery,
        view: &mut View,
        origin: Location,
    ) -> ScanStats {
        calculate(world, view, &mut self.scratch, origin, &self.config)
    }

    /// The scratch buffer as left by the last calculation.
    pub fn scratch(&self) -> &View {
        &self.scratch
    }
}
