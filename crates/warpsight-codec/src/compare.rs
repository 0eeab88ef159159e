//! View comparison with a hash fast path.
//!
//! Equal hashes short-circuit to "no divergence". On mismatch every cell
//! is compared and each differing cell is reported with both states.

use warpsight_core::{Direction, Location};
use warpsight_fov::View;

use crate::hash::view_hash;

/// Everything persisted about one view cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellState {
    /// Resolved world location.
    pub location: Location,
    /// Pass index, `0` when hidden.
    pub pass: u8,
    /// Accumulated rotation.
    pub rotation: Direction,
}

/// A single cell that differs between two views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDivergence {
    /// Local x of the cell.
    pub x: i32,
    /// Local y of the cell.
    pub y: i32,
    /// State in the expected view.
    pub expected: CellState,
    /// State in the actual view.
    pub actual: CellState,
}

/// What kind of difference was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DivergenceKind {
    /// The views have different radii; cells were not compared.
    Radius {
        /// Radius of the expected view.
        expected: u32,
        /// Radius of the actual view.
        actual: u32,
    },
    /// Same radius, these cells differ (in row-major local order).
    Cells(Vec<CellDivergence>),
}

/// Report of a mismatch between two views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewDivergence {
    /// [`view_hash`] of the expected view.
    pub expected_hash: u64,
    /// [`view_hash`] of the actual view.
    pub actual_hash: u64,
    /// Details.
    pub kind: DivergenceKind,
}

fn cell_state(view: &View, index: usize) -> CellState {
    CellState {
        location: view.locations()[index],
        pass: view.pass_indices()[index],
        rotation: view.rotations()[index],
    }
}

/// Compare `actual` against `expected`.
///
/// Returns `None` when the hashes match. Otherwise returns the radius
/// mismatch, or the full list of differing cells.
pub fn compare_views(expected: &View, actual: &View) -> Option<ViewDivergence> {
    let expected_hash = view_hash(expected);
    let actual_hash = view_hash(actual);
    if expected_hash == actual_hash {
        return None;
    }

    let kind = if expected.radius() != actual.radius() {
        DivergenceKind::Radius {
            expected: expected.radius(),
            actual: actual.radius(),
        }
    } else {
        let cells = (0..expected.cell_count())
            .filter_map(|i| {
                let (e, a) = (cell_state(expected, i), cell_state(actual, i));
                if e == a {
                    return None;
                }
                let (x, y) = expected.local_coords(i);
                Some(CellDivergence {
                    x,
                    y,
                    expected: e,
                    actual: a,
                })
            })
            .collect();
        DivergenceKind::Cells(cells)
    };

    Some(ViewDivergence {
        expected_hash,
        actual_hash,
        kind,
    })
}
