//! One angular band of a quadrant scan.

use crate::fraction::Fraction;

/// A row of cells at a fixed depth, bounded by two slopes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row {
    /// Portal hops taken to reach this row; 1 is direct sight.
    pub pass: u8,
    /// Distance from the observer along the quadrant axis, at least 1.
    pub depth: i32,
    /// Leading edge.
    pub start: Fraction,
    /// Trailing edge.
    pub end: Fraction,
}

impl Row {
    /// The first row of every quadrant: depth 1, full 90 degree arc.
    pub fn first() -> Self {
        Self::new(1, 1, Fraction::NEG_ONE, Fraction::ONE)
    }

    /// Create a row.
    pub fn new(pass: u8, depth: i32, start: Fraction, end: Fraction) -> Self {
        debug_assert!(depth >= 1, "row depth must be at least 1, got {depth}");
        Self {
            pass,
            depth,
            start,
            end,
        }
    }

    /// Lowest column touched by this row.
    ///
    /// `depth * start` rounded to nearest, ties up; not `mul_ceil`, which
    /// would drop cells whose edge the arc only grazes.
    pub fn min_col(&self) -> i32 {
        self.start.mul_round_up(self.depth)
    }

    /// Highest column touched by this row.
    ///
    /// `depth * end` rounded to nearest, ties down; see [`Row::min_col`].
    pub fn max_col(&self) -> i32 {
        self.end.mul_round_down(self.depth)
    }

    /// The row one step further out, with the same pass and slopes.
    pub fn next(&self) -> Self {
        Self::new(self.pass, self.depth + 1, self.start, self.end)
    }

    /// Whether the centre of `col` lies inside the row's arc.
    ///
    /// Floors are only revealed when symmetric, so that if A sees B then B
    /// sees A.
    pub fn is_symmetric(&self, col: i32) -> bool {
        let col = col as i64;
        let depth = self.depth as i64;
        col * self.start.denominator() as i64 >= depth * self.start.numerator() as i64
            && col * self.end.denominator() as i64 <= depth * self.end.numerator() as i64
    }
}
