//! Exact rational slopes.
//!
//! Every slope the scanner handles is a ratio of small integers. Keeping
//! them as unreduced fractions and comparing by cross-multiplication makes
//! the symmetric-cell test and the row bounds bit-exact at any depth.

use std::cmp::Ordering;
use std::fmt;

/// A rational number with a strictly positive denominator.
///
/// Fractions are never reduced: `1/2` and `2/4` are equal under
/// comparison but keep their own representation.
#[derive(Clone, Copy, Debug)]
pub struct Fraction {
    num: i32,
    den: i32,
}

impl Fraction {
    /// `-1/1`, the left edge of a quadrant.
    pub const NEG_ONE: Fraction = Fraction { num: -1, den: 1 };

    /// `1/1`, the right edge of a quadrant.
    pub const ONE: Fraction = Fraction { num: 1, den: 1 };

    /// Create `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if `den <= 0`.
    pub fn new(num: i32, den: i32) -> Self {
        assert!(den > 0, "fraction denominator must be positive, got {den}");
        Self { num, den }
    }

    /// Slope of the leading (low-column) edge of cell `(col, row)`.
    pub fn slope(col: i32, row: i32) -> Self {
        Self::new(2 * col - 1, 2 * row)
    }

    /// Slope through the centre of cell `(col, row)`.
    pub fn center_slope(col: i32, row: i32) -> Self {
        Self::new(col, row)
    }

    /// Slope of the trailing (high-column) edge of cell `(col, row)`.
    pub fn opposite_slope(col: i32, row: i32) -> Self {
        Self::new(2 * col + 1, 2 * row)
    }

    /// The numerator.
    pub fn numerator(self) -> i32 {
        self.num
    }

    /// The denominator (always positive).
    pub fn denominator(self) -> i32 {
        self.den
    }

    /// `value * self` rounded to the nearest integer, ties toward +inf.
    pub fn mul_round_up(self, value: i32) -> i32 {
        let (n, d) = (self.num as i128, self.den as i128);
        let v = value as i128;
        (2 * v * n + d).div_euclid(2 * d) as i32
    }

    /// `value * self` rounded to the nearest integer, ties toward -inf.
    pub fn mul_round_down(self, value: i32) -> i32 {
        let (n, d) = (self.num as i128, self.den as i128);
        let v = value as i128;
        -((d - 2 * v * n).div_euclid(2 * d)) as i32
    }

    /// `ceil(value * self)`.
    pub fn mul_ceil(self, value: i32) -> i32 {
        let p = value as i128 * self.num as i128;
        -((-p).div_euclid(self.den as i128)) as i32
    }

    /// `floor(value * self)`.
    pub fn mul_floor(self, value: i32) -> i32 {
        (value as i128 * self.num as i128).div_euclid(self.den as i128) as i32
    }

    fn cross(self, other: Fraction) -> (i64, i64) {
        (
            self.num as i64 * other.den as i64,
            other.num as i64 * self.den as i64,
        )
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = self.cross(*other);
        a == b
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.cross(*other);
        a.cmp(&b)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Comparison ──────────────────────────────────────────────

    #[test]
    fn equal_without_reduction() {
        let half = Fraction::new(1, 2);
        let two_quarters = Fraction::new(2, 4);
        assert_eq!(half, two_quarters);
        assert_eq!(two_quarters.numerator(), 2);
        assert_eq!(two_quarters.to_string(), "2/4");
    }

    #[test]
    fn ordering_by_cross_multiplication() {
        assert!(Fraction::new(-1, 4) < Fraction::new(1, 4));
        assert!(Fraction::new(3, 8) > Fraction::new(1, 4));
        assert_eq!(
            Fraction::new(-1, 4).max(Fraction::slope(0, 2)),
            Fraction::new(-1, 4)
        );
        assert_eq!(Fraction::ONE.min(Fraction::opposite_slope(0, 2)), Fraction::new(1, 4));
    }

    #[test]
    #[should_panic(expected = "denominator must be positive")]
    fn zero_denominator_panics() {
        let _ = Fraction::new(1, 0);
    }

    // ── Cell slopes ─────────────────────────────────────────────

    #[test]
    fn cell_slopes_bracket_centre() {
        let (c, r) = (3, 7);
        let lo = Fraction::slope(c, r);
        let mid = Fraction::center_slope(c, r);
        let hi = Fraction::opposite_slope(c, r);
        assert!(lo < mid && mid < hi);
        assert_eq!(lo, Fraction::new(5, 14));
        assert_eq!(hi, Fraction::new(7, 14));
    }

    // ── Directed rounding ───────────────────────────────────────

    #[test]
    fn rounding_ties() {
        // 3 * 1/2 = 1.5
        let half = Fraction::new(1, 2);
        assert_eq!(half.mul_round_up(3), 2);
        assert_eq!(half.mul_round_down(3), 1);
        // 3 * -1/2 = -1.5
        let neg_half = Fraction::new(-1, 2);
        assert_eq!(neg_half.mul_round_up(3), -1);
        assert_eq!(neg_half.mul_round_down(3), -2);
    }

    #[test]
    fn rounding_row_bounds() {
        // Quadrant edges at depth d cover columns -d..=d.
        for d in 1..20 {
            assert_eq!(Fraction::NEG_ONE.mul_round_up(d), -d);
            assert_eq!(Fraction::ONE.mul_round_down(d), d);
        }
        // Slopes at depth 1000.
        let s = Fraction::slope(1, 2); // 1/4
        assert_eq!(s.mul_round_up(1000), 250);
        assert_eq!(s.mul_round_down(1000), 250);
        let s = Fraction::new(1, 8);
        assert_eq!(s.mul_round_up(1004), 126); // 125.5
        assert_eq!(s.mul_round_down(1004), 125);
    }

    #[test]
    fn ceil_and_floor() {
        let f = Fraction::new(-1, 4);
        assert_eq!(f.mul_ceil(3), 0);
        assert_eq!(f.mul_floor(3), -1);
        assert_eq!(f.mul_ceil(4), -1);
        assert_eq!(f.mul_floor(4), -1);
        assert_eq!(Fraction::new(7, 3).mul_ceil(1000), 2334);
        assert_eq!(Fraction::new(7, 3).mul_floor(1000), 2333);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn round_up_is_nearest_ties_up(
            num in -20_001i32..20_001,
            den in 1i32..20_001,
            value in 0i32..4097,
        ) {
            let f = Fraction::new(num, den);
            let r = f.mul_round_up(value) as i128;
            // 2d*r - 2vn in (-d, d]
            let e = 2 * den as i128 * r - 2 * value as i128 * num as i128;
            prop_assert!(e > -(den as i128) && e <= den as i128);
        }

        #[test]
        fn round_down_is_nearest_ties_down(
            num in -20_001i32..20_001,
            den in 1i32..20_001,
            value in 0i32..4097,
        ) {
            let f = Fraction::new(num, den);
            let r = f.mul_round_down(value) as i128;
            // 2d*r - 2vn in [-d, d)
            let e = 2 * den as i128 * r - 2 * value as i128 * num as i128;
            prop_assert!(e >= -(den as i128) && e < den as i128);
        }

        #[test]
        fn ceil_floor_bracket_exact_product(
            num in -20_001i32..20_001,
            den in 1i32..20_001,
            value in 0i32..4097,
        ) {
            let f = Fraction::new(num, den);
            let p = value as i128 * num as i128;
            let d = den as i128;
            let c = f.mul_ceil(value) as i128;
            let fl = f.mul_floor(value) as i128;
            prop_assert!(c * d >= p && (c - 1) * d < p);
            prop_assert!(fl * d <= p && (fl + 1) * d > p);
        }

        #[test]
        fn ordering_matches_exact_comparison(
            a in -500i32..500, b in 1i32..500,
            c in -500i32..500, d in 1i32..500,
        ) {
            let lhs = Fraction::new(a, b);
            let rhs = Fraction::new(c, d);
            let expected = (a as i64 * d as i64).cmp(&(c as i64 * b as i64));
            prop_assert_eq!(lhs.cmp(&rhs), expected);
            prop_assert_eq!(lhs == rhs, expected == Ordering::Equal);
        }
    }
}
