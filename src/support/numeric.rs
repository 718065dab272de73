//! Floating point comparison helpers.

/// Absolute and relative tolerances for near-equality checks.
///
/// Two values are nearly equal when their difference is within `abs`,
/// or within `rel` times the larger magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Returns `true` if `a` and `b` are equal within these tolerances.
    ///
    /// `NaN` is never nearly equal to anything.
    #[must_use]
    pub fn nearly_equal(&self, a: f64, b: f64) -> bool {
        let diff = (a - b).abs();
        if diff <= self.abs {
            return true;
        }
        diff <= self.rel * a.abs().max(b.abs())
    }

    /// Returns `true` if `value` is indistinguishable from zero.
    #[must_use]
    pub fn is_zero(&self, value: f64) -> bool {
        self.nearly_equal(value, 0.0)
    }
}
