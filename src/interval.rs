use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Confidence interval around a point estimate.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Interval<T> {
    /// Lower bound.
    pub lower: T,
    /// Upper bound.
    pub upper: T,
    /// Point estimate the interval is built around.
    pub estimate: T,
    /// Confidence level in (0, 1).
    pub confidence: f64,
}

impl<T: Float> Interval<T> {
    /// `[estimate - error, estimate + error]` at the given confidence.
    pub fn symmetric(estimate: T, error: T, confidence: f64) -> Self {
        Self {
            lower: estimate - error,
            upper: estimate + error,
            estimate,
            confidence,
        }
    }

    /// Whether `value` lies in `[lower, upper]`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// `upper - lower`
    #[inline]
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// Half of the width.
    #[inline]
    pub fn half_width(&self) -> T {
        self.width() / (T::one() + T::one())
    }
}

/// Renders `estimate ± half_width (level%)`, rounding both numbers to the
/// decimal of the second significant digit of the half width.
impl<T: Float + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let half = self.half_width().to_f64().unwrap_or(f64::NAN);
        let estimate = self.estimate.to_f64().unwrap_or(f64::NAN);
        let level = (self.confidence * 1e8).round() / 1e6;

        if !half.is_finite() || half <= 0.0 {
            return write!(f, "{} ± {} ({level}%)", self.estimate, self.half_width());
        }

        let decimals = (1.0 - half.log10().floor()).max(0.0) as usize;
        write!(f, "{estimate:.decimals$} ± {half:.decimals$} ({level}%)")
    }
}
