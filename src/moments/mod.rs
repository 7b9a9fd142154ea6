//! Weighted central moments up to fourth order.
//!
//! [`CentralMoments`] holds the weighted mean together with the sums
//! `M_k = Σ wᵢ (xᵢ - x̄)ᵏ` for `k = 2, 3, 4`. It can be built one observation
//! at a time, merged pairwise, or computed in two passes over a slice; all
//! three routes feed the same bias-corrected estimators.
//!
//! # Estimators
//! With `n` observations and total weight `W`:
//!
//! ```text
//! s²  = M₂/W · n/(n-1)
//! g₁  = n²/((n-1)(n-2)) · (M₃/W) / s³
//! g₂  = n²(n+1)/((n-1)(n-2)(n-3)) · (M₄/W) / s⁴ - 3(n-1)²/((n-2)(n-3))
//! ```
//!
//! `g₁` and `g₂` match `scipy.stats.skew(bias=False)` and
//! `scipy.stats.kurtosis(fisher=True, bias=False)` for unit weights.

use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::math::{KahanSum, from_usize};

/// Weighted mean and central moment sums of a set of observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralMoments<T> {
    weight: T,
    mean: T,
    m2: T,
    m3: T,
    m4: T,
}

impl<T: Float + FromPrimitive> Default for CentralMoments<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + FromPrimitive> CentralMoments<T> {
    /// Moments of the empty set.
    pub fn new() -> Self {
        Self {
            weight: T::zero(),
            mean: T::zero(),
            m2: T::zero(),
            m3: T::zero(),
            m4: T::zero(),
        }
    }

    /// Moments of a single observation.
    fn point(value: T, weight: T) -> Self {
        Self {
            weight,
            mean: value,
            ..Self::new()
        }
    }

    /// Two-pass computation over paired slices.
    ///
    /// The first pass finds the weighted mean, the second accumulates the
    /// deviation powers; both use compensated summation. Extra elements of the
    /// longer slice are ignored, callers validate lengths.
    ///
    /// When every positively weighted value is the same, the mean is that value
    /// and the higher moments are exactly zero.
    pub fn from_weighted(values: &[T], weights: &[T]) -> Self {
        let pairs = || values.iter().zip(weights).map(|(&x, &w)| (x, w));

        let weight: KahanSum<T> = pairs().map(|(_, w)| w).collect();
        let weighted: KahanSum<T> = pairs().map(|(x, w)| w * x).collect();
        let weight = weight.sum();
        if weight.is_zero() {
            return Self {
                weight,
                ..Self::new()
            };
        }

        let (lo, hi) = pairs()
            .filter(|&(_, w)| w > T::zero())
            .fold((T::infinity(), T::neg_infinity()), |(lo, hi), (x, _)| {
                (lo.min(x), hi.max(x))
            });
        if hi <= lo {
            return Self {
                weight,
                mean: lo,
                ..Self::new()
            };
        }
        // Rounding in the weighted sum must not push the mean past the data.
        let mean = (weighted.sum() / weight).max(lo).min(hi);

        let mut s2 = KahanSum::new();
        let mut s3 = KahanSum::new();
        let mut s4 = KahanSum::new();
        for (x, w) in pairs() {
            let dev = x - mean;
            let dev2 = dev * dev;
            s2.add(w * dev2);
            s3.add(w * dev2 * dev);
            s4.add(w * dev2 * dev2);
        }

        Self {
            weight,
            mean,
            m2: s2.sum(),
            m3: s3.sum(),
            m4: s4.sum(),
        }
    }

    /// Incorporate one observation. The caller validates `weight >= 0`.
    #[inline]
    pub fn observe(&mut self, value: T, weight: T) {
        self.merge(&Self::point(value, weight));
    }

    /// Combine with the moments of a disjoint set of observations.
    ///
    /// Pairwise update of Chan et al., generalized to the third and fourth
    /// moment (Terriberry; Pébay 2008) with weights in place of counts.
    pub fn merge(&mut self, other: &Self) {
        if other.weight.is_zero() {
            return;
        }
        if self.weight.is_zero() {
            *self = *other;
            return;
        }

        let three = from_usize::<T>(3);
        let four = from_usize::<T>(4);
        let six = from_usize::<T>(6);

        let (wa, wb) = (self.weight, other.weight);
        let w = wa + wb;
        let delta = other.mean - self.mean;
        let delta2 = delta * delta;
        let delta3 = delta2 * delta;
        let delta4 = delta2 * delta2;

        let m2 = self.m2 + other.m2 + delta2 * wa * wb / w;
        let m3 = self.m3
            + other.m3
            + delta3 * wa * wb * (wa - wb) / (w * w)
            + three * delta * (wa * other.m2 - wb * self.m2) / w;
        let m4 = self.m4
            + other.m4
            + delta4 * wa * wb * (wa * wa - wa * wb + wb * wb) / (w * w * w)
            + six * delta2 * (wa * wa * other.m2 + wb * wb * self.m2) / (w * w)
            + four * delta * (wa * other.m3 - wb * self.m3) / w;

        self.mean = self.mean + delta * wb / w;
        self.weight = w;
        self.m2 = m2;
        self.m3 = m3;
        self.m4 = m4;
    }

    /// Total weight `W`.
    #[inline]
    pub fn weight(&self) -> T {
        self.weight
    }

    /// Weighted mean `Σ wᵢxᵢ / W`; zero while `W` is zero.
    #[inline]
    pub fn mean(&self) -> T {
        self.mean
    }

    /// `M₂ = Σ wᵢ (xᵢ - x̄)²`
    #[inline]
    pub fn m2(&self) -> T {
        self.m2
    }

    /// `M₃ = Σ wᵢ (xᵢ - x̄)³`
    #[inline]
    pub fn m3(&self) -> T {
        self.m3
    }

    /// `M₄ = Σ wᵢ (xᵢ - x̄)⁴`
    #[inline]
    pub fn m4(&self) -> T {
        self.m4
    }

    /// Plug-in variance `M₂/W`.
    pub fn population_variance(&self) -> T {
        self.m2 / self.weight
    }

    /// Variance with the `n/(n-1)` correction for `n` observations.
    pub fn variance(&self, n: usize) -> T {
        let n = from_usize::<T>(n);
        self.population_variance() * n / (n - T::one())
    }

    /// Plug-in skewness `(M₃/W) / (M₂/W)^{3/2}`.
    pub fn population_skewness(&self) -> T {
        let var = self.population_variance();
        (self.m3 / self.weight) / (var * var.sqrt())
    }

    /// Bias-corrected skewness for `n` observations.
    pub fn skewness(&self, n: usize) -> T {
        let sd = self.variance(n).sqrt();
        let n = from_usize::<T>(n);
        let n1 = n - T::one();
        let n2 = n1 - T::one();
        let correction = n * n / (n1 * n2);
        correction * (self.m3 / self.weight) / (sd * sd * sd)
    }

    /// Plug-in excess kurtosis `(M₄/W) / (M₂/W)² - 3`.
    pub fn population_kurtosis(&self) -> T {
        let var = self.population_variance();
        (self.m4 / self.weight) / (var * var) - from_usize::<T>(3)
    }

    /// Bias-corrected excess kurtosis for `n` observations.
    pub fn kurtosis(&self, n: usize) -> T {
        let var = self.variance(n);
        let three = from_usize::<T>(3);
        let n = from_usize::<T>(n);
        let n1 = n - T::one();
        let n2 = n1 - T::one();
        let n3 = n2 - T::one();

        let scale = n * n * (n + T::one()) / (n1 * n2 * n3);
        let shift = three * n1 * n1 / (n2 * n3);
        scale * (self.m4 / self.weight) / (var * var) - shift
    }
}
