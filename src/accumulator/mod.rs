//! Weighted online statistics accumulator.
//!
//! [`WeightedStatistics`] ingests `(value, weight)` observations one at a time
//! or in bulk and answers descriptive queries at any point, in O(1) space.
//!
//! ```
//! use wstat::WeightedStatistics;
//!
//! let mut stats = WeightedStatistics::<f64>::new();
//! stats
//!     .add_weighted_sequence(&[3.0, 4.0, 5.0, 2.0], &[1.0, 1.0, 1.0, 1.0])
//!     .unwrap();
//!
//! assert_eq!(stats.samples(), 4);
//! assert!((stats.mean().unwrap() - 3.5).abs() < 1e-12);
//! ```

#[cfg(feature = "rayon")]
mod parallel;

use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{Result, StatsError, require_samples, validate};
use crate::interval::Interval;
use crate::math::{KahanSum, from_usize};
use crate::moments::CentralMoments;

/// Running weighted descriptive statistics.
///
/// Each observation counts once toward [`samples`](Self::samples) and
/// contributes to the moments in proportion to its weight. Ingestion is
/// all-or-nothing: a rejected call leaves the state untouched.
///
/// Queries take `&self` and may run concurrently against an accumulator that
/// is not being mutated. Ingestion takes `&mut self`; sharing one accumulator
/// between writer threads needs external synchronization such as a `Mutex`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedStatistics<T = f64> {
    samples: usize,
    min: T,
    max: T,
    moments: CentralMoments<T>,
    downside_samples: usize,
    downside_weight: KahanSum<T>,
    downside_squares: KahanSum<T>,
}

impl<T: Float + FromPrimitive> Default for WeightedStatistics<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + FromPrimitive> WeightedStatistics<T> {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self {
            samples: 0,
            min: T::zero(),
            max: T::zero(),
            moments: CentralMoments::new(),
            downside_samples: 0,
            downside_weight: KahanSum::new(),
            downside_squares: KahanSum::new(),
        }
    }

    /// Return to the empty state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Incorporate one observation.
    ///
    /// Fails with [`StatsError::InvalidWeight`] for a negative, NaN or infinite
    /// weight and with [`StatsError::NonFiniteValue`] for a NaN or infinite value.
    pub fn add(&mut self, value: T, weight: T) -> Result<()> {
        validate(value, weight)?;
        self.commit(value, weight);
        Ok(())
    }

    /// Incorporate one observation with weight one.
    pub fn add_value(&mut self, value: T) -> Result<()> {
        self.add(value, T::one())
    }

    /// Incorporate every value with weight one.
    ///
    /// The whole sequence is checked before anything is committed.
    pub fn add_sequence(&mut self, values: &[T]) -> Result<()> {
        for &x in values {
            validate(x, T::one())?;
        }
        for &x in values {
            self.commit(x, T::one());
        }
        Ok(())
    }

    /// Incorporate `values[i]` with weight `weights[i]` for every `i`.
    ///
    /// Fails with [`StatsError::LengthMismatch`] when the slices differ in
    /// length. The whole sequence is checked before anything is committed.
    pub fn add_weighted_sequence(&mut self, values: &[T], weights: &[T]) -> Result<()> {
        if values.len() != weights.len() {
            return Err(StatsError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        for (&x, &w) in values.iter().zip(weights) {
            validate(x, w)?;
        }
        for (&x, &w) in values.iter().zip(weights) {
            self.commit(x, w);
        }
        Ok(())
    }

    fn commit(&mut self, value: T, weight: T) {
        if self.samples == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.samples += 1;
        self.moments.observe(value, weight);

        if value < T::zero() {
            self.downside_samples += 1;
            self.downside_weight.add(weight);
            self.downside_squares.add(weight * value * value);
        }
    }

    /// Fold in an accumulator built over a disjoint set of observations.
    ///
    /// The result matches a single accumulator fed both sets, up to rounding.
    pub fn merge(&mut self, other: &Self) {
        if other.samples == 0 {
            return;
        }
        if self.samples == 0 {
            self.min = other.min;
            self.max = other.max;
        } else {
            self.min = self.min.min(other.min);
            self.max = self.max.max(other.max);
        }
        self.samples += other.samples;
        self.moments.merge(&other.moments);
        self.downside_samples += other.downside_samples;
        self.downside_weight.merge(&other.downside_weight);
        self.downside_squares.merge(&other.downside_squares);
    }

    /// Number of observations added since creation or the last reset.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Whether no observation has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Sum of the weights.
    #[inline]
    pub fn weight_sum(&self) -> T {
        self.moments.weight()
    }

    /// Smallest value observed.
    pub fn min(&self) -> Result<T> {
        require_samples(1, self.samples)?;
        Ok(self.min)
    }

    /// Largest value observed.
    pub fn max(&self) -> Result<T> {
        require_samples(1, self.samples)?;
        Ok(self.max)
    }

    /// Weighted mean `Σ wᵢxᵢ / Σ wᵢ`.
    pub fn mean(&self) -> Result<T> {
        self.moments_for(1)?;
        Ok(self.moments.mean())
    }

    /// Weighted sample variance with the `n/(n-1)` correction.
    pub fn variance(&self) -> Result<T> {
        self.moments_for(2)?;
        Ok(self.moments.variance(self.samples))
    }

    /// Square root of [`variance`](Self::variance).
    pub fn standard_deviation(&self) -> Result<T> {
        self.variance().map(T::sqrt)
    }

    /// Standard error of the mean, `sqrt(variance / n)`.
    pub fn error_estimate(&self) -> Result<T> {
        let var = self.variance()?;
        Ok((var / from_usize(self.samples)).sqrt())
    }

    /// Bias-corrected weighted skewness. Needs three observations.
    pub fn skewness(&self) -> Result<T> {
        self.moments_for(3)?;
        self.nonzero_variance()?;
        Ok(self.moments.skewness(self.samples))
    }

    /// Bias-corrected weighted excess kurtosis. Needs four observations.
    pub fn kurtosis(&self) -> Result<T> {
        self.moments_for(4)?;
        self.nonzero_variance()?;
        Ok(self.moments.kurtosis(self.samples))
    }

    /// Semi-variance about zero over the negative observations,
    /// `Σ wᵢxᵢ² / Σ wᵢ · n₋/(n₋-1)` with sums over `xᵢ < 0`.
    pub fn downside_variance(&self) -> Result<T> {
        require_samples(1, self.samples)?;
        if self.downside_samples < 2 {
            return Err(StatsError::InsufficientSamples {
                required: 2,
                available: self.downside_samples,
            });
        }
        let weight = self.downside_weight.sum();
        if weight.is_zero() {
            return Err(StatsError::ZeroWeightSum);
        }
        let n: T = from_usize(self.downside_samples);
        Ok(self.downside_squares.sum() / weight * n / (n - T::one()))
    }

    /// Square root of [`downside_variance`](Self::downside_variance).
    pub fn downside_deviation(&self) -> Result<T> {
        self.downside_variance().map(T::sqrt)
    }

    /// Student-t confidence interval for the mean at `level`, e.g. `0.95`.
    pub fn mean_confidence_interval(&self, level: f64) -> Result<Interval<T>> {
        if !(level > 0.0 && level < 1.0) {
            return Err(StatsError::InvalidConfidence(level));
        }
        let se = self.error_estimate()?;
        let mean = self.moments.mean();

        let dof = (self.samples - 1) as f64;
        let dist = StudentsT::new(0.0, 1.0, dof)
            .map_err(|e| StatsError::Distribution(e.to_string()))?;
        let quantile = dist.inverse_cdf(0.5 + level / 2.0);
        let t = T::from_f64(quantile)
            .ok_or_else(|| StatsError::Distribution(format!("quantile {quantile} not representable")))?;

        Ok(Interval::symmetric(mean, t * se, level))
    }

    fn moments_for(&self, required: usize) -> Result<()> {
        require_samples(required, self.samples)?;
        if self.moments.weight().is_zero() {
            return Err(StatsError::ZeroWeightSum);
        }
        Ok(())
    }

    fn nonzero_variance(&self) -> Result<()> {
        if self.moments.m2().is_zero() {
            return Err(StatsError::ZeroVariance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const DATA: [f64; 10] = [3.0, 4.0, 5.0, 2.0, 3.0, 4.0, 5.0, 6.0, 4.0, 7.0];

    fn reference() -> WeightedStatistics {
        let mut s = WeightedStatistics::new();
        s.add_weighted_sequence(&DATA, &[1.0; 10]).unwrap();
        s
    }

    #[test]
    fn reference_dataset() {
        let s = reference();

        assert_eq!(s.samples(), 10);
        assert_abs_diff_eq!(s.weight_sum(), 10.0);
        assert_abs_diff_eq!(s.min().unwrap(), 2.0);
        assert_abs_diff_eq!(s.max().unwrap(), 7.0);
        assert_abs_diff_eq!(s.mean().unwrap(), 4.3, epsilon = 1e-9);
        assert_abs_diff_eq!(s.variance().unwrap(), 2.233_333_333_33, epsilon = 1e-9);
        assert_abs_diff_eq!(s.standard_deviation().unwrap(), 1.494_434_118_1, epsilon = 1e-9);
        assert_abs_diff_eq!(s.skewness().unwrap(), 0.359_543_071_407, epsilon = 1e-9);
        assert_abs_diff_eq!(s.kurtosis().unwrap(), -0.151_799_637_209, epsilon = 1e-9);
        assert_abs_diff_eq!(s.error_estimate().unwrap(), (2.233_333_333_333_f64 / 10.0).sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn empty_queries_fail() {
        let s = WeightedStatistics::<f64>::new();

        assert!(s.is_empty());
        assert_eq!(s.min(), Err(StatsError::EmptyAccumulator));
        assert_eq!(s.max(), Err(StatsError::EmptyAccumulator));
        assert_eq!(s.mean(), Err(StatsError::EmptyAccumulator));
        assert_eq!(s.variance(), Err(StatsError::EmptyAccumulator));
        assert_eq!(s.kurtosis(), Err(StatsError::EmptyAccumulator));
    }

    #[test]
    fn sample_thresholds() {
        let mut s = WeightedStatistics::new();
        s.add_value(1.0).unwrap();
        assert!(s.mean().is_ok());
        let one = Err(StatsError::InsufficientSamples { required: 2, available: 1 });
        assert_eq!(s.variance(), one);
        assert_eq!(s.standard_deviation(), one);
        assert_eq!(s.error_estimate(), one);

        s.add_value(2.0).unwrap();
        assert!(s.variance().is_ok());
        assert_eq!(s.skewness(), Err(StatsError::InsufficientSamples { required: 3, available: 2 }));

        s.add_value(4.0).unwrap();
        assert!(s.skewness().is_ok());
        assert_eq!(s.kurtosis(), Err(StatsError::InsufficientSamples { required: 4, available: 3 }));

        s.add_value(8.0).unwrap();
        assert!(s.kurtosis().is_ok());
    }

    #[test]
    fn rejected_observations_have_no_effect() {
        let mut s = reference();
        let before = s.clone();

        assert_eq!(s.add(5.0, -1.0), Err(StatsError::InvalidWeight(-1.0)));
        assert!(matches!(s.add(5.0, f64::NAN), Err(StatsError::InvalidWeight(_))));
        assert!(matches!(s.add(5.0, f64::INFINITY), Err(StatsError::InvalidWeight(_))));
        assert!(matches!(s.add(f64::NAN, 1.0), Err(StatsError::NonFiniteValue(_))));
        assert_eq!(
            s.add_weighted_sequence(&[1.0, 2.0, 3.0], &[1.0, -2.0, 1.0]),
            Err(StatsError::InvalidWeight(-2.0))
        );
        assert_eq!(
            s.add_weighted_sequence(&[1.0, 2.0], &[1.0]),
            Err(StatsError::LengthMismatch { values: 2, weights: 1 })
        );
        assert_eq!(
            s.add_sequence(&[1.0, f64::NEG_INFINITY]),
            Err(StatsError::NonFiniteValue(f64::NEG_INFINITY))
        );

        assert_eq!(s, before);
    }

    #[test]
    fn reset_returns_to_empty() {
        let mut s = reference();
        s.reset();

        assert_eq!(s.samples(), 0);
        assert_abs_diff_eq!(s.weight_sum(), 0.0);
        assert_eq!(s.mean(), Err(StatsError::EmptyAccumulator));
        assert_eq!(s, WeightedStatistics::new());
    }

    #[test]
    fn zero_weights() {
        let mut s = WeightedStatistics::new();
        s.add(3.0, 0.0).unwrap();
        s.add(-1.0, 0.0).unwrap();

        assert_eq!(s.samples(), 2);
        assert_abs_diff_eq!(s.min().unwrap(), -1.0);
        assert_abs_diff_eq!(s.max().unwrap(), 3.0);
        assert_eq!(s.mean(), Err(StatsError::ZeroWeightSum));

        // A zero-weight outlier widens the range but leaves the mean alone.
        s.add(10.0, 2.0).unwrap();
        s.add(100.0, 0.0).unwrap();
        assert_abs_diff_eq!(s.mean().unwrap(), 10.0);
        assert_abs_diff_eq!(s.max().unwrap(), 100.0);
    }

    #[test]
    fn constant_data_has_no_shape() {
        let mut s = WeightedStatistics::new();
        s.add_sequence(&[2.5; 6]).unwrap();

        assert_abs_diff_eq!(s.variance().unwrap(), 0.0);
        assert_eq!(s.skewness(), Err(StatsError::ZeroVariance));
        assert_eq!(s.kurtosis(), Err(StatsError::ZeroVariance));
    }

    #[test]
    fn merge_with_empty_sides() {
        let mut s = reference();
        s.merge(&WeightedStatistics::new());
        assert_eq!(s, reference());

        let mut empty = WeightedStatistics::new();
        empty.merge(&reference());
        assert_eq!(empty.samples(), 10);
        assert_abs_diff_eq!(empty.min().unwrap(), 2.0);
        assert_abs_diff_eq!(empty.kurtosis().unwrap(), -0.151_799_637_209, epsilon = 1e-9);
    }

    #[test]
    fn downside_variance_over_negative_values() {
        let mut s = WeightedStatistics::new();
        s.add_weighted_sequence(&[-1.0, 2.0, -3.0, 4.0], &[1.0, 1.0, 2.0, 1.0])
            .unwrap();

        // (1·1 + 2·9) / 3 · 2/1
        assert_abs_diff_eq!(s.downside_variance().unwrap(), 19.0 / 3.0 * 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.downside_deviation().unwrap(), (38.0_f64 / 3.0).sqrt(), epsilon = 1e-12);

        let mut upside = WeightedStatistics::new();
        upside.add_sequence(&[1.0, 2.0, -0.5]).unwrap();
        assert_eq!(
            upside.downside_variance(),
            Err(StatsError::InsufficientSamples { required: 2, available: 1 })
        );
    }

    #[test]
    fn mean_confidence_interval() {
        let s = reference();
        let ci = s.mean_confidence_interval(0.95).unwrap();

        // t(0.975, 9) = 2.262157...
        let half = 2.262_157_162_8 * s.error_estimate().unwrap();
        assert_abs_diff_eq!(ci.estimate, 4.3, epsilon = 1e-9);
        assert_abs_diff_eq!(ci.half_width(), half, epsilon = 1e-4);
        assert!(ci.contains(4.3));

        assert_eq!(s.mean_confidence_interval(1.0), Err(StatsError::InvalidConfidence(1.0)));
        assert!(s.mean_confidence_interval(f64::NAN).is_err());
    }
}
