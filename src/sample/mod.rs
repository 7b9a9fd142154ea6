mod read;

pub use read::{Observation, SampleError};

use num_traits::{Float, FromPrimitive};

use crate::accumulator::WeightedStatistics;
use crate::error::{Result, StatsError};
use crate::statistics::Statistic;

/// Owned set of weighted observations for batch estimation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedSample<T> {
    values: Vec<T>,
    weights: Vec<T>,
}

impl<T> WeightedSample<T> {
    /// Pair `values` with `weights`; the two must have equal length.
    pub fn new(values: Vec<T>, weights: Vec<T>) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(StatsError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        Ok(Self { values, weights })
    }

    /// Every value with weight one.
    pub fn unweighted(values: Vec<T>) -> Self
    where
        T: Float,
    {
        let weights = vec![T::one(); values.len()];
        Self { values, weights }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sample holds no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Observed values.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Weights, aligned with [`values`](Self::values).
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Evaluate a batch statistic on this sample.
    pub fn estimate<Output>(&self, statistic: impl Statistic<Self, Output>) -> Output {
        statistic.compute(self)
    }

    /// Feed the whole sample into a fresh streaming accumulator.
    pub fn accumulate(&self) -> Result<WeightedStatistics<T>>
    where
        T: Float + FromPrimitive,
    {
        let mut stats = WeightedStatistics::new();
        stats.add_weighted_sequence(&self.values, &self.weights)?;
        Ok(stats)
    }
}

impl<T> FromIterator<(T, T)> for WeightedSample<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let (values, weights) = iter.into_iter().unzip();
        Self { values, weights }
    }
}

impl<T> FromIterator<Observation<T>> for WeightedSample<T> {
    fn from_iter<I: IntoIterator<Item = Observation<T>>>(iter: I) -> Self {
        iter.into_iter().map(|o| (o.value, o.weight)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_mismatched_lengths() {
        let err = WeightedSample::new(vec![1.0, 2.0, 3.0], vec![1.0]);
        assert_eq!(err, Err(StatsError::LengthMismatch { values: 3, weights: 1 }));
    }

    #[test]
    fn collects_pairs() {
        let sample: WeightedSample<f64> = [(1.0, 0.5), (2.0, 1.5)].into_iter().collect();

        assert_eq!(sample.len(), 2);
        assert_eq!(sample.values(), &[1.0, 2.0]);
        assert_eq!(sample.weights(), &[0.5, 1.5]);
    }

    #[test]
    fn accumulate_feeds_every_observation() {
        let sample = WeightedSample::unweighted(vec![3.0, 4.0, 5.0, 2.0, 3.0, 4.0, 5.0, 6.0, 4.0, 7.0]);
        let stats = sample.accumulate().unwrap();

        assert_eq!(stats.samples(), 10);
        assert_abs_diff_eq!(stats.mean().unwrap(), 4.3, epsilon = 1e-12);
    }

    #[test]
    fn accumulate_surfaces_invalid_weights() {
        let sample = WeightedSample::new(vec![1.0, 2.0], vec![1.0, -3.0]).unwrap();
        assert_eq!(sample.accumulate(), Err(StatsError::InvalidWeight(-3.0)));
    }
}
