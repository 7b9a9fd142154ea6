use num_traits::{Float, FromPrimitive};

use super::{Statistic, Variance};
use crate::error::Result;
use crate::math::from_usize;
use crate::sample::WeightedSample;

/// Standard error of the weighted mean.
///
/// ```text
/// SE = sqrt( variance / n )
/// ```
/// where `variance` comes from the configured [`Variance`] estimator and `n`
/// is the number of observations, not the weight sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardError {
    variance: Variance,
}

impl StandardError {
    /// Standard error built on a custom variance estimator.
    pub fn with_variance(variance: Variance) -> Self {
        Self { variance }
    }
}

impl<T> Statistic<WeightedSample<T>, Result<T>> for StandardError
where
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &WeightedSample<T>) -> Result<T> {
        let var = self.variance.compute(data)?;
        Ok((var / from_usize(data.len())).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn matches_variance_over_n() {
        let sample = WeightedSample::unweighted(vec![3.0, 4.0, 5.0, 2.0, 3.0, 4.0, 5.0, 6.0, 4.0, 7.0]);
        let se = StandardError::default().compute(&sample).unwrap();
        assert_abs_diff_eq!(se, (2.233_333_333_333_f64 / 10.0).sqrt(), epsilon = 1e-9);

        let biased = StandardError::with_variance(Variance::population()).compute(&sample).unwrap();
        assert_abs_diff_eq!(biased, (2.01_f64 / 10.0).sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn single_observation_fails() {
        let sample = WeightedSample::unweighted(vec![1.0]);
        assert_eq!(
            StandardError::default().compute(&sample),
            Err(StatsError::InsufficientSamples { required: 2, available: 1 })
        );
    }
}
