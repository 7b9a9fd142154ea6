use num_traits::{Float, FromPrimitive};
use rayon::prelude::*;

use super::WeightedStatistics;
use crate::error::{Result, StatsError};

impl<T> WeightedStatistics<T>
where
    T: Float + FromPrimitive + Send + Sync,
{
    /// Build an accumulator from paired slices on the rayon thread pool.
    ///
    /// Each worker folds a chunk into its own accumulator and the partial
    /// results are merged, so the statistics match sequential ingestion up to
    /// rounding. Any invalid observation fails the whole call.
    pub fn par_from_weighted_sequence(values: &[T], weights: &[T]) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(StatsError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }

        values
            .par_iter()
            .zip(weights.par_iter())
            .try_fold(Self::new, |mut acc, (&x, &w)| acc.add(x, w).map(|()| acc))
            .try_reduce(Self::new, |mut left, right| {
                left.merge(&right);
                Ok(left)
            })
    }
}
