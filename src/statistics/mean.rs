use num_traits::{Float, FromPrimitive};

use super::{Statistic, batch_moments};
use crate::error::Result;
use crate::sample::WeightedSample;

/// Weighted arithmetic mean `Σ wᵢxᵢ / Σ wᵢ`, accumulated with **Kahan summation**
/// so that long samples with a large dynamic range keep full precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<T> Statistic<WeightedSample<T>, Result<T>> for Mean
where
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &WeightedSample<T>) -> Result<T> {
        Ok(batch_moments(data, 1)?.mean())
    }
}
