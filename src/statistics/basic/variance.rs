use num_traits::{Float, FromPrimitive};

use crate::error::Result;
use crate::sample::WeightedSample;
use crate::statistics::{Statistic, batch_moments};

/// Weighted variance.
#[derive(Debug, Clone, Copy)]
pub struct Variance {
    /// Scale by `n/(n-1)`, counting observations rather than weight.
    pub unbiased: bool,
}

impl Variance {
    /// - `unbiased = true`: `M₂/W · n/(n-1)`, needs two observations (the default)
    /// - `unbiased = false`: plug-in `M₂/W`, needs one
    pub fn new(unbiased: bool) -> Self {
        Self { unbiased }
    }

    /// Plug-in variance `M₂/W`.
    pub fn population() -> Self {
        Self::new(false)
    }
}

impl Default for Variance {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<T> Statistic<WeightedSample<T>, Result<T>> for Variance
where
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &WeightedSample<T>) -> Result<T> {
        if self.unbiased {
            Ok(batch_moments(data, 2)?.variance(data.len()))
        } else {
            Ok(batch_moments(data, 1)?.population_variance())
        }
    }
}
